//! CMASK: color compression mask metadata for MSAA surfaces.
//!
//! A CMASK element is one nibble per 8x8 tile, so address queries return a
//! bit position alongside the byte address.

use gfx10_swizzle::dim::{log2, pow2_align};
use gfx10_swizzle::mode::SwizzleMode;
use gfx10_swizzle::pattern::{offset_from_pattern, HTILE_PATIDX, HTILE_PATTERN};
use gfx10_swizzle::ResourceType;

use super::{MetaDataType, MetaFlags, MetaMipInfo};
use crate::engine::Gfx10AddrLib;
use crate::error::{AddrError, AddrResult};
use crate::surface::AddressResult;

/// CMASK layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmaskRequest {
    /// Metadata flags; CMASK must be pipe aligned.
    pub flags: MetaFlags,
    /// Swizzle mode of the color/FMask surface.
    pub swizzle_mode: SwizzleMode,
    /// Resource type; only 2D is legal.
    pub resource_type: ResourceType,
    /// Color surface width before padding.
    pub unaligned_width: u32,
    /// Color surface height before padding.
    pub unaligned_height: u32,
    /// Color surface slice count.
    pub num_slices: u32,
    /// Color surface mip level count.
    pub num_mip_levels: u32,
    /// First mip level in the color surface's mip tail.
    pub first_mip_id_in_tail: u32,
}

/// CMASK layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmaskInfo {
    /// Padded width in color-surface texels.
    pub pitch: u32,
    /// Padded height in color-surface texels.
    pub height: u32,
    /// Base alignment in bytes.
    pub base_align: u32,
    /// Metadata block width in color-surface texels.
    pub meta_blk_width: u32,
    /// Metadata block height in color-surface texels.
    pub meta_blk_height: u32,
    /// Metadata blocks per color slice.
    pub meta_blk_num_per_slice: u32,
    /// CMASK bytes per color slice.
    pub slice_size: u32,
    /// Total CMASK bytes.
    pub cmask_bytes: u32,
    /// Per-mip metadata layout.
    pub mips: Vec<MetaMipInfo>,
}

/// CMASK address request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmaskAddrRequest {
    /// Metadata flags.
    pub flags: MetaFlags,
    /// Swizzle mode of the color/FMask surface.
    pub swizzle_mode: SwizzleMode,
    /// Resource type; only 2D is legal.
    pub resource_type: ResourceType,
    /// Color surface width before padding.
    pub unaligned_width: u32,
    /// Color surface height before padding.
    pub unaligned_height: u32,
    /// Color surface slice count.
    pub num_slices: u32,
    /// Color surface sample count.
    pub num_samples: u32,
    /// Color surface fragment count.
    pub num_frags: u32,
    /// X coordinate in color-surface texels.
    pub x: u32,
    /// Y coordinate in color-surface texels.
    pub y: u32,
    /// Slice index.
    pub slice: u32,
    /// Pipe-bank XOR seed of the surface.
    pub pipe_xor: u32,
}

impl Gfx10AddrLib {
    fn cmask_mode_ok(&self, mode: SwizzleMode) -> bool {
        mode == SwizzleMode::Z64kbX
            || (mode == SwizzleMode::ZVarX && self.config.block_var_size_log2 != 0)
    }

    /// Computes the CMASK layout for an MSAA color surface.
    pub fn compute_cmask_info(&self, req: &CmaskRequest) -> AddrResult<CmaskInfo> {
        if req.resource_type != ResourceType::Tex2d
            || !req.flags.pipe_aligned
            || !self.cmask_mode_ok(req.swizzle_mode)
        {
            log::debug!("cmask requires a pipe-aligned 2D Z-order XOR surface");
            return Err(AddrError::InvalidParams);
        }

        let (meta_blk_size, meta_blk) = self.meta_block_size(
            MetaDataType::Fmask,
            ResourceType::Tex2d,
            req.swizzle_mode,
            0,
            0,
            true,
        );

        let pitch = pow2_align(req.unaligned_width, meta_blk.w);
        let height = pow2_align(req.unaligned_height, meta_blk.h);
        let num_mip_levels = req.num_mip_levels.max(1);
        let mut mips = vec![MetaMipInfo::default(); num_mip_levels as usize];

        let meta_blk_num_per_slice;
        if req.num_mip_levels > 1 {
            debug_assert!(req.first_mip_id_in_tail <= req.num_mip_levels);
            let mut blk_per_slice = u32::from(req.first_mip_id_in_tail != req.num_mip_levels);

            for i in (0..req.first_mip_id_in_tail).rev() {
                let mip_width = pow2_align((req.unaligned_width >> i).max(1), meta_blk.w);
                let mip_height = pow2_align((req.unaligned_height >> i).max(1), meta_blk.h);
                let pitch_in_blk = mip_width / meta_blk.w;
                let height_in_blk = mip_height / meta_blk.h;

                let mip = &mut mips[i as usize];
                mip.in_mip_tail = false;
                mip.offset = blk_per_slice * meta_blk_size;
                mip.slice_size = pitch_in_blk * height_in_blk * meta_blk_size;
                blk_per_slice += pitch_in_blk * height_in_blk;
            }

            meta_blk_num_per_slice = blk_per_slice;

            for i in req.first_mip_id_in_tail..req.num_mip_levels {
                let mip = &mut mips[i as usize];
                mip.in_mip_tail = true;
                mip.offset = 0;
                mip.slice_size = 0;
            }
            if req.first_mip_id_in_tail != req.num_mip_levels {
                mips[req.first_mip_id_in_tail as usize].slice_size = meta_blk_size;
            }
        } else {
            meta_blk_num_per_slice = (pitch / meta_blk.w) * (height / meta_blk.h);
            mips[0] = MetaMipInfo {
                in_mip_tail: false,
                offset: 0,
                slice_size: meta_blk_num_per_slice * meta_blk_size,
            };
        }

        let slice_size = meta_blk_num_per_slice * meta_blk_size;
        Ok(CmaskInfo {
            pitch,
            height,
            base_align: meta_blk_size,
            meta_blk_width: meta_blk.w,
            meta_blk_height: meta_blk.h,
            meta_blk_num_per_slice,
            slice_size,
            cmask_bytes: slice_size * req.num_slices,
            mips,
        })
    }

    /// Resolves a color-surface coordinate to its CMASK nibble.
    pub fn compute_cmask_addr_from_coord(
        &self,
        req: &CmaskAddrRequest,
    ) -> AddrResult<AddressResult> {
        debug_assert!(req.flags.pipe_aligned);

        let info = self.compute_cmask_info(&CmaskRequest {
            flags: req.flags,
            swizzle_mode: req.swizzle_mode,
            resource_type: req.resource_type,
            unaligned_width: req.unaligned_width.max(1),
            unaligned_height: req.unaligned_height.max(1),
            num_slices: req.num_slices.max(1),
            num_mip_levels: 1,
            first_mip_id_in_tail: 1,
        })?;

        let fmask_bpp = self.fmask_bpp(req.num_samples, req.num_frags);
        let fmask_elem_log2 = log2(fmask_bpp >> 3);
        let pipe_mask = (1 << self.config.pipes_log2) - 1;
        let index = (self.xmask_base_index + fmask_elem_log2) as usize;
        let pattern = &HTILE_PATTERN[HTILE_PATIDX[index] as usize];

        let blk_size_log2 = log2(info.meta_blk_width) + log2(info.meta_blk_height) - 7;
        let blk_mask = (1u32 << blk_size_log2) - 1;
        let blk_offset =
            offset_from_pattern(pattern, blk_size_log2 + 1, req.x, req.y, req.slice, 0);

        let xb = req.x / info.meta_blk_width;
        let yb = req.y / info.meta_blk_height;
        let pb = info.pitch / info.meta_blk_width;
        let blk_index = yb * pb + xb;
        let pipe_xor =
            ((req.pipe_xor & pipe_mask) << self.config.pipe_interleave_log2) & blk_mask;

        Ok(AddressResult {
            addr: u64::from(info.slice_size) * u64::from(req.slice)
                + (u64::from(blk_index) << blk_size_log2)
                + u64::from((blk_offset >> 1) ^ pipe_xor),
            bit_position: (blk_offset & 1) << 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn cmask_request() -> CmaskRequest {
        CmaskRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Z64kbX,
            resource_type: ResourceType::Tex2d,
            unaligned_width: 512,
            unaligned_height: 512,
            num_slices: 1,
            num_mip_levels: 1,
            first_mip_id_in_tail: 1,
        }
    }

    #[test]
    fn cmask_info_pads_and_aligns() {
        let lib = navi21_4pipe();
        let info = lib.compute_cmask_info(&cmask_request()).unwrap();
        assert_eq!(info.pitch % info.meta_blk_width, 0);
        assert_eq!(info.height % info.meta_blk_height, 0);
        assert_eq!(info.base_align, info.slice_size / info.meta_blk_num_per_slice);
        // One nibble per 8x8 tile.
        assert_eq!(
            info.slice_size,
            info.meta_blk_num_per_slice * (info.meta_blk_width * info.meta_blk_height / 128)
        );
    }

    #[test]
    fn cmask_rejects_3d_surfaces() {
        let lib = navi21_4pipe();
        let mut req = cmask_request();
        req.resource_type = ResourceType::Tex3d;
        assert_eq!(lib.compute_cmask_info(&req), Err(AddrError::InvalidParams));
    }

    #[test]
    fn cmask_addr_reports_nibble_position() {
        let lib = navi21_4pipe();
        let req = CmaskAddrRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Z64kbX,
            resource_type: ResourceType::Tex2d,
            unaligned_width: 512,
            unaligned_height: 512,
            num_slices: 1,
            num_samples: 4,
            num_frags: 4,
            x: 0,
            y: 0,
            slice: 0,
            pipe_xor: 0,
        };
        let out = lib.compute_cmask_addr_from_coord(&req).unwrap();
        assert_eq!(out.addr, 0);
        assert!(out.bit_position == 0 || out.bit_position == 4);
    }
}
