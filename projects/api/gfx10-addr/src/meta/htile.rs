//! HTILE: depth/stencil compression metadata.

use gfx10_swizzle::dim::{log2, pow2_align};
use gfx10_swizzle::mode::SwizzleMode;
use gfx10_swizzle::pattern::{offset_from_pattern, HTILE_PATIDX, HTILE_PATTERN};
use gfx10_swizzle::ResourceType;

use super::{MetaDataType, MetaFlags, MetaMipInfo};
use crate::engine::Gfx10AddrLib;
use crate::error::{AddrError, AddrResult};
use crate::surface::AddressResult;

/// HTILE layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtileRequest {
    /// Metadata flags; HTILE must be pipe aligned.
    pub flags: MetaFlags,
    /// Swizzle mode of the depth surface.
    pub swizzle_mode: SwizzleMode,
    /// Depth surface width before padding.
    pub unaligned_width: u32,
    /// Depth surface height before padding.
    pub unaligned_height: u32,
    /// Depth surface slice count.
    pub num_slices: u32,
    /// Depth surface mip level count.
    pub num_mip_levels: u32,
    /// First mip level in the depth surface's mip tail.
    pub first_mip_id_in_tail: u32,
}

/// HTILE layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtileInfo {
    /// Padded width in depth-surface texels.
    pub pitch: u32,
    /// Padded height in depth-surface texels.
    pub height: u32,
    /// Base alignment in bytes.
    pub base_align: u32,
    /// Metadata block width in depth-surface texels.
    pub meta_blk_width: u32,
    /// Metadata block height in depth-surface texels.
    pub meta_blk_height: u32,
    /// Metadata blocks per depth slice.
    pub meta_blk_num_per_slice: u32,
    /// HTILE bytes per depth slice.
    pub slice_size: u32,
    /// Total HTILE bytes.
    pub htile_bytes: u32,
    /// Per-mip metadata layout.
    pub mips: Vec<MetaMipInfo>,
}

/// HTILE address request; layout fields as returned by
/// [`Gfx10AddrLib::compute_htile_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtileAddrRequest {
    /// Metadata flags.
    pub flags: MetaFlags,
    /// Swizzle mode of the depth surface.
    pub swizzle_mode: SwizzleMode,
    /// Depth surface width before padding.
    pub unaligned_width: u32,
    /// Depth surface height before padding.
    pub unaligned_height: u32,
    /// Depth surface slice count.
    pub num_slices: u32,
    /// Depth surface mip level count.
    pub num_mip_levels: u32,
    /// Depth surface sample count.
    pub num_samples: u32,
    /// X coordinate in depth-surface texels.
    pub x: u32,
    /// Y coordinate in depth-surface texels.
    pub y: u32,
    /// Slice index.
    pub slice: u32,
    /// Pipe-bank XOR seed of the depth surface.
    pub pipe_xor: u32,
}

impl Gfx10AddrLib {
    fn htile_mode_ok(&self, mode: SwizzleMode) -> bool {
        mode == SwizzleMode::Z64kbX
            || (mode == SwizzleMode::ZVarX && self.config.block_var_size_log2 != 0)
    }

    /// Computes the HTILE layout for a depth surface.
    pub fn compute_htile_info(&self, req: &HtileRequest) -> AddrResult<HtileInfo> {
        if !self.htile_mode_ok(req.swizzle_mode) || !req.flags.pipe_aligned {
            log::debug!("htile requires a pipe-aligned Z-order XOR mode");
            return Err(AddrError::InvalidParams);
        }

        let (meta_blk_size, meta_blk) = self.meta_block_size(
            MetaDataType::DepthStencil,
            ResourceType::Tex2d,
            req.swizzle_mode,
            0,
            0,
            true,
        );

        let pitch = pow2_align(req.unaligned_width, meta_blk.w);
        let height = pow2_align(req.unaligned_height, meta_blk.h);
        let base_align = meta_blk_size.max(1 << (self.config.pipes_log2 + 11));
        let num_mip_levels = req.num_mip_levels.max(1);
        let mut mips = vec![MetaMipInfo::default(); num_mip_levels as usize];

        let (slice_size, meta_blk_num_per_slice);
        if req.num_mip_levels > 1 {
            debug_assert!(req.first_mip_id_in_tail <= req.num_mip_levels);
            let mut offset = if req.first_mip_id_in_tail == req.num_mip_levels {
                0
            } else {
                meta_blk_size
            };

            for i in (0..req.first_mip_id_in_tail).rev() {
                let mip_width = pow2_align(
                    (req.unaligned_width >> i).max(1),
                    meta_blk.w,
                );
                let mip_height = pow2_align(
                    (req.unaligned_height >> i).max(1),
                    meta_blk.h,
                );
                let pitch_in_blk = mip_width / meta_blk.w;
                let height_in_blk = mip_height / meta_blk.h;
                let mip_slice_size = pitch_in_blk * height_in_blk * meta_blk_size;

                let mip = &mut mips[i as usize];
                mip.in_mip_tail = false;
                mip.offset = offset;
                mip.slice_size = mip_slice_size;
                offset += mip_slice_size;
            }

            slice_size = offset;
            meta_blk_num_per_slice = offset / meta_blk_size;

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
            let pitch_in_blk = pitch / meta_blk.w;
            let height_in_blk = height / meta_blk.h;
            meta_blk_num_per_slice = pitch_in_blk * height_in_blk;
            slice_size = meta_blk_num_per_slice * meta_blk_size;
            mips[0] = MetaMipInfo {
                in_mip_tail: false,
                offset: 0,
                slice_size,
            };
        }

        Ok(HtileInfo {
            pitch,
            height,
            base_align,
            meta_blk_width: meta_blk.w,
            meta_blk_height: meta_blk.h,
            meta_blk_num_per_slice,
            slice_size,
            htile_bytes: slice_size * req.num_slices,
            mips,
        })
    }

    /// Resolves a depth-surface coordinate to its HTILE byte address.
    ///
    /// Multi-mip HTILE addressing is a documented gap and returns
    /// [`AddrError::NotImplemented`].
    pub fn compute_htile_addr_from_coord(
        &self,
        req: &HtileAddrRequest,
    ) -> AddrResult<AddressResult> {
        if req.num_mip_levels > 1 {
            return Err(AddrError::NotImplemented);
        }

        let info = self.compute_htile_info(&HtileRequest {
            flags: req.flags,
            swizzle_mode: req.swizzle_mode,
            unaligned_width: req.unaligned_width.max(1),
            unaligned_height: req.unaligned_height.max(1),
            num_slices: req.num_slices.max(1),
            num_mip_levels: 1,
            first_mip_id_in_tail: 1,
        })?;

        let num_sample_log2 = req.num_samples.max(1).trailing_zeros();
        let pipe_mask = (1 << self.config.pipes_log2) - 1;
        let index = (self.xmask_base_index + num_sample_log2) as usize;
        let pattern = &HTILE_PATTERN[HTILE_PATIDX[index] as usize];

        let blk_size_log2 = log2(info.meta_blk_width) + log2(info.meta_blk_height) - 4;
        let blk_mask = (1u32 << blk_size_log2) - 1;
        // +1 output bit: bit 0 of the pattern selects the nibble.
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
            bit_position: 0,
        })
    }
}

impl Gfx10AddrLib {
    /// Inverse mapping from an HTILE address back to a coordinate.
    ///
    /// The forward mapping is not guaranteed invertible without additional
    /// hardware documentation; this always returns
    /// [`AddrError::NotImplemented`] and callers must not rely on it.
    pub fn compute_htile_coord_from_addr(
        &self,
        _req: &HtileAddrRequest,
        _addr: u64,
    ) -> AddrResult<(u32, u32)> {
        Err(AddrError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn htile_request(width: u32, height: u32) -> HtileRequest {
        HtileRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Z64kbX,
            unaligned_width: width,
            unaligned_height: height,
            num_slices: 1,
            num_mip_levels: 1,
            first_mip_id_in_tail: 1,
        }
    }

    #[test]
    fn htile_info_pads_to_meta_block() {
        let lib = navi21_4pipe();
        let info = lib.compute_htile_info(&htile_request(1920, 1080)).unwrap();
        assert_eq!(info.pitch % info.meta_blk_width, 0);
        assert_eq!(info.height % info.meta_blk_height, 0);
        assert!(info.pitch >= 1920 && info.height >= 1080);
        assert!(info.base_align >= 2048 << lib.hardware_config().pipes_log2);
        assert_eq!(
            info.slice_size,
            info.meta_blk_num_per_slice
                * (info.meta_blk_width * info.meta_blk_height / 16)
        );
    }

    #[test]
    fn htile_mip_tail_levels_carry_no_slice_size() {
        let lib = navi21_4pipe();
        let mut req = htile_request(2048, 2048);
        req.num_mip_levels = 12;
        req.first_mip_id_in_tail = 5;
        let info = lib.compute_htile_info(&req).unwrap();
        for (i, mip) in info.mips.iter().enumerate() {
            if i >= 5 {
                assert!(mip.in_mip_tail);
                assert_eq!(mip.offset, 0);
                if i > 5 {
                    assert_eq!(mip.slice_size, 0);
                }
            } else {
                assert!(!mip.in_mip_tail);
                assert!(mip.slice_size > 0);
            }
        }
        // The shared tail block accounts for exactly one metadata block.
        assert_eq!(
            info.mips[5].slice_size,
            info.meta_blk_width * info.meta_blk_height / 16
        );
    }

    #[test]
    fn htile_rejects_non_z_modes() {
        let lib = navi21_4pipe();
        let mut req = htile_request(256, 256);
        req.swizzle_mode = SwizzleMode::Render64kbX;
        assert_eq!(lib.compute_htile_info(&req), Err(AddrError::InvalidParams));

        let mut unaligned = htile_request(256, 256);
        unaligned.flags.pipe_aligned = false;
        assert_eq!(
            lib.compute_htile_info(&unaligned),
            Err(AddrError::InvalidParams)
        );
    }

    #[test]
    fn htile_addr_origin_is_zero() {
        let lib = navi21_4pipe();
        let req = HtileAddrRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Z64kbX,
            unaligned_width: 1024,
            unaligned_height: 1024,
            num_slices: 1,
            num_mip_levels: 1,
            num_samples: 1,
            x: 0,
            y: 0,
            slice: 0,
            pipe_xor: 0,
        };
        let out = lib.compute_htile_addr_from_coord(&req).unwrap();
        assert_eq!(out.addr, 0);
    }

    #[test]
    fn htile_multi_mip_addressing_is_a_documented_gap() {
        let lib = navi21_4pipe();
        let req = HtileAddrRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Z64kbX,
            unaligned_width: 1024,
            unaligned_height: 1024,
            num_slices: 1,
            num_mip_levels: 2,
            num_samples: 1,
            x: 0,
            y: 0,
            slice: 0,
            pipe_xor: 0,
        };
        assert_eq!(
            lib.compute_htile_addr_from_coord(&req),
            Err(AddrError::NotImplemented)
        );
    }
}
