//! DCC: delta color compression metadata.

use gfx10_swizzle::block::{BLOCK256_2D, BLOCK256_3D};
use gfx10_swizzle::dim::{log2, pow2_align};
use gfx10_swizzle::mode::{self, SwizzleMode};
use gfx10_swizzle::pattern::{offset_from_pattern, DCC_64K_R_X_PATIDX, DCC_R_X_PATTERN};
use gfx10_swizzle::ResourceType;

use super::{MetaDataType, MetaFlags, MetaMipInfo};
use crate::engine::{Gfx10AddrLib, MAX_NUM_BPP};
use crate::error::{AddrError, AddrResult};
use crate::surface::AddressResult;

/// DCC layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DccRequest {
    /// Metadata flags.
    pub flags: MetaFlags,
    /// Swizzle mode of the color surface.
    pub swizzle_mode: SwizzleMode,
    /// Resource type of the color surface.
    pub resource_type: ResourceType,
    /// Bits per color element.
    pub bpp: u32,
    /// Color surface width before padding.
    pub unaligned_width: u32,
    /// Color surface height before padding.
    pub unaligned_height: u32,
    /// Color surface slice count.
    pub num_slices: u32,
    /// Color surface fragment count.
    pub num_frags: u32,
    /// Color surface mip level count.
    pub num_mip_levels: u32,
    /// First mip level in the color surface's mip tail.
    pub first_mip_id_in_tail: u32,
}

/// DCC layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DccInfo {
    /// Padded width in color-surface texels.
    pub pitch: u32,
    /// Padded height in color-surface texels.
    pub height: u32,
    /// Padded depth.
    pub depth: u32,
    /// Base alignment of the DCC key in bytes.
    pub base_align: u32,
    /// Compressed block extents in color-surface texels.
    pub compress_blk_width: u32,
    /// Compressed block height.
    pub compress_blk_height: u32,
    /// Compressed block depth.
    pub compress_blk_depth: u32,
    /// Metadata block extents in color-surface texels.
    pub meta_blk_width: u32,
    /// Metadata block height.
    pub meta_blk_height: u32,
    /// Metadata block depth.
    pub meta_blk_depth: u32,
    /// Metadata block byte size.
    pub meta_blk_size: u32,
    /// Metadata blocks per slice.
    pub meta_blk_num_per_slice: u32,
    /// DCC bytes per slice.
    pub dcc_ram_slice_size: u32,
    /// Total DCC bytes.
    pub dcc_ram_size: u32,
    /// Per-mip metadata layout.
    pub mips: Vec<MetaMipInfo>,
}

/// DCC address request; layout fields as returned by
/// [`Gfx10AddrLib::compute_dcc_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DccAddrRequest {
    /// Metadata flags.
    pub flags: MetaFlags,
    /// Swizzle mode of the color surface.
    pub swizzle_mode: SwizzleMode,
    /// Resource type of the color surface.
    pub resource_type: ResourceType,
    /// Bits per color element.
    pub bpp: u32,
    /// Color surface fragment count.
    pub num_frags: u32,
    /// Color surface mip level count.
    pub num_mip_levels: u32,
    /// Mip level being addressed.
    pub mip_id: u32,
    /// Padded pitch from the DCC info query.
    pub pitch: u32,
    /// Metadata block width from the DCC info query.
    pub meta_blk_width: u32,
    /// Metadata block height from the DCC info query.
    pub meta_blk_height: u32,
    /// DCC slice size from the DCC info query.
    pub dcc_ram_slice_size: u32,
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
    /// DCC pattern row for an element size and alignment.
    fn dcc_pattern_index(&self, elem_log2: u32, pipe_aligned: bool) -> usize {
        let cfg = &self.config;
        let mut index = elem_log2;
        if pipe_aligned {
            // Skip the unaligned group.
            index += MAX_NUM_BPP;
            if cfg.num_pkr_log2 < 2 {
                index += cfg.pipes_log2 * MAX_NUM_BPP;
            } else {
                // Four groups cover the sub-2-packer topologies.
                index += 4 * MAX_NUM_BPP;
                let dcc_pipe_per_pkr = 3;
                index += (cfg.num_pkr_log2 - 2) * dcc_pipe_per_pkr * MAX_NUM_BPP
                    + (cfg.pipes_log2 - cfg.num_pkr_log2) * MAX_NUM_BPP;
            }
        }
        index as usize
    }

    /// Computes the DCC key layout for a color surface.
    pub fn compute_dcc_info(&self, req: &DccRequest) -> AddrResult<DccInfo> {
        // The hardware can compress 256B modes, but the engine only ever
        // selects them for small surfaces where DCC is not worth carrying.
        if req.swizzle_mode.is_linear() || req.swizzle_mode.is_256b() {
            return Err(AddrError::InvalidParams);
        }
        if self.config.flags.dcc_unsup_3d_sw_dis
            && req.resource_type == ResourceType::Tex3d
            && mode::is_display(req.resource_type, req.swizzle_mode)
        {
            // No 3D display DCC on GFX10.0/10.1.
            return Err(AddrError::InvalidParams);
        }
        // Only SW_*_R_X surfaces may be DCC compressed when attached to the CB.
        debug_assert!(req.swizzle_mode.is_render_optimized());

        let elem_log2 = log2(req.bpp >> 3);
        let is_thick = mode::is_thick(req.resource_type, req.swizzle_mode);
        let compress_blk = if is_thick {
            BLOCK256_3D[elem_log2 as usize]
        } else {
            let blk = BLOCK256_2D[elem_log2 as usize];
            gfx10_swizzle::Dim3d::new(blk.w, blk.h, 1)
        };

        let num_frag_log2 = log2(req.num_frags.max(1).next_power_of_two());
        let (meta_blk_size, meta_blk) = self.meta_block_size(
            MetaDataType::Color,
            req.resource_type,
            req.swizzle_mode,
            elem_log2,
            num_frag_log2,
            req.flags.pipe_aligned,
        );

        let pitch = pow2_align(req.unaligned_width, meta_blk.w);
        let height = pow2_align(req.unaligned_height, meta_blk.h);
        let depth = pow2_align(req.num_slices.max(1), meta_blk.d);
        let num_mip_levels = req.num_mip_levels.max(1);
        let mut mips = vec![MetaMipInfo::default(); num_mip_levels as usize];

        let (dcc_ram_slice_size, meta_blk_num_per_slice);
        if req.num_mip_levels > 1 {
            debug_assert!(req.first_mip_id_in_tail <= req.num_mip_levels);
            let mut offset = if req.first_mip_id_in_tail == req.num_mip_levels {
                0
            } else {
                meta_blk_size
            };

            for i in (0..req.first_mip_id_in_tail).rev() {
                let mip_width = pow2_align((req.unaligned_width >> i).max(1), meta_blk.w);
                let mip_height = pow2_align((req.unaligned_height >> i).max(1), meta_blk.h);
                let pitch_in_blk = mip_width / meta_blk.w;
                let height_in_blk = mip_height / meta_blk.h;
                let mip_slice_size = pitch_in_blk * height_in_blk * meta_blk_size;

                let mip = &mut mips[i as usize];
                mip.in_mip_tail = false;
                mip.offset = offset;
                mip.slice_size = mip_slice_size;
                offset += mip_slice_size;
            }

            dcc_ram_slice_size = offset;
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
            meta_blk_num_per_slice = (pitch / meta_blk.w) * (height / meta_blk.h);
            dcc_ram_slice_size = meta_blk_num_per_slice * meta_blk_size;
            mips[0] = MetaMipInfo {
                in_mip_tail: false,
                offset: 0,
                slice_size: dcc_ram_slice_size,
            };
        }

        Ok(DccInfo {
            pitch,
            height,
            depth,
            base_align: meta_blk_size,
            compress_blk_width: compress_blk.w,
            compress_blk_height: compress_blk.h,
            compress_blk_depth: compress_blk.d,
            meta_blk_width: meta_blk.w,
            meta_blk_height: meta_blk.h,
            meta_blk_depth: meta_blk.d,
            meta_blk_size,
            meta_blk_num_per_slice,
            dcc_ram_slice_size,
            dcc_ram_size: dcc_ram_slice_size * (depth / meta_blk.d),
            mips,
        })
    }

    /// Whether [`compute_dcc_addr_from_coord`] can serve this request.
    ///
    /// The direct path only exists for single-mip, single-fragment 2D
    /// surfaces in the 64KB render-optimized mode; everything else must go
    /// through the full layout query.
    ///
    /// [`compute_dcc_addr_from_coord`]: Gfx10AddrLib::compute_dcc_addr_from_coord
    pub fn supports_dcc_addr_from_coord(&self, req: &DccAddrRequest) -> AddrResult<()> {
        if req.resource_type != ResourceType::Tex2d
            || req.swizzle_mode != SwizzleMode::Render64kbX
            || req.flags.linear
            || req.num_frags > 1
            || req.num_mip_levels > 1
            || req.mip_id > 0
        {
            return Err(AddrError::NotSupported);
        }
        if req.pitch == 0
            || req.meta_blk_width == 0
            || req.meta_blk_height == 0
            || (req.slice > 0 && req.dcc_ram_slice_size == 0)
        {
            return Err(AddrError::NotSupported);
        }
        Ok(())
    }

    /// Resolves a color-surface coordinate to its DCC byte address.
    pub fn compute_dcc_addr_from_coord(
        &self,
        req: &DccAddrRequest,
    ) -> AddrResult<AddressResult> {
        self.supports_dcc_addr_from_coord(req)?;

        let elem_log2 = log2(req.bpp >> 3);
        let pipe_mask = (1u32 << self.config.pipes_log2) - 1;
        let index = self.dcc_pattern_index(elem_log2, req.flags.pipe_aligned);
        let pattern = &DCC_R_X_PATTERN[DCC_64K_R_X_PATIDX[index] as usize];

        let blk_size_log2 =
            log2(req.meta_blk_width) + log2(req.meta_blk_height) + elem_log2 - 8;
        let blk_mask = (1u32 << blk_size_log2) - 1;
        let blk_offset =
            offset_from_pattern(pattern, blk_size_log2 + 1, req.x, req.y, req.slice, 0);

        let xb = req.x / req.meta_blk_width;
        let yb = req.y / req.meta_blk_height;
        let pb = req.pitch / req.meta_blk_width;
        let blk_index = yb * pb + xb;
        let pipe_xor =
            ((req.pipe_xor & pipe_mask) << self.config.pipe_interleave_log2) & blk_mask;

        Ok(AddressResult {
            addr: u64::from(req.dcc_ram_slice_size) * u64::from(req.slice)
                + (u64::from(blk_index) << blk_size_log2)
                + u64::from((blk_offset >> 1) ^ pipe_xor),
            bit_position: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn dcc_request() -> DccRequest {
        DccRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Render64kbX,
            resource_type: ResourceType::Tex2d,
            bpp: 32,
            unaligned_width: 1024,
            unaligned_height: 1024,
            num_slices: 1,
            num_frags: 1,
            num_mip_levels: 1,
            first_mip_id_in_tail: 1,
        }
    }

    #[test]
    fn dcc_info_tracks_256b_compressed_blocks() {
        let lib = navi21_4pipe();
        let info = lib.compute_dcc_info(&dcc_request()).unwrap();
        // 32bpp thin: 8x8 compressed blocks.
        assert_eq!((info.compress_blk_width, info.compress_blk_height), (8, 8));
        assert_eq!(info.compress_blk_depth, 1);
        assert_eq!(info.pitch % info.meta_blk_width, 0);
        assert_eq!(info.dcc_ram_size, info.dcc_ram_slice_size);
        assert_eq!(info.base_align, info.meta_blk_size);
    }

    #[test]
    fn dcc_rejects_linear_and_micro_modes() {
        let lib = navi21_4pipe();
        for bad in [SwizzleMode::Linear, SwizzleMode::Std256b] {
            let mut req = dcc_request();
            req.swizzle_mode = bad;
            assert_eq!(lib.compute_dcc_info(&req), Err(AddrError::InvalidParams));
        }
    }

    #[test]
    fn dcc_direct_path_gates_on_shape() {
        let lib = navi21_4pipe();
        let info = lib.compute_dcc_info(&dcc_request()).unwrap();
        let addr_req = DccAddrRequest {
            flags: MetaFlags {
                pipe_aligned: true,
                ..Default::default()
            },
            swizzle_mode: SwizzleMode::Render64kbX,
            resource_type: ResourceType::Tex2d,
            bpp: 32,
            num_frags: 1,
            num_mip_levels: 1,
            mip_id: 0,
            pitch: info.pitch,
            meta_blk_width: info.meta_blk_width,
            meta_blk_height: info.meta_blk_height,
            dcc_ram_slice_size: info.dcc_ram_slice_size,
            x: 0,
            y: 0,
            slice: 0,
            pipe_xor: 0,
        };
        assert!(lib.supports_dcc_addr_from_coord(&addr_req).is_ok());
        assert_eq!(lib.compute_dcc_addr_from_coord(&addr_req).unwrap().addr, 0);

        let mut multi_frag = addr_req;
        multi_frag.num_frags = 4;
        assert_eq!(
            lib.supports_dcc_addr_from_coord(&multi_frag),
            Err(AddrError::NotSupported)
        );

        let mut three_d = addr_req;
        three_d.resource_type = ResourceType::Tex3d;
        assert_eq!(
            lib.compute_dcc_addr_from_coord(&three_d),
            Err(AddrError::NotSupported)
        );
    }
}
