//! Surface layout computation: linear, micro-tiled (256B) and macro-tiled
//! paths, including mip-tail packing and stereo alignment.

use gfx10_swizzle::block::{self, BLOCK256_2D, BLOCK256_3D};
use gfx10_swizzle::dim::{mip_extent, pow2_align, pow2_align_64};
use gfx10_swizzle::equation::Channel;
use gfx10_swizzle::mode::{self, ResourceType};
use gfx10_swizzle::{Dim3d, SwizzleMode, MAX_MIP_LEVELS};

use crate::engine::Gfx10AddrLib;
use crate::error::{AddrError, AddrResult};
use crate::surface::{StereoInfo, SurfaceInfoRequest, SurfaceLayout, SurfaceMipInfo};

impl Gfx10AddrLib {
    /// Computes the layout of a surface.
    ///
    /// Total over its legal inputs: any failure is an illegal parameter
    /// combination, never a partial layout.
    pub fn compute_surface_info(&self, req: &SurfaceInfoRequest) -> AddrResult<SurfaceLayout> {
        let req = req.normalized();
        self.surface_info_sanity_check(&req)?;
        if req.num_mip_levels as usize > MAX_MIP_LEVELS {
            return Err(AddrError::InvalidParams);
        }

        if req.swizzle_mode.is_linear() {
            self.compute_surface_info_linear(&req)
        } else if req.swizzle_mode.is_256b() {
            self.compute_surface_info_micro_tiled(&req)
        } else {
            self.compute_surface_info_macro_tiled(&req)
        }
    }

    pub(crate) fn compute_surface_info_linear(
        &self,
        req: &SurfaceInfoRequest,
    ) -> AddrResult<SurfaceLayout> {
        if req.resource_type == ResourceType::Tex1d && req.height > 1 {
            return Err(AddrError::InvalidParams);
        }

        let elem_bytes = req.bpp >> 3;
        let pitch_align = if req.swizzle_mode == SwizzleMode::LinearGeneral
            || !elem_bytes.is_power_of_two()
        {
            1
        } else {
            256 / elem_bytes
        };
        let mip_depth = if req.resource_type == ResourceType::Tex3d {
            req.num_slices
        } else {
            1
        };

        let mut mips = vec![SurfaceMipInfo::default(); req.num_mip_levels as usize];
        let pitch = pow2_align(req.width, pitch_align);
        let height = req.height;
        let mut slice_size = 0u64;

        if req.num_mip_levels > 1 {
            for i in (0..req.num_mip_levels).rev() {
                let mip_width = mip_extent(req.width, i);
                let mip_height = mip_extent(req.height, i);
                let mip_actual_width = pow2_align(mip_width, pitch_align);

                mips[i as usize] = SurfaceMipInfo {
                    pitch: mip_actual_width,
                    height: mip_height,
                    depth: mip_depth,
                    offset: slice_size,
                    macro_block_offset: slice_size,
                    ..Default::default()
                };
                slice_size +=
                    u64::from(mip_actual_width) * u64::from(mip_height) * u64::from(elem_bytes);
            }
        } else {
            slice_size = u64::from(pitch) * u64::from(height) * u64::from(elem_bytes);
            mips[0] = SurfaceMipInfo {
                pitch,
                height,
                depth: mip_depth,
                ..Default::default()
            };
        }

        debug_assert!(slice_size > 0);

        Ok(SurfaceLayout {
            pitch,
            height,
            num_slices: req.num_slices,
            block_width: pitch_align,
            block_height: 1,
            block_slices: 1,
            slice_size,
            surf_size: slice_size * u64::from(req.num_slices),
            base_align: if req.swizzle_mode == SwizzleMode::LinearGeneral {
                elem_bytes
            } else {
                256
            },
            mip_chain_in_tail: false,
            first_mip_id_in_tail: req.num_mip_levels,
            mips,
            stereo: None,
        })
    }

    pub(crate) fn compute_surface_info_micro_tiled(
        &self,
        req: &SurfaceInfoRequest,
    ) -> AddrResult<SurfaceLayout> {
        let elem_bytes = req.bpp >> 3;
        let block = block::surface_block_dims(
            req.resource_type,
            req.swizzle_mode,
            req.elem_log2(),
            req.num_frags,
            8,
        )
        .ok_or(AddrError::InvalidParams)?;

        let pitch = pow2_align(req.width, block.w);
        let height = pow2_align(req.height, block.h);
        let mut mips = vec![SurfaceMipInfo::default(); req.num_mip_levels as usize];
        let slice_size;

        if req.num_mip_levels > 1 {
            let mut mip_slice_size = 0u64;
            for i in (0..req.num_mip_levels).rev() {
                let mip_width = mip_extent(req.width, i);
                let mip_height = mip_extent(req.height, i);
                let mip_actual_width = pow2_align(mip_width, block.w);
                let mip_actual_height = pow2_align(mip_height, block.h);

                mips[i as usize] = SurfaceMipInfo {
                    pitch: mip_actual_width,
                    height: mip_actual_height,
                    depth: 1,
                    offset: mip_slice_size,
                    macro_block_offset: mip_slice_size,
                    ..Default::default()
                };
                mip_slice_size += u64::from(mip_actual_width)
                    * u64::from(mip_actual_height)
                    * u64::from(elem_bytes);
            }
            slice_size = mip_slice_size;
        } else {
            slice_size = u64::from(pitch) * u64::from(height) * u64::from(elem_bytes);
            mips[0] = SurfaceMipInfo {
                pitch,
                height,
                depth: 1,
                ..Default::default()
            };
        }

        Ok(SurfaceLayout {
            pitch,
            height,
            num_slices: req.num_slices,
            block_width: block.w,
            block_height: block.h,
            block_slices: 1,
            slice_size,
            surf_size: slice_size * u64::from(req.num_slices),
            base_align: 256,
            mip_chain_in_tail: false,
            first_mip_id_in_tail: req.num_mip_levels,
            mips,
            stereo: None,
        })
    }

    pub(crate) fn compute_surface_info_macro_tiled(
        &self,
        req: &SurfaceInfoRequest,
    ) -> AddrResult<SurfaceLayout> {
        if req.num_mip_levels as usize > MAX_MIP_LEVELS {
            return Err(AddrError::InvalidParams);
        }
        let elem_log2 = req.elem_log2();
        let elem_bytes = req.bpp >> 3;
        let block_size_log2 = self.block_size_log2(req.swizzle_mode);
        let block_size = 1u64 << block_size_log2;
        let block = block::surface_block_dims(
            req.resource_type,
            req.swizzle_mode,
            elem_log2,
            req.num_frags,
            block_size_log2,
        )
        .ok_or(AddrError::InvalidParams)?;

        let mut height_align = block.h;
        let mut stereo = None;
        if req.flags.qb_stereo {
            let (align_y, right_xor) = self.compute_stereo_info(req, block_size_log2)?;
            height_align = height_align.max(align_y);
            stereo = Some(StereoInfo {
                eye_height: 0,
                right_swizzle: right_xor,
            });
        }

        let pitch = pow2_align(req.width, block.w);
        let height = pow2_align(req.height, height_align);
        let num_slices = pow2_align(req.num_slices, block.d);
        if let Some(stereo) = stereo.as_mut() {
            stereo.eye_height = height;
        }

        let mut mips = vec![SurfaceMipInfo::default(); req.num_mip_levels as usize];
        let mut mip_chain_in_tail = false;
        let mut first_mip_in_tail = req.num_mip_levels;
        let slice_size;

        if req.num_mip_levels > 1 {
            let tail_max_dim = block::mip_tail_dims(
                req.resource_type,
                req.swizzle_mode,
                block_size_log2,
                block,
            );
            let is_thin = mode::is_thin(req.resource_type, req.swizzle_mode);
            let mip0_depth = if is_thin { 1 } else { req.num_slices };
            let max_mips_in_tail = block::max_mips_in_tail(block_size_log2, is_thin);
            let index = elem_log2 as usize;

            // GFX10.0 shipped with a depth mip-tail threshold bug; later
            // parts use the corrected (smaller) dimensions at 8 and 16 bpp.
            let mut fixed_tail_max_dim = tail_max_dim;
            if self.config.flags.ds_mipmap_htile_fix
                && req.swizzle_mode.is_z_order()
                && index <= 1
            {
                fixed_tail_max_dim.w /= BLOCK256_2D[index].w / BLOCK256_2D[2].w;
                fixed_tail_max_dim.h /= BLOCK256_2D[index].h / BLOCK256_2D[2].h;
            }

            let mut mip_size = [0u64; MAX_MIP_LEVELS];
            let mut mip_slice_size = [0u64; MAX_MIP_LEVELS];
            let mut mip_chain_slice_size = 0u64;

            for i in 0..req.num_mip_levels {
                let mip_width = mip_extent(req.width, i);
                let mip_height = mip_extent(req.height, i);
                let mip_depth = mip_extent(mip0_depth, i);

                let in_tail = mip_width <= fixed_tail_max_dim.w
                    && mip_height <= fixed_tail_max_dim.h
                    && req.num_mip_levels - i <= max_mips_in_tail;
                if in_tail {
                    first_mip_in_tail = i;
                    mip_chain_slice_size += block_size / u64::from(block.d);
                    break;
                }

                let mip_pitch = pow2_align(mip_width, block.w);
                let mip_actual_height = pow2_align(mip_height, block.h);
                let mip_actual_depth = pow2_align(mip_depth, block.d);
                let level_slice_size =
                    u64::from(mip_pitch) * u64::from(mip_actual_height) * u64::from(elem_bytes);

                mip_size[i as usize] = level_slice_size * u64::from(mip_actual_depth);
                mip_slice_size[i as usize] = level_slice_size * u64::from(block.d);
                mip_chain_slice_size += level_slice_size;

                let mip = &mut mips[i as usize];
                mip.pitch = mip_pitch;
                mip.height = mip_actual_height;
                mip.depth = if req.resource_type == ResourceType::Tex3d {
                    num_slices
                } else {
                    1
                };
            }

            slice_size = mip_chain_slice_size;
            mip_chain_in_tail = first_mip_in_tail == 0;

            // Offsets, larger mips first; the tail block sits at offset 0.
            let mut offset = 0u64;
            let mut macro_blk_offset = 0u64;
            let mut tail_max_depth = 0u32;

            if first_mip_in_tail != req.num_mip_levels {
                tail_max_depth = mip_extent(mip0_depth, first_mip_in_tail);
                offset = block_size * u64::from(pow2_align(tail_max_depth, block.d))
                    / u64::from(block.d);
                macro_blk_offset = block_size;
            }

            for i in (0..first_mip_in_tail).rev() {
                let mip = &mut mips[i as usize];
                mip.offset = offset;
                mip.macro_block_offset = macro_blk_offset;
                mip.mip_tail_offset = 0;
                offset += mip_size[i as usize];
                macro_blk_offset += mip_slice_size[i as usize];
            }

            let mut tail_pitch = tail_max_dim.w;
            let mut tail_height = tail_max_dim.h;
            let tail_depth = if is_thin {
                1
            } else {
                pow2_align(tail_max_depth, BLOCK256_3D[index].d)
            };
            let tail_max_depth_in_blk = if is_thin {
                1
            } else {
                tail_depth / BLOCK256_3D[index].d
            };

            for i in first_mip_in_tail..req.num_mip_levels {
                let m = max_mips_in_tail - 1 - (i - first_mip_in_tail);
                let mip_offset = if m > 6 { 16u32 << m } else { m << 8 };

                // The tail coordinate comes from de-interleaving the tail
                // offset back into x/y bits.
                let mut mip_x = ((mip_offset >> 9) & 1)
                    | ((mip_offset >> 10) & 2)
                    | ((mip_offset >> 11) & 4)
                    | ((mip_offset >> 12) & 8)
                    | ((mip_offset >> 13) & 16)
                    | ((mip_offset >> 14) & 32);
                let mut mip_y = ((mip_offset >> 8) & 1)
                    | ((mip_offset >> 9) & 2)
                    | ((mip_offset >> 10) & 4)
                    | ((mip_offset >> 11) & 8)
                    | ((mip_offset >> 12) & 16)
                    | ((mip_offset >> 13) & 32);

                if block_size_log2 & 1 != 0 {
                    core::mem::swap(&mut mip_x, &mut mip_y);
                    if index & 1 != 0 {
                        mip_y = (mip_y << 1) | (mip_x & 1);
                        mip_x >>= 1;
                    }
                }

                let micro = if is_thin {
                    Dim3d::new(BLOCK256_2D[index].w, BLOCK256_2D[index].h, 1)
                } else {
                    BLOCK256_3D[index]
                };

                let mip = &mut mips[i as usize];
                mip.in_mip_tail = true;
                mip.offset = u64::from(mip_offset) * u64::from(tail_max_depth_in_blk);
                mip.mip_tail_offset = u64::from(mip_offset);
                mip.macro_block_offset = 0;
                mip.pitch = tail_pitch;
                mip.height = tail_height;
                mip.depth = if req.resource_type == ResourceType::Tex3d {
                    num_slices
                } else {
                    1
                };
                mip.mip_tail_coord = Dim3d::new(mip_x * micro.w, mip_y * micro.h, 0);

                tail_pitch = (tail_pitch >> 1).max(micro.w);
                tail_height = (tail_height >> 1).max(micro.h);
            }
        } else {
            slice_size = u64::from(pitch)
                * u64::from(height)
                * u64::from(elem_bytes)
                * u64::from(req.num_frags);
            mips[0] = SurfaceMipInfo {
                pitch,
                height,
                depth: if req.resource_type == ResourceType::Tex3d {
                    num_slices
                } else {
                    1
                },
                ..Default::default()
            };
        }

        Ok(SurfaceLayout {
            pitch,
            height,
            num_slices,
            block_width: block.w,
            block_height: block.h,
            block_slices: block.d,
            slice_size,
            surf_size: slice_size * u64::from(num_slices),
            base_align: 1 << block_size_log2,
            mip_chain_in_tail,
            first_mip_id_in_tail: first_mip_in_tail,
            mips,
            stereo,
        })
    }

    /// Stereo surfaces align each eye to the highest Y bit the address
    /// equation consumes, and the right eye flips the positions holding it.
    fn compute_stereo_info(
        &self,
        req: &SurfaceInfoRequest,
        block_size_log2: u32,
    ) -> AddrResult<(u32, u32)> {
        if !req.swizzle_mode.is_non_prt_xor() {
            return Ok((1, 0));
        }

        let eq = self
            .equation(req.resource_type, req.swizzle_mode, req.elem_log2())
            .ok_or(AddrError::InvalidParams)?;

        let mut y_max = 0u8;
        for bit in self.config.pipe_interleave_log2 as usize..block_size_log2 as usize {
            for term in eq.terms_for_bit(bit) {
                if term.channel == Channel::Y && term.index > y_max {
                    y_max = term.index;
                }
            }
        }

        let mut y_pos_mask = 0u32;
        for bit in self.config.pipe_interleave_log2 as usize..block_size_log2 as usize {
            if eq
                .terms_for_bit(bit)
                .any(|t| t.channel == Channel::Y && t.index == y_max)
            {
                y_pos_mask |= 1 << bit;
            }
        }

        let additional_align = 1u32 << y_max;
        let mut right_xor = 0;
        let aligned_height = pow2_align(req.height, additional_align);
        if (aligned_height >> y_max) & 1 != 0 {
            right_xor = y_pos_mask >> self.config.pipe_interleave_log2;
        }

        Ok((additional_align, right_xor))
    }
}

/// Padded surface size in elements, the quantity the mode selector compares
/// across block types.
pub(crate) fn padded_size_in_elements(block: Dim3d, width: u32, height: u32, slices: u32) -> u64 {
    let w = pow2_align(width, block.w);
    let h = pow2_align(height, block.h);
    let d = pow2_align(slices, block.d);
    u64::from(w) * u64::from(h) * u64::from(d)
}

/// Aligns a padded element size to a client minimum-size alignment.
pub(crate) fn align_padded_size(size_in_elements: u64, size_align_in_elements: u64) -> u64 {
    pow2_align_64(size_in_elements, size_align_in_elements.next_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceFlags;
    use crate::test_prelude::*;
    use rstest::rstest;

    #[test]
    fn linear_layout_aligns_pitch_to_256_bytes() {
        let lib = navi21_4pipe();
        let layout = lib
            .compute_surface_info(&SurfaceInfoRequest {
                width: 100,
                height: 100,
                bpp: 32,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(layout.pitch, 128); // 64-element alignment at 4 bytes
        assert_eq!(layout.height, 100);
        assert_eq!(layout.base_align, 256);
        assert_eq!(layout.slice_size, 128 * 100 * 4);
    }

    #[test]
    fn linear_1d_rejects_height() {
        let lib = navi21_4pipe();
        let req = SurfaceInfoRequest {
            resource_type: ResourceType::Tex1d,
            width: 64,
            height: 2,
            ..Default::default()
        };
        assert_eq!(lib.compute_surface_info(&req), Err(AddrError::InvalidParams));
    }

    #[rstest]
    #[case(SwizzleMode::Std256b, 8, 33, 20, 16, 16)]
    #[case(SwizzleMode::Disp256b, 32, 100, 1, 8, 8)]
    #[case(SwizzleMode::Disp256b, 64, 100, 60, 8, 4)]
    fn micro_tiled_pads_to_block(
        #[case] mode: SwizzleMode,
        #[case] bpp: u32,
        #[case] width: u32,
        #[case] height: u32,
        #[case] blk_w: u32,
        #[case] blk_h: u32,
    ) {
        let lib = navi21_4pipe();
        let layout = lib
            .compute_surface_info(&SurfaceInfoRequest {
                swizzle_mode: mode,
                width,
                height,
                bpp,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(layout.block_width, blk_w);
        assert_eq!(layout.block_height, blk_h);
        assert_eq!(layout.pitch % blk_w, 0);
        assert_eq!(layout.height % blk_h, 0);
        assert!(layout.pitch >= width && layout.height >= height);
        assert_eq!(layout.base_align, 256);
    }

    #[test]
    fn macro_tiled_64k_render_target() {
        let lib = navi21_4pipe();
        let layout = lib
            .compute_surface_info(&SurfaceInfoRequest {
                swizzle_mode: SwizzleMode::Render64kbX,
                flags: SurfaceFlags {
                    color: true,
                    ..Default::default()
                },
                width: 256,
                height: 256,
                bpp: 32,
                ..Default::default()
            })
            .unwrap();
        assert!(layout.base_align >= 65536);
        assert_eq!(layout.block_width, 128);
        assert_eq!(layout.block_height, 128);
        assert_eq!(layout.pitch, 256);
        assert_eq!(layout.height, 256);
        assert_eq!(layout.surf_size, 256 * 256 * 4);
    }

    #[test]
    fn mip_tail_levels_collapse_into_one_block() {
        let lib = navi21_4pipe();
        let layout = lib
            .compute_surface_info(&SurfaceInfoRequest {
                swizzle_mode: SwizzleMode::Render64kbX,
                width: 1024,
                height: 1024,
                bpp: 32,
                num_mip_levels: 11,
                ..Default::default()
            })
            .unwrap();
        let first_in_tail = layout.first_mip_id_in_tail;
        assert!(first_in_tail < 11);
        let mut tail_virtual_bytes = 0u64;
        for (i, mip) in layout.mips.iter().enumerate() {
            if (i as u32) < first_in_tail {
                assert!(!mip.in_mip_tail);
                assert_eq!(mip.pitch % layout.block_width, 0);
            } else {
                assert!(mip.in_mip_tail);
                assert_eq!(mip.macro_block_offset, 0);
                let w = mip_extent(1024, i as u32);
                let h = mip_extent(1024, i as u32);
                tail_virtual_bytes += u64::from(w) * u64::from(h) * 4;
            }
        }
        assert!(tail_virtual_bytes <= 65536);
        // The tail block is the last block of the chain.
        assert_eq!(
            layout.slice_size,
            layout.mips[..first_in_tail as usize]
                .iter()
                .map(|m| u64::from(m.pitch) * u64::from(m.height) * 4)
                .sum::<u64>()
                + 65536
        );
    }

    #[test]
    fn padding_is_monotonic_and_block_aligned() {
        let lib = navi21_4pipe();
        for (w, h) in [(1, 1), (31, 57), (128, 128), (1000, 600)] {
            let layout = lib
                .compute_surface_info(&SurfaceInfoRequest {
                    swizzle_mode: SwizzleMode::Std64kbX,
                    width: w,
                    height: h,
                    bpp: 32,
                    ..Default::default()
                })
                .unwrap();
            assert!(layout.pitch >= w && layout.height >= h);
            assert_eq!(layout.pitch % layout.block_width, 0);
            assert_eq!(layout.height % layout.block_height, 0);
        }
    }

    #[test]
    fn stereo_reports_right_eye_swizzle() {
        let lib = navi21_4pipe();
        let layout = lib
            .compute_surface_info(&SurfaceInfoRequest {
                swizzle_mode: SwizzleMode::Disp64kbX,
                flags: SurfaceFlags {
                    qb_stereo: true,
                    ..Default::default()
                },
                width: 1024,
                height: 800,
                bpp: 32,
                ..Default::default()
            })
            .unwrap();
        let stereo = layout.stereo.expect("stereo output");
        assert_eq!(stereo.eye_height, layout.height);
        assert_eq!(layout.height % layout.block_height, 0);
    }
}
