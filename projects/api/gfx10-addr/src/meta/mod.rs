//! Compression metadata surfaces.
//!
//! HTILE, CMASK and DCC layouts all derive from one meta-block sizing
//! routine; the per-surface calculators in the submodules differ in element
//! size, cache-line size and pattern-table family.

mod cmask;
mod dcc;
mod htile;

pub use cmask::{CmaskAddrRequest, CmaskInfo, CmaskRequest};
pub use dcc::{DccAddrRequest, DccInfo, DccRequest};
pub use htile::{HtileAddrRequest, HtileInfo, HtileRequest};

use gfx10_swizzle::block;
use gfx10_swizzle::dim::Dim3d;
use gfx10_swizzle::mode::{self, ResourceType, SwizzleMode};

use crate::engine::Gfx10AddrLib;

/// Data surface class a metadata surface compresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaDataType {
    /// Color data (DCC).
    Color,
    /// Depth/stencil data (HTILE).
    DepthStencil,
    /// FMask data (CMASK).
    Fmask,
}

impl MetaDataType {
    /// Metadata element size, log2 bytes; negative for sub-byte elements.
    fn element_size_log2(self) -> i32 {
        match self {
            MetaDataType::Color => 0,
            MetaDataType::DepthStencil => 2,
            MetaDataType::Fmask => -1,
        }
    }

    /// Metadata cache line size, log2 bytes.
    fn cache_size_log2(self) -> i32 {
        match self {
            MetaDataType::Color => 6,
            MetaDataType::DepthStencil | MetaDataType::Fmask => 8,
        }
    }
}

/// Flags shared by the metadata queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetaFlags {
    /// Metadata padded out to full pipe alignment.
    pub pipe_aligned: bool,
    /// Metadata padded to render-backend alignment.
    pub rb_aligned: bool,
    /// The data surface is linear.
    pub linear: bool,
}

/// Per-mip metadata layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetaMipInfo {
    /// Whether the level is packed in the metadata mip tail.
    pub in_mip_tail: bool,
    /// Byte offset of the level.
    pub offset: u32,
    /// Bytes of metadata per data slice for this level.
    pub slice_size: u32,
}

impl Gfx10AddrLib {
    /// Size of the compressed block the metadata tracks, log2 extents.
    fn compressed_block_size_log2(
        &self,
        data_type: MetaDataType,
        rsrc: ResourceType,
        mode: SwizzleMode,
        elem_log2: u32,
        num_samples_log2: u32,
    ) -> Dim3d {
        match data_type {
            MetaDataType::Color => {
                block::micro_block_size_log2(rsrc, mode, elem_log2, num_samples_log2)
            }
            // Depth and FMask compress 8x8 texel tiles.
            MetaDataType::DepthStencil | MetaDataType::Fmask => Dim3d::new(3, 3, 0),
        }
    }

    /// Extra bits of the data surface one metadata pipe covers.
    fn meta_overlap_log2(
        &self,
        data_type: MetaDataType,
        rsrc: ResourceType,
        mode: SwizzleMode,
        elem_log2: u32,
        num_samples_log2: u32,
    ) -> i32 {
        let comp =
            self.compressed_block_size_log2(data_type, rsrc, mode, elem_log2, num_samples_log2);
        let micro = block::micro_block_size_log2(rsrc, mode, elem_log2, num_samples_log2);
        let comp_size_log2 = (comp.w + comp.h + comp.d) as i32;
        let micro_size_log2 = (micro.w + micro.h + micro.d) as i32;
        let num_pipes_log2 = self.effective_num_pipes();
        let mut overlap = num_pipes_log2 - comp_size_log2.max(micro_size_log2);

        if num_pipes_log2 > 1 && self.config.flags.rb_plus {
            overlap += 1;
        }
        // 16bpe 8xaa loses an overlap bit: the block-size reduction eats a
        // pipe anchor bit (y4).
        if elem_log2 == 4 && num_samples_log2 == 3 {
            overlap -= 1;
        }
        overlap.max(0)
    }

    /// Overlap bits for thick (3D) metadata.
    fn meta_3d_overlap_log2(
        &self,
        rsrc: ResourceType,
        mode: SwizzleMode,
        elem_log2: u32,
    ) -> i32 {
        let micro = block::micro_block_size_log2(rsrc, mode, elem_log2, 0);
        let mut overlap = self.effective_num_pipes() - micro.w as i32;

        if self.config.flags.rb_plus {
            overlap += 1;
        }
        if overlap < 0 || mode::is_standard(rsrc, mode) {
            overlap = 0;
        }
        overlap
    }

    /// Pipe rotation applied on RB+ packer topologies.
    pub(crate) fn pipe_rotate_amount(&self, rsrc: ResourceType, mode: SwizzleMode) -> i32 {
        let cfg = &self.config;
        if cfg.flags.rb_plus && cfg.pipes_log2 >= cfg.num_sa_log2 + 1 && cfg.pipes_log2 > 1 {
            if cfg.pipes_log2 == cfg.num_sa_log2 + 1 && mode::is_rb_aligned(rsrc, mode) {
                1
            } else {
                (cfg.pipes_log2 - (cfg.num_sa_log2 + 1)) as i32
            }
        } else {
            0
        }
    }

    /// Metadata block byte size and extents for a data surface.
    pub(crate) fn meta_block_size(
        &self,
        data_type: MetaDataType,
        rsrc: ResourceType,
        mode: SwizzleMode,
        elem_log2: u32,
        num_samples_log2: u32,
        pipe_align: bool,
    ) -> (u32, Dim3d) {
        let cfg = &self.config;
        let meta_elem_log2 = data_type.element_size_log2();
        let meta_cache_log2 = data_type.cache_size_log2();
        let comp_blk_log2: i32 = if data_type == MetaDataType::Color {
            8
        } else {
            6 + num_samples_log2 as i32 + elem_log2 as i32
        };
        let meta_blk_samples_log2 = if data_type == MetaDataType::DepthStencil {
            num_samples_log2
        } else {
            num_samples_log2.min(cfg.max_comp_frag_log2)
        };
        let data_blk_log2 = self.block_size_log2(mode) as i32;
        let mut num_pipes_log2 = cfg.pipes_log2 as i32;
        let mut block = Dim3d::default();

        let meta_blk_size_log2: i32 = if mode::is_thin(rsrc, mode) {
            let size_log2 = if !pipe_align
                || mode::is_standard(rsrc, mode)
                || mode::is_display(rsrc, mode)
            {
                if pipe_align {
                    (cfg.pipe_interleave_log2 as i32 + num_pipes_log2)
                        .max(12)
                        .min(data_blk_log2)
                } else {
                    data_blk_log2.min(12)
                }
            } else {
                if cfg.flags.rb_plus
                    && cfg.pipes_log2 == cfg.num_sa_log2 + 1
                    && cfg.pipes_log2 > 1
                {
                    num_pipes_log2 += 1;
                }
                let pipe_rotate_log2 = self.pipe_rotate_amount(rsrc, mode);

                let mut size_log2 = if num_pipes_log2 >= 4 {
                    let mut overlap_log2 = self.meta_overlap_log2(
                        data_type,
                        rsrc,
                        mode,
                        elem_log2,
                        num_samples_log2,
                    );
                    // 16bpe 8xaa gains the bit back on rotated topologies.
                    if pipe_rotate_log2 > 0
                        && elem_log2 == 4
                        && num_samples_log2 == 3
                        && (mode.is_z_order() || self.effective_num_pipes() > 3)
                    {
                        overlap_log2 += 1;
                    }
                    let mut v = meta_cache_log2 + overlap_log2 + num_pipes_log2;
                    v = v.max(cfg.pipe_interleave_log2 as i32 + num_pipes_log2);
                    if cfg.flags.rb_plus
                        && mode.is_render_optimized()
                        && num_pipes_log2 == 6
                        && num_samples_log2 == 3
                        && cfg.max_comp_frag_log2 == 3
                        && v < 15
                    {
                        v = 15;
                    }
                    v
                } else {
                    (cfg.pipe_interleave_log2 as i32 + num_pipes_log2).max(12)
                };

                if data_type == MetaDataType::DepthStencil {
                    // HTILE meta blocks are at least 2KB * num_pipes.
                    size_log2 = size_log2.max(11 + num_pipes_log2);
                }

                let comp_frag_log2 = cfg.max_comp_frag_log2.min(num_samples_log2) as i32;
                if mode.is_render_optimized() && comp_frag_log2 > 1 && pipe_rotate_log2 >= 1 {
                    let tmp =
                        8 + cfg.pipes_log2 as i32 + pipe_rotate_log2.max(comp_frag_log2 - 1);
                    size_log2 = size_log2.max(tmp);
                }
                size_log2
            };

            let meta_blk_bits_log2 = size_log2 + comp_blk_log2
                - elem_log2 as i32
                - meta_blk_samples_log2 as i32
                - meta_elem_log2;
            block.w = 1 << ((meta_blk_bits_log2 >> 1) + (meta_blk_bits_log2 & 1));
            block.h = 1 << (meta_blk_bits_log2 >> 1);
            block.d = 1;
            size_log2
        } else {
            debug_assert!(mode::is_thick(rsrc, mode));
            let size_log2 = if pipe_align {
                if cfg.flags.rb_plus
                    && cfg.pipes_log2 == cfg.num_sa_log2 + 1
                    && cfg.pipes_log2 > 1
                    && mode::is_rb_aligned(rsrc, mode)
                {
                    num_pipes_log2 += 1;
                }
                let overlap_log2 = self.meta_3d_overlap_log2(rsrc, mode, elem_log2);
                (meta_cache_log2 + overlap_log2 + num_pipes_log2)
                    .max(cfg.pipe_interleave_log2 as i32 + num_pipes_log2)
                    .max(12)
            } else {
                12
            };

            let meta_blk_bits_log2 = size_log2 + comp_blk_log2
                - elem_log2 as i32
                - meta_blk_samples_log2 as i32
                - meta_elem_log2;
            block.w = 1 << ((meta_blk_bits_log2 / 3) + i32::from(meta_blk_bits_log2 % 3 > 0));
            block.h = 1 << ((meta_blk_bits_log2 / 3) + i32::from(meta_blk_bits_log2 % 3 > 1));
            block.d = 1 << (meta_blk_bits_log2 / 3);
            size_log2
        };

        (1u32 << meta_blk_size_log2, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn htile_meta_block_is_at_least_2kb_per_pipe() {
        let lib = navi21_4pipe();
        let (size, block) = lib.meta_block_size(
            MetaDataType::DepthStencil,
            ResourceType::Tex2d,
            SwizzleMode::Z64kbX,
            2,
            0,
            true,
        );
        assert!(size >= 2048 << lib.hardware_config().pipes_log2);
        assert!(block.w.is_power_of_two() && block.h.is_power_of_two());
        assert_eq!(block.d, 1);
    }

    #[test]
    fn unaligned_meta_block_caps_at_4kb() {
        let lib = navi21_4pipe();
        let (size, _) = lib.meta_block_size(
            MetaDataType::Color,
            ResourceType::Tex2d,
            SwizzleMode::Render64kbX,
            2,
            0,
            false,
        );
        assert!(size <= 4096);
    }

    #[test]
    fn thick_meta_block_is_3d() {
        let lib = navi21_4pipe();
        let (_, block) = lib.meta_block_size(
            MetaDataType::Color,
            ResourceType::Tex3d,
            SwizzleMode::Std64kbX,
            2,
            0,
            true,
        );
        assert!(block.d > 1);
    }
}
