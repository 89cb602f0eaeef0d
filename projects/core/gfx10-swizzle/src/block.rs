//! Tiling-block geometry: micro (256-byte) block shapes, macro block
//! dimensions, and the mip-tail thresholds derived from them.

use crate::dim::{Dim2d, Dim3d};
use crate::mode::{self, ResourceType, SwizzleMode};

/// 256-byte micro block extents for thin resources, indexed by
/// log2(bytes per element).
pub const BLOCK256_2D: [Dim2d; 5] = [
    Dim2d { w: 16, h: 16 },
    Dim2d { w: 16, h: 8 },
    Dim2d { w: 8, h: 8 },
    Dim2d { w: 8, h: 4 },
    Dim2d { w: 4, h: 4 },
];

/// 256-byte micro block extents for thick (3D) resources.
pub const BLOCK256_3D: [Dim3d; 5] = [
    Dim3d::new(8, 4, 8),
    Dim3d::new(4, 4, 8),
    Dim3d::new(4, 4, 4),
    Dim3d::new(4, 2, 4),
    Dim3d::new(2, 2, 4),
];

/// Thick 64KB block extents, log2, indexed by log2(bytes per element).
pub const BLOCK64K_LOG2_3D: [Dim3d; 5] = [
    Dim3d::new(6, 5, 5),
    Dim3d::new(5, 5, 5),
    Dim3d::new(5, 5, 4),
    Dim3d::new(5, 4, 4),
    Dim3d::new(4, 4, 4),
];

/// Thick 4KB block extents, log2, indexed by log2(bytes per element).
pub const BLOCK4K_LOG2_3D: [Dim3d; 5] = [
    Dim3d::new(4, 4, 4),
    Dim3d::new(3, 4, 4),
    Dim3d::new(3, 4, 3),
    Dim3d::new(3, 3, 3),
    Dim3d::new(2, 3, 3),
];

/// log2 extents of the 256-byte micro block for the given mode.
///
/// Thin resources split the `8 - elem_log2` offset bits between width and
/// height, width taking the odd bit; Z-order modes give sample bits priority
/// over coordinate bits. Thick resources split three ways.
pub fn micro_block_size_log2(
    rsrc: ResourceType,
    mode: SwizzleMode,
    elem_log2: u32,
    num_samples_log2: u32,
) -> Dim3d {
    if mode::is_thin(rsrc, mode) {
        let mut block_bits = 8 - elem_log2;
        if mode.is_z_order() {
            block_bits -= num_samples_log2;
        }
        Dim3d {
            w: (block_bits >> 1) + (block_bits & 1),
            h: block_bits >> 1,
            d: 0,
        }
    } else {
        debug_assert!(mode::is_thick(rsrc, mode));
        let block_bits = 8 - elem_log2;
        Dim3d {
            w: (block_bits / 3) + u32::from(block_bits % 3 > 1),
            h: block_bits / 3,
            d: (block_bits / 3) + u32::from(block_bits % 3 > 0),
        }
    }
}

/// Block extents in texels for a thin (single-slice) tiled mode.
///
/// The 256-byte micro shape is amplified by the remaining block bits, height
/// taking the odd bit; sample count shrinks the extents since samples of one
/// texel share the block.
pub fn thin_block_dims(
    mode: SwizzleMode,
    elem_log2: u32,
    num_samples: u32,
    block_size_log2: u32,
) -> Dim3d {
    let in_256b_log2 = block_size_log2 - 8;
    let width_amp = in_256b_log2 / 2;
    let height_amp = in_256b_log2 - width_amp;
    let micro = BLOCK256_2D[elem_log2 as usize];

    let mut dims = Dim3d {
        w: micro.w << width_amp,
        h: micro.h << height_amp,
        d: 1,
    };

    if num_samples > 1 {
        let samples_log2 = num_samples.trailing_zeros();
        let q = samples_log2 >> 1;
        let r = samples_log2 & 1;
        if block_size_log2 & 1 != 0 {
            dims.w >>= q;
            dims.h >>= q + r;
        } else {
            dims.w >>= q + r;
            dims.h >>= q;
        }
    }

    dims
}

/// Block extents in texels for a thick (3D standard/display) tiled mode.
pub fn thick_block_dims(block_size_log2: u32, elem_log2: u32) -> Dim3d {
    let log2_dims = match block_size_log2 {
        12 => BLOCK4K_LOG2_3D[elem_log2 as usize],
        16 => BLOCK64K_LOG2_3D[elem_log2 as usize],
        _ => unreachable!("thick blocks exist only in the 4KB and 64KB families"),
    };
    Dim3d {
        w: 1 << log2_dims.w,
        h: 1 << log2_dims.h,
        d: 1 << log2_dims.d,
    }
}

/// Data-block extents for a surface; `None` when the mode has no tiling
/// block (linear).
pub fn surface_block_dims(
    rsrc: ResourceType,
    mode: SwizzleMode,
    elem_log2: u32,
    num_frags: u32,
    block_size_log2: u32,
) -> Option<Dim3d> {
    if mode.is_linear() {
        None
    } else if mode::is_thick(rsrc, mode) {
        Some(thick_block_dims(block_size_log2, elem_log2))
    } else {
        Some(thin_block_dims(mode, elem_log2, num_frags, block_size_log2))
    }
}

/// Largest mip extents that still start a mip tail: one block with its
/// widest log2 dimension halved.
pub fn mip_tail_dims(
    rsrc: ResourceType,
    mode: SwizzleMode,
    block_size_log2: u32,
    block: Dim3d,
) -> Dim3d {
    let mut tail = block;
    if mode::is_thick(rsrc, mode) {
        match block_size_log2 % 3 {
            0 => tail.h >>= 1,
            1 => tail.w >>= 1,
            _ => tail.d >>= 1,
        }
    } else if block_size_log2 & 1 != 0 {
        tail.h >>= 1;
    } else {
        tail.w >>= 1;
    }
    tail
}

/// Number of mip levels one tail block can hold.
pub fn max_mips_in_tail(block_size_log2: u32, thin: bool) -> u32 {
    let mut effective_log2 = block_size_log2;
    if !thin {
        effective_log2 -= (block_size_log2 - 8) / 3;
    }
    if effective_log2 <= 11 {
        1 + (1 << (effective_log2 - 9))
    } else {
        effective_log2 - 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn micro_block_capacity_is_256_bytes() {
        for elem_log2 in 0..5u32 {
            let thin = BLOCK256_2D[elem_log2 as usize];
            assert_eq!(thin.w * thin.h << elem_log2, 256, "thin {elem_log2}");
            let thick = BLOCK256_3D[elem_log2 as usize];
            assert_eq!(thick.w * thick.h * thick.d << elem_log2, 256, "thick {elem_log2}");
        }
    }

    #[test]
    fn thick_block_capacity_matches_family_size() {
        for elem_log2 in 0..5u32 {
            let d4k = BLOCK4K_LOG2_3D[elem_log2 as usize];
            assert_eq!(d4k.w + d4k.h + d4k.d + elem_log2, 12);
            let d64k = BLOCK64K_LOG2_3D[elem_log2 as usize];
            assert_eq!(d64k.w + d64k.h + d64k.d + elem_log2, 16);
        }
    }

    #[rstest]
    #[case(SwizzleMode::Std64kbX, 2, 1, 16, Dim3d::new(128, 128, 1))]
    #[case(SwizzleMode::Std4kbX, 2, 1, 12, Dim3d::new(32, 32, 1))]
    #[case(SwizzleMode::Disp64kbX, 3, 1, 16, Dim3d::new(128, 64, 1))]
    #[case(SwizzleMode::Z64kbX, 2, 4, 16, Dim3d::new(64, 64, 1))]
    #[case(SwizzleMode::Z64kbX, 2, 8, 16, Dim3d::new(32, 64, 1))]
    #[case(SwizzleMode::ZVarX, 2, 1, 17, Dim3d::new(128, 256, 1))]
    fn thin_block_dims_cases(
        #[case] mode: SwizzleMode,
        #[case] elem_log2: u32,
        #[case] samples: u32,
        #[case] blk_log2: u32,
        #[case] expected: Dim3d,
    ) {
        assert_eq!(thin_block_dims(mode, elem_log2, samples, blk_log2), expected);
    }

    #[test]
    fn thin_block_capacity_matches_block_size() {
        for elem_log2 in 0..5u32 {
            for (blk_log2, samples) in [(12u32, 1u32), (16, 1), (16, 4), (17, 1)] {
                let d = thin_block_dims(SwizzleMode::Z64kbX, elem_log2, samples, blk_log2);
                assert_eq!(
                    u64::from(d.w) * u64::from(d.h) * u64::from(samples) << elem_log2,
                    1u64 << blk_log2,
                    "elem {elem_log2} blk {blk_log2} samples {samples}"
                );
            }
        }
    }

    #[test]
    fn mip_tail_halves_one_dimension() {
        let block = Dim3d::new(128, 128, 1);
        let tail = mip_tail_dims(ResourceType::Tex2d, SwizzleMode::Std64kbX, 16, block);
        assert_eq!(tail, Dim3d::new(64, 128, 1));

        let thick = Dim3d::new(32, 32, 16);
        let tail3d = mip_tail_dims(ResourceType::Tex3d, SwizzleMode::Std64kbX, 16, thick);
        assert_eq!(tail3d, Dim3d::new(16, 32, 16));
    }

    #[rstest]
    #[case(16, true, 12)]
    #[case(12, true, 8)]
    #[case(16, false, 10)]
    fn max_mips_in_tail_cases(#[case] blk: u32, #[case] thin: bool, #[case] expected: u32) {
        assert_eq!(max_mips_in_tail(blk, thin), expected);
    }
}
