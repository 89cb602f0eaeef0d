//! Per-bit XOR address equations.
//!
//! An equation is the unrolled form of a swizzle pattern for one
//! (resource class, mode, element size) combination: every intra-block
//! address bit lists the coordinate bits XOR'd to produce it. Evaluating an
//! equation is a handful of shifts per bit, which is why the engine builds
//! the whole table up front instead of walking the raw pattern masks on
//! each query.

use crate::dim::Dim3d;
use crate::mode::SwizzleMode;
use crate::pattern::{self, PatInfo, PatternBit};

/// Most address bits an equation can produce (covers 256KB blocks).
pub const MAX_EQUATION_BITS: usize = 20;
/// Most coordinate bits XOR'd into a single address bit.
pub const MAX_EQUATION_COMPONENTS: usize = 5;
/// Component budget of legacy three-term equation consumers.
pub const MAX_LEGACY_EQUATION_COMPONENTS: usize = 3;

/// Coordinate channel feeding an equation term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Horizontal, indexed in bytes (element x shifted by the element size).
    X,
    /// Vertical, in texels.
    Y,
    /// Slice.
    Z,
}

/// One source term of an output bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordTerm {
    /// Source channel.
    pub channel: Channel,
    /// Bit index within the channel.
    pub index: u8,
}

impl CoordTerm {
    const fn new(channel: Channel, index: u32) -> Self {
        Self {
            channel,
            index: index as u8,
        }
    }

    #[inline]
    fn select(self, x_bytes: u32, y: u32, z: u32) -> u32 {
        let source = match self.channel {
            Channel::X => x_bytes,
            Channel::Y => y,
            Channel::Z => z,
        };
        (source >> self.index) & 1
    }
}

/// An address-bit equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    comps: [[Option<CoordTerm>; MAX_EQUATION_BITS]; MAX_EQUATION_COMPONENTS],
    /// Number of output bits (the block size, log2).
    pub num_bits: u32,
    /// Largest number of terms feeding any single bit.
    pub num_components: u32,
}

impl Equation {
    fn empty(num_bits: u32, num_components: u32) -> Self {
        Self {
            comps: [[None; MAX_EQUATION_BITS]; MAX_EQUATION_COMPONENTS],
            num_bits,
            num_components,
        }
    }

    /// The intra-block byte offset for a coordinate. `x_bytes` is the x
    /// coordinate scaled to bytes (`x << elem_log2`).
    pub fn evaluate(&self, x_bytes: u32, y: u32, z: u32) -> u32 {
        let mut offset = 0u32;
        for i in 0..self.num_bits as usize {
            let mut v = 0u32;
            for comp in &self.comps {
                if let Some(term) = comp[i] {
                    v ^= term.select(x_bytes, y, z);
                }
            }
            offset |= v << i;
        }
        offset
    }

    /// All terms feeding output bit `bit`.
    pub fn terms_for_bit(&self, bit: usize) -> impl Iterator<Item = CoordTerm> + '_ {
        self.comps.iter().filter_map(move |comp| comp[bit])
    }

    /// Builds the equation for a swizzle pattern.
    ///
    /// `block` must be the data-block extents of the combination; the
    /// coverage invariant is checked against it: a coordinate bit inside the
    /// block that no output bit sources would alias two texels to one
    /// address, which is a table bug, not a caller error.
    pub fn from_pattern(
        info: &PatInfo,
        elem_log2: u32,
        mode: SwizzleMode,
        block: Dim3d,
        block_size_log2: u32,
    ) -> Self {
        let full = pattern::full_pattern(info);
        let mut eq = Equation::empty(block_size_log2, u32::from(info.max_components));

        // Byte-in-element bits pass through.
        for i in 0..elem_log2 as usize {
            eq.comps[0][i] = Some(CoordTerm::new(Channel::X, i as u32));
        }

        if !mode.is_xor() {
            // One source per bit; read it off directly.
            for i in elem_log2 as usize..block_size_log2 as usize {
                let bit = PatternBit(full[i]);
                debug_assert_eq!(bit.component_count(), 1);
                eq.comps[0][i] = Some(if bit.x() != 0 {
                    CoordTerm::new(Channel::X, bit.x().trailing_zeros() + elem_log2)
                } else if bit.y() != 0 {
                    CoordTerm::new(Channel::Y, bit.y().trailing_zeros())
                } else {
                    debug_assert!(bit.z() != 0);
                    CoordTerm::new(Channel::Z, bit.z().trailing_zeros())
                });
            }
            return eq;
        }

        let blk_x_mask = block.w - 1;
        let blk_y_mask = block.h - 1;
        let blk_z_mask = block.d - 1;
        let mut x_mask = 0u32;
        let mut y_mask = 0u32;
        let mut z_mask = 0u32;

        for i in elem_log2 as usize..block_size_log2 as usize {
            let mut bit = PatternBit(full[i]);
            for comp in 0..MAX_EQUATION_COMPONENTS {
                if bit.is_zero() {
                    // Bits above the element size must have a source.
                    debug_assert!(comp != 0);
                    debug_assert!(comp <= info.max_components as usize);
                    break;
                }
                if bit.x() != 0 {
                    let x_log2 = u32::from(bit.x()).trailing_zeros();
                    bit.0 &= !(1u64 << x_log2);
                    x_mask |= 1 << x_log2;
                    eq.comps[comp][i] = Some(CoordTerm::new(Channel::X, x_log2 + elem_log2));
                } else if bit.y() != 0 {
                    let y_log2 = u32::from(bit.y()).trailing_zeros();
                    bit.0 &= !(1u64 << (16 + y_log2));
                    y_mask |= 1 << y_log2;
                    eq.comps[comp][i] = Some(CoordTerm::new(Channel::Y, y_log2));
                } else if bit.z() != 0 {
                    let z_log2 = u32::from(bit.z()).trailing_zeros();
                    bit.0 &= !(1u64 << (32 + z_log2));
                    z_mask |= 1 << z_log2;
                    eq.comps[comp][i] = Some(CoordTerm::new(Channel::Z, z_log2));
                } else {
                    // Sample bits never reach the single-sample table.
                    unreachable!("sample term in a single-sample pattern");
                }
            }
            debug_assert!(bit.is_zero(), "more XOR terms than components");
        }

        // A dropped block-interior bit would alias two texels.
        debug_assert_eq!(x_mask & blk_x_mask, blk_x_mask);
        debug_assert_eq!(y_mask & blk_y_mask, blk_y_mask);
        debug_assert_eq!(z_mask & blk_z_mask, blk_z_mask);
        // PRT blocks must be relocatable: no source outside the block.
        debug_assert!(
            !mode.is_t()
                || (x_mask == blk_x_mask && y_mask == blk_y_mask && z_mask == blk_z_mask)
        );

        eq
    }

    /// Builds the thin standard-mode equation procedurally.
    ///
    /// Standard thin swizzles predate the table-driven patterns: x fills the
    /// offset up to the 16-byte boundary, y takes half the remaining micro
    /// bits, x the rest, and the macro bits alternate y/x.
    pub fn thin_standard(elem_log2: u32, block_size_log2: u32) -> Self {
        let mut eq = Equation::empty(block_size_log2, 1);
        let mut x = 0u32;
        let mut y = 0u32;
        let mut bit = 0usize;

        for i in 0..elem_log2 {
            eq.comps[0][bit] = Some(CoordTerm::new(Channel::X, i));
            bit += 1;
        }
        while bit < 4 {
            eq.comps[0][bit] = Some(CoordTerm::new(Channel::X, x + elem_log2));
            x += 1;
            bit += 1;
        }
        let micro_y_bits = (8 - elem_log2) / 2;
        for _ in 0..micro_y_bits {
            eq.comps[0][bit] = Some(CoordTerm::new(Channel::Y, y));
            y += 1;
            bit += 1;
        }
        while bit < 8 {
            eq.comps[0][bit] = Some(CoordTerm::new(Channel::X, x + elem_log2));
            x += 1;
            bit += 1;
        }
        while bit < block_size_log2 as usize {
            eq.comps[0][bit] = Some(CoordTerm::new(Channel::Y, y));
            y += 1;
            bit += 1;
            if bit < block_size_log2 as usize {
                eq.comps[0][bit] = Some(CoordTerm::new(Channel::X, x + elem_log2));
                x += 1;
                bit += 1;
            }
        }

        eq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block;
    use crate::mode::ResourceType;
    use rstest::rstest;

    fn coverage(eq: &Equation) -> (u32, u32, u32) {
        let (mut x, mut y, mut z) = (0u32, 0u32, 0u32);
        for bit in 0..eq.num_bits as usize {
            for term in eq.terms_for_bit(bit) {
                match term.channel {
                    Channel::X => x |= 1 << term.index,
                    Channel::Y => y |= 1 << term.index,
                    Channel::Z => z |= 1 << term.index,
                }
            }
        }
        (x, y, z)
    }

    #[rstest]
    #[case(0, 8)]
    #[case(2, 8)]
    #[case(2, 12)]
    #[case(2, 16)]
    #[case(4, 16)]
    fn thin_standard_covers_block(#[case] elem_log2: u32, #[case] blk_log2: u32) {
        let eq = Equation::thin_standard(elem_log2, blk_log2);
        let dims = block::thin_block_dims(SwizzleMode::Std64kb, elem_log2, 1, blk_log2);
        let (x, y, _) = coverage(&eq);
        // x coverage is in byte-address bits.
        assert_eq!(x, (dims.w << elem_log2) - 1);
        assert_eq!(y, dims.h - 1);
    }

    #[test]
    fn thin_standard_is_linear_in_low_x() {
        // 4 bpe: the first 16 bytes of a block are the first 4 texels of a row.
        let eq = Equation::thin_standard(2, 8);
        for x in 0..4u32 {
            assert_eq!(eq.evaluate(x << 2, 0, 0), x << 2);
        }
    }

    #[test]
    fn display_pattern_equation_is_injective_within_block() {
        // 256B display, 4 bpe: all 64 texels of the 8x8 block map to
        // distinct offsets that tile the 256 bytes.
        let info = &pattern::SW_256_D[2];
        let eq = Equation::from_pattern(info, 2, SwizzleMode::Disp256b, Dim3d::new(8, 8, 1), 8);
        let mut seen = [false; 256];
        for y in 0..8u32 {
            for x in 0..8u32 {
                let offset = eq.evaluate(x << 2, y, 0) as usize;
                assert!(offset < 256);
                for byte in 0..4 {
                    assert!(!seen[offset + byte], "offset {offset} hit twice");
                    seen[offset + byte] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn xor_pattern_covers_its_block() {
        // 64KB render-optimized, 4 bpe, largest topology group in the table.
        for group in 0..15usize {
            let info = &pattern::SW_64K_ZR_X_1XAA[group * 5 + 2];
            let dims = block::surface_block_dims(
                ResourceType::Tex2d,
                SwizzleMode::Render64kbX,
                2,
                1,
                16,
            )
            .unwrap();
            let eq =
                Equation::from_pattern(info, 2, SwizzleMode::Render64kbX, dims, 16);
            let (x, y, _) = coverage(&eq);
            assert_eq!(x & ((dims.w << 2) - 1), (dims.w << 2) - 1, "group {group}");
            assert_eq!(y & (dims.h - 1), dims.h - 1, "group {group}");
        }
    }
}
