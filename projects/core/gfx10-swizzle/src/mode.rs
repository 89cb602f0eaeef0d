//! The swizzle-mode catalog.
//!
//! Every legal GFX10 tiling mode, its hardware encoding, and the traits the
//! rest of the engine branches on: which block-size family the mode belongs
//! to, which addressing family, and whether the block offset is XOR'd with
//! the pipe/bank interleave.

use derive_enum_all_values::AllValues;

/// Resource dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum ResourceType {
    /// 1D texture.
    Tex1d,
    /// 2D texture (or 3D viewed as a 2D array for thin modes).
    Tex2d,
    /// 3D texture.
    Tex3d,
}

impl ResourceType {
    /// Index used by the equation lookup table (2D and 3D only).
    pub fn equation_class(self) -> Option<usize> {
        match self {
            ResourceType::Tex1d => None,
            ResourceType::Tex2d => Some(0),
            ResourceType::Tex3d => Some(1),
        }
    }
}

/// Block-size family of a swizzle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFamily {
    /// Row-major, no tiling block.
    Linear,
    /// 256-byte micro block.
    Micro256b,
    /// 4 KiB macro block.
    Macro4kb,
    /// 64 KiB macro block.
    Macro64kb,
    /// Variable-size macro block (`16KB << pipes_log2` on RB+ parts).
    Var,
}

/// Addressing family of a tiled swizzle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwizzleKind {
    /// Z-order (depth/stencil and FMask ordering).
    ZOrder,
    /// Standard layout, texture-copy friendly.
    Standard,
    /// Display-engine compatible layout.
    Display,
    /// Render-target optimized layout.
    Render,
}

/// A legal GFX10 swizzle mode.
///
/// Discriminants are the hardware encoding; reserved encodings have no
/// variant and fail [`SwizzleMode::from_hw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
#[repr(u32)]
pub enum SwizzleMode {
    /// Row-major with 256-byte pitch alignment.
    Linear = 0,
    /// 256B standard.
    Std256b = 1,
    /// 256B display.
    Disp256b = 2,
    /// 4KB standard.
    Std4kb = 5,
    /// 4KB display.
    Disp4kb = 6,
    /// 64KB standard.
    Std64kb = 9,
    /// 64KB display.
    Disp64kb = 10,
    /// 64KB standard, PRT translated.
    Std64kbT = 17,
    /// 64KB display, PRT translated.
    Disp64kbT = 18,
    /// 4KB standard, pipe/bank XOR.
    Std4kbX = 21,
    /// 4KB display, pipe/bank XOR.
    Disp4kbX = 22,
    /// 4KB render-target optimized, pipe/bank XOR.
    Render4kbX = 23,
    /// 64KB Z-order, pipe/bank XOR.
    Z64kbX = 24,
    /// 64KB standard, pipe/bank XOR.
    Std64kbX = 25,
    /// 64KB display, pipe/bank XOR.
    Disp64kbX = 26,
    /// 64KB render-target optimized, pipe/bank XOR.
    Render64kbX = 27,
    /// Variable-block Z-order, pipe/bank XOR.
    ZVarX = 28,
    /// Variable-block render-target optimized, pipe/bank XOR.
    RenderVarX = 31,
    /// Row-major with element-granular pitch.
    LinearGeneral = 32,
}

impl SwizzleMode {
    /// The raw hardware encoding of this mode.
    #[inline]
    pub const fn hw_encoding(self) -> u32 {
        self as u32
    }

    /// Decodes a raw hardware encoding; reserved values yield `None`.
    pub fn from_hw(value: u32) -> Option<Self> {
        SwizzleMode::all_values()
            .iter()
            .copied()
            .find(|m| m.hw_encoding() == value)
    }

    /// Single-bit mask for this mode, for use with the `*_MODES` constants.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << (self as u32)
    }

    /// Block-size family.
    pub const fn block_family(self) -> BlockFamily {
        use SwizzleMode::*;
        match self {
            Linear | LinearGeneral => BlockFamily::Linear,
            Std256b | Disp256b => BlockFamily::Micro256b,
            Std4kb | Disp4kb | Std4kbX | Disp4kbX | Render4kbX => BlockFamily::Macro4kb,
            Std64kb | Disp64kb | Std64kbT | Disp64kbT | Z64kbX | Std64kbX | Disp64kbX
            | Render64kbX => BlockFamily::Macro64kb,
            ZVarX | RenderVarX => BlockFamily::Var,
        }
    }

    /// Addressing family; `None` for the linear modes.
    pub const fn kind(self) -> Option<SwizzleKind> {
        use SwizzleMode::*;
        match self {
            Linear | LinearGeneral => None,
            Std256b | Std4kb | Std64kb | Std64kbT | Std4kbX | Std64kbX => {
                Some(SwizzleKind::Standard)
            }
            Disp256b | Disp4kb | Disp64kb | Disp64kbT | Disp4kbX | Disp64kbX => {
                Some(SwizzleKind::Display)
            }
            Z64kbX | ZVarX => Some(SwizzleKind::ZOrder),
            Render4kbX | Render64kbX | RenderVarX => Some(SwizzleKind::Render),
        }
    }

    /// Whether this is a row-major mode.
    #[inline]
    pub const fn is_linear(self) -> bool {
        matches!(self.block_family(), BlockFamily::Linear)
    }

    /// Whether this mode uses 256-byte micro blocks.
    #[inline]
    pub const fn is_256b(self) -> bool {
        matches!(self.block_family(), BlockFamily::Micro256b)
    }

    /// Whether this mode uses 4 KiB blocks.
    #[inline]
    pub const fn is_4kb(self) -> bool {
        matches!(self.block_family(), BlockFamily::Macro4kb)
    }

    /// Whether this mode uses 64 KiB blocks.
    #[inline]
    pub const fn is_64kb(self) -> bool {
        matches!(self.block_family(), BlockFamily::Macro64kb)
    }

    /// Whether this mode uses the variable block size.
    #[inline]
    pub const fn is_var(self) -> bool {
        matches!(self.block_family(), BlockFamily::Var)
    }

    /// Whether this mode is Z-ordered.
    #[inline]
    pub const fn is_z_order(self) -> bool {
        matches!(self.kind(), Some(SwizzleKind::ZOrder))
    }

    /// Whether this mode is render-target optimized.
    #[inline]
    pub const fn is_render_optimized(self) -> bool {
        matches!(self.kind(), Some(SwizzleKind::Render))
    }

    /// Whether the intra-block offset is XOR'd with pipe/bank bits.
    pub const fn is_xor(self) -> bool {
        use SwizzleMode::*;
        matches!(
            self,
            Std4kbX
                | Disp4kbX
                | Render4kbX
                | Z64kbX
                | Std64kbX
                | Disp64kbX
                | Render64kbX
                | ZVarX
                | RenderVarX
                | Std64kbT
                | Disp64kbT
        )
    }

    /// Whether this is a PRT-translated (`_T`) mode.
    #[inline]
    pub const fn is_t(self) -> bool {
        matches!(self, SwizzleMode::Std64kbT | SwizzleMode::Disp64kbT)
    }

    /// XOR'd but not PRT-translated; only these receive a pipe-bank XOR.
    #[inline]
    pub const fn is_non_prt_xor(self) -> bool {
        self.is_xor() && !self.is_t()
    }

    /// Block size in bytes, log2. Variable-block modes take the per-device
    /// size; zero means the device has no variable block.
    pub const fn block_size_log2(self, block_var_size_log2: u32) -> u32 {
        match self.block_family() {
            BlockFamily::Linear => 8,
            BlockFamily::Micro256b => 8,
            BlockFamily::Macro4kb => 12,
            BlockFamily::Macro64kb => 16,
            BlockFamily::Var => block_var_size_log2,
        }
    }
}

/// Thin: tiles cover one slice. 1D/2D resources always; 3D only in the
/// Z-order and render-optimized modes.
pub const fn is_thin(rsrc: ResourceType, mode: SwizzleMode) -> bool {
    match rsrc {
        ResourceType::Tex1d | ResourceType::Tex2d => true,
        ResourceType::Tex3d => mode.is_z_order() || mode.is_render_optimized(),
    }
}

/// Thick: tiles span multiple slices (3D standard/display modes).
pub const fn is_thick(rsrc: ResourceType, mode: SwizzleMode) -> bool {
    matches!(rsrc, ResourceType::Tex3d) && !mode.is_linear() && !is_thin(rsrc, mode)
}

/// Standard-family check; for 3D resources the display modes tile like
/// standard thick modes.
pub const fn is_standard(rsrc: ResourceType, mode: SwizzleMode) -> bool {
    matches!(mode.kind(), Some(SwizzleKind::Standard))
        || (matches!(rsrc, ResourceType::Tex3d)
            && matches!(mode.kind(), Some(SwizzleKind::Display)))
}

/// Display-family check; on 3D resources only `Disp64kbX` keeps its own
/// (thick display) pattern family.
pub const fn is_display(rsrc: ResourceType, mode: SwizzleMode) -> bool {
    match rsrc {
        ResourceType::Tex3d => matches!(mode, SwizzleMode::Disp64kbX),
        _ => matches!(mode.kind(), Some(SwizzleKind::Display)),
    }
}

/// Render-backend aligned modes get the packer rotate in block sizing.
pub const fn is_rb_aligned(rsrc: ResourceType, mode: SwizzleMode) -> bool {
    mode.is_xor()
        && (mode.is_z_order()
            || mode.is_render_optimized()
            || (matches!(rsrc, ResourceType::Tex3d) && matches!(mode, SwizzleMode::Disp64kbX)))
}

macro_rules! mode_mask {
    ($($m:ident)|+) => { 0 $( | SwizzleMode::$m.mask() )+ };
}

/// The linear modes (`LinearGeneral` is tracked separately by its users).
pub const LINEAR_MODES: u64 = mode_mask!(Linear);
/// 256B-block modes.
pub const BLK_256B_MODES: u64 = mode_mask!(Std256b | Disp256b);
/// 4KB-block modes.
pub const BLK_4KB_MODES: u64 = mode_mask!(Std4kb | Disp4kb | Std4kbX | Disp4kbX | Render4kbX);
/// 64KB-block modes.
pub const BLK_64KB_MODES: u64 = mode_mask!(
    Std64kb | Disp64kb | Std64kbT | Disp64kbT | Z64kbX | Std64kbX | Disp64kbX | Render64kbX
);
/// Variable-block modes.
pub const BLK_VAR_MODES: u64 = mode_mask!(ZVarX | RenderVarX);
/// Z-order modes.
pub const Z_MODES: u64 = mode_mask!(Z64kbX | ZVarX);
/// Standard-family modes.
pub const STANDARD_MODES: u64 =
    mode_mask!(Std256b | Std4kb | Std64kb | Std64kbT | Std4kbX | Std64kbX);
/// Display-family modes.
pub const DISPLAY_MODES: u64 =
    mode_mask!(Disp256b | Disp4kb | Disp64kb | Disp64kbT | Disp4kbX | Disp64kbX);
/// Render-target optimized modes.
pub const RENDER_MODES: u64 = mode_mask!(Render4kbX | Render64kbX | RenderVarX);
/// Pipe/bank XOR (`_X`) modes.
pub const X_MODES: u64 = mode_mask!(
    Std4kbX | Disp4kbX | Render4kbX | Z64kbX | Std64kbX | Disp64kbX | Render64kbX | ZVarX
        | RenderVarX
);
/// PRT translated (`_T`) modes.
pub const T_MODES: u64 = mode_mask!(Std64kbT | Disp64kbT);
/// All modes whose block offset is XOR'd.
pub const XOR_MODES: u64 = X_MODES | T_MODES;

/// 1D resources are linear-only on this generation.
pub const RSRC_1D_MODES: u64 = LINEAR_MODES;
/// Modes a 2D resource may use.
pub const RSRC_2D_MODES: u64 =
    LINEAR_MODES | BLK_256B_MODES | BLK_4KB_MODES | BLK_64KB_MODES | BLK_VAR_MODES;
/// Modes a 3D resource may use.
pub const RSRC_3D_MODES: u64 = LINEAR_MODES
    | mode_mask!(Std4kb | Std64kb | Std64kbT | Std4kbX | Z64kbX | Std64kbX | Disp64kbX | Render64kbX)
    | BLK_VAR_MODES;
/// PRT-capable modes for 2D resources: macro tiled, no pipe/bank XOR.
pub const RSRC_2D_PRT_MODES: u64 =
    (BLK_256B_MODES | BLK_4KB_MODES | BLK_64KB_MODES) & !X_MODES;
/// PRT-capable modes for 3D resources.
pub const RSRC_3D_PRT_MODES: u64 = RSRC_3D_MODES & !(X_MODES | LINEAR_MODES);
/// Thin 64KB modes usable by 3D resources viewed as 2D arrays.
pub const RSRC_3D_THIN_64KB_MODES: u64 = mode_mask!(Z64kbX | Render64kbX);
/// All thin modes usable by 3D resources.
pub const RSRC_3D_THIN_MODES: u64 = RSRC_3D_THIN_64KB_MODES | BLK_VAR_MODES;
/// Thick 4KB modes for 3D resources.
pub const RSRC_3D_THICK_4KB_MODES: u64 = mode_mask!(Std4kb | Std4kbX);
/// Thick 64KB modes for 3D resources.
pub const RSRC_3D_THICK_64KB_MODES: u64 = mode_mask!(Std64kb | Std64kbT | Std64kbX | Disp64kbX);
/// Modes which may hold multisampled color/depth.
pub const MSAA_MODES: u64 = Z_MODES | RENDER_MODES;

/// Display-engine mode masks, by DCN generation and bit depth.
pub mod dcn {
    use super::SwizzleMode;

    /// DCN 2.0, formats below 64bpp.
    pub const DCN20_NON_BPP64_MODES: u64 =
        mode_mask!(Linear | Std4kb | Std64kb | Std64kbT | Std4kbX | Std64kbX);
    /// DCN 2.0, 64bpp formats.
    pub const DCN20_BPP64_MODES: u64 = DCN20_NON_BPP64_MODES
        | mode_mask!(Disp4kb | Disp64kb | Disp64kbT | Disp4kbX | Disp64kbX);
    /// DCN 2.1+, formats below 64bpp.
    pub const DCN21_NON_BPP64_MODES: u64 = mode_mask!(Linear | Std64kb | Std64kbT | Std64kbX);
    /// DCN 2.1+, 64bpp formats.
    pub const DCN21_BPP64_MODES: u64 =
        DCN21_NON_BPP64_MODES | mode_mask!(Disp64kb | Disp64kbT | Disp64kbX);
}

/// Iterates the modes present in a mode mask, lowest encoding first.
pub fn modes_in(mask: u64) -> impl Iterator<Item = SwizzleMode> {
    SwizzleMode::all_values()
        .iter()
        .copied()
        .filter(move |m| mask & m.mask() != 0)
}

/// The highest-encoded mode in a mask: the most capable mode of a
/// block-type/swizzle-type pair, used as the final selection rule.
pub fn largest_mode_in(mask: u64) -> Option<SwizzleMode> {
    if mask == 0 {
        return None;
    }
    SwizzleMode::from_hw(63 - mask.leading_zeros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_one_block_family_and_kind() {
        for mode in SwizzleMode::all_values().iter().copied() {
            // Block family partition via the mask constants.
            let families = [
                (LINEAR_MODES | SwizzleMode::LinearGeneral.mask(), mode.is_linear()),
                (BLK_256B_MODES, mode.is_256b()),
                (BLK_4KB_MODES, mode.is_4kb()),
                (BLK_64KB_MODES, mode.is_64kb()),
                (BLK_VAR_MODES, mode.is_var()),
            ];
            assert_eq!(
                families.iter().filter(|(_, is)| *is).count(),
                1,
                "{mode:?} must be in exactly one block family"
            );
            for (mask, is) in families {
                if is {
                    assert_ne!(mask & mode.mask(), 0, "{mode:?} missing from its family mask");
                }
            }
            if !mode.is_linear() {
                assert!(mode.kind().is_some());
            }
        }
    }

    #[test]
    fn hw_encoding_round_trips() {
        for mode in SwizzleMode::all_values().iter().copied() {
            assert_eq!(SwizzleMode::from_hw(mode.hw_encoding()), Some(mode));
        }
        // Reserved encodings decode to nothing.
        for reserved in [3, 4, 7, 8, 11, 12, 16, 19, 20, 29, 30] {
            assert_eq!(SwizzleMode::from_hw(reserved), None);
        }
    }

    #[test]
    fn xor_modes_are_x_or_t() {
        for mode in modes_in(XOR_MODES) {
            assert!(mode.is_xor());
            assert_eq!(mode.is_t(), T_MODES & mode.mask() != 0);
        }
        assert!(!SwizzleMode::Linear.is_xor());
        assert!(!SwizzleMode::Std64kb.is_xor());
    }

    #[test]
    fn thin_thick_partition_for_3d() {
        assert!(is_thick(ResourceType::Tex3d, SwizzleMode::Std64kb));
        assert!(is_thick(ResourceType::Tex3d, SwizzleMode::Disp64kbX));
        assert!(is_thin(ResourceType::Tex3d, SwizzleMode::Z64kbX));
        assert!(is_thin(ResourceType::Tex3d, SwizzleMode::RenderVarX));
        assert!(is_thin(ResourceType::Tex2d, SwizzleMode::Std64kb));
        assert!(!is_thick(ResourceType::Tex2d, SwizzleMode::Std64kb));
    }

    #[test]
    fn largest_mode_prefers_x_variants() {
        let thin64k_std = STANDARD_MODES & BLK_64KB_MODES;
        assert_eq!(largest_mode_in(thin64k_std), Some(SwizzleMode::Std64kbX));
        assert_eq!(largest_mode_in(0), None);
    }
}
