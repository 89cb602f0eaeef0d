//! Hardware configuration: the raw `GB_ADDR_CONFIG` register view, the chip
//! variant table, and the derived per-device parameters.

use bitfield::bitfield;

use crate::error::{AddrError, AddrResult};

bitfield! {
    /// Raw view of the 32-bit `GB_ADDR_CONFIG` register.
    ///
    /// Field encodings are fixed enumerations; anything outside them makes
    /// the device descriptor unusable.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct GbAddrConfig(u32);
    impl Debug;
    u32;
    /// Pipe count code: `n` encodes `1 << n` pipes, 0..=6.
    pub num_pipes, _: 2, 0;
    /// Pipe interleave code: 0=256B, 1=512B, 2=1KB, 3=2KB.
    pub pipe_interleave_size, _: 5, 3;
    /// Max compressed fragments code: `n` encodes `1 << n` fragments.
    pub max_compressed_frags, _: 7, 6;
    /// Packer count code: `n` encodes `1 << n` packers.
    pub num_pkrs, _: 10, 8;
}

/// Chip variants of the GFX10 generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    /// Navi 10.
    Navi10,
    /// Navi 12.
    Navi12,
    /// Navi 14.
    Navi14,
    /// Navi 21 (RB+).
    Navi21,
    /// Navi 22 (RB+).
    Navi22,
    /// Navi 23 (RB+).
    Navi23,
    /// Navi 24 (RB+).
    Navi24,
    /// Van Gogh APU (RB+).
    VanGogh,
    /// Rembrandt APU (RB+).
    Rembrandt,
    /// Raphael APU (RB+).
    Raphael,
    /// Mendocino APU (RB+).
    Mendocino,
}

/// Per-chip feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipFlags {
    /// Render-backend-plus topology: packer/shader-array granularity
    /// participates in block sizing and a variable block size exists.
    pub rb_plus: bool,
    /// DCC cannot be used with 3D display swizzles on this chip.
    pub dcc_unsup_3d_sw_dis: bool,
    /// Depth/stencil mip tails use the corrected dimension threshold.
    pub ds_mipmap_htile_fix: bool,
    /// Display engine is DCN 2.0 (wider displayable mode set).
    pub is_dcn20: bool,
}

impl Chip {
    pub(crate) fn flags(self) -> ChipFlags {
        let rb_plus = !matches!(self, Chip::Navi10 | Chip::Navi12 | Chip::Navi14);
        ChipFlags {
            rb_plus,
            dcc_unsup_3d_sw_dis: !rb_plus,
            ds_mipmap_htile_fix: !matches!(self, Chip::Navi10),
            is_dcn20: matches!(self, Chip::Navi10 | Chip::Navi12 | Chip::Navi14),
        }
    }
}

/// Parameters derived from the configuration register, immutable for the
/// engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareConfig {
    /// Pipe count, log2.
    pub pipes_log2: u32,
    /// Pipe interleave bytes, log2.
    pub pipe_interleave_log2: u32,
    /// Maximum compressed fragments, log2.
    pub max_comp_frag_log2: u32,
    /// Packer count, log2.
    pub num_pkr_log2: u32,
    /// Shader array count, log2.
    pub num_sa_log2: u32,
    /// Variable block size, log2; zero when the chip has none.
    pub block_var_size_log2: u32,
    /// Chip feature flags.
    pub flags: ChipFlags,
}

impl HardwareConfig {
    /// Decodes the register for a chip variant.
    pub fn parse(chip: Chip, gb_addr_config: u32) -> AddrResult<Self> {
        let reg = GbAddrConfig(gb_addr_config);
        let flags = chip.flags();

        let pipes_log2 = reg.num_pipes();
        if pipes_log2 > 6 {
            log::debug!("rejecting NUM_PIPES encoding {}", pipes_log2);
            return Err(AddrError::UnsupportedConfig);
        }

        let pipe_interleave_log2 = 8 + reg.pipe_interleave_size();
        // The XOR equations and patterns are only defined for the 256-byte
        // interleave; larger values have no software addressing support.
        if pipe_interleave_log2 != 8 {
            log::debug!(
                "rejecting PIPE_INTERLEAVE_SIZE encoding {}",
                reg.pipe_interleave_size()
            );
            return Err(AddrError::UnsupportedConfig);
        }

        let max_comp_frag_log2 = reg.max_compressed_frags();

        let num_pkr_log2 = reg.num_pkrs();
        if num_pkr_log2 > pipes_log2 || pipes_log2 - num_pkr_log2 > 2 {
            log::debug!(
                "rejecting packer/pipe topology: {} pkrs vs {} pipes (log2)",
                num_pkr_log2,
                pipes_log2
            );
            return Err(AddrError::UnsupportedConfig);
        }
        let num_sa_log2 = num_pkr_log2.saturating_sub(1);

        // VAR block size is 16KB * num_pipes; pre-RB+ parts have no VAR modes.
        let block_var_size_log2 = if flags.rb_plus { pipes_log2 + 14 } else { 0 };

        Ok(Self {
            pipes_log2,
            pipe_interleave_log2,
            max_comp_frag_log2,
            num_pkr_log2,
            num_sa_log2,
            block_var_size_log2,
            flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4 pipes, 256B interleave, 4 packers... the Navi 21 power-on value
    /// shape used throughout the tests: fields packed from the low bit.
    pub(crate) fn reg(pipes_log2: u32, interleave: u32, max_frag_log2: u32, pkrs_log2: u32) -> u32 {
        pipes_log2 | (interleave << 3) | (max_frag_log2 << 6) | (pkrs_log2 << 8)
    }

    #[test]
    fn parses_a_valid_register() {
        let cfg = HardwareConfig::parse(Chip::Navi21, reg(2, 0, 3, 2)).unwrap();
        assert_eq!(cfg.pipes_log2, 2);
        assert_eq!(cfg.pipe_interleave_log2, 8);
        assert_eq!(cfg.max_comp_frag_log2, 3);
        assert_eq!(cfg.num_pkr_log2, 2);
        assert_eq!(cfg.num_sa_log2, 1);
        assert_eq!(cfg.block_var_size_log2, 16);
        assert!(cfg.flags.rb_plus);
    }

    #[test]
    fn rejects_unknown_pipe_count() {
        assert_eq!(
            HardwareConfig::parse(Chip::Navi21, reg(7, 0, 0, 5)),
            Err(AddrError::UnsupportedConfig)
        );
    }

    #[test]
    fn rejects_wide_interleave() {
        assert_eq!(
            HardwareConfig::parse(Chip::Navi10, reg(4, 2, 1, 2)),
            Err(AddrError::UnsupportedConfig)
        );
    }

    #[test]
    fn rejects_inconsistent_packer_topology() {
        // Packers exceeding pipes.
        assert_eq!(
            HardwareConfig::parse(Chip::Navi21, reg(1, 0, 0, 3)),
            Err(AddrError::UnsupportedConfig)
        );
        // Pipes exceeding packers by more than two log2 steps.
        assert_eq!(
            HardwareConfig::parse(Chip::Navi21, reg(5, 0, 0, 1)),
            Err(AddrError::UnsupportedConfig)
        );
    }

    #[test]
    fn pre_rb_plus_chips_have_no_var_block() {
        let cfg = HardwareConfig::parse(Chip::Navi10, reg(4, 0, 3, 3)).unwrap();
        assert!(!cfg.flags.rb_plus);
        assert_eq!(cfg.block_var_size_log2, 0);
        assert!(cfg.flags.is_dcn20);
        assert!(!cfg.flags.ds_mipmap_htile_fix);
    }
}
