//! Shared fixtures for the unit tests.

use crate::config::Chip;
use crate::engine::Gfx10AddrLib;

/// Packs a `GB_ADDR_CONFIG` value from its field encodings.
pub fn gb_addr_config(
    pipes_log2: u32,
    interleave: u32,
    max_frag_log2: u32,
    pkrs_log2: u32,
) -> u32 {
    pipes_log2 | (interleave << 3) | (max_frag_log2 << 6) | (pkrs_log2 << 8)
}

/// Navi 21 shape: 4 pipes, 256B interleave, 8 compressed fragments,
/// 4 packers.
pub fn navi21_4pipe() -> Gfx10AddrLib {
    Gfx10AddrLib::new(Chip::Navi21, gb_addr_config(2, 0, 3, 2)).unwrap()
}

/// Navi 10 shape: 16 pipes, 256B interleave, 8 compressed fragments.
pub fn navi10_16pipe() -> Gfx10AddrLib {
    Gfx10AddrLib::new(Chip::Navi10, gb_addr_config(4, 0, 3, 3)).unwrap()
}
