#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod dim;
pub mod equation;
pub mod mode;
pub mod pattern;

pub use dim::{Dim2d, Dim3d};
pub use equation::{Equation, MAX_EQUATION_BITS, MAX_EQUATION_COMPONENTS};
pub use mode::{ResourceType, SwizzleMode};

/// 256 bytes, the micro tiling block size.
pub const SIZE_256: u32 = 256;
/// 4 KiB macro block size.
pub const SIZE_4K: u32 = 4096;
/// 64 KiB macro block size.
pub const SIZE_64K: u32 = 65536;

/// Largest supported element size, log2 of bytes per element (16 bytes).
pub const MAX_ELEMENT_BYTES_LOG2: usize = 5;

/// Deepest mip chain the layout calculators accept (16K x 16K base level).
pub const MAX_MIP_LEVELS: usize = 16;
