#![doc = include_str!("../README.MD")]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod meta;
pub mod preferred;
pub mod surface;
mod surface_addr;
mod surface_info;
mod validate;

#[cfg(test)]
mod test_prelude;

pub use config::{Chip, ChipFlags, GbAddrConfig, HardwareConfig};
pub use engine::Gfx10AddrLib;
pub use error::{AddrError, AddrResult};
pub use meta::{
    CmaskAddrRequest, CmaskInfo, CmaskRequest, DccAddrRequest, DccInfo, DccRequest,
    HtileAddrRequest, HtileInfo, HtileRequest, MetaFlags, MetaMipInfo,
};
pub use preferred::{
    BlockSet, BlockType, PreferredSetting, PreferredSettingRequest, SwizzleTypeSet,
};
pub use surface::{
    AddressResult, FormatClass, StereoInfo, SurfaceAddrRequest, SurfaceFlags,
    SurfaceInfoRequest, SurfaceLayout, SurfaceMipInfo,
};

// The mode catalog and geometry types come from the core crate.
pub use gfx10_swizzle::mode::{BlockFamily, SwizzleKind};
pub use gfx10_swizzle::{Dim2d, Dim3d, ResourceType, SwizzleMode};
