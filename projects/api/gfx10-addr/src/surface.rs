//! Request and result types for the surface queries.
//!
//! Requests are plain values constructed per call and never mutated by the
//! engine; results are produced fresh and owned by the caller.

use gfx10_swizzle::{Dim3d, ResourceType, SwizzleMode};

/// Coarse format class, standing in for a full format table.
///
/// The engine does not interpret texel formats; the only format properties
/// that reach addressing decisions are the ones below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatClass {
    /// Ordinary uncompressed format.
    #[default]
    Unknown,
    /// Block-compressed (BCn/ASTC/ETC class) format.
    BlockCompressed,
    /// Macro-pixel-packed (subsampled YUV class) format.
    MacroPixelPacked,
    /// 96-bit three-channel format; linear only.
    Rgb96,
}

/// Per-surface usage flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceFlags {
    /// Color render target.
    pub color: bool,
    /// Depth buffer.
    pub depth: bool,
    /// Stencil buffer.
    pub stencil: bool,
    /// Scanned out by the display engine.
    pub display: bool,
    /// FMask surface of an MSAA color target.
    pub fmask: bool,
    /// Partially-resident texture; blocks must be relocatable.
    pub prt: bool,
    /// Quad-buffer stereo surface (two eyes stacked).
    pub qb_stereo: bool,
    /// 3D resource addressed as an array of 2D slices.
    pub view_3d_as_2d_array: bool,
    /// Unordered-access view; write ordering not guaranteed.
    pub unordered: bool,
}

/// A surface description, input to layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfoRequest {
    /// Usage flags.
    pub flags: SurfaceFlags,
    /// Resource dimensionality.
    pub resource_type: ResourceType,
    /// Tiling mode to lay the surface out in.
    pub swizzle_mode: SwizzleMode,
    /// Format class; see [`FormatClass`].
    pub format_class: FormatClass,
    /// Bits per element.
    pub bpp: u32,
    /// Mip 0 width in elements.
    pub width: u32,
    /// Mip 0 height in elements.
    pub height: u32,
    /// Slice count (depth for 3D resources).
    pub num_slices: u32,
    /// Mip level count.
    pub num_mip_levels: u32,
    /// Sample count.
    pub num_samples: u32,
    /// Fragment count (equals samples except for EQAA).
    pub num_frags: u32,
}

impl Default for SurfaceInfoRequest {
    fn default() -> Self {
        Self {
            flags: SurfaceFlags::default(),
            resource_type: ResourceType::Tex2d,
            swizzle_mode: SwizzleMode::Linear,
            format_class: FormatClass::Unknown,
            bpp: 32,
            width: 0,
            height: 0,
            num_slices: 1,
            num_mip_levels: 1,
            num_samples: 1,
            num_frags: 1,
        }
    }
}

impl SurfaceInfoRequest {
    /// log2 of the element size in bytes.
    pub(crate) fn elem_log2(&self) -> u32 {
        (self.bpp >> 3).trailing_zeros()
    }

    /// Copy with all count fields clamped to at least one, the shape the
    /// layout calculators work on.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
            num_slices: self.num_slices.max(1),
            num_mip_levels: self.num_mip_levels.max(1),
            num_samples: self.num_samples.max(1),
            num_frags: if self.num_frags == 0 {
                self.num_samples.max(1)
            } else {
                self.num_frags
            },
            ..*self
        }
    }
}

/// Per-mip-level layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceMipInfo {
    /// Padded pitch in elements.
    pub pitch: u32,
    /// Padded height in elements.
    pub height: u32,
    /// Padded depth.
    pub depth: u32,
    /// Byte offset of the level within a slice.
    pub offset: u64,
    /// Byte offset of the level's first macro block.
    pub macro_block_offset: u64,
    /// Intra-block byte offset for levels packed in the mip tail.
    pub mip_tail_offset: u64,
    /// Texel coordinate of the level within the shared tail block.
    pub mip_tail_coord: Dim3d,
    /// Whether the level lives in the mip tail block.
    pub in_mip_tail: bool,
}

/// Stereo layout outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StereoInfo {
    /// Padded height of one eye.
    pub eye_height: u32,
    /// XOR applied to the right eye's pipe-bank XOR value.
    pub right_swizzle: u32,
}

/// Computed surface layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Padded pitch of mip 0, in elements.
    pub pitch: u32,
    /// Padded height of mip 0, in elements.
    pub height: u32,
    /// Padded slice count.
    pub num_slices: u32,
    /// Tiling block width in elements (pitch alignment for linear).
    pub block_width: u32,
    /// Tiling block height in elements.
    pub block_height: u32,
    /// Tiling block depth in slices.
    pub block_slices: u32,
    /// Bytes per slice (the whole mip chain of one slice).
    pub slice_size: u64,
    /// Total surface size in bytes.
    pub surf_size: u64,
    /// Required base address alignment in bytes.
    pub base_align: u32,
    /// Whether even mip 0 lives in the tail block.
    pub mip_chain_in_tail: bool,
    /// First mip level packed into the shared tail block; equals the mip
    /// count when there is no tail.
    pub first_mip_id_in_tail: u32,
    /// Per-level layout, one entry per requested mip level.
    pub mips: Vec<SurfaceMipInfo>,
    /// Stereo outputs, present when the request had `qb_stereo` set.
    pub stereo: Option<StereoInfo>,
}

/// A texel coordinate to resolve to a byte address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceAddrRequest {
    /// The surface the coordinate belongs to; width and height are the
    /// unaligned mip 0 dimensions.
    pub surface: SurfaceInfoRequest,
    /// X coordinate in elements.
    pub x: u32,
    /// Y coordinate in elements.
    pub y: u32,
    /// Slice index.
    pub slice: u32,
    /// Sample index.
    pub sample: u32,
    /// Mip level.
    pub mip_id: u32,
    /// Pipe-bank XOR seed of the surface.
    pub pipe_bank_xor: u32,
}

/// A resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressResult {
    /// Byte offset from the surface base.
    pub addr: u64,
    /// Bit position within the byte, for sub-byte metadata elements.
    pub bit_position: u32,
}
