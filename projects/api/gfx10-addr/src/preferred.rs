//! Preferred-setting selection: given client constraints, choose the best
//! legal swizzle mode for a surface.
//!
//! Selection is a series of narrowing passes over a mode mask — forbidden
//! block types, preferred swizzle types, XOR and alignment limits, hardware
//! legality — followed by a padded-size comparison between the surviving
//! block types and a fixed swizzle-type priority per format class.

use gfx10_swizzle::block;
use gfx10_swizzle::dim::log2;
use gfx10_swizzle::mode::{self, ResourceType, SwizzleMode};

use crate::engine::Gfx10AddrLib;
use crate::error::{AddrError, AddrResult};
use crate::surface_info::{align_padded_size, padded_size_in_elements};
use crate::surface::{FormatClass, SurfaceFlags, SurfaceInfoRequest};

/// Resource block types, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlockType {
    /// No tiling block.
    Linear,
    /// 256B micro block.
    Micro,
    /// Thin 4KB block.
    Thin4kb,
    /// Thick 4KB block (3D).
    Thick4kb,
    /// Thin 64KB block.
    Thin64kb,
    /// Thick 64KB block (3D).
    Thick64kb,
    /// Thin variable-size block.
    ThinVar,
}

const TILED_BLOCK_TYPES: [BlockType; 6] = [
    BlockType::Micro,
    BlockType::Thin4kb,
    BlockType::Thick4kb,
    BlockType::Thin64kb,
    BlockType::Thick64kb,
    BlockType::ThinVar,
];

/// A set of block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockSet {
    /// Linear allowed/present.
    pub linear: bool,
    /// 256B micro blocks.
    pub micro: bool,
    /// Thin 4KB blocks.
    pub macro_thin_4kb: bool,
    /// Thick 4KB blocks.
    pub macro_thick_4kb: bool,
    /// Thin 64KB blocks.
    pub macro_thin_64kb: bool,
    /// Thick 64KB blocks.
    pub macro_thick_64kb: bool,
    /// Variable-size blocks.
    pub var: bool,
}

impl BlockSet {
    fn contains(&self, block: BlockType) -> bool {
        match block {
            BlockType::Linear => self.linear,
            BlockType::Micro => self.micro,
            BlockType::Thin4kb => self.macro_thin_4kb,
            BlockType::Thick4kb => self.macro_thick_4kb,
            BlockType::Thin64kb => self.macro_thin_64kb,
            BlockType::Thick64kb => self.macro_thick_64kb,
            BlockType::ThinVar => self.var,
        }
    }

    fn remove(&mut self, block: BlockType) {
        match block {
            BlockType::Linear => self.linear = false,
            BlockType::Micro => self.micro = false,
            BlockType::Thin4kb => self.macro_thin_4kb = false,
            BlockType::Thick4kb => self.macro_thick_4kb = false,
            BlockType::Thin64kb => self.macro_thin_64kb = false,
            BlockType::Thick64kb => self.macro_thick_64kb = false,
            BlockType::ThinVar => self.var = false,
        }
    }

    fn count(&self) -> u32 {
        [
            self.linear,
            self.micro,
            self.macro_thin_4kb,
            self.macro_thick_4kb,
            self.macro_thin_64kb,
            self.macro_thick_64kb,
            self.var,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u32
    }
}

/// A set of swizzle (addressing) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwizzleTypeSet {
    /// Z-order modes.
    pub z: bool,
    /// Standard modes.
    pub standard: bool,
    /// Display modes.
    pub display: bool,
    /// Render-target optimized modes.
    pub render: bool,
}

impl SwizzleTypeSet {
    fn any(&self) -> bool {
        self.z || self.standard || self.display || self.render
    }

    fn count(&self) -> u32 {
        u32::from(self.z) + u32::from(self.standard) + u32::from(self.display)
            + u32::from(self.render)
    }
}

/// Selection request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferredSettingRequest {
    /// Usage flags of the surface.
    pub flags: SurfaceFlags,
    /// Resource dimensionality.
    pub resource_type: ResourceType,
    /// Format class.
    pub format_class: FormatClass,
    /// Block types the client refuses.
    pub forbidden_block: BlockSet,
    /// Swizzle types the client prefers; empty means no preference.
    pub preferred_sw_set: SwizzleTypeSet,
    /// Never pick an XOR mode.
    pub no_xor: bool,
    /// Bits per element.
    pub bpp: u32,
    /// Mip 0 width.
    pub width: u32,
    /// Mip 0 height.
    pub height: u32,
    /// Slice count.
    pub num_slices: u32,
    /// Mip level count.
    pub num_mip_levels: u32,
    /// Sample count.
    pub num_samples: u32,
    /// Fragment count; zero means equal to samples.
    pub num_frags: u32,
    /// Maximum base alignment the client tolerates; zero for no limit.
    pub max_align: u32,
    /// The client pads allocations to a multiple of this byte count.
    pub min_size_align: u32,
    /// Acceptable padded-size ratio over the minimum; values >= 1 enable
    /// budget-driven block filtering.
    pub memory_budget: f64,
    /// Pick the smallest base alignment rather than balancing size.
    pub minimize_align: bool,
    /// Favor size over fewer relocations.
    pub opt4space: bool,
    /// Only pick modes with a usable address equation.
    pub need_equation: bool,
    /// Allow equations beyond the legacy three-component budget.
    pub allow_extended_equation: bool,
}

impl Default for PreferredSettingRequest {
    fn default() -> Self {
        Self {
            flags: SurfaceFlags::default(),
            resource_type: ResourceType::Tex2d,
            format_class: FormatClass::Unknown,
            forbidden_block: BlockSet::default(),
            preferred_sw_set: SwizzleTypeSet::default(),
            no_xor: false,
            bpp: 32,
            width: 0,
            height: 0,
            num_slices: 1,
            num_mip_levels: 1,
            num_samples: 1,
            num_frags: 1,
            max_align: 0,
            min_size_align: 1,
            memory_budget: 0.0,
            minimize_align: false,
            opt4space: false,
            need_equation: false,
            allow_extended_equation: false,
        }
    }
}

/// Selection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferredSetting {
    /// Resource type the setting applies to.
    pub resource_type: ResourceType,
    /// The chosen swizzle mode.
    pub swizzle_mode: SwizzleMode,
    /// All modes that survived narrowing.
    pub valid_mode_mask: u64,
    /// Block types present in the valid mask.
    pub valid_block_set: BlockSet,
    /// Swizzle types present in the valid mask.
    pub valid_swizzle_set: SwizzleTypeSet,
    /// Whether any XOR mode survived.
    pub can_xor: bool,
    /// The preference set the client effectively asked for.
    pub client_preferred_set: SwizzleTypeSet,
}

/// Whether a candidate block type's padded size is acceptable relative to
/// the current minimum.
fn within_memory_budget(
    min_size: u64,
    new_size: u64,
    ratio_low: u64,
    ratio_hi: u64,
    memory_budget: f64,
    new_block_bigger: bool,
) -> bool {
    if memory_budget >= 1.0 {
        if new_block_bigger {
            (new_size as f64) / (min_size as f64) <= memory_budget
        } else {
            (min_size as f64) / (new_size as f64) >= memory_budget
        }
    } else if new_block_bigger {
        new_size * ratio_hi <= min_size * ratio_low
    } else {
        new_size * ratio_low <= min_size * ratio_hi
    }
}

fn block_set_from_mask(mask: u64, rsrc: ResourceType) -> BlockSet {
    let mut set = BlockSet {
        linear: mask & mode::LINEAR_MODES != 0,
        micro: mask & mode::BLK_256B_MODES != 0,
        var: mask & mode::BLK_VAR_MODES != 0,
        ..Default::default()
    };
    if rsrc == ResourceType::Tex3d {
        set.macro_thick_4kb = mask & mode::RSRC_3D_THICK_4KB_MODES != 0;
        set.macro_thin_64kb = mask & mode::RSRC_3D_THIN_64KB_MODES != 0;
        set.macro_thick_64kb = mask & mode::RSRC_3D_THICK_64KB_MODES != 0;
    } else {
        set.macro_thin_4kb = mask & mode::BLK_4KB_MODES != 0;
        set.macro_thin_64kb = mask & mode::BLK_64KB_MODES != 0;
    }
    set
}

fn swizzle_set_from_mask(mask: u64) -> SwizzleTypeSet {
    SwizzleTypeSet {
        z: mask & mode::Z_MODES != 0,
        standard: mask & mode::STANDARD_MODES != 0,
        display: mask & mode::DISPLAY_MODES != 0,
        render: mask & mode::RENDER_MODES != 0,
    }
}

impl Gfx10AddrLib {
    fn block_type_mode_mask(&self, block: BlockType, rsrc: ResourceType) -> u64 {
        match block {
            BlockType::Linear => mode::LINEAR_MODES,
            BlockType::Micro => mode::BLK_256B_MODES,
            BlockType::Thin4kb => mode::BLK_4KB_MODES,
            BlockType::Thick4kb => mode::RSRC_3D_THICK_4KB_MODES,
            BlockType::Thin64kb => {
                if rsrc == ResourceType::Tex3d {
                    mode::RSRC_3D_THIN_64KB_MODES
                } else {
                    mode::BLK_64KB_MODES
                }
            }
            BlockType::Thick64kb => mode::RSRC_3D_THICK_64KB_MODES,
            BlockType::ThinVar => mode::BLK_VAR_MODES,
        }
    }

    fn representative_mode(&self, block: BlockType, rsrc: ResourceType) -> SwizzleMode {
        match block {
            BlockType::Linear => SwizzleMode::Linear,
            BlockType::Micro => SwizzleMode::Std256b,
            BlockType::Thin4kb | BlockType::Thick4kb => SwizzleMode::Std4kb,
            BlockType::Thin64kb => {
                if rsrc == ResourceType::Tex3d {
                    SwizzleMode::Render64kbX
                } else {
                    SwizzleMode::Std64kb
                }
            }
            BlockType::Thick64kb => SwizzleMode::Std64kb,
            BlockType::ThinVar => SwizzleMode::RenderVarX,
        }
    }

    fn filter_modes_without_equation(
        &self,
        mask: u64,
        rsrc: ResourceType,
        elem_log2: u32,
        max_components: u32,
    ) -> u64 {
        let mut filtered = mask;
        for candidate in mode::modes_in(mask) {
            if candidate.is_linear() {
                continue;
            }
            let keep = self
                .equation(rsrc, candidate, elem_log2)
                .is_some_and(|eq| eq.num_components <= max_components);
            if !keep {
                filtered &= !candidate.mask();
            }
        }
        filtered
    }

    fn preferred_fmask_setting(
        &self,
        req: &PreferredSettingRequest,
    ) -> AddrResult<PreferredSetting> {
        let forbid_64kb = req.forbidden_block.macro_thin_64kb;
        let forbid_var = self.config.block_var_size_log2 == 0 || req.forbidden_block.var;

        if forbid_64kb && forbid_var {
            log::debug!("fmask selection left with no block type");
            return Err(AddrError::InvalidParams);
        }

        let mut valid_mask = 0u64;
        if !forbid_64kb {
            valid_mask |= SwizzleMode::Z64kbX.mask();
        }
        if !forbid_var {
            valid_mask |= SwizzleMode::ZVarX.mask();
        }

        let mut use_64kb = !forbid_64kb;
        if !forbid_64kb && !forbid_var {
            let ratio_low = if req.minimize_align {
                1
            } else if req.opt4space {
                3
            } else {
                2
            };
            let ratio_hi = if req.minimize_align {
                1
            } else if req.opt4space {
                2
            } else {
                1
            };
            let fmask_bpp = self.fmask_bpp(req.num_samples, req.num_frags);
            let elem_log2 = log2(fmask_bpp >> 3);
            let width = req.width.max(1);
            let height = req.height.max(1);
            let num_slices = req.num_slices.max(1);
            let size_align_elems =
                (u64::from(req.min_size_align.next_power_of_two()) / u64::from(fmask_bpp >> 3))
                    .max(1);

            let candidates = [SwizzleMode::Z64kbX, SwizzleMode::ZVarX];
            let mut pad_size = [0u64; 2];
            for (i, candidate) in candidates.iter().enumerate() {
                let blk = block::surface_block_dims(
                    ResourceType::Tex2d,
                    *candidate,
                    elem_log2,
                    1,
                    self.block_size_log2(*candidate),
                )
                .expect("tiled mode");
                pad_size[i] = align_padded_size(
                    padded_size_in_elements(blk, width, height, num_slices),
                    size_align_elems,
                );
            }

            if within_memory_budget(
                pad_size[0],
                pad_size[1],
                ratio_low,
                ratio_hi,
                req.memory_budget,
                self.block_size_log2(SwizzleMode::ZVarX)
                    >= self.block_size_log2(SwizzleMode::Z64kbX),
            ) {
                use_64kb = false;
            }
        }

        Ok(PreferredSetting {
            resource_type: ResourceType::Tex2d,
            swizzle_mode: if use_64kb {
                SwizzleMode::Z64kbX
            } else {
                SwizzleMode::ZVarX
            },
            valid_mode_mask: valid_mask,
            valid_block_set: BlockSet {
                macro_thin_64kb: !forbid_64kb,
                var: !forbid_var,
                ..Default::default()
            },
            valid_swizzle_set: SwizzleTypeSet {
                z: true,
                ..Default::default()
            },
            can_xor: true,
            client_preferred_set: SwizzleTypeSet {
                z: true,
                ..Default::default()
            },
        })
    }

    /// Chooses the best legal swizzle mode under the client's constraints.
    pub fn get_preferred_surface_setting(
        &self,
        req: &PreferredSettingRequest,
    ) -> AddrResult<PreferredSetting> {
        if req.flags.fmask {
            return self.preferred_fmask_setting(req);
        }

        let bpp = req.bpp;
        let width = req.width.max(1);
        let height = req.height.max(1);
        let num_slices = req.num_slices.max(1);
        let num_mip_levels = req.num_mip_levels.max(1);
        let num_samples = req.num_samples.max(1);
        let num_frags = if req.num_frags == 0 {
            num_samples
        } else {
            req.num_frags
        };
        let msaa = num_frags > 1 || num_samples > 1;
        let rsrc = req.resource_type;

        let local = SurfaceInfoRequest {
            flags: req.flags,
            resource_type: rsrc,
            swizzle_mode: SwizzleMode::Linear,
            format_class: req.format_class,
            bpp,
            width,
            height,
            num_slices,
            num_mip_levels,
            num_samples,
            num_frags,
        };
        if !self.validate_non_sw_mode_params(&local) {
            return Err(AddrError::InvalidParams);
        }

        // Narrow by client-forbidden block types.
        let forbidden = &req.forbidden_block;
        let mut allowed = 0u64;
        if !forbidden.linear {
            allowed |= mode::LINEAR_MODES;
        }
        if !forbidden.micro {
            allowed |= mode::BLK_256B_MODES;
        }
        if !forbidden.macro_thin_4kb && rsrc != ResourceType::Tex3d {
            allowed |= mode::BLK_4KB_MODES;
        }
        if !forbidden.macro_thick_4kb && rsrc == ResourceType::Tex3d {
            allowed |= mode::RSRC_3D_THICK_4KB_MODES;
        }
        if !forbidden.macro_thin_64kb {
            allowed |= if rsrc == ResourceType::Tex3d {
                mode::RSRC_3D_THIN_64KB_MODES
            } else {
                mode::BLK_64KB_MODES
            };
        }
        if !forbidden.macro_thick_64kb && rsrc == ResourceType::Tex3d {
            allowed |= mode::RSRC_3D_THICK_64KB_MODES;
        }
        if !forbidden.var && self.config.block_var_size_log2 != 0 {
            allowed |= mode::BLK_VAR_MODES;
        }

        // Narrow by preferred swizzle types.
        if req.preferred_sw_set.any() {
            if !req.preferred_sw_set.z {
                allowed &= !mode::Z_MODES;
            }
            if !req.preferred_sw_set.standard {
                allowed &= !mode::STANDARD_MODES;
            }
            if !req.preferred_sw_set.display {
                allowed &= !mode::DISPLAY_MODES;
            }
            if !req.preferred_sw_set.render {
                allowed &= !mode::RENDER_MODES;
            }
        }

        if req.no_xor {
            allowed &= !mode::XOR_MODES;
        }

        // Narrow by the alignment ceiling.
        if req.max_align > 0 {
            if req.max_align < (1u32 << self.config.block_var_size_log2.max(1)) {
                allowed &= !mode::BLK_VAR_MODES;
            }
            if req.max_align < gfx10_swizzle::SIZE_64K {
                allowed &= !mode::BLK_64KB_MODES;
            }
            if req.max_align < gfx10_swizzle::SIZE_4K {
                allowed &= !mode::BLK_4KB_MODES;
            }
            if req.max_align < gfx10_swizzle::SIZE_256 {
                allowed &= !mode::BLK_256B_MODES;
            }
        }

        // Narrow by resource-type legality.
        match rsrc {
            ResourceType::Tex1d => allowed &= mode::RSRC_1D_MODES,
            ResourceType::Tex2d => {
                allowed &= if req.flags.prt {
                    mode::RSRC_2D_PRT_MODES
                } else {
                    mode::RSRC_2D_MODES
                };
            }
            ResourceType::Tex3d => {
                allowed &= if req.flags.prt {
                    mode::RSRC_3D_PRT_MODES
                } else {
                    mode::RSRC_3D_MODES
                };
                if req.flags.view_3d_as_2d_array {
                    allowed &= mode::RSRC_3D_THIN_MODES;
                }
            }
        }

        // Narrow by format and usage restrictions.
        if matches!(
            req.format_class,
            FormatClass::BlockCompressed | FormatClass::MacroPixelPacked
        ) || bpp > 64
            || (msaa && (bpp > 32 || req.flags.color || req.flags.unordered))
        {
            allowed &= !mode::Z_MODES;
        }
        if req.format_class == FormatClass::Rgb96 {
            allowed &= mode::LINEAR_MODES;
        }
        if msaa {
            allowed &= mode::MSAA_MODES;
        }
        if req.flags.depth || req.flags.stencil {
            allowed &= mode::Z_MODES;
        }
        if req.flags.display {
            allowed &= self.valid_display_modes(bpp);
        }

        if allowed == 0 {
            log::debug!("no swizzle mode survives the constraints");
            return Err(AddrError::InvalidParams);
        }

        #[cfg(debug_assertions)]
        for candidate in mode::modes_in(allowed) {
            let probe = SurfaceInfoRequest {
                swizzle_mode: candidate,
                ..local
            };
            debug_assert!(
                self.validate_sw_mode_params(&probe),
                "selection produced a mode its own validator rejects: {candidate:?}"
            );
        }

        let valid_mode_mask = allowed;
        let mut client_preferred = req.preferred_sw_set;
        if !client_preferred.any() {
            client_preferred = SwizzleTypeSet {
                z: true,
                standard: true,
                display: true,
                render: true,
            };
        }

        if req.need_equation {
            let max_components = if req.allow_extended_equation {
                gfx10_swizzle::MAX_EQUATION_COMPONENTS as u32
            } else {
                gfx10_swizzle::equation::MAX_LEGACY_EQUATION_COMPONENTS as u32
            };
            allowed = self.filter_modes_without_equation(
                allowed,
                rsrc,
                log2((bpp >> 3).next_power_of_two()),
                max_components,
            );
        }

        let swizzle_mode = if allowed == mode::LINEAR_MODES {
            SwizzleMode::Linear
        } else {
            let compute_min_size = req.minimize_align || req.memory_budget >= 1.0;
            if height > 1 && !compute_min_size {
                // Tiled modes always win for real 2D content unless the
                // client asked for the absolute minimum footprint.
                allowed &= !mode::LINEAR_MODES;
            }

            let mut allowed_blocks = block_set_from_mask(allowed, rsrc);

            if allowed_blocks.count() > 1 {
                let ratio_low: u64 = if compute_min_size {
                    1
                } else if req.opt4space {
                    3
                } else {
                    2
                };
                let ratio_hi: u64 = if compute_min_size {
                    1
                } else if req.opt4space {
                    2
                } else {
                    1
                };
                let size_align = u64::from(req.min_size_align.max(1).next_power_of_two());

                let mut pad_size = [0u64; 7];
                let mut min_size = 0u64;
                let mut min_size_blk = BlockType::Micro;

                for (i, candidate) in [BlockType::Linear]
                    .iter()
                    .chain(TILED_BLOCK_TYPES.iter())
                    .enumerate()
                {
                    if !allowed_blocks.contains(*candidate) {
                        continue;
                    }
                    let probe_mode = self.representative_mode(*candidate, rsrc);
                    let probe = SurfaceInfoRequest {
                        swizzle_mode: probe_mode,
                        ..local
                    };
                    let layout = if probe_mode.is_linear() {
                        self.compute_surface_info_linear(&probe.normalized())
                    } else if probe_mode.is_256b() {
                        self.compute_surface_info_micro_tiled(&probe.normalized())
                    } else {
                        self.compute_surface_info_macro_tiled(&probe.normalized())
                    }?;
                    pad_size[i] =
                        gfx10_swizzle::dim::pow2_align_64(layout.surf_size, size_align);

                    if min_size == 0 {
                        min_size = pad_size[i];
                        min_size_blk = *candidate;
                    } else {
                        let new_bigger = self
                            .block_size_log2(probe_mode)
                            >= self
                                .block_size_log2(self.representative_mode(min_size_blk, rsrc));
                        if within_memory_budget(
                            min_size,
                            pad_size[i],
                            ratio_low,
                            ratio_hi,
                            0.0,
                            new_bigger,
                        ) {
                            min_size = pad_size[i];
                            min_size_blk = *candidate;
                        }
                    }
                }

                if req.memory_budget > 1.0 {
                    // Never fall back below the block type that set the
                    // minimum.
                    for candidate in [BlockType::Linear].iter().chain(TILED_BLOCK_TYPES.iter())
                    {
                        if *candidate < min_size_blk {
                            allowed_blocks.remove(*candidate);
                        }
                    }
                    // Drop the block types whose waste breaks the budget.
                    for (i, candidate) in [BlockType::Linear]
                        .iter()
                        .chain(TILED_BLOCK_TYPES.iter())
                        .enumerate()
                    {
                        if *candidate == min_size_blk
                            || *candidate == BlockType::Linear
                            || !allowed_blocks.contains(*candidate)
                        {
                            continue;
                        }
                        let new_bigger = self
                            .block_size_log2(self.representative_mode(*candidate, rsrc))
                            >= self
                                .block_size_log2(self.representative_mode(min_size_blk, rsrc));
                        if !within_memory_budget(
                            min_size,
                            pad_size[i],
                            0,
                            0,
                            req.memory_budget,
                            new_bigger,
                        ) {
                            allowed_blocks.remove(*candidate);
                        }
                    }
                    // A variable block smaller than 64KB loses to any
                    // allowed 64KB type.
                    if self.config.block_var_size_log2 < 16
                        && (allowed_blocks.macro_thin_64kb || allowed_blocks.macro_thick_64kb)
                    {
                        allowed_blocks.remove(BlockType::ThinVar);
                    }
                    if allowed_blocks.count() > 1 {
                        allowed_blocks.remove(BlockType::Linear);
                    }
                    // Prefer the largest surviving block type.
                    min_size_blk = TILED_BLOCK_TYPES
                        .iter()
                        .rev()
                        .copied()
                        .find(|b| allowed_blocks.contains(*b))
                        .unwrap_or(BlockType::Linear);
                }

                allowed &= self.block_type_mode_mask(min_size_blk, rsrc);
            }

            debug_assert!(block_set_from_mask(allowed, rsrc).count() <= 1);

            // Swizzle-type priority per format class and resource type.
            let allowed_sw = swizzle_set_from_mask(allowed);
            if allowed_sw.count() > 1 {
                let narrowed: u64 = match req.format_class {
                    FormatClass::BlockCompressed => {
                        if allowed_sw.display {
                            mode::DISPLAY_MODES
                        } else if allowed_sw.standard {
                            mode::STANDARD_MODES
                        } else {
                            debug_assert!(allowed_sw.render);
                            mode::RENDER_MODES
                        }
                    }
                    FormatClass::MacroPixelPacked => {
                        if allowed_sw.standard {
                            mode::STANDARD_MODES
                        } else if allowed_sw.display {
                            mode::DISPLAY_MODES
                        } else {
                            debug_assert!(allowed_sw.render);
                            mode::RENDER_MODES
                        }
                    }
                    _ if rsrc == ResourceType::Tex3d => {
                        if req.flags.color
                            && block_set_from_mask(allowed, rsrc).macro_thick_64kb
                            && allowed_sw.display
                        {
                            mode::DISPLAY_MODES
                        } else if allowed_sw.standard {
                            mode::STANDARD_MODES
                        } else if allowed_sw.render {
                            mode::RENDER_MODES
                        } else {
                            debug_assert!(allowed_sw.z);
                            mode::Z_MODES
                        }
                    }
                    _ => {
                        if allowed_sw.render {
                            mode::RENDER_MODES
                        } else if allowed_sw.display {
                            mode::DISPLAY_MODES
                        } else if allowed_sw.standard {
                            mode::STANDARD_MODES
                        } else {
                            debug_assert!(allowed_sw.z);
                            mode::Z_MODES
                        }
                    }
                };
                allowed &= narrowed;
                debug_assert!(swizzle_set_from_mask(allowed).count() <= 1);
            }

            // The most capable mode of the surviving block/swizzle pair.
            mode::largest_mode_in(allowed).ok_or(AddrError::InvalidParams)?
        };

        Ok(PreferredSetting {
            resource_type: rsrc,
            swizzle_mode,
            valid_mode_mask,
            valid_block_set: block_set_from_mask(valid_mode_mask, rsrc),
            valid_swizzle_set: swizzle_set_from_mask(valid_mode_mask),
            can_xor: valid_mode_mask & mode::XOR_MODES != 0,
            client_preferred_set: client_preferred,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn color_2d(width: u32, height: u32) -> PreferredSettingRequest {
        PreferredSettingRequest {
            flags: SurfaceFlags {
                color: true,
                ..Default::default()
            },
            // Clients keep variable blocks off the table for ordinary
            // surfaces; ties otherwise resolve toward them.
            forbidden_block: BlockSet {
                var: true,
                ..Default::default()
            },
            width,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn large_color_surface_selects_a_64kb_render_mode() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&color_2d(1920, 1080))
            .unwrap();
        assert_eq!(setting.swizzle_mode, SwizzleMode::Render64kbX);
        assert!(setting.can_xor);
        assert!(setting.valid_swizzle_set.render);
    }

    #[test]
    fn tiny_surface_prefers_a_smaller_block() {
        let lib = navi21_4pipe();
        let setting = lib.get_preferred_surface_setting(&color_2d(8, 8)).unwrap();
        assert!(matches!(
            setting.swizzle_mode.block_family(),
            gfx10_swizzle::mode::BlockFamily::Micro256b
                | gfx10_swizzle::mode::BlockFamily::Macro4kb
        ));
    }

    #[test]
    fn depth_surfaces_only_get_z_modes() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                flags: SurfaceFlags {
                    depth: true,
                    ..Default::default()
                },
                width: 1024,
                height: 1024,
                ..Default::default()
            })
            .unwrap();
        assert!(setting.swizzle_mode.is_z_order());
        assert_eq!(setting.valid_mode_mask & !mode::Z_MODES, 0);
    }

    #[test]
    fn no_xor_rules_out_xor_modes() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                no_xor: true,
                ..color_2d(512, 512)
            })
            .unwrap();
        assert!(!setting.swizzle_mode.is_xor());
        assert!(!setting.can_xor);
    }

    #[test]
    fn max_align_caps_the_block_size(){
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                max_align: 4096,
                ..color_2d(2048, 2048)
            })
            .unwrap();
        assert!(
            setting.swizzle_mode.is_linear()
                || setting.swizzle_mode.is_256b()
                || setting.swizzle_mode.is_4kb()
        );
    }

    #[test]
    fn block_compressed_formats_favor_display_modes() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                format_class: FormatClass::BlockCompressed,
                bpp: 128,
                forbidden_block: BlockSet {
                    var: true,
                    ..Default::default()
                },
                width: 512,
                height: 512,
                ..Default::default()
            })
            .unwrap();
        assert!(matches!(
            setting.swizzle_mode.kind(),
            Some(gfx10_swizzle::mode::SwizzleKind::Display)
        ));
    }

    #[test]
    fn fmask_selection_picks_a_z_mode() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                flags: SurfaceFlags {
                    fmask: true,
                    ..Default::default()
                },
                width: 512,
                height: 512,
                num_samples: 8,
                num_frags: 8,
                ..Default::default()
            })
            .unwrap();
        assert!(setting.swizzle_mode.is_z_order());
        assert!(setting.valid_swizzle_set.z);
    }

    #[test]
    fn all_blocks_forbidden_is_invalid() {
        let lib = navi21_4pipe();
        let req = PreferredSettingRequest {
            forbidden_block: BlockSet {
                linear: true,
                micro: true,
                macro_thin_4kb: true,
                macro_thick_4kb: true,
                macro_thin_64kb: true,
                macro_thick_64kb: true,
                var: true,
            },
            ..color_2d(64, 64)
        };
        assert_eq!(
            lib.get_preferred_surface_setting(&req),
            Err(AddrError::InvalidParams)
        );
    }

    #[test]
    fn preferred_standard_set_sticks_to_standard_modes() {
        let lib = navi21_4pipe();
        let setting = lib
            .get_preferred_surface_setting(&PreferredSettingRequest {
                preferred_sw_set: SwizzleTypeSet {
                    standard: true,
                    ..Default::default()
                },
                ..color_2d(1024, 1024)
            })
            .unwrap();
        assert!(matches!(
            setting.swizzle_mode.kind(),
            Some(gfx10_swizzle::mode::SwizzleKind::Standard)
        ));
    }
}
