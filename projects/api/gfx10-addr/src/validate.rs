//! Request validation: parameter sanity independent of the swizzle mode,
//! then mode-specific hardware legality.

use gfx10_swizzle::mode::{self, dcn, ResourceType, SwizzleMode};

use crate::engine::Gfx10AddrLib;
use crate::error::{AddrError, AddrResult};
use crate::surface::{FormatClass, SurfaceInfoRequest};

impl Gfx10AddrLib {
    /// Modes the display engine can scan out at a bit depth.
    pub(crate) fn valid_display_modes(&self, bpp: u32) -> u64 {
        if bpp > 64 {
            0
        } else if self.config.flags.is_dcn20 {
            if bpp == 64 {
                dcn::DCN20_BPP64_MODES
            } else {
                dcn::DCN20_NON_BPP64_MODES
            }
        } else if bpp == 64 {
            dcn::DCN21_BPP64_MODES
        } else {
            dcn::DCN21_NON_BPP64_MODES
        }
    }

    /// Checks everything about a request except the swizzle mode.
    pub(crate) fn validate_non_sw_mode_params(&self, req: &SurfaceInfoRequest) -> bool {
        if req.bpp == 0 || req.bpp > 128 || req.width == 0 {
            log::debug!("invalid bpp {} or zero width", req.bpp);
            return false;
        }
        if req.num_frags > 8 || req.num_samples > 16 {
            log::debug!(
                "fragment/sample count out of range: {}/{}",
                req.num_frags,
                req.num_samples
            );
            return false;
        }

        let msaa = req.num_frags > 1;
        let mipmap = req.num_mip_levels > 1;
        let stereo = req.flags.qb_stereo;

        match req.resource_type {
            ResourceType::Tex1d | ResourceType::Tex3d => {
                if msaa || req.flags.display || stereo {
                    log::debug!("msaa/display/stereo illegal on {:?}", req.resource_type);
                    return false;
                }
            }
            ResourceType::Tex2d => {
                if (msaa && mipmap) || (stereo && msaa) || (stereo && mipmap) {
                    log::debug!("illegal 2D combination of msaa/mipmap/stereo");
                    return false;
                }
            }
        }
        true
    }

    /// Checks the swizzle-mode-specific legality rules.
    pub(crate) fn validate_sw_mode_params(&self, req: &SurfaceInfoRequest) -> bool {
        let mode = req.swizzle_mode;
        let rsrc = req.resource_type;
        let msaa = req.num_frags > 1;
        let zbuffer = req.flags.depth || req.flags.stencil;

        // MSAA surfaces need blk_bytes / pipe_interleave >= num_samples.
        if msaa
            && self.block_size(mode)
                < (1 << self.config.pipe_interleave_log2) * req.num_frags
        {
            log::debug!("block too small for {} fragments", req.num_frags);
            return false;
        }

        if req.flags.display && self.valid_display_modes(req.bpp) & mode.mask() == 0 {
            log::debug!("{mode:?} is not displayable at {} bpp", req.bpp);
            return false;
        }

        if req.bpp == 96 && !mode.is_linear() {
            log::debug!("96bpp requires a linear mode");
            return false;
        }

        // Resource-type legality.
        let rsrc_ok = mode == SwizzleMode::LinearGeneral
            || match rsrc {
                ResourceType::Tex1d => mode.mask() & mode::RSRC_1D_MODES != 0,
                ResourceType::Tex2d => {
                    mode.mask() & mode::RSRC_2D_MODES != 0
                        && !(req.flags.prt && mode.mask() & mode::RSRC_2D_PRT_MODES == 0)
                        && !(req.flags.fmask && mode.mask() & mode::Z_MODES == 0)
                }
                ResourceType::Tex3d => {
                    mode.mask() & mode::RSRC_3D_MODES != 0
                        && !(req.flags.prt && mode.mask() & mode::RSRC_3D_PRT_MODES == 0)
                        && !(req.flags.view_3d_as_2d_array
                            && mode.mask() & mode::RSRC_3D_THIN_MODES == 0)
                }
            };
        if !rsrc_ok {
            log::debug!("{mode:?} illegal for {rsrc:?} with these flags");
            return false;
        }

        // Swizzle-family legality.
        let family_ok = if mode.is_linear() {
            !(zbuffer || msaa || req.bpp % 8 != 0)
        } else if mode.is_z_order() {
            !(req.bpp > 64
                || (msaa && (req.flags.color || req.bpp > 32))
                || req.format_class == FormatClass::BlockCompressed
                || req.format_class == FormatClass::MacroPixelPacked)
        } else if mode::is_standard(rsrc, mode) || mode::is_display(rsrc, mode) {
            !(zbuffer || msaa)
        } else if mode.is_render_optimized() {
            !zbuffer
        } else {
            false
        };
        if !family_ok {
            log::debug!("{mode:?} family rules reject this surface");
            return false;
        }

        // Block-family legality.
        if mode.is_256b() && (zbuffer || rsrc == ResourceType::Tex3d || msaa) {
            log::debug!("256B blocks exclude depth, 3D and MSAA");
            return false;
        }
        if mode.is_var() && self.config.block_var_size_log2 == 0 {
            log::debug!("variable blocks unsupported on this device");
            return false;
        }

        true
    }

    /// Combined sanity check used by the layout and addressing entry points.
    pub(crate) fn surface_info_sanity_check(&self, req: &SurfaceInfoRequest) -> AddrResult<()> {
        if self.validate_non_sw_mode_params(req) && self.validate_sw_mode_params(req) {
            Ok(())
        } else {
            Err(AddrError::InvalidParams)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceFlags;
    use crate::test_prelude::*;
    use rstest::rstest;

    fn base_request() -> SurfaceInfoRequest {
        SurfaceInfoRequest {
            width: 256,
            height: 256,
            swizzle_mode: SwizzleMode::Std64kbX,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(0)]
    #[case(160)]
    fn rejects_bad_bpp(#[case] bpp: u32) {
        let lib = navi21_4pipe();
        let req = SurfaceInfoRequest {
            bpp,
            ..base_request()
        };
        assert!(!lib.validate_non_sw_mode_params(&req));
    }

    #[test]
    fn rejects_256b_blocks_for_3d_depth() {
        let lib = navi21_4pipe();
        let req = SurfaceInfoRequest {
            resource_type: ResourceType::Tex3d,
            swizzle_mode: SwizzleMode::Std256b,
            flags: SurfaceFlags {
                depth: true,
                ..Default::default()
            },
            ..base_request()
        };
        assert_eq!(
            lib.surface_info_sanity_check(&req),
            Err(AddrError::InvalidParams)
        );
    }

    #[test]
    fn rejects_z_modes_for_block_compressed_formats() {
        let lib = navi21_4pipe();
        let req = SurfaceInfoRequest {
            swizzle_mode: SwizzleMode::Z64kbX,
            format_class: crate::surface::FormatClass::BlockCompressed,
            bpp: 128,
            ..base_request()
        };
        assert!(!lib.validate_sw_mode_params(&req));
    }

    #[test]
    fn rejects_msaa_on_standard_modes() {
        let lib = navi21_4pipe();
        let req = SurfaceInfoRequest {
            num_samples: 4,
            num_frags: 4,
            ..base_request()
        };
        assert!(!lib.validate_sw_mode_params(&req));
    }

    #[test]
    fn accepts_a_plain_2d_color_surface() {
        let lib = navi21_4pipe();
        assert!(lib.surface_info_sanity_check(&base_request()).is_ok());
    }

    #[test]
    fn display_modes_depend_on_dcn_generation(){
        let lib21 = navi21_4pipe();
        // DCN 2.1+ dropped the 4KB displayable modes.
        assert_eq!(
            lib21.valid_display_modes(32) & SwizzleMode::Std4kb.mask(),
            0
        );
        let lib10 = navi10_16pipe();
        assert_ne!(
            lib10.valid_display_modes(32) & SwizzleMode::Std4kb.mask(),
            0
        );
    }
}
