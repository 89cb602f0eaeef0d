//! End-to-end scenarios over the public API.

use gfx10_addr::{
    AddrError, Chip, FormatClass, Gfx10AddrLib, ResourceType, SurfaceAddrRequest, SurfaceFlags,
    SurfaceInfoRequest, SwizzleMode,
};
use std::collections::HashSet;

fn navi21() -> Gfx10AddrLib {
    // 4 pipes, 256B interleave, 8 compressed fragments, 4 packers.
    Gfx10AddrLib::new(Chip::Navi21, 2 | (3 << 6) | (2 << 8)).unwrap()
}

#[test]
fn render_target_256x256_layout_and_origin() {
    let lib = navi21();
    let surface = SurfaceInfoRequest {
        flags: SurfaceFlags {
            color: true,
            ..Default::default()
        },
        resource_type: ResourceType::Tex2d,
        swizzle_mode: SwizzleMode::Render64kbX,
        format_class: FormatClass::Unknown,
        bpp: 32,
        width: 256,
        height: 256,
        num_slices: 1,
        num_mip_levels: 1,
        num_samples: 1,
        num_frags: 1,
    };

    let layout = lib.compute_surface_info(&surface).unwrap();
    assert!(layout.base_align >= 65536);
    assert_eq!(layout.pitch % layout.block_width, 0);
    assert_eq!(layout.height % layout.block_height, 0);
    assert!(layout.pitch >= 256 && layout.height >= 256);

    let origin = lib
        .compute_surface_addr_from_coord(&SurfaceAddrRequest {
            surface,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(origin.addr, 0);
}

#[test]
fn illegal_mode_for_resource_type_is_rejected_not_computed() {
    let lib = navi21();
    // A 256-byte-block mode on a 3D depth surface.
    let req = SurfaceInfoRequest {
        flags: SurfaceFlags {
            depth: true,
            ..Default::default()
        },
        resource_type: ResourceType::Tex3d,
        swizzle_mode: SwizzleMode::Std256b,
        bpp: 32,
        width: 64,
        height: 64,
        num_slices: 8,
        ..Default::default()
    };
    assert_eq!(lib.compute_surface_info(&req), Err(AddrError::InvalidParams));
}

#[test]
fn mip_tail_levels_report_zero_slice_size_contribution() {
    let lib = navi21();
    let layout = lib
        .compute_surface_info(&SurfaceInfoRequest {
            swizzle_mode: SwizzleMode::Render64kbX,
            bpp: 32,
            width: 2048,
            height: 2048,
            num_mip_levels: 12,
            ..Default::default()
        })
        .unwrap();

    assert!(layout.first_mip_id_in_tail < 12);
    let mut tail_virtual = 0u64;
    for (i, mip) in layout.mips.iter().enumerate() {
        if (i as u32) >= layout.first_mip_id_in_tail {
            assert!(mip.in_mip_tail, "level {i} should be in the tail");
            assert_eq!(mip.macro_block_offset, 0);
            let w = (2048u64 >> i).max(1);
            let h = (2048u64 >> i).max(1);
            tail_virtual += w * h * 4;
        }
    }
    // All in-tail levels fit one 64KB block.
    assert!(tail_virtual <= 65536);
}

#[test]
fn mip_tail_texels_resolve_inside_the_tail_block() {
    let lib = navi21();
    let surface = SurfaceInfoRequest {
        swizzle_mode: SwizzleMode::Render64kbX,
        bpp: 32,
        width: 1024,
        height: 1024,
        num_mip_levels: 11,
        ..Default::default()
    };
    let layout = lib.compute_surface_info(&surface).unwrap();
    let tail_mip = layout.first_mip_id_in_tail;

    let addr = lib
        .compute_surface_addr_from_coord(&SurfaceAddrRequest {
            surface,
            mip_id: tail_mip,
            ..Default::default()
        })
        .unwrap();
    // The tail block starts the slice; every tail texel stays inside it.
    assert!(addr.addr < 65536);
}

#[test]
fn distinct_coordinates_get_distinct_addresses_across_modes() {
    let lib = navi21();
    for mode in [
        SwizzleMode::Disp256b,
        SwizzleMode::Disp4kbX,
        SwizzleMode::Std64kb,
        SwizzleMode::Render64kbX,
    ] {
        let surface = SurfaceInfoRequest {
            swizzle_mode: mode,
            bpp: 32,
            width: 128,
            height: 128,
            ..Default::default()
        };
        let mut seen = HashSet::new();
        for y in (0..128).step_by(7) {
            for x in (0..128).step_by(5) {
                let addr = lib
                    .compute_surface_addr_from_coord(&SurfaceAddrRequest {
                        surface,
                        x,
                        y,
                        ..Default::default()
                    })
                    .unwrap()
                    .addr;
                assert!(seen.insert(addr), "{mode:?} collides at ({x},{y})");
            }
        }
    }
}

#[test]
fn msaa_samples_get_distinct_addresses() {
    let lib = navi21();
    let surface = SurfaceInfoRequest {
        flags: SurfaceFlags {
            color: true,
            ..Default::default()
        },
        swizzle_mode: SwizzleMode::Render64kbX,
        bpp: 32,
        width: 64,
        height: 64,
        num_samples: 4,
        num_frags: 4,
        ..Default::default()
    };
    let mut seen = HashSet::new();
    for sample in 0..4 {
        for y in 0..4 {
            for x in 0..4 {
                let addr = lib
                    .compute_surface_addr_from_coord(&SurfaceAddrRequest {
                        surface,
                        x,
                        y,
                        sample,
                        ..Default::default()
                    })
                    .unwrap()
                    .addr;
                assert!(seen.insert(addr), "collision at ({x},{y}) sample {sample}");
            }
        }
    }
}

#[test]
fn slice_pipe_bank_xor_round_trips_at_slice_zero() {
    let lib = navi21();
    for mode in [
        SwizzleMode::Render64kbX,
        SwizzleMode::Z64kbX,
        SwizzleMode::Std4kbX,
    ] {
        for base in [0u32, 2, 5] {
            assert_eq!(
                lib.compute_slice_pipe_bank_xor(mode, ResourceType::Tex2d, base, 0, 32)
                    .unwrap(),
                base
            );
        }
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let lib = std::sync::Arc::new(navi21());
    let mut handles = Vec::new();
    for t in 0..4u32 {
        let lib = lib.clone();
        handles.push(std::thread::spawn(move || {
            let surface = SurfaceInfoRequest {
                swizzle_mode: SwizzleMode::Render64kbX,
                bpp: 32,
                width: 256 << (t % 2),
                height: 256,
                ..Default::default()
            };
            lib.compute_surface_info(&surface).unwrap().surf_size
        }));
    }
    for handle in handles {
        assert!(handle.join().unwrap() >= 256 * 256 * 4);
    }
}
