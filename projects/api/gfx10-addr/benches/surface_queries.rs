use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gfx10_addr::{Chip, Gfx10AddrLib, SurfaceAddrRequest, SurfaceInfoRequest, SwizzleMode};

fn navi21() -> Gfx10AddrLib {
    Gfx10AddrLib::new(Chip::Navi21, 2 | (3 << 6) | (2 << 8)).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let lib = navi21();
    let surface = SurfaceInfoRequest {
        swizzle_mode: SwizzleMode::Render64kbX,
        bpp: 32,
        width: 4096,
        height: 4096,
        num_mip_levels: 13,
        ..Default::default()
    };

    c.bench_function("surface_info 4k mipped", |b| {
        b.iter(|| lib.compute_surface_info(black_box(&surface)).unwrap())
    });

    c.bench_function("addr_from_coord 64k render", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for y in 0..32u32 {
                for x in 0..32u32 {
                    acc ^= lib
                        .compute_surface_addr_from_coord(black_box(&SurfaceAddrRequest {
                            surface,
                            x: x * 7,
                            y: y * 5,
                            ..Default::default()
                        }))
                        .unwrap()
                        .addr;
                }
            }
            acc
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
