use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gfx10_swizzle::equation::Equation;
use gfx10_swizzle::pattern::{full_pattern, offset_from_pattern, SW_64K_ZR_X_4XAA};

fn criterion_benchmark(c: &mut Criterion) {
    let info = &SW_64K_ZR_X_4XAA[2];
    let pattern = full_pattern(info);

    c.bench_function("offset_from_pattern 64k 4xaa", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for y in 0..64u32 {
                for x in 0..64u32 {
                    acc ^= offset_from_pattern(
                        black_box(&pattern),
                        16,
                        black_box(x),
                        black_box(y),
                        0,
                        2,
                    );
                }
            }
            acc
        })
    });

    let eq = Equation::thin_standard(2, 16);
    c.bench_function("equation eval 64k std", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for y in 0..64u32 {
                for x in 0..64u32 {
                    acc ^= eq.evaluate(black_box(x << 2), black_box(y), 0);
                }
            }
            acc
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
