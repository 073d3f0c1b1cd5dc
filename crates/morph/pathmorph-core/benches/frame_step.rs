use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathmorph_core::{compute_frame_into, EasingCurve, PathInfo, Point, NORMALIZED_MAX};
use pathmorph_test_fixtures::shapes;

fn bench_frame_step(c: &mut Criterion) {
    let from: PathInfo = shapes::load("square").expect("square fixture");
    let to: PathInfo = shapes::load("star").expect("star fixture");
    let mut out = vec![Point::default(); from.num_points()];

    for curve in EasingCurve::ALL {
        c.bench_function(&format!("frame_{}", curve.name()), |b| {
            let mut t = 0u32;
            b.iter(|| {
                t = (t + 997) % NORMALIZED_MAX;
                compute_frame_into(
                    black_box(&mut out),
                    black_box(&from.points),
                    black_box(&to.points),
                    t,
                    curve,
                )
            })
        });
    }
}

criterion_group!(benches, bench_frame_step);
criterion_main!(benches);
