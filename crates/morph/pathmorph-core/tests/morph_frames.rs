use pathmorph_core::{
    compute_frame, compute_frame_into, EasingCurve, FrameKind, PathInfo, Point, NORMALIZED_MAX,
    NORMALIZED_MIN,
};
use pathmorph_test_fixtures::shapes;

fn shape(name: &str) -> PathInfo {
    shapes::load(name).expect("shape fixture")
}

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn endpoints_are_exact_for_every_curve_and_fixture_pair() {
    let names = ["square", "star", "decagon"];
    for a in names {
        for b in names {
            let from = shape(a);
            let to = shape(b);
            for curve in EasingCurve::ALL {
                assert_eq!(
                    compute_frame(&from.points, &to.points, NORMALIZED_MIN, curve),
                    from.points,
                    "{a}->{b} {curve} at MIN"
                );
                assert_eq!(
                    compute_frame(&from.points, &to.points, NORMALIZED_MAX, curve),
                    to.points,
                    "{a}->{b} {curve} at MAX"
                );
            }
        }
    }
}

#[test]
fn endpoint_frames_report_their_kind() {
    let from = shape("square");
    let to = shape("star");
    let mut out = vec![Point::default(); from.num_points()];
    let kinds: Vec<FrameKind> = [NORMALIZED_MIN, 1, NORMALIZED_MAX - 1, NORMALIZED_MAX]
        .into_iter()
        .map(|t| compute_frame_into(&mut out, &from.points, &to.points, t, EasingCurve::Linear))
        .collect();
    assert_eq!(
        kinds,
        vec![
            FrameKind::Start,
            FrameKind::Eased,
            FrameKind::Eased,
            FrameKind::End
        ]
    );
}

#[test]
fn linear_coordinates_move_monotonically_toward_target() {
    let from = shape("square");
    let to = shape("star");
    let steps: Vec<u32> = (0..=64).map(|i| i * (NORMALIZED_MAX / 64)).collect();
    let frames: Vec<Vec<Point>> = steps
        .iter()
        .map(|&t| compute_frame(&from.points, &to.points, t, EasingCurve::Linear))
        .collect();

    for i in 0..from.num_points() {
        let dx = i32::from(to.points[i].x) - i32::from(from.points[i].x);
        let dy = i32::from(to.points[i].y) - i32::from(from.points[i].y);
        for pair in frames.windows(2) {
            let step_x = i32::from(pair[1][i].x) - i32::from(pair[0][i].x);
            let step_y = i32::from(pair[1][i].y) - i32::from(pair[0][i].y);
            assert!(step_x * dx.signum() >= 0, "x of point {i} moved backwards");
            assert!(step_y * dy.signum() >= 0, "y of point {i} moved backwards");
            if dx == 0 {
                assert_eq!(step_x, 0);
            }
            if dy == 0 {
                assert_eq!(step_y, 0);
            }
        }
    }
}

#[test]
fn linear_frame_tracks_fraction() {
    let from = PathInfo::from_iter([(0, 0), (-100, 200), (50, 50)]);
    let to = PathInfo::from_iter([(100, 0), (100, -200), (50, 50)]);
    let out = compute_frame(&from.points, &to.points, NORMALIZED_MAX / 4, EasingCurve::Linear);
    assert_eq!(
        out,
        vec![Point::new(25, 0), Point::new(-50, 100), Point::new(50, 50)]
    );
}

#[test]
fn ease_in_out_is_symmetric_about_the_midpoint() {
    let a = shape("square");
    let b = shape("decagon");
    let t = NORMALIZED_MAX / 2;
    let forward = compute_frame(&a.points, &b.points, t, EasingCurve::EaseInOut);
    let backward = compute_frame(&b.points, &a.points, t, EasingCurve::EaseInOut);

    let axes: [fn(Point) -> i16; 2] = [|p| p.x, |p| p.y];
    for i in 0..a.num_points() {
        for axis in axes {
            let (from, to) = (f64::from(axis(a.points[i])), f64::from(axis(b.points[i])));
            let (fwd, back) = (f64::from(axis(forward[i])), f64::from(axis(backward[i])));
            let span = to - from;
            if span == 0.0 {
                assert_eq!(fwd, from);
                assert_eq!(back, to);
                continue;
            }
            // rounding to whole pixels bounds the disagreement
            approx((fwd - from) / span, (to - back) / span, 1.0 / span.abs() + 1e-9);
        }
    }
}

#[test]
fn curves_order_as_expected_early_in_the_run() {
    let from = PathInfo::from_iter([(0, 0), (0, 0), (0, 0)]);
    let to = PathInfo::from_iter([(1000, 0), (1000, 0), (1000, 0)]);
    let t = NORMALIZED_MAX / 5;
    let x = |curve| compute_frame(&from.points, &to.points, t, curve)[0].x;

    let linear = x(EasingCurve::Linear);
    let ease_in = x(EasingCurve::EaseIn);
    let ease_out = x(EasingCurve::EaseOut);
    let ease_in_out = x(EasingCurve::EaseInOut);

    assert_eq!(linear, 200);
    assert!(ease_in < ease_in_out);
    assert!(ease_in_out < ease_out);
    assert!(ease_out < linear);
}
