//! Frame computation: maps (from, to, normalized time, curve) to vertex positions.
//!
//! Endpoints are copied verbatim so the first and last frames are exact no
//! matter how the easing formulas round.

pub mod functions;

use crate::curve::EasingCurve;
use crate::geometry::Point;
use crate::host::{NORMALIZED_MAX, NORMALIZED_MIN};

/// How a frame was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Copy of the source snapshot.
    Start,
    /// Copy of the destination snapshot.
    End,
    /// Eased per-point interpolation.
    Eased,
}

/// Fraction of completion in [0, 1] for a normalized time. Values past the
/// end of the domain count as finished.
#[inline]
pub fn fraction(time_normalized: u32) -> f64 {
    let t = time_normalized.min(NORMALIZED_MAX);
    f64::from(t - NORMALIZED_MIN) / f64::from(NORMALIZED_MAX - NORMALIZED_MIN)
}

/// Write the frame for `time_normalized` into `out`.
///
/// `from`, `to` and `out` must have the same length.
pub fn compute_frame_into(
    out: &mut [Point],
    from: &[Point],
    to: &[Point],
    time_normalized: u32,
    curve: EasingCurve,
) -> FrameKind {
    debug_assert_eq!(from.len(), to.len());
    debug_assert_eq!(out.len(), to.len());

    if time_normalized == NORMALIZED_MIN {
        out.copy_from_slice(from);
        return FrameKind::Start;
    }
    if time_normalized >= NORMALIZED_MAX {
        out.copy_from_slice(to);
        return FrameKind::End;
    }

    let p = fraction(time_normalized);
    for ((dst, a), b) in out.iter_mut().zip(from).zip(to) {
        dst.x = functions::ease_axis(a.x, b.x, p, curve);
        dst.y = functions::ease_axis(a.y, b.y, p, curve);
    }
    FrameKind::Eased
}

/// Allocating form of [`compute_frame_into`].
pub fn compute_frame(
    from: &[Point],
    to: &[Point],
    time_normalized: u32,
    curve: EasingCurve,
) -> Vec<Point> {
    let mut out = vec![Point::default(); to.len()];
    compute_frame_into(&mut out, from, to, time_normalized, curve);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i16, i16)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn endpoints_are_exact_copies() {
        let from = pts(&[(-40, -40), (40, -40), (0, 40)]);
        let to = pts(&[(-12, -11), (38, -17), (0, 20)]);
        for curve in EasingCurve::ALL {
            assert_eq!(compute_frame(&from, &to, NORMALIZED_MIN, curve), from);
            assert_eq!(compute_frame(&from, &to, NORMALIZED_MAX, curve), to);
        }
    }

    #[test]
    fn time_past_the_end_is_clamped() {
        let from = pts(&[(0, 0), (1, 1), (2, 2)]);
        let to = pts(&[(9, 9), (8, 8), (7, 7)]);
        let mut out = vec![Point::default(); 3];
        let kind = compute_frame_into(&mut out, &from, &to, u32::MAX, EasingCurve::EaseOut);
        assert_eq!(kind, FrameKind::End);
        assert_eq!(out, to);
    }

    #[test]
    fn axes_are_independent() {
        let from = pts(&[(0, 100)]);
        let to = pts(&[(100, 100)]);
        let out = compute_frame(&from, &to, NORMALIZED_MAX / 4, EasingCurve::Linear);
        assert_eq!(out[0].y, 100);
        assert_eq!(out[0].x, 25);
    }

    #[test]
    fn fraction_spans_unit_interval() {
        assert_eq!(fraction(NORMALIZED_MIN), 0.0);
        assert_eq!(fraction(NORMALIZED_MAX), 1.0);
        assert_eq!(fraction(NORMALIZED_MAX + 10), 1.0);
    }
}
