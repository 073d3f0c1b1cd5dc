//! Per-axis easing helpers.
//!
//! Every curve is expressed as a multiplier on the displacement already
//! travelled at the current progress, `delta = fraction * (to - from)`:
//!
//! - linear: `1`
//! - ease-in (quartic): `u^4` with `u = fraction`
//! - ease-out (quartic): `-(u^4 - 1)` with `u = fraction - 1`
//! - ease-in-out (quartic, two-piece): `u = 2 * fraction`; below 1 the first
//!   half `u^4 / 2`, otherwise `-(v^4 - 2) / 2` with `v = u - 2`
//!
//! Arithmetic stays in `f64` until the final coordinate, which is rounded half
//! away from zero and saturated into `i16`.

use crate::curve::EasingCurve;

#[inline]
fn pow4(u: f64) -> f64 {
    let sq = u * u;
    sq * sq
}

/// Multiplier applied to `delta` for the given curve at `fraction` in (0, 1).
#[inline]
pub fn curve_factor(curve: EasingCurve, fraction: f64) -> f64 {
    match curve {
        EasingCurve::Linear => 1.0,
        EasingCurve::EaseIn => pow4(fraction),
        EasingCurve::EaseOut => {
            let u = fraction - 1.0;
            -(pow4(u) - 1.0)
        }
        EasingCurve::EaseInOut => {
            let u = fraction * 2.0;
            if u < 1.0 {
                pow4(u) / 2.0
            } else {
                let v = u - 2.0;
                -(pow4(v) - 2.0) / 2.0
            }
        }
    }
}

/// Signed displacement travelled at `fraction`, before easing.
#[inline]
pub fn delta(from: i16, to: i16, fraction: f64) -> f64 {
    fraction * (f64::from(to) - f64::from(from))
}

/// Round half away from zero and saturate into the `i16` coordinate range.
#[inline]
pub fn round_coord(v: f64) -> i16 {
    v.round().clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// One eased coordinate between `from` and `to`.
#[inline]
pub fn ease_axis(from: i16, to: i16, fraction: f64, curve: EasingCurve) -> i16 {
    let d = delta(from, to, fraction);
    round_coord(f64::from(from) + d * curve_factor(curve, fraction))
}
