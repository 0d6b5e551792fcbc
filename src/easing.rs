//! Pure easing curves for parameter transitions.
//!
//! All curves are stateless and deterministic. Callers clamp `t` into
//! `[0, 1]`; this module does not re-clamp.

use serde::{Deserialize, Serialize};

/// Interpolation curve selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseType {
    Linear,
    QuadIn,
    #[default]
    QuadOut,
    CubicOut,
    QuintOut,
}

/// Interpolate between `start` and `end` at eased progress `t`.
///
/// Boundary exactness holds for every curve: `ease(c, a, b, 0.0) == a` and
/// `ease(c, a, b, 1.0) == b` bit-for-bit, so transitions land precisely on
/// their declared extremes. The blend is written as `a*(1-p) + b*p` rather
/// than `a + (b-a)*p` to keep that guarantee under floating point.
pub fn ease(curve: EaseType, start: f32, end: f32, t: f32) -> f32 {
    let p = progress(curve, t);
    start * (1.0 - p) + end * p
}

fn progress(curve: EaseType, t: f32) -> f32 {
    match curve {
        EaseType::Linear => t,
        EaseType::QuadIn => t * t,
        EaseType::QuadOut => {
            let u = 1.0 - t;
            1.0 - u * u
        }
        EaseType::CubicOut => {
            let u = 1.0 - t;
            1.0 - u * u * u
        }
        EaseType::QuintOut => {
            let u = 1.0 - t;
            1.0 - u * u * u * u * u
        }
    }
}
