//! Effect parameter value types.
//!
//! Each parameter is owned exclusively by its effect: only the owning
//! effect's execute/tick/reset path writes it, and the rendering backend
//! reads it by value once per frame.

use serde::{Deserialize, Serialize};

/// A scalar parameter clamped to a declared legal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedFloat {
    value: f32,
    min: f32,
    max: f32,
}

impl ClampedFloat {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        debug_assert!(min <= max);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Write a new value, clamped into the legal range.
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

/// An integer parameter clamped to a declared legal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedInt {
    value: i32,
    min: i32,
    max: i32,
}

impl ClampedInt {
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        debug_assert!(min <= max);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// Plain 2-vector for parameters like the blur center or barrel power.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClampedFloat, ClampedInt, Vec2};

    #[test]
    fn clamped_float_clamps_on_construction_and_set() {
        let mut p = ClampedFloat::new(150.0, 0.0, 100.0);
        assert_eq!(p.value(), 100.0);
        p.set(-5.0);
        assert_eq!(p.value(), 0.0);
        p.set(42.5);
        assert_eq!(p.value(), 42.5);
    }

    #[test]
    fn clamped_int_clamps_into_range() {
        let mut p = ClampedInt::new(0, 1, 150);
        assert_eq!(p.value(), 1);
        p.set(200);
        assert_eq!(p.value(), 150);
    }

    #[test]
    fn vec2_splat_fills_both_components() {
        assert_eq!(Vec2::splat(6.0), Vec2::new(6.0, 6.0));
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
    }
}
