//! RGB channel shift. The shift power decays from the configured maximum to
//! zero on every trigger; the shift direction wanders smoothly over time and
//! is sampled by the backend through [`RgbShift::shift_vector`].

use std::f32::consts::TAU;

use crate::easing::EaseType;
use crate::params::{ClampedFloat, Vec2};
use crate::profile::RgbShiftSettings;
use crate::rng::value_noise_1d;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct RgbShift {
    power: ClampedFloat,
    max_power: f32,
    effect_time: f32,
    seed: u64,
    transition: Option<Transition>,
}

impl RgbShift {
    pub fn new(settings: &RgbShiftSettings, seed: u64) -> Self {
        Self {
            power: ClampedFloat::new(0.0, 0.0, 100.0),
            max_power: settings.max_power.clamp(0.0, 100.0),
            effect_time: settings.effect_time,
            seed,
            transition: None,
        }
    }

    pub fn power(&self) -> f32 {
        self.power.value()
    }

    /// Per-frame UV shift: direction from smooth value noise over the clock,
    /// magnitude from the current power.
    pub fn shift_vector(&self, time: f32) -> Vec2 {
        let angle = value_noise_1d(self.seed, time) * TAU;
        Vec2::new(angle.cos() * self.power.value(), angle.sin() * self.power.value())
    }

    pub fn execute(&mut self) {
        self.transition = Some(Transition::new(
            self.effect_time,
            self.max_power,
            0.0,
            EaseType::QuadOut,
        ));
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.power.set(transition.tick(dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.power.set(0.0);
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.power.value() > 0.0
    }
}
