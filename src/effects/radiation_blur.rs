//! Radial blur from a configurable center point. Blur power snaps to the
//! maximum on trigger and eases back to its neutral value of 1.

use crate::easing::EaseType;
use crate::params::{ClampedFloat, Vec2};
use crate::profile::RadiationBlurSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct RadiationBlur {
    power: ClampedFloat,
    center: Vec2,
    max_power: f32,
    effect_time: f32,
    transition: Option<Transition>,
}

impl RadiationBlur {
    pub fn new(settings: &RadiationBlurSettings) -> Self {
        Self {
            power: ClampedFloat::new(1.0, 0.0, 100.0),
            center: settings.center,
            max_power: settings.max_power.clamp(0.0, 100.0),
            effect_time: settings.effect_time,
            transition: None,
        }
    }

    pub fn power(&self) -> f32 {
        self.power.value()
    }

    /// Blur origin in normalized screen coordinates.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn execute(&mut self) {
        self.transition = Some(Transition::new(
            self.effect_time,
            self.max_power,
            1.0,
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
        self.power.set(1.0);
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.power.value() > 1.0
    }
}
