//! Noise-gated color invert. Each trigger flips the invert flag, records
//! the trigger timestamp for the shading pass, and fades the gate threshold
//! from 1 back down to 0 with the configured curve.

use crate::params::ClampedFloat;
use crate::profile::RandomInvertSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct RandomInvert {
    threshold: ClampedFloat,
    is_invert: bool,
    start_time: f32,
    settings: RandomInvertSettings,
    transition: Option<Transition>,
}

impl RandomInvert {
    pub fn new(settings: &RandomInvertSettings) -> Self {
        Self {
            threshold: ClampedFloat::new(0.0, 0.0, 1.0),
            is_invert: false,
            start_time: 0.0,
            settings: settings.clone(),
            transition: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold.value()
    }

    pub fn is_invert(&self) -> bool {
        self.is_invert
    }

    /// Clock value of the most recent trigger, read by the shading pass.
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    pub fn fade_time(&self) -> f32 {
        self.settings.fade_time
    }

    pub fn noise_scale(&self) -> f32 {
        self.settings.noise_scale
    }

    pub fn execute(&mut self, time: f32) {
        self.is_invert = !self.is_invert;
        self.start_time = time;
        self.transition = Some(Transition::new(
            self.settings.effect_time,
            1.0,
            0.0,
            self.settings.ease,
        ));
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.threshold.set(transition.tick(dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.threshold.set(0.0);
        self.is_invert = false;
        self.start_time = 0.0;
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.threshold.value() > 0.0
    }
}
