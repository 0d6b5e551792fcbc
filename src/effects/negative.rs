//! Color negative blend. The only parameter is the blend ratio, which
//! alternates 0→1 and 1→0 on consecutive triggers.

use crate::easing::EaseType;
use crate::params::ClampedFloat;
use crate::profile::NegativeSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct Negative {
    ratio: ClampedFloat,
    effect_time: f32,
    is_negative: bool,
    transition: Option<Transition>,
}

impl Negative {
    pub fn new(settings: &NegativeSettings) -> Self {
        Self {
            ratio: ClampedFloat::new(0.0, 0.0, 1.0),
            effect_time: settings.effect_time,
            is_negative: false,
            transition: None,
        }
    }

    /// Blend ratio sampled by the shading pass.
    pub fn ratio(&self) -> f32 {
        self.ratio.value()
    }

    pub fn execute(&mut self) {
        let start = if self.is_negative { 1.0 } else { 0.0 };
        let end = 1.0 - start;
        self.is_negative = !self.is_negative;
        self.transition = Some(Transition::new(
            self.effect_time,
            start,
            end,
            EaseType::QuadOut,
        ));
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.ratio.set(transition.tick(dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.ratio.set(0.0);
        self.is_negative = false;
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.ratio.value() > 0.0
    }
}
