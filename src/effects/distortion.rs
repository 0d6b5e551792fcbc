//! UV distortion with two independently triggered modes sharing one
//! instance: noise distortion always decays max→0, while barrel distortion
//! alternates 0↔max with persistent phase.

use crate::easing::EaseType;
use crate::effects::TriggerKind;
use crate::params::{ClampedFloat, Vec2};
use crate::profile::DistortionSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct Distortion {
    noise_power: ClampedFloat,
    barrel_power: Vec2,
    settings: DistortionSettings,
    barrel_switcher: bool,
    noise_transition: Option<Transition>,
    barrel_transition: Option<Transition>,
}

impl Distortion {
    pub fn new(settings: &DistortionSettings) -> Self {
        Self {
            noise_power: ClampedFloat::new(0.0, 0.0, 1.0),
            barrel_power: Vec2::ZERO,
            settings: settings.clone(),
            barrel_switcher: false,
            noise_transition: None,
            barrel_transition: None,
        }
    }

    pub fn noise_power(&self) -> f32 {
        self.noise_power.value()
    }

    pub fn barrel_power(&self) -> Vec2 {
        self.barrel_power
    }

    pub fn noise_scale(&self) -> f32 {
        self.settings.noise_scale
    }

    pub fn noise_position(&self) -> [f32; 3] {
        self.settings.noise_position
    }

    pub fn noise_time_scale(&self) -> f32 {
        self.settings.noise_time_scale
    }

    pub fn execute(&mut self, trigger: TriggerKind) {
        match trigger {
            TriggerKind::NoiseDistortion => {
                self.noise_transition = Some(Transition::new(
                    self.settings.effect_time,
                    self.settings.max_noise_power,
                    0.0,
                    EaseType::QuadOut,
                ));
            }
            TriggerKind::BarrelDistortion => {
                let max = self.settings.max_barrel_power;
                let start = if self.barrel_switcher { max } else { 0.0 };
                let end = max - start;
                self.barrel_switcher = !self.barrel_switcher;
                self.barrel_transition = Some(Transition::new(
                    self.settings.effect_time,
                    start,
                    end,
                    EaseType::QuadOut,
                ));
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.noise_transition {
            self.noise_power.set(transition.tick(dt));
            if transition.is_finished() {
                self.noise_transition = None;
            }
        }
        if let Some(transition) = &mut self.barrel_transition {
            self.barrel_power = Vec2::splat(transition.tick(dt));
            if transition.is_finished() {
                self.barrel_transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.noise_power.set(0.0);
        self.barrel_power = Vec2::ZERO;
        self.barrel_switcher = false;
        self.noise_transition = None;
        self.barrel_transition = None;
    }

    pub fn is_active(&self) -> bool {
        (self.noise_power.value() > 0.0 && self.settings.noise_scale > 0.0)
            || self.barrel_power != Vec2::ZERO
    }
}
