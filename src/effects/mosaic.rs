//! Mosaic pixelation. Every trigger restarts the same decay: block scale
//! snaps to the configured maximum and eases back down to 1 (no phase).

use crate::easing::EaseType;
use crate::params::ClampedFloat;
use crate::profile::MosaicSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct Mosaic {
    scale: ClampedFloat,
    max_scale: f32,
    is_circle: bool,
    effect_time: f32,
    transition: Option<Transition>,
}

impl Mosaic {
    pub fn new(settings: &MosaicSettings) -> Self {
        Self {
            scale: ClampedFloat::new(1.0, 0.0, 100.0),
            max_scale: settings.max_scale.clamp(0.0, 100.0),
            is_circle: settings.is_circle,
            effect_time: settings.effect_time,
            transition: None,
        }
    }

    /// Current block scale in pixels.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Whether the shading pass draws circular cells instead of squares.
    pub fn is_circle(&self) -> bool {
        self.is_circle
    }

    pub fn execute(&mut self) {
        self.transition = Some(Transition::new(
            self.effect_time,
            self.max_scale,
            1.0,
            EaseType::QuadOut,
        ));
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.scale.set(transition.tick(dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.scale.set(1.0);
        self.is_circle = false;
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.scale.value() > 1.0
    }
}
