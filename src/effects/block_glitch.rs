//! Rectangular block glitch. Intensity alternates 0↔max with persistent
//! phase; the displacement pattern comes from a low-resolution noise grid
//! that tracks the screen size divided by the glitch scale and refreshes
//! probabilistically while the effect is active.

use crate::easing::EaseType;
use crate::effects::FrameContext;
use crate::noise::NoiseBuffer;
use crate::params::{ClampedFloat, ClampedInt};
use crate::profile::BlockGlitchSettings;
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct BlockGlitch {
    intensity: ClampedFloat,
    glitch_scale: ClampedInt,
    noise_speed: ClampedFloat,
    noise_color_change: ClampedFloat,
    max_intensity: f32,
    effect_time: f32,
    glitch_switcher: bool,
    transition: Option<Transition>,
    noise: Option<NoiseBuffer>,
}

impl BlockGlitch {
    pub fn new(
        settings: &BlockGlitchSettings,
        seed: u64,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        let glitch_scale = ClampedInt::new(settings.glitch_scale, 1, 150);
        Self {
            intensity: ClampedFloat::new(0.0, 0.0, 1.0),
            glitch_scale,
            noise_speed: ClampedFloat::new(settings.noise_speed, 0.0, 1.0),
            noise_color_change: ClampedFloat::new(settings.noise_color_change, 0.0, 1.0),
            max_intensity: settings.max_intensity.clamp(0.0, 1.0),
            effect_time: settings.effect_time,
            glitch_switcher: false,
            transition: None,
            noise: Some(NoiseBuffer::new(
                glitch_scale.value() as u32,
                screen_width,
                screen_height,
                seed,
            )),
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity.value()
    }

    pub fn glitch_scale(&self) -> i32 {
        self.glitch_scale.value()
    }

    /// Change the block size. The grid is reallocated on the next tick.
    pub fn set_glitch_scale(&mut self, scale: i32) {
        self.glitch_scale.set(scale);
    }

    /// Grid contents for the shading pass; `None` once cleaned up.
    pub fn noise(&self) -> Option<&NoiseBuffer> {
        self.noise.as_ref()
    }

    pub fn execute(&mut self) {
        let start = if self.glitch_switcher {
            self.max_intensity
        } else {
            0.0
        };
        let end = self.max_intensity - start;
        self.glitch_switcher = !self.glitch_switcher;
        self.transition = Some(Transition::new(
            self.effect_time,
            start,
            end,
            EaseType::QuadOut,
        ));
    }

    pub fn tick(&mut self, ctx: &FrameContext) {
        if let Some(transition) = &mut self.transition {
            self.intensity.set(transition.tick(ctx.dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }

        if self.intensity.value() > 0.0 {
            if let Some(noise) = &mut self.noise {
                noise.resize(
                    self.glitch_scale.value() as u32,
                    ctx.screen_width,
                    ctx.screen_height,
                );
                noise.maybe_regenerate(self.noise_speed.value(), self.noise_color_change.value());
            }
        }
    }

    pub fn reset(&mut self) {
        self.intensity.set(0.0);
        self.glitch_switcher = false;
        self.transition = None;
    }

    /// Drop the grid on teardown; the backend handle goes with it.
    pub fn cleanup(&mut self) {
        self.noise = None;
    }

    pub fn is_active(&self) -> bool {
        self.intensity.value() > 0.0
    }
}
