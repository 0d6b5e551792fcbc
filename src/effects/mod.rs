//! Effect toggle state machines.
//!
//! Every effect shares one capability — execute on trigger, tick per frame,
//! reset to neutral, report activity — and differs only in its extremes,
//! curve, duration and phase behavior. That shape is modeled as the
//! [`Effect`] variant enum rather than a trait-object hierarchy: dispatch is
//! a `match`, and the rendering backend gets typed read access to each
//! variant's parameters.

mod block_glitch;
mod distortion;
mod edge_detection;
mod mosaic;
mod negative;
mod radiation_blur;
mod random_invert;
mod reflection;
mod rgb_shift;

pub use block_glitch::BlockGlitch;
pub use distortion::Distortion;
pub use edge_detection::{EdgeDetection, EdgeFilter};
pub use mosaic::Mosaic;
pub use negative::Negative;
pub use radiation_blur::RadiationBlur;
pub use random_invert::RandomInvert;
pub use reflection::Reflection;
pub use rgb_shift::RgbShift;

use serde::{Deserialize, Serialize};

/// Discrete trigger event tags, as declared in profile bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    ReflectionHorizontal,
    ReflectionVertical,
    Mosaic,
    RadiationBlur,
    RectBlockGlitch,
    NoiseDistortion,
    BarrelDistortion,
    RgbShift,
    RandomInvert,
    Negative,
    EdgeDetection,
}

impl TriggerKind {
    /// Which effect type services this trigger. Two reflection triggers and
    /// two distortion triggers address the same instance.
    pub fn target(self) -> EffectKind {
        match self {
            Self::ReflectionHorizontal | Self::ReflectionVertical => EffectKind::Reflection,
            Self::Mosaic => EffectKind::Mosaic,
            Self::RadiationBlur => EffectKind::RadiationBlur,
            Self::RectBlockGlitch => EffectKind::BlockGlitch,
            Self::NoiseDistortion | Self::BarrelDistortion => EffectKind::Distortion,
            Self::RgbShift => EffectKind::RgbShift,
            Self::RandomInvert => EffectKind::RandomInvert,
            Self::Negative => EffectKind::Negative,
            Self::EdgeDetection => EffectKind::EdgeDetection,
        }
    }
}

/// Effect type tag used for binding resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Negative,
    Mosaic,
    RgbShift,
    RadiationBlur,
    Reflection,
    EdgeDetection,
    RandomInvert,
    Distortion,
    BlockGlitch,
}

/// Per-frame host context: elapsed time for this frame, absolute clock, and
/// the current screen dimensions (the block glitch grid tracks them).
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub dt: f32,
    pub time: f32,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl FrameContext {
    pub fn new(dt: f32, time: f32, screen_width: u32, screen_height: u32) -> Self {
        Self {
            dt,
            time,
            screen_width,
            screen_height,
        }
    }
}

/// One live effect instance.
#[derive(Debug, Clone)]
pub enum Effect {
    Negative(Negative),
    Mosaic(Mosaic),
    RgbShift(RgbShift),
    RadiationBlur(RadiationBlur),
    Reflection(Reflection),
    EdgeDetection(EdgeDetection),
    RandomInvert(RandomInvert),
    Distortion(Distortion),
    BlockGlitch(BlockGlitch),
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Negative(_) => EffectKind::Negative,
            Self::Mosaic(_) => EffectKind::Mosaic,
            Self::RgbShift(_) => EffectKind::RgbShift,
            Self::RadiationBlur(_) => EffectKind::RadiationBlur,
            Self::Reflection(_) => EffectKind::Reflection,
            Self::EdgeDetection(_) => EffectKind::EdgeDetection,
            Self::RandomInvert(_) => EffectKind::RandomInvert,
            Self::Distortion(_) => EffectKind::Distortion,
            Self::BlockGlitch(_) => EffectKind::BlockGlitch,
        }
    }

    /// Handle one discrete trigger event. Re-triggering mid-transition
    /// replaces the in-flight transition.
    pub fn execute(&mut self, trigger: TriggerKind, ctx: &FrameContext) {
        match self {
            Self::Negative(e) => e.execute(),
            Self::Mosaic(e) => e.execute(),
            Self::RgbShift(e) => e.execute(),
            Self::RadiationBlur(e) => e.execute(),
            Self::Reflection(e) => e.execute(trigger),
            Self::EdgeDetection(e) => e.execute(),
            Self::RandomInvert(e) => e.execute(ctx.time),
            Self::Distortion(e) => e.execute(trigger),
            Self::BlockGlitch(e) => e.execute(),
        }
    }

    /// Advance transitions (and the glitch noise buffer) by one frame.
    pub fn tick(&mut self, ctx: &FrameContext) {
        match self {
            Self::Negative(e) => e.tick(ctx.dt),
            Self::Mosaic(e) => e.tick(ctx.dt),
            Self::RgbShift(e) => e.tick(ctx.dt),
            Self::RadiationBlur(e) => e.tick(ctx.dt),
            Self::Reflection(_) => {}
            Self::EdgeDetection(e) => e.tick(ctx.dt),
            Self::RandomInvert(e) => e.tick(ctx.dt),
            Self::Distortion(e) => e.tick(ctx.dt),
            Self::BlockGlitch(e) => e.tick(ctx),
        }
    }

    /// Force parameters to neutral and phase to its initial value.
    pub fn reset(&mut self) {
        match self {
            Self::Negative(e) => e.reset(),
            Self::Mosaic(e) => e.reset(),
            Self::RgbShift(e) => e.reset(),
            Self::RadiationBlur(e) => e.reset(),
            Self::Reflection(e) => e.reset(),
            Self::EdgeDetection(e) => e.reset(),
            Self::RandomInvert(e) => e.reset(),
            Self::Distortion(e) => e.reset(),
            Self::BlockGlitch(e) => e.reset(),
        }
    }

    /// Cheap activity gate for the rendering backend: skip the shading pass
    /// entirely when false.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Negative(e) => e.is_active(),
            Self::Mosaic(e) => e.is_active(),
            Self::RgbShift(e) => e.is_active(),
            Self::RadiationBlur(e) => e.is_active(),
            Self::Reflection(e) => e.is_active(),
            Self::EdgeDetection(e) => e.is_active(),
            Self::RandomInvert(e) => e.is_active(),
            Self::Distortion(e) => e.is_active(),
            Self::BlockGlitch(e) => e.is_active(),
        }
    }

    /// Release backend-facing resources on teardown.
    pub fn cleanup(&mut self) {
        if let Self::BlockGlitch(e) = self {
            e.cleanup();
        }
    }
}
