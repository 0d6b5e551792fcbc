//! Trigger dispatch registry.
//!
//! Bindings are resolved against the live effect collection exactly once at
//! startup; after that the controller only routes edge-triggered events and
//! advances every effect once per frame. Everything runs on the single
//! frame-tick thread, so each parameter has exactly one writer.

use crate::effects::{
    BlockGlitch, Distortion, EdgeDetection, Effect, EffectKind, FrameContext, Mosaic, Negative,
    RadiationBlur, RandomInvert, Reflection, RgbShift, TriggerKind,
};
use crate::profile::Profile;

/// Build the live effect collection from a profile: one instance per effect
/// section present. This is the stand-in for the backend's resource setup;
/// an effect whose resources did not resolve simply has no instance here.
pub fn build_effects(profile: &Profile) -> Vec<Effect> {
    let settings = &profile.effects;
    let screen = profile.screen;
    let mut effects = Vec::new();

    if let Some(s) = &settings.negative {
        effects.push(Effect::Negative(Negative::new(s)));
    }
    if let Some(s) = &settings.mosaic {
        effects.push(Effect::Mosaic(Mosaic::new(s)));
    }
    if let Some(s) = &settings.rgb_shift {
        effects.push(Effect::RgbShift(RgbShift::new(s, profile.seed)));
    }
    if let Some(s) = &settings.radiation_blur {
        effects.push(Effect::RadiationBlur(RadiationBlur::new(s)));
    }
    if let Some(s) = &settings.reflection {
        effects.push(Effect::Reflection(Reflection::new(s)));
    }
    if let Some(s) = &settings.edge_detection {
        effects.push(Effect::EdgeDetection(EdgeDetection::new(s)));
    }
    if let Some(s) = &settings.random_invert {
        effects.push(Effect::RandomInvert(RandomInvert::new(s)));
    }
    if let Some(s) = &settings.distortion {
        effects.push(Effect::Distortion(Distortion::new(s)));
    }
    if let Some(s) = &settings.block_glitch {
        effects.push(Effect::BlockGlitch(BlockGlitch::new(
            s,
            profile.seed,
            screen.width,
            screen.height,
        )));
    }

    effects
}

#[derive(Debug, Clone)]
struct ResolvedBinding {
    key: String,
    trigger: TriggerKind,
    /// Index into the effect collection; `None` makes the binding inert.
    effect_index: Option<usize>,
}

#[derive(Debug)]
pub struct PostProcessController {
    effects: Vec<Effect>,
    bindings: Vec<ResolvedBinding>,
}

impl PostProcessController {
    /// One-time binding resolution. Each binding takes the first effect
    /// whose kind matches its trigger's target; duplicate-typed effects are
    /// not disambiguated. Bound effects start from their reset state.
    pub fn resolve(profile: &Profile, effects: Vec<Effect>) -> Self {
        let mut controller = Self {
            effects,
            bindings: Vec::with_capacity(profile.bindings.len()),
        };

        for binding in &profile.bindings {
            let target = binding.trigger.target();
            let effect_index = controller
                .effects
                .iter()
                .position(|effect| effect.kind() == target);
            if effect_index.is_none() {
                eprintln!(
                    "[cinefx] binding '{}' -> {:?} has no live {:?} instance; it will never fire",
                    binding.key, binding.trigger, target
                );
            }
            controller.bindings.push(ResolvedBinding {
                key: binding.key.clone(),
                trigger: binding.trigger,
                effect_index,
            });
        }

        for binding in &controller.bindings {
            if let Some(index) = binding.effect_index {
                controller.effects[index].reset();
            }
        }

        controller
    }

    /// Convenience: build the effect collection from the profile and resolve.
    pub fn from_profile(profile: &Profile) -> Self {
        Self::resolve(profile, build_effects(profile))
    }

    /// Deliver one edge-triggered event. Unknown keys and inert bindings
    /// are silent no-ops.
    pub fn trigger(&mut self, key: &str, ctx: &FrameContext) {
        let Some(binding) = self.bindings.iter().find(|binding| binding.key == key) else {
            return;
        };
        let (trigger, effect_index) = (binding.trigger, binding.effect_index);
        if let Some(index) = effect_index {
            self.effects[index].execute(trigger, ctx);
        }
    }

    /// Advance every effect by one frame. Called exactly once per rendered
    /// frame; never fails, never blocks.
    pub fn tick(&mut self, ctx: &FrameContext) {
        for effect in &mut self.effects {
            effect.tick(ctx);
        }
    }

    /// Read-only view for the rendering backend.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// First effect of the given kind, mirroring binding resolution order.
    pub fn effect_of_kind(&self, kind: EffectKind) -> Option<&Effect> {
        self.effects.iter().find(|effect| effect.kind() == kind)
    }

    /// Force every effect back to neutral.
    pub fn reset_all(&mut self) {
        for effect in &mut self.effects {
            effect.reset();
        }
    }

    fn cleanup_all(&mut self) {
        for effect in &mut self.effects {
            effect.cleanup();
        }
    }
}

impl Drop for PostProcessController {
    fn drop(&mut self) {
        self.reset_all();
        self.cleanup_all();
    }
}
