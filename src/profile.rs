//! Profile loading and validation.
//!
//! A profile is the persisted configuration container: per-effect settings
//! sections, trigger bindings, and an optional scripted trigger timeline for
//! offline simulation. Only effect sections present in the profile produce
//! live instances; bindings whose target type has no section stay inert.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::easing::EaseType;
use crate::effects::{EdgeFilter, TriggerKind};
use crate::params::Vec2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub screen: ScreenSettings,
    #[serde(default)]
    pub effects: EffectSettings,
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub script: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// One trigger binding: a key tag mapped to a trigger type. Input polling is
/// out of scope, so keys are opaque strings matched exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Binding {
    pub key: String,
    pub trigger: TriggerKind,
}

/// Scripted trigger for `simulate`: fire `key` at `frame`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    pub frame: u32,
    pub key: String,
}

/// Per-effect settings sections. Absent section = no live instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<NegativeSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mosaic: Option<MosaicSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_shift: Option<RgbShiftSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiation_blur: Option<RadiationBlurSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<ReflectionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_detection: Option<EdgeDetectionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_invert: Option<RandomInvertSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distortion: Option<DistortionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_glitch: Option<BlockGlitchSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NegativeSettings {
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for NegativeSettings {
    fn default() -> Self {
        Self {
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MosaicSettings {
    #[serde(default = "default_max_mosaic_scale")]
    pub max_scale: f32,
    #[serde(default)]
    pub is_circle: bool,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            max_scale: default_max_mosaic_scale(),
            is_circle: false,
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RgbShiftSettings {
    #[serde(default = "default_max_shift_power")]
    pub max_power: f32,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for RgbShiftSettings {
    fn default() -> Self {
        Self {
            max_power: default_max_shift_power(),
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadiationBlurSettings {
    #[serde(default = "default_blur_center")]
    pub center: Vec2,
    #[serde(default = "default_max_blur_power")]
    pub max_power: f32,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for RadiationBlurSettings {
    fn default() -> Self {
        Self {
            center: default_blur_center(),
            max_power: default_max_blur_power(),
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReflectionSettings {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDetectionSettings {
    #[serde(default = "default_edge_power")]
    pub power: f32,
    #[serde(default = "default_edge_threshold")]
    pub threshold: f32,
    #[serde(default)]
    pub depth_threshold: f32,
    #[serde(default)]
    pub filter: EdgeFilter,
    #[serde(default = "default_back_color")]
    pub back_color: [f32; 4],
    #[serde(default = "default_edge_color")]
    pub edge_color: [f32; 4],
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for EdgeDetectionSettings {
    fn default() -> Self {
        Self {
            power: default_edge_power(),
            threshold: default_edge_threshold(),
            depth_threshold: 0.0,
            filter: EdgeFilter::default(),
            back_color: default_back_color(),
            edge_color: default_edge_color(),
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomInvertSettings {
    #[serde(default = "default_effect_time")]
    pub fade_time: f32,
    #[serde(default = "default_invert_noise_scale")]
    pub noise_scale: f32,
    #[serde(default = "default_invert_ease")]
    pub ease: EaseType,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for RandomInvertSettings {
    fn default() -> Self {
        Self {
            fade_time: default_effect_time(),
            noise_scale: default_invert_noise_scale(),
            ease: default_invert_ease(),
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistortionSettings {
    #[serde(default = "default_noise_distortion_scale")]
    pub noise_scale: f32,
    #[serde(default = "default_noise_distortion_position")]
    pub noise_position: [f32; 3],
    #[serde(default = "default_noise_distortion_time_scale")]
    pub noise_time_scale: f32,
    #[serde(default = "default_max_noise_distortion_power")]
    pub max_noise_power: f32,
    #[serde(default = "default_max_barrel_power")]
    pub max_barrel_power: f32,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for DistortionSettings {
    fn default() -> Self {
        Self {
            noise_scale: default_noise_distortion_scale(),
            noise_position: default_noise_distortion_position(),
            noise_time_scale: default_noise_distortion_time_scale(),
            max_noise_power: default_max_noise_distortion_power(),
            max_barrel_power: default_max_barrel_power(),
            effect_time: default_effect_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockGlitchSettings {
    /// Per-frame probability gate for refreshing the noise grid; the grid
    /// regenerates only when a uniform draw exceeds this value.
    #[serde(default = "default_glitch_noise_speed")]
    pub noise_speed: f32,
    /// Probability that a cell reuses its left neighbor's color.
    #[serde(default = "default_glitch_color_change")]
    pub noise_color_change: f32,
    #[serde(default = "default_glitch_scale")]
    pub glitch_scale: i32,
    #[serde(default = "default_max_glitch_intensity")]
    pub max_intensity: f32,
    #[serde(default = "default_effect_time")]
    pub effect_time: f32,
}

impl Default for BlockGlitchSettings {
    fn default() -> Self {
        Self {
            noise_speed: default_glitch_noise_speed(),
            noise_color_change: default_glitch_color_change(),
            glitch_scale: default_glitch_scale(),
            max_intensity: default_max_glitch_intensity(),
            effect_time: default_effect_time(),
        }
    }
}

fn default_effect_time() -> f32 {
    0.25
}

fn default_max_mosaic_scale() -> f32 {
    64.0
}

fn default_max_shift_power() -> f32 {
    54.0
}

fn default_blur_center() -> Vec2 {
    Vec2::new(0.5, 0.5)
}

fn default_max_blur_power() -> f32 {
    64.0
}

fn default_edge_power() -> f32 {
    1.0
}

fn default_edge_threshold() -> f32 {
    0.5
}

fn default_back_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_edge_color() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_invert_noise_scale() -> f32 {
    250.0
}

fn default_invert_ease() -> EaseType {
    EaseType::QuintOut
}

fn default_noise_distortion_scale() -> f32 {
    0.5
}

fn default_noise_distortion_position() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}

fn default_noise_distortion_time_scale() -> f32 {
    5.0
}

fn default_max_noise_distortion_power() -> f32 {
    0.15
}

fn default_max_barrel_power() -> f32 {
    6.0
}

fn default_glitch_noise_speed() -> f32 {
    0.9
}

fn default_glitch_color_change() -> f32 {
    0.85
}

fn default_glitch_scale() -> i32 {
    55
}

fn default_max_glitch_intensity() -> f32 {
    0.95
}

/// Read, parse and validate a profile file. A missing or unparsable profile
/// is fatal: without it the dispatch registry has nothing to resolve.
pub fn load_and_validate_profile(path: &Path) -> Result<Profile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: Profile = serde_yaml::from_str(&contents).map_err(|error| {
        let location = error
            .location()
            .map(|location| format!("line {}, column {}", location.line(), location.column()))
            .unwrap_or_else(|| "unknown location".to_owned());
        anyhow!(
            "failed to parse yaml in {} at {}: {}",
            path.display(),
            location,
            error
        )
    })?;

    validate_profile(&profile)?;
    Ok(profile)
}

pub fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.screen.width == 0 || profile.screen.height == 0 {
        bail!(
            "screen dimensions must be non-zero, got {}x{}",
            profile.screen.width,
            profile.screen.height
        );
    }

    let mut seen_keys = Vec::with_capacity(profile.bindings.len());
    for binding in &profile.bindings {
        if binding.key.is_empty() {
            bail!("binding for {:?} has an empty key", binding.trigger);
        }
        if seen_keys.contains(&binding.key.as_str()) {
            bail!("duplicate binding key '{}'", binding.key);
        }
        seen_keys.push(binding.key.as_str());
    }

    for event in &profile.script {
        if !seen_keys.contains(&event.key.as_str()) {
            bail!(
                "script event at frame {} references unbound key '{}'",
                event.frame,
                event.key
            );
        }
    }

    Ok(())
}
