//! Edge detection overlay. The blend between edges and the source image
//! alternates 1→0 and 0→1 on consecutive triggers; the filter kernel choice
//! and colors are static settings the shading pass reads as-is.

use serde::{Deserialize, Serialize};

use crate::easing::EaseType;
use crate::params::ClampedFloat;
use crate::profile::EdgeDetectionSettings;
use crate::transition::Transition;

/// Which detection kernel the shading pass should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFilter {
    #[default]
    Sobel,
    Laplacian,
    Depth,
}

#[derive(Debug, Clone)]
pub struct EdgeDetection {
    blend: ClampedFloat,
    settings: EdgeDetectionSettings,
    edge_switcher: bool,
    transition: Option<Transition>,
}

impl EdgeDetection {
    pub fn new(settings: &EdgeDetectionSettings) -> Self {
        Self {
            blend: ClampedFloat::new(1.0, 0.0, 1.0),
            settings: settings.clone(),
            edge_switcher: false,
            transition: None,
        }
    }

    /// Blend between the edge overlay and the untouched source.
    pub fn blend(&self) -> f32 {
        self.blend.value()
    }

    pub fn power(&self) -> f32 {
        self.settings.power
    }

    pub fn threshold(&self) -> f32 {
        self.settings.threshold
    }

    pub fn depth_threshold(&self) -> f32 {
        self.settings.depth_threshold
    }

    pub fn filter(&self) -> EdgeFilter {
        self.settings.filter
    }

    pub fn back_color(&self) -> [f32; 4] {
        self.settings.back_color
    }

    pub fn edge_color(&self) -> [f32; 4] {
        self.settings.edge_color
    }

    pub fn execute(&mut self) {
        let start = if self.edge_switcher { 0.0 } else { 1.0 };
        let end = 1.0 - start;
        self.edge_switcher = !self.edge_switcher;
        self.transition = Some(Transition::new(
            self.settings.effect_time,
            start,
            end,
            EaseType::QuadOut,
        ));
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(transition) = &mut self.transition {
            self.blend.set(transition.tick(dt));
            if transition.is_finished() {
                self.transition = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.blend.set(1.0);
        self.edge_switcher = false;
        self.transition = None;
    }

    pub fn is_active(&self) -> bool {
        self.blend.value() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeDetection, EdgeFilter};
    use crate::profile::EdgeDetectionSettings;

    fn run_to_completion(effect: &mut EdgeDetection) {
        for _ in 0..40 {
            effect.tick(0.01);
        }
    }

    #[test]
    fn blend_alternates_between_one_and_zero() {
        let mut effect = EdgeDetection::new(&EdgeDetectionSettings::default());
        assert_eq!(effect.blend(), 1.0);
        assert!(!effect.is_active());

        effect.execute();
        run_to_completion(&mut effect);
        assert_eq!(effect.blend(), 0.0);
        assert!(effect.is_active());

        effect.execute();
        run_to_completion(&mut effect);
        assert_eq!(effect.blend(), 1.0);
        assert!(!effect.is_active());
    }

    #[test]
    fn consecutive_triggers_swap_start_and_end() {
        let mut effect = EdgeDetection::new(&EdgeDetectionSettings::default());
        effect.execute();
        effect.tick(0.0);
        let first_start = effect.blend();
        run_to_completion(&mut effect);
        let first_end = effect.blend();

        effect.execute();
        effect.tick(0.0);
        let second_start = effect.blend();
        run_to_completion(&mut effect);
        let second_end = effect.blend();

        assert_eq!((first_start, first_end), (second_end, second_start));
    }

    #[test]
    fn filter_settings_are_exposed_to_the_backend() {
        let effect = EdgeDetection::new(&EdgeDetectionSettings {
            filter: EdgeFilter::Laplacian,
            power: 2.0,
            ..EdgeDetectionSettings::default()
        });
        assert_eq!(effect.filter(), EdgeFilter::Laplacian);
        assert_eq!(effect.power(), 2.0);
        assert_eq!(effect.back_color(), [1.0, 1.0, 1.0, 1.0]);
    }
}
