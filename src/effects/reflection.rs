//! Screen reflection. A cut, not a transition: each trigger flips the flag
//! for its axis directly, with no animation.

use crate::effects::TriggerKind;
use crate::profile::ReflectionSettings;

#[derive(Debug, Clone, Default)]
pub struct Reflection {
    is_horizontal: bool,
    is_vertical: bool,
}

impl Reflection {
    pub fn new(_settings: &ReflectionSettings) -> Self {
        Self::default()
    }

    pub fn is_horizontal(&self) -> bool {
        self.is_horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    pub fn execute(&mut self, trigger: TriggerKind) {
        match trigger {
            TriggerKind::ReflectionHorizontal => self.is_horizontal = !self.is_horizontal,
            TriggerKind::ReflectionVertical => self.is_vertical = !self.is_vertical,
            // Other triggers never reach this instance.
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.is_horizontal = false;
        self.is_vertical = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_horizontal || self.is_vertical
    }
}

#[cfg(test)]
mod tests {
    use super::Reflection;
    use crate::effects::TriggerKind;
    use crate::profile::ReflectionSettings;

    #[test]
    fn each_axis_toggles_independently() {
        let mut effect = Reflection::new(&ReflectionSettings::default());
        assert!(!effect.is_active());

        effect.execute(TriggerKind::ReflectionHorizontal);
        assert!(effect.is_horizontal() && !effect.is_vertical());
        assert!(effect.is_active());

        effect.execute(TriggerKind::ReflectionVertical);
        assert!(effect.is_horizontal() && effect.is_vertical());

        effect.execute(TriggerKind::ReflectionHorizontal);
        assert!(!effect.is_horizontal() && effect.is_vertical());
    }

    #[test]
    fn reset_clears_both_axes() {
        let mut effect = Reflection::new(&ReflectionSettings::default());
        effect.execute(TriggerKind::ReflectionHorizontal);
        effect.execute(TriggerKind::ReflectionVertical);
        effect.reset();
        assert!(!effect.is_active());
    }
}
