use serde::Deserialize;
use yew::{classes, Classes};

use crate::selector::SelectionGuard;

/// Visual variant of the hero. Both share markup and selection logic; they
/// differ in animation timing, background and hover treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// Plain background, 300 ms card fade, description swaps in place.
    Classic,
    /// Gradient background, scale/translate hover, description slides in.
    #[default]
    Slide,
}

impl TransitionStyle {
    pub fn name(self) -> &'static str {
        match self {
            TransitionStyle::Classic => "classic",
            TransitionStyle::Slide => "slide",
        }
    }

    pub fn duration_ms(self) -> u32 {
        match self {
            TransitionStyle::Classic => 300,
            TransitionStyle::Slide => 400,
        }
    }

    pub fn guard(self) -> SelectionGuard {
        match self {
            TransitionStyle::Classic => SelectionGuard::Unguarded,
            TransitionStyle::Slide => SelectionGuard::TransitionLock,
        }
    }

    pub fn section_class(self) -> Classes {
        classes!("verify-hero", format!("style-{}", self.name()))
    }

    pub fn card_class(self, active: bool) -> Classes {
        classes!(
            "feature-card",
            if active { "is-active" } else { "is-idle" },
            matches!(self, TransitionStyle::Slide).then_some("lift-on-hover"),
        )
    }

    pub fn description_class(self) -> Classes {
        match self {
            TransitionStyle::Classic => classes!("description"),
            TransitionStyle::Slide => classes!("description", "slide-in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_slide() {
        assert_eq!(TransitionStyle::default(), TransitionStyle::Slide);
    }

    #[test]
    fn only_slide_locks_transitions() {
        assert_eq!(TransitionStyle::Classic.guard(), SelectionGuard::Unguarded);
        assert_eq!(TransitionStyle::Slide.guard(), SelectionGuard::TransitionLock);
    }

    #[test]
    fn durations_match_variants() {
        assert_eq!(TransitionStyle::Classic.duration_ms(), 300);
        assert_eq!(TransitionStyle::Slide.duration_ms(), 400);
    }

    #[test]
    fn card_classes_reflect_state_and_variant() {
        let active = TransitionStyle::Slide.card_class(true);
        assert!(active.contains("is-active"));
        assert!(active.contains("lift-on-hover"));

        let idle = TransitionStyle::Classic.card_class(false);
        assert!(idle.contains("is-idle"));
        assert!(!idle.contains("lift-on-hover"));
    }

    #[test]
    fn deserializes_lowercase_names() {
        let s: TransitionStyle = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(s, TransitionStyle::Classic);
        assert!(serde_json::from_str::<TransitionStyle>("\"Fade\"").is_err());
    }
}
