use gloo::console::warn;
use serde::Deserialize;

use crate::dom::read_embedded_json;
use crate::error::LoadError;
use crate::transition::TransitionStyle;

pub const CONFIG_SCRIPT_ID: &str = "verify-config";

pub const DEFAULT_SCROLL_DEBOUNCE_MS: u32 = 500;
pub const MIN_GUARD_MS: u32 = 50;
pub const MAX_GUARD_MS: u32 = 5_000;
pub const DEFAULT_BACKGROUND_URL: &str = "assets/bg.svg";

/// Page-level settings, read once at mount from `#verify-config` in
/// index.html. Every field is optional in the JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub transition: TransitionStyle,
    pub scroll_debounce_ms: u32,
    /// Falls back to the style's own animation length.
    pub transition_lock_ms: Option<u32>,
    pub background_url: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            transition: TransitionStyle::default(),
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            transition_lock_ms: None,
            background_url: DEFAULT_BACKGROUND_URL.into(),
        }
    }
}

fn clamp_guard_ms(ms: u32) -> u32 {
    ms.clamp(MIN_GUARD_MS, MAX_GUARD_MS)
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let cfg: LandingConfig = serde_json::from_str(json).map_err(|source| LoadError::Parse {
            id: CONFIG_SCRIPT_ID,
            source,
        })?;
        Ok(cfg.sanitized())
    }

    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(c) => c,
            Err(e) => {
                warn!(format!("verify: using default config ({e})"));
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.scroll_debounce_ms = clamp_guard_ms(self.scroll_debounce_ms);
        self.transition_lock_ms = self.transition_lock_ms.map(clamp_guard_ms);
        if self.background_url.trim().is_empty() {
            self.background_url = DEFAULT_BACKGROUND_URL.into();
        }
        self
    }

    /// Length of the transition lock, which is also the description
    /// animation length.
    pub fn transition_ms(&self) -> u32 {
        self.transition_lock_ms
            .unwrap_or_else(|| self.transition.duration_ms())
    }
}
