use gloo::console::warn;
use serde::Deserialize;

use crate::dom::read_embedded_json;
use crate::error::LoadError;

pub const CONTENT_SCRIPT_ID: &str = "verify-content";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    // Parsed for content compatibility; not rendered.
    #[serde(default)]
    #[allow(dead_code)]
    pub is_highlighted: bool,
}

impl Feature {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_highlighted: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.is_highlighted = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub tag: String,
    pub title: String,
    // Parsed for content compatibility; not rendered.
    #[serde(default)]
    #[allow(dead_code)]
    pub subtitle: String,
    pub features: Vec<Feature>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            tag: "Solution".into(),
            title: "Verify - a simple invitation to check before you Trust".into(),
            subtitle: "With Verify, users instantly verify content authenticity before trusting it"
                .into(),
            features: vec![
                Feature::new("Easy to Integrate", "A small code snippet on your site").highlighted(),
                Feature::new("Instant Validation", "Users click a button or scan QR Code"),
                Feature::new("Multilayer Security", "Copy-negating QR to prevent spoofing"),
            ],
        }
    }
}

impl Content {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let content: Content = serde_json::from_str(json).map_err(|source| LoadError::Parse {
            id: CONTENT_SCRIPT_ID,
            source,
        })?;
        if content.features.is_empty() {
            return Err(LoadError::NoFeatures);
        }
        Ok(content)
    }

    /// Embedded override if present and valid, built-in copy otherwise.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONTENT_SCRIPT_ID) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(c) => c,
            Err(e) => {
                warn!(format!("verify: using built-in content ({e})"));
                Self::default()
            }
        }
    }

    /// Description shown for `index`, clamped into range.
    pub fn description_at(&self, index: usize) -> &str {
        let last = self.features.len().saturating_sub(1);
        self.features
            .get(index.min(last))
            .map(|f| f.description.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_three_features() {
        let c = Content::default();
        assert_eq!(c.tag, "Solution");
        assert_eq!(c.features.len(), 3);
        assert_eq!(c.features[1].title, "Instant Validation");
        assert!(c.features[0].is_highlighted);
        assert!(!c.features[2].is_highlighted);
    }

    #[test]
    fn parses_override_with_optional_fields_missing() {
        let json = r#"{
            "tag": "Beta",
            "title": "Check first",
            "features": [
                { "title": "One", "description": "first" },
                { "title": "Two", "description": "second", "is_highlighted": true }
            ]
        }"#;
        let c = Content::from_json(json).unwrap();
        assert_eq!(c.subtitle, "");
        assert_eq!(c.features.len(), 2);
        assert!(c.features[1].is_highlighted);
    }

    #[test]
    fn rejects_empty_feature_list() {
        let json = r#"{ "tag": "x", "title": "y", "features": [] }"#;
        assert!(matches!(Content::from_json(json), Err(LoadError::NoFeatures)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Content::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { id: CONTENT_SCRIPT_ID, .. }));
        assert!(err.to_string().starts_with("invalid JSON in #verify-content"));
    }

    #[test]
    fn description_at_clamps_out_of_range_index() {
        let c = Content::default();
        assert_eq!(c.description_at(0), "A small code snippet on your site");
        assert_eq!(c.description_at(99), "Copy-negating QR to prevent spoofing");
    }
}
