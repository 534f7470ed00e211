//! Animation settings
//!
//! Everything except the source text can be overridden, either from a JS
//! options object or from JSON. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypewriterError};

/// Id of the element the default page types into
pub const DEFAULT_ELEMENT_ID: &str = "tagline";

/// Milliseconds between two steps
pub const DEFAULT_DELAY_MS: u32 = 50;

/// Right border applied once the text is fully revealed
pub const DEFAULT_CURSOR_BORDER: &str = "2px solid transparent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterConfig {
    pub element_id: String,
    pub delay_ms: u32,
    pub cursor_border: String,
}

impl TypewriterConfig {
    pub fn new() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
            cursor_border: DEFAULT_CURSOR_BORDER.to_string(),
        }
    }

    /// Parse settings from a JSON object, defaulting absent fields
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TypewriterError::InvalidOptions(e.to_string()))
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypewriterConfig::default();
        assert_eq!(config.element_id, "tagline");
        assert_eq!(config.delay_ms, 50);
        assert_eq!(config.cursor_border, "2px solid transparent");
    }

    #[test]
    fn test_from_json_partial() {
        let config = TypewriterConfig::from_json(r#"{"elementId": "headline"}"#).unwrap();
        assert_eq!(config.element_id, "headline");
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_from_json_full() {
        let config = TypewriterConfig::from_json(
            r#"{"elementId": "x", "delayMs": 120, "cursorBorder": "1px solid red"}"#,
        )
        .unwrap();
        assert_eq!(config.delay_ms, 120);
        assert_eq!(config.cursor_border, "1px solid red");
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let err = TypewriterConfig::from_json(r#"{"delayMs": "fast"}"#).unwrap_err();
        assert!(matches!(err, TypewriterError::InvalidOptions(_)));
    }
}
