//! Construction-time configuration for the editable label
//!
//! Hosts declare the widget's attribute set in YAML; missing or malformed
//! values fall back to the documented defaults.

use serde::{Deserialize, Serialize};

/// Font size used when the host declares none.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

/// The attribute set consumed once when an editable label is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Initial committed text
    #[serde(default)]
    pub text: String,

    /// Start in edit mode instead of label display
    #[serde(default)]
    pub default_edit: bool,

    /// Font size applied to both child widgets
    #[serde(default = "default_text_size")]
    pub text_size: f32,

    /// Placeholder shown by the edit field while it is empty
    #[serde(default)]
    pub hint: Option<String>,
}

fn default_text_size() -> f32 {
    DEFAULT_TEXT_SIZE
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            default_edit: false,
            text_size: DEFAULT_TEXT_SIZE,
            hint: None,
        }
    }
}

impl LabelConfig {
    /// Parse an attribute declaration, falling back to defaults on any error
    pub fn from_yaml(source: &str) -> Self {
        match serde_yaml::from_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse label attributes: {}", e);
                Self::default()
            }
        }
    }

    /// Load an attribute declaration from disk, or return defaults if not found
    pub fn load(path: &std::path::Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Attribute file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!("Failed to read attributes at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
