//! Widget state for the editable label

use crate::config::LabelConfig;

/// The whole state of an editable label, held for the widget's lifetime.
///
/// Exactly one of the two child widgets is visible at a time, selected by
/// `edit_mode`: the edit field while true, the display label while false.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    /// Current committed value, shown by both child widgets
    pub text: String,
    /// Whether the edit field (true) or the display label (false) is visible
    pub edit_mode: bool,
    /// Font size applied to both child widgets at construction time
    pub text_size: f32,
    /// Placeholder shown by the edit field while it is empty
    pub hint: Option<String>,
}

impl LabelState {
    /// Build the initial state from construction-time configuration
    pub fn new(config: &LabelConfig) -> Self {
        Self {
            text: config.text.clone(),
            edit_mode: config.default_edit,
            text_size: config.text_size,
            hint: config.hint.clone(),
        }
    }
}

impl Default for LabelState {
    fn default() -> Self {
        Self::new(&LabelConfig::default())
    }
}
