//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use editable_label::{EditableLabel, LabelConfig, SoftKeyboard, TextDisplay, TextInput};

/// Display widget double recording every call
#[derive(Debug, Clone, Default)]
pub struct RecordingLabel {
    pub text: String,
    pub visible: bool,
    pub set_text_calls: usize,
    /// Every size ever applied, in order
    pub size_calls: Vec<f32>,
}

impl TextDisplay for RecordingLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.set_text_calls += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_text_size(&mut self, size: f32) {
        self.size_calls.push(size);
    }
}

impl RecordingLabel {
    /// The size currently applied to the widget, if any
    pub fn applied_size(&self) -> Option<f32> {
        self.size_calls.last().copied()
    }
}

/// Edit widget double recording every call
#[derive(Debug, Clone, Default)]
pub struct RecordingInput {
    pub text: String,
    pub visible: bool,
    pub focused: bool,
    pub all_selected: bool,
    pub hint: Option<String>,
    pub hint_calls: usize,
    pub size_calls: Vec<f32>,
}

impl RecordingInput {
    /// Simulate the user replacing the field content
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.all_selected = false;
    }

    pub fn applied_size(&self) -> Option<f32> {
        self.size_calls.last().copied()
    }
}

impl TextInput for RecordingInput {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.all_selected = false;
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn clear_focus(&mut self) {
        self.focused = false;
    }

    fn select_all(&mut self) {
        self.all_selected = true;
    }

    fn set_hint(&mut self, hint: Option<&str>) {
        self.hint = hint.map(str::to_string);
        self.hint_calls += 1;
    }

    fn set_text_size(&mut self, size: f32) {
        self.size_calls.push(size);
    }
}

/// Keyboard service double recording every visibility request in order
/// (true = show, false = hide)
#[derive(Debug, Clone, Default)]
pub struct RecordingKeyboard {
    pub requests: Vec<bool>,
}

impl SoftKeyboard for RecordingKeyboard {
    fn show(&mut self) {
        self.requests.push(true);
    }

    fn hide(&mut self) {
        self.requests.push(false);
    }
}

pub type TestLabel = EditableLabel<RecordingLabel, RecordingInput, RecordingKeyboard>;

/// Build a label with the given committed text and default configuration
pub fn test_label(text: &str) -> TestLabel {
    test_label_with_config(LabelConfig {
        text: text.to_string(),
        ..LabelConfig::default()
    })
}

/// Build a label from a full configuration
pub fn test_label_with_config(config: LabelConfig) -> TestLabel {
    EditableLabel::new(
        config,
        RecordingLabel::default(),
        RecordingInput::default(),
        RecordingKeyboard::default(),
    )
}

/// Assert that exactly one child widget is visible, and that it is the
/// label iff the widget is not in edit mode
pub fn assert_visibility_invariant(label: &TestLabel) {
    let label_visible = label.label_widget().visible;
    let edit_visible = label.edit_widget().visible;
    assert_ne!(
        label_visible, edit_visible,
        "exactly one child widget must be visible"
    );
    assert_eq!(label_visible, !label.is_edit_mode());
}
