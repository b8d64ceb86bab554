//! Host widget bindings for the editable label
//!
//! The label talks to its two child widgets and the input-method service
//! through these traits; a host toolkit implements them over its native
//! widgets and is responsible for requesting layout/paint when driven.
//! String-backed headless implementations are provided for hosts and tests
//! that have no native widgets.

/// The static text widget showing the committed value.
pub trait TextDisplay {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Show or hide the widget
    fn set_visible(&mut self, visible: bool);

    /// Apply a font size
    fn set_text_size(&mut self, size: f32);
}

/// The editable text widget holding the draft while editing.
pub trait TextInput {
    /// Replace the field content
    fn set_text(&mut self, text: &str);

    /// Current field content
    fn text(&self) -> String;

    /// Show or hide the widget
    fn set_visible(&mut self, visible: bool);

    /// Give the widget input focus
    fn request_focus(&mut self);

    /// Take input focus away from the widget
    fn clear_focus(&mut self);

    /// Select the whole field content
    fn select_all(&mut self);

    /// Set the placeholder shown while the field is empty
    fn set_hint(&mut self, hint: Option<&str>);

    /// Apply a font size
    fn set_text_size(&mut self, size: f32);
}

/// The host input-method service. Both calls are fire-and-forget.
pub trait SoftKeyboard {
    /// Request the soft keyboard for the edit field
    fn show(&mut self);

    /// Request the soft keyboard to be dismissed
    fn hide(&mut self);
}

// =============================================================================
// HeadlessLabel - display widget without a toolkit behind it
// =============================================================================

/// TextDisplay implementation backed by plain fields.
#[derive(Debug, Clone, Default)]
pub struct HeadlessLabel {
    pub text: String,
    pub visible: bool,
    pub text_size: f32,
}

impl HeadlessLabel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextDisplay for HeadlessLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }
}

// =============================================================================
// HeadlessInput - edit widget without a toolkit behind it
// =============================================================================

/// TextInput implementation backed by plain fields. Tracks visibility,
/// focus and the selected character range.
#[derive(Debug, Clone, Default)]
pub struct HeadlessInput {
    pub text: String,
    pub visible: bool,
    pub focused: bool,
    /// Selected character range, None when collapsed
    pub selection: Option<(usize, usize)>,
    pub hint: Option<String>,
    pub text_size: f32,
}

impl HeadlessInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user replacing the field content
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = None;
    }

    /// The selected portion of the field content (empty when collapsed)
    pub fn selected_text(&self) -> String {
        match self.selection {
            Some((start, end)) => self.text.chars().skip(start).take(end - start).collect(),
            None => String::new(),
        }
    }
}

impl TextInput for HeadlessInput {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = None;
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
        self.selection = Some((0, self.text.chars().count()));
    }

    fn set_hint(&mut self, hint: Option<&str>) {
        self.hint = hint.map(str::to_string);
    }

    fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }
}

// =============================================================================
// NullKeyboard - for hosts without a soft keyboard
// =============================================================================

/// No-op input-method service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKeyboard;

impl SoftKeyboard for NullKeyboard {
    fn show(&mut self) {}

    fn hide(&mut self) {}
}
