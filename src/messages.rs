//! Input event types for the editable label
//!
//! All widget transitions flow through these events.

/// Key classification for events delivered to the edit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Confirm key (Enter / IME done): commit the field content
    Confirm,
    /// Cancel key (Escape / back navigation): leave edit mode without committing
    Cancel,
    /// Any other key: left to the host widget's default handling
    Other,
}

/// An input event delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer press on the display label
    Tap,
    /// Key event on the edit field
    Key(EditKey),
}
