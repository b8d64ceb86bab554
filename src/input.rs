//! winit key mapping for the editable label
//!
//! Translates winit keyboard events into [`EditKey`] values. Tap routing is
//! left to the host, which owns hit-testing for the label's bounds.

use winit::keyboard::{Key, NamedKey};

use crate::label::EditableLabel;
use crate::messages::{EditKey, InputEvent};
use crate::widgets::{SoftKeyboard, TextDisplay, TextInput};

/// Classify a winit key for the edit field.
pub fn map_key(key: &Key) -> EditKey {
    match key {
        Key::Named(NamedKey::Enter) => EditKey::Confirm,
        Key::Named(NamedKey::Escape) | Key::Named(NamedKey::GoBack) => EditKey::Cancel,
        _ => EditKey::Other,
    }
}

/// Feed a winit key press into the label. Returns whether it was consumed;
/// unconsumed keys stay with the host widget's default handling.
pub fn handle_key<L, E, K>(label: &mut EditableLabel<L, E, K>, key: &Key) -> bool
where
    L: TextDisplay,
    E: TextInput,
    K: SoftKeyboard,
{
    label.handle_input(InputEvent::Key(map_key(key)))
}
