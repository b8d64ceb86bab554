//! Transition handlers for the editable label
//!
//! All state changes triggered by user input flow through [`update`]. The
//! edit field's current content is passed in explicitly: the commit and the
//! empty-field check both read it, and the state itself never owns the
//! draft text.

use crate::commands::Cmd;
use crate::messages::{EditKey, InputEvent};
use crate::model::LabelState;

/// Main transition function.
///
/// Returns `None` when the event is not handled and host default handling
/// should apply.
pub fn update(state: &mut LabelState, event: InputEvent, field_text: &str) -> Option<Cmd> {
    match event {
        InputEvent::Tap => handle_tap(state),
        InputEvent::Key(key) => handle_key(state, key, field_text),
    }
}

/// Tap on the display label: enter edit mode and bring up the keyboard.
///
/// While editing the label is hidden and cannot be the tap target, so the
/// event is not handled then.
fn handle_tap(state: &mut LabelState) -> Option<Cmd> {
    if state.edit_mode {
        return None;
    }
    state.edit_mode = true;
    tracing::trace!("tap: entering edit mode");
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ShowKeyboard]))
}

/// Key event on the edit field.
///
/// Confirm commits the field content and then runs the same exit logic as
/// Cancel; the two keys differ only in the commit.
fn handle_key(state: &mut LabelState, key: EditKey, field_text: &str) -> Option<Cmd> {
    match key {
        EditKey::Confirm => {
            state.text = field_text.to_string();
            exit_edit(state, field_text)
        }
        EditKey::Cancel => exit_edit(state, field_text),
        EditKey::Other => None,
    }
}

/// Leave edit mode and drop the keyboard. An empty field keeps edit mode
/// active instead.
fn exit_edit(state: &mut LabelState, field_text: &str) -> Option<Cmd> {
    state.edit_mode = field_text.is_empty();
    tracing::trace!(edit_mode = state.edit_mode, "exit edit requested");
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::HideKeyboard]))
}
