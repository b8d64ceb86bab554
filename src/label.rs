//! The editable label composite
//!
//! Owns the display label, the edit field and the input-method service,
//! and keeps the two child widgets synchronized with the widget state.

use crate::commands::Cmd;
use crate::config::LabelConfig;
use crate::messages::InputEvent;
use crate::model::LabelState;
use crate::update::update;
use crate::widgets::{SoftKeyboard, TextDisplay, TextInput};

/// Write the widget state into both child widgets.
///
/// While `edit_mode` is set the edit field is visible, focused and fully
/// selected; otherwise the label is visible and the field unfocused. Both
/// children carry the committed text after this pass, so a draft left in
/// the field from an earlier edit is overwritten.
pub fn sync_widgets<L, E>(state: &LabelState, label: &mut L, edit: &mut E)
where
    L: TextDisplay,
    E: TextInput,
{
    tracing::debug!(edit_mode = state.edit_mode, "sync widgets");
    label.set_text(&state.text);
    edit.set_text(&state.text);
    if state.edit_mode {
        label.set_visible(false);
        edit.set_visible(true);
        edit.request_focus();
        edit.select_all();
    } else {
        label.set_visible(true);
        edit.set_visible(false);
        edit.clear_focus();
    }
}

/// A label that flips to an inline single-line input on tap.
///
/// Tapping the label enters edit mode and brings up the soft keyboard.
/// Confirming the field commits its content back to the label; cancelling
/// discards the draft. An empty field keeps edit mode active on either key.
pub struct EditableLabel<L, E, K> {
    state: LabelState,
    label: L,
    edit: E,
    keyboard: K,
}

impl<L, E, K> EditableLabel<L, E, K>
where
    L: TextDisplay,
    E: TextInput,
    K: SoftKeyboard,
{
    /// Build the composite from construction-time configuration.
    ///
    /// The font size and the hint are applied to the children here, once;
    /// later render passes never reapply them.
    pub fn new(config: LabelConfig, mut label: L, mut edit: E, keyboard: K) -> Self {
        label.set_text_size(config.text_size);
        edit.set_text_size(config.text_size);
        edit.set_hint(config.hint.as_deref());

        let mut this = Self {
            state: LabelState::new(&config),
            label,
            edit,
            keyboard,
        };
        this.sync();
        this
    }

    /// Handle a host input event. Returns whether the event was consumed;
    /// unconsumed events stay with the host's default handling.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let field_text = self.edit.text();
        match update(&mut self.state, event, &field_text) {
            Some(cmd) => {
                self.run_cmd(cmd);
                true
            }
            None => false,
        }
    }

    /// Execute a command against the owned collaborators
    fn run_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.sync(),
            Cmd::ShowKeyboard => self.keyboard.show(),
            Cmd::HideKeyboard => self.keyboard.hide(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.run_cmd(cmd);
                }
            }
        }
    }

    /// Re-run the render procedure
    fn sync(&mut self) {
        sync_widgets(&self.state, &mut self.label, &mut self.edit);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current committed text
    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Replace the committed text. Takes effect on the next render pass;
    /// does not itself re-render.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
    }

    /// Whether the edit field is currently the visible child
    pub fn is_edit_mode(&self) -> bool {
        self.state.edit_mode
    }

    /// Switch between label and edit field, re-rendering immediately
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.state.edit_mode = edit_mode;
        self.sync();
    }

    /// Font size recorded for the widget
    pub fn text_size(&self) -> f32 {
        self.state.text_size
    }

    /// Record a new font size and re-render. The render pass does not
    /// reapply the size to the children, so the visible size set at
    /// construction stays in effect.
    pub fn set_text_size(&mut self, size: f32) {
        self.state.text_size = size;
        self.sync();
    }

    /// Placeholder recorded for the edit field
    pub fn hint(&self) -> Option<&str> {
        self.state.hint.as_deref()
    }

    /// Record a new placeholder. Not propagated to the edit field; the
    /// hint applied at construction stays in effect.
    pub fn set_hint(&mut self, hint: Option<String>) {
        self.state.hint = hint;
    }

    /// Read-only view of the widget state
    pub fn state(&self) -> &LabelState {
        &self.state
    }

    /// The owned display widget
    pub fn label_widget(&self) -> &L {
        &self.label
    }

    /// The owned edit widget
    pub fn edit_widget(&self) -> &E {
        &self.edit
    }

    /// Mutable access to the edit widget, for hosts forwarding typed text
    /// into the field
    pub fn edit_widget_mut(&mut self) -> &mut E {
        &mut self.edit
    }

    /// The owned input-method service
    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }
}
