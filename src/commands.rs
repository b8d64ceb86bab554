//! Command types for the Elm-style widget architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effect requested by a transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-run the render procedure and request a host layout/paint pass
    Redraw,
    /// Ask the input-method service to show the soft keyboard
    ShowKeyboard,
    /// Ask the input-method service to hide the soft keyboard
    HideKeyboard,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Keyboard visibility is fire-and-forget; the service repaints on its own
            Cmd::ShowKeyboard | Cmd::HideKeyboard => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// The soft-keyboard visibility this command requests, if any.
    ///
    /// Walks batches; the last request wins.
    pub fn keyboard_request(&self) -> Option<bool> {
        match self {
            Cmd::ShowKeyboard => Some(true),
            Cmd::HideKeyboard => Some(false),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.keyboard_request()),
            _ => None,
        }
    }
}
