//! Editable label widget
//!
//! A static text label that flips to an inline single-line input on tap.
//! Confirming the field commits its content back to the label; cancelling
//! discards the draft. Transitions follow the Elm Architecture pattern:
//! input events run through a pure update function that returns side-effect
//! commands for the owning composite to execute against its host bindings.
//!
//! # Example
//!
//! ```
//! use editable_label::{
//!     EditKey, EditableLabel, HeadlessInput, HeadlessLabel, InputEvent, LabelConfig,
//!     NullKeyboard,
//! };
//!
//! let config = LabelConfig {
//!     text: "Untitled".to_string(),
//!     ..LabelConfig::default()
//! };
//! let mut label = EditableLabel::new(
//!     config,
//!     HeadlessLabel::new(),
//!     HeadlessInput::new(),
//!     NullKeyboard,
//! );
//!
//! label.handle_input(InputEvent::Tap);
//! label.edit_widget_mut().type_text("Chapter one");
//! label.handle_input(InputEvent::Key(EditKey::Confirm));
//!
//! assert_eq!(label.text(), "Chapter one");
//! assert!(!label.is_edit_mode());
//! ```

pub mod commands;
pub mod config;
pub mod input;
pub mod label;
pub mod messages;
pub mod model;
pub mod update;
pub mod widgets;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LabelConfig;
pub use label::{sync_widgets, EditableLabel};
pub use messages::{EditKey, InputEvent};
pub use model::LabelState;
pub use update::update;
pub use widgets::{
    HeadlessInput, HeadlessLabel, NullKeyboard, SoftKeyboard, TextDisplay, TextInput,
};
