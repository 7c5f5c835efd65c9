//! Hand-rolled line editor backing gitdeck's text input views.
//!
//! * [`EditableBuffer`] - rope text, cursor and overwrite flag
//! * [`TextEditor`] - ordered key → [`EditAction`] table with a post-edit hook

pub mod buffer;
pub mod editor;
pub mod types;

pub use buffer::EditableBuffer;
pub use editor::{DEFAULT_NEWLINE_KEY, EditHook, KeyPattern, KeyRule, TextEditor};
pub use types::EditAction;
