//! Core value types shared across gitdeck: keys, mouse events, color intents and
//! the working tree state of a repository.

/// Color intents for styled text.
pub mod color;
/// Key event types and the key-name parser.
pub mod key;
/// Mouse event types.
pub mod mouse;
/// Mid-operation state of a git work tree.
pub mod tree_state;

pub use color::Color;
pub use key::{Key, KeyCode, KeyParseError, Modifiers, parse_key};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind, ScrollDirection};
pub use tree_state::WorkingTreeState;
