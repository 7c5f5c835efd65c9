//! Key representation used by every input surface.
//!
//! A [`Key`] is a [`KeyCode`] plus [`Modifiers`]. Terminal events are converted
//! at the frontend boundary (see the `terminal-input` feature) so the rest of
//! the workspace never sees backend types.

use std::fmt;

mod modifiers;
mod parse;

pub use modifiers::Modifiers;
pub use parse::{KeyParseError, parse_key};

/// Physical key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Space,
	Enter,
	Tab,
	BackTab,
	Backspace,
	Delete,
	Insert,
	Esc,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
	F(u8),
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(c) => write!(f, "{c}"),
			Self::Space => f.write_str("space"),
			Self::Enter => f.write_str("enter"),
			Self::Tab => f.write_str("tab"),
			Self::BackTab => f.write_str("backtab"),
			Self::Backspace => f.write_str("backspace"),
			Self::Delete => f.write_str("delete"),
			Self::Insert => f.write_str("insert"),
			Self::Esc => f.write_str("esc"),
			Self::Home => f.write_str("home"),
			Self::End => f.write_str("end"),
			Self::PageUp => f.write_str("pgup"),
			Self::PageDown => f.write_str("pgdown"),
			Self::Up => f.write_str("up"),
			Self::Down => f.write_str("down"),
			Self::Left => f.write_str("left"),
			Self::Right => f.write_str("right"),
			Self::F(n) => write!(f, "f{n}"),
		}
	}
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key from a key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key with Ctrl modifier.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Literal character this key writes into a text buffer, if any.
	pub fn codepoint(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
			KeyCode::Space => Some(' '),
			_ => None,
		}
	}

	/// Both backspace encodings: the dedicated key and `Ctrl-h` (ASCII BS).
	pub fn is_backspace(&self) -> bool {
		matches!(self.code, KeyCode::Backspace) || *self == Self::ctrl('h')
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.is_empty()
			&& let KeyCode::Char(c) = self.code
		{
			return write!(f, "{c}");
		}
		f.write_str("<")?;
		if self.modifiers.ctrl {
			f.write_str("c-")?;
		}
		if self.modifiers.alt {
			f.write_str("a-")?;
		}
		if self.modifiers.shift {
			f.write_str("s-")?;
		}
		write!(f, "{}>", self.code)
	}
}

#[cfg(feature = "terminal-input")]
impl From<termina::event::KeyEvent> for Key {
	fn from(event: termina::event::KeyEvent) -> Self {
		use termina::event::KeyCode as TmKeyCode;

		let modifiers = Modifiers::from(event.modifiers);
		let code = match event.code {
			TmKeyCode::Char(' ') => KeyCode::Space,
			TmKeyCode::Char(c) => KeyCode::Char(c),
			TmKeyCode::Escape => KeyCode::Esc,
			TmKeyCode::Enter => KeyCode::Enter,
			TmKeyCode::Tab => KeyCode::Tab,
			TmKeyCode::BackTab => KeyCode::BackTab,
			TmKeyCode::Backspace => KeyCode::Backspace,
			TmKeyCode::Delete => KeyCode::Delete,
			TmKeyCode::Insert => KeyCode::Insert,
			TmKeyCode::Home => KeyCode::Home,
			TmKeyCode::End => KeyCode::End,
			TmKeyCode::PageUp => KeyCode::PageUp,
			TmKeyCode::PageDown => KeyCode::PageDown,
			TmKeyCode::Up => KeyCode::Up,
			TmKeyCode::Down => KeyCode::Down,
			TmKeyCode::Left => KeyCode::Left,
			TmKeyCode::Right => KeyCode::Right,
			TmKeyCode::Function(n) => KeyCode::F(n),
			_ => KeyCode::Char('\0'),
		};

		Self { code, modifiers }
	}
}

#[cfg(test)]
mod tests;
