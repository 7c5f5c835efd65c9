use gitdeck_primitives::{Key, KeyCode};

use crate::types::EditAction;

/// Matches a key by code alone or by code plus exact modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
	/// Any key with this code, whatever the modifiers.
	Code(KeyCode),
	/// This exact key.
	Exact(Key),
	/// Either backspace encoding, see [`Key::is_backspace`].
	Backspace,
}

impl KeyPattern {
	pub fn matches(&self, key: &Key) -> bool {
		match self {
			Self::Code(code) => key.code == *code,
			Self::Exact(exact) => key == exact,
			Self::Backspace => key.is_backspace(),
		}
	}
}

/// One row of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRule {
	pub patterns: Vec<KeyPattern>,
	pub action: EditAction,
}

impl KeyRule {
	pub fn new(patterns: impl Into<Vec<KeyPattern>>, action: EditAction) -> Self {
		Self {
			patterns: patterns.into(),
			action,
		}
	}

	pub fn matches(&self, key: &Key) -> bool {
		self.patterns.iter().any(|p| p.matches(key))
	}
}

/// The built-in table, highest priority first.
pub fn default_rules(newline_key: Key) -> Vec<KeyRule> {
	use EditAction::*;
	use KeyPattern::{Backspace, Code, Exact};

	vec![
		KeyRule::new([Backspace], DeleteBack),
		KeyRule::new([Code(KeyCode::Delete)], DeleteForward),
		KeyRule::new([Code(KeyCode::Down)], MoveCursor { dx: 0, dy: 1 }),
		KeyRule::new([Code(KeyCode::Up)], MoveCursor { dx: 0, dy: -1 }),
		KeyRule::new([Code(KeyCode::Left)], MoveCursor { dx: -1, dy: 0 }),
		KeyRule::new([Code(KeyCode::Right)], MoveCursor { dx: 1, dy: 0 }),
		KeyRule::new([Exact(newline_key)], NewLine),
		KeyRule::new([Code(KeyCode::Space)], WriteSpace),
		KeyRule::new([Code(KeyCode::Insert)], ToggleOverwrite),
		KeyRule::new([Exact(Key::ctrl('u'))], DeleteToLineStart),
		KeyRule::new([Exact(Key::ctrl('a')), Code(KeyCode::Home)], LineStart),
		KeyRule::new([Exact(Key::ctrl('e')), Code(KeyCode::End)], LineEnd),
	]
}
