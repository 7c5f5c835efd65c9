//! Parser for key names as written in user configuration.
//!
//! ```text
//! key       = char | "<" modifier* name ">"
//! modifier  = ("c" | "a" | "s") "-"
//! name      = named-key | fn-key | char
//! named-key = "tab" | "enter" | "space" | "backspace" | "delete" | ...
//! fn-key    = "f" digit digit?
//! ```

use thiserror::Error;

use super::{Key, KeyCode, Modifiers};

/// Errors produced by [`parse_key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
	#[error("empty key name")]
	Empty,
	#[error("unterminated key name {0:?} (missing '>')")]
	Unterminated(String),
	#[error("unknown key name {0:?}")]
	Unknown(String),
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
	("tab", KeyCode::Tab),
	("backtab", KeyCode::BackTab),
	("enter", KeyCode::Enter),
	("space", KeyCode::Space),
	("backspace", KeyCode::Backspace),
	("delete", KeyCode::Delete),
	("insert", KeyCode::Insert),
	("esc", KeyCode::Esc),
	("home", KeyCode::Home),
	("end", KeyCode::End),
	("pgup", KeyCode::PageUp),
	("pgdown", KeyCode::PageDown),
	("up", KeyCode::Up),
	("down", KeyCode::Down),
	("left", KeyCode::Left),
	("right", KeyCode::Right),
];

/// Parses a configured key name such as `a`, `<tab>` or `<c-j>`.
pub fn parse_key(input: &str) -> Result<Key, KeyParseError> {
	let input = input.trim();
	let mut chars = input.chars();
	match (chars.next(), chars.next()) {
		(None, _) => return Err(KeyParseError::Empty),
		(Some(c), None) => return Ok(Key::char(c)),
		_ => {}
	}

	let Some(body) = input.strip_prefix('<') else {
		return Err(KeyParseError::Unknown(input.to_string()));
	};
	let Some(mut body) = body.strip_suffix('>') else {
		return Err(KeyParseError::Unterminated(input.to_string()));
	};

	let mut modifiers = Modifiers::NONE;
	loop {
		let flag = match body.get(..2) {
			Some("c-") => &mut modifiers.ctrl,
			Some("a-") => &mut modifiers.alt,
			Some("s-") => &mut modifiers.shift,
			_ => break,
		};
		if body.len() == 2 {
			break;
		}
		*flag = true;
		body = &body[2..];
	}

	let code = parse_name(body).ok_or_else(|| KeyParseError::Unknown(input.to_string()))?;
	Ok(Key { code, modifiers })
}

fn parse_name(name: &str) -> Option<KeyCode> {
	let mut chars = name.chars();
	if let (Some(c), None) = (chars.next(), chars.next()) {
		return Some(if c == ' ' { KeyCode::Space } else { KeyCode::Char(c) });
	}

	let lower = name.to_ascii_lowercase();
	if let Some((_, code)) = NAMED_KEYS.iter().find(|(n, _)| *n == lower) {
		return Some(*code);
	}

	lower
		.strip_prefix('f')
		.and_then(|digits| digits.parse::<u8>().ok())
		.filter(|n| (1..=24).contains(n))
		.map(KeyCode::F)
}
