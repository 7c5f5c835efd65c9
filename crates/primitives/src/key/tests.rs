use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parses_bare_character() {
	assert_eq!(parse_key("q"), Ok(Key::char('q')));
}

#[test]
fn parses_named_keys_case_insensitively() {
	assert_eq!(parse_key("<tab>"), Ok(Key::new(KeyCode::Tab)));
	assert_eq!(parse_key("<Enter>"), Ok(Key::new(KeyCode::Enter)));
	assert_eq!(parse_key("<pgdown>"), Ok(Key::new(KeyCode::PageDown)));
	assert_eq!(parse_key("<f12>"), Ok(Key::new(KeyCode::F(12))));
}

#[test]
fn parses_modifier_prefixes() {
	assert_eq!(parse_key("<c-j>"), Ok(Key::ctrl('j')));
	assert_eq!(parse_key("<a-enter>"), Ok(Key { code: KeyCode::Enter, modifiers: Modifiers::ALT }));
	assert_eq!(
		parse_key("<c-a-x>"),
		Ok(Key {
			code: KeyCode::Char('x'),
			modifiers: Modifiers { ctrl: true, alt: true, shift: false },
		})
	);
}

#[test]
fn dash_after_modifier_is_a_character() {
	assert_eq!(parse_key("<c-->"), Ok(Key::ctrl('-')));
}

#[test]
fn rejects_malformed_names() {
	assert_eq!(parse_key(""), Err(KeyParseError::Empty));
	assert_eq!(parse_key("<tab"), Err(KeyParseError::Unterminated("<tab".into())));
	assert_eq!(parse_key("<bogus>"), Err(KeyParseError::Unknown("<bogus>".into())));
	assert_eq!(parse_key("<f99>"), Err(KeyParseError::Unknown("<f99>".into())));
	assert_eq!(parse_key("tab"), Err(KeyParseError::Unknown("tab".into())));
}

#[test]
fn display_round_trips_through_parser() {
	for key in [Key::char('x'), Key::ctrl('u'), Key::new(KeyCode::Tab), Key::new(KeyCode::F(3))] {
		assert_eq!(parse_key(&key.to_string()), Ok(key));
	}
}

#[test]
fn ctrl_h_counts_as_backspace() {
	assert!(Key::new(KeyCode::Backspace).is_backspace());
	assert!(Key::ctrl('h').is_backspace());
	assert!(!Key::char('h').is_backspace());
}

#[test]
fn codepoint_ignores_chorded_characters() {
	assert_eq!(Key::char('é').codepoint(), Some('é'));
	assert_eq!(Key::new(KeyCode::Space).codepoint(), Some(' '));
	assert_eq!(Key::ctrl('a').codepoint(), None);
	assert_eq!(Key::new(KeyCode::F(1)).codepoint(), None);
}
