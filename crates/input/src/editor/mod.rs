//! Key dispatch for text input views.
//!
//! [`TextEditor`] resolves each key against an ordered rule table; the first
//! matching [`KeyRule`] decides the [`EditAction`], and keys no rule claims
//! write their literal character. After every key the post-edit hook runs, so
//! views can refresh derived state such as a length indicator.

use std::fmt;

use gitdeck_primitives::{Key, KeyCode};
use tracing::trace;

use crate::buffer::EditableBuffer;
use crate::types::EditAction;

mod rules;

pub use rules::{KeyPattern, KeyRule, default_rules};

/// Newline key used when the configured one is unset or invalid.
pub const DEFAULT_NEWLINE_KEY: Key = Key::new(KeyCode::Tab);

/// Callback run after every handled key.
pub type EditHook = Box<dyn FnMut(&EditableBuffer) + Send>;

/// Priority-ordered key → edit state machine.
pub struct TextEditor {
	rules: Vec<KeyRule>,
	on_edit: Option<EditHook>,
}

impl TextEditor {
	/// Creates an editor with the built-in rule table and `newline_key` bound to [`EditAction::NewLine`].
	pub fn new(newline_key: Key) -> Self {
		Self {
			rules: default_rules(newline_key),
			on_edit: None,
		}
	}

	/// Appends a rule. It loses to every existing rule but beats the literal write fallback.
	pub fn with_rule(mut self, rule: KeyRule) -> Self {
		self.rules.push(rule);
		self
	}

	/// Binds the post-edit hook, replacing any previous one.
	pub fn on_edit(mut self, hook: impl FnMut(&EditableBuffer) + Send + 'static) -> Self {
		self.on_edit = Some(Box::new(hook));
		self
	}

	pub fn rules(&self) -> &[KeyRule] {
		&self.rules
	}

	/// Picks the action for `key` without touching any buffer.
	pub fn resolve(&self, key: &Key) -> EditAction {
		self.rules
			.iter()
			.find(|rule| rule.matches(key))
			.map(|rule| rule.action)
			.unwrap_or_else(|| EditAction::Write(key.codepoint().unwrap_or('\0')))
	}

	/// Applies exactly one edit for `key`, then runs the post-edit hook.
	pub fn handle_key(&mut self, buffer: &mut EditableBuffer, key: Key) -> EditAction {
		let action = self.resolve(&key);
		trace!(%key, ?action, cursor = buffer.cursor(), "text editor key");
		action.apply(buffer);
		self.notify(buffer);
		action
	}

	/// Runs the post-edit hook for a buffer changed outside of [`Self::handle_key`].
	pub fn notify(&mut self, buffer: &EditableBuffer) {
		if let Some(hook) = self.on_edit.as_mut() {
			hook(buffer);
		}
	}
}

impl Default for TextEditor {
	fn default() -> Self {
		Self::new(DEFAULT_NEWLINE_KEY)
	}
}

impl fmt::Debug for TextEditor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TextEditor")
			.field("rules", &self.rules)
			.field("on_edit", &self.on_edit.is_some())
			.finish()
	}
}
