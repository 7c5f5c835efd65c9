//! Commit message panel.

use gitdeck_config::{UserConfig, key_label};
use gitdeck_input::{DEFAULT_NEWLINE_KEY, EditAction, EditableBuffer, TextEditor};
use gitdeck_primitives::{Key, KeyCode};
use tracing::{info, trace};

use super::Session;
use crate::error::{GuiError, Result};
use crate::msg::{MsgSender, UiMsg};
use crate::services::{CommitFlags, ViewKind};
use crate::text::StyledText;

pub const COMMIT_MESSAGE_REQUIRED: &str = "commit message required";

const HINT_TEMPLATE: &str = "Close: {{close}}, Confirm: {{confirm}}, New line: {{new_line}}";

/// Subtitle showing a message length, e.g. `" 12 "`.
pub fn length_label(buffer: &EditableBuffer) -> String {
	format!(" {} ", buffer.len_chars())
}

/// Key hint shown in the options bar while the commit panel has focus.
pub fn commit_hint(config: &UserConfig) -> String {
	let keys = &config.keybinding.universal;
	let values = [
		("close", key_label(&keys.close, Key::new(KeyCode::Esc))),
		("confirm", key_label(&keys.confirm, Key::new(KeyCode::Enter))),
		("new_line", key_label(&keys.append_newline, DEFAULT_NEWLINE_KEY)),
	];
	values
		.iter()
		.fold(HINT_TEMPLATE.to_string(), |hint, (name, value)| hint.replace(&format!("{{{{{name}}}}}"), value))
}

/// The message buffer and the editor bound to it.
#[derive(Debug)]
pub struct CommitPanel {
	buffer: EditableBuffer,
	editor: TextEditor,
}

impl CommitPanel {
	/// Binds the configured newline key and a hook that publishes the length subtitle when enabled.
	pub fn new(config: &UserConfig, tx: MsgSender) -> Self {
		let show_length = config.gui.commit_length.show;
		let newline_key = config.append_newline_key().unwrap_or(DEFAULT_NEWLINE_KEY);
		let editor = TextEditor::new(newline_key).on_edit(move |buffer| {
			if !show_length {
				return;
			}
			let msg = UiMsg::SetSubtitle {
				view: ViewKind::CommitMessage,
				subtitle: length_label(buffer),
			};
			if tx.send(msg).is_err() {
				trace!("ui channel closed, length subtitle dropped");
			}
		});
		Self {
			buffer: EditableBuffer::new(),
			editor,
		}
	}

	pub fn buffer(&self) -> &EditableBuffer {
		&self.buffer
	}

	pub fn handle_key(&mut self, key: Key) -> EditAction {
		self.editor.handle_key(&mut self.buffer, key)
	}

	fn clear(&mut self) {
		self.buffer.clear();
		self.editor.notify(&self.buffer);
	}
}

fn skips_hooks(message: &str, prefix: &str) -> bool {
	!prefix.is_empty() && message.starts_with(prefix)
}

impl Session {
	/// Routes a key typed into the commit panel to its editor.
	pub fn handle_commit_key(&mut self, key: Key) -> EditAction {
		self.commit.handle_key(key)
	}

	/// Commits the panel's message.
	///
	/// On success the panel is cleared, focus returns to the previous
	/// context and side panels refresh in the background. A pending editor
	/// or hook process yields [`GuiError::SubprocessHandoff`].
	pub fn handle_commit_confirm(&mut self) -> Result<()> {
		let message = self.commit.buffer.trimmed();
		if message.is_empty() {
			return Err(GuiError::UserInput(COMMIT_MESSAGE_REQUIRED.to_string()));
		}

		let flags = CommitFlags {
			no_verify: skips_hooks(&message, &self.config.git.skip_hook_prefix),
		};
		info!(no_verify = flags.no_verify, chars = message.chars().count(), "committing");
		let result = self.git.commit(&message, flags);
		if !self.run_sync_or_subprocess(result).into_flow()? {
			return Ok(());
		}

		self.commit.clear();
		self.views.return_from_context()?;
		self.views.refresh_side_panels()
	}

	pub fn handle_commit_close(&mut self) -> Result<()> {
		self.views.return_from_context()
	}

	/// Shows the commit panel's key hints.
	pub fn handle_commit_message_focused(&mut self) -> Result<()> {
		let hint = commit_hint(&self.config);
		self.views.set_view_content(ViewKind::Options, &StyledText::plain(hint));
		Ok(())
	}
}
