//! Path filtering mode and the guard that protects it.
//!
//! While the commit history is filtered to one path, commands that
//! rewrite history would act on a partial view. Such commands call
//! [`ModeGuard::validate`] first; when filtering is active the user is
//! asked to leave the mode instead, and confirming clears the filter and
//! requests a view reload.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GuiError;
use crate::services::{AskPrompt, ConfirmAction, PromptService};

pub const MUST_EXIT_TITLE: &str = "Command not available";
pub const MUST_EXIT_PROMPT: &str = "This command is not available in filtering mode. Exit filtering mode?";

/// Result of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
	/// No filter is active; the command may run.
	Proceed,
	/// The user was asked to leave filtering mode; the command must not run.
	AwaitingConfirmation,
}

impl Validation {
	pub fn can_proceed(self) -> bool {
		matches!(self, Self::Proceed)
	}
}

/// Current path filter. Empty means filtering is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeGuard {
	path: Option<PathBuf>,
}

impl ModeGuard {
	pub fn is_active(&self) -> bool {
		self.path.is_some()
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Starts filtering to `path`. An empty path leaves filtering off.
	pub fn enter(&mut self, path: impl Into<PathBuf>) {
		let path = path.into();
		if path.as_os_str().is_empty() {
			return;
		}
		info!(path = %path.display(), "entering filtering mode");
		self.path = Some(path);
	}

	/// Clears the filter and signals that views must be rebuilt.
	pub fn exit(&mut self) -> Result<(), GuiError> {
		match self.path.take() {
			Some(path) => info!(path = %path.display(), "leaving filtering mode"),
			None => debug!("leaving filtering mode while inactive"),
		}
		Err(GuiError::ModeReloadRequired)
	}

	/// Checks that no filter is active, prompting to exit when one is.
	///
	/// Never changes the filter itself.
	pub fn validate(&self, prompts: &mut dyn PromptService) -> Validation {
		if !self.is_active() {
			return Validation::Proceed;
		}
		debug!("command blocked by filtering mode");
		prompts.ask(AskPrompt {
			title: MUST_EXIT_TITLE.to_string(),
			prompt: MUST_EXIT_PROMPT.to_string(),
			on_confirm: ConfirmAction::ExitFilterMode,
		});
		Validation::AwaitingConfirmation
	}
}
