use std::path::PathBuf;

use tracing::debug;

use super::Session;
use crate::error::Result;
use crate::modes::Validation;
use crate::services::ConfirmAction;

impl Session {
	/// Gate for commands that are unsafe while filtering. Prompts to exit when a filter is active.
	pub fn validate_not_in_filter_mode(&mut self) -> Validation {
		self.filter.validate(self.prompts.as_mut())
	}

	/// Filters history to `path`. Refused, with the exit prompt, while another filter is active.
	pub fn handle_enter_filter_mode(&mut self, path: impl Into<PathBuf>) -> Result<()> {
		if !self.validate_not_in_filter_mode().can_proceed() {
			return Ok(());
		}
		self.filter.enter(path);
		self.views.refresh_side_panels()
	}

	/// Stops filtering. Always ends in [`crate::GuiError::ModeReloadRequired`].
	pub fn handle_exit_filter_mode(&mut self) -> Result<()> {
		self.filter.exit()
	}

	/// Runs the action attached to a confirmed prompt.
	pub fn handle_confirm(&mut self, action: ConfirmAction) -> Result<()> {
		match action {
			ConfirmAction::ExitFilterMode => self.handle_exit_filter_mode(),
		}
	}

	/// A dismissed prompt changes nothing.
	pub fn handle_cancel(&mut self, action: ConfirmAction) {
		debug!(?action, "prompt cancelled");
	}
}
