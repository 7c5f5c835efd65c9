//! Classification of command results.
//!
//! Every git action returns a [`CommandResult`]. [`resolve`] turns it into
//! exactly one [`CommandOutcome`], performing the matching side effect:
//! failures reach the user immediately and foreign-process requests are
//! parked in the session's [`SubprocessSlot`].

use tracing::{debug, warn};

use crate::error::{CommandError, GuiError};
use crate::services::PromptService;
use crate::subprocess::SubprocessHandle;

/// What a git action produced: nothing to do, a process to hand the terminal to, or an error.
pub type CommandResult = Result<Option<SubprocessHandle>, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
	/// The command finished synchronously.
	Proceed,
	/// A foreign process was registered and must run before anything else.
	SubprocessPending(SubprocessHandle),
	/// The command failed. The error was already shown.
	Fatal(CommandError),
}

impl CommandOutcome {
	/// Whether the calling handler should continue its own follow-up work.
	pub fn should_continue(&self) -> bool {
		matches!(self, Self::Proceed)
	}

	/// Maps onto a handler's return channel.
	///
	/// Returns `Ok(true)` to continue, `Ok(false)` after a reported failure,
	/// and [`GuiError::SubprocessHandoff`] when the loop must yield.
	pub fn into_flow(self) -> Result<bool, GuiError> {
		match self {
			Self::Proceed => Ok(true),
			Self::SubprocessPending(_) => Err(GuiError::SubprocessHandoff),
			Self::Fatal(_) => Ok(false),
		}
	}
}

/// At most one foreign process waiting for the terminal.
#[derive(Debug, Default)]
pub struct SubprocessSlot(Option<SubprocessHandle>);

impl SubprocessSlot {
	/// Registers `handle`, replacing any earlier one that never ran.
	pub fn install(&mut self, handle: SubprocessHandle) {
		if let Some(stale) = self.0.replace(handle) {
			warn!(command = %stale, "replacing subprocess that never ran");
		}
	}

	pub fn take(&mut self) -> Option<SubprocessHandle> {
		self.0.take()
	}

	pub fn pending(&self) -> Option<&SubprocessHandle> {
		self.0.as_ref()
	}

	pub fn is_pending(&self) -> bool {
		self.0.is_some()
	}
}

/// Classifies `result`, surfacing failures through `prompts` and parking handles in `slot`.
///
/// A bare [`CommandError::SubprocessRequested`] without a handle has nothing
/// to run and proceeds.
pub fn resolve(result: CommandResult, slot: &mut SubprocessSlot, prompts: &mut dyn PromptService) -> CommandOutcome {
	match result {
		Ok(None) | Err(CommandError::SubprocessRequested) => CommandOutcome::Proceed,
		Ok(Some(handle)) => {
			debug!(command = %handle, "subprocess pending");
			slot.install(handle.clone());
			CommandOutcome::SubprocessPending(handle)
		}
		Err(error) => {
			warn!(%error, "command failed");
			prompts.error(&error.to_string());
			CommandOutcome::Fatal(error)
		}
	}
}

#[cfg(test)]
mod tests;
