//! Error types for command dispatch.

use gitdeck_config::ConfigError;
use thiserror::Error;

/// Failure reported by a git operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	/// Sentinel raised by a command that wants a foreign process to take over the terminal.
	#[error("command requested a subprocess")]
	SubprocessRequested,
	/// Git failed; the message is shown to the user as-is.
	#[error("{0}")]
	Failed(String),
}

impl CommandError {
	pub fn failed(message: impl Into<String>) -> Self {
		Self::Failed(message.into())
	}
}

/// Errors returned by [`crate::Session`] handlers.
///
/// [`GuiError::SubprocessHandoff`] and [`GuiError::ModeReloadRequired`] are
/// control signals for the outer loop rather than failures.
#[derive(Debug, Error)]
pub enum GuiError {
	/// Invalid user input, shown in an error prompt.
	#[error("{0}")]
	UserInput(String),
	#[error(transparent)]
	Command(#[from] CommandError),
	/// A foreign process is pending and the loop must yield the terminal to it.
	#[error("terminal handed to a subprocess")]
	SubprocessHandoff,
	/// View state changed shape and the loop must be rebuilt.
	#[error("view state reload required")]
	ModeReloadRequired,
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error("failed to run {program}: {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},
	/// Terminal I/O failed in a view collaborator.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl GuiError {
	/// Whether this value steers the event loop instead of reporting a failure.
	pub fn is_control_signal(&self) -> bool {
		matches!(self, Self::SubprocessHandoff | Self::ModeReloadRequired)
	}
}

pub type Result<T> = std::result::Result<T, GuiError>;
