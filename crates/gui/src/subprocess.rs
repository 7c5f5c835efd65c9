//! Foreign processes that take over the terminal.

use std::fmt;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::error::{GuiError, Result};

/// A prepared command that runs with the terminal's stdio while the UI is suspended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprocessHandle {
	program: String,
	args: Vec<String>,
}

impl SubprocessHandle {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
		}
	}

	/// Builds a handle from a shell-style command line such as `"nvim -f"`, appending `extra` arguments.
	pub fn from_command_line<I, S>(line: &str, extra: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let words = shell_words::split(line).map_err(|err| GuiError::UserInput(format!("invalid command line {line:?}: {err}")))?;
		let mut words = words.into_iter();
		let Some(program) = words.next() else {
			return Err(GuiError::UserInput("empty command line".to_string()));
		};
		Ok(Self::new(program).args(words).args(extra))
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn arguments(&self) -> &[String] {
		&self.args
	}

	/// The equivalent [`Command`], with stdio left inherited.
	pub fn command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(&self.args);
		command
	}

	/// Runs to completion. The caller must have released the terminal first.
	pub fn run(&self) -> Result<ExitStatus> {
		debug!(command = %self, "running subprocess");
		let status = self.command().status().map_err(|source| GuiError::Spawn {
			program: self.program.clone(),
			source,
		})?;
		info!(command = %self, %status, "subprocess exited");
		Ok(status)
	}
}

impl fmt::Display for SubprocessHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.program)?;
		for arg in &self.args {
			write!(f, " {arg}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_line_splits_like_a_shell() {
		let handle = SubprocessHandle::from_command_line("code --wait 'my dir'", ["config.toml"]).unwrap();
		assert_eq!(handle.program(), "code");
		assert_eq!(handle.arguments(), ["--wait", "my dir", "config.toml"]);
	}

	#[test]
	fn blank_command_line_is_rejected() {
		assert!(matches!(SubprocessHandle::from_command_line("   ", ["x"]), Err(GuiError::UserInput(_))));
		assert!(matches!(SubprocessHandle::from_command_line("vim 'oops", ["x"]), Err(GuiError::UserInput(_))));
	}

	#[test]
	fn display_joins_program_and_args() {
		let handle = SubprocessHandle::new("git").args(["rebase", "--continue"]);
		assert_eq!(handle.to_string(), "git rebase --continue");
	}

	#[cfg(unix)]
	#[test]
	fn run_reports_exit_status() {
		assert!(SubprocessHandle::new("true").run().unwrap().success());
		assert!(!SubprocessHandle::new("false").run().unwrap().success());
	}

	#[test]
	fn missing_program_is_a_spawn_error() {
		let err = SubprocessHandle::new("gitdeck-definitely-not-installed").run().unwrap_err();
		assert!(matches!(err, GuiError::Spawn { .. }), "got {err:?}");
	}
}
