//! Interactive state for one repository and the handlers that act on it.
//!
//! A [`Session`] replaces process-wide globals: it owns the commit message
//! panel, the filter mode guard, the pending subprocess slot and the
//! status composer, and reaches git and the terminal only through
//! [`crate::services`]. Handlers run on the UI thread and return
//! [`crate::Result`]; the outer loop feeds any error to
//! [`Session::handle_error`] to decide how to continue.

mod commit;
mod config;
mod filtering;
mod status;

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;

use gitdeck_config::UserConfig;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub use commit::{COMMIT_MESSAGE_REQUIRED, CommitPanel, commit_hint, length_label};
pub use config::editor_command;
pub use status::{DASHBOARD_TITLE, rebase_options};

use crate::error::{GuiError, Result};
use crate::modes::ModeGuard;
use crate::msg::{self, MsgReceiver, MsgSender};
use crate::outcome::{self, CommandOutcome, CommandResult, SubprocessSlot};
use crate::services::{GitService, PromptService, ViewService};
use crate::status::{RefreshOutcome, StatusComposer, StatusSnapshot, spawn_periodic_refresh};
use crate::subprocess::SubprocessHandle;

/// How the event loop continues after a handler error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
	/// The error was shown; keep dispatching events.
	Continue,
	/// Yield the terminal to [`Session::run_pending_subprocess`], then continue.
	RunSubprocess,
	/// Tear down and rebuild the views.
	Restart,
}

pub struct Session {
	config: Arc<UserConfig>,
	config_path: Option<PathBuf>,
	git: Arc<dyn GitService>,
	views: Box<dyn ViewService>,
	prompts: Box<dyn PromptService>,
	filter: ModeGuard,
	subprocess: SubprocessSlot,
	status: Arc<StatusComposer>,
	commit: CommitPanel,
	displayed_status: Option<StatusSnapshot>,
	requested_repo: Option<PathBuf>,
	tx: MsgSender,
	rx: MsgReceiver,
}

impl Session {
	pub fn new(config: Arc<UserConfig>, git: Arc<dyn GitService>, views: Box<dyn ViewService>, prompts: Box<dyn PromptService>) -> Self {
		let (tx, rx) = msg::channel();
		let status = Arc::new(StatusComposer::new(Arc::clone(&config), tx.clone()));
		let commit = CommitPanel::new(&config, tx.clone());
		Self {
			config,
			config_path: None,
			git,
			views,
			prompts,
			filter: ModeGuard::default(),
			subprocess: SubprocessSlot::default(),
			status,
			commit,
			displayed_status: None,
			requested_repo: None,
			tx,
			rx,
		}
	}

	/// Records where the configuration was loaded from, for the dashboard and config editing.
	pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.config_path = Some(path.into());
		self
	}

	pub fn config(&self) -> &UserConfig {
		&self.config
	}

	pub fn config_path(&self) -> Option<&Path> {
		self.config_path.as_deref()
	}

	pub fn filter(&self) -> &ModeGuard {
		&self.filter
	}

	pub fn commit_panel(&self) -> &CommitPanel {
		&self.commit
	}

	pub fn pending_subprocess(&self) -> Option<&SubprocessHandle> {
		self.subprocess.pending()
	}

	/// The status line currently on screen, which clicks are tested against.
	pub fn displayed_status(&self) -> Option<&StatusSnapshot> {
		self.displayed_status.as_ref()
	}

	pub fn status_composer(&self) -> Arc<StatusComposer> {
		Arc::clone(&self.status)
	}

	/// Repository picked from the recent repositories menu, consumed by the restart it triggered.
	pub fn take_requested_repo(&mut self) -> Option<PathBuf> {
		self.requested_repo.take()
	}

	/// Sender for background work that wants to update views.
	pub fn msg_sender(&self) -> MsgSender {
		self.tx.clone()
	}

	/// Rebuilds the status line on the calling thread.
	pub fn refresh_status(&self) -> RefreshOutcome {
		self.status.refresh(self.git.as_ref())
	}

	/// Starts the periodic status refresh. Must be called inside a tokio runtime.
	pub fn spawn_refresher(&self) -> JoinHandle<()> {
		spawn_periodic_refresh(Arc::clone(&self.status), Arc::clone(&self.git), self.config.refresh_interval())
	}

	/// Applies queued view updates in arrival order. Returns how many were applied.
	pub fn drain_messages(&mut self) -> usize {
		let mut applied = 0;
		while let Ok(msg) = self.rx.try_recv() {
			if let Some(snapshot) = msg.apply(self.views.as_mut()) {
				self.displayed_status = Some(snapshot);
			}
			applied += 1;
		}
		applied
	}

	/// Classifies a command result, surfacing failures and parking subprocess handles.
	pub fn run_sync_or_subprocess(&mut self, result: CommandResult) -> CommandOutcome {
		outcome::resolve(result, &mut self.subprocess, self.prompts.as_mut())
	}

	/// Decides how the loop continues after `error`, showing non-control errors to the user.
	pub fn handle_error(&mut self, error: GuiError) -> LoopSignal {
		match error {
			GuiError::SubprocessHandoff => LoopSignal::RunSubprocess,
			GuiError::ModeReloadRequired => LoopSignal::Restart,
			error => {
				warn!(%error, "handler failed");
				self.prompts.error(&error.to_string());
				LoopSignal::Continue
			}
		}
	}

	/// Runs the pending subprocess with the terminal released.
	///
	/// Input is resumed even when the process fails to start. The handle
	/// stays pending if the terminal cannot be released. Returns `None` when
	/// nothing was pending.
	pub fn run_pending_subprocess(&mut self) -> Result<Option<ExitStatus>> {
		if !self.subprocess.is_pending() {
			debug!("no pending subprocess");
			return Ok(None);
		}
		self.views.suspend()?;
		let Some(handle) = self.subprocess.take() else {
			self.views.resume()?;
			return Ok(None);
		};
		let status = handle.run();
		self.views.resume()?;
		let status = status?;
		if !status.success() {
			warn!(command = %handle, %status, "subprocess failed");
		}
		Ok(Some(status))
	}
}
