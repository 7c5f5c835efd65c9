use std::path::PathBuf;

use gitdeck_primitives::{MouseEvent, WorkingTreeState};
use tracing::{debug, trace};

use super::Session;
use crate::error::{GuiError, Result};
use crate::services::{ContextKey, Menu, MenuAction, MenuItem, RebaseOption, RenderTask};
use crate::status::StatusRegion;

pub const DASHBOARD_TITLE: &str = "Status";

/// Continuation choices offered for `state`. Empty when nothing is in progress.
pub fn rebase_options(state: WorkingTreeState) -> Vec<RebaseOption> {
	match state {
		WorkingTreeState::Normal => Vec::new(),
		WorkingTreeState::Rebasing => vec![RebaseOption::Continue, RebaseOption::Abort, RebaseOption::Skip],
		WorkingTreeState::Merging => vec![RebaseOption::Continue, RebaseOption::Abort],
	}
}

impl Session {
	/// Routes a click at `column` of the status view.
	///
	/// Ignored while a popup has focus or before any status line is on
	/// screen. Otherwise focuses the status view, then opens the menu for
	/// the clicked region. Clicks on the upstream counts or outside every
	/// region open the dashboard unless the view was already focused.
	pub fn handle_status_click(&mut self, column: usize) -> Result<()> {
		if self.views.popup_focused() {
			trace!(column, "status click ignored under popup");
			return Ok(());
		}
		let Some(snapshot) = self.displayed_status.clone() else {
			debug!(column, "status click before first status line");
			return Ok(());
		};

		let was_focused = self.views.current_context() == ContextKey::Status;
		self.views.switch_context(ContextKey::Status)?;

		let region = snapshot.line.hit_test(column);
		debug!(column, ?region, "status click");
		match region {
			Some(StatusRegion::WorkingTreeState) => self.handle_create_rebase_options_menu(snapshot.summary.state),
			Some(StatusRegion::RepoName) => self.handle_create_recent_repos_menu(),
			Some(StatusRegion::Upstream) | None if was_focused => Ok(()),
			Some(StatusRegion::Upstream) | None => self.handle_status_select(),
		}
	}

	/// Routes a mouse event on the status view whose left edge is at screen column `view_left`.
	pub fn handle_status_mouse(&mut self, event: MouseEvent, view_left: u16) -> Result<()> {
		if !event.is_left_press() {
			return Ok(());
		}
		self.handle_status_click(usize::from(event.col.saturating_sub(view_left)))
	}

	/// Renders the dashboard into the main panel.
	pub fn handle_status_select(&mut self) -> Result<()> {
		if self.views.popup_focused() {
			return Ok(());
		}
		let dashboard = self.dashboard();
		self.views.render_main(DASHBOARD_TITLE, RenderTask::Text(dashboard))
	}

	fn dashboard(&self) -> String {
		let config_path = self
			.config_path
			.as_deref()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "(defaults, no config file)".to_string());
		[
			format!("gitdeck {}", env!("CARGO_PKG_VERSION")),
			String::new(),
			format!("Config file: {config_path}"),
			String::new(),
			"Click the repository name to switch repositories.".to_string(),
			"Click (rebasing) or (merging) to continue, abort or skip.".to_string(),
		]
		.join("\n")
	}

	/// Offers continue/abort (and skip while rebasing) for the in-progress operation.
	pub fn handle_create_rebase_options_menu(&mut self, state: WorkingTreeState) -> Result<()> {
		let options = rebase_options(state);
		if options.is_empty() {
			debug!("no rebase or merge in progress");
			return Ok(());
		}
		let noun = if state == WorkingTreeState::Merging { "merge" } else { "rebase" };
		let items = options
			.into_iter()
			.map(|option| MenuItem {
				label: format!("{option} {noun}"),
				action: MenuAction::RebaseOption(option),
			})
			.collect();
		self.views.create_menu(Menu {
			title: format!("{noun} options"),
			items,
		})
	}

	pub fn handle_create_recent_repos_menu(&mut self) -> Result<()> {
		let items = self
			.git
			.recent_repos()
			.into_iter()
			.map(|repo| MenuItem {
				label: repo.clone(),
				action: MenuAction::OpenRepo(repo),
			})
			.collect();
		self.views.create_menu(Menu {
			title: "recent repositories".to_string(),
			items,
		})
	}

	/// Runs a picked menu entry.
	pub fn handle_menu_action(&mut self, action: MenuAction) -> Result<()> {
		match action {
			MenuAction::RebaseOption(option) => {
				let state = self.git.working_tree_state();
				let result = self.git.rebase_or_merge_action(state, option);
				if self.run_sync_or_subprocess(result).into_flow()? {
					self.views.refresh_side_panels()?;
				}
				Ok(())
			}
			MenuAction::OpenRepo(path) => {
				debug!(%path, "switching repository");
				self.requested_repo = Some(PathBuf::from(path));
				Err(GuiError::ModeReloadRequired)
			}
		}
	}
}
