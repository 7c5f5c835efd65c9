//! Collaborator interfaces.
//!
//! The session drives git, views and prompts only through these traits, so
//! the terminal frontend and the git backend can be swapped or faked.

use std::fmt;

use gitdeck_primitives::WorkingTreeState;

use crate::error::Result;
use crate::outcome::CommandResult;
use crate::text::StyledText;

/// The checked-out branch and its upstream divergence.
///
/// Divergence counts are strings so an unknown upstream can be reported as `"?"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
	pub name: String,
	pub pushables: String,
	pub pullables: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitFlags {
	/// Skip pre-commit and commit-msg hooks.
	pub no_verify: bool,
}

/// Continuation choices for an in-progress rebase or merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RebaseOption {
	Continue,
	Abort,
	Skip,
}

impl RebaseOption {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Continue => "continue",
			Self::Abort => "abort",
			Self::Skip => "skip",
		}
	}
}

impl fmt::Display for RebaseOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Git backend.
pub trait GitService: Send + Sync {
	/// Commits staged changes. May ask for a subprocess when an editor or hook needs the terminal.
	fn commit(&self, message: &str, flags: CommitFlags) -> CommandResult;
	fn working_tree_state(&self) -> WorkingTreeState;
	/// `None` while branches are still loading.
	fn current_branch(&self) -> Option<Branch>;
	fn repo_name(&self) -> String;
	fn rebase_or_merge_action(&self, state: WorkingTreeState, option: RebaseOption) -> CommandResult;
	/// Recently opened repositories, most recent first.
	fn recent_repos(&self) -> Vec<String> {
		Vec::new()
	}
}

/// Views the session writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
	Status,
	Main,
	CommitMessage,
	Options,
}

/// Focus contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
	Status,
	Files,
	CommitMessage,
}

/// Content for the main panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTask {
	Text(String),
}

/// What a menu entry does when picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
	RebaseOption(RebaseOption),
	OpenRepo(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
	pub label: String,
	pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
	pub title: String,
	pub items: Vec<MenuItem>,
}

/// Terminal frontend.
pub trait ViewService {
	fn set_view_content(&mut self, view: ViewKind, content: &StyledText);
	fn set_subtitle(&mut self, view: ViewKind, subtitle: &str);
	fn current_context(&self) -> ContextKey;
	fn switch_context(&mut self, context: ContextKey) -> Result<()>;
	/// Pops back to the context that was focused before the current one.
	fn return_from_context(&mut self) -> Result<()>;
	fn popup_focused(&self) -> bool;
	fn create_menu(&mut self, menu: Menu) -> Result<()>;
	fn render_main(&mut self, title: &str, task: RenderTask) -> Result<()>;
	/// Schedules a refresh of the side panels without waiting for it.
	fn refresh_side_panels(&mut self) -> Result<()>;
	/// Releases the terminal for a foreign process.
	fn suspend(&mut self) -> Result<()>;
	fn resume(&mut self) -> Result<()>;
}

/// Callback attached to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
	ExitFilterMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskPrompt {
	pub title: String,
	pub prompt: String,
	pub on_confirm: ConfirmAction,
}

/// Popups.
pub trait PromptService {
	/// Shows an error popup.
	fn error(&mut self, message: &str);
	/// Shows a yes/no popup. Confirming routes `on_confirm` to [`crate::Session::handle_confirm`].
	fn ask(&mut self, prompt: AskPrompt);
}
