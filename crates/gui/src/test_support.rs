//! Recording fakes for the collaborator traits.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use gitdeck_config::UserConfig;
use gitdeck_primitives::WorkingTreeState;
use parking_lot::Mutex;

use crate::error::Result;
use crate::outcome::CommandResult;
use crate::services::{
	AskPrompt, Branch, CommitFlags, ContextKey, GitService, Menu, PromptService, RebaseOption, RenderTask, ViewKind,
	ViewService,
};
use crate::session::Session;
use crate::text::StyledText;

pub fn branch(name: &str, pushables: &str, pullables: &str) -> Branch {
	Branch {
		name: name.to_string(),
		pushables: pushables.to_string(),
		pullables: pullables.to_string(),
	}
}

#[derive(Debug, Default)]
pub struct GitState {
	pub branch: Option<Branch>,
	pub tree_state: WorkingTreeState,
	pub repo_name: String,
	pub recent: Vec<String>,
	pub commit_results: VecDeque<CommandResult>,
	pub commits: Vec<(String, CommitFlags)>,
	pub action_results: VecDeque<CommandResult>,
	pub actions: Vec<(WorkingTreeState, RebaseOption)>,
	pub branch_queries: usize,
}

#[derive(Debug, Default)]
pub struct FakeGit {
	pub state: Mutex<GitState>,
}

impl FakeGit {
	pub fn on_branch(name: &str, pushables: &str, pullables: &str) -> Self {
		let git = Self::default();
		{
			let mut state = git.state.lock();
			state.branch = Some(branch(name, pushables, pullables));
			state.repo_name = "repo-x".to_string();
		}
		git
	}

	pub fn set_tree_state(&self, tree_state: WorkingTreeState) {
		self.state.lock().tree_state = tree_state;
	}

	pub fn queue_commit(&self, result: CommandResult) {
		self.state.lock().commit_results.push_back(result);
	}

	pub fn queue_action(&self, result: CommandResult) {
		self.state.lock().action_results.push_back(result);
	}

	pub fn commits(&self) -> Vec<(String, CommitFlags)> {
		self.state.lock().commits.clone()
	}
}

impl GitService for FakeGit {
	fn commit(&self, message: &str, flags: CommitFlags) -> CommandResult {
		let mut state = self.state.lock();
		state.commits.push((message.to_string(), flags));
		state.commit_results.pop_front().unwrap_or(Ok(None))
	}

	fn working_tree_state(&self) -> WorkingTreeState {
		self.state.lock().tree_state
	}

	fn current_branch(&self) -> Option<Branch> {
		let mut state = self.state.lock();
		state.branch_queries += 1;
		state.branch.clone()
	}

	fn repo_name(&self) -> String {
		self.state.lock().repo_name.clone()
	}

	fn rebase_or_merge_action(&self, tree_state: WorkingTreeState, option: RebaseOption) -> CommandResult {
		let mut state = self.state.lock();
		state.actions.push((tree_state, option));
		state.action_results.pop_front().unwrap_or(Ok(None))
	}

	fn recent_repos(&self) -> Vec<String> {
		self.state.lock().recent.clone()
	}
}

#[derive(Debug, Default)]
pub struct RecordingViews {
	pub contents: HashMap<ViewKind, StyledText>,
	pub subtitles: HashMap<ViewKind, String>,
	pub contexts: Vec<ContextKey>,
	pub popup: bool,
	pub menus: Vec<Menu>,
	pub main: Vec<(String, RenderTask)>,
	pub refreshes: usize,
	/// `"suspend"` and `"resume"` in call order.
	pub terminal: Vec<&'static str>,
	pub fail_suspend: bool,
}

impl RecordingViews {
	pub fn content(&self, view: ViewKind) -> Option<String> {
		self.contents.get(&view).map(StyledText::to_plain_string)
	}
}

impl ViewService for RecordingViews {
	fn set_view_content(&mut self, view: ViewKind, content: &StyledText) {
		self.contents.insert(view, content.clone());
	}

	fn set_subtitle(&mut self, view: ViewKind, subtitle: &str) {
		self.subtitles.insert(view, subtitle.to_string());
	}

	fn current_context(&self) -> ContextKey {
		self.contexts.last().copied().unwrap_or(ContextKey::Files)
	}

	fn switch_context(&mut self, context: ContextKey) -> Result<()> {
		if self.current_context() != context {
			self.contexts.push(context);
		}
		Ok(())
	}

	fn return_from_context(&mut self) -> Result<()> {
		self.contexts.pop();
		Ok(())
	}

	fn popup_focused(&self) -> bool {
		self.popup
	}

	fn create_menu(&mut self, menu: Menu) -> Result<()> {
		self.menus.push(menu);
		Ok(())
	}

	fn render_main(&mut self, title: &str, task: RenderTask) -> Result<()> {
		self.main.push((title.to_string(), task));
		Ok(())
	}

	fn refresh_side_panels(&mut self) -> Result<()> {
		self.refreshes += 1;
		Ok(())
	}

	fn suspend(&mut self) -> Result<()> {
		if self.fail_suspend {
			return Err(std::io::Error::other("terminal busy").into());
		}
		self.terminal.push("suspend");
		Ok(())
	}

	fn resume(&mut self) -> Result<()> {
		self.terminal.push("resume");
		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct RecordingPrompts {
	pub errors: Vec<String>,
	pub asks: Vec<AskPrompt>,
}

impl PromptService for RecordingPrompts {
	fn error(&mut self, message: &str) {
		self.errors.push(message.to_string());
	}

	fn ask(&mut self, prompt: AskPrompt) {
		self.asks.push(prompt);
	}
}

/// Lets a test keep inspecting a fake after handing it to a [`Session`].
#[derive(Debug, Default)]
pub struct Shared<T>(pub Arc<Mutex<T>>);

impl<T> Clone for Shared<T> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl ViewService for Shared<RecordingViews> {
	fn set_view_content(&mut self, view: ViewKind, content: &StyledText) {
		self.0.lock().set_view_content(view, content);
	}

	fn set_subtitle(&mut self, view: ViewKind, subtitle: &str) {
		self.0.lock().set_subtitle(view, subtitle);
	}

	fn current_context(&self) -> ContextKey {
		self.0.lock().current_context()
	}

	fn switch_context(&mut self, context: ContextKey) -> Result<()> {
		self.0.lock().switch_context(context)
	}

	fn return_from_context(&mut self) -> Result<()> {
		self.0.lock().return_from_context()
	}

	fn popup_focused(&self) -> bool {
		self.0.lock().popup_focused()
	}

	fn create_menu(&mut self, menu: Menu) -> Result<()> {
		self.0.lock().create_menu(menu)
	}

	fn render_main(&mut self, title: &str, task: RenderTask) -> Result<()> {
		self.0.lock().render_main(title, task)
	}

	fn refresh_side_panels(&mut self) -> Result<()> {
		self.0.lock().refresh_side_panels()
	}

	fn suspend(&mut self) -> Result<()> {
		self.0.lock().suspend()
	}

	fn resume(&mut self) -> Result<()> {
		self.0.lock().resume()
	}
}

impl PromptService for Shared<RecordingPrompts> {
	fn error(&mut self, message: &str) {
		self.0.lock().error(message);
	}

	fn ask(&mut self, prompt: AskPrompt) {
		self.0.lock().ask(prompt);
	}
}

/// A session wired to fakes.
pub struct Harness {
	pub session: Session,
	pub git: Arc<FakeGit>,
	pub views: Shared<RecordingViews>,
	pub prompts: Shared<RecordingPrompts>,
}

impl Harness {
	pub fn new(config: UserConfig, git: FakeGit) -> Self {
		let git = Arc::new(git);
		let views = Shared::<RecordingViews>::default();
		let prompts = Shared::<RecordingPrompts>::default();
		let session = Session::new(
			Arc::new(config),
			Arc::clone(&git) as Arc<dyn GitService>,
			Box::new(views.clone()),
			Box::new(prompts.clone()),
		);
		Self {
			session,
			git,
			views,
			prompts,
		}
	}

	pub fn views(&self) -> parking_lot::MutexGuard<'_, RecordingViews> {
		self.views.0.lock()
	}

	pub fn prompts(&self) -> parking_lot::MutexGuard<'_, RecordingPrompts> {
		self.prompts.0.lock()
	}
}
