use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use gitdeck_config::UserConfig;
use gitdeck_primitives::Color;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::RepoSummary;
use super::line::{StatusLine, StatusRegion};
use crate::msg::{MsgSender, UiMsg};
use crate::services::GitService;

/// Builds the status line for `summary`.
pub fn compose(summary: &RepoSummary, config: &UserConfig) -> StatusLine {
	let mut line = StatusLine::new();

	if !summary.pushables.is_empty() && !summary.pullables.is_empty() {
		line.push_region(
			format!("↑{}↓{}", summary.pushables, summary.pullables),
			upstream_color(&summary.pushables, &summary.pullables),
			StatusRegion::Upstream,
		);
		line.push(" ", Color::Default);
	}

	if !summary.state.is_normal() {
		line.push_region(format!("({})", summary.state), Color::Yellow, StatusRegion::WorkingTreeState);
		line.push(" ", Color::Default);
	}

	line.push_region(summary.repo_name.clone(), Color::Default, StatusRegion::RepoName);
	line.push(" → ", Color::Default);
	line.push(summary.branch_name.clone(), branch_color(&summary.branch_name, config));
	line.push(" ", Color::Default);
	line
}

/// Green when in sync, red when the upstream is unknown, yellow when diverged.
pub fn upstream_color(pushables: &str, pullables: &str) -> Color {
	match (pushables, pullables) {
		("0", "0") => Color::Green,
		("?", "?") => Color::Red,
		_ => Color::Yellow,
	}
}

/// Color for a branch name, keyed on the text before the first `/`.
pub fn branch_color(name: &str, config: &UserConfig) -> Color {
	let prefix = name.split('/').next().unwrap_or(name);
	if let Some(color) = config.branch_color(prefix) {
		return color;
	}
	match prefix {
		"feature" => Color::Green,
		"bugfix" => Color::Yellow,
		"hotfix" => Color::Red,
		_ => Color::Default,
	}
}

/// Last published summary and the line built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
	pub summary: RepoSummary,
	pub line: StatusLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
	Published,
	/// No current branch yet; the previous line stays.
	NoBranch,
	/// A newer trigger already published.
	Superseded,
}

#[derive(Debug, Default)]
struct Published {
	ticket: u64,
	snapshot: Option<StatusSnapshot>,
}

/// Serializes status line rebuilds from any thread.
///
/// Git is queried outside the lock. Each refresh takes a ticket first, and
/// a refresh holding an older ticket than the last published one is
/// dropped, so the newest trigger always wins.
#[derive(Debug)]
pub struct StatusComposer {
	config: Arc<UserConfig>,
	tx: MsgSender,
	next_ticket: AtomicU64,
	published: Mutex<Published>,
}

impl StatusComposer {
	pub fn new(config: Arc<UserConfig>, tx: MsgSender) -> Self {
		Self {
			config,
			tx,
			next_ticket: AtomicU64::new(0),
			published: Mutex::new(Published::default()),
		}
	}

	/// Queries `git` and republishes the status line.
	pub fn refresh(&self, git: &dyn GitService) -> RefreshOutcome {
		let ticket = self.take_ticket();
		let Some(summary) = RepoSummary::query(git) else {
			debug!(ticket, "no current branch, keeping status line");
			return RefreshOutcome::NoBranch;
		};
		self.publish(ticket, summary)
	}

	pub(super) fn take_ticket(&self) -> u64 {
		self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
	}

	pub(super) fn publish(&self, ticket: u64, summary: RepoSummary) -> RefreshOutcome {
		let mut published = self.published.lock();
		if ticket < published.ticket {
			trace!(ticket, latest = published.ticket, "status refresh superseded");
			return RefreshOutcome::Superseded;
		}

		let snapshot = StatusSnapshot {
			line: compose(&summary, &self.config),
			summary,
		};
		trace!(ticket, line = %snapshot.line.plain(), "status line published");
		if self.tx.send(UiMsg::StatusLine(snapshot.clone())).is_err() {
			warn!("ui channel closed, status line not delivered");
		}
		*published = Published {
			ticket,
			snapshot: Some(snapshot),
		};
		RefreshOutcome::Published
	}

	/// The last published summary and line. The view may not show it yet.
	pub fn snapshot(&self) -> Option<StatusSnapshot> {
		self.published.lock().snapshot.clone()
	}
}
