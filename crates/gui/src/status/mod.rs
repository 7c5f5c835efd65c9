//! Status line composition and hit-testing.
//!
//! The status view shows upstream divergence, any in-progress rebase or
//! merge, and `repo → branch`:
//!
//! ```text
//! ↑3↓0 (rebasing) repo-x → feature/login
//! ```
//!
//! [`StatusComposer`] rebuilds that line from a [`RepoSummary`] and keeps the
//! last published copy so clicks can be mapped back to regions with
//! [`StatusLine::hit_test`].

mod compose;
mod line;
mod refresher;

pub use compose::{RefreshOutcome, StatusComposer, StatusSnapshot, branch_color, compose, upstream_color};
pub use line::{StatusLine, StatusRegion, StatusSegment, SubstringRegion, region_at};
pub use refresher::spawn_periodic_refresh;

use gitdeck_primitives::WorkingTreeState;

use crate::services::GitService;

/// Repository facts the status line is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
	pub pushables: String,
	pub pullables: String,
	pub state: WorkingTreeState,
	pub repo_name: String,
	pub branch_name: String,
}

impl RepoSummary {
	/// Queries git. Returns `None` while no current branch is known.
	pub fn query(git: &dyn GitService) -> Option<Self> {
		let branch = git.current_branch()?;
		Some(Self {
			pushables: branch.pushables,
			pullables: branch.pullables,
			state: git.working_tree_state(),
			repo_name: git.repo_name(),
			branch_name: branch.name,
		})
	}
}
