//! Mid-operation state of a work tree.

use std::fmt;
use std::path::Path;

/// Whether the repository is in the middle of a rebase or merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkingTreeState {
	#[default]
	Normal,
	Rebasing,
	Merging,
}

impl WorkingTreeState {
	/// Probes a `.git` directory for in-progress rebase or merge markers.
	///
	/// A rebase takes precedence over a merge when both markers are present.
	pub fn detect(git_dir: &Path) -> Self {
		let rebasing = ["rebase-merge", "rebase-apply"].iter().any(|dir| git_dir.join(dir).is_dir());
		if rebasing {
			Self::Rebasing
		} else if git_dir.join("MERGE_HEAD").is_file() {
			Self::Merging
		} else {
			Self::Normal
		}
	}

	pub fn is_normal(self) -> bool {
		matches!(self, Self::Normal)
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Normal => "normal",
			Self::Rebasing => "rebasing",
			Self::Merging => "merging",
		}
	}
}

impl fmt::Display for WorkingTreeState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
