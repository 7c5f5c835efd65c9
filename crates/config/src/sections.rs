//! Typed configuration sections, one per TOML table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `[git]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
	/// Commit messages starting with this prefix skip commit hooks. Empty disables the check.
	pub skip_hook_prefix: String,
}

/// `[gui]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
	pub commit_length: CommitLengthConfig,
	/// Branch-name prefix (text before the first `/`) → color name.
	pub branch_colors: BTreeMap<String, String>,
}

/// `[gui.commit_length]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitLengthConfig {
	/// Show the message length as the commit panel subtitle.
	pub show: bool,
}

/// `[keybinding]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
	pub universal: UniversalKeys,
}

/// `[keybinding.universal]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalKeys {
	pub append_newline: String,
	pub confirm: String,
	pub close: String,
}

impl Default for UniversalKeys {
	fn default() -> Self {
		Self {
			append_newline: "<tab>".to_string(),
			confirm: "<enter>".to_string(),
			close: "<esc>".to_string(),
		}
	}
}

/// `[refresher]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefresherConfig {
	/// Seconds between background status refreshes.
	pub refresh_interval: u64,
}

impl Default for RefresherConfig {
	fn default() -> Self {
		Self { refresh_interval: 10 }
	}
}

/// `[os]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsConfig {
	/// Editor command line used to edit files, e.g. `"nvim -f"`. Empty means `$VISUAL`/`$EDITOR`.
	pub edit_command: String,
}
