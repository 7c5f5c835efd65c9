//! User configuration for gitdeck.
//!
//! Configuration is a single TOML file. Every table is optional and every
//! missing field takes its default, so a partial file is always valid:
//!
//! ```toml
//! [git]
//! skip_hook_prefix = "WIP"
//!
//! [gui.commit_length]
//! show = true
//!
//! [gui.branch_colors]
//! docs = "blue"
//!
//! [keybinding.universal]
//! append_newline = "<c-j>"
//!
//! [refresher]
//! refresh_interval = 10
//!
//! [os]
//! edit_command = "nvim -f"
//! ```
//!
//! Values that parse as TOML but not as keys or colors are reported as
//! [`ConfigWarning`]s in [`UserConfig::warnings`] instead of failing the load.

pub mod error;
pub mod sections;

use std::path::{Path, PathBuf};
use std::time::Duration;

use gitdeck_primitives::{Color, Key, parse_key};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::{ConfigError, ConfigWarning, Result};
pub use sections::{CommitLengthConfig, GitConfig, GuiConfig, KeybindingConfig, OsConfig, RefresherConfig, UniversalKeys};

/// Parsed user configuration. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
	pub git: GitConfig,
	pub gui: GuiConfig,
	pub keybinding: KeybindingConfig,
	pub refresher: RefresherConfig,
	pub os: OsConfig,
	/// Non-fatal problems found while loading.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

impl UserConfig {
	/// Parses a TOML document, collecting warnings for unusable values.
	pub fn parse(input: &str) -> Result<Self> {
		let mut config: UserConfig = toml::from_str(input)?;
		config.warnings = config.validate();
		for warning in &config.warnings {
			warn!(%warning, "config value ignored");
		}
		Ok(config)
	}

	/// Loads configuration from `path`. A missing file yields the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no config file, using defaults");
				return Ok(Self::default());
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		Self::parse(&content)
	}

	/// `<config_dir>/gitdeck/config.toml`, if the platform has a config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("gitdeck").join("config.toml"))
	}

	/// The configured append-newline key, or `None` when unset or unparsable.
	pub fn append_newline_key(&self) -> Option<Key> {
		let raw = self.keybinding.universal.append_newline.trim();
		if raw.is_empty() {
			return None;
		}
		parse_key(raw).ok()
	}

	/// Color override for a branch-name prefix.
	pub fn branch_color(&self, prefix: &str) -> Option<Color> {
		self.gui.branch_colors.get(prefix).and_then(|value| value.parse().ok())
	}

	/// Interval between background status refreshes, at least one second.
	pub fn refresh_interval(&self) -> Duration {
		Duration::from_secs(self.refresher.refresh_interval.max(1))
	}

	fn validate(&self) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();

		let universal = &self.keybinding.universal;
		for (field, raw) in [
			("keybinding.universal.append_newline", &universal.append_newline),
			("keybinding.universal.confirm", &universal.confirm),
			("keybinding.universal.close", &universal.close),
		] {
			if raw.trim().is_empty() {
				continue;
			}
			if let Err(source) = parse_key(raw) {
				warnings.push(ConfigWarning::InvalidKey { field, source });
			}
		}

		for (prefix, value) in &self.gui.branch_colors {
			if value.parse::<Color>().is_err() {
				warnings.push(ConfigWarning::InvalidColor {
					prefix: prefix.clone(),
					value: value.clone(),
				});
			}
		}

		if self.refresher.refresh_interval == 0 {
			warnings.push(ConfigWarning::InvalidInterval(0));
		}

		warnings
	}
}

/// Display label for a configured key, falling back to `default` when `raw` does not parse.
pub fn key_label(raw: &str, default: Key) -> String {
	parse_key(raw).unwrap_or(default).to_string()
}
