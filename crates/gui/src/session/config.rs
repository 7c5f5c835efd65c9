use gitdeck_config::UserConfig;
use tracing::info;

use super::Session;
use crate::error::{GuiError, Result};
use crate::subprocess::SubprocessHandle;

/// Editor command line: `os.edit_command`, then `$VISUAL`, then `$EDITOR`, then `vi`.
///
/// `env` looks up environment variables so callers can substitute their own.
pub fn editor_command(config: &UserConfig, env: impl Fn(&str) -> Option<String>) -> String {
	let configured = config.os.edit_command.trim();
	if !configured.is_empty() {
		return configured.to_string();
	}
	["VISUAL", "EDITOR"]
		.into_iter()
		.filter_map(&env)
		.map(|value| value.trim().to_string())
		.find(|value| !value.is_empty())
		.unwrap_or_else(|| "vi".to_string())
}

impl Session {
	/// Opens the config file in the user's editor as a terminal handoff.
	pub fn handle_edit_config(&mut self) -> Result<()> {
		let Some(path) = self.config_path.clone() else {
			return Err(GuiError::UserInput("no config file location".to_string()));
		};
		let command = editor_command(&self.config, |var| std::env::var(var).ok());
		let handle = SubprocessHandle::from_command_line(&command, [path.to_string_lossy().into_owned()])?;
		info!(%handle, "editing config");
		self.run_sync_or_subprocess(Ok(Some(handle))).into_flow().map(drop)
	}
}
