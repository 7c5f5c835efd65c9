use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::StatusComposer;
use crate::services::GitService;

/// Refreshes the status line every `period` until the returned task is aborted.
///
/// Git queries block, so each refresh runs on the blocking pool. Ticks that
/// fall behind are skipped rather than bunched up.
pub fn spawn_periodic_refresh(composer: Arc<StatusComposer>, git: Arc<dyn GitService>, period: Duration) -> JoinHandle<()> {
	debug!(?period, "starting periodic status refresh");
	tokio::spawn(async move {
		let mut ticker = tokio::time::interval(period);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
		loop {
			ticker.tick().await;
			let composer = Arc::clone(&composer);
			let git = Arc::clone(&git);
			match tokio::task::spawn_blocking(move || composer.refresh(git.as_ref())).await {
				Ok(outcome) => debug!(?outcome, "periodic status refresh"),
				Err(error) => warn!(%error, "periodic status refresh panicked"),
			}
		}
	})
}
