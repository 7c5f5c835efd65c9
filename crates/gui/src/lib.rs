//! Controller core of the gitdeck terminal git client.
//!
//! A [`Session`] owns the interactive state of one repository view and
//! routes user actions to git. Around it sit the pieces that decide how
//! the event loop continues after each action:
//!
//! * [`outcome`] - classifies command results into proceed, subprocess handoff or fatal
//! * [`modes`] - gates history-rewriting commands while a path filter is active
//! * [`status`] - composes the status line and maps clicks back to regions
//! * [`msg`] - message bus through which background work updates views
//!
//! Rendering, git plumbing and prompts are collaborators behind the
//! traits in [`services`].

pub mod error;
pub mod modes;
pub mod msg;
pub mod outcome;
pub mod services;
pub mod session;
pub mod status;
pub mod subprocess;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{CommandError, GuiError, Result};
pub use modes::{ModeGuard, Validation};
pub use msg::{MsgReceiver, MsgSender, UiMsg};
pub use outcome::{CommandOutcome, CommandResult, SubprocessSlot};
pub use services::{
	AskPrompt, Branch, CommitFlags, ConfirmAction, ContextKey, GitService, Menu, MenuAction, MenuItem, PromptService, RebaseOption, RenderTask,
	ViewKind, ViewService,
};
pub use session::{LoopSignal, Session};
pub use status::{RefreshOutcome, RepoSummary, StatusComposer, StatusLine, StatusRegion, StatusSegment, spawn_periodic_refresh};
pub use subprocess::SubprocessHandle;
pub use text::{Span, StyledText};
