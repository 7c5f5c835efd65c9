//! Message bus for view updates produced off the main loop.
//!
//! Background refreshes and edit hooks never touch views directly. They
//! send a [`UiMsg`], and the main loop applies queued messages in order
//! through [`crate::Session::drain_messages`].

use tokio::sync::mpsc;

use crate::services::{ViewKind, ViewService};
use crate::status::StatusSnapshot;
use crate::text::StyledText;

pub type MsgSender = mpsc::UnboundedSender<UiMsg>;

pub type MsgReceiver = mpsc::UnboundedReceiver<UiMsg>;

pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
	/// Replace a view's whole content.
	SetViewContent { view: ViewKind, content: StyledText },
	SetSubtitle { view: ViewKind, subtitle: String },
	/// A freshly composed status line for the status view.
	StatusLine(StatusSnapshot),
}

impl UiMsg {
	/// Writes the update to `views`. Returns the status snapshot now on screen, if this message showed one.
	pub fn apply(self, views: &mut dyn ViewService) -> Option<StatusSnapshot> {
		match self {
			Self::SetViewContent { view, content } => views.set_view_content(view, &content),
			Self::SetSubtitle { view, subtitle } => views.set_subtitle(view, &subtitle),
			Self::StatusLine(snapshot) => {
				views.set_view_content(ViewKind::Status, &snapshot.line.to_styled());
				return Some(snapshot);
			}
		}
		None
	}
}
