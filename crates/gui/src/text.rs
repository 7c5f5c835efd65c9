//! Colored text handed to views.

use gitdeck_primitives::Color;

/// A run of text in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
	pub text: String,
	pub color: Color,
}

/// Sequence of colored spans forming a view's content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
	pub spans: Vec<Span>,
}

impl StyledText {
	/// Uncolored text.
	pub fn plain(text: impl Into<String>) -> Self {
		Self {
			spans: vec![Span {
				text: text.into(),
				color: Color::Default,
			}],
		}
	}

	pub fn push(&mut self, text: impl Into<String>, color: Color) {
		self.spans.push(Span { text: text.into(), color });
	}

	/// The text with colors stripped.
	pub fn to_plain_string(&self) -> String {
		self.spans.iter().map(|span| span.text.as_str()).collect()
	}
}
