use crate::key::Modifiers;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
}

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
	Up,
	Down,
	Left,
	Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
	Press(MouseButton),
	Release,
	Drag(MouseButton),
	Scroll(ScrollDirection),
	Move,
}

/// A mouse event in screen cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
	pub kind: MouseEventKind,
	pub row: u16,
	pub col: u16,
	pub modifiers: Modifiers,
}

impl MouseEvent {
	/// Left-button press at the given cell, no modifiers.
	pub const fn left_click(row: u16, col: u16) -> Self {
		Self {
			kind: MouseEventKind::Press(MouseButton::Left),
			row,
			col,
			modifiers: Modifiers::NONE,
		}
	}

	pub fn is_left_press(&self) -> bool {
		matches!(self.kind, MouseEventKind::Press(MouseButton::Left))
	}
}

#[cfg(feature = "terminal-input")]
impl From<termina::event::MouseEvent> for MouseEvent {
	fn from(event: termina::event::MouseEvent) -> Self {
		use termina::event::{MouseButton as TmButton, MouseEventKind as TmKind};

		let button = |btn: TmButton| match btn {
			TmButton::Left => MouseButton::Left,
			TmButton::Right => MouseButton::Right,
			TmButton::Middle => MouseButton::Middle,
		};

		let kind = match event.kind {
			TmKind::Down(btn) => MouseEventKind::Press(button(btn)),
			TmKind::Up(_) => MouseEventKind::Release,
			TmKind::Drag(btn) => MouseEventKind::Drag(button(btn)),
			TmKind::ScrollUp => MouseEventKind::Scroll(ScrollDirection::Up),
			TmKind::ScrollDown => MouseEventKind::Scroll(ScrollDirection::Down),
			TmKind::ScrollLeft => MouseEventKind::Scroll(ScrollDirection::Left),
			TmKind::ScrollRight => MouseEventKind::Scroll(ScrollDirection::Right),
			TmKind::Moved => MouseEventKind::Move,
		};

		Self {
			kind,
			row: event.row,
			col: event.column,
			modifiers: event.modifiers.into(),
		}
	}
}
