use crate::buffer::EditableBuffer;

/// A single edit produced by resolving one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
	/// Delete the character before the cursor.
	DeleteBack,
	/// Delete the character under the cursor.
	DeleteForward,
	/// Move by `dx` chars and `dy` lines.
	MoveCursor { dx: isize, dy: isize },
	/// Insert a line break.
	NewLine,
	/// Insert a literal space. Kept apart from [`EditAction::Write`] so the
	/// space key stays bound even when rules for characters are added.
	WriteSpace,
	ToggleOverwrite,
	DeleteToLineStart,
	LineStart,
	LineEnd,
	/// Write a literal character; `'\0'` for keys without one.
	Write(char),
}

impl EditAction {
	/// Applies this edit to `buffer`.
	pub fn apply(self, buffer: &mut EditableBuffer) {
		match self {
			Self::DeleteBack => buffer.delete_back(),
			Self::DeleteForward => buffer.delete_forward(),
			Self::MoveCursor { dx, dy } => buffer.move_cursor(dx, dy),
			Self::NewLine => buffer.insert_newline(),
			Self::WriteSpace => buffer.write(' '),
			Self::ToggleOverwrite => buffer.toggle_overwrite(),
			Self::DeleteToLineStart => buffer.delete_to_line_start(),
			Self::LineStart => buffer.goto_line_start(),
			Self::LineEnd => buffer.goto_line_end(),
			Self::Write(ch) => buffer.write(ch),
		}
	}
}
