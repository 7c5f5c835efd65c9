//! Rope-backed text buffer with a single cursor.

use ropey::{Rope, RopeSlice};

/// Text being edited in an input view.
///
/// The cursor is a char index in `0..=len_chars()`. Every mutation keeps it
/// inside that range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableBuffer {
	text: Rope,
	cursor: usize,
	overwrite: bool,
}

impl EditableBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the full text as a rope slice.
	pub fn content(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// Char index of the cursor.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Returns the cursor as a zero-based `(line, column)` pair.
	pub fn cursor_position(&self) -> (usize, usize) {
		let line = self.text.char_to_line(self.cursor);
		(line, self.cursor - self.text.line_to_char(line))
	}

	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	pub fn len_lines(&self) -> usize {
		self.text.len_lines()
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	pub fn overwrite(&self) -> bool {
		self.overwrite
	}

	pub fn toggle_overwrite(&mut self) {
		self.overwrite = !self.overwrite;
	}

	/// Content with surrounding whitespace removed.
	pub fn trimmed(&self) -> String {
		self.text.to_string().trim().to_string()
	}

	/// Drops all text and resets the cursor. The overwrite flag is kept.
	pub fn clear(&mut self) {
		self.text = Rope::new();
		self.cursor = 0;
	}

	/// Writes `ch` at the cursor, replacing the character under it in overwrite mode.
	///
	/// NUL is discarded: keys without a literal character fall through to a write
	/// and must leave the buffer untouched.
	pub fn write(&mut self, ch: char) {
		if ch == '\0' {
			return;
		}
		if self.overwrite && self.cursor < self.text.len_chars() && !is_line_break(self.text.char(self.cursor)) {
			self.text.remove(self.cursor..self.cursor + 1);
		}
		self.text.insert_char(self.cursor, ch);
		self.cursor += 1;
	}

	/// Inserts a line break at the cursor. Never overwrites.
	pub fn insert_newline(&mut self) {
		self.text.insert_char(self.cursor, '\n');
		self.cursor += 1;
	}

	/// Deletes the character before the cursor.
	pub fn delete_back(&mut self) {
		if self.cursor == 0 {
			return;
		}
		self.text.remove(self.cursor - 1..self.cursor);
		self.cursor -= 1;
	}

	/// Deletes the character under the cursor.
	pub fn delete_forward(&mut self) {
		if self.cursor < self.text.len_chars() {
			self.text.remove(self.cursor..self.cursor + 1);
		}
	}

	/// Moves horizontally by chars and vertically by lines, clamped to the text.
	///
	/// Vertical moves keep the column where the target line is long enough and
	/// otherwise land on its end. Moving past the first or last line is a no-op.
	pub fn move_cursor(&mut self, dx: isize, dy: isize) {
		if dy != 0 {
			let (line, col) = self.cursor_position();
			let Some(target) = line.checked_add_signed(dy).filter(|l| *l < self.text.len_lines()) else {
				return;
			};
			self.cursor = self.text.line_to_char(target) + col.min(self.line_content_len(target));
		}
		if dx != 0 {
			self.cursor = self.cursor.saturating_add_signed(dx).min(self.text.len_chars());
		}
	}

	/// Deletes from the start of the current line up to the cursor.
	pub fn delete_to_line_start(&mut self) {
		let start = self.line_start();
		if start < self.cursor {
			self.text.remove(start..self.cursor);
			self.cursor = start;
		}
	}

	pub fn goto_line_start(&mut self) {
		self.cursor = self.line_start();
	}

	pub fn goto_line_end(&mut self) {
		let line = self.text.char_to_line(self.cursor);
		self.cursor = self.text.line_to_char(line) + self.line_content_len(line);
	}

	fn line_start(&self) -> usize {
		self.text.line_to_char(self.text.char_to_line(self.cursor))
	}

	/// Length of `line` in chars, excluding its trailing line break.
	fn line_content_len(&self, line: usize) -> usize {
		let slice = self.text.line(line);
		let mut len = slice.len_chars();
		while len > 0 && is_line_break(slice.char(len - 1)) {
			len -= 1;
		}
		len
	}
}

impl From<&str> for EditableBuffer {
	/// Builds a buffer with the cursor at the end of `text`.
	fn from(text: &str) -> Self {
		let text = Rope::from(text);
		let cursor = text.len_chars();
		Self {
			text,
			cursor,
			overwrite: false,
		}
	}
}

impl std::fmt::Display for EditableBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.text)
	}
}

/// Every char ropey treats as ending a line.
fn is_line_break(ch: char) -> bool {
	matches!(ch, '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
