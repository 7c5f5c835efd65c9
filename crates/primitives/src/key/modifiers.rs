/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };

	pub const ALT: Self = Self { alt: true, ..Self::NONE };

	pub const SHIFT: Self = Self { shift: true, ..Self::NONE };

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

#[cfg(feature = "terminal-input")]
impl From<termina::event::Modifiers> for Modifiers {
	fn from(mods: termina::event::Modifiers) -> Self {
		use termina::event::Modifiers as TmModifiers;

		Self {
			ctrl: mods.contains(TmModifiers::CONTROL),
			alt: mods.contains(TmModifiers::ALT),
			shift: mods.contains(TmModifiers::SHIFT),
		}
	}
}
