use std::fmt;
use std::str::FromStr;

/// Foreground color intent for a run of text.
///
/// Frontends map these onto their own palettes; the core never emits escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
	#[default]
	Default,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
}

impl Color {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Black => "black",
			Self::Red => "red",
			Self::Green => "green",
			Self::Yellow => "yellow",
			Self::Blue => "blue",
			Self::Magenta => "magenta",
			Self::Cyan => "cyan",
			Self::White => "white",
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Color {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.trim().to_ascii_lowercase().as_str() {
			"default" => Self::Default,
			"black" => Self::Black,
			"red" => Self::Red,
			"green" => Self::Green,
			"yellow" => Self::Yellow,
			"blue" => Self::Blue,
			"magenta" => Self::Magenta,
			"cyan" => Self::Cyan,
			"white" => Self::White,
			other => return Err(format!("unknown color {other:?}")),
		})
	}
}
