use gitdeck_primitives::Color;

use crate::text::StyledText;

/// Clickable part of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusRegion {
	/// The `↑P↓Q` upstream divergence counts.
	Upstream,
	/// The `(rebasing)` or `(merging)` marker.
	WorkingTreeState,
	RepoName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSegment {
	pub text: String,
	pub color: Color,
	pub region: Option<StatusRegion>,
}

/// Character span `[start, end)` of a region within the composed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringRegion {
	pub start: usize,
	pub end: usize,
	pub tag: StatusRegion,
}

impl SubstringRegion {
	pub fn contains(&self, column: usize) -> bool {
		(self.start..self.end).contains(&column)
	}
}

/// A composed status line, kept as segments so regions stay addressable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
	segments: Vec<StatusSegment>,
}

impl StatusLine {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, text: impl Into<String>, color: Color) {
		self.segments.push(StatusSegment {
			text: text.into(),
			color,
			region: None,
		});
	}

	pub fn push_region(&mut self, text: impl Into<String>, color: Color, region: StatusRegion) {
		self.segments.push(StatusSegment {
			text: text.into(),
			color,
			region: Some(region),
		});
	}

	pub fn segments(&self) -> &[StatusSegment] {
		&self.segments
	}

	pub fn plain(&self) -> String {
		self.segments.iter().map(|segment| segment.text.as_str()).collect()
	}

	/// Length in characters, the unit click columns are measured in.
	pub fn char_len(&self) -> usize {
		self.segments.iter().map(|segment| segment.text.chars().count()).sum()
	}

	/// Regions in construction order with cumulative character offsets.
	pub fn regions(&self) -> Vec<SubstringRegion> {
		let mut offset = 0;
		let mut regions = Vec::new();
		for segment in &self.segments {
			let len = segment.text.chars().count();
			if let Some(tag) = segment.region {
				regions.push(SubstringRegion {
					start: offset,
					end: offset + len,
					tag,
				});
			}
			offset += len;
		}
		regions
	}

	/// Region under `column`, if any.
	pub fn hit_test(&self, column: usize) -> Option<StatusRegion> {
		region_at(column, &self.regions())
	}

	pub fn to_styled(&self) -> StyledText {
		let mut text = StyledText::default();
		for segment in &self.segments {
			text.push(segment.text.clone(), segment.color);
		}
		text
	}
}

/// First region containing `column`.
pub fn region_at(column: usize, regions: &[SubstringRegion]) -> Option<StatusRegion> {
	regions.iter().find(|region| region.contains(column)).map(|region| region.tag)
}
