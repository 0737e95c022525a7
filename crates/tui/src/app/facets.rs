//! Cursor and scroll position within the facet sidebar.

use crate::components::FacetEntry;

#[derive(Debug, Default)]
pub(crate) struct FacetPanel {
	pub entries: Vec<FacetEntry>,
	pub cursor: usize,
	/// First visible line, kept between frames.
	pub offset: usize,
}

impl FacetPanel {
	pub fn new(entries: Vec<FacetEntry>) -> Self {
		Self {
			entries,
			..Self::default()
		}
	}

	pub fn current(&self) -> Option<&FacetEntry> {
		self.entries.get(self.cursor)
	}

	pub fn move_up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_down(&mut self) {
		if self.cursor + 1 < self.entries.len() {
			self.cursor += 1;
		}
	}
}
