//! The autocomplete dropdown's contents and highlight.

#[derive(Debug, Default)]
pub(crate) struct SuggestionState {
	pub items: Vec<String>,
	pub selected: Option<usize>,
	pub open: bool,
}

impl SuggestionState {
	/// Show `items`, opening the dropdown when there is anything to show.
	pub fn refresh(&mut self, items: Vec<String>) {
		self.open = !items.is_empty();
		self.items = items;
		self.selected = None;
	}

	pub fn close(&mut self) {
		self.open = false;
		self.selected = None;
	}

	pub fn is_visible(&self) -> bool {
		self.open && !self.items.is_empty()
	}

	pub fn move_down(&mut self) {
		let last = self.items.len().saturating_sub(1);
		self.selected = Some(self.selected.map_or(0, |index| (index + 1).min(last)));
	}

	/// Moving up from the first entry returns the highlight to the input.
	pub fn move_up(&mut self) {
		self.selected = match self.selected {
			Some(0) | None => None,
			Some(index) => Some(index - 1),
		};
	}

	pub fn current(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.items.get(index))
			.map(String::as_str)
	}
}
