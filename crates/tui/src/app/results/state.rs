//! State management for the results table.

use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::tables::TABLE_HEADER_ROWS;

/// Aggregate state for the results table.
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Dataset indices of the visible records, in dataset order.
	pub filtered: Vec<usize>,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			filtered: Vec::new(),
		}
	}
}

impl ResultsState {
	/// Return the number of filtered entries.
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Replace the visible records and scroll back to the top.
	pub fn set_filtered(&mut self, filtered: Vec<usize>) {
		self.filtered = filtered;
		*self.table_state.offset_mut() = 0;
		self.table_state.select(Some(0));
		self.ensure_selection();
	}

	/// Ensure the row selection remains valid for the currently filtered list.
	pub fn ensure_selection(&mut self) {
		let len = self.filtered_len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Dataset index of the selected row.
	pub fn selected_record(&self) -> Option<usize> {
		self.table_state
			.selected()
			.and_then(|row| self.filtered.get(row).copied())
	}

	pub fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(1)));
		}
	}

	pub fn move_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.filtered_len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	/// Keep the table offset and scrollbar consistent with a viewport of
	/// `viewport_height` lines, header included.
	pub fn update_scrollbar(&mut self, viewport_height: usize) {
		let content_length = self.filtered_len();
		let available_rows = viewport_height.saturating_sub(TABLE_HEADER_ROWS);
		if content_length == 0 || available_rows == 0 || content_length <= available_rows {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let max_offset = content_length - available_rows;
		let mut offset = self.table_state.offset().min(max_offset);
		if let Some(selected) = self.table_state.selected() {
			if selected < offset {
				offset = selected;
			} else if selected >= offset + available_rows {
				offset = selected + 1 - available_rows;
			}
		}
		*self.table_state.offset_mut() = offset;

		let position = offset * (content_length - 1) / max_offset;
		self.scrollbar_state = ScrollbarState::new(content_length)
			.viewport_content_length(available_rows)
			.position(position);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_is_clamped_to_the_results() {
		let mut results = ResultsState::default();
		results.set_filtered(vec![3, 5, 8]);
		results.move_down();
		results.move_down();
		results.move_down();
		assert_eq!(results.selected_record(), Some(8));

		results.filtered.truncate(1);
		results.ensure_selection();
		assert_eq!(results.selected_record(), Some(3));

		results.set_filtered(Vec::new());
		assert_eq!(results.table_state.selected(), None);
		assert_eq!(results.selected_record(), None);
	}

	#[test]
	fn scrolling_follows_the_selection() {
		let mut results = ResultsState::default();
		results.set_filtered((0..20).collect());
		for _ in 0..10 {
			results.move_down();
		}
		results.update_scrollbar(7);
		assert_eq!(results.table_state.offset(), 6);

		results.set_filtered((0..3).collect());
		results.update_scrollbar(7);
		assert_eq!(results.table_state.offset(), 0);
	}
}
