//! Autocomplete dropdown under the search input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, List, ListState};

use crate::style::Theme;

/// Render `items` in a box hanging from the bottom of `anchor`.
pub fn render_suggestions(
	frame: &mut Frame,
	anchor: Rect,
	bounds: Rect,
	items: &[String],
	selected: Option<usize>,
	theme: &Theme,
) {
	if items.is_empty() {
		return;
	}
	let wanted = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);
	let y = anchor.y.saturating_add(anchor.height);
	let height = wanted.min(bounds.bottom().saturating_sub(y));
	if height < 3 {
		return;
	}
	let area = Rect {
		x: anchor.x,
		y,
		width: anchor.width.min(60),
		height,
	};

	let list = List::new(items.iter().map(String::as_str))
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(theme.border(true)),
		)
		.highlight_style(theme.row_highlight);
	let mut state = ListState::default().with_selected(selected);

	frame.render_widget(Clear, area);
	frame.render_stateful_widget(list, area, &mut state);
}
