use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING};

/// Width of the facet sidebar, borders included.
pub(crate) const SIDEBAR_WIDTH: u16 = 34;
/// Below this width the sidebar is hidden to leave room for results.
pub(crate) const SIDEBAR_MIN_SCREEN_WIDTH: u16 = 80;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenAreas {
	pub input: Rect,
	pub sidebar: Option<Rect>,
	pub results: Rect,
	pub status: Rect,
}

pub(crate) fn screen_areas(area: Rect) -> ScreenAreas {
	let [input, body, status] = Layout::vertical([
		Constraint::Length(3),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area);

	if area.width < SIDEBAR_MIN_SCREEN_WIDTH {
		return ScreenAreas {
			input,
			sidebar: None,
			results: body,
			status,
		};
	}
	let [sidebar, results] =
		Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]).areas(body);
	ScreenAreas {
		input,
		sidebar: Some(sidebar),
		results,
		status,
	}
}

/// Column widths the results table will use inside its bordered `area`.
pub(crate) fn resolve_column_widths(area: Rect, widths: &[Constraint]) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	let table_width = area.width.saturating_sub(2);
	if table_width == 0 {
		return Vec::new();
	}

	let highlight_width = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}
