use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Whether the table holds focus.
	pub focused: bool,
}

/// Render a bordered table, with a scrollbar when the rows overflow.
///
/// Returns the inner area the rows were laid out in.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> Rect {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border(spec.focused));
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(header_style)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = (inner.height as usize).saturating_sub(TABLE_HEADER_ROWS);
	let needs_scrollbar = available_rows > 0 && spec.rows.len() > available_rows;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	if needs_scrollbar {
		render_scrollbar(frame, inner, scrollbar_state, theme);
	}

	render_header_separator(frame, table_area, theme);
	table_area
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height < 2 || area.width <= 2 {
		return;
	}

	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let middle = "─".repeat(area.width as usize - 2);
	let style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let line = Line::from(vec![Span::raw(" "), Span::styled(middle, style), Span::raw(" ")]);
	frame.render_widget(Paragraph::new(line), separator);
}
