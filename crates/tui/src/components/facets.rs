//! The facet sidebar: every filter value with a checkbox and record count.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sectora_core::{ActiveFilters, Facet, FacetCounts};

use crate::components::rows::truncate_to_width;
use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// One selectable value in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetEntry {
	pub facet: Facet,
	pub value: String,
	pub count: usize,
}

/// Flatten the counts into sidebar order: locations, categories, growth.
#[must_use]
pub fn facet_entries(counts: &FacetCounts) -> Vec<FacetEntry> {
	Facet::ALL
		.into_iter()
		.flat_map(|facet| {
			let options = match facet {
				Facet::Location => &counts.locations,
				Facet::Category => &counts.categories,
				Facet::Growth => &counts.growth,
			};
			options.iter().map(move |option| FacetEntry {
				facet,
				value: option.value.clone(),
				count: option.count,
			})
		})
		.collect()
}

/// Everything needed to draw the sidebar for one frame.
pub struct FacetView<'a> {
	pub entries: &'a [FacetEntry],
	pub filters: &'a ActiveFilters,
	pub cursor: usize,
	pub title: &'a str,
	pub focused: bool,
}

/// The sidebar's text, plus the line holding the cursor.
fn facet_lines<'l>(view: &FacetView<'_>, width: usize, theme: &Theme) -> (Vec<Line<'l>>, usize) {
	let mut lines = Vec::new();
	let mut cursor_line = 0;
	let mut current = None;

	for (index, entry) in view.entries.iter().enumerate() {
		if current != Some(entry.facet) {
			if current.is_some() {
				lines.push(Line::default());
			}
			current = Some(entry.facet);
			lines.push(Line::styled(
				entry.facet.title().to_string(),
				theme.header.add_modifier(Modifier::BOLD),
			));
		}

		let checked = view.filters.contains(entry.facet, &entry.value);
		let marker = if checked { "[x] " } else { "[ ] " };
		let count = format!(" ({})", entry.count);
		let room = width.saturating_sub(marker.len() + count.len());
		let mut style = if checked { theme.highlight } else { Style::default() };
		if index == view.cursor {
			cursor_line = lines.len();
			if view.focused {
				style = style.patch(theme.row_highlight);
			}
		}
		lines.push(Line::from(vec![
			Span::styled(marker, style),
			Span::styled(truncate_to_width(&entry.value, room), style),
			Span::styled(count, style.patch(theme.empty)),
		]));
	}

	(lines, cursor_line)
}

/// Render the sidebar, scrolled so the cursor stays visible.
///
/// `offset` carries the scroll position between frames.
pub fn render_facets(frame: &mut Frame, area: Rect, view: &FacetView<'_>, offset: &mut usize, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border(view.focused))
		.title(view.title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if view.entries.is_empty() {
		frame.render_widget(Paragraph::new("No filters").style(theme.empty), inner);
		return;
	}

	// Leave a column for the scrollbar.
	let (lines, cursor_line) = facet_lines(view, (inner.width as usize).saturating_sub(1), theme);
	let metrics = ScrollMetrics::compute(lines.len(), inner.height as usize);
	*offset = metrics.follow(*offset, cursor_line);

	let mut text_area = inner;
	if metrics.needs_scrollbar {
		let mut state = metrics.state(*offset);
		text_area = render_scrollbar(frame, inner, &mut state, theme);
	}
	let scroll = u16::try_from(*offset).unwrap_or(u16::MAX);
	frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), text_area);
}
