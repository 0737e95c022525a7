//! Popup describing a single industry.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use sectora_core::{IndustryRecord, share_url};

use crate::style::Theme;

/// The record shown in the popup and how to label it.
pub struct DetailView<'a> {
	pub record: &'a IndustryRecord,
	pub category: Option<&'a str>,
	pub title: &'a str,
	pub share_base_url: &'a str,
}

fn section<'l>(lines: &mut Vec<Line<'l>>, heading: &'static str, values: &[String], theme: &Theme) {
	lines.push(Line::styled(heading, theme.header.add_modifier(Modifier::BOLD)));
	if values.is_empty() {
		lines.push(Line::styled("  none listed", theme.empty));
	}
	for value in values {
		lines.push(Line::from(format!("  • {value}")));
	}
	lines.push(Line::default());
}

/// Text of the popup, top to bottom.
#[must_use]
pub fn detail_lines<'l>(view: &DetailView<'_>, theme: &Theme) -> Vec<Line<'l>> {
	let record = view.record;
	let mut lines = vec![Line::styled(
		record.industry.clone(),
		theme.prompt.add_modifier(Modifier::BOLD),
	)];

	let mut facts = Vec::new();
	if let Some(category) = view.category {
		facts.push(Span::raw(category.to_string()));
	}
	if let Some(growth) = record.growth_potential {
		if !facts.is_empty() {
			facts.push(Span::styled(" · ", theme.empty));
		}
		facts.push(Span::styled(format!("{growth} growth"), theme.highlight));
	}
	lines.push(Line::from(facts));
	lines.push(Line::default());

	section(&mut lines, "Business types", &record.business_types, theme);
	section(&mut lines, "Software features", &record.software_features, theme);
	section(&mut lines, "Examples", &record.examples, theme);
	section(&mut lines, "Target markets", &record.target_locations, theme);

	lines.push(Line::from(vec![
		Span::styled("Share: ", theme.header),
		Span::raw(share_url(view.share_base_url, &record.industry)),
	]));
	lines
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
#[must_use]
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
		.flex(Flex::Center)
		.areas(row);
	popup
}

/// Draw the popup over whatever is already rendered.
pub fn render_detail(frame: &mut Frame, area: Rect, view: &DetailView<'_>, theme: &Theme) {
	let popup = centered(area, 70, 80);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border(true))
		.title(view.title.to_string())
		.title_bottom(Line::styled(" Esc to close ", theme.empty).right_aligned());
	let paragraph = Paragraph::new(detail_lines(view, theme))
		.block(block)
		.wrap(Wrap { trim: false });

	frame.render_widget(Clear, popup);
	frame.render_widget(paragraph, popup);
}
