pub(crate) mod layout;

use layout::{resolve_column_widths, screen_areas};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{App, Focus};
use crate::components::rows::{RESULT_HEADERS, build_result_rows, result_widths};
use crate::components::{
	DetailView, FacetView, TableSpec, render_detail, render_facets, render_suggestions, render_table,
};

const PROMPT: &str = "› ";
const KEY_HINTS: &str = "Tab focus · Enter select · Ctrl-X clear · Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let areas = screen_areas(area);
		self.sidebar_visible = areas.sidebar.is_some();
		if !self.sidebar_visible && self.focus == Focus::Facets {
			self.set_focus(Focus::Results);
		}

		self.render_input(frame, areas.input);
		if let Some(sidebar) = areas.sidebar {
			self.render_sidebar(frame, sidebar);
		}
		self.render_results(frame, areas.results);
		self.render_status(frame, areas.status);

		if self.focus == Focus::Search && self.suggestions.is_visible() {
			let anchor = areas.input.inner(Margin {
				vertical: 0,
				horizontal: 1,
			});
			render_suggestions(
				frame,
				anchor,
				area,
				&self.suggestions.items,
				self.suggestions.selected,
				&self.style.theme,
			);
		}

		if let Some(record) = self.detail_record() {
			let category = self.directory.category_of(record);
			let view = DetailView {
				record,
				category: category.as_deref(),
				title: &self.ui.detail_title,
				share_base_url: &self.ui.share_base_url,
			};
			render_detail(frame, area, &view, &self.style.theme);
		}
	}

	fn render_input(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border(self.focus == Focus::Search))
			.title(self.ui.input_title.clone());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [prompt, text] =
			Layout::horizontal([Constraint::Length(PROMPT.chars().count() as u16), Constraint::Fill(1)])
				.areas(inner);
		frame.render_widget(Paragraph::new(Span::styled(PROMPT, theme.prompt)), prompt);
		frame.render_widget(self.search_input.widget(), text);
	}

	fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
		let view = FacetView {
			entries: &self.facets.entries,
			filters: &self.state.filters,
			cursor: self.facets.cursor,
			title: &self.ui.facets_title,
			focused: self.focus == Focus::Facets,
		};
		render_facets(frame, area, &view, &mut self.facets.offset, &self.style.theme);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let focused = self.focus == Focus::Results;

		if self.filtered_len() == 0 {
			let block = Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(theme.border(focused))
				.title(self.ui.results_title.clone());
			let inner = block.inner(area);
			frame.render_widget(block, area);
			if inner.height > 0 {
				let message = Rect {
					y: inner.y + inner.height / 2,
					height: 1,
					..inner
				};
				let empty = Paragraph::new("No industries found")
					.alignment(Alignment::Center)
					.style(theme.empty);
				frame.render_widget(empty, message);
			}
			return;
		}

		let widths = result_widths();
		let column_widths = resolve_column_widths(area, &widths);
		self.results
			.update_scrollbar(area.height.saturating_sub(2) as usize);
		let rows = build_result_rows(
			&self.directory,
			&self.results.filtered,
			&self.state.search_query,
			theme.highlight,
			Some(&column_widths),
		);

		let spec = TableSpec {
			headers: RESULT_HEADERS.iter().map(|header| header.to_string()).collect(),
			widths,
			rows,
			title: Some(self.ui.results_title.clone()),
			focused,
		};
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&theme,
		);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let filters = self.state.active_filter_count();
		let noun = if filters == 1 { "filter" } else { "filters" };
		let summary = format!(
			"{} of {} industries · {filters} {noun} active",
			self.filtered_len(),
			self.directory.records().len()
		);
		let hints_width = KEY_HINTS.chars().count() as u16;
		if area.width <= hints_width + 40 {
			frame.render_widget(Paragraph::new(Line::styled(summary, theme.empty)), area);
			return;
		}
		let [left, right] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Length(hints_width)]).areas(area);
		frame.render_widget(Paragraph::new(Line::styled(summary, theme.empty)), left);
		frame.render_widget(Paragraph::new(Line::styled(KEY_HINTS, theme.empty)), right);
	}
}
