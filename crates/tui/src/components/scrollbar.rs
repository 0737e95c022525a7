//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of lines in the content.
	pub content_length: usize,
	/// Number of lines visible in the viewport.
	pub viewport_len: usize,
	/// Largest valid scroll offset.
	pub max_scroll: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Smallest offset that keeps `line` inside the viewport, starting from `offset`.
	#[must_use]
	pub fn follow(&self, offset: usize, line: usize) -> usize {
		if self.viewport_len == 0 {
			return 0;
		}
		let offset = if line < offset {
			line
		} else if line >= offset + self.viewport_len {
			line + 1 - self.viewport_len
		} else {
			offset
		};
		offset.min(self.max_scroll)
	}

	/// Scrollbar state matching `offset`.
	#[must_use]
	pub fn state(&self, offset: usize) -> ScrollbarState {
		if !self.needs_scrollbar {
			return ScrollbarState::default();
		}
		let position = offset.saturating_mul(self.content_length - 1) / self.max_scroll.max(1);
		ScrollbarState::new(self.content_length)
			.viewport_content_length(self.viewport_len)
			.position(position)
	}
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)));

	let bar_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar_area, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
