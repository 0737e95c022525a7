use ratatui::style::{Color, Style};

/// Styles applied to the elements of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders, table headers and facet headings.
	pub header: Style,
	/// The selected results row or facet entry.
	pub row_highlight: Style,
	/// The search prompt.
	pub prompt: Style,
	/// Empty-state and status text.
	pub empty: Style,
	/// Selected facet markers and the focused pane's border.
	pub highlight: Style,
}

impl Theme {
	/// Border style for a pane, brighter when it holds focus.
	#[must_use]
	pub fn border(&self, focused: bool) -> Style {
		if focused {
			Style::new().fg(self.highlight.fg.unwrap_or(Color::Reset))
		} else {
			Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
		}
	}
}

/// A theme paired with the name used to select it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistration {
	pub name: &'static str,
	pub theme: Theme,
}
