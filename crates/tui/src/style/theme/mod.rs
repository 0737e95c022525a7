mod types;

use ratatui::style::{Color, Modifier, Style};

pub use types::{Theme, ThemeRegistration};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "default";

const DEFAULT: Theme = Theme {
	header: Style::new().fg(Color::Blue),
	row_highlight: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Indexed(25)),
	row_highlight: Style::new().bg(Color::Indexed(254)).add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Indexed(30)).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Indexed(244)),
	highlight: Style::new().fg(Color::Indexed(166)).add_modifier(Modifier::BOLD),
};

const BUILTINS: [ThemeRegistration; 2] = [
	ThemeRegistration {
		name: DEFAULT_THEME,
		theme: DEFAULT,
	},
	ThemeRegistration {
		name: "light",
		theme: LIGHT,
	},
];

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	&BUILTINS
}

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	DEFAULT
}

/// Look up a theme by name, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|registration| registration.name.eq_ignore_ascii_case(name))
		.map(|registration| registration.theme)
}

/// Names of every built-in theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|registration| registration.name).collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_whitespace() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("DEFAULT"), Some(Theme::default()));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_lists_every_builtin() {
		assert_eq!(names(), ["default", "light"]);
	}
}
