//! Visual styling for the browser.
//!
//! Themes hold the color scheme. [`StyleConfig`] wraps the active theme so
//! further appearance settings have somewhere to live.

pub mod theme;

pub use theme::{DEFAULT_THEME, Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
