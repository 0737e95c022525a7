//! Interactive terminal browser for the `sectora` industry directory.
//!
//! The crate wraps a [`sectora_core::Directory`] in an [`App`] that renders a
//! search box with autocomplete, a facet sidebar, the result table and a
//! detail popup, then runs the event loop until the user exits.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::{App, Focus};
pub use config::{DEFAULT_SHARE_BASE_URL, UiLabels};
pub use outcome::BrowseOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, by_name as theme_by_name, default_theme, names as theme_names};
