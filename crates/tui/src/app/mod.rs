//! Core application state and behavior for the browser.
//!
//! The [`App`] type aggregates the directory, filter state and UI caches.
//! Input handling lives in `actions` and drawing in `render`.

mod actions;
mod facets;
mod render;
mod results;
mod state;
mod suggestions;

pub use state::{App, Focus};

#[cfg(test)]
pub(crate) fn test_app() -> App<'static> {
	use sectora_core::{CategoryStrategy, Dataset, Directory};

	let dataset = Dataset::bundled().expect("bundled dataset").into_dataset();
	App::new(Directory::new(dataset, CategoryStrategy::Keyed))
}
