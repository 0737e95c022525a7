//! Core state container for the browser.
//!
//! [`App`] owns the directory being browsed together with the filter state
//! and every UI cache derived from it.

use sectora_core::{DEFAULT_SUGGESTION_LIMIT, Directory, FilterState, FilterUpdate, IndustryRecord};

use super::facets::FacetPanel;
use super::results::ResultsState;
use super::suggestions::SuggestionState;
use crate::BrowseOutcome;
use crate::components::facet_entries;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

/// The pane receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	Facets,
	Results,
}

impl Focus {
	pub(crate) fn next(self, sidebar_visible: bool) -> Self {
		match self {
			Self::Search if sidebar_visible => Self::Facets,
			Self::Search | Self::Facets => Self::Results,
			Self::Results => Self::Search,
		}
	}

	pub(crate) fn previous(self, sidebar_visible: bool) -> Self {
		match self {
			Self::Search => Self::Results,
			Self::Results if sidebar_visible => Self::Facets,
			Self::Results | Self::Facets => Self::Search,
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) directory: Directory,
	/// Text input widget for the search query.
	pub search_input: QueryInput<'a>,
	pub(crate) state: FilterState,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) focus: Focus,
	pub(crate) results: ResultsState,
	pub(crate) facets: FacetPanel,
	pub(crate) suggestions: SuggestionState,
	pub(crate) suggestion_limit: usize,
	/// Dataset index of the record shown in the detail popup.
	pub(crate) detail: Option<usize>,
	pub(crate) sidebar_visible: bool,
}

impl<'a> App<'a> {
	/// Construct an [`App`] browsing every record of `directory`.
	pub fn new(directory: Directory) -> Self {
		let facets = FacetPanel::new(facet_entries(directory.facet_counts()));
		let mut app = Self {
			directory,
			search_input: QueryInput::new(""),
			state: FilterState::new(),
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			focus: Focus::default(),
			results: ResultsState::default(),
			facets,
			suggestions: SuggestionState::default(),
			suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
			detail: None,
			sidebar_visible: true,
		};
		app.refresh_results();
		app
	}

	/// Start with `query` already typed into the search input.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input.set_text(query.clone());
		self.apply(FilterUpdate::SetQuery(query));
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.ui = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.set_theme(theme);
		self
	}

	/// Cap the autocomplete dropdown at `limit` entries.
	#[must_use]
	pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
		self.suggestion_limit = limit;
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	#[must_use]
	pub fn filter_state(&self) -> &FilterState {
		&self.state
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Apply `update` and recompute the results if anything changed.
	pub(crate) fn apply(&mut self, update: FilterUpdate) -> bool {
		let changed = self.state.apply(update);
		if changed {
			self.refresh_results();
		}
		changed
	}

	fn refresh_results(&mut self) {
		let filtered = self.directory.filter_indices(&self.state);
		log::debug!(
			"{} of {} records visible for {:?}",
			filtered.len(),
			self.directory.records().len(),
			self.state.search_query
		);
		self.results.set_filtered(filtered);
	}

	/// Sync the filter with the input after the user edited it.
	pub(crate) fn query_edited(&mut self) {
		let query = self.search_input.text().to_string();
		let items = self
			.directory
			.suggest(&query, self.suggestion_limit)
			.into_iter()
			.map(str::to_string)
			.collect();
		self.suggestions.refresh(items);
		self.apply(FilterUpdate::SetQuery(query));
	}

	/// Replace the query with the highlighted suggestion.
	pub(crate) fn accept_suggestion(&mut self) -> bool {
		let Some(suggestion) = self.suggestions.current().map(str::to_string) else {
			return false;
		};
		self.search_input.set_text(suggestion.clone());
		self.suggestions.close();
		self.apply(FilterUpdate::SetQuery(suggestion));
		true
	}

	pub(crate) fn toggle_current_facet(&mut self) {
		if let Some(entry) = self.facets.current().cloned() {
			self.apply(FilterUpdate::Toggle(entry.facet, entry.value));
		}
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		if focus != Focus::Search {
			self.suggestions.close();
		}
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
	}

	pub(crate) fn open_detail(&mut self) {
		self.detail = self.results.selected_record();
	}

	pub(crate) fn detail_record(&self) -> Option<&IndustryRecord> {
		self.detail.and_then(|index| self.directory.records().get(index))
	}

	/// Number of records currently visible.
	pub(crate) fn filtered_len(&self) -> usize {
		self.results.filtered_len()
	}

	pub(crate) fn outcome(&self, keep_selection: bool) -> BrowseOutcome {
		let selection = keep_selection
			.then(|| self.results.selected_record())
			.flatten()
			.and_then(|index| self.directory.records().get(index))
			.cloned();
		BrowseOutcome {
			query: self.state.search_query.clone(),
			filters: self.state.filters.clone(),
			selection,
		}
	}
}
