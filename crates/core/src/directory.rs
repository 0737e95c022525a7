//! A dataset paired with its derived facets and suggestions.

use crate::category::CategoryStrategy;
use crate::dataset::Dataset;
use crate::facets::{FacetCounts, Facets, derive_facets, facet_counts};
use crate::filter::RecordFilter;
use crate::record::IndustryRecord;
use crate::state::FilterState;
use crate::suggest::{build_suggestions, matching_suggestions};

/// Everything a front-end needs to browse one dataset.
///
/// Facets, counts and suggestions depend only on the immutable dataset, so
/// they are computed once here rather than on every keystroke.
#[derive(Debug, Clone)]
pub struct Directory {
	dataset: Dataset,
	strategy: CategoryStrategy,
	facets: Facets,
	facet_counts: FacetCounts,
	suggestions: Vec<String>,
}

impl Directory {
	#[must_use]
	pub fn new(dataset: Dataset, strategy: CategoryStrategy) -> Self {
		let facets = derive_facets(&dataset, strategy);
		let facet_counts = facet_counts(&dataset, &facets, strategy);
		let suggestions = build_suggestions(dataset.records());
		log::debug!(
			"directory ready: {} locations, {} categories, {} suggestions",
			facets.locations.len(),
			facets.categories.len(),
			suggestions.len()
		);

		Self {
			dataset,
			strategy,
			facets,
			facet_counts,
			suggestions,
		}
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	#[must_use]
	pub fn records(&self) -> &[IndustryRecord] {
		self.dataset.records()
	}

	#[must_use]
	pub fn strategy(&self) -> CategoryStrategy {
		self.strategy
	}

	#[must_use]
	pub fn facets(&self) -> &Facets {
		&self.facets
	}

	#[must_use]
	pub fn facet_counts(&self) -> &FacetCounts {
		&self.facet_counts
	}

	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}

	/// Autocomplete entries for `query`.
	#[must_use]
	pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
		matching_suggestions(&self.suggestions, query, limit)
	}

	fn record_filter<'f>(&self, state: &'f FilterState) -> RecordFilter<'f> {
		RecordFilter::new(&state.search_query, &state.filters).with_strategy(self.strategy)
	}

	/// Records visible under `state`, in dataset order.
	#[must_use]
	pub fn filter(&self, state: &FilterState) -> Vec<&IndustryRecord> {
		self.record_filter(state).apply(self.records())
	}

	/// Dataset positions of the records visible under `state`.
	#[must_use]
	pub fn filter_indices(&self, state: &FilterState) -> Vec<usize> {
		self.record_filter(state).indices(self.records())
	}

	/// Category label of `record` under this directory's strategy.
	#[must_use]
	pub fn category_of(&self, record: &IndustryRecord) -> Option<String> {
		self.strategy.categorize(record).map(|label| label.into_owned())
	}

	#[must_use]
	pub fn find(&self, name_or_slug: &str) -> Option<&IndustryRecord> {
		self.dataset.find(name_or_slug)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::{Facet, FilterUpdate};

	fn directory() -> Directory {
		let dataset = Dataset::bundled().expect("bundled dataset").into_dataset();
		Directory::new(dataset, CategoryStrategy::Keyed)
	}

	#[test]
	fn empty_state_shows_everything() {
		let directory = directory();
		assert_eq!(directory.filter(&FilterState::new()).len(), directory.records().len());
	}

	#[test]
	fn indices_and_records_agree() {
		let directory = directory();
		let mut state = FilterState::new().with_query("management");
		state.apply(FilterUpdate::Toggle(Facet::Location, "urban".into()));

		let records = directory.filter(&state);
		let indices = directory.filter_indices(&state);
		assert_eq!(records.len(), indices.len());
		for (record, index) in records.iter().zip(indices) {
			assert_eq!(*record, &directory.records()[index]);
		}
	}

	#[test]
	fn every_category_facet_value_selects_something() {
		let directory = directory();
		for category in &directory.facets().categories {
			let mut state = FilterState::new();
			state.apply(FilterUpdate::Toggle(Facet::Category, category.clone()));
			assert!(
				!directory.filter(&state).is_empty(),
				"category {category} matched nothing"
			);
		}
	}

	#[test]
	fn suggestions_are_memoized_from_the_dataset() {
		let directory = directory();
		assert_eq!(directory.suggestions(), build_suggestions(directory.records()));
		assert!(directory.suggest("", 8).is_empty());
	}
}
