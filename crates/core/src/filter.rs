//! The result filter: which records are visible for a query and selection.
//!
//! Every predicate is default-open: an empty query or an empty facet
//! selection admits every record. Results keep the source order.

use crate::category::CategoryStrategy;
use crate::record::IndustryRecord;
use crate::state::ActiveFilters;

/// A query and facet selection compiled for repeated matching.
#[derive(Debug, Clone)]
pub struct RecordFilter<'f> {
	needle: String,
	filters: &'f ActiveFilters,
	strategy: CategoryStrategy,
}

impl<'f> RecordFilter<'f> {
	#[must_use]
	pub fn new(query: &str, filters: &'f ActiveFilters) -> Self {
		Self {
			needle: query.to_lowercase(),
			filters,
			strategy: CategoryStrategy::default(),
		}
	}

	/// Use `strategy` to derive each record's category for the category facet.
	#[must_use]
	pub fn with_strategy(mut self, strategy: CategoryStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	/// Whether `record` satisfies every active predicate.
	#[must_use]
	pub fn matches(&self, record: &IndustryRecord) -> bool {
		self.matches_search(record)
			&& self.matches_location(record)
			&& self.matches_category(record)
			&& self.matches_growth(record)
	}

	fn matches_search(&self, record: &IndustryRecord) -> bool {
		self.needle.is_empty()
			|| record
				.search_fields()
				.any(|field| field.to_lowercase().contains(&self.needle))
	}

	fn matches_location(&self, record: &IndustryRecord) -> bool {
		let locations = &self.filters.locations;
		locations.is_empty() || locations.iter().any(|location| record.targets(location))
	}

	fn matches_category(&self, record: &IndustryRecord) -> bool {
		let categories = &self.filters.categories;
		categories.is_empty()
			|| self
				.strategy
				.categorize(record)
				.is_some_and(|label| categories.contains(&*label))
	}

	fn matches_growth(&self, record: &IndustryRecord) -> bool {
		let growth = &self.filters.growth_potential;
		growth.is_empty()
			|| record
				.growth_potential
				.is_some_and(|level| growth.contains(&level))
	}

	/// Matching records, in source order.
	#[must_use]
	pub fn apply<'r>(&self, records: &'r [IndustryRecord]) -> Vec<&'r IndustryRecord> {
		records.iter().filter(|record| self.matches(record)).collect()
	}

	/// Positions of matching records within `records`.
	#[must_use]
	pub fn indices(&self, records: &[IndustryRecord]) -> Vec<usize> {
		records
			.iter()
			.enumerate()
			.filter(|(_, record)| self.matches(record))
			.map(|(index, _)| index)
			.collect()
	}
}

/// Records matching `query` and `filters` under the default category strategy.
#[must_use]
pub fn filter_records<'r>(
	records: &'r [IndustryRecord],
	query: &str,
	filters: &ActiveFilters,
) -> Vec<&'r IndustryRecord> {
	RecordFilter::new(query, filters).apply(records)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::GrowthPotential;
	use crate::state::{Facet, FilterState, FilterUpdate};

	fn scenario() -> Vec<IndustryRecord> {
		vec![
			IndustryRecord::new("FinTech")
				.with_business_types(["Digital Banks"])
				.with_software_features(["Payment Processing Engine"])
				.with_examples(["Stripe"])
				.with_target_locations(["urban"])
				.with_growth_potential(GrowthPotential::VeryHigh)
				.with_category_key("wealthtech"),
			IndustryRecord::new("AgriTech")
				.with_business_types(["Farm Management"])
				.with_software_features(["Soil Monitoring"])
				.with_examples(["FarmLogs"])
				.with_target_locations(["rural"])
				.with_growth_potential(GrowthPotential::Medium)
				.with_category_key("agriculture"),
		]
	}

	fn names(records: &[&IndustryRecord]) -> Vec<String> {
		records.iter().map(|record| record.industry.clone()).collect()
	}

	fn with(updates: impl IntoIterator<Item = (Facet, &'static str)>) -> ActiveFilters {
		let mut state = FilterState::new();
		for (facet, value) in updates {
			state.apply(FilterUpdate::Toggle(facet, value.to_string()));
		}
		state.filters
	}

	#[test]
	fn no_query_and_no_filters_is_identity() {
		let records = scenario();
		let visible = filter_records(&records, "", &ActiveFilters::default());
		assert_eq!(visible, records.iter().collect::<Vec<_>>());
	}

	#[test]
	fn query_matches_any_text_field_case_insensitively() {
		let records = scenario();
		let none = ActiveFilters::default();
		assert_eq!(names(&filter_records(&records, "fin", &none)), ["FinTech"]);
		assert_eq!(names(&filter_records(&records, "SOIL", &none)), ["AgriTech"]);
		assert_eq!(names(&filter_records(&records, "stripe", &none)), ["FinTech"]);
		assert_eq!(names(&filter_records(&records, "banks", &none)), ["FinTech"]);
		assert_eq!(names(&filter_records(&records, "tech", &none)), ["FinTech", "AgriTech"]);
		assert!(filter_records(&records, "zzz", &none).is_empty());
	}

	#[test]
	fn location_filter_admits_any_selected_location() {
		let records = scenario();
		let rural = with([(Facet::Location, "rural")]);
		assert_eq!(names(&filter_records(&records, "", &rural)), ["AgriTech"]);

		let both = with([(Facet::Location, "rural"), (Facet::Location, "urban")]);
		assert_eq!(filter_records(&records, "", &both).len(), 2);
	}

	#[test]
	fn growth_filter_excludes_unclassified_records() {
		let mut records = scenario();
		records.push(IndustryRecord::new("Laundromats"));

		let very_high = with([(Facet::Growth, "Very High")]);
		assert_eq!(names(&filter_records(&records, "", &very_high)), ["FinTech"]);

		let open = ActiveFilters::default();
		assert_eq!(filter_records(&records, "", &open).len(), 3);
	}

	#[test]
	fn category_filter_uses_the_selected_strategy() {
		let records = scenario();
		let farming = with([(Facet::Category, "Agriculture & Farming")]);
		assert_eq!(names(&filter_records(&records, "", &farming)), ["AgriTech"]);

		let technology = with([(Facet::Category, "Technology")]);
		assert!(filter_records(&records, "", &technology).is_empty());
		let keyword = RecordFilter::new("", &technology).with_strategy(CategoryStrategy::Keyword);
		assert_eq!(names(&keyword.apply(&records)), ["FinTech", "AgriTech"]);
	}

	#[test]
	fn predicates_combine_with_and() {
		let records = scenario();
		let filters = with([(Facet::Location, "urban"), (Facet::Growth, "Medium")]);
		assert!(filter_records(&records, "", &filters).is_empty());
		let filters = with([(Facet::Location, "rural"), (Facet::Growth, "Medium")]);
		assert!(filter_records(&records, "fin", &filters).is_empty());
		assert_eq!(names(&filter_records(&records, "farm", &filters)), ["AgriTech"]);
	}

	#[test]
	fn results_are_an_ordered_subsequence_and_deterministic() {
		let records = scenario();
		let filters = ActiveFilters::default();
		let filter = RecordFilter::new("t", &filters);

		let indices = filter.indices(&records);
		assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
		assert_eq!(filter.apply(&records), filter.apply(&records));
		assert_eq!(
			indices.iter().map(|&i| &records[i]).collect::<Vec<_>>(),
			filter.apply(&records)
		);
	}
}
