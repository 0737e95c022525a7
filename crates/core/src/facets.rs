//! Filterable facet values derived from the dataset.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::category::{CategoryStrategy, label_for_key};
use crate::dataset::Dataset;
use crate::record::{GrowthPotential, IndustryRecord};

/// Distinct values offered by the location and category facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
	pub locations: Vec<String>,
	pub categories: Vec<String>,
}

impl Facets {
	/// Growth levels are fixed rather than derived.
	#[must_use]
	pub fn growth(&self) -> [GrowthPotential; 3] {
		GrowthPotential::ALL
	}
}

/// Sorted union of every record's target locations.
#[must_use]
pub fn location_facet(records: &[IndustryRecord]) -> Vec<String> {
	records
		.iter()
		.flat_map(|record| record.target_locations.iter().cloned())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

/// Sorted, deduplicated category labels under `strategy`.
#[must_use]
pub fn category_facet(dataset: &Dataset, strategy: CategoryStrategy) -> Vec<String> {
	let labels: BTreeSet<String> = match strategy {
		CategoryStrategy::Keyed => dataset
			.category_keys()
			.iter()
			.map(|key| label_for_key(key).into_owned())
			.collect(),
		CategoryStrategy::Keyword => dataset
			.records()
			.iter()
			.filter_map(|record| strategy.categorize(record))
			.map(|label| label.into_owned())
			.collect(),
	};
	labels.into_iter().collect()
}

/// Derive the location and category facets for `dataset`.
#[must_use]
pub fn derive_facets(dataset: &Dataset, strategy: CategoryStrategy) -> Facets {
	Facets {
		locations: location_facet(dataset.records()),
		categories: category_facet(dataset, strategy),
	}
}

/// A facet value with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
	pub value: String,
	pub count: usize,
}

impl FacetOption {
	#[must_use]
	pub fn new(value: impl Into<String>, count: usize) -> Self {
		Self {
			value: value.into(),
			count,
		}
	}
}

/// Facet values with per-value record counts, in facet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
	pub locations: Vec<FacetOption>,
	pub categories: Vec<FacetOption>,
	pub growth: Vec<FacetOption>,
}

/// Count how many records carry each value of `facets`.
#[must_use]
pub fn facet_counts(dataset: &Dataset, facets: &Facets, strategy: CategoryStrategy) -> FacetCounts {
	let mut locations: BTreeMap<&str, usize> = BTreeMap::new();
	let mut categories: BTreeMap<String, usize> = BTreeMap::new();
	let mut growth: BTreeMap<GrowthPotential, usize> = BTreeMap::new();

	for record in dataset.records() {
		let distinct: BTreeSet<&str> = record
			.target_locations
			.iter()
			.map(String::as_str)
			.collect();
		for location in distinct {
			*locations.entry(location).or_default() += 1;
		}
		if let Some(label) = strategy.categorize(record) {
			*categories.entry(label.into_owned()).or_default() += 1;
		}
		if let Some(level) = record.growth_potential {
			*growth.entry(level).or_default() += 1;
		}
	}

	FacetCounts {
		locations: facets
			.locations
			.iter()
			.map(|value| {
				FacetOption::new(value.clone(), locations.get(value.as_str()).copied().unwrap_or(0))
			})
			.collect(),
		categories: facets
			.categories
			.iter()
			.map(|value| {
				FacetOption::new(value.clone(), categories.get(value).copied().unwrap_or(0))
			})
			.collect(),
		growth: facets
			.growth()
			.into_iter()
			.map(|level| FacetOption::new(level.as_str(), growth.get(&level).copied().unwrap_or(0)))
			.collect(),
	}
}
