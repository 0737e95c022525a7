//! Query and facet selections driven by user interaction.
//!
//! [`FilterState`] is owned by whichever front-end is running and only changes
//! through [`FilterState::apply`], which reports whether anything changed so
//! callers can skip recomputing results.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::record::GrowthPotential;

/// A filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
	Location,
	Category,
	Growth,
}

impl Facet {
	pub const ALL: [Facet; 3] = [Self::Location, Self::Category, Self::Growth];

	/// Heading shown above the facet in the sidebar.
	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::Location => "Target Locations",
			Self::Category => "Categories",
			Self::Growth => "Growth Potential",
		}
	}
}

impl fmt::Display for Facet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.title())
	}
}

/// Facet values currently selected. An empty set leaves that facet open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveFilters {
	pub locations: BTreeSet<String>,
	pub categories: BTreeSet<String>,
	pub growth_potential: BTreeSet<GrowthPotential>,
}

impl ActiveFilters {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}

	/// Number of selected values across every facet.
	#[must_use]
	pub fn count(&self) -> usize {
		self.locations.len() + self.categories.len() + self.growth_potential.len()
	}

	/// Whether `value` is selected for `facet`.
	#[must_use]
	pub fn contains(&self, facet: Facet, value: &str) -> bool {
		match facet {
			Facet::Location => self.locations.contains(value),
			Facet::Category => self.categories.contains(value),
			Facet::Growth => GrowthPotential::from_str(value)
				.is_ok_and(|level| self.growth_potential.contains(&level)),
		}
	}

	/// Select `value` if unselected, otherwise deselect it.
	///
	/// Returns `false` when `value` is not a valid growth label.
	pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
		match facet {
			Facet::Location => toggle_in(&mut self.locations, value.to_string()),
			Facet::Category => toggle_in(&mut self.categories, value.to_string()),
			Facet::Growth => match value.parse::<GrowthPotential>() {
				Ok(level) => toggle_in(&mut self.growth_potential, level),
				Err(err) => {
					log::debug!("ignoring growth filter: {err}");
					return false;
				}
			},
		}
		true
	}

	pub fn clear(&mut self) {
		self.locations.clear();
		self.categories.clear();
		self.growth_potential.clear();
	}
}

fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T) {
	if set.contains(&value) {
		set.remove(&value);
	} else {
		set.insert(value);
	}
}

/// A single user-driven change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
	SetQuery(String),
	Toggle(Facet, String),
	/// Drop every facet selection but keep the query.
	ClearFilters,
	/// Drop the query and every facet selection.
	Reset,
}

/// The query plus facet selections that determine the visible records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
	pub search_query: String,
	pub filters: ActiveFilters,
}

impl FilterState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.search_query = query.into();
		self
	}

	/// Apply `update`, returning whether the state changed.
	pub fn apply(&mut self, update: FilterUpdate) -> bool {
		let before = self.clone();
		match update {
			FilterUpdate::SetQuery(query) => self.search_query = query,
			FilterUpdate::Toggle(facet, value) => {
				self.filters.toggle(facet, &value);
			}
			FilterUpdate::ClearFilters => self.filters.clear(),
			FilterUpdate::Reset => {
				self.search_query.clear();
				self.filters.clear();
			}
		}
		*self != before
	}

	/// Number of selected facet values.
	#[must_use]
	pub fn active_filter_count(&self) -> usize {
		self.filters.count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_twice_restores_the_selection() {
		let mut state = FilterState::new();
		assert!(state.apply(FilterUpdate::Toggle(Facet::Location, "rural".into())));
		assert!(state.filters.contains(Facet::Location, "rural"));
		assert!(state.apply(FilterUpdate::Toggle(Facet::Location, "rural".into())));
		assert_eq!(state, FilterState::new());
	}

	#[test]
	fn growth_toggles_parse_labels() {
		let mut state = FilterState::new();
		assert!(state.apply(FilterUpdate::Toggle(Facet::Growth, "Very High".into())));
		assert!(state.filters.contains(Facet::Growth, "very high"));
		assert!(!state.apply(FilterUpdate::Toggle(Facet::Growth, "Stellar".into())));
		assert_eq!(state.active_filter_count(), 1);
	}

	#[test]
	fn clearing_filters_keeps_the_query() {
		let mut state = FilterState::new().with_query("bank");
		state.apply(FilterUpdate::Toggle(Facet::Category, "Wealth & Finance".into()));
		state.apply(FilterUpdate::Toggle(Facet::Location, "urban".into()));
		assert_eq!(state.active_filter_count(), 2);

		assert!(state.apply(FilterUpdate::ClearFilters));
		assert_eq!(state.search_query, "bank");
		assert!(state.filters.is_empty());
		assert!(!state.apply(FilterUpdate::ClearFilters));

		assert!(state.apply(FilterUpdate::Reset));
		assert_eq!(state, FilterState::new());
	}

	#[test]
	fn unchanged_query_reports_no_change() {
		let mut state = FilterState::new().with_query("farm");
		assert!(!state.apply(FilterUpdate::SetQuery("farm".into())));
		assert!(state.apply(FilterUpdate::SetQuery("farms".into())));
	}
}
