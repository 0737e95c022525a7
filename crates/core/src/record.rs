//! Typed industry records and their growth classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Market growth label attached to an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrowthPotential {
	#[serde(rename = "Very High")]
	VeryHigh,
	#[serde(rename = "High")]
	High,
	#[serde(rename = "Medium")]
	Medium,
}

impl GrowthPotential {
	/// Every level, in the order the facet is presented.
	pub const ALL: [GrowthPotential; 3] = [Self::VeryHigh, Self::High, Self::Medium];

	/// Display label used by the dataset and the filter sidebar.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::VeryHigh => "Very High",
			Self::High => "High",
			Self::Medium => "Medium",
		}
	}
}

impl fmt::Display for GrowthPotential {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a label is not one of the known growth levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown growth potential '{0}'")]
pub struct UnknownGrowthPotential(pub String);

impl FromStr for GrowthPotential {
	type Err = UnknownGrowthPotential;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
			.ok_or_else(|| UnknownGrowthPotential(value.to_string()))
	}
}

/// One entry in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IndustryRecord {
	pub industry: String,
	pub business_types: Vec<String>,
	pub software_features: Vec<String>,
	pub examples: Vec<String>,
	pub target_locations: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub growth_potential: Option<GrowthPotential>,
	/// Dataset grouping key the record was loaded under.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_key: Option<String>,
}

impl IndustryRecord {
	/// Create a record with only its display name set.
	#[must_use]
	pub fn new(industry: impl Into<String>) -> Self {
		Self {
			industry: industry.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_business_types<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.business_types = values.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_software_features<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.software_features = values.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_examples<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.examples = values.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_target_locations<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.target_locations = values.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_growth_potential(mut self, growth: GrowthPotential) -> Self {
		self.growth_potential = Some(growth);
		self
	}

	#[must_use]
	pub fn with_category_key(mut self, key: impl Into<String>) -> Self {
		self.category_key = Some(key.into());
		self
	}

	/// Whether the record lists `location` among its target markets.
	#[must_use]
	pub fn targets(&self, location: &str) -> bool {
		self.target_locations.iter().any(|loc| loc == location)
	}

	/// Every searchable text field, industry name first.
	pub fn search_fields(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.industry.as_str())
			.chain(self.business_types.iter().map(String::as_str))
			.chain(self.software_features.iter().map(String::as_str))
			.chain(self.examples.iter().map(String::as_str))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn growth_labels_parse_case_insensitively() {
		assert_eq!("very high".parse::<GrowthPotential>(), Ok(GrowthPotential::VeryHigh));
		assert_eq!(" Medium ".parse::<GrowthPotential>(), Ok(GrowthPotential::Medium));
		assert_eq!(
			"Explosive".parse::<GrowthPotential>(),
			Err(UnknownGrowthPotential("Explosive".into()))
		);
	}

	#[test]
	fn growth_serializes_with_display_labels() {
		let json = serde_json::to_string(&GrowthPotential::VeryHigh).expect("serialize");
		assert_eq!(json, "\"Very High\"");
	}

	#[test]
	fn search_fields_cover_every_text_column() {
		let record = IndustryRecord::new("FinTech")
			.with_business_types(["Digital Banks"])
			.with_software_features(["Payment Processing Engine"])
			.with_examples(["Stripe"])
			.with_target_locations(["urban"]);

		let fields: Vec<_> = record.search_fields().collect();
		assert_eq!(
			fields,
			["FinTech", "Digital Banks", "Payment Processing Engine", "Stripe"]
		);
		assert!(record.targets("urban"));
		assert!(!record.targets("rural"));
	}
}
