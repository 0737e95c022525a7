//! Loading the bundled industry resource into typed records.
//!
//! The resource groups records by category key. A group is either a single
//! record object or a mapping of industry keys to records; both shapes are
//! accepted and document order is preserved. Problems with individual
//! records are collected as [`Diagnostic`]s instead of failing the load.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{DatasetError, Diagnostic, DiagnosticKind};
use crate::record::{GrowthPotential, IndustryRecord};
use crate::share::industry_slug;

/// Dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/business-software.json");

/// Counts reported by the resource's metadata block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
	pub total_industries: usize,
	pub total_categories: usize,
}

/// Optional market overview shipped alongside the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInsights {
	#[serde(deserialize_with = "nullable_list")]
	pub high_growth_sectors: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	pub emerging_tech_categories: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	pub untapped_markets: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	pub digital_adoption_challenges: Vec<String>,
	pub geographic_opportunities: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
	#[serde(default)]
	metadata: Metadata,
	#[serde(default)]
	industry_specific_software: IndexMap<String, Value>,
	#[serde(default)]
	market_insights: Option<MarketInsights>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
	industry: Option<String>,
	#[serde(deserialize_with = "nullable_list")]
	business_types: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	software_features: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	examples: Vec<String>,
	#[serde(deserialize_with = "nullable_list")]
	target_locations: Vec<String>,
	growth_potential: Option<String>,
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The immutable collection of records the directory is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
	metadata: Metadata,
	category_keys: Vec<String>,
	records: Vec<IndustryRecord>,
	insights: Option<MarketInsights>,
}

/// A loaded dataset together with the records that needed attention.
#[derive(Debug, Clone)]
pub struct LoadReport {
	pub dataset: Dataset,
	pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
	/// Number of records dropped while loading.
	#[must_use]
	pub fn skipped(&self) -> usize {
		self.diagnostics.iter().filter(|d| d.skipped()).count()
	}

	#[must_use]
	pub fn into_dataset(self) -> Dataset {
		self.dataset
	}
}

impl Dataset {
	/// Build a dataset directly from records, deriving category keys from
	/// the records' own keys in order of first appearance.
	#[must_use]
	pub fn from_records(records: Vec<IndustryRecord>) -> Self {
		let mut seen = HashSet::new();
		let category_keys: Vec<String> = records
			.iter()
			.filter_map(|record| record.category_key.clone())
			.filter(|key| seen.insert(key.clone()))
			.collect();
		let metadata = Metadata {
			total_industries: records.len(),
			total_categories: category_keys.len(),
		};

		Self {
			metadata,
			category_keys,
			records,
			insights: None,
		}
	}

	/// Load the dataset compiled into the binary.
	pub fn bundled() -> Result<LoadReport, DatasetError> {
		Self::from_json_str(BUNDLED_DATASET)
	}

	/// Read and decode a dataset file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<LoadReport, DatasetError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		log::debug!("read dataset from {}", path.display());
		Self::from_json_str(&contents)
	}

	/// Decode a dataset from its JSON text.
	pub fn from_json_str(json: &str) -> Result<LoadReport, DatasetError> {
		let raw: RawDataset = serde_json::from_str(json)?;
		Ok(Self::from_raw(raw))
	}

	fn from_raw(raw: RawDataset) -> LoadReport {
		let mut diagnostics = Vec::new();
		let mut records = Vec::new();
		let mut names = HashSet::new();
		let mut category_keys = Vec::with_capacity(raw.industry_specific_software.len());

		for (category, group) in raw.industry_specific_software {
			for (location, value) in group_entries(&category, group) {
				let Some(record) = decode_record(&category, &location, value, &mut diagnostics)
				else {
					continue;
				};
				if !names.insert(record.industry.clone()) {
					diagnostics.push(Diagnostic::new(
						location,
						DiagnosticKind::DuplicateIndustry(record.industry),
					));
					continue;
				}
				records.push(record);
			}
			category_keys.push(category);
		}

		for diagnostic in &diagnostics {
			log::warn!("{diagnostic}");
		}

		let dataset = Self {
			metadata: raw.metadata,
			category_keys,
			records,
			insights: raw.market_insights,
		};

		let summary = dataset.summary();
		if summary != dataset.metadata {
			log::warn!(
				"dataset metadata reports {} industries in {} categories but {} and {} were loaded",
				dataset.metadata.total_industries,
				dataset.metadata.total_categories,
				summary.total_industries,
				summary.total_categories,
			);
		}
		log::info!(
			"loaded {} industries across {} categories",
			summary.total_industries,
			summary.total_categories
		);

		LoadReport {
			dataset,
			diagnostics,
		}
	}

	/// Counts as reported by the resource.
	#[must_use]
	pub fn metadata(&self) -> Metadata {
		self.metadata
	}

	/// Counts of what was actually loaded.
	#[must_use]
	pub fn summary(&self) -> Metadata {
		Metadata {
			total_industries: self.records.len(),
			total_categories: self.category_keys.len(),
		}
	}

	#[must_use]
	pub fn records(&self) -> &[IndustryRecord] {
		&self.records
	}

	/// Category keys in document order.
	#[must_use]
	pub fn category_keys(&self) -> &[String] {
		&self.category_keys
	}

	#[must_use]
	pub fn insights(&self) -> Option<&MarketInsights> {
		self.insights.as_ref()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Resolve a share-link slug back to its record.
	#[must_use]
	pub fn find_by_slug(&self, slug: &str) -> Option<&IndustryRecord> {
		self.records
			.iter()
			.find(|record| industry_slug(&record.industry) == slug)
	}

	/// Look a record up by display name (case-insensitive) or by slug.
	#[must_use]
	pub fn find(&self, name_or_slug: &str) -> Option<&IndustryRecord> {
		let needle = name_or_slug.trim();
		self.records
			.iter()
			.find(|record| record.industry.eq_ignore_ascii_case(needle))
			.or_else(|| self.find_by_slug(&needle.to_lowercase()))
	}
}

const RECORD_FIELDS: [&str; 6] = [
	"industry",
	"business_types",
	"software_features",
	"examples",
	"target_locations",
	"growth_potential",
];

/// Whether a category group holds keyed records rather than being one.
///
/// A group carrying any record field is a single record. Otherwise it is
/// nested as soon as one entry is an object, and every entry becomes a
/// record of its own.
fn is_nested_group(map: &serde_json::Map<String, Value>) -> bool {
	!map.keys().any(|key| RECORD_FIELDS.contains(&key.as_str()))
		&& map.values().any(Value::is_object)
}

/// Split a category group into `(location, record value)` pairs.
fn group_entries(category: &str, group: Value) -> Vec<(String, Value)> {
	match group {
		Value::Object(map) if is_nested_group(&map) => map
			.into_iter()
			.map(|(key, value)| (format!("{category}/{key}"), value))
			.collect(),
		other => vec![(category.to_string(), other)],
	}
}

fn decode_record(
	category: &str,
	location: &str,
	value: Value,
	diagnostics: &mut Vec<Diagnostic>,
) -> Option<IndustryRecord> {
	let raw: RawRecord = match serde_json::from_value(value) {
		Ok(raw) => raw,
		Err(err) => {
			diagnostics.push(Diagnostic::new(
				location,
				DiagnosticKind::Malformed(err.to_string()),
			));
			return None;
		}
	};

	let industry = match raw.industry.map(|name| name.trim().to_string()) {
		Some(name) if !name.is_empty() => name,
		_ => {
			diagnostics.push(Diagnostic::new(location, DiagnosticKind::MissingIndustry));
			return None;
		}
	};

	let growth_potential = match raw.growth_potential.as_deref().map(str::trim) {
		None | Some("") => None,
		Some(label) => match label.parse::<GrowthPotential>() {
			Ok(growth) => Some(growth),
			Err(_) => {
				diagnostics.push(Diagnostic::new(
					location,
					DiagnosticKind::UnknownGrowthPotential(label.to_string()),
				));
				None
			}
		},
	};

	Some(IndustryRecord {
		industry,
		business_types: raw.business_types,
		software_features: raw.software_features,
		examples: raw.examples,
		target_locations: raw.target_locations,
		growth_potential,
		category_key: Some(category.to_string()),
	})
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	const FLAT: &str = r#"{
		"metadata": {"total_industries": 2, "total_categories": 2},
		"industry_specific_software": {
			"wealthtech": {
				"industry": "FinTech",
				"business_types": ["Digital Banks"],
				"software_features": ["Payment Processing Engine"],
				"examples": ["Stripe"],
				"target_locations": ["urban"],
				"growth_potential": "Very High"
			},
			"agriculture": {
				"industry": "AgriTech",
				"business_types": ["Farm Management"],
				"software_features": ["Soil Monitoring"],
				"examples": ["FarmLogs"],
				"target_locations": ["rural"],
				"growth_potential": "Medium"
			}
		}
	}"#;

	#[test]
	fn flat_groups_load_in_document_order() {
		let report = Dataset::from_json_str(FLAT).expect("dataset");
		assert!(report.diagnostics.is_empty());

		let dataset = report.into_dataset();
		let names: Vec<_> = dataset.records().iter().map(|r| r.industry.as_str()).collect();
		assert_eq!(names, ["FinTech", "AgriTech"]);
		assert_eq!(dataset.category_keys(), ["wealthtech", "agriculture"]);
		assert_eq!(dataset.records()[0].category_key.as_deref(), Some("wealthtech"));
		assert_eq!(
			dataset.records()[1].growth_potential,
			Some(GrowthPotential::Medium)
		);
		assert_eq!(dataset.summary(), dataset.metadata());
	}

	#[test]
	fn nested_groups_flatten_under_their_category() {
		let json = r#"{
			"metadata": {"total_industries": 3, "total_categories": 1},
			"industry_specific_software": {
				"healthcare": {
					"clinics": {"industry": "Clinics", "target_locations": ["urban"]},
					"dental": {"industry": "Dental Practices"},
					"pharmacy": {"industry": "Pharmacies", "examples": ["PioneerRx"]}
				}
			}
		}"#;

		let dataset = Dataset::from_json_str(json).expect("dataset").into_dataset();
		assert_eq!(dataset.records().len(), 3);
		assert!(
			dataset
				.records()
				.iter()
				.all(|r| r.category_key.as_deref() == Some("healthcare"))
		);
		assert_eq!(dataset.records()[2].examples, ["PioneerRx"]);
		assert!(dataset.records()[1].business_types.is_empty());
	}

	#[test]
	fn stray_values_in_nested_groups_are_reported() {
		let json = r#"{
			"industry_specific_software": {
				"healthcare": {
					"clinics": {"industry": "Clinics"},
					"dental": {"industry": "Dental Practices"},
					"broken": 7
				}
			}
		}"#;

		let report = Dataset::from_json_str(json).expect("dataset");
		assert_eq!(report.diagnostics.len(), 1);
		assert_eq!(report.diagnostics[0].location, "healthcare/broken");
		assert!(matches!(report.diagnostics[0].kind, DiagnosticKind::Malformed(_)));

		let dataset = report.into_dataset();
		let names: Vec<_> = dataset.records().iter().map(|r| r.industry.as_str()).collect();
		assert_eq!(names, ["Clinics", "Dental Practices"]);
		assert_eq!(dataset.category_keys(), ["healthcare"]);
	}

	#[test]
	fn record_fields_keep_a_group_flat() {
		let json = r#"{
			"industry_specific_software": {
				"retail": {"industry": "Boutiques", "extra": {"note": "ignored"}}
			}
		}"#;

		let report = Dataset::from_json_str(json).expect("dataset");
		assert!(report.diagnostics.is_empty());
		let dataset = report.into_dataset();
		assert_eq!(dataset.records().len(), 1);
		assert_eq!(dataset.records()[0].industry, "Boutiques");
	}

	#[test]
	fn bad_records_are_reported_without_aborting() {
		let json = r#"{
			"industry_specific_software": {
				"nameless": {"business_types": ["Orphans"]},
				"broken": {"industry": "Broken", "examples": 7},
				"first": {"industry": "Bakeries", "growth_potential": "Sky High"},
				"again": {"industry": "Bakeries"},
				"nulls": {"industry": "Florists", "examples": null}
			}
		}"#;

		let report = Dataset::from_json_str(json).expect("dataset");
		let kinds: Vec<_> = report.diagnostics.iter().map(|d| &d.kind).collect();

		assert!(matches!(kinds[0], DiagnosticKind::MissingIndustry));
		assert!(matches!(kinds[1], DiagnosticKind::Malformed(_)));
		assert_eq!(
			kinds[2],
			&DiagnosticKind::UnknownGrowthPotential("Sky High".into())
		);
		assert_eq!(kinds[3], &DiagnosticKind::DuplicateIndustry("Bakeries".into()));
		assert_eq!(report.skipped(), 3);

		let dataset = report.into_dataset();
		let names: Vec<_> = dataset.records().iter().map(|r| r.industry.as_str()).collect();
		assert_eq!(names, ["Bakeries", "Florists"]);
		assert_eq!(dataset.records()[0].growth_potential, None);
		assert_eq!(dataset.category_keys().len(), 5);
	}

	#[test]
	fn empty_dataset_is_valid() {
		let dataset = Dataset::from_json_str("{}").expect("dataset").into_dataset();
		assert!(dataset.is_empty());
		assert!(dataset.category_keys().is_empty());
		assert!(dataset.insights().is_none());
	}

	#[test]
	fn wrong_top_level_shape_is_an_error() {
		let err = Dataset::from_json_str(r#"{"industry_specific_software": []}"#)
			.expect_err("array groups are not a mapping");
		assert!(matches!(err, DatasetError::Parse(_)));
	}

	#[test]
	fn reads_dataset_files_from_disk() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		file.write_all(FLAT.as_bytes()).expect("write");

		let dataset = Dataset::from_path(file.path()).expect("dataset").into_dataset();
		assert_eq!(dataset.records().len(), 2);

		let missing = Dataset::from_path(file.path().with_extension("missing"));
		assert!(matches!(missing, Err(DatasetError::Io { .. })));
	}

	#[test]
	fn lookup_accepts_names_and_slugs() {
		let dataset = Dataset::from_json_str(FLAT).expect("dataset").into_dataset();
		assert_eq!(
			dataset.find("fintech").map(|r| r.industry.as_str()),
			Some("FinTech")
		);
		assert_eq!(
			dataset.find_by_slug("agritech").map(|r| r.industry.as_str()),
			Some("AgriTech")
		);
		assert!(dataset.find("unknown").is_none());
	}

	#[test]
	fn bundled_dataset_loads_cleanly() {
		let report = Dataset::bundled().expect("bundled dataset");
		assert!(
			report.diagnostics.is_empty(),
			"unexpected diagnostics: {:?}",
			report.diagnostics
		);
		let dataset = report.into_dataset();
		assert!(!dataset.is_empty());
		assert_eq!(dataset.summary(), dataset.metadata());
		assert!(dataset.insights().is_some());
	}
}
