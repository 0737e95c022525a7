//! Autocomplete terms derived from the dataset.

use std::collections::BTreeSet;

use crate::record::IndustryRecord;

/// Number of leading words kept from a software feature.
const FEATURE_PHRASE_WORDS: usize = 3;
/// Feature phrases this short or shorter are dropped.
const MIN_FEATURE_PHRASE_CHARS: usize = 5;
/// Size of the dropdown shown while typing.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// The first words of a feature description, if long enough to be useful.
fn feature_phrase(feature: &str) -> Option<String> {
	let phrase = feature
		.split_whitespace()
		.take(FEATURE_PHRASE_WORDS)
		.collect::<Vec<_>>()
		.join(" ");
	(phrase.chars().count() > MIN_FEATURE_PHRASE_CHARS).then_some(phrase)
}

/// Every searchable term in `records`, deduplicated and sorted.
#[must_use]
pub fn build_suggestions(records: &[IndustryRecord]) -> Vec<String> {
	let mut terms = BTreeSet::new();
	for record in records {
		if !record.industry.is_empty() {
			terms.insert(record.industry.clone());
		}
		terms.extend(record.business_types.iter().cloned());
		terms.extend(
			record
				.software_features
				.iter()
				.filter_map(|feature| feature_phrase(feature)),
		);
		terms.extend(record.examples.iter().cloned());
	}
	terms.into_iter().collect()
}

/// Suggestions containing `query`, case-insensitively, capped at `limit`.
#[must_use]
pub fn matching_suggestions<'a>(suggestions: &'a [String], query: &str, limit: usize) -> Vec<&'a str> {
	if query.is_empty() {
		return Vec::new();
	}
	let needle = query.to_lowercase();
	suggestions
		.iter()
		.filter(|suggestion| suggestion.to_lowercase().contains(&needle))
		.take(limit)
		.map(String::as_str)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scenario() -> Vec<IndustryRecord> {
		vec![
			IndustryRecord::new("FinTech")
				.with_business_types(["Digital Banks"])
				.with_software_features(["Payment Processing Engine"])
				.with_examples(["Stripe"]),
			IndustryRecord::new("AgriTech")
				.with_business_types(["Farm Management"])
				.with_software_features(["Soil Monitoring"])
				.with_examples(["FarmLogs"]),
		]
	}

	#[test]
	fn scenario_terms_are_all_present() {
		let suggestions = build_suggestions(&scenario());
		for term in [
			"FinTech",
			"Digital Banks",
			"Stripe",
			"Payment Processing Engine",
			"AgriTech",
			"Farm Management",
			"FarmLogs",
			"Soil Monitoring",
		] {
			assert!(suggestions.iter().any(|s| s == term), "missing {term}");
		}
		assert_eq!(suggestions.len(), 8);
	}

	#[test]
	fn output_is_sorted_and_unique() {
		let mut records = scenario();
		records.push(
			IndustryRecord::new("Neobanks")
				.with_business_types(["Digital Banks"])
				.with_examples(["Stripe", "Monzo"]),
		);
		let suggestions = build_suggestions(&records);

		let mut expected = suggestions.clone();
		expected.sort();
		expected.dedup();
		assert_eq!(suggestions, expected);
	}

	#[test]
	fn long_features_are_truncated_to_three_words() {
		let records = vec![
			IndustryRecord::new("Clinics")
				.with_software_features(["Electronic health records with audit trails"]),
		];
		let suggestions = build_suggestions(&records);
		assert!(suggestions.iter().any(|s| s == "Electronic health records"));
		assert!(!suggestions.iter().any(|s| s.contains("audit")));
	}

	#[test]
	fn short_feature_phrases_contribute_nothing() {
		let records = vec![
			IndustryRecord::new("Kiosks").with_software_features(["POS", "Tax", "A B C", "12345"]),
		];
		assert_eq!(build_suggestions(&records), ["Kiosks"]);
	}

	#[test]
	fn dropdown_matches_case_insensitively_with_a_cap() {
		let suggestions = build_suggestions(&scenario());
		assert_eq!(
			matching_suggestions(&suggestions, "farm", DEFAULT_SUGGESTION_LIMIT),
			["Farm Management", "FarmLogs"]
		);
		assert_eq!(matching_suggestions(&suggestions, "tech", 1), ["AgriTech"]);
		assert!(matching_suggestions(&suggestions, "", DEFAULT_SUGGESTION_LIMIT).is_empty());
	}

	#[test]
	fn empty_input_has_no_suggestions() {
		assert!(build_suggestions(&[]).is_empty());
	}
}
