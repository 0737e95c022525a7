//! Category labels and the strategies that assign a record to a category.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::IndustryRecord;

/// Display labels for the dataset's category keys.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
	("retail_wholesale", "Retail & Commerce"),
	("food_beverage", "Food & Beverage"),
	("hospitality", "Hospitality & Tourism"),
	("construction", "Construction & Engineering"),
	("healthcare", "Healthcare & Medical"),
	("education", "Education & Training"),
	("beauty_wellness", "Beauty & Wellness"),
	("logistics_transport", "Logistics & Transport"),
	("manufacturing", "Manufacturing & Industrial"),
	("agriculture", "Agriculture & Farming"),
	("automotive", "Automotive Services"),
	("professional_services", "Professional Services"),
	("real_estate", "Real Estate"),
	("travel_tourism", "Travel & Tourism"),
	("religious_social", "Religious & Social"),
	("personal_services", "Personal Services"),
	("entertainment_media", "Entertainment & Media"),
	("retail_specialty", "Specialty Retail"),
	("wealthtech", "Wealth & Finance"),
	("govtech", "Government & Public"),
	("retailtech", "Retail Technology"),
	("adtech_martech", "Marketing & Advertising"),
	("traveltech", "Travel Technology"),
	("sporttech", "Sports & Fitness"),
	("femtech", "Women's Health"),
	("pettech", "Pet & Animal Care"),
	("biotech", "Biotechnology"),
	("spacetech", "Space & Aerospace"),
	("mobilitytech", "Mobility & Transport"),
	("gaming_esports", "Gaming & eSports"),
];

/// One row of the keyword inference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
	pub keyword: &'static str,
	pub label: &'static str,
}

/// Keyword rules, evaluated in order against the lowercased industry name.
pub const KEYWORD_RULES: &[KeywordRule] = &[
	KeywordRule {
		keyword: "tech",
		label: "Technology",
	},
	KeywordRule {
		keyword: "health",
		label: "Healthcare",
	},
	KeywordRule {
		keyword: "food",
		label: "Food & Beverage",
	},
	KeywordRule {
		keyword: "education",
		label: "Education",
	},
	KeywordRule {
		keyword: "retail",
		label: "Retail",
	},
	KeywordRule {
		keyword: "finance",
		label: "Finance",
	},
];

/// Category assigned when no keyword rule matches.
pub const OTHER_CATEGORY: &str = "Other";

/// Display label for a category key, falling back to a title-cased key.
#[must_use]
pub fn label_for_key(key: &str) -> Cow<'static, str> {
	CATEGORY_LABELS
		.iter()
		.find(|(known, _)| *known == key)
		.map(|(_, label)| Cow::Borrowed(*label))
		.unwrap_or_else(|| Cow::Owned(title_case_key(key)))
}

/// `pet_grooming` becomes `Pet Grooming`.
fn title_case_key(key: &str) -> String {
	let mut out = String::with_capacity(key.len());
	let mut in_word = false;
	for ch in key.chars() {
		let ch = if ch == '_' { ' ' } else { ch };
		let is_word = ch.is_ascii_alphanumeric();
		if is_word && !in_word {
			out.push(ch.to_ascii_uppercase());
		} else {
			out.push(ch);
		}
		in_word = is_word;
	}
	out
}

/// First matching keyword label for an industry name.
#[must_use]
pub fn infer_category(industry: &str) -> &'static str {
	let name = industry.to_lowercase();
	KEYWORD_RULES
		.iter()
		.find(|rule| name.contains(rule.keyword))
		.map_or(OTHER_CATEGORY, |rule| rule.label)
}

/// How records are assigned to categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStrategy {
	/// Label the dataset grouping key the record was loaded under.
	#[default]
	Keyed,
	/// Infer a label from keywords in the industry name.
	Keyword,
}

impl CategoryStrategy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Keyed => "keyed",
			Self::Keyword => "keyword",
		}
	}

	/// Category label of `record`, if it has one under this strategy.
	#[must_use]
	pub fn categorize(self, record: &IndustryRecord) -> Option<Cow<'static, str>> {
		match self {
			Self::Keyed => record.category_key.as_deref().map(label_for_key),
			Self::Keyword => Some(Cow::Borrowed(infer_category(&record.industry))),
		}
	}
}

impl fmt::Display for CategoryStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CategoryStrategy {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"keyed" => Ok(Self::Keyed),
			"keyword" => Ok(Self::Keyword),
			other => Err(format!("unknown category strategy '{other}'")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_keys_use_the_label_table() {
		assert_eq!(label_for_key("femtech"), "Women's Health");
		assert_eq!(label_for_key("retail_wholesale"), "Retail & Commerce");
	}

	#[test]
	fn unknown_keys_are_title_cased() {
		assert_eq!(label_for_key("pet_grooming"), "Pet Grooming");
		assert_eq!(label_for_key("b2b_saas"), "B2b Saas");
		assert_eq!(label_for_key("e-commerce"), "E-Commerce");
		assert_eq!(label_for_key(""), "");
	}

	#[test]
	fn keyword_rules_are_first_match_wins() {
		assert_eq!(infer_category("HealthTech"), "Technology");
		assert_eq!(infer_category("Home Healthcare"), "Healthcare");
		assert_eq!(infer_category("Street Food Vendors"), "Food & Beverage");
		assert_eq!(infer_category("Plumbing"), OTHER_CATEGORY);
	}

	#[test]
	fn strategies_categorize_records() {
		let record = IndustryRecord::new("Bakeries").with_category_key("food_beverage");
		assert_eq!(
			CategoryStrategy::Keyed.categorize(&record).as_deref(),
			Some("Food & Beverage")
		);
		assert_eq!(
			CategoryStrategy::Keyword.categorize(&record).as_deref(),
			Some(OTHER_CATEGORY)
		);
		assert_eq!(
			CategoryStrategy::Keyed.categorize(&IndustryRecord::new("Loose")),
			None
		);
	}

	#[test]
	fn strategy_names_round_trip_through_from_str() {
		for strategy in [CategoryStrategy::Keyed, CategoryStrategy::Keyword] {
			assert_eq!(strategy.as_str().parse::<CategoryStrategy>(), Ok(strategy));
		}
		assert!("fuzzy".parse::<CategoryStrategy>().is_err());
	}
}
