use std::fmt::Write;

use anyhow::Result;
use sectora_core::{Directory, FacetCounts, FacetOption, IndustryRecord, MarketInsights, industry_slug, share_url};
use sectora_tui::BrowseOutcome;
use serde_json::{Value, json};

use super::OutputFormat;

fn record_json(directory: &Directory, record: &IndustryRecord, share_base_url: &str) -> Value {
	json!({
		"industry": record.industry,
		"slug": industry_slug(&record.industry),
		"category": directory.category_of(record),
		"growth_potential": record.growth_potential,
		"business_types": record.business_types,
		"software_features": record.software_features,
		"examples": record.examples,
		"target_locations": record.target_locations,
		"share_url": share_url(share_base_url, &record.industry),
	})
}

fn pretty(value: &Value) -> Result<String> {
	Ok(serde_json::to_string_pretty(value)?)
}

/// One line per record: name, category and growth separated by tabs.
pub(crate) fn format_records(
	directory: &Directory,
	records: &[&IndustryRecord],
	share_base_url: &str,
	format: OutputFormat,
) -> Result<String> {
	match format {
		OutputFormat::Json => {
			let values: Vec<_> = records
				.iter()
				.map(|record| record_json(directory, record, share_base_url))
				.collect();
			pretty(&Value::Array(values))
		}
		OutputFormat::Plain => {
			let mut out = String::new();
			for record in records {
				let category = directory.category_of(record).unwrap_or_default();
				let growth = record
					.growth_potential
					.map(|level| level.as_str())
					.unwrap_or("-");
				let _ = writeln!(out, "{}\t{category}\t{growth}", record.industry);
			}
			Ok(out)
		}
	}
}

/// Full description of a single record.
pub(crate) fn format_record(
	directory: &Directory,
	record: &IndustryRecord,
	share_base_url: &str,
	format: OutputFormat,
) -> Result<String> {
	if format == OutputFormat::Json {
		return pretty(&record_json(directory, record, share_base_url));
	}

	let mut out = String::new();
	let _ = writeln!(out, "{}", record.industry);
	if let Some(category) = directory.category_of(record) {
		let _ = writeln!(out, "Category: {category}");
	}
	if let Some(growth) = record.growth_potential {
		let _ = writeln!(out, "Growth potential: {growth}");
	}
	for (heading, values) in [
		("Business types", &record.business_types),
		("Software features", &record.software_features),
		("Examples", &record.examples),
		("Target markets", &record.target_locations),
	] {
		let _ = writeln!(out, "\n{heading}:");
		for value in values {
			let _ = writeln!(out, "  - {value}");
		}
	}
	let _ = writeln!(out, "\nShare: {}", share_url(share_base_url, &record.industry));
	Ok(out)
}

pub(crate) fn format_facets(counts: &FacetCounts, format: OutputFormat) -> Result<String> {
	if format == OutputFormat::Json {
		return pretty(&serde_json::to_value(counts)?);
	}

	let mut out = String::new();
	for (heading, options) in [
		("Target Locations", &counts.locations),
		("Categories", &counts.categories),
		("Growth Potential", &counts.growth),
	] {
		let _ = writeln!(out, "{heading}:");
		for FacetOption { value, count } in options {
			let _ = writeln!(out, "  {value} ({count})");
		}
	}
	Ok(out)
}

pub(crate) fn format_suggestions(suggestions: &[&str], format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Json => pretty(&json!(suggestions)),
		OutputFormat::Plain => Ok(suggestions.iter().map(|s| format!("{s}\n")).collect()),
	}
}

pub(crate) fn format_insights(insights: Option<&MarketInsights>, format: OutputFormat) -> Result<String> {
	let Some(insights) = insights else {
		return Ok(match format {
			OutputFormat::Json => "null".to_string(),
			OutputFormat::Plain => "No market insights in this dataset\n".to_string(),
		});
	};
	if format == OutputFormat::Json {
		return pretty(&serde_json::to_value(insights)?);
	}

	let mut out = String::new();
	for (heading, values) in [
		("High growth sectors", &insights.high_growth_sectors),
		("Emerging tech categories", &insights.emerging_tech_categories),
		("Untapped markets", &insights.untapped_markets),
		("Digital adoption challenges", &insights.digital_adoption_challenges),
	] {
		let _ = writeln!(out, "{heading}:");
		for value in values {
			let _ = writeln!(out, "  - {value}");
		}
	}
	if !insights.geographic_opportunities.is_empty() {
		let _ = writeln!(out, "Geographic opportunities:");
		for (region, values) in &insights.geographic_opportunities {
			let _ = writeln!(out, "  {region}: {}", values.join(", "));
		}
	}
	Ok(out)
}

/// Summary of how the browser was left.
pub(crate) fn format_outcome(outcome: &BrowseOutcome, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Json => pretty(&json!({
			"query": outcome.query,
			"filters": outcome.filters,
			"selection": outcome.selection,
		})),
		OutputFormat::Plain => Ok(match &outcome.selection {
			Some(record) => format!("{}\n", record.industry),
			None => format!("No selection (query: '{}')\n", outcome.query),
		}),
	}
}

pub(crate) fn print_records(
	directory: &Directory,
	records: &[&IndustryRecord],
	share_base_url: &str,
	format: OutputFormat,
) -> Result<()> {
	print!("{}", format_records(directory, records, share_base_url, format)?);
	Ok(())
}

pub(crate) fn print_record(
	directory: &Directory,
	record: &IndustryRecord,
	share_base_url: &str,
	format: OutputFormat,
) -> Result<()> {
	print!("{}", format_record(directory, record, share_base_url, format)?);
	Ok(())
}

pub(crate) fn print_facets(counts: &FacetCounts, format: OutputFormat) -> Result<()> {
	print!("{}", format_facets(counts, format)?);
	Ok(())
}

pub(crate) fn print_suggestions(suggestions: &[&str], format: OutputFormat) -> Result<()> {
	print!("{}", format_suggestions(suggestions, format)?);
	Ok(())
}

pub(crate) fn print_insights(insights: Option<&MarketInsights>, format: OutputFormat) -> Result<()> {
	println!("{}", format_insights(insights, format)?.trim_end());
	Ok(())
}

pub(crate) fn print_outcome(outcome: &BrowseOutcome, format: OutputFormat) -> Result<()> {
	println!("{}", format_outcome(outcome, format)?.trim_end());
	Ok(())
}
