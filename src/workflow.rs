use anyhow::{Context, Result};
use sectora_core::{Dataset, Directory, LoadReport};
use sectora_tui::{App, BrowseOutcome};

use crate::settings::ResolvedConfig;

/// A loaded directory plus the settings the commands run with.
pub(crate) struct Workflow {
	config: ResolvedConfig,
	directory: Directory,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let report = load_dataset(&config)?;
		if report.skipped() > 0 {
			log::warn!("{} records could not be loaded", report.skipped());
		}
		let directory = Directory::new(report.into_dataset(), config.category_strategy);
		Ok(Self { config, directory })
	}

	pub(crate) fn config(&self) -> &ResolvedConfig {
		&self.config
	}

	pub(crate) fn directory(&self) -> &Directory {
		&self.directory
	}

	/// Run the terminal browser over the loaded directory.
	pub(crate) fn browse(self) -> Result<BrowseOutcome> {
		let Self { config, directory } = self;
		let app = App::new(directory)
			.with_labels(config.labels)
			.with_theme(config.theme)
			.with_suggestion_limit(config.suggestion_limit)
			.with_initial_query(config.initial_query);
		sectora_tui::run(app)
	}
}

fn load_dataset(config: &ResolvedConfig) -> Result<LoadReport> {
	match &config.dataset_path {
		Some(path) => Dataset::from_path(path)
			.with_context(|| format!("failed to load dataset from {}", path.display())),
		None => Dataset::bundled().context("failed to load the bundled dataset"),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use sectora_core::CategoryStrategy;
	use sectora_tui::{Theme, UiLabels};

	use super::*;

	fn config(dataset_path: Option<std::path::PathBuf>) -> ResolvedConfig {
		ResolvedConfig {
			dataset_path,
			category_strategy: CategoryStrategy::Keyword,
			theme_name: "default".into(),
			theme: Theme::default(),
			initial_query: String::new(),
			suggestion_limit: 8,
			labels: UiLabels::default(),
		}
	}

	#[test]
	fn bundled_dataset_is_the_default() {
		let workflow = Workflow::from_config(config(None)).expect("workflow");
		assert!(!workflow.directory().records().is_empty());
		assert_eq!(workflow.directory().strategy(), CategoryStrategy::Keyword);
	}

	#[test]
	fn dataset_files_replace_the_bundled_one() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("industries.json");
		fs::write(
			&path,
			r#"{
				"metadata": { "total_industries": 1, "total_categories": 1 },
				"industry_specific_software": {
					"healthcare": { "industry": "Dental Clinics", "growth_potential": "High" }
				}
			}"#,
		)
		.expect("write dataset");

		let workflow = Workflow::from_config(config(Some(path))).expect("workflow");
		let names: Vec<_> = workflow
			.directory()
			.records()
			.iter()
			.map(|record| record.industry.as_str())
			.collect();
		assert_eq!(names, ["Dental Clinics"]);
	}

	#[test]
	fn missing_dataset_files_fail_with_context() {
		let dir = tempfile::tempdir().expect("tempdir");
		let err = Workflow::from_config(config(Some(dir.path().join("nope.json"))))
			.err()
			.expect("missing file");
		assert!(format!("{err:#}").contains("failed to load dataset from"));
	}
}
