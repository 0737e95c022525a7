use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use config::{Config, ConfigError, File};
use sectora_core::{CategoryStrategy, DEFAULT_SUGGESTION_LIMIT};
use sectora_tui::style::DEFAULT_THEME;
use sectora_tui::{Theme, UiLabels, theme_by_name, theme_names};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	dataset: DatasetSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DatasetSection {
	path: Option<PathBuf>,
	category_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	suggestion_limit: Option<usize>,
	input_title: Option<String>,
	results_title: Option<String>,
	facets_title: Option<String>,
	detail_title: Option<String>,
	share_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// `None` selects the bundled dataset.
	pub dataset_path: Option<PathBuf>,
	pub category_strategy: CategoryStrategy,
	pub theme_name: String,
	pub theme: Theme,
	pub initial_query: String,
	pub suggestion_limit: usize,
	pub labels: UiLabels,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.dataset_path {
			Some(path) => println!("  Dataset: {}", path.display()),
			None => println!("  Dataset: (bundled)"),
		}
		println!("  Category strategy: {}", self.category_strategy);
		println!("  UI theme: {}", self.theme_name);
		println!("  Suggestion limit: {}", self.suggestion_limit);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Input title: {}", self.labels.input_title);
		println!("  Results title: {}", self.labels.results_title);
		println!("  Facets title: {}", self.labels.facets_title);
		println!("  Detail title: {}", self.labels.detail_title);
		println!("  Share links: {}", self.labels.share_base_url);
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("sectora")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".sectora.toml"));
		files.push(current_dir.join("sectora.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.dataset.clone() {
			self.dataset.path = Some(path);
		}
		if let Some(strategy) = cli.category_strategy {
			self.dataset.category_strategy = Some(strategy.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(crate::cli::Command::Browse(browse)) = &cli.command
			&& let Some(query) = browse.initial_query.clone()
		{
			self.ui.initial_query = Some(query);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let dataset_path = self.dataset.path.map(resolve_dataset_path).transpose()?;

		let category_strategy = match self.dataset.category_strategy {
			Some(value) => value.parse::<CategoryStrategy>().map_err(|err| anyhow!(err))?,
			None => CategoryStrategy::default(),
		};

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme_by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				theme_names().join(", ")
			);
		};

		let suggestion_limit = self.ui.suggestion_limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);

		let mut labels = UiLabels::default();
		for (target, value) in [
			(&mut labels.input_title, self.ui.input_title),
			(&mut labels.results_title, self.ui.results_title),
			(&mut labels.facets_title, self.ui.facets_title),
			(&mut labels.detail_title, self.ui.detail_title),
			(&mut labels.share_base_url, self.ui.share_base_url),
		] {
			if let Some(value) = value.map(|value| value.trim().to_string())
				&& !value.is_empty()
			{
				*target = value;
			}
		}

		Ok(ResolvedConfig {
			dataset_path,
			category_strategy,
			theme_name,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			suggestion_limit,
			labels,
		})
	}
}

/// Relative paths are tried against the working directory, then the data directory.
fn resolve_dataset_path(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	let cwd = env::current_dir().context("failed to determine working directory")?;
	let local = cwd.join(&path);
	if local.exists() {
		return Ok(local);
	}
	if let Ok(data_dir) = app_dirs::get_data_dir() {
		let shared = data_dir.join(&path);
		if shared.exists() {
			return Ok(shared);
		}
	}
	Ok(local)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut argv = vec!["sectora", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("parse")
	}

	#[test]
	fn defaults_without_any_source() {
		let resolved = load(&parse(&[])).expect("load");
		assert_eq!(resolved.dataset_path, None);
		assert_eq!(resolved.category_strategy, CategoryStrategy::Keyed);
		assert_eq!(resolved.theme_name, "default");
		assert_eq!(resolved.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
		assert_eq!(resolved.labels, UiLabels::default());
	}

	#[test]
	fn config_file_then_cli_overrides() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("sectora.toml");
		fs::write(
			&path,
			r#"
[dataset]
category_strategy = "keyword"

[ui]
theme = "light"
suggestion_limit = 3
results_title = "Sectors"
initial_query = "farm"
"#,
		)
		.expect("write config");
		let config = path.to_str().expect("utf-8 path");

		let resolved = load(&parse(&["--config", config])).expect("load");
		assert_eq!(resolved.category_strategy, CategoryStrategy::Keyword);
		assert_eq!(resolved.theme_name, "light");
		assert_eq!(resolved.suggestion_limit, 3);
		assert_eq!(resolved.labels.results_title, "Sectors");
		assert_eq!(resolved.labels.input_title, UiLabels::default().input_title);
		assert_eq!(resolved.initial_query, "farm");

		let resolved = load(&parse(&[
			"--config",
			config,
			"--category-strategy",
			"keyed",
			"--theme",
			"default",
			"browse",
			"--query",
			"bank",
		]))
		.expect("load");
		assert_eq!(resolved.category_strategy, CategoryStrategy::Keyed);
		assert_eq!(resolved.theme_name, "default");
		assert_eq!(resolved.initial_query, "bank");
	}

	#[test]
	fn explicit_config_files_are_required() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("missing.toml");
		let missing = missing.to_str().expect("utf-8 path");
		assert!(load(&parse(&["--config", missing])).is_err());
	}

	#[test]
	fn unknown_names_are_reported() {
		let err = load(&parse(&["--theme", "neon"])).expect_err("unknown theme");
		assert!(err.to_string().contains("available: default, light"));

		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("bad.toml");
		fs::write(&path, "[dataset]\ncategory_strategy = \"astrology\"\n").expect("write");
		assert!(load(&parse(&["--config", path.to_str().expect("utf-8 path")])).is_err());
	}

	#[test]
	fn absolute_dataset_paths_are_kept() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("industries.json");
		let resolved = load(&parse(&["--dataset", path.to_str().expect("utf-8 path")])).expect("load");
		assert_eq!(resolved.dataset_path, Some(path));
	}
}
