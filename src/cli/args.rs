use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand, ValueEnum};
use sectora_core::{DEFAULT_SUGGESTION_LIMIT, GrowthPotential};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("sectora {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "sectora",
	version,
	long_version = long_version(),
	about = "Browse industries and the software they need",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `sectora` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SECTORA_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long,
		value_name = "PATH",
		global = true,
		help = "Load industries from a JSON file (default: bundled dataset)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		long = "category-strategy",
		value_enum,
		global = true,
		help = "How record categories are derived (default: keyed)"
	)]
	pub(crate) category_strategy: Option<StrategyArg>,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a browser theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the effective configuration before running"
	)]
	pub(crate) print_config: bool,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
	/// Open the interactive browser (the default).
	Browse(BrowseArgs),
	/// Filter industries and print the matches.
	Search(SearchArgs),
	/// List every facet value with its record count.
	Facets(FormatArgs),
	/// Print autocomplete suggestions for a query.
	Suggest(SuggestArgs),
	/// Describe one industry.
	Show(ShowArgs),
	/// Print the dataset's market insights.
	Insights(FormatArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct FormatArgs {
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct BrowseArgs {
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[command(flatten)]
	pub(crate) format: FormatArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SearchArgs {
	#[arg(value_name = "QUERY", default_value = "")]
	pub(crate) query: String,
	#[arg(
		short,
		long = "location",
		value_name = "LOCATION",
		action = ArgAction::Append,
		help = "Keep industries targeting this location (repeatable)"
	)]
	pub(crate) locations: Vec<String>,
	#[arg(
		short = 'C',
		long = "category",
		value_name = "CATEGORY",
		action = ArgAction::Append,
		help = "Keep industries in this category (repeatable)"
	)]
	pub(crate) categories: Vec<String>,
	#[arg(
		short,
		long = "growth",
		value_name = "LEVEL",
		action = ArgAction::Append,
		help = "Keep industries with this growth potential: \"Very High\", High or Medium (repeatable)"
	)]
	pub(crate) growth: Vec<GrowthPotential>,
	#[arg(long, value_name = "N", help = "Print at most N matches (default: all)")]
	pub(crate) limit: Option<usize>,
	#[command(flatten)]
	pub(crate) format: FormatArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SuggestArgs {
	#[arg(value_name = "QUERY")]
	pub(crate) query: String,
	#[arg(long, value_name = "N", default_value_t = DEFAULT_SUGGESTION_LIMIT)]
	pub(crate) limit: usize,
	#[command(flatten)]
	pub(crate) format: FormatArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(value_name = "NAME_OR_SLUG")]
	pub(crate) name: String,
	#[command(flatten)]
	pub(crate) format: FormatArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StrategyArg {
	Keyed,
	Keyword,
}

impl StrategyArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Keyed => "keyed",
			Self::Keyword => "keyword",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_valid() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn no_subcommand_means_browse() {
		let cli = CliArgs::try_parse_from(["sectora", "--theme", "light"]).expect("parse");
		assert!(cli.command.is_none());
		assert_eq!(cli.theme.as_deref(), Some("light"));
	}

	#[test]
	fn search_collects_repeated_filters() {
		let cli = CliArgs::try_parse_from([
			"sectora",
			"search",
			"bank",
			"--location",
			"urban",
			"-l",
			"rural",
			"--growth",
			"very high",
			"--output",
			"json",
			"--category-strategy",
			"keyword",
		])
		.expect("parse");

		assert_eq!(cli.category_strategy, Some(StrategyArg::Keyword));
		let Some(Command::Search(search)) = cli.command else {
			panic!("expected search");
		};
		assert_eq!(search.query, "bank");
		assert_eq!(search.locations, ["urban", "rural"]);
		assert_eq!(search.growth, [GrowthPotential::VeryHigh]);
		assert_eq!(search.format.output, OutputFormat::Json);
	}

	#[test]
	fn unknown_growth_levels_are_rejected() {
		assert!(CliArgs::try_parse_from(["sectora", "search", "--growth", "stellar"]).is_err());
	}
}
