mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Result, bail};
use cli::{
	BrowseArgs, CliArgs, Command, FormatArgs, SearchArgs, ShowArgs, SuggestArgs, parse_cli,
	print_facets, print_insights, print_outcome, print_record, print_records, print_suggestions,
};
use sectora_core::{Facet, FilterState, FilterUpdate};
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in sectora_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let browsing = matches!(cli.command, None | Some(Command::Browse(_)));
	if browsing {
		if let Some(path) = logging::init_file() {
			log::debug!("logging to {}", path.display());
		}
	} else {
		logging::init_stderr();
	}

	let resolved = settings::load(&cli)?;
	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = Workflow::from_config(resolved)?;
	run_command(cli, workflow)
}

fn run_command(cli: CliArgs, workflow: Workflow) -> Result<()> {
	match cli.command.unwrap_or_else(|| Command::Browse(BrowseArgs::default())) {
		Command::Browse(args) => browse(workflow, args),
		Command::Search(args) => search(&workflow, args),
		Command::Facets(FormatArgs { output }) => print_facets(workflow.directory().facet_counts(), output),
		Command::Suggest(args) => suggest(&workflow, args),
		Command::Show(args) => show(&workflow, args),
		Command::Insights(FormatArgs { output }) => {
			print_insights(workflow.directory().dataset().insights(), output)
		}
	}
}

fn browse(workflow: Workflow, args: BrowseArgs) -> Result<()> {
	let outcome = workflow.browse()?;
	print_outcome(&outcome, args.format.output)
}

fn search(workflow: &Workflow, args: SearchArgs) -> Result<()> {
	let mut state = FilterState::new().with_query(args.query);
	let toggles = args
		.locations
		.into_iter()
		.map(|value| (Facet::Location, value))
		.chain(args.categories.into_iter().map(|value| (Facet::Category, value)))
		.chain(
			args.growth
				.into_iter()
				.map(|level| (Facet::Growth, level.as_str().to_string())),
		);
	for (facet, value) in toggles {
		if !state.filters.contains(facet, &value) {
			state.apply(FilterUpdate::Toggle(facet, value));
		}
	}

	let directory = workflow.directory();
	let mut records = directory.filter(&state);
	if let Some(limit) = args.limit {
		records.truncate(limit);
	}
	log::info!("{} records matched", records.len());
	print_records(
		directory,
		&records,
		&workflow.config().labels.share_base_url,
		args.format.output,
	)
}

fn suggest(workflow: &Workflow, args: SuggestArgs) -> Result<()> {
	let suggestions = workflow.directory().suggest(&args.query, args.limit);
	print_suggestions(&suggestions, args.format.output)
}

fn show(workflow: &Workflow, args: ShowArgs) -> Result<()> {
	let directory = workflow.directory();
	let Some(record) = directory.find(&args.name) else {
		bail!("no industry named '{}'", args.name);
	};
	print_record(
		directory,
		record,
		&workflow.config().labels.share_base_url,
		args.format.output,
	)
}
