mod args;
mod output;

pub(crate) use args::{
	BrowseArgs, CliArgs, Command, FormatArgs, OutputFormat, SearchArgs, ShowArgs, SuggestArgs,
	parse_cli,
};
pub(crate) use output::{
	print_facets, print_insights, print_outcome, print_records, print_record, print_suggestions,
};
