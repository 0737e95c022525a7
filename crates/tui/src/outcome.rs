use sectora_core::{ActiveFilters, IndustryRecord};

/// What the user was looking at when the browser closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
	/// The search text at exit.
	pub query: String,
	/// Facet selections at exit.
	pub filters: ActiveFilters,
	/// The highlighted record, unless the browser was aborted with Ctrl-C.
	pub selection: Option<IndustryRecord>,
}
