/// Base URL used when no share link origin is configured.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://sectora.app";

/// Titles and text rendered around the browser's panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title of the search input block.
	pub input_title: String,
	/// Title of the results table.
	pub results_title: String,
	/// Title of the facet sidebar.
	pub facets_title: String,
	/// Title of the detail popup.
	pub detail_title: String,
	/// Origin prefixed to share links shown in the detail popup.
	pub share_base_url: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_title: "Search industries".to_string(),
			results_title: "Industries".to_string(),
			facets_title: "Filters".to_string(),
			detail_title: "Industry".to_string(),
			share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
		}
	}
}
