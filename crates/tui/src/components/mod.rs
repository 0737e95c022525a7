//! UI building blocks shared across rendering and state modules.

/// Industry detail popup.
pub mod detail;
/// Facet sidebar.
pub mod facets;
/// Table row construction and highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Autocomplete dropdown.
pub mod suggestions;
/// Table rendering and configuration.
pub mod tables;

pub use detail::{DetailView, render_detail};
pub use facets::{FacetEntry, FacetView, facet_entries, render_facets};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use suggestions::render_suggestions;
pub use tables::{TableSpec, render_table};
