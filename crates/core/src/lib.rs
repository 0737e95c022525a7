//! Dataset model and search pipeline for the `sectora` industry directory.
//!
//! The crate loads the bundled industry resource into typed records and
//! exposes the pure functions front-ends call into: facet extraction,
//! suggestion building and result filtering.

pub mod category;
pub mod dataset;
pub mod directory;
pub mod error;
pub mod facets;
pub mod filter;
pub mod record;
pub mod share;
pub mod state;
pub mod suggest;

pub use category::{CategoryStrategy, label_for_key};
pub use dataset::{BUNDLED_DATASET, Dataset, LoadReport, MarketInsights, Metadata};
pub use directory::Directory;
pub use error::{DatasetError, Diagnostic, DiagnosticKind};
pub use facets::{FacetCounts, FacetOption, Facets, derive_facets, facet_counts, location_facet};
pub use filter::{RecordFilter, filter_records};
pub use record::{GrowthPotential, IndustryRecord};
pub use share::{industry_slug, share_url};
pub use state::{ActiveFilters, Facet, FilterState, FilterUpdate};
pub use suggest::{DEFAULT_SUGGESTION_LIMIT, build_suggestions, matching_suggestions};
