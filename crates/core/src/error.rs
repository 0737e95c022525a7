use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a dataset from loading at all.
#[derive(Debug, Error)]
pub enum DatasetError {
	/// The resource could not be read from disk.
	#[error("failed to read dataset {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The resource is not valid JSON or its top-level structure does not decode.
	#[error("failed to parse dataset: {0}")]
	Parse(#[from] serde_json::Error),
}

/// What went wrong with a single record while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
	/// The record has no `industry` name; it was skipped.
	MissingIndustry,
	/// Another record already uses this `industry` name; it was skipped.
	DuplicateIndustry(String),
	/// The record could not be decoded; it was skipped.
	Malformed(String),
	/// The growth label is not recognised; the record was kept as unclassified.
	UnknownGrowthPotential(String),
}

/// A per-record problem reported by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Position of the record inside the resource, `category` or `category/key`.
	pub location: String,
	pub kind: DiagnosticKind,
}

impl Diagnostic {
	pub(crate) fn new(location: impl Into<String>, kind: DiagnosticKind) -> Self {
		Self {
			location: location.into(),
			kind,
		}
	}

	/// Whether the record was dropped from the dataset.
	#[must_use]
	pub fn skipped(&self) -> bool {
		!matches!(self.kind, DiagnosticKind::UnknownGrowthPotential(_))
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.kind {
			DiagnosticKind::MissingIndustry => {
				write!(f, "{}: record has no industry name, skipped", self.location)
			}
			DiagnosticKind::DuplicateIndustry(name) => {
				write!(f, "{}: duplicate industry '{name}', skipped", self.location)
			}
			DiagnosticKind::Malformed(reason) => {
				write!(f, "{}: malformed record ({reason}), skipped", self.location)
			}
			DiagnosticKind::UnknownGrowthPotential(label) => write!(
				f,
				"{}: unknown growth potential '{label}', treated as unclassified",
				self.location
			),
		}
	}
}
