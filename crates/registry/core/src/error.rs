use thiserror::Error;

/// Errors produced when resolving a logical path against an asset table.
///
/// Absence is the only runtime failure an embedded table can have: there is
/// no I/O, no partial read and nothing to corrupt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
	/// The logical path was not embedded at build time.
	#[error("asset not found: {path:?} (registry `{registry}`)")]
	NotFound {
		/// Label of the table that was searched.
		registry: &'static str,
		/// The path exactly as the caller spelled it.
		path: String,
	},
}

impl LookupError {
	/// Builds a [`LookupError::NotFound`] for `path` in `registry`.
	pub fn not_found(registry: &'static str, path: &str) -> Self {
		Self::NotFound {
			registry,
			path: path.to_owned(),
		}
	}
}

/// Reasons a string is not a canonical logical path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
	/// The path has no characters.
	#[error("logical path is empty")]
	Empty,
	/// The path starts with `/`.
	#[error("logical path {0:?} starts with a separator")]
	LeadingSeparator(String),
	/// The path ends with `/`.
	#[error("logical path {0:?} ends with a separator")]
	TrailingSeparator(String),
	/// The path contains `\`, which is never a separator in logical paths.
	#[error("logical path {0:?} contains a backslash")]
	Backslash(String),
	/// The path contains `//`.
	#[error("logical path {0:?} contains an empty segment")]
	EmptySegment(String),
	/// The path contains a `.` or `..` segment.
	#[error("logical path {0:?} contains a relative segment")]
	RelativeSegment(String),
}
