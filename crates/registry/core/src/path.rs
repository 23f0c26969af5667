//! Logical path rules.
//!
//! A logical path is relative to its asset root, separated by `/` on every
//! host, case-sensitive, and has no leading separator. Lookups never
//! normalize: callers spell paths canonically and comparison is byte-exact.

use std::cmp::Ordering;

use crate::PathError;

/// Checks that `path` is a canonical logical path.
pub fn validate(path: &str) -> Result<(), PathError> {
	if path.is_empty() {
		return Err(PathError::Empty);
	}
	if path.contains('\\') {
		return Err(PathError::Backslash(path.to_owned()));
	}
	if path.starts_with('/') {
		return Err(PathError::LeadingSeparator(path.to_owned()));
	}
	if path.ends_with('/') {
		return Err(PathError::TrailingSeparator(path.to_owned()));
	}
	for segment in path.split('/') {
		match segment {
			"" => return Err(PathError::EmptySegment(path.to_owned())),
			"." | ".." => return Err(PathError::RelativeSegment(path.to_owned())),
			_ => {}
		}
	}
	Ok(())
}

/// Joins a mount prefix and a root-relative path.
///
/// An empty prefix leaves `rest` unchanged.
pub fn join(prefix: &str, rest: &str) -> String {
	if prefix.is_empty() {
		rest.to_owned()
	} else {
		format!("{prefix}/{rest}")
	}
}

/// Byte-wise comparison usable in constant evaluation.
///
/// Agrees with `str::cmp`, so tables sorted at build time can be searched in
/// `const fn` code.
pub const fn compare(a: &str, b: &str) -> Ordering {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	let mut i = 0;
	while i < a.len() && i < b.len() {
		if a[i] < b[i] {
			return Ordering::Less;
		}
		if a[i] > b[i] {
			return Ordering::Greater;
		}
		i += 1;
	}
	if a.len() < b.len() {
		Ordering::Less
	} else if a.len() > b.len() {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}
