//! Identifier generation for embedded storage.
//!
//! Every logical path gets one `ASSET_*` constant. Distinct paths can
//! sanitize to the same identifier (`a-b.txt` and `a_b.txt`); the later one,
//! in sorted path order, takes a numeric suffix so assignment is stable.

use std::collections::HashSet;

/// Turns a logical path into an upper-case Rust identifier.
pub fn sanitize(path: &str) -> String {
	let mut ident = String::with_capacity(path.len() + 6);
	ident.push_str("ASSET_");
	ident.extend(path.chars().map(|c| {
		if c.is_ascii_alphanumeric() {
			c.to_ascii_uppercase()
		} else {
			'_'
		}
	}));
	ident
}

/// Assigns a unique identifier to each path, in iteration order.
pub fn assign<'a>(paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
	let mut taken = HashSet::new();
	paths
		.into_iter()
		.map(|path| {
			let base = sanitize(path);
			if taken.insert(base.clone()) {
				return base;
			}
			(2..)
				.map(|n| format!("{base}_{n}"))
				.find(|candidate| taken.insert(candidate.clone()))
				.unwrap_or(base)
		})
		.collect()
}
