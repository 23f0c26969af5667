//! Discovery of source files under the configured mounts.
//!
//! # Invariants
//!
//! - Logical paths are root-relative, `/`-joined on every host, and pass
//!   [`stow_registry_core::path::validate`].
//! - Two distinct files never share a logical path. The same file reached
//!   through overlapping mounts is embedded once.
//! - Output order is sorted by logical path, independent of walk order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use stow_registry_core::path;
use walkdir::WalkDir;

use crate::config::Mount;
use crate::{EncodeError, Result};

/// One file to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
	/// Logical path the file is registered under.
	pub path: String,
	/// Location on disk.
	pub source: PathBuf,
}

/// Compiles exclude globs into one matcher.
pub(crate) fn exclude_set(patterns: &[String]) -> Result<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|error| EncodeError::InvalidPattern {
			pattern: pattern.clone(),
			error,
		})?;
		builder.add(glob);
	}
	builder.build().map_err(|error| EncodeError::InvalidPattern {
		pattern: patterns.join(", "),
		error,
	})
}

/// Walks every mount and returns the files to embed, sorted by logical path.
pub fn scan(mounts: &[Mount], exclude: &GlobSet) -> Result<Vec<SourceFile>> {
	let mut found: BTreeMap<String, PathBuf> = BTreeMap::new();

	for mount in mounts {
		if !mount.prefix.is_empty() {
			path::validate(&mount.prefix).map_err(|error| EncodeError::InvalidPrefix {
				prefix: mount.prefix.clone(),
				error,
			})?;
		}
		if !mount.root.is_dir() {
			return Err(EncodeError::MissingRoot(mount.root.clone()));
		}

		let mut count = 0usize;
		let mut skipped = 0usize;
		let walker = WalkDir::new(&mount.root)
			.follow_links(true)
			.sort_by_file_name();
		for entry in walker {
			let entry = entry.map_err(|error| EncodeError::Walk {
				root: mount.root.clone(),
				error,
			})?;
			if !entry.file_type().is_file() {
				continue;
			}

			let file = entry.into_path();
			let logical = path::join(&mount.prefix, &relative_path(&mount.root, &file)?);
			if exclude.is_match(&logical) {
				skipped += 1;
				continue;
			}
			path::validate(&logical).map_err(|error| EncodeError::InvalidPath {
				file: file.clone(),
				error,
			})?;

			match found.entry(logical) {
				Entry::Vacant(slot) => {
					slot.insert(file);
					count += 1;
				}
				Entry::Occupied(slot) if same_file(slot.get(), &file) => {
					tracing::debug!(
						path = %slot.key(),
						file = %file.display(),
						"file reached through overlapping mounts"
					);
				}
				Entry::Occupied(slot) => {
					return Err(EncodeError::DuplicatePath {
						path: slot.key().clone(),
						first: slot.get().clone(),
						second: file,
					});
				}
			}
		}

		tracing::debug!(
			root = %mount.root.display(),
			prefix = %mount.prefix,
			count,
			skipped,
			"scanned asset root"
		);
	}

	Ok(found
		.into_iter()
		.map(|(path, source)| SourceFile { path, source })
		.collect())
}

/// Returns true when both paths resolve to the same file on disk.
fn same_file(a: &Path, b: &Path) -> bool {
	match (fs::canonicalize(a), fs::canonicalize(b)) {
		(Ok(a), Ok(b)) => a == b,
		_ => false,
	}
}

/// Joins the components of `file` below `root` with `/`.
fn relative_path(root: &Path, file: &Path) -> Result<String> {
	let rel = file.strip_prefix(root).unwrap_or(file);
	let mut out = String::new();
	for component in rel.components() {
		let part = component
			.as_os_str()
			.to_str()
			.ok_or_else(|| EncodeError::NonUtf8Path(file.to_path_buf()))?;
		if !out.is_empty() {
			out.push('/');
		}
		out.push_str(part);
	}
	Ok(out)
}
