//! Compile-time resolvable table.
//!
//! [`SortedTable`] wraps a `'static` slice of records sorted by logical path.
//! Construction and lookup are `const fn`, so a table declared as a `const`
//! item can be queried inside other constant expressions:
//!
//! ```
//! use stow_registry::{Aligned, AssetRecord, SortedTable};
//!
//! const A: Aligned<[u8; 3]> = Aligned { bytes: *b"abc" };
//! const RECORDS: &[AssetRecord] = &[AssetRecord::new("a.txt", &A)];
//! const ASSETS: SortedTable = SortedTable::new("demo", RECORDS);
//!
//! const SIZE: usize = ASSETS.load("a.txt").size();
//! const _: () = assert!(SIZE == 3);
//! const _: () = assert!(!ASSETS.exists("b.txt"));
//! ```
//!
//! Lookups are binary searches over the byte order of the paths, which is the
//! order the encoder emits.

use std::cmp::Ordering;

use stow_registry_core::{Asset, AssetRecord, path};

use crate::AssetTable;

/// Sorted, immutable asset table resolvable in constant evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SortedTable {
	label: &'static str,
	records: &'static [AssetRecord],
}

impl SortedTable {
	/// Creates a table over `records`.
	///
	/// # Panics
	///
	/// Panics if `records` is not strictly sorted by path. In a `const` or
	/// `static` initializer this is a compile error.
	pub const fn new(label: &'static str, records: &'static [AssetRecord]) -> Self {
		let mut i = 1;
		while i < records.len() {
			if !matches!(
				path::compare(records[i - 1].path, records[i].path),
				Ordering::Less
			) {
				panic!("asset records must be sorted by path and free of duplicates");
			}
			i += 1;
		}
		Self { label, records }
	}

	/// Returns the diagnostic label.
	pub const fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the records in path order.
	pub const fn records(&self) -> &'static [AssetRecord] {
		self.records
	}

	/// Returns the number of embedded assets.
	pub const fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if nothing was embedded.
	pub const fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the asset at `path`, or `None`.
	pub const fn try_load(&self, path: &str) -> Option<Asset> {
		match self.position(path) {
			Some(idx) => Some(self.records[idx].asset),
			None => None,
		}
	}

	/// Returns true when `path` was embedded.
	pub const fn exists(&self, path: &str) -> bool {
		self.position(path).is_some()
	}

	/// Returns the asset at `path`.
	///
	/// # Panics
	///
	/// Panics if `path` was not embedded; during constant evaluation this
	/// fails the build. The message cannot carry the path because it is
	/// produced in `const` context; [`AssetTable::load`] reports it.
	#[track_caller]
	pub const fn load(&self, path: &str) -> Asset {
		match self.try_load(path) {
			Some(asset) => asset,
			None => panic!("asset not found in compile-time table"),
		}
	}

	const fn position(&self, path: &str) -> Option<usize> {
		let mut lo = 0;
		let mut hi = self.records.len();
		while lo < hi {
			let mid = lo + (hi - lo) / 2;
			match path::compare(self.records[mid].path, path) {
				Ordering::Less => lo = mid + 1,
				Ordering::Greater => hi = mid,
				Ordering::Equal => return Some(mid),
			}
		}
		None
	}
}

impl AssetTable for SortedTable {
	fn label(&self) -> &'static str {
		self.label
	}

	fn lookup(&self, path: &str) -> Option<Asset> {
		self.try_load(path)
	}

	fn records(&self) -> &[AssetRecord] {
		self.records
	}

	fn contains(&self, path: &str) -> bool {
		self.position(path).is_some()
	}
}

#[cfg(test)]
mod tests {
	use stow_registry_core::Aligned;

	use super::*;

	const A: Aligned<[u8; 1]> = Aligned { bytes: *b"a" };
	const B: Aligned<[u8; 2]> = Aligned { bytes: *b"bb" };
	const C: Aligned<[u8; 0]> = Aligned { bytes: [] };

	const RECORDS: &[AssetRecord] = &[
		AssetRecord::new("a.txt", &A),
		AssetRecord::new("dir/b.txt", &B),
		AssetRecord::new("dir/empty", &C),
	];
	const TABLE: SortedTable = SortedTable::new("sorted-tests", RECORDS);

	const B_SIZE: usize = TABLE.load("dir/b.txt").size();
	const HAS_EMPTY: bool = TABLE.exists("dir/empty");
	const MISSING: Option<Asset> = TABLE.try_load("dir/B.txt");

	#[test]
	fn test_const_evaluation() {
		assert_eq!(B_SIZE, 2);
		assert!(HAS_EMPTY);
		assert!(MISSING.is_none());
	}

	#[test]
	fn test_every_record_is_found() {
		for record in RECORDS {
			assert_eq!(TABLE.try_load(record.path), Some(record.asset));
		}
		assert!(!TABLE.exists(""));
		assert!(!TABLE.exists("dir"));
		assert!(!TABLE.exists("zzz"));
	}

	#[test]
	#[should_panic(expected = "must be sorted")]
	fn test_unsorted_records_rejected() {
		static UNSORTED: [AssetRecord; 2] = [
			AssetRecord::new("b", &B),
			AssetRecord::new("a", &A),
		];
		let _ = SortedTable::new("unsorted", &UNSORTED);
	}

	#[test]
	#[should_panic(expected = "must be sorted")]
	fn test_duplicate_records_rejected() {
		static DUPLICATED: [AssetRecord; 2] = [
			AssetRecord::new("a", &A),
			AssetRecord::new("a", &B),
		];
		let _ = SortedTable::new("duplicated", &DUPLICATED);
	}

	#[test]
	#[should_panic(expected = "asset not found in compile-time table")]
	fn test_runtime_inherent_load_panics() {
		let table = TABLE;
		let _ = table.load("nope");
	}
}
