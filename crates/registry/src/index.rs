//! Hashed asset index.
//!
//! Provides [`IndexBuilder`] and [`IndexTable`] for the runtime-built
//! embedding modes. Each table uses the same pattern:
//!
//! ```rust,ignore
//! static ASSETS: LazyLock<IndexTable> = LazyLock::new(|| {
//!     IndexBuilder::new("ui")
//!         .extend_inventory("ui")
//!         .build()
//! });
//! ```
//!
//! [`LazyTable`](crate::LazyTable) packages that pattern behind a
//! `const fn` constructor.

use rustc_hash::FxHashMap as HashMap;
use stow_registry_core::{Asset, AssetRecord};

use crate::AssetTable;

/// Link-time registration of one record under a bundle name.
///
/// Generated code for the extern embedding mode submits one of these per file
/// from the single module that owns the storage; any crate linked into the
/// same binary can then build an index over the bundle.
///
/// ```rust,ignore
/// static ASSET_LOGO_PNG: Aligned<[u8; 1024]> = Aligned { bytes: *include_bytes!("logo.png") };
/// inventory::submit! { AssetReg::new("ui", AssetRecord::new("logo.png", &ASSET_LOGO_PNG)) }
/// ```
#[derive(Debug)]
pub struct AssetReg {
	/// Bundle the record belongs to.
	pub bundle: &'static str,
	/// The registered record.
	pub record: AssetRecord,
}

impl AssetReg {
	/// Creates a registration for `record` in `bundle`.
	pub const fn new(bundle: &'static str, record: AssetRecord) -> Self {
		Self { bundle, record }
	}
}

inventory::collect!(AssetReg);

/// What an index does when two different records claim one logical path.
///
/// Within one bundle the encoder rules this out, so a conflict means two
/// crates submitted records for the same bundle name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Abort index construction, naming the bundle and the contested path.
	#[default]
	Panic,
	/// Serve the record that was registered first.
	FirstWins,
	/// Serve the record that was registered last.
	LastWins,
}

impl DuplicatePolicy {
	/// `Panic` when debug assertions are on, `FirstWins` otherwise.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}

/// Immutable path→asset index with O(1) lookup.
///
/// Built via [`IndexBuilder`], provides:
/// - O(1) lookup by logical path via [`get`](Self::get)
/// - Sorted iteration via [`records`](AssetTable::records)
/// - Length inspection via [`len`](AssetTable::len)
pub struct IndexTable {
	label: &'static str,
	records: Vec<AssetRecord>,
	by_path: HashMap<&'static str, Asset>,
}

impl IndexTable {
	/// Looks up an asset by logical path.
	#[inline]
	pub fn get(&self, path: &str) -> Option<Asset> {
		self.by_path.get(path).copied()
	}
}

impl AssetTable for IndexTable {
	fn label(&self) -> &'static str {
		self.label
	}

	#[inline]
	fn lookup(&self, path: &str) -> Option<Asset> {
		self.get(path)
	}

	fn records(&self) -> &[AssetRecord] {
		&self.records
	}

	#[inline]
	fn contains(&self, path: &str) -> bool {
		self.by_path.contains_key(path)
	}
}

impl std::fmt::Debug for IndexTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IndexTable")
			.field("label", &self.label)
			.field("len", &self.records.len())
			.finish()
	}
}

/// Builder for constructing an [`IndexTable`].
///
/// Collects records from slices or inventory, validates duplicates, and
/// produces the final index.
///
/// # Example
///
/// ```rust,ignore
/// let index = IndexBuilder::new("fixtures")
///     .extend(RECORDS.iter().copied())
///     .duplicate_policy(DuplicatePolicy::Panic)
///     .build();
/// ```
pub struct IndexBuilder {
	label: &'static str,
	records: Vec<AssetRecord>,
	policy: DuplicatePolicy,
}

impl IndexBuilder {
	/// Creates a new builder with the given label for error messages.
	///
	/// The duplicate policy defaults to [`DuplicatePolicy::for_build()`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			records: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Sets the duplicate path handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single record to the builder.
	pub fn push(mut self, record: AssetRecord) -> Self {
		self.records.push(record);
		self
	}

	/// Adds multiple records to the builder.
	pub fn extend<I: IntoIterator<Item = AssetRecord>>(mut self, records: I) -> Self {
		self.records.extend(records);
		self
	}

	/// Collects every record submitted for `bundle` through inventory.
	pub fn extend_inventory(mut self, bundle: &str) -> Self {
		for reg in inventory::iter::<AssetReg> {
			if reg.bundle == bundle {
				self.records.push(reg.record);
			}
		}
		self
	}

	/// Builds the index, validating for duplicates according to policy.
	///
	/// Registering the very same record twice is not a conflict. The result
	/// does not depend on the order records were added in, except for which
	/// record wins a conflict under the non-panicking policies.
	///
	/// # Panics
	///
	/// Panics if two different records share a path and policy is
	/// [`DuplicatePolicy::Panic`].
	pub fn build(self) -> IndexTable {
		let mut by_path: HashMap<&'static str, Asset> = HashMap::default();
		by_path.reserve(self.records.len());

		for record in &self.records {
			self.insert(&mut by_path, *record);
		}

		let mut records: Vec<AssetRecord> = by_path
			.iter()
			.map(|(&path, &asset)| AssetRecord { path, asset })
			.collect();
		records.sort_unstable_by(|a, b| a.path.cmp(b.path));

		tracing::debug!(registry = self.label, assets = records.len(), "built asset index");

		IndexTable {
			label: self.label,
			records,
			by_path,
		}
	}

	fn insert(&self, map: &mut HashMap<&'static str, Asset>, record: AssetRecord) {
		let Some(existing) = map.get(record.path) else {
			map.insert(record.path, record.asset);
			return;
		};
		if existing.ptr_eq(&record.asset) {
			return;
		}
		match self.policy {
			DuplicatePolicy::Panic => panic!(
				"duplicate asset path in {}: path={:?} existing_size={} new_size={}",
				self.label,
				record.path,
				existing.size(),
				record.asset.size()
			),
			DuplicatePolicy::FirstWins => {
				tracing::warn!(registry = self.label, path = record.path, "duplicate asset path; keeping first");
			}
			DuplicatePolicy::LastWins => {
				tracing::warn!(registry = self.label, path = record.path, "duplicate asset path; keeping last");
				map.insert(record.path, record.asset);
			}
		}
	}
}
