use std::sync::OnceLock;

use stow_registry_core::{Asset, AssetRecord};

use crate::{AssetTable, IndexBuilder, IndexTable};

/// Where a [`LazyTable`] gathers its records from.
#[derive(Debug, Clone, Copy)]
enum Source {
	Records(&'static [AssetRecord]),
	Inventory,
}

/// A hashed table built once, on first use.
///
/// Construction is guarded by a [`OnceLock`], so concurrent first callers
/// block until the single build finishes and no reader ever sees a partial
/// index. Declare it as a `static`:
///
/// ```rust,ignore
/// pub static ASSETS: LazyTable = LazyTable::new(BUNDLE, &RECORDS);
/// pub static SHARED: LazyTable = LazyTable::from_inventory("ui");
/// ```
pub struct LazyTable {
	label: &'static str,
	source: Source,
	index: OnceLock<IndexTable>,
}

impl LazyTable {
	/// Creates a table over generated records.
	pub const fn new(label: &'static str, records: &'static [AssetRecord]) -> Self {
		Self {
			label,
			source: Source::Records(records),
			index: OnceLock::new(),
		}
	}

	/// Creates a table over every record submitted for `bundle` via inventory.
	pub const fn from_inventory(bundle: &'static str) -> Self {
		Self {
			label: bundle,
			source: Source::Inventory,
			index: OnceLock::new(),
		}
	}

	/// Returns the index, building it if this is the first use.
	pub fn index(&self) -> &IndexTable {
		self.index.get_or_init(|| {
			let builder = IndexBuilder::new(self.label);
			match self.source {
				Source::Records(records) => builder.extend(records.iter().copied()),
				Source::Inventory => builder.extend_inventory(self.label),
			}
			.build()
		})
	}

	/// Returns true once the index has been built.
	pub fn is_built(&self) -> bool {
		self.index.get().is_some()
	}
}

impl AssetTable for LazyTable {
	fn label(&self) -> &'static str {
		self.label
	}

	#[inline]
	fn lookup(&self, path: &str) -> Option<Asset> {
		self.index().get(path)
	}

	fn records(&self) -> &[AssetRecord] {
		self.index().records()
	}

	#[inline]
	fn contains(&self, path: &str) -> bool {
		self.index().contains(path)
	}
}

impl std::fmt::Debug for LazyTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LazyTable")
			.field("label", &self.label)
			.field("source", &self.source)
			.field("built", &self.is_built())
			.finish()
	}
}
