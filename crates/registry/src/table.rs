use stow_registry_core::{Asset, AssetRecord, LookupError};

/// Read-only lookup interface shared by every table construction strategy.
///
/// Implementors supply [`lookup`](Self::lookup), [`records`](Self::records)
/// and a label; the public operations are provided on top and behave the same
/// for every strategy:
///
/// | Operation | Absent path |
/// |-----------|-------------|
/// | [`load`](Self::load) | panics with [`LookupError::NotFound`] |
/// | [`require`](Self::require) | returns [`LookupError::NotFound`] |
/// | [`try_load`](Self::try_load) | returns `None` |
/// | [`exists`](Self::exists) | returns `false` |
///
/// Tables are immutable once built, so every operation is safe to call from
/// any number of threads.
pub trait AssetTable {
	/// Name used in diagnostics, usually the bundle name.
	fn label(&self) -> &'static str;

	/// Resolves `path` with a single hash probe or binary search.
	fn lookup(&self, path: &str) -> Option<Asset>;

	/// Returns every record, sorted by logical path.
	fn records(&self) -> &[AssetRecord];

	/// Membership test. Implementors override this when they can answer
	/// without materializing an [`Asset`].
	fn contains(&self, path: &str) -> bool {
		self.lookup(path).is_some()
	}

	/// Returns the number of embedded assets.
	fn len(&self) -> usize {
		self.records().len()
	}

	/// Returns true if nothing was embedded.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the asset at `path`.
	///
	/// # Panics
	///
	/// Panics if `path` was not embedded. Use this where absence is a bug.
	#[track_caller]
	fn load(&self, path: &str) -> Asset {
		match self.lookup(path) {
			Some(asset) => asset,
			None => panic!("{}", LookupError::not_found(self.label(), path)),
		}
	}

	/// Returns the asset at `path`, or `None` when it was not embedded.
	fn try_load(&self, path: &str) -> Option<Asset> {
		self.lookup(path)
	}

	/// Returns true when `path` was embedded.
	fn exists(&self, path: &str) -> bool {
		self.contains(path)
	}

	/// Returns the asset at `path`, or a [`LookupError`] to propagate.
	fn require(&self, path: &str) -> Result<Asset, LookupError> {
		self.lookup(path)
			.ok_or_else(|| LookupError::not_found(self.label(), path))
	}

	/// Iterates over all logical paths in sorted order.
	fn paths(&self) -> impl Iterator<Item = &'static str> + '_
	where
		Self: Sized,
	{
		self.records().iter().map(|record| record.path)
	}
}
