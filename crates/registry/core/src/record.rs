use crate::{Aligned, Asset};

/// Registration record: one per embedded file.
///
/// Produced by generated code, consumed by table constructors. The path is
/// the logical path exactly as the encoder assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRecord {
	/// Logical path, relative to the asset root and `/` separated.
	pub path: &'static str,
	/// The embedded bytes.
	pub asset: Asset,
}

impl AssetRecord {
	/// Creates a record for `path` over aligned static storage.
	#[inline]
	pub const fn new(path: &'static str, storage: &'static Aligned<[u8]>) -> Self {
		Self {
			path,
			asset: Asset::from_aligned(storage),
		}
	}

	/// Returns the embedded size in bytes.
	#[inline]
	pub const fn size(&self) -> usize {
		self.asset.size()
	}
}
