//! Path-keyed lookup over build-time embedded assets.
//!
//! # Purpose
//!
//! `stow-encoder` turns a directory tree into generated records at build
//! time. This crate turns those records into lookup tables and exposes one
//! read-only interface over them, [`AssetTable`], whatever strategy built the
//! table.
//!
//! # Construction Strategies
//!
//! | Type | Built | Lookup | Const-evaluable |
//! |------|-------|--------|-----------------|
//! | [`SortedTable`] | as a constant expression | binary search | yes |
//! | [`IndexTable`] | by [`IndexBuilder`] | hash probe | no |
//! | [`LazyTable`] | once, on first use, behind a `OnceLock` | hash probe | no |
//!
//! The encoder's embedding modes map onto these: const and module output
//! declare a [`SortedTable`]; explicit, implicit and extern output feed a
//! [`LazyTable`], the extern one through [`AssetReg`] inventory submissions.
//!
//! # Operations
//!
//! - [`AssetTable::load`]: the asset, or a panic naming the missing path
//! - [`AssetTable::try_load`]: `Option<Asset>`, never fails
//! - [`AssetTable::exists`]: membership, never fails
//! - [`AssetTable::require`]: `Result<Asset, LookupError>`
//!
//! # Invariants
//!
//! - Tables are never mutated after construction; reads need no locking.
//! - Paths compare byte-exact: no case folding, no separator normalization.
//! - Every strategy fed the same records answers every query identically.

mod index;
mod lazy;
mod sorted;
mod table;

pub use index::{AssetReg, DuplicatePolicy, IndexBuilder, IndexTable};
pub use lazy::LazyTable;
pub use sorted::SortedTable;
pub use stow_registry_core::{
	ASSET_ALIGN, Aligned, Asset, AssetRecord, LookupError, PathError, path,
};
pub use table::AssetTable;

#[doc(hidden)]
pub use inventory;
