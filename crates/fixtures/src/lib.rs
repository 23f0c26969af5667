//! The `assets/` and `shaders/` trees of this crate, embedded once per
//! embedding mode by `build.rs`.
//!
//! Every module below exposes the same `{path, bytes}` contents through a
//! different construction strategy; the integration tests hold them to one
//! contract.

use std::path::PathBuf;

use stow_registry::{AssetTable, LazyTable};

/// Constant storage and a const-evaluable table.
pub mod const_mode {
	include!(concat!(env!("OUT_DIR"), "/fixtures.const.rs"));
}

// Declares `pub mod assets`.
include!(concat!(env!("OUT_DIR"), "/fixtures.module.rs"));

/// Static storage; this module owns the one lazily built table.
pub mod explicit_mode {
	include!(concat!(env!("OUT_DIR"), "/fixtures.explicit.rs"));

	/// Lookup table over [`RECORDS`].
	pub static ASSETS: super::LazyTable = super::LazyTable::new(BUNDLE, &RECORDS);
}

/// First of two modules including the same implicit output.
pub mod implicit_a {
	include!(concat!(env!("OUT_DIR"), "/fixtures.implicit.rs"));
}

/// Second include; owns its own copy of storage and table.
pub mod implicit_b {
	include!(concat!(env!("OUT_DIR"), "/fixtures.implicit.rs"));
}

/// Storage registered through inventory.
pub mod extern_mode {
	include!(concat!(env!("OUT_DIR"), "/fixtures.extern.rs"));
}

/// Handle to the inventory-registered bundle; any crate linking this one
/// could declare the same.
pub static EXTERN_ASSETS: LazyTable = LazyTable::from_inventory(extern_mode::BUNDLE);

/// Every table over the fixture bundle, by strategy name.
pub fn tables() -> [(&'static str, &'static dyn AssetTable); 6] {
	[
		("const", &const_mode::ASSETS),
		("module", &assets::ASSETS),
		("explicit", &explicit_mode::ASSETS),
		("implicit_a", &implicit_a::ASSETS),
		("implicit_b", &implicit_b::ASSETS),
		("extern", &EXTERN_ASSETS),
	]
}

/// Looks up a table by the name [`tables`] lists it under.
pub fn table(name: &str) -> Option<&'static dyn AssetTable> {
	tables()
		.into_iter()
		.find_map(|(n, table)| (n == name).then_some(table))
}

/// Source files of the bundle on disk, by logical path.
pub fn source_files() -> Vec<(String, PathBuf)> {
	let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	const_mode::RECORDS
		.iter()
		.map(|record| {
			let source = match record.path.strip_prefix("gpu/") {
				Some(rest) => root.join("shaders").join(rest),
				None => root.join("assets").join(record.path),
			};
			(record.path.to_owned(), source)
		})
		.collect()
}
