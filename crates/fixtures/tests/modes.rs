//! Every embedding mode of the fixture bundle, held to one contract.

use std::fs;

use proptest::prelude::*;
use rstest::rstest;
use stow_fixtures::{assets, const_mode, implicit_a, implicit_b, source_files, table, tables};
use stow_registry::{ASSET_ALIGN, AssetTable, LookupError};

const PATHS: [&str; 10] = [
	"binary/empty.bin",
	"binary/ten_bytes.bin",
	"gpu/blit.wgsl",
	"names/with-dash.txt",
	"names/with_dash.txt",
	"nested/deeply/placed/config.json",
	"subfolder/morestuff.txt",
	"subfolder/stuff.txt",
	"text/Readme.TXT",
	"text/crlf.txt",
];

fn by_name(name: &str) -> &'static dyn AssetTable {
	table(name).unwrap_or_else(|| panic!("unknown table {name}"))
}

#[rstest]
fn test_paths_are_exactly_the_tree(
	#[values("const", "module", "explicit", "implicit_a", "implicit_b", "extern")] name: &str,
) {
	let paths: Vec<_> = by_name(name).records().iter().map(|r| r.path).collect();
	assert_eq!(paths, PATHS, "{name}");
}

#[rstest]
fn test_bytes_match_disk(
	#[values("const", "module", "explicit", "implicit_a", "implicit_b", "extern")] name: &str,
) {
	let table = by_name(name);
	for (path, source) in source_files() {
		let expected = fs::read(&source).unwrap();
		let asset = table.load(&path);
		assert_eq!(asset.bytes(), expected.as_slice(), "{name}: {path}");
		assert_eq!(asset.size(), expected.len());
	}
}

#[test]
fn test_modes_agree_with_each_other() {
	let reference = by_name("const");
	for (name, table) in tables() {
		assert_eq!(table.len(), reference.len(), "{name}");
		for record in reference.records() {
			assert_eq!(table.load(record.path), record.asset, "{name}: {}", record.path);
		}
	}
}

#[rstest]
fn test_storage_is_aligned(
	#[values("const", "module", "explicit", "implicit_a", "implicit_b", "extern")] name: &str,
) {
	for record in by_name(name).records() {
		assert_eq!(record.asset.as_ptr() as usize % ASSET_ALIGN, 0, "{name}: {}", record.path);
	}
}

#[rstest]
fn test_excluded_and_unknown_paths_are_absent(
	#[values("const", "module", "explicit", "implicit_a", "implicit_b", "extern")] name: &str,
	#[values(
		"scratch.tmp",
		"does/not/exist",
		"text/readme.txt",
		"TEXT/Readme.TXT",
		"shaders/blit.wgsl",
		"blit.wgsl",
		"subfolder",
		"subfolder/"
	)]
	path: &str,
) {
	let table = by_name(name);
	assert!(!table.exists(path));
	assert_eq!(table.try_load(path), None);
	assert_eq!(
		table.require(path),
		Err(LookupError::NotFound {
			registry: "fixtures",
			path: path.into(),
		})
	);
}

#[rstest]
#[should_panic(expected = "asset not found: \"does/not/exist\" (registry `fixtures`)")]
fn test_load_of_missing_path_panics(
	#[values("const", "module", "explicit", "implicit_a", "implicit_b", "extern")] name: &str,
) {
	let _ = by_name(name).load("does/not/exist");
}

#[test]
fn test_typed_view_truncates() {
	let ten = const_mode::ASSETS.load("binary/ten_bytes.bin");
	let words = ten.get::<u32>();
	assert_eq!(words.len(), 2);
	assert_eq!(words[0], u32::from_ne_bytes([0, 1, 2, 3]));
	assert_eq!(words[1], u32::from_ne_bytes([4, 5, 6, 7]));
	assert_eq!(ten.get::<u64>().len(), 1);
	assert!(ten.get::<u128>().is_empty());
}

#[test]
fn test_empty_file_is_present_and_empty() {
	for (name, table) in tables() {
		let asset = table.try_load("binary/empty.bin").expect(name);
		assert!(asset.is_empty(), "{name}");
		assert!(asset.get::<u8>().is_empty());
	}
}

#[test]
fn test_line_endings_are_preserved() {
	let text = assets::ASSETS.load("text/crlf.txt");
	assert_eq!(text.as_str(), Ok("first line\r\nsecond line\r\n"));
}

#[test]
fn test_implicit_includes_own_separate_storage() {
	let a = implicit_a::ASSETS.load("subfolder/stuff.txt");
	let b = implicit_b::ASSETS.load("subfolder/stuff.txt");
	assert_eq!(a, b);
	assert!(!a.ptr_eq(&b));
}

#[test]
fn test_bundle_names() {
	assert_eq!(const_mode::BUNDLE, "fixtures");
	assert_eq!(assets::BUNDLE, "fixtures");
	for (name, table) in tables() {
		assert_eq!(table.label(), "fixtures", "{name}");
	}
}

proptest! {
	#[test]
	fn prop_every_mode_is_total(path in "[a-zA-Z_./-]{0,32}") {
		let expected = PATHS.contains(&path.as_str());
		for (name, table) in tables() {
			prop_assert_eq!(table.exists(&path), expected, "{}", name);
			prop_assert_eq!(table.try_load(&path).is_some(), expected, "{}", name);
		}
	}
}
