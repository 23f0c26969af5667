//! Lookups resolved entirely at compile time.

use stow_fixtures::assets;
use stow_fixtures::const_mode::{ASSETS, RECORDS};
use stow_registry::Asset;

const TEN: Asset = ASSETS.load("binary/ten_bytes.bin");
const CONFIG: Asset = ASSETS.load("nested/deeply/placed/config.json");
const HAS_SHADER: bool = ASSETS.exists("gpu/blit.wgsl");
const HAS_SCRATCH: bool = ASSETS.exists("scratch.tmp");
const MISSING: Option<Asset> = ASSETS.try_load("binary/eleven_bytes.bin");

const _: () = assert!(TEN.size() == 10);
const _: () = assert!(TEN.bytes()[9] == 9);
const _: () = assert!(TEN.count_of::<u32>() == 2);
const _: () = assert!(ASSETS.len() == RECORDS.len());

const STUFF: Asset = assets::ASSETS.load("subfolder/stuff.txt");
const MODULE_HAS_SHADER: bool = assets::ASSETS.exists("gpu/blit.wgsl");
const MODULE_MISSING: Option<Asset> = assets::ASSETS.try_load("scratch.tmp");

const _: () = assert!(STUFF.size() == TEN.size() * 2);

static FIRST_WORD_BYTES: [u8; 4] = {
	let b = TEN.bytes();
	[b[0], b[1], b[2], b[3]]
};

#[test]
fn test_const_lookups() {
	assert!(HAS_SHADER);
	assert!(!HAS_SCRATCH);
	assert!(MISSING.is_none());
	assert_eq!(CONFIG.bytes().first(), Some(&b'{'));
	assert_eq!(FIRST_WORD_BYTES, [0, 1, 2, 3]);
}

#[test]
fn test_module_table_in_const_items() {
	assert!(MODULE_HAS_SHADER);
	assert!(MODULE_MISSING.is_none());
	assert_eq!(STUFF.size(), 20);
	assert_eq!(STUFF.bytes(), ASSETS.load("subfolder/stuff.txt").bytes());
}

#[test]
fn test_const_and_runtime_agree() {
	use stow_registry::AssetTable;

	let runtime = AssetTable::load(&ASSETS, "binary/ten_bytes.bin");
	assert_eq!(runtime, TEN);
	assert_eq!(ASSETS.label(), "fixtures");
}
