//! Generated source for each [`EmbedMode`].
//!
//! Every mode shares one shape for storage items:
//!
//! ```rust,ignore
//! static ASSET_LOGO_PNG: ::stow_registry::Aligned<[u8; 1234]> = ::stow_registry::Aligned {
//! 	bytes: *include_bytes!(concat!(env!("OUT_DIR"), "/stow/ui/ASSET_LOGO_PNG.bin")),
//! };
//! ```
//!
//! The length is part of the type, so a blob that changed size without the
//! source being regenerated fails to compile instead of misreporting `size`.
//! Output is a list of items suitable for `include!`; inner attributes are
//! never emitted.

use crate::EmbedMode;
use crate::bundle::{Bundle, EncodedAsset};

/// Renders `bundle` as Rust source for `mode`.
pub(crate) fn render(bundle: &Bundle, mode: EmbedMode) -> String {
	let r = Renderer {
		bundle,
		krate: bundle.crate_path(),
	};
	let mut out = r.header(mode);
	match mode {
		EmbedMode::Extern => r.extern_mode(&mut out),
		EmbedMode::Const => r.const_mode(&mut out),
		EmbedMode::Explicit => r.explicit_mode(&mut out),
		EmbedMode::Implicit => {
			r.explicit_mode(&mut out);
			r.lazy_table(&mut out, "");
		}
		EmbedMode::Module => r.module_mode(&mut out),
	}
	out
}

struct Renderer<'a> {
	bundle: &'a Bundle,
	krate: &'a str,
}

impl Renderer<'_> {
	fn header(&self, mode: EmbedMode) -> String {
		format!(
			"// @generated by stow-encoder from bundle {:?} ({mode} mode). Do not edit.\n\n",
			self.bundle.name()
		)
	}

	fn bundle_const(&self, out: &mut String, indent: &str) {
		out.push_str(&format!(
			"{indent}/// Name of this asset bundle.\n{indent}pub const BUNDLE: &str = {:?};\n\n",
			self.bundle.name()
		));
	}

	fn storage(&self, out: &mut String, indent: &str, item: &str) {
		let krate = self.krate;
		for asset in self.bundle.assets() {
			let blob = format!("/{}", self.bundle.blob_rel(asset));
			out.push_str(&format!(
				"{indent}{item} {sym}: {krate}::Aligned<[u8; {len}]> = {krate}::Aligned {{\n\
				 {indent}\tbytes: *include_bytes!(concat!(env!(\"OUT_DIR\"), {blob:?})),\n\
				 {indent}}};\n",
				sym = asset.symbol,
				len = asset.bytes.len(),
			));
		}
		if !self.bundle.assets().is_empty() {
			out.push('\n');
		}
	}

	fn record(&self, asset: &EncodedAsset) -> String {
		format!(
			"{}::AssetRecord::new({:?}, &{})",
			self.krate, asset.path, asset.symbol
		)
	}

	fn records_static(&self, out: &mut String, indent: &str) {
		let assets = self.bundle.assets();
		out.push_str(&format!(
			"{indent}/// Every embedded file, sorted by path.\n\
			 {indent}pub static RECORDS: [{}::AssetRecord; {}] = [\n",
			self.krate,
			assets.len()
		));
		for asset in assets {
			out.push_str(&format!("{indent}\t{},\n", self.record(asset)));
		}
		out.push_str(&format!("{indent}];\n\n"));
	}

	fn lazy_table(&self, out: &mut String, indent: &str) {
		out.push_str(&format!(
			"{indent}/// Lookup table over [`RECORDS`], built on first use.\n\
			 {indent}pub static ASSETS: {krate}::LazyTable = {krate}::LazyTable::new(BUNDLE, &RECORDS);\n",
			krate = self.krate
		));
	}

	fn extern_mode(&self, out: &mut String) {
		self.bundle_const(out, "");
		self.storage(out, "", "static");
		for asset in self.bundle.assets() {
			out.push_str(&format!(
				"{krate}::inventory::submit! {{ {krate}::AssetReg::new(BUNDLE, {}) }}\n",
				self.record(asset),
				krate = self.krate
			));
		}
	}

	fn const_mode(&self, out: &mut String) {
		let krate = self.krate;
		self.bundle_const(out, "");
		self.storage(out, "", "const");
		out.push_str(&format!(
			"/// Every embedded file, sorted by path.\npub const RECORDS: &[{krate}::AssetRecord] = &[\n"
		));
		for asset in self.bundle.assets() {
			out.push_str(&format!("\t{},\n", self.record(asset)));
		}
		out.push_str(&format!(
			"];\n\n\
			 /// Lookup table usable in constant evaluation.\n\
			 pub const ASSETS: {krate}::SortedTable = {krate}::SortedTable::new(BUNDLE, RECORDS);\n"
		));
	}

	fn explicit_mode(&self, out: &mut String) {
		self.bundle_const(out, "");
		self.storage(out, "", "static");
		self.records_static(out, "");
	}

	fn module_mode(&self, out: &mut String) {
		let krate = self.krate;
		out.push_str(&format!(
			"/// Assets embedded from bundle {:?}.\npub mod {} {{\n",
			self.bundle.name(),
			self.bundle.module()
		));
		self.bundle_const(out, "\t");
		self.storage(out, "\t", "static");
		self.records_static(out, "\t");
		out.push_str(&format!(
			"\t/// Lookup table usable in constant evaluation.\n\
			 \tpub static ASSETS: {krate}::SortedTable = {krate}::SortedTable::new(BUNDLE, &RECORDS);\n\
			 }}\n"
		));
	}
}
