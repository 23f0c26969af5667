//! Encoded bundles and their on-disk output.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ctx::BuildCtx;
use crate::scan::SourceFile;
use crate::{EmbedMode, EncodeError, Result, render, symbol};

/// Directory under `OUT_DIR` that holds every bundle's blobs.
pub const BLOB_DIR: &str = "stow";

/// One file, read and assigned a storage identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
	/// Logical path.
	pub path: String,
	/// Identifier of the generated storage item.
	pub symbol: String,
	/// Location the bytes were read from.
	pub source: PathBuf,
	/// The file contents, verbatim.
	pub bytes: Vec<u8>,
}

/// Every file of one bundle, sorted by logical path.
#[derive(Debug, Clone)]
pub struct Bundle {
	name: String,
	module: String,
	crate_path: String,
	assets: Vec<EncodedAsset>,
}

/// What [`Bundle::write`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
	/// The generated source file, ready for `include!`.
	pub source: PathBuf,
	/// Number of blob files backing the source.
	pub blobs: usize,
	/// Number of files actually rewritten; zero when nothing changed.
	pub changed: usize,
}

impl Bundle {
	/// Reads every file in `files`.
	///
	/// `files` must be sorted by logical path and free of duplicates, as
	/// returned by [`Encoder::scan`](crate::Encoder::scan).
	pub fn encode(
		name: impl Into<String>,
		module: impl Into<String>,
		crate_path: impl Into<String>,
		files: Vec<SourceFile>,
	) -> Result<Self> {
		let symbols = symbol::assign(files.iter().map(|f| f.path.as_str()));
		let assets = files
			.into_iter()
			.zip(symbols)
			.map(|(file, symbol)| {
				let bytes = fs::read(&file.source).map_err(|error| EncodeError::Read {
					path: file.source.clone(),
					error,
				})?;
				Ok(EncodedAsset {
					path: file.path,
					symbol,
					source: file.source,
					bytes,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let bundle = Self {
			name: name.into(),
			module: module.into(),
			crate_path: crate_path.into(),
			assets,
		};
		tracing::debug!(
			bundle = %bundle.name,
			assets = bundle.assets.len(),
			bytes = bundle.total_bytes(),
			"encoded bundle"
		);
		Ok(bundle)
	}

	/// Returns the bundle name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the module name used by [`EmbedMode::Module`].
	pub fn module(&self) -> &str {
		&self.module
	}

	/// Returns the path generated code uses to reach `stow-registry`.
	pub fn crate_path(&self) -> &str {
		&self.crate_path
	}

	/// Returns the encoded files, sorted by logical path.
	pub fn assets(&self) -> &[EncodedAsset] {
		&self.assets
	}

	/// Returns the asset registered under `path`.
	pub fn get(&self, path: &str) -> Option<&EncodedAsset> {
		self.assets
			.binary_search_by(|a| a.path.as_str().cmp(path))
			.ok()
			.map(|i| &self.assets[i])
	}

	/// Returns the summed size of every file.
	pub fn total_bytes(&self) -> usize {
		self.assets.iter().map(|a| a.bytes.len()).sum()
	}

	/// Returns the blob location of `asset`, relative to `OUT_DIR`.
	pub fn blob_rel(&self, asset: &EncodedAsset) -> String {
		format!("{BLOB_DIR}/{}/{}.bin", self.name, asset.symbol)
	}

	/// Returns the directory holding this bundle's blobs.
	pub fn blob_dir(&self, out_dir: &Path) -> PathBuf {
		out_dir.join(BLOB_DIR).join(&self.name)
	}

	/// Renders the generated source for `mode` without touching disk.
	pub fn render(&self, mode: EmbedMode) -> String {
		render::render(self, mode)
	}

	/// Writes blobs and the generated source for `mode` into `ctx.out_dir`.
	///
	/// Unchanged files are left alone and blobs no longer part of the
	/// bundle are removed, so repeated builds are byte-identical.
	pub fn write(&self, ctx: &BuildCtx, mode: EmbedMode) -> Result<Output> {
		let mut changed = 0;
		for asset in &self.assets {
			let path = ctx.out_dir.join(self.blob_rel(asset));
			if ctx.write_if_changed(&path, &asset.bytes)? {
				changed += 1;
			}
		}
		self.remove_stale_blobs(&ctx.out_dir)?;

		let source = ctx.out_dir.join(mode.file_name(&self.name));
		if ctx.write_if_changed(&source, self.render(mode).as_bytes())? {
			changed += 1;
		}

		tracing::debug!(
			bundle = %self.name,
			%mode,
			source = %source.display(),
			changed,
			"wrote bundle output"
		);
		Ok(Output {
			source,
			blobs: self.assets.len(),
			changed,
		})
	}

	fn remove_stale_blobs(&self, out_dir: &Path) -> Result<()> {
		let dir = self.blob_dir(out_dir);
		let Ok(entries) = fs::read_dir(&dir) else {
			return Ok(());
		};
		let live: HashSet<String> = self
			.assets
			.iter()
			.map(|a| format!("{}.bin", a.symbol))
			.collect();

		for entry in entries.flatten() {
			let path = entry.path();
			let stale = path.extension().is_some_and(|ext| ext == "bin")
				&& entry
					.file_name()
					.to_str()
					.is_none_or(|name| !live.contains(name));
			if stale {
				tracing::debug!(path = %path.display(), "removing stale blob");
				fs::remove_file(&path).map_err(|error| EncodeError::Write { path, error })?;
			}
		}
		Ok(())
	}
}
