//! Build script context: where inputs live, where outputs go, and how cargo
//! is told about them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{EncodeError, Result};

/// Directories a build script reads from and writes to.
#[derive(Debug, Clone)]
pub struct BuildCtx {
	/// The consuming crate's manifest directory.
	pub manifest_dir: PathBuf,
	/// Cargo's `OUT_DIR` for the consuming crate.
	pub out_dir: PathBuf,
	emit: bool,
}

impl BuildCtx {
	/// Reads `CARGO_MANIFEST_DIR` and `OUT_DIR` from the environment.
	pub fn from_env() -> Result<Self> {
		let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR")
			.ok_or(EncodeError::MissingEnv("CARGO_MANIFEST_DIR"))?;
		let out_dir = std::env::var_os("OUT_DIR").ok_or(EncodeError::MissingEnv("OUT_DIR"))?;
		Ok(Self::new(manifest_dir, out_dir))
	}

	/// Creates a context over explicit directories.
	pub fn new(manifest_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
		Self {
			manifest_dir: manifest_dir.into(),
			out_dir: out_dir.into(),
			emit: true,
		}
	}

	/// Suppresses `cargo:` directives, for use outside build scripts.
	pub fn quiet(mut self) -> Self {
		self.emit = false;
		self
	}

	/// Resolves `rel` against the manifest directory.
	pub fn asset(&self, rel: impl AsRef<Path>) -> PathBuf {
		self.manifest_dir.join(rel)
	}

	/// Tells cargo to rerun the build script when `path` changes.
	pub fn rerun_if_changed(&self, path: &Path) {
		if self.emit {
			println!("cargo:rerun-if-changed={}", path.display());
		}
	}

	/// Writes `contents` to `path` unless it already holds exactly that.
	///
	/// Returns true when the file was written. Leaving unchanged files alone
	/// keeps their timestamps, so cargo does not recompile the consumer.
	pub fn write_if_changed(&self, path: &Path, contents: &[u8]) -> Result<bool> {
		if fs::read(path).is_ok_and(|existing| existing == contents) {
			return Ok(false);
		}
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).map_err(|error| EncodeError::Write {
				path: parent.to_path_buf(),
				error,
			})?;
		}
		fs::write(path, contents).map_err(|error| EncodeError::Write {
			path: path.to_path_buf(),
			error,
		})?;
		Ok(true)
	}
}
