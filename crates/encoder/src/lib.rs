//! Build-time encoder for `stow-registry` asset bundles.
//!
//! # Purpose
//!
//! Walks one or more asset directories from a build script, copies every
//! file verbatim into `OUT_DIR`, and generates Rust source that embeds those
//! files with `include_bytes!` and registers them under their logical path.
//!
//! # Usage
//!
//! ```rust,no_run
//! // build.rs
//! fn main() {
//! 	stow_encoder::Encoder::new("ui")
//! 		.mount("assets")
//! 		.exclude("**/*.psd")
//! 		.run()
//! 		.unwrap_or_else(|e| panic!("{e}"));
//! }
//! ```
//!
//! ```rust,ignore
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/ui.const.rs"));
//!
//! const LOGO: stow_registry::Asset = ASSETS.load("logo.png");
//! ```
//!
//! # Invariants
//!
//! - Bytes are never transcoded, normalized or compressed.
//! - Identical inputs produce byte-identical outputs, and unchanged outputs
//!   are not rewritten.
//! - Scanning and reading finish before anything is written, so bad input
//!   never leaves a partial table behind. Only an I/O failure while writing
//!   can stop a multi-mode run part way.

mod bundle;
mod config;
mod ctx;
mod error;
mod render;
mod scan;
mod symbol;

use std::path::{Path, PathBuf};

pub use bundle::{BLOB_DIR, Bundle, EncodedAsset, Output};
pub use config::{EmbedMode, EncoderConfig, Mount};
pub use ctx::BuildCtx;
pub use error::{EncodeError, Result};
pub use scan::SourceFile;

/// Builder and driver for one bundle.
#[derive(Debug, Clone)]
pub struct Encoder {
	config: EncoderConfig,
	config_file: Option<PathBuf>,
}

impl Encoder {
	/// Starts a bundle with no mounts and default settings.
	pub fn new(bundle: impl Into<String>) -> Self {
		Self::from_config(EncoderConfig::new(bundle))
	}

	/// Uses an already assembled configuration.
	pub fn from_config(config: EncoderConfig) -> Self {
		Self {
			config,
			config_file: None,
		}
	}

	/// Loads configuration from a TOML file.
	///
	/// The file itself is reported to cargo alongside the asset roots.
	pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		Ok(Self {
			config: EncoderConfig::load(path)?,
			config_file: Some(path.to_path_buf()),
		})
	}

	/// Adds a directory whose files keep their root-relative paths.
	pub fn mount(self, root: impl Into<PathBuf>) -> Self {
		self.mount_at(root, "")
	}

	/// Adds a directory whose files appear under `prefix/`.
	pub fn mount_at(mut self, root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
		self.config.mounts.push(Mount::new(root, prefix));
		self
	}

	/// Skips files whose logical path matches `glob`.
	pub fn exclude(mut self, glob: impl Into<String>) -> Self {
		self.config.exclude.push(glob.into());
		self
	}

	/// Sets the mode used by [`write`](Self::write) and [`run`](Self::run).
	pub fn mode(mut self, mode: EmbedMode) -> Self {
		self.config.mode = mode;
		self
	}

	/// Sets the module name wrapped around module mode output.
	pub fn module(mut self, name: impl Into<String>) -> Self {
		self.config.module = name.into();
		self
	}

	/// Sets the path generated code uses to reach `stow-registry`.
	pub fn crate_path(mut self, path: impl Into<String>) -> Self {
		self.config.crate_path = path.into();
		self
	}

	/// Enables or disables `cargo:rerun-if-changed` output.
	pub fn rerun_if_changed(mut self, enabled: bool) -> Self {
		self.config.rerun_if_changed = enabled;
		self
	}

	/// Returns the current configuration.
	pub fn config(&self) -> &EncoderConfig {
		&self.config
	}

	/// Lists the files that would be embedded, without reading them.
	///
	/// Relative mount roots resolve against the working directory.
	pub fn scan(&self) -> Result<Vec<SourceFile>> {
		self.config.validate()?;
		let exclude = scan::exclude_set(&self.config.exclude)?;
		scan::scan(&self.config.mounts, &exclude)
	}

	/// Scans and reads every file into a [`Bundle`].
	pub fn encode(&self) -> Result<Bundle> {
		Bundle::encode(
			&self.config.bundle,
			&self.config.module,
			&self.config.crate_path,
			self.scan()?,
		)
	}

	/// Encodes and writes the configured mode into `ctx.out_dir`.
	pub fn write(&self, ctx: &BuildCtx) -> Result<Output> {
		let mut outputs = self.write_modes(ctx, &[self.config.mode])?;
		Ok(outputs.remove(0))
	}

	/// Encodes once and writes one source file per entry of `modes`.
	///
	/// All modes share the same blobs.
	pub fn write_modes(&self, ctx: &BuildCtx, modes: &[EmbedMode]) -> Result<Vec<Output>> {
		let resolved = self.resolve(ctx);
		let bundle = resolved.encode()?;
		resolved.emit_rerun(ctx, &bundle);
		modes.iter().map(|&mode| bundle.write(ctx, mode)).collect()
	}

	/// Runs from a build script: reads cargo's environment and writes the
	/// configured mode.
	pub fn run(&self) -> Result<Output> {
		self.write(&BuildCtx::from_env()?)
	}

	/// Anchors relative mount roots at the manifest directory.
	fn resolve(&self, ctx: &BuildCtx) -> Self {
		let mut resolved = self.clone();
		for mount in &mut resolved.config.mounts {
			if mount.root.is_relative() {
				mount.root = ctx.asset(&mount.root);
			}
		}
		resolved
	}

	fn emit_rerun(&self, ctx: &BuildCtx, bundle: &Bundle) {
		if !self.config.rerun_if_changed {
			return;
		}
		if let Some(file) = &self.config_file {
			ctx.rerun_if_changed(file);
		}
		for mount in &self.config.mounts {
			ctx.rerun_if_changed(&mount.root);
		}
		for asset in bundle.assets() {
			ctx.rerun_if_changed(&asset.source);
		}
	}
}
