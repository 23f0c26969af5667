//! Encoder configuration.
//!
//! An [`EncoderConfig`] is assembled either through the [`Encoder`](crate::Encoder)
//! builder or from a TOML file:
//!
//! ```toml
//! bundle = "ui"
//! mode = "const"          # extern | const | explicit | implicit | module
//! module = "assets"       # module name used by the module mode
//! exclude = ["**/*.tmp"]  # globs matched against logical paths
//!
//! [[mount]]
//! root = "assets"         # relative to this file
//!
//! [[mount]]
//! root = "../shaders"
//! prefix = "shaders"      # files appear as "shaders/<relative path>"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{EncodeError, Result};

/// Strategy for where and when the lookup table is constructed.
///
/// All modes embed the same paths and bytes; they differ only in the shape
/// of the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMode {
	/// Static storage registered through `inventory`; any crate in the final
	/// binary resolves the bundle with `LazyTable::from_inventory`.
	Extern,
	/// Constant storage and a `const` `SortedTable`, usable in constant
	/// evaluation.
	#[default]
	Const,
	/// Static storage and a `RECORDS` array; the consumer declares the one
	/// `LazyTable` over it.
	Explicit,
	/// Static storage, records and a private `LazyTable` in every module that
	/// includes the file.
	Implicit,
	/// A self-contained `pub mod` with static storage and a `static`
	/// `SortedTable`, usable in constant evaluation.
	Module,
}

impl EmbedMode {
	/// Every mode, in declaration order.
	pub const ALL: [EmbedMode; 5] = [
		EmbedMode::Extern,
		EmbedMode::Const,
		EmbedMode::Explicit,
		EmbedMode::Implicit,
		EmbedMode::Module,
	];

	/// Returns the lowercase name used in config files and output names.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Extern => "extern",
			Self::Const => "const",
			Self::Explicit => "explicit",
			Self::Implicit => "implicit",
			Self::Module => "module",
		}
	}

	/// Returns true when lookups can run during constant evaluation.
	pub fn const_evaluable(self) -> bool {
		matches!(self, Self::Const | Self::Module)
	}

	/// Returns the generated source file name for `bundle`.
	pub fn file_name(self, bundle: &str) -> String {
		format!("{bundle}.{}.rs", self.as_str())
	}
}

impl std::fmt::Display for EmbedMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A directory whose files are embedded under a logical path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mount {
	/// Directory to walk.
	pub root: PathBuf,
	/// Logical path prefix; empty embeds files at their root-relative path.
	#[serde(default)]
	pub prefix: String,
}

impl Mount {
	/// Creates a mount of `root` under `prefix`.
	pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
		Self {
			root: root.into(),
			prefix: prefix.into(),
		}
	}
}

/// Everything the encoder needs to know about one bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderConfig {
	/// Bundle name: label of the generated table and output file stem.
	pub bundle: String,
	/// Embedding mode used by [`Encoder::run`](crate::Encoder::run).
	#[serde(default)]
	pub mode: EmbedMode,
	/// Module name wrapped around module mode output.
	#[serde(default = "default_module")]
	pub module: String,
	/// Directories to embed.
	#[serde(default, rename = "mount")]
	pub mounts: Vec<Mount>,
	/// Globs matched against logical paths; matches are skipped.
	#[serde(default)]
	pub exclude: Vec<String>,
	/// Path generated code uses to reach `stow-registry`.
	#[serde(default = "default_crate_path")]
	pub crate_path: String,
	/// Whether to print `cargo:rerun-if-changed` directives.
	#[serde(default = "default_rerun")]
	pub rerun_if_changed: bool,
}

/// Reserved words that cannot name the generated module.
const KEYWORDS: &[&str] = &[
	"as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
	"false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
	"pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe",
	"use", "where", "while",
];

fn default_module() -> String {
	"assets".to_owned()
}

fn default_crate_path() -> String {
	"::stow_registry".to_owned()
}

fn default_rerun() -> bool {
	true
}

impl EncoderConfig {
	/// Creates a configuration with no mounts and default settings.
	pub fn new(bundle: impl Into<String>) -> Self {
		Self {
			bundle: bundle.into(),
			mode: EmbedMode::default(),
			module: default_module(),
			mounts: Vec::new(),
			exclude: Vec::new(),
			crate_path: default_crate_path(),
			rerun_if_changed: default_rerun(),
		}
	}

	/// Parses configuration from TOML text.
	///
	/// Relative mount roots are kept as written.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from a TOML file.
	///
	/// Relative mount roots are resolved against the file's directory.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = fs::read_to_string(path).map_err(|error| EncodeError::Read {
			path: path.to_path_buf(),
			error,
		})?;
		let mut config: Self = toml::from_str(&input).map_err(|error| EncodeError::Config {
			path: path.to_path_buf(),
			error,
		})?;

		let base = path.parent().unwrap_or(Path::new(""));
		for mount in &mut config.mounts {
			if mount.root.is_relative() {
				mount.root = base.join(&mount.root);
			}
		}

		config.validate()?;
		Ok(config)
	}

	/// Checks names that end up in file names and generated identifiers.
	pub fn validate(&self) -> Result<()> {
		let bundle_ok = !self.bundle.is_empty()
			&& self
				.bundle
				.bytes()
				.all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
		if !bundle_ok {
			return Err(EncodeError::InvalidBundle(self.bundle.clone()));
		}

		let mut chars = self.module.chars();
		let module_ok = chars
			.next()
			.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
			&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
			&& self.module != "_"
			&& !KEYWORDS.contains(&self.module.as_str());
		if !module_ok {
			return Err(EncodeError::InvalidModule(self.module.clone()));
		}

		for mount in &self.mounts {
			if !mount.prefix.is_empty() {
				stow_registry_core::path::validate(&mount.prefix).map_err(|error| {
					EncodeError::InvalidPrefix {
						prefix: mount.prefix.clone(),
						error,
					}
				})?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_parse_full_config() {
		let config = EncoderConfig::parse(
			r#"
			bundle = "ui"
			mode = "module"
			module = "ui_assets"
			exclude = ["**/*.tmp"]
			crate_path = "::my_registry"
			rerun_if_changed = false

			[[mount]]
			root = "assets"

			[[mount]]
			root = "shaders"
			prefix = "gpu/shaders"
			"#,
		)
		.unwrap();

		assert_eq!(config.bundle, "ui");
		assert_eq!(config.mode, EmbedMode::Module);
		assert_eq!(config.module, "ui_assets");
		assert_eq!(config.exclude, vec!["**/*.tmp".to_string()]);
		assert_eq!(config.crate_path, "::my_registry");
		assert!(!config.rerun_if_changed);
		assert_eq!(
			config.mounts,
			vec![Mount::new("assets", ""), Mount::new("shaders", "gpu/shaders")]
		);
	}

	#[test]
	fn test_parse_defaults() {
		let config = EncoderConfig::parse(r#"bundle = "min""#).unwrap();
		assert_eq!(config, EncoderConfig::new("min"));
	}

	#[test]
	fn test_unknown_field_rejected() {
		let err = EncoderConfig::parse("bundle = \"x\"\ncompress = true").unwrap_err();
		assert!(matches!(err, EncodeError::Toml(_)), "{err}");
	}

	#[test]
	fn test_unknown_mode_rejected() {
		let err = EncoderConfig::parse("bundle = \"x\"\nmode = \"header\"").unwrap_err();
		assert!(matches!(err, EncodeError::Toml(_)), "{err}");
	}

	#[test]
	fn test_invalid_names_rejected() {
		let err = EncoderConfig::parse(r#"bundle = "has space""#).unwrap_err();
		assert!(matches!(err, EncodeError::InvalidBundle(_)), "{err}");

		let err = EncoderConfig::parse("bundle = \"x\"\nmodule = \"1abc\"").unwrap_err();
		assert!(matches!(err, EncodeError::InvalidModule(_)), "{err}");

		let err = EncoderConfig::parse("bundle = \"x\"\n[[mount]]\nroot = \"a\"\nprefix = \"/abs\"")
			.unwrap_err();
		assert!(matches!(err, EncodeError::InvalidPrefix { .. }), "{err}");
	}

	#[test]
	fn test_load_resolves_relative_roots() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stow.toml");
		fs::write(&path, "bundle = \"x\"\n[[mount]]\nroot = \"assets\"\n").unwrap();

		let config = EncoderConfig::load(&path).unwrap();
		assert_eq!(config.mounts[0].root, dir.path().join("assets"));
	}

	#[test]
	fn test_load_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stow.toml");
		fs::write(&path, "bundle = ").unwrap();

		let err = EncoderConfig::load(&path).unwrap_err();
		assert!(matches!(&err, EncodeError::Config { path: p, .. } if p == &path), "{err}");
	}

	#[test]
	fn test_mode_names() {
		for mode in EmbedMode::ALL {
			let parsed = EncoderConfig::parse(&format!("bundle = \"x\"\nmode = \"{mode}\"")).unwrap();
			assert_eq!(parsed.mode, mode);
		}
		assert_eq!(EmbedMode::Const.file_name("ui"), "ui.const.rs");
		assert!(EmbedMode::Const.const_evaluable());
		assert!(EmbedMode::Module.const_evaluable());
		assert!(!EmbedMode::Extern.const_evaluable());
		assert!(!EmbedMode::Implicit.const_evaluable());
	}
}
