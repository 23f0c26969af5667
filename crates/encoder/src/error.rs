//! Error types for asset encoding.
//!
//! Every variant is a build-time failure: the build script aborts instead of
//! emitting a table with assets silently missing.

use std::path::PathBuf;

use stow_registry_core::PathError;
use thiserror::Error;

/// Errors that can occur while scanning, encoding or writing a bundle.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// A variable cargo sets for build scripts is missing.
	#[error("environment variable {0} is not set; is this running from a build script?")]
	MissingEnv(&'static str),

	/// Error parsing TOML configuration text.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error parsing a configuration file.
	#[error("failed to parse {path}: {error}")]
	Config {
		/// Path to the configuration file.
		path: PathBuf,
		/// The underlying parse error.
		error: toml::de::Error,
	},

	/// The bundle name cannot be used in file names.
	#[error("invalid bundle name {0:?} (expected ASCII letters, digits, '-' or '_')")]
	InvalidBundle(String),

	/// The module name is not a Rust identifier.
	#[error("invalid module name {0:?} (expected a Rust identifier)")]
	InvalidModule(String),

	/// A mount prefix is not a canonical logical path.
	#[error("invalid mount prefix {prefix:?}: {error}")]
	InvalidPrefix {
		/// The offending prefix.
		prefix: String,
		/// Why it was rejected.
		error: PathError,
	},

	/// An exclude glob could not be compiled.
	#[error("invalid exclude pattern {pattern:?}: {error}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// The underlying glob error.
		error: globset::Error,
	},

	/// A mount root does not exist or is not a directory.
	#[error("asset root {} does not exist or is not a directory", .0.display())]
	MissingRoot(PathBuf),

	/// Walking a mount root failed.
	#[error("failed to walk {}: {error}", .root.display())]
	Walk {
		/// The mount root being walked.
		root: PathBuf,
		/// The underlying walk error.
		error: walkdir::Error,
	},

	/// A file path cannot be expressed as UTF-8.
	#[error("path {} is not valid UTF-8", .0.display())]
	NonUtf8Path(PathBuf),

	/// A file's logical path is not canonical (e.g. contains `\`).
	#[error("cannot embed {}: {error}", .file.display())]
	InvalidPath {
		/// The file on disk.
		file: PathBuf,
		/// Why its logical path was rejected.
		error: PathError,
	},

	/// Two different files map to the same logical path.
	#[error("logical path {path:?} maps to both {} and {}", .first.display(), .second.display())]
	DuplicatePath {
		/// The contested logical path.
		path: String,
		/// The file that claimed it first.
		first: PathBuf,
		/// The file that collided.
		second: PathBuf,
	},

	/// Error reading a source or configuration file.
	#[error("I/O error reading {}: {error}", .path.display())]
	Read {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error writing generated output.
	#[error("I/O error writing {}: {error}", .path.display())]
	Write {
		/// Path to the file that failed to write.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
