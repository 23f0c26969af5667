//! Shared asset primitives.
//!
//! This crate provides the types both sides of the embedding pipeline agree on:
//! - [`Aligned`]: storage wrapper generated code places every file in
//! - [`Asset`]: non-owning, `Copy` view over one embedded file, with the
//!   [`Asset::get`] typed view
//! - [`AssetRecord`]: `{logical path, asset}` registration record
//! - [`path`]: logical path rules and a `const fn` comparison
//! - [`LookupError`], [`PathError`]: the error vocabulary

mod asset;
mod error;
pub mod path;
mod record;

pub use asset::{ASSET_ALIGN, Aligned, Asset};
pub use error::{LookupError, PathError};
pub use record::AssetRecord;
