/* src/lib.rs */

//!
//! A concurrency-safe loading cache for file-backed configuration sources.
//!
//! This crate integrates two components:
//!
//! - **cache**: the loading cache ([`LoadingCache`]) with single-flight
//!   loads, modification-time invalidation and deterministic disposal.
//! - **loader**: the [`Loader`] contract plus optional format-backed
//!   file loaders (JSON/TOML/YAML).
//!
//! Each distinct file is parsed at most once unless its modification time
//! strictly increases on disk; concurrent callers of the same file share a
//! single in-flight load and receive the same `Arc` value.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all format features.
//! - `json`, `toml`, `yaml`: Format parsers for the file loaders
//!   (`loader::FileLoader`, `loader::DynFileLoader`).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use confcache::{LoadingCache, loader::LoaderFn};
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), confcache::CacheError> {
//! let cache = LoadingCache::<String>::new();
//! let loader = LoaderFn(|path: &Path| {
//!     std::fs::read_to_string(path).map_err(Into::into)
//! });
//!
//! let value = cache.get_or_load("app.cfg", &loader).await?;
//! let again = cache.get_or_load("app.cfg", &loader).await?;
//! assert!(std::sync::Arc::ptr_eq(&value, &again));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod loader;

pub use cache::{
	CacheError, CaseMatching, FsProbe, Identity, LoadingCache, LoadingCacheBuilder, MetadataProbe,
	Stamp,
};
pub use loader::{LoadError, Loader, LoaderFn};
