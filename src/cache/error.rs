/* src/cache/error.rs */

use std::path::PathBuf;

use crate::loader::LoadError;

/// Errors surfaced by [`LoadingCache`](super::LoadingCache) operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
	/// The supplied path was empty. Raised before any filesystem access.
	#[error("path must not be empty")]
	EmptyPath,

	/// The path could not be resolved to an absolute form.
	#[error("cannot resolve path {path:?}: {source}")]
	Resolve {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The cache has been disposed; no further lookups are served.
	#[error("cache has been disposed")]
	Disposed,

	/// The probed path does not exist on disk.
	#[error("no such config source: {0:?}")]
	NotFound(PathBuf),

	/// The metadata probe itself failed.
	#[error("metadata probe failed for {path:?}: {source}")]
	Probe {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The loader failed. The same failure is handed to every caller
	/// waiting on the record and is never retried automatically.
	#[error("loader failed: {0}")]
	Loader(#[from] LoadError),
}
