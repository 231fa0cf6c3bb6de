/* src/loader/error.rs */

use std::sync::Arc;

/// Core error type for loader implementations.
///
/// `Clone` so one failed load can be handed to every caller waiting on
/// the same cache record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
	/// Parsing error from a format implementation.
	#[error("parse error: {0}")]
	Parse(String),

	/// IO error while reading the source.
	#[error("io error: {0}")]
	Io(Arc<std::io::Error>),

	/// Any other loader-specific failure.
	#[error("{0}")]
	Other(String),
}

impl From<std::io::Error> for LoadError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(Arc::new(e))
	}
}
