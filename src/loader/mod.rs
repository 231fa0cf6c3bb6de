/* src/loader/mod.rs */

//!
//! The loader contract supplied by call sites, plus optional concrete
//! loaders that parse files through a [`Format`].

pub mod error;
pub mod file;
pub mod format;

pub use error::LoadError;
pub use file::{DynFileLoader, FileLoader};
pub use format::Format;

use std::path::Path;

use async_trait::async_trait;

/// Turns a path into a parsed configuration object.
///
/// Supplied by the caller per `get_or_load` call site; the cache does not
/// own it. For a given not-yet-stale identity the cache never invokes a
/// loader more than once concurrently.
#[async_trait]
pub trait Loader<T>: Send + Sync {
	async fn load(&self, path: &Path) -> Result<T, LoadError>;
}

/// Adapter turning a plain closure into a [`Loader`].
pub struct LoaderFn<F>(pub F);

#[async_trait]
impl<T, F> Loader<T> for LoaderFn<F>
where
	F: Fn(&Path) -> Result<T, LoadError> + Send + Sync,
	T: Send,
{
	async fn load(&self, path: &Path) -> Result<T, LoadError> {
		(self.0)(path)
	}
}
