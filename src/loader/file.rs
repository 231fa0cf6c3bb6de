/* src/loader/file.rs */

use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use super::format::AnyFormat;
use super::{Format, LoadError, Loader};

/// A loader that reads a file with `tokio::fs` and parses it with a
/// specific [`Format`], combined at compile time.
pub struct FileLoader<F> {
	format: F,
}

impl<F> FileLoader<F>
where
	F: Format,
{
	pub const fn new(format: F) -> Self {
		Self { format }
	}
}

#[async_trait]
impl<T, F> Loader<T> for FileLoader<F>
where
	T: DeserializeOwned + Send,
	F: Format,
{
	async fn load(&self, path: &Path) -> Result<T, LoadError> {
		let bytes = fs::read(path).await?;
		self.format.parse(&bytes)
	}
}

/// A loader that selects the parser from the path's extension at runtime.
pub struct DynFileLoader {
	formats: Vec<AnyFormat>,
}

impl DynFileLoader {
	pub fn new(formats: Vec<AnyFormat>) -> Self {
		Self { formats }
	}

	/// A loader aware of every format enabled at compile time.
	pub fn all_formats() -> Self {
		Self::new(AnyFormat::enabled().to_vec())
	}

	fn select(&self, path: &Path) -> Result<AnyFormat, LoadError> {
		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.ok_or_else(|| LoadError::Parse("missing file extension".to_string()))?;

		self.formats
			.iter()
			.copied()
			.find(|format| format.extensions().contains(&ext))
			.ok_or_else(|| LoadError::Parse(format!("no parser registered for extension {ext:?}")))
	}
}

impl Default for DynFileLoader {
	fn default() -> Self {
		Self::all_formats()
	}
}

#[async_trait]
impl<T> Loader<T> for DynFileLoader
where
	T: DeserializeOwned + Send,
{
	async fn load(&self, path: &Path) -> Result<T, LoadError> {
		let format = self.select(path)?;
		let bytes = fs::read(path).await?;
		format.parse(&bytes)
	}
}
