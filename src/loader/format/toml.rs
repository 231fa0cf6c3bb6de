/* src/loader/format/toml.rs */

use serde::de::DeserializeOwned;

use super::{Format, LoadError};

/// TOML format parser using the `toml` crate.
pub struct Toml;

impl Format for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, LoadError> {
		let text = std::str::from_utf8(input).map_err(|e| LoadError::Parse(e.to_string()))?;
		toml::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))
	}
}
