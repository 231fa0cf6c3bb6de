/* src/loader/format/json.rs */

use serde::de::DeserializeOwned;

use super::{Format, LoadError};

/// JSON format parser using `serde_json`.
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, LoadError> {
		serde_json::from_slice(input).map_err(|e| LoadError::Parse(e.to_string()))
	}
}
