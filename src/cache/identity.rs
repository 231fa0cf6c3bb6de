/* src/cache/identity.rs */

use std::path::{Component, Path, PathBuf};

use super::CacheError;

/// Case-sensitivity policy for path comparison.
///
/// Must stay fixed for the lifetime of a cache instance; it is set when
/// the cache is built and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMatching {
	/// Paths differing only in case are distinct identities.
	Sensitive,
	/// Paths differing only in case share one identity.
	Insensitive,
}

impl CaseMatching {
	/// The conventional policy for the host platform.
	pub fn host_default() -> Self {
		if cfg!(any(windows, target_os = "macos")) {
			Self::Insensitive
		} else {
			Self::Sensitive
		}
	}
}

impl Default for CaseMatching {
	fn default() -> Self {
		Self::host_default()
	}
}

/// Comparable, hashable identity of one on-disk configuration source.
///
/// Two identities are equal iff their normalized absolute paths compare
/// equal under the cache's [`CaseMatching`] policy; the `Hash` impl is
/// consistent with that equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
	/// Normalizes a path into an identity.
	///
	/// Relative paths are resolved lexically against the current working
	/// directory; no filesystem metadata is consulted. Fails with
	/// [`CacheError::EmptyPath`] for an empty path.
	pub fn normalize(path: &Path, matching: CaseMatching) -> Result<Self, CacheError> {
		if path.as_os_str().is_empty() {
			return Err(CacheError::EmptyPath);
		}

		let absolute = std::path::absolute(path).map_err(|source| CacheError::Resolve {
			path: path.to_path_buf(),
			source,
		})?;

		// `std::path::absolute` keeps `..` segments; collapse them so
		// aliased spellings of one file share an identity.
		let mut resolved = PathBuf::new();
		for component in absolute.components() {
			match component {
				Component::CurDir => {}
				Component::ParentDir => {
					resolved.pop();
				}
				other => resolved.push(other),
			}
		}

		let text = resolved.to_string_lossy();
		let key = match matching {
			CaseMatching::Sensitive => text.into_owned(),
			CaseMatching::Insensitive => text.to_lowercase(),
		};

		Ok(Self(key))
	}

	/// The normalized key string backing this identity.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
