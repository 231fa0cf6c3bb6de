/* src/cache/probe.rs */

use std::path::Path;
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::fs;

/// Filesystem metadata snapshot for one probed path.
#[derive(Debug, Clone, Copy)]
pub struct Stamp {
	/// Whether the path exists on disk.
	pub exists: bool,
	/// Last write time. Meaningless when `exists` is false.
	pub modified: SystemTime,
}

/// Supplies existence and last-write time for a path.
///
/// Injected into the cache so staleness decisions can be driven by
/// something other than the real filesystem (tests, virtual sources).
#[async_trait]
pub trait MetadataProbe: Send + Sync {
	async fn probe(&self, path: &Path) -> std::io::Result<Stamp>;
}

/// Default probe backed by `tokio::fs::metadata`.
///
/// Any handle opened for the probe is released before it returns; nothing
/// is retained across calls.
pub struct FsProbe;

#[async_trait]
impl MetadataProbe for FsProbe {
	async fn probe(&self, path: &Path) -> std::io::Result<Stamp> {
		match fs::metadata(path).await {
			Ok(meta) => Ok(Stamp {
				exists: true,
				modified: meta.modified()?,
			}),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Stamp {
				exists: false,
				modified: SystemTime::UNIX_EPOCH,
			}),
			Err(e) => Err(e),
		}
	}
}
