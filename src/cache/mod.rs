/* src/cache/mod.rs */

//!
//! The loading cache: a concurrent map from path identity to a cache
//! record whose value loads at most once per observed modification time.

mod error;
mod identity;
mod notify;
mod probe;
mod record;

pub use error::CacheError;
pub use identity::{CaseMatching, Identity};
pub use notify::ReadObserver;
pub use probe::{FsProbe, MetadataProbe, Stamp};

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use arc_swap::ArcSwap;

use crate::loader::Loader;
use notify::ReadNotifier;
use record::CacheRecord;

/// A concurrency-safe loading cache for parsed configuration sources.
///
/// Uses RCU (Read-Copy-Update) over the identity map for lock-free
/// lookups and atomic insert-or-replace, with a one-shot slot per record
/// for single-flight loads. Coordination is scoped to callers touching
/// the same identity; unrelated keys never serialize against each other.
///
/// A record is replaced only when a strictly newer modification time is
/// observed at lookup; callers already forcing the old record keep their
/// in-flight or completed result.
pub struct LoadingCache<T> {
	records: ArcSwap<HashMap<Identity, Arc<CacheRecord<T>>>>,
	disposed: AtomicBool,
	probe: Arc<dyn MetadataProbe>,
	matching: CaseMatching,
	notifier: ReadNotifier,
}

/// Builder for [`LoadingCache`].
pub struct LoadingCacheBuilder<T> {
	probe: Option<Arc<dyn MetadataProbe>>,
	matching: CaseMatching,
	observers: Vec<ReadObserver>,
	_value: PhantomData<fn() -> T>,
}

impl<T> LoadingCacheBuilder<T>
where
	T: Send + Sync,
{
	pub fn new() -> Self {
		Self {
			probe: None,
			matching: CaseMatching::host_default(),
			observers: Vec::new(),
			_value: PhantomData,
		}
	}

	/// Overrides the filesystem metadata probe.
	pub fn probe(mut self, probe: impl MetadataProbe + 'static) -> Self {
		self.probe = Some(Arc::new(probe));
		self
	}

	/// Sets the case-sensitivity policy for path identity.
	pub fn case_matching(mut self, matching: CaseMatching) -> Self {
		self.matching = matching;
		self
	}

	/// Registers a read observer, invoked once per actual load.
	///
	/// Observers fire in registration order.
	pub fn on_read(mut self, observer: impl Fn(&Path) + Send + Sync + 'static) -> Self {
		self.observers.push(Box::new(observer));
		self
	}

	pub fn build(self) -> LoadingCache<T> {
		LoadingCache {
			records: ArcSwap::from_pointee(HashMap::new()),
			disposed: AtomicBool::new(false),
			probe: self.probe.unwrap_or_else(|| Arc::new(FsProbe)),
			matching: self.matching,
			notifier: ReadNotifier::new(self.observers),
		}
	}
}

impl<T> Default for LoadingCacheBuilder<T>
where
	T: Send + Sync,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T> LoadingCache<T>
where
	T: Send + Sync,
{
	/// Creates a cache with the default probe and host case policy.
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> LoadingCacheBuilder<T> {
		LoadingCacheBuilder::new()
	}

	/// Returns the parsed value for `path`, loading it at most once.
	///
	/// The loader runs only when no record exists for the path's identity
	/// or when the file's modification time has strictly increased since
	/// the cached record was installed. Concurrent callers of the same
	/// identity share one in-flight load and receive the same `Arc`; a
	/// loader failure is likewise shared, cached, and returned again on
	/// later calls until the file changes on disk.
	///
	/// Blocks (awaits) for the duration of the load when this caller is
	/// first, or until the in-flight load completes otherwise.
	pub async fn get_or_load<L>(
		&self,
		path: impl AsRef<Path>,
		loader: &L,
	) -> Result<Arc<T>, CacheError>
	where
		L: Loader<T> + ?Sized,
	{
		if self.disposed.load(Ordering::Acquire) {
			return Err(CacheError::Disposed);
		}

		let path = path.as_ref();
		if path.as_os_str().is_empty() {
			return Err(CacheError::EmptyPath);
		}

		let stamp = self
			.probe
			.probe(path)
			.await
			.map_err(|source| CacheError::Probe {
				path: path.to_path_buf(),
				source,
			})?;
		if !stamp.exists {
			return Err(CacheError::NotFound(path.to_path_buf()));
		}

		let key = Identity::normalize(path, self.matching)?;
		let record = self.install(&key, stamp.modified);

		let (outcome, loaded) = record.force(path, loader).await;

		match outcome {
			Ok(value) => {
				if loaded {
					self.notifier.notify(path);
				}
				Ok(value)
			}
			Err(e) => {
				if !loaded {
					tracing::warn!(
						path = %path.display(),
						"returning cached loader failure; file unchanged since it was recorded"
					);
				}
				Err(CacheError::Loader(e))
			}
		}
	}

	/// Atomically fetches the record for `key`, installing or replacing
	/// one when absent or stale.
	fn install(&self, key: &Identity, modified: SystemTime) -> Arc<CacheRecord<T>> {
		let fresh = Arc::new(CacheRecord::new(modified));

		// Capture the chosen record inside rcu so retries stay consistent.
		let chosen: RefCell<Arc<CacheRecord<T>>> = RefCell::new(Arc::clone(&fresh));

		self.records.rcu(|map| {
			let record = match map.get(key) {
				// Not stale: reuse, never re-invoke the loader.
				Some(existing) if existing.observed >= modified => Arc::clone(existing),
				// Absent or strictly newer mtime observed: (re)install.
				// Forcers of a replaced record keep their old result.
				_ => Arc::clone(&fresh),
			};
			*chosen.borrow_mut() = Arc::clone(&record);

			let mut new_map = (**map).clone();
			new_map.insert(key.clone(), record);
			new_map
		});

		let record = chosen.into_inner();
		if Arc::ptr_eq(&record, &fresh) {
			tracing::debug!(identity = key.as_str(), "installed fresh cache record");
		} else {
			tracing::debug!(identity = key.as_str(), "reusing cached record");
		}

		record
	}

	/// Clears the cache and rejects all further lookups.
	///
	/// Idempotent and one-way: the first call clears the record map and
	/// marks the cache disposed; later calls are no-ops. In-flight loads
	/// are neither cancelled nor awaited. A load already in flight when
	/// `dispose` runs may still complete and be returned to the callers
	/// that started it; whether that result should remain observable is
	/// deliberately left unspecified.
	pub fn dispose(&self) {
		if self.disposed.swap(true, Ordering::AcqRel) {
			return;
		}
		self.records.store(Arc::new(HashMap::new()));
		tracing::debug!("loading cache disposed");
	}

	/// Whether the cache has been disposed.
	pub fn is_disposed(&self) -> bool {
		self.disposed.load(Ordering::Acquire)
	}

	/// Number of cached records.
	pub fn len(&self) -> usize {
		let snapshot = self.records.load();
		snapshot.len()
	}

	/// Returns true if no records are cached.
	pub fn is_empty(&self) -> bool {
		let snapshot = self.records.load();
		snapshot.is_empty()
	}
}

impl<T> Default for LoadingCache<T>
where
	T: Send + Sync,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T> std::fmt::Debug for LoadingCache<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut s = f.debug_struct("LoadingCache");
		s.field("records", &self.records.load().len());
		s.field("disposed", &self.disposed.load(Ordering::Relaxed));
		s.field("matching", &self.matching);
		s.finish_non_exhaustive()
	}
}
