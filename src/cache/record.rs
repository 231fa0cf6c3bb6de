/* src/cache/record.rs */

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use tokio::sync::OnceCell;

use crate::loader::{LoadError, Loader};

/// Per-identity cache state: the last-observed modification time and a
/// one-shot slot holding the load outcome.
///
/// The slot computes at most once: the first forcer runs the loader,
/// every concurrent forcer awaits the same in-flight computation, and all
/// of them receive the identical outcome. A failed load stays in the slot
/// and is handed out again on reuse.
pub(crate) struct CacheRecord<T> {
	/// Modification time observed when this record was installed.
	/// Never decreases for a given identity; a strictly newer time
	/// replaces the whole record instead.
	pub(crate) observed: SystemTime,
	slot: OnceCell<Result<Arc<T>, LoadError>>,
}

impl<T> CacheRecord<T>
where
	T: Send + Sync,
{
	pub(crate) fn new(observed: SystemTime) -> Self {
		Self {
			observed,
			slot: OnceCell::new(),
		}
	}

	/// Forces the slot, running `loader` if this record has never been
	/// loaded. Returns the shared outcome and whether this call was the
	/// one that actually executed the loader.
	pub(crate) async fn force<L>(
		&self,
		path: &Path,
		loader: &L,
	) -> (Result<Arc<T>, LoadError>, bool)
	where
		L: Loader<T> + ?Sized,
	{
		let ran = AtomicBool::new(false);

		let outcome = self
			.slot
			.get_or_init(|| async {
				ran.store(true, Ordering::Relaxed);
				loader.load(path).await.map(Arc::new)
			})
			.await;

		(outcome.clone(), ran.load(Ordering::Relaxed))
	}
}
