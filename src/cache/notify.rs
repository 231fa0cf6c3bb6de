/* src/cache/notify.rs */

use std::path::Path;

/// Callback invoked once per actual loader execution, never on a cache hit.
pub type ReadObserver = Box<dyn Fn(&Path) + Send + Sync>;

/// Ordered list of read observers, invoked synchronously after a load.
///
/// Observers are registered before the cache is built and fire in
/// registration order. Notification is best-effort: observers return
/// nothing and cannot alter the value handed back to callers.
pub(crate) struct ReadNotifier {
	observers: Vec<ReadObserver>,
}

impl ReadNotifier {
	pub(crate) fn new(observers: Vec<ReadObserver>) -> Self {
		Self { observers }
	}

	pub(crate) fn notify(&self, path: &Path) {
		for observer in &self.observers {
			observer(path);
		}
	}
}
