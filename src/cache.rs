//! Best-effort duration cache shared across workers and batches.

//---------------------------------------------------------------------------------------------------- Use
use std::collections::{HashMap, HashSet};
use std::sync::{Condvar, Mutex};

//---------------------------------------------------------------------------------------------------- Inner
/// The cached entries plus the keys currently being computed.
#[derive(Debug, Default)]
struct Inner {
	/// Unique id → probed duration (seconds).
	map:     HashMap<String, f64>,
	/// Keys with a computation in flight; callers asking for
	/// one of these wait instead of computing a duplicate.
	pending: HashSet<String>,
}

//---------------------------------------------------------------------------------------------------- DurationCache
/// Unique id → previously probed duration (seconds).
///
/// Keyed by the request's _unique_ id, not its primary id, so
/// logically-same-audio requests share a slot even when their
/// primary ids differ.
///
/// Unbounded, no eviction. A cache hit is behaviorally equivalent
/// to re-probing the same resolved audio path; callers invalidate
/// with [`DurationCache::clear`] when audio content changes.
#[derive(Debug, Default)]
pub struct DurationCache {
	/// Map + pending set, one short critical section per operation.
	/// Computations themselves run outside this lock.
	inner:   Mutex<Inner>,
	/// Wakes callers waiting on a pending key.
	condvar: Condvar,
}

//---------------------------------------------------------------------------------------------------- PendingGuard
/// Clears a pending marker and wakes waiters on every
/// exit path out of a computation, panics included.
struct PendingGuard<'a> {
	cache: &'a DurationCache,
	key:   &'a str,
}

impl Drop for PendingGuard<'_> {
	fn drop(&mut self) {
		if let Ok(mut inner) = self.cache.inner.lock() {
			inner.pending.remove(self.key);
		}
		self.cache.condvar.notify_all();
	}
}

//---------------------------------------------------------------------------------------------------- DurationCache Impl
impl DurationCache {
	#[must_use]
	/// An empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	/// The cached duration for `key`, if any.
	pub fn get(&self, key: &str) -> Option<f64> {
		match self.inner.lock() {
			Ok(inner) => inner.map.get(key).copied(),
			// A poisoned lock means a worker panicked
			// mid-insert, treat it as a miss.
			Err(_) => None,
		}
	}

	/// Cache `duration` under `key`, replacing any previous value.
	pub fn set(&self, key: &str, duration: f64) {
		if let Ok(mut inner) = self.inner.lock() {
			inner.map.insert(key.to_string(), duration);
		}
	}

	/// Look up `key`, computing and caching on a miss.
	///
	/// Concurrent callers asking for the same key compute at most
	/// once combined: the first one in marks the key pending and
	/// runs `compute` with no lock held, the rest wait for its
	/// verdict. Different keys never serialize on each other.
	/// A `None` from `compute` is never cached; the next caller
	/// recomputes transparently.
	pub fn get_or_compute(&self, key: &str, compute: impl FnOnce() -> Option<f64>) -> Option<f64> {
		{
			let Ok(mut inner) = self.inner.lock() else {
				return compute();
			};

			loop {
				if let Some(duration) = inner.map.get(key) {
					return Some(*duration);
				}

				// No entry and nobody computing one: this caller does.
				if inner.pending.insert(key.to_string()) {
					break;
				}

				// Someone else is mid-compute on this key.
				inner = match self.condvar.wait(inner) {
					Ok(inner) => inner,
					Err(_) => return compute(),
				};
			}
		}

		let guard = PendingGuard { cache: self, key };
		let duration = compute();
		if let Some(duration) = duration {
			self.set(key, duration);
		}
		drop(guard);

		duration
	}

	/// Drop every entry.
	pub fn clear(&self) {
		if let Ok(mut inner) = self.inner.lock() {
			inner.map.clear();
		}
	}

	#[must_use]
	/// How many entries are cached.
	pub fn len(&self) -> usize {
		self.inner.lock().map_or(0, |inner| inner.map.len())
	}

	#[must_use]
	/// `true` if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
