//! Global free-functions for internal beatmeta usage.

//---------------------------------------------------------------------------------------------------- Use
use std::num::NonZeroUsize;

//---------------------------------------------------------------------------------------------------- Constants
/// Upper bound on the worker pool size.
///
/// Extraction is mostly heavy I/O, more threads
/// than this start to impact negatively.
pub(crate) const MAX_WORKER_THREADS: usize = 4;

//---------------------------------------------------------------------------------------------------- Threads
/// How many worker threads a batch should use.
///
/// `min(4, available hardware concurrency)`, falling back
/// to 1 if concurrency information is unavailable.
pub(crate) fn threads() -> NonZeroUsize {
	let available = std::thread::available_parallelism()
		.map_or(1, NonZeroUsize::get);

	// Clamped to `1..=MAX_WORKER_THREADS`, never zero.
	NonZeroUsize::new(available.clamp(1, MAX_WORKER_THREADS)).unwrap_or(NonZeroUsize::MIN)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threads_is_bounded() {
		let t = threads().get();
		assert!(t >= 1);
		assert!(t <= MAX_WORKER_THREADS);
	}
}
