//! Cooperative batch cancellation.

//---------------------------------------------------------------------------------------------------- Use
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

//---------------------------------------------------------------------------------------------------- CancelToken
/// A cooperative cancellation signal for a running batch.
///
/// Workers consult the token before starting each item; an item
/// already in progress runs to completion, and result slots that
/// were already written are never rolled back. The batch call still
/// resolves, with unreached items marked
/// [`FailReason::NotProcessed`](crate::extract::FailReason::NotProcessed).
///
/// Cloning is cheap and all clones share the same flag.
/// If the progress observer tears down its side, map that
/// to calling [`CancelToken::cancel`].
#[derive(Clone,Debug,Default)]
pub struct CancelToken {
	/// Shared cancellation flag.
	cancelled: Arc<AtomicBool>,
}

//---------------------------------------------------------------------------------------------------- CancelToken Impl
impl CancelToken {
	#[must_use]
	/// A fresh, un-cancelled token.
	pub fn new() -> Self {
		Self::default()
	}

	/// Signal cancellation. Idempotent, never un-done.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Release);
	}

	#[must_use]
	/// `true` once [`CancelToken::cancel`] has been called on any clone.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Acquire)
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_the_flag() {
		let token = CancelToken::new();
		let clone = token.clone();
		assert!(!token.is_cancelled());
		assert!(!clone.is_cancelled());

		clone.cancel();
		assert!(token.is_cancelled());
		assert!(clone.is_cancelled());
	}
}
