//! Throttled, ordered progress delivery to an external observer.

//---------------------------------------------------------------------------------------------------- Use
use crate::batch::CancelToken;
use crate::macros::{debug2, trace2};
use crossbeam::channel::{unbounded, Receiver, Sender};
use std::thread::JoinHandle;

//---------------------------------------------------------------------------------------------------- Constants
/// Workers report once per this many processed items.
///
/// The final item always triggers a report, so the observer
/// sees completion even for batches smaller than the interval.
pub(crate) const PROGRESS_UPDATE_INTERVAL: usize = 50;

//---------------------------------------------------------------------------------------------------- ProgressCallback
/// How a batch delivers processed-item counts to its observer.
///
/// The observed sequence is strictly increasing and the last
/// delivered value equals the total item count (unless the
/// batch was cancelled first).
pub enum ProgressCallback {
	/// Dynamically dispatched function.
	Dynamic(Box<dyn FnMut(usize) + Send + 'static>),
	/// Channel message.
	Channel(Sender<usize>),
	/// Function pointer.
	Pointer(fn(usize)),
}

impl ProgressCallback {
	/// "Call" a [`ProgressCallback`] with the current count.
	///
	/// Returns `false` if the observer is known to be gone,
	/// i.e. a [`ProgressCallback::Channel`] whose receiver
	/// was dropped. Functions cannot signal this.
	pub(crate) fn call(&mut self, count: usize) -> bool {
		match self {
			Self::Dynamic(x) => { x(count); true },
			Self::Channel(x) => x.try_send(count).is_ok(),
			Self::Pointer(x) => { x(count); true },
		}
	}
}

impl std::fmt::Debug for ProgressCallback {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Dynamic(_) => write!(f, "ProgressCallback::Dynamic"),
			Self::Channel(_) => write!(f, "ProgressCallback::Channel"),
			Self::Pointer(_) => write!(f, "ProgressCallback::Pointer"),
		}
	}
}

//---------------------------------------------------------------------------------------------------- Reporter
/// The single-consumer side of progress delivery.
///
/// Workers post counts concurrently on a channel; one dispatch
/// thread forwards them to the callback, filtered to a strictly
/// increasing sequence, so a slow observer never blocks a worker
/// and never sees counts run backwards.
#[derive(Debug)]
pub(crate) struct Reporter {
	/// Cloned into each worker.
	sender: Sender<usize>,
	/// The dispatch thread, joined on teardown.
	handle: JoinHandle<()>,
}

//---------------------------------------------------------------------------------------------------- Reporter Impl
impl Reporter {
	/// Spawn the progress-dispatch thread.
	///
	/// A [`ProgressCallback::Channel`] observer dropping its receiver
	/// is taken as the caller tearing down; dispatch cancels `cancel`
	/// and stops forwarding so the batch can resolve early.
	pub(crate) fn spawn(mut callback: ProgressCallback, cancel: CancelToken) -> Result<Self, std::io::Error> {
		let (sender, receiver): (Sender<usize>, Receiver<usize>) = unbounded();

		let handle = std::thread::Builder::new()
			.name("Progress".into())
			.spawn(move || {
				debug2!("Progress - dispatch thread spawned");

				let mut last = 0;
				// Ends when every worker-held `Sender` has been dropped.
				while let Ok(count) = receiver.recv() {
					if count > last {
						last = count;
						trace2!("Progress - {count}");
						if !callback.call(count) {
							debug2!("Progress - observer disconnected, cancelling batch");
							cancel.cancel();
							break;
						}
					}
				}

				debug2!("Progress - dispatch thread exiting, last count: {last}");
			})?;

		Ok(Self { sender, handle })
	}

	#[must_use]
	/// A sender for one worker to post counts on.
	pub(crate) fn sender(&self) -> Sender<usize> {
		self.sender.clone()
	}

	/// Drop our sender and wait for the dispatch
	/// thread to drain the channel and exit.
	///
	/// Workers must have dropped their senders already,
	/// i.e. call this only after the pool has joined.
	pub(crate) fn join(self) {
		drop(self.sender);
		// The thread only ever exits cleanly.
		let _ = self.handle.join();
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::sync::{Arc, Mutex};

	#[test]
	fn dispatch_filters_to_strictly_increasing() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let clone = Arc::clone(&seen);

		let reporter = Reporter::spawn(ProgressCallback::Dynamic(Box::new(move |count| {
			clone.lock().unwrap().push(count);
		})), CancelToken::new()).unwrap();

		let tx = reporter.sender();
		// Out-of-order and duplicate posts, as concurrent workers produce.
		for count in [50, 100, 50, 75, 100, 150] {
			tx.send(count).unwrap();
		}
		drop(tx);
		reporter.join();

		assert_eq!(*seen.lock().unwrap(), vec![50, 100, 150]);
	}

	#[test]
	fn channel_callback_delivers() {
		let (tx, rx) = unbounded();
		let reporter = Reporter::spawn(ProgressCallback::Channel(tx), CancelToken::new()).unwrap();

		reporter.sender().send(3).unwrap();
		reporter.join();

		assert_eq!(rx.try_recv().unwrap(), 3);
	}

	#[test]
	fn disconnected_channel_observer_cancels() {
		let (tx, rx) = unbounded();
		drop(rx);

		let cancel = CancelToken::new();
		let reporter = Reporter::spawn(ProgressCallback::Channel(tx), cancel.clone()).unwrap();
		reporter.sender().send(1).unwrap();
		// Must not panic or hang.
		reporter.join();

		assert!(cancel.is_cancelled());
	}
}
