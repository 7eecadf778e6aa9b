//! The batch call: validate → single-flight → pool → aggregate.

//---------------------------------------------------------------------------------------------------- Use
use crate::batch::{pool, CancelToken, ProgressCallback, Reporter};
use crate::engine::{Engine, EngineError};
use crate::extract::{ExtractionRequest, ExtractionResult};
use crate::macros::{debug2, error2, info2};
use crate::probe::DurationProbe;
use std::sync::atomic::{AtomicBool, Ordering};

//---------------------------------------------------------------------------------------------------- BusyGuard
/// Clears the single-flight flag on every exit
/// path: success, error, cancellation, panic.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

//---------------------------------------------------------------------------------------------------- Process
impl<Probe: DurationProbe> Engine<Probe> {
	/// Process a batch of extraction requests.
	///
	/// Blocks until every worker has joined, then returns one
	/// [`ExtractionResult`] per request, in request order.
	///
	/// `progress` receives throttled, non-decreasing processed-item
	/// counts; the final count always equals the total (unless
	/// cancelled first). `cancel` is polled before each item; a
	/// cancelled run still resolves, with unreached items carrying
	/// the [`FailReason::NotProcessed`](crate::extract::FailReason::NotProcessed)
	/// sentinel. A [`ProgressCallback::Channel`] whose receiver has
	/// been dropped counts as cancellation too: the batch stops
	/// early instead of reporting into the void.
	///
	/// # Errors
	/// - [`EngineError::Busy`] if a batch is already in flight on
	///   this engine — rejected synchronously, never queued.
	/// - [`EngineError::InvalidInput`] if any request has an empty
	///   `primary_id` or `file_path` — the whole call aborts before
	///   any work, no partial results.
	pub fn process(
		&self,
		requests: &[ExtractionRequest],
		progress: Option<ProgressCallback>,
		cancel: &CancelToken,
	) -> Result<Vec<ExtractionResult>, EngineError> {
		// Reject concurrent submissions outright.
		if self.busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
			error2!("Engine - already processing, rejecting batch");
			return Err(EngineError::Busy);
		}
		let _busy = BusyGuard(&self.busy);

		validate(requests)?;

		info2!("Engine - processing batch of {} request(s)", requests.len());

		// Progress is decoupled from the workers through a
		// channel + dispatch thread, so a slow observer can
		// never block item throughput. The dispatch thread
		// cancels the batch if a channel observer hangs up.
		let reporter = match progress {
			Some(callback) => match Reporter::spawn(callback, cancel.clone()) {
				Ok(reporter) => Some(reporter),
				// No dispatch thread, no progress; the batch itself still runs.
				Err(err) => {
					error2!("Engine - could not spawn progress thread: {err}");
					let _ = err;
					None
				},
			},
			None => None,
		};

		let sender = reporter.as_ref().map(Reporter::sender);
		let results = pool::run(requests, &self.cache, &self.probe, sender.as_ref(), cancel);

		// Workers have joined; release the channel so
		// the dispatch thread drains and exits.
		drop(sender);
		if let Some(reporter) = reporter {
			reporter.join();
		}

		debug2!("Engine - batch done, {} result(s)", results.len());

		Ok(results)
	}
}

//---------------------------------------------------------------------------------------------------- Validation
/// Reject the whole batch if any entry is malformed.
fn validate(requests: &[ExtractionRequest]) -> Result<(), EngineError> {
	for (index, request) in requests.iter().enumerate() {
		if request.primary_id.is_empty() {
			error2!("Engine - missing `primary_id` at index {index}");
			return Err(EngineError::InvalidInput { index, field: "primary_id" });
		}
		if request.file_path.as_os_str().is_empty() {
			error2!("Engine - missing `file_path` at index {index}");
			return Err(EngineError::InvalidInput { index, field: "file_path" });
		}
	}
	Ok(())
}
