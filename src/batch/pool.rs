//! The bounded worker pool that drives a batch.

//---------------------------------------------------------------------------------------------------- Use
use crate::batch::{CancelToken, PROGRESS_UPDATE_INTERVAL};
use crate::cache::DurationCache;
use crate::extract::{
	ExtractKind,
	ExtractedData,
	ExtractionRequest,
	ExtractionResult,
	FailReason,
};
use crate::macros::{debug2, trace2, warn2};
use crate::parse::parse_descriptor;
use crate::probe::DurationProbe;
use crate::resolve::resolve_asset;
use crossbeam::channel::Sender;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

//---------------------------------------------------------------------------------------------------- run
/// Process `requests` across a bounded worker pool.
///
/// The returned list has exactly one slot per request, in request
/// order. Each worker owns a contiguous, disjoint chunk of the
/// results arena, so slots are written without locking; only the
/// cache and the processed counter are shared.
///
/// Unreached items (cancellation) keep their pre-filled
/// [`FailReason::NotProcessed`] sentinel.
pub(crate) fn run<Probe: DurationProbe>(
	requests: &[ExtractionRequest],
	cache: &DurationCache,
	probe: &Probe,
	progress: Option<&Sender<usize>>,
	cancel: &CancelToken,
) -> Vec<ExtractionResult> {
	let total = requests.len();
	if total == 0 {
		return Vec::new();
	}

	let threads = crate::free::threads().get();
	// Ceiling division so every request lands in some chunk.
	let chunk_size = (total + threads - 1) / threads;

	debug2!("Pool - {total} request(s), {threads} worker(s), chunk size {chunk_size}");

	// The results arena, pre-filled with the "not processed" sentinel.
	let mut results: Vec<ExtractionResult> = requests
		.iter()
		.map(ExtractionResult::not_processed)
		.collect();

	let processed = AtomicUsize::new(0);

	std::thread::scope(|s| {
		let chunks = requests
			.chunks(chunk_size)
			.zip(results.chunks_mut(chunk_size));

		for (chunk, slots) in chunks {
			let processed = &processed;
			s.spawn(move || {
				for (request, slot) in chunk.iter().zip(slots.iter_mut()) {
					// Cooperative: stop taking new items once cancelled.
					if cancel.is_cancelled() {
						debug2!("Pool - cancelled, worker stopping");
						break;
					}

					*slot = process_one(request, cache, probe);

					let count = processed.fetch_add(1, Ordering::AcqRel) + 1;
					if count % PROGRESS_UPDATE_INTERVAL == 0 || count == total {
						if let Some(sender) = progress {
							// Non-blocking; the dispatch side
							// may already be gone on teardown.
							let _ = sender.try_send(count);
						}
					}
				}
			});
		}
	});

	results
}

//---------------------------------------------------------------------------------------------------- process_one
/// Run the Parser → Resolver → Cache/Probe pipeline for one request.
fn process_one<Probe: DurationProbe>(
	request: &ExtractionRequest,
	cache: &DurationCache,
	probe: &Probe,
) -> ExtractionResult {
	trace2!("Pool - processing {}", request.primary_id);

	// Read as bytes: descriptors in the wild carry stray
	// non-UTF-8 bytes, which must not look like a missing file.
	let Ok(bytes) = std::fs::read(&request.file_path) else {
		return ExtractionResult::failure(request, FailReason::FileNotFound);
	};
	let text = String::from_utf8_lossy(&bytes);

	// Descriptor asset references are relative to its directory.
	let base = request.file_path.parent().unwrap_or_else(|| Path::new(""));

	let refs = parse_descriptor(&text, &request.extract);
	let mut data = ExtractedData::EMPTY;

	if request.extract.contains(&ExtractKind::Duration) {
		let Some(audio) = refs.audio.as_deref().filter(|audio| !audio.is_empty()) else {
			return ExtractionResult::failure(request, FailReason::AudioFilenameNotFound);
		};

		let Some(audio_path) = resolve_asset(base, Some(audio)) else {
			return ExtractionResult::failure(request, FailReason::AudioFileNotFound);
		};

		let Some(duration) = audio_duration(request.unique_id(), &audio_path, cache, probe) else {
			return ExtractionResult::failure(request, FailReason::DurationFailed);
		};

		data.duration = Some(duration);
	}

	// Background/video resolution failures are
	// silently "absent", never an item failure.
	if request.extract.contains(&ExtractKind::Background) {
		data.background = resolve_asset(base, refs.background.as_deref());
	}

	if request.extract.contains(&ExtractKind::Video) {
		data.video = resolve_asset(base, refs.video.as_deref());
	}

	ExtractionResult::success(request, data)
}

/// Cache-or-probe duration lookup.
///
/// The cache single-flights each unique id, so requests sharing
/// one probe at most once combined while distinct ids probe in
/// parallel across workers.
/// Only strictly positive probed durations are cached; failures
/// are never cached.
fn audio_duration<Probe: DurationProbe>(
	unique_id: &str,
	audio_path: &Path,
	cache: &DurationCache,
	probe: &Probe,
) -> Option<f64> {
	cache.get_or_compute(unique_id, || {
		match probe.probe_path(audio_path) {
			Ok(duration) if duration > 0.0 => Some(duration),
			Ok(_) => None,
			Err(error) => {
				warn2!("Pool - probe failed for {}: {error}", audio_path.display());
				let _ = error;
				None
			},
		}
	})
}
