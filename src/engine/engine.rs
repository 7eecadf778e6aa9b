//! The engine-state object.

//---------------------------------------------------------------------------------------------------- Use
use crate::cache::DurationCache;
use crate::macros::info2;
use crate::probe::{DurationProbe, SymphoniaProbe};
use std::sync::atomic::{AtomicBool, Ordering};

//---------------------------------------------------------------------------------------------------- Engine
/// The main handle to a batch extraction system.
///
/// Owns everything that outlives a single batch: the duration
/// cache, the single-flight guard, and the duration probe.
/// Independent engines are fully isolated, so tests (and hosts
/// that want parallel, unrelated workloads) can instantiate
/// their own.
///
/// All methods take `&self`; the engine is meant
/// to be shared across threads.
#[derive(Debug, Default)]
pub struct Engine<Probe: DurationProbe = SymphoniaProbe> {
	/// The duration probe collaborator.
	pub(super) probe: Probe,
	/// Unique id → duration, shared by all batches on this engine.
	pub(super) cache: DurationCache,
	/// Single-flight guard: one batch per engine, process-wide
	/// only insofar as the host keeps one engine.
	pub(super) busy: AtomicBool,
}

//---------------------------------------------------------------------------------------------------- Engine Impl
impl Engine<SymphoniaProbe> {
	#[cold]
	#[inline(never)]
	#[must_use]
	/// An engine with the default `symphonia`-backed probe.
	pub fn init() -> Self {
		Self::init_with_probe(SymphoniaProbe::new())
	}
}

impl<Probe: DurationProbe> Engine<Probe> {
	#[cold]
	#[inline(never)]
	#[must_use]
	/// An engine with a custom duration probe.
	pub fn init_with_probe(probe: Probe) -> Self {
		info2!("Engine - initializing, probe: {}", std::any::type_name::<Probe>());

		Self {
			probe,
			cache: DurationCache::new(),
			busy: AtomicBool::new(false),
		}
	}

	#[must_use]
	/// `true` while a batch is in flight on this engine.
	pub fn is_processing(&self) -> bool {
		self.busy.load(Ordering::Acquire)
	}

	/// Drop every cached duration.
	///
	/// Call when underlying audio content may have changed;
	/// the next batch re-probes transparently.
	pub fn clear_cache(&self) {
		self.cache.clear();
	}

	#[must_use]
	/// The engine's duration cache.
	pub fn cache(&self) -> &DurationCache {
		&self.cache
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::FakeProbe;

	#[test]
	fn fresh_engine_is_idle() {
		let engine = Engine::init_with_probe(FakeProbe::new(1.0));
		assert!(!engine.is_processing());
		assert!(engine.cache().is_empty());
	}

	#[test]
	fn clear_cache_drops_entries() {
		let engine = Engine::init_with_probe(FakeProbe::new(1.0));
		engine.cache().set("k", 3.0);
		assert_eq!(engine.cache().get("k"), Some(3.0));

		engine.clear_cache();
		assert_eq!(engine.cache().get("k"), None);
	}
}
