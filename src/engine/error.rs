//! Errors that reject a whole batch call.

//---------------------------------------------------------------------------------------------------- EngineError
/// Why a batch call was rejected before any work started.
///
/// These are whole-call failures; per-item failures are reported
/// in the matching [`ExtractionResult`](crate::extract::ExtractionResult)
/// and never abort sibling items.
#[derive(thiserror::Error, Clone,Debug,PartialEq,Eq)]
pub enum EngineError {
	#[error("a batch is already running")]
	/// Single-flight violation: a batch is already in
	/// flight on this engine. Never queued or retried.
	Busy,

	#[error("missing required field `{field}` at index {index}")]
	/// A request failed validation; no work was performed.
	InvalidInput {
		/// Position of the offending request in the input list.
		index: usize,
		/// Which required field was missing/empty.
		field: &'static str,
	},
}
