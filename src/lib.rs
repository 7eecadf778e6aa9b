//! Batch metadata-extraction engine for beatmap descriptor files.
//!
//! Given a list of descriptor file references, [`Engine::process`]
//! parses each file for its referenced audio/background/video assets,
//! resolves them against the descriptor's directory, computes audio
//! duration through a [`DurationProbe`](probe::DurationProbe), and
//! returns one structured outcome per input, in input order, across
//! a bounded worker pool with throttled progress reporting and
//! cached duration lookups.
//!
//! ```rust,no_run
//! use beatmeta::{Engine, CancelToken};
//! use beatmeta::extract::{ExtractKind, ExtractionRequest};
//!
//! let engine = Engine::init();
//!
//! let requests = vec![
//!     ExtractionRequest::new("6a9fbc...", "songs/123/map.osu")
//!         .with_extract([ExtractKind::Duration, ExtractKind::Background]),
//! ];
//!
//! let results = engine.process(&requests, None, &CancelToken::new()).unwrap();
//! assert_eq!(results.len(), requests.len());
//! ```

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
	clippy::len_zero,
	clippy::type_complexity,
	clippy::module_inception,
)]

#![deny(
	nonstandard_style,
	deprecated,
	missing_docs,
	unused_mut,
	unused_unsafe,
	future_incompatible,
	unreachable_patterns,
	unused_allocation,
	unused_braces,
	unused_comparisons,
	unused_doc_comments,
	unused_parens,
	unused_labels,
	while_true,
	keyword_idents,
	non_ascii_idents,
	noop_method_call,
	unreachable_pub,
	single_use_lifetimes,
)]

//---------------------------------------------------------------------------------------------------- Public API
pub mod batch;
pub use batch::{CancelToken, ProgressCallback};

pub mod cache;
pub use cache::DurationCache;

pub mod engine;
pub use engine::{Engine, EngineError};

pub mod extract;

pub mod parse;

pub mod probe;

pub mod resolve;

//---------------------------------------------------------------------------------------------------- Private Usage
mod free;
mod macros;
