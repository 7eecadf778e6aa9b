//! Extraction requests, results, and the kinds of data that can be extracted.

mod kind;
pub use kind::{ExtractKind, ExtractKinds};

mod request;
pub use request::ExtractionRequest;

mod result;
pub use result::{ExtractedData, ExtractionResult, FailReason};
