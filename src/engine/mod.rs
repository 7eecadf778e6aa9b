//! The extraction engine: batch orchestration, single-flight, aggregation.

mod engine;
pub use engine::Engine;

mod error;
pub use error::EngineError;

mod process;
