//! Batch scheduling: worker pool, progress reporting, cancellation.

mod cancel;
pub use cancel::CancelToken;

mod progress;
pub use progress::ProgressCallback;
pub(crate) use progress::{Reporter, PROGRESS_UPDATE_INTERVAL};

pub(crate) mod pool;
