//! Audio duration probing.

mod probe;
pub use probe::{DurationProbe, SymphoniaProbe};

mod probe_error;
pub use probe_error::ProbeError;
