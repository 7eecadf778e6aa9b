//! Descriptor file parsing.

mod constants;
pub use constants::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};

mod descriptor;
pub use descriptor::{parse_descriptor, AssetRefs};
