//! Parser constants.

/// File extensions classified as video in `[Events]` asset lines.
///
/// Lowercase, sorted for binary search.
pub const VIDEO_EXTENSIONS: [&str; 8] = [
	".avi",
	".flv",
	".m4v",
	".mov",
	".mp4",
	".mpeg",
	".mpg",
	".wmv",
];

/// File extensions classified as background images in `[Events]` asset lines.
///
/// Lowercase, sorted for binary search.
pub const IMAGE_EXTENSIONS: [&str; 4] = [
	".bmp",
	".jpeg",
	".jpg",
	".png",
];

/// The comment marker at the start of a descriptor line.
pub(crate) const COMMENT_MARKER: char = '/';

/// Exact header that opens the general section.
pub(crate) const GENERAL_HEADER: &str = "[General]";

/// Exact header that opens the events section.
pub(crate) const EVENTS_HEADER: &str = "[Events]";

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extension_sets_are_sorted() {
		let mut sorted = VIDEO_EXTENSIONS;
		sorted.sort_unstable();
		assert_eq!(sorted, VIDEO_EXTENSIONS);

		let mut sorted = IMAGE_EXTENSIONS;
		sorted.sort_unstable();
		assert_eq!(sorted, IMAGE_EXTENSIONS);
	}
}
