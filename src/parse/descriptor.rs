//! Section-scoped, line-oriented descriptor parsing.

//---------------------------------------------------------------------------------------------------- Use
use crate::extract::{ExtractKind, ExtractKinds};
use crate::parse::constants::{
	COMMENT_MARKER,
	EVENTS_HEADER,
	GENERAL_HEADER,
	IMAGE_EXTENSIONS,
	VIDEO_EXTENSIONS,
};

//---------------------------------------------------------------------------------------------------- AssetRefs
/// The asset filenames referenced by a descriptor file.
///
/// All filenames are relative to the descriptor's directory.
/// Absent fields mean the descriptor simply did not
/// reference that asset, never a parse error.
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct AssetRefs {
	/// `AudioFilename` from the `[General]` section.
	pub audio: Option<String>,
	/// Background image filename from the `[Events]` section.
	pub background: Option<String>,
	/// Video filename from the `[Events]` section.
	pub video: Option<String>,
}

//---------------------------------------------------------------------------------------------------- parse_descriptor
/// Parse descriptor text into the asset references it contains.
///
/// `kinds` only gates which sections are scanned (an optimization),
/// it never affects the meaning of the lines that are scanned.
///
/// Parsing is pure: identical text always yields identical [`AssetRefs`].
///
/// When several qualifying `[Events]` asset lines reference the same
/// kind of asset, the last one wins.
#[must_use]
pub fn parse_descriptor(text: &str, kinds: &ExtractKinds) -> AssetRefs {
	let mut refs = AssetRefs::default();

	let mut in_general = false;
	let mut in_events = false;

	let need_audio      = kinds.contains(&ExtractKind::Duration);
	let need_background = kinds.contains(&ExtractKind::Background);
	let need_video      = kinds.contains(&ExtractKind::Video);

	for line in text.lines() {
		let line = line.trim();

		if line.is_empty() || line.starts_with(COMMENT_MARKER) {
			continue;
		}

		// A bracketed header sets/clears both section flags,
		// any unknown header clears both.
		if line.starts_with('[') {
			in_general = line == GENERAL_HEADER;
			in_events = line == EVENTS_HEADER;
			continue;
		}

		if in_general && need_audio {
			if let Some((key, value)) = line.split_once(':') {
				if key.trim() == "AudioFilename" {
					refs.audio = Some(value.trim().to_string());
				}
			}
		} else if in_events && (need_background || need_video) {
			// Asset placement format: type,start_time,"filename",...
			let mut parts = line.split(',');
			let (Some("0"), Some("0"), Some(third)) = (parts.next(), parts.next(), parts.next()) else {
				continue;
			};

			let filename = strip_quotes(third.trim());

			if is_video_file(filename) {
				if need_video {
					refs.video = Some(filename.to_string());
				}
			} else if is_image_file(filename) && need_background {
				refs.background = Some(filename.to_string());
			}
		}
	}

	refs
}

//---------------------------------------------------------------------------------------------------- Classification
/// Strip a single pair of surrounding double quotes, if present.
fn strip_quotes(s: &str) -> &str {
	if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
		&s[1..s.len() - 1]
	} else {
		s
	}
}

/// The lowercased file extension of `path`, including the leading dot.
fn file_extension(path: &str) -> Option<String> {
	let pos = path.rfind('.')?;
	Some(path[pos..].to_ascii_lowercase())
}

/// `true` if `filename` has a known video extension (case-insensitive).
fn is_video_file(filename: &str) -> bool {
	file_extension(filename)
		.is_some_and(|ext| VIDEO_EXTENSIONS.binary_search(&ext.as_str()).is_ok())
}

/// `true` if `filename` has a known image extension (case-insensitive).
fn is_image_file(filename: &str) -> bool {
	file_extension(filename)
		.is_some_and(|ext| IMAGE_EXTENSIONS.binary_search(&ext.as_str()).is_ok())
}
