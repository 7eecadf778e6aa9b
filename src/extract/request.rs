//! A single extraction request.

//---------------------------------------------------------------------------------------------------- Use
use crate::extract::ExtractKinds;
use std::path::PathBuf;

//---------------------------------------------------------------------------------------------------- ExtractionRequest
/// One entry of a batch: which descriptor file to
/// read and which kinds of data to extract from it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct ExtractionRequest {
	/// Primary identity key of this request (e.g. a hash of the beatmap).
	///
	/// Must be non-empty, the whole batch is rejected otherwise.
	pub primary_id: String,

	/// Optional secondary unique id.
	///
	/// This is the duration cache key, allowing logically-same-audio
	/// requests to share a cache slot even if primary ids differ.
	/// Defaults to [`Self::primary_id`] when absent.
	#[cfg_attr(feature = "serde", serde(default))]
	pub unique_id: Option<String>,

	/// Path to the descriptor file.
	///
	/// Must be non-empty, the whole batch is rejected otherwise.
	pub file_path: PathBuf,

	/// Opaque passthrough, copied verbatim into the result.
	#[cfg_attr(feature = "serde", serde(default))]
	pub last_modified: String,

	/// The set of kinds to extract. May be empty.
	pub extract: ExtractKinds,
}

//---------------------------------------------------------------------------------------------------- ExtractionRequest Impl
impl ExtractionRequest {
	/// Create a request with no `unique_id`, no
	/// `last_modified`, and an empty extract set.
	pub fn new(primary_id: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
		Self {
			primary_id: primary_id.into(),
			unique_id: None,
			file_path: file_path.into(),
			last_modified: String::new(),
			extract: ExtractKinds::new(),
		}
	}

	#[must_use]
	/// Set the secondary unique id.
	pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
		self.unique_id = Some(unique_id.into());
		self
	}

	#[must_use]
	/// Set the opaque `last_modified` passthrough.
	pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
		self.last_modified = last_modified.into();
		self
	}

	#[must_use]
	/// Set the kinds to extract.
	pub fn with_extract(mut self, extract: impl IntoIterator<Item = crate::extract::ExtractKind>) -> Self {
		self.extract = extract.into_iter().collect();
		self
	}

	#[must_use]
	/// The effective unique id: `unique_id`, falling back to `primary_id`.
	pub fn unique_id(&self) -> &str {
		self.unique_id.as_deref().unwrap_or(&self.primary_id)
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::extract::ExtractKind;
	use pretty_assertions::assert_eq;

	#[test]
	fn unique_id_defaults_to_primary_id() {
		let req = ExtractionRequest::new("abc123", "a/b.osu");
		assert_eq!(req.unique_id(), "abc123");

		let req = req.with_unique_id("shared-audio");
		assert_eq!(req.unique_id(), "shared-audio");
		assert_eq!(req.primary_id, "abc123");
	}

	#[test]
	fn with_extract_collapses_duplicates() {
		let req = ExtractionRequest::new("a", "b.osu")
			.with_extract([ExtractKind::Duration, ExtractKind::Duration, ExtractKind::Video]);
		assert_eq!(req.extract.len(), 2);
	}

	#[test]
	#[cfg(feature = "serde")]
	fn deserialize_missing_optionals() {
		let req: ExtractionRequest = serde_json::from_str(
			r#"{"primary_id":"x","file_path":"map.osu","extract":["duration","duration"]}"#,
		).unwrap();
		assert_eq!(req.unique_id, None);
		assert_eq!(req.unique_id(), "x");
		assert_eq!(req.last_modified, "");
		assert_eq!(req.extract.len(), 1);
	}
}
