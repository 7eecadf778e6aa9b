//! Per-request extraction outcomes.

//---------------------------------------------------------------------------------------------------- Use
use crate::extract::ExtractionRequest;
use std::path::PathBuf;

//---------------------------------------------------------------------------------------------------- FailReason
/// Why a single request failed.
///
/// The [`Display`](std::fmt::Display) strings are a fixed taxonomy,
/// hosts match on them across the marshalling boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(thiserror::Error, Copy,Clone,Debug,PartialEq,Eq)]
pub enum FailReason {
	#[error("file not found")]
	/// The descriptor file does not exist or could not be read.
	FileNotFound,

	#[error("audio filename not found")]
	/// Duration was requested but the descriptor has no `AudioFilename` key.
	AudioFilenameNotFound,

	#[error("audio file not found")]
	/// The referenced audio file does not exist next to the descriptor.
	AudioFileNotFound,

	#[error("failed to get audio duration")]
	/// The duration probe failed or computed a non-positive duration.
	DurationFailed,

	#[error("not processed")]
	/// Sentinel: the batch was cancelled before this item was started.
	///
	/// Distinct from a true per-item failure.
	NotProcessed,
}

//---------------------------------------------------------------------------------------------------- ExtractedData
/// The data recovered for a successful request.
///
/// Each field is present only if the matching
/// [`ExtractKind`](crate::extract::ExtractKind)
/// was requested _and_ the asset was found.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone,Debug,Default,PartialEq)]
pub struct ExtractedData {
	/// Audio duration in seconds. Always `> 0.0` when present.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub duration: Option<f64>,

	/// Resolved background image path.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub background: Option<PathBuf>,

	/// Resolved video path.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub video: Option<PathBuf>,
}

impl ExtractedData {
	/// An [`ExtractedData`] with nothing in it.
	pub const EMPTY: Self = Self {
		duration: None,
		background: None,
		video: None,
	};

	#[must_use]
	/// `true` if no field is present.
	pub const fn is_empty(&self) -> bool {
		self.duration.is_none() && self.background.is_none() && self.video.is_none()
	}
}

//---------------------------------------------------------------------------------------------------- ExtractionResult
/// The outcome for one [`ExtractionRequest`].
///
/// `output[i]` always mirrors `input[i]`, regardless
/// of which worker processed it or when it finished.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone,Debug,PartialEq)]
pub struct ExtractionResult {
	/// [`ExtractionRequest::primary_id`], copied back.
	pub primary_id: String,

	/// The effective unique id (`unique_id` or `primary_id`), materialized.
	pub unique_id: String,

	/// [`ExtractionRequest::last_modified`], copied back verbatim.
	pub last_modified: String,

	/// Whether the request succeeded.
	pub success: bool,

	/// Present iff `success` is `false`.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub reason: Option<FailReason>,

	/// The extracted data. Empty on failure.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "ExtractedData::is_empty"))]
	pub data: ExtractedData,
}

//---------------------------------------------------------------------------------------------------- ExtractionResult Impl
impl ExtractionResult {
	/// A successful result carrying `data`.
	pub(crate) fn success(request: &ExtractionRequest, data: ExtractedData) -> Self {
		Self {
			primary_id: request.primary_id.clone(),
			unique_id: request.unique_id().to_string(),
			last_modified: request.last_modified.clone(),
			success: true,
			reason: None,
			data,
		}
	}

	/// A failed result carrying `reason`.
	pub(crate) fn failure(request: &ExtractionRequest, reason: FailReason) -> Self {
		Self {
			primary_id: request.primary_id.clone(),
			unique_id: request.unique_id().to_string(),
			last_modified: request.last_modified.clone(),
			success: false,
			reason: Some(reason),
			data: ExtractedData::EMPTY,
		}
	}

	/// The pre-filled sentinel for an item a cancelled batch never reached.
	pub(crate) fn not_processed(request: &ExtractionRequest) -> Self {
		Self::failure(request, FailReason::NotProcessed)
	}
}
