//! The duration probe contract and its `symphonia` backend.

//---------------------------------------------------------------------------------------------------- Use
use crate::probe::ProbeError;
use std::fs::File;
use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::{Limit, MetadataOptions};
use symphonia::core::probe::Hint;

//---------------------------------------------------------------------------------------------------- Constants
/// Options for the `MediaSourceStream` used while probing.
const MEDIA_SOURCE_STREAM_OPTIONS: MediaSourceStreamOptions = MediaSourceStreamOptions {
	buffer_len: 64 * 1024,
};

/// Options for the format reader used while probing.
const FORMAT_OPTIONS: FormatOptions = FormatOptions {
	enable_gapless: true,
	prebuild_seek_index: false,
	seek_index_fill_rate: 20,
};

/// We only want the container headers, keep metadata reading cheap.
const METADATA_OPTIONS: MetadataOptions = MetadataOptions {
	limit_metadata_bytes: Limit::Default,
	limit_visual_bytes: Limit::Default,
};

//---------------------------------------------------------------------------------------------------- DurationProbe
/// The external collaborator that turns a resolved
/// audio file path into a play length.
///
/// Implementations must be deterministic for
/// byte-identical file content, and must only
/// return strictly positive durations.
pub trait DurationProbe: Send + Sync {
	/// The duration of the audio file at `path`, in seconds.
	///
	/// # Errors
	/// An unreadable file, unsupported/corrupt content, or a
	/// zero/negative computed duration is a [`ProbeError`].
	fn probe_path(&self, path: &Path) -> Result<f64, ProbeError>;
}

//---------------------------------------------------------------------------------------------------- SymphoniaProbe
/// The default [`DurationProbe`], backed by `symphonia`.
///
/// Only the container headers are inspected; no
/// packets are decoded to compute the duration.
#[derive(Copy,Clone,Debug,Default,PartialEq,Eq)]
pub struct SymphoniaProbe;

impl SymphoniaProbe {
	#[must_use]
	/// Create the `symphonia`-backed probe.
	pub const fn new() -> Self {
		Self
	}
}

impl DurationProbe for SymphoniaProbe {
	fn probe_path(&self, path: &Path) -> Result<f64, ProbeError> {
		let file = File::open(path)?;

		let mut hint = Hint::new();
		if let Some(ext) = path.extension().and_then(std::ffi::OsStr::to_str) {
			hint.with_extension(ext);
		}

		let mss = MediaSourceStream::new(Box::new(file), MEDIA_SOURCE_STREAM_OPTIONS);
		let probed = symphonia::default::get_probe().format(
			&hint,
			mss,
			&FORMAT_OPTIONS,
			&METADATA_OPTIONS,
		)?;

		let Some(track) = probed.format.tracks().first() else {
			return Err(ProbeError::Unknown);
		};

		let Some(n_frames) = track.codec_params.n_frames else {
			return Err(ProbeError::Unknown);
		};
		let Some(time_base) = track.codec_params.time_base else {
			return Err(ProbeError::Unknown);
		};

		let time = time_base.calc_time(n_frames);
		let duration = time.seconds as f64 + time.frac;

		if duration > 0.0 {
			Ok(duration)
		} else {
			Err(ProbeError::NonPositive)
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_is_io_error() {
		let probe = SymphoniaProbe::new();
		let result = probe.probe_path(Path::new("/nonexistent/audio.mp3"));
		assert!(matches!(result, Err(ProbeError::Io(_))));
	}

	#[test]
	fn garbage_bytes_are_not_audio() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("garbage.mp3");
		std::fs::write(&path, b"definitely not audio").unwrap();

		let probe = SymphoniaProbe::new();
		assert!(probe.probe_path(&path).is_err());
	}

	#[test]
	fn wav_duration_is_exact() {
		// A minimal 44.1kHz mono 16-bit PCM WAV with exactly 44100
		// frames of silence, i.e. 1 second.
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("silence.wav");
		std::fs::write(&path, wav_bytes(44_100)).unwrap();

		let probe = SymphoniaProbe::new();
		let duration = probe.probe_path(&path).unwrap();
		assert!((duration - 1.0).abs() < 1e-6, "duration was {duration}");
	}

	/// Build a valid mono 16-bit 44.1kHz PCM WAV of `frames` silent samples.
	fn wav_bytes(frames: u32) -> Vec<u8> {
		let data_len = frames * 2;
		let mut v = Vec::with_capacity(44 + data_len as usize);
		v.extend_from_slice(b"RIFF");
		v.extend_from_slice(&(36 + data_len).to_le_bytes());
		v.extend_from_slice(b"WAVE");
		v.extend_from_slice(b"fmt ");
		v.extend_from_slice(&16u32.to_le_bytes());       // fmt chunk size
		v.extend_from_slice(&1u16.to_le_bytes());        // PCM
		v.extend_from_slice(&1u16.to_le_bytes());        // mono
		v.extend_from_slice(&44_100u32.to_le_bytes());   // sample rate
		v.extend_from_slice(&(44_100u32 * 2).to_le_bytes()); // byte rate
		v.extend_from_slice(&2u16.to_le_bytes());        // block align
		v.extend_from_slice(&16u16.to_le_bytes());       // bits per sample
		v.extend_from_slice(b"data");
		v.extend_from_slice(&data_len.to_le_bytes());
		v.resize(44 + data_len as usize, 0);
		v
	}
}
