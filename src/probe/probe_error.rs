//! Errors that can occur when probing audio duration.

//---------------------------------------------------------------------------------------------------- Use
use symphonia::core::errors::Error;

//---------------------------------------------------------------------------------------------------- Errors
/// A duration probe failure.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
	#[error("codec/container is not supported")]
	/// Codec/container is not supported, or the content is corrupt.
	Unsupported(&'static str),

	#[error("a limit was reached while probing")]
	/// A limit was reached while probing.
	Limit(&'static str),

	#[error("probe io error")]
	/// Probe I/O error (unreadable file).
	Io(#[from] std::io::Error),

	#[error("computed duration was zero or negative")]
	/// The container was readable but the computed duration was `<= 0`.
	NonPositive,

	#[error("unknown probing error")]
	/// Unknown probing error, including containers
	/// that carry no frame count/time base at all.
	Unknown,
}

impl From<Error> for ProbeError {
	fn from(value: Error) -> Self {
		use Error as E;
		match value {
			E::IoError(s)     => Self::Io(s),
			E::DecodeError(s) | E::Unsupported(s) => Self::Unsupported(s),
			E::LimitError(s)  => Self::Limit(s),
			E::SeekError(_) | E::ResetRequired => Self::Unknown,
		}
	}
}
