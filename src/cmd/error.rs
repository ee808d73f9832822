use mxcodec::codec::CodecError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Codec failure while sizing, encoding, or decoding.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Filesystem failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON parse or render failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
