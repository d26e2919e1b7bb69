use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors produced while moving tri-state fields in and out of keyed records.
#[derive(Debug, Error)]
pub enum RecordError {
	/// Key was present with a non-null value that does not decode as the payload type.
	#[error("field {key}: payload decode failed: {source}")]
	Payload {
		/// Offending record key.
		key: String,
		/// Underlying structural cause.
		#[source]
		source: serde_json::Error,
	},
	/// Payload's own serializer rejected the value.
	#[error("field {key}: payload encode failed: {source}")]
	Encode {
		/// Record key being written.
		key: String,
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
}

impl RecordError {
	/// Record key the error refers to.
	pub fn key(&self) -> &str {
		match self {
			Self::Payload { key, .. } | Self::Encode { key, .. } => key,
		}
	}
}
