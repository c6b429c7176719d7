use thiserror::Error;

/// Failure reported by a remote collaborator (recents feed or search endpoint).
///
/// The picker never treats these as fatal: a failed source simply narrows
/// what the dialog can show.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The remote endpoint could not be reached or returned a transport error.
	#[error("{source_name} is unavailable: {reason}")]
	Unavailable {
		source_name: &'static str,
		reason: String,
	},

	/// The endpoint answered, but the payload could not be understood.
	#[error("{source_name} returned a malformed response: {reason}")]
	Malformed {
		source_name: &'static str,
		reason: String,
	},
}

impl FetchError {
	pub fn unavailable(source_name: &'static str, reason: impl Into<String>) -> Self {
		Self::Unavailable {
			source_name,
			reason: reason.into(),
		}
	}

	pub fn malformed(source_name: &'static str, reason: impl Into<String>) -> Self {
		Self::Malformed {
			source_name,
			reason: reason.into(),
		}
	}
}
