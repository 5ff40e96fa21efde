//! Error taxonomy for pincode lookups

use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a valid 6-digit pincode.";
pub const TRANSPORT_MESSAGE: &str = "An error occurred while fetching data.";

/// Everything that can stop a lookup from producing a result set
#[derive(Debug, Error)]
pub enum LookupError {
    /// Input was not exactly six decimal digits. No request was made.
    #[error("invalid pincode {input:?}")]
    Validation { input: String },

    /// The request never completed or came back with a non-success status.
    #[error("request to postal provider failed")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered but the body was not the expected shape.
    #[error("malformed provider response: {reason}")]
    Decode { reason: String },

    /// The provider understood the query and reported a failure for it.
    #[error("provider rejected pincode: {message}")]
    Provider { message: String },
}

impl LookupError {
    /// Text shown to the user for this error.
    ///
    /// Transport and decode failures collapse into one generic message;
    /// provider messages are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Validation { .. } => VALIDATION_MESSAGE.to_string(),
            LookupError::Transport { .. } | LookupError::Decode { .. } => {
                TRANSPORT_MESSAGE.to_string()
            }
            LookupError::Provider { message } => message.clone(),
        }
    }

    /// True when the failure happened before a response was classified.
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport { .. } | LookupError::Decode { .. })
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(source: reqwest::Error) -> Self {
        LookupError::Transport { source }
    }
}
