//! Share error types.

use crdrive_protocol::constants::{MSG_SHARE_FAILED, MSG_SHARE_RETRY};

/// Errors produced by share API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The server reported failure for the operation.
    #[error("share operation rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// The response body was not the expected structured data.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// No response was obtained.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ShareError {
    /// Banner text for this failure, preferring the server's own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(Some(m)) if !m.trim().is_empty() => m.clone(),
            Self::Rejected(_) | Self::Malformed(_) => fallback.to_string(),
            Self::Transport(_) => MSG_SHARE_RETRY.to_string(),
        }
    }

    /// Banner text for a failed mutation.
    pub fn mutation_message(&self) -> String {
        self.user_message(MSG_SHARE_FAILED)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
