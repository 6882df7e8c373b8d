//! Client error types.

/// Errors from the drive HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was obtained (connect, TLS, body streaming).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The body was not the structured data the endpoint promises.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl ClientError {
    /// Whether the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Io(_))
    }

    /// Server-provided message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}
