//! Upload error types.

use crdrive_protocol::constants::{MSG_EMPTY_SELECTION, MSG_UPLOAD_FAILED, MSG_UPLOAD_RETRY};

/// Errors that halt an upload session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("no files selected")]
    EmptySelection,

    /// The server processed the request but reported failure.
    #[error("upload rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// The response body was not the expected `{status, message}` data.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// No response was obtained.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("file error: {0}")]
    File(String),
}

impl UploadError {
    /// Text shown in the upload status area for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptySelection => MSG_EMPTY_SELECTION.into(),
            Self::Rejected(Some(m)) if !m.trim().is_empty() => m.clone(),
            Self::Rejected(_) | Self::Malformed(_) => MSG_UPLOAD_FAILED.into(),
            Self::Transport(_) | Self::File(_) => MSG_UPLOAD_RETRY.into(),
        }
    }
}

impl From<crdrive_transfer::TransferError> for UploadError {
    fn from(e: crdrive_transfer::TransferError) -> Self {
        Self::File(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            UploadError::EmptySelection.user_message(),
            "Please select files to upload."
        );
        assert_eq!(
            UploadError::Rejected(Some("Storage quota exceeded.".into())).user_message(),
            "Storage quota exceeded."
        );
        assert_eq!(UploadError::Rejected(None).user_message(), "Upload failed.");
        assert_eq!(
            UploadError::Malformed("expected value".into()).user_message(),
            "Upload failed."
        );
        assert_eq!(
            UploadError::Transport("connection reset".into()).user_message(),
            "Upload failed. Please try again."
        );
    }
}
