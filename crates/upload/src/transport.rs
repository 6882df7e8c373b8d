//! Upload transport trait.
//!
//! `UploadTransport` is implemented by the front-end on top of the HTTP
//! client. Using a trait keeps the pipeline decoupled from `reqwest` and
//! testable with mocks.

use std::future::Future;
use std::pin::Pin;

use crdrive_protocol::ApiResponse;
use crdrive_transfer::{FileHandle, ProgressCallback};

use crate::error::UploadError;

/// Sends one file to the upload endpoint.
pub trait UploadTransport: Send + Sync {
    /// Uploads `file` with `csrf_token` in the form body.
    ///
    /// `progress` is called with `(bytes_sent, bytes_total)` whenever the
    /// transport can measure it. The returned future resolves only once
    /// the server has answered.
    ///
    /// Implementations map failures onto [`UploadError::Rejected`] (the
    /// server answered with an error status), [`UploadError::Malformed`]
    /// (unparseable body) or [`UploadError::Transport`] (no answer).
    fn upload<'a>(
        &'a self,
        page_url: &'a str,
        file: &'a FileHandle,
        csrf_token: &'a str,
        progress: ProgressCallback,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, UploadError>> + Send + 'a>>;
}
