//! Adapters bridging `crdrive_client::Client` to the traits required by the
//! `upload` and `share` crates.
//!
//! Each crate defines its own trait and error type; one wrapper around the
//! same `Arc<Client>` implements both.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crdrive_client::{Client, ClientError};
use crdrive_protocol::{AccessLevel, ApiResponse, ShareInfoResponse, ShareTarget, Visibility};
use crdrive_share::{ShareApi, ShareError};
use crdrive_transfer::{FileHandle, ProgressCallback};
use crdrive_upload::{UploadError, UploadTransport};

type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

pub struct DriveAdapter {
    client: Arc<Client>,
}

impl DriveAdapter {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

fn upload_error(e: ClientError) -> UploadError {
    match e {
        ClientError::Status { message, .. } => UploadError::Rejected(message),
        ClientError::Malformed(e) => UploadError::Malformed(e.to_string()),
        ClientError::Io(e) => UploadError::File(e.to_string()),
        e => UploadError::Transport(e.to_string()),
    }
}

impl UploadTransport for DriveAdapter {
    fn upload<'a>(
        &'a self,
        page_url: &'a str,
        file: &'a FileHandle,
        csrf_token: &'a str,
        progress: ProgressCallback,
    ) -> BoxFuture<'a, ApiResponse, UploadError> {
        Box::pin(async move {
            self.client
                .upload_file(page_url, file, csrf_token, Some(progress))
                .await
                .map_err(upload_error)
        })
    }
}

// ---------------------------------------------------------------------------
// Share
// ---------------------------------------------------------------------------

fn share_error(e: ClientError) -> ShareError {
    match e {
        ClientError::Status { message, .. } => ShareError::Rejected(message),
        ClientError::Malformed(e) => ShareError::Malformed(e.to_string()),
        e => ShareError::Transport(e.to_string()),
    }
}

impl ShareApi for DriveAdapter {
    fn get_share_info<'a>(
        &'a self,
        target: &'a ShareTarget,
    ) -> BoxFuture<'a, ShareInfoResponse, ShareError> {
        Box::pin(async move { self.client.get_share_info(target).await.map_err(share_error) })
    }

    fn update_visibility<'a>(
        &'a self,
        target: &'a ShareTarget,
        visibility: Visibility,
    ) -> BoxFuture<'a, ApiResponse, ShareError> {
        Box::pin(async move {
            self.client
                .update_visibility(target, visibility)
                .await
                .map_err(share_error)
        })
    }

    fn add_shared_user<'a>(
        &'a self,
        target: &'a ShareTarget,
        username: &'a str,
        access_level: AccessLevel,
    ) -> BoxFuture<'a, ApiResponse, ShareError> {
        Box::pin(async move {
            self.client
                .add_shared_user(target, username, access_level)
                .await
                .map_err(share_error)
        })
    }

    fn remove_shared_user<'a>(
        &'a self,
        target: &'a ShareTarget,
        username: &'a str,
    ) -> BoxFuture<'a, ApiResponse, ShareError> {
        Box::pin(async move {
            self.client
                .remove_shared_user(target, username)
                .await
                .map_err(share_error)
        })
    }
}
