//! Share API and confirmation traits.
//!
//! `ShareApi` is implemented by the front-end on top of the HTTP client.
//! Using a trait keeps the dialog logic decoupled from transport and
//! testable with mocks.

use std::future::Future;
use std::pin::Pin;

use crdrive_protocol::{AccessLevel, ApiResponse, ShareInfoResponse, ShareTarget, Visibility};

use crate::error::ShareError;

type ShareFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ShareError>> + Send + 'a>>;

/// The four remote share operations.
pub trait ShareApi: Send + Sync {
    /// Fetches the current sharing state of `target`.
    fn get_share_info<'a>(&'a self, target: &'a ShareTarget) -> ShareFuture<'a, ShareInfoResponse>;

    /// Changes the default visibility of `target`.
    fn update_visibility<'a>(
        &'a self,
        target: &'a ShareTarget,
        visibility: Visibility,
    ) -> ShareFuture<'a, ApiResponse>;

    /// Grants `username` access to `target`.
    fn add_shared_user<'a>(
        &'a self,
        target: &'a ShareTarget,
        username: &'a str,
        access_level: AccessLevel,
    ) -> ShareFuture<'a, ApiResponse>;

    /// Revokes the access of `username` to `target`.
    fn remove_shared_user<'a>(
        &'a self,
        target: &'a ShareTarget,
        username: &'a str,
    ) -> ShareFuture<'a, ApiResponse>;
}

/// Interactive yes/no confirmation.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
