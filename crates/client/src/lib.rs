//! HTTP client for the drive explorer endpoints.
//!
//! Wraps `reqwest` with the CSRF header, the share endpoints and the
//! multipart upload request. Stateless between calls and never retries:
//! every failure goes back to the caller.

mod body;
pub mod client;
pub mod error;

pub use client::{Client, ClientOptions};
pub use error::ClientError;
