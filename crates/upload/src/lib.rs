//! Sequential multi-file upload pipeline.
//!
//! This crate implements the **business logic** of the upload form: it
//! sends the selected files one at a time, turns transport progress into
//! progress-bar events and decides when the session halts. It has no HTTP
//! dependency; the front-end provides an `UploadTransport` implementation
//! that bridges to the actual client.
//!
//! # Pipeline
//!
//! 1. **Validate**: an empty selection fails before any request
//! 2. **Upload**: one request per file, strictly in order
//! 3. **Halt**: the first rejected or unreachable file ends the session
//! 4. **Complete**: bar forced to 100%, success status, one reload scheduled

pub mod error;
pub mod orchestrator;
pub mod transport;
pub mod types;

// Re-export primary types for convenience.
pub use error::UploadError;
pub use orchestrator::UploadOrchestrator;
pub use transport::UploadTransport;
pub use types::{UploadEvent, UploadOutcome};
