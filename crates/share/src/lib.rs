//! Share-permission dialog.
//!
//! This crate implements the **business logic** of the share dialog for one
//! file or folder: fetch the sharing state, render it into a view model,
//! and run visibility / add-user / remove-user mutations. It has no HTTP
//! dependency; the front-end provides a `ShareApi` implementation.
//!
//! The server is the only source of truth. Adding or removing a user
//! re-runs the whole open sequence instead of patching rows locally.

pub mod api;
pub mod dialog;
pub mod error;
pub mod manager;

// Re-export primary types for convenience.
pub use api::{ConfirmPrompt, ShareApi};
pub use dialog::{AddUserInputs, DialogState, ShareDialog, UserList, UserRow};
pub use error::ShareError;
pub use manager::{MutationOutcome, ShareManager};
