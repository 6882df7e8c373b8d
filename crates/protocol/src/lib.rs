//! Wire protocol types for the drive explorer client.
//!
//! Everything that crosses the HTTP boundary lives here: entity and share
//! types, endpoint paths, form field names and the user-facing messages
//! that both the upload pipeline and the share dialog render.

pub mod constants;
pub mod feedback;
pub mod messages;
pub mod types;

// Re-export primary types for convenience.
pub use constants::Endpoint;
pub use feedback::{Feedback, FeedbackKind};
pub use messages::{ApiResponse, ApiStatus, ShareInfoResponse, SharedUserEntry};
pub use types::{AccessLevel, EntityKind, PageContext, ParseError, ShareTarget, Visibility};
