//! File selection, upload session bookkeeping and progress arithmetic.
//!
//! Nothing in here touches the network: the upload orchestrator owns the
//! request loop and uses these types to keep its state and labels honest.

mod format;
mod progress;
mod selection;
mod types;
mod validation;

pub use format::{format_file_size, size_badge};
pub use progress::{ProgressCallback, ProgressCounter, percent_of, progress_label};
pub use selection::FileSelection;
pub use types::{FileHandle, FileSource, SessionStatus, UploadSession};
pub use validation::validate_file_name;

/// Default size of the pieces a file body is streamed in: 64 KiB.
///
/// Small enough that progress ticks stay smooth on slow links.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("session already finished")]
    SessionFinished,
}
