use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::TransferError;
use crate::progress::progress_label;
use crate::validation::validate_file_name;

/// Where the bytes of a [`FileHandle`] come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Payload already held in memory (drag-and-drop, tests).
    Memory(Arc<[u8]>),
    /// Payload read from disk when the upload starts.
    Disk(PathBuf),
}

/// An opaque file chosen by the user: payload, name and byte size.
#[derive(Debug, Clone)]
pub struct FileHandle {
    name: String,
    size: u64,
    source: FileSource,
}

impl FileHandle {
    /// Wraps an in-memory payload.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Result<Self, TransferError> {
        let name = name.into();
        validate_file_name(&name)?;
        let data = data.into();
        Ok(Self {
            size: data.len() as u64,
            name,
            source: FileSource::Memory(data),
        })
    }

    /// Stats a file on disk. The payload is not read until upload time.
    pub fn from_path(path: &Path) -> Result<Self, TransferError> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(TransferError::NotAFile(path.display().to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        validate_file_name(&name)?;
        Ok(Self {
            name,
            size: meta.len(),
            source: FileSource::Disk(path.to_path_buf()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }
}

/// Lifecycle of an [`UploadSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Completed,
    Failed,
}

/// Transient bookkeeping for one multi-file upload submission.
///
/// Owned by the orchestrator for the duration of a submit. `uploaded`
/// never exceeds `total`.
#[derive(Debug, Clone)]
pub struct UploadSession {
    total: usize,
    uploaded: usize,
    percent: u8,
    status: SessionStatus,
    error: Option<String>,
}

impl UploadSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            uploaded: 0,
            percent: 0,
            status: SessionStatus::InProgress,
            error: None,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn uploaded(&self) -> usize {
        self.uploaded
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Zero-based index of the file currently in flight.
    pub fn current_index(&self) -> usize {
        self.uploaded.min(self.total.saturating_sub(1))
    }

    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    /// Records progress of the file in flight and returns its label.
    pub fn set_percent(&mut self, percent: u8) -> String {
        self.percent = percent.min(100);
        progress_label(self.percent, self.current_index(), self.total)
    }

    /// Counts the current file as done.
    pub fn file_done(&mut self) -> Result<(), TransferError> {
        if self.is_finished() || self.uploaded >= self.total {
            return Err(TransferError::SessionFinished);
        }
        self.uploaded += 1;
        Ok(())
    }

    /// Marks every file as uploaded and forces the bar to 100%.
    pub fn complete(&mut self) {
        self.percent = 100;
        self.status = SessionStatus::Completed;
    }

    /// Halts the session with a terminal error.
    pub fn fail(&mut self, err: impl Into<String>) {
        self.status = SessionStatus::Failed;
        self.error = Some(err.into());
    }
}
