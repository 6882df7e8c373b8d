//! Data types for the upload flow.

use std::time::Duration;

use crdrive_protocol::Feedback;
use crdrive_transfer::UploadSession;

use crate::error::UploadError;

/// Effect emitted by the orchestrator for the front-end to render.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Show the progress bar at `percent` with `label`.
    Progress { percent: u8, label: String },
    /// Hide the progress bar.
    ProgressHidden,
    /// Replace the status line.
    Status(Feedback),
    /// The server accepted file `index` (zero-based).
    FileUploaded { index: usize, name: String },
    /// Reload the view after `after`.
    ReloadScheduled { after: Duration },
}

/// Final state of one submit.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub session: UploadSession,
    pub error: Option<UploadError>,
    /// Set when every file succeeded and a reload was scheduled.
    pub reload_after: Option<Duration>,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
