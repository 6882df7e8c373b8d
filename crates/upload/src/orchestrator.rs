//! Upload orchestrator for sequential multi-file submits.
//!
//! Sends the files of a selection one after the other, never two at a
//! time, and emits progress and status events for the front-end.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crdrive_protocol::constants::{MSG_UPLOAD_COMPLETE, RELOAD_DELAY};
use crdrive_protocol::{Feedback, PageContext};
use crdrive_transfer::{FileSelection, ProgressCallback, UploadSession, percent_of};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::UploadError;
use crate::transport::UploadTransport;
use crate::types::{UploadEvent, UploadOutcome};

/// Orchestrates one upload form.
pub struct UploadOrchestrator {
    context: PageContext,
    reload_delay: Duration,
    events_tx: mpsc::UnboundedSender<UploadEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<UploadEvent>>,
}

impl UploadOrchestrator {
    /// Creates an orchestrator bound to the page it was loaded with.
    pub fn new(context: PageContext) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            context,
            reload_delay: RELOAD_DELAY,
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Overrides the delay before the post-upload reload.
    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    /// Takes the event receiver. Can only be called once.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<UploadEvent>> {
        self.events_rx.take()
    }

    /// Uploads every file of `selection`, in order.
    ///
    /// The next file starts only after the previous one's response has
    /// been received. The first failure halts the session; nothing is
    /// retried.
    pub async fn submit(
        &self,
        transport: &dyn UploadTransport,
        selection: &FileSelection,
    ) -> UploadOutcome {
        if selection.is_empty() {
            let err = UploadError::EmptySelection;
            self.emit(UploadEvent::Status(Feedback::error(err.user_message())));
            let mut session = UploadSession::new(0);
            session.fail(err.user_message());
            return UploadOutcome {
                session,
                error: Some(err),
                reload_after: None,
            };
        }

        let total = selection.len();
        let session = Arc::new(Mutex::new(UploadSession::new(total)));
        info!(files = total, bytes = selection.total_bytes(), "upload started");

        for (index, file) in selection.iter().enumerate() {
            debug!(index, file = file.name(), size = file.size(), "uploading");

            let progress = self.progress_callback(Arc::clone(&session));
            let result = transport
                .upload(
                    &self.context.page_url,
                    file,
                    &self.context.csrf_token,
                    progress,
                )
                .await
                .and_then(|resp| {
                    if resp.is_success() {
                        Ok(())
                    } else {
                        Err(UploadError::Rejected(resp.message))
                    }
                });

            if let Err(err) = result {
                warn!(index, file = file.name(), error = %err, "upload halted");
                return self.halt(session, err);
            }

            let counted = lock(&session).file_done();
            if let Err(e) = counted {
                return self.halt(session, e.into());
            }
            self.emit(UploadEvent::FileUploaded {
                index,
                name: file.name().to_string(),
            });
        }

        lock(&session).complete();
        self.emit(UploadEvent::Progress {
            percent: 100,
            label: "100%".into(),
        });
        self.emit(UploadEvent::Status(Feedback::success(MSG_UPLOAD_COMPLETE)));
        self.emit(UploadEvent::ReloadScheduled {
            after: self.reload_delay,
        });
        info!(files = total, "upload complete");

        UploadOutcome {
            session: snapshot(&session),
            error: None,
            reload_after: Some(self.reload_delay),
        }
    }

    /// Builds the per-file progress callback.
    ///
    /// Runs synchronously inside the transport.
    fn progress_callback(&self, session: Arc<Mutex<UploadSession>>) -> ProgressCallback {
        let tx = self.events_tx.clone();
        Box::new(move |sent, total| {
            let Some(percent) = percent_of(sent, total) else {
                return;
            };
            let label = lock(&session).set_percent(percent);
            let _ = tx.send(UploadEvent::Progress { percent, label });
        })
    }

    fn halt(&self, session: Arc<Mutex<UploadSession>>, err: UploadError) -> UploadOutcome {
        let message = err.user_message();
        lock(&session).fail(message.clone());
        self.emit(UploadEvent::Status(Feedback::error(message)));
        self.emit(UploadEvent::ProgressHidden);

        UploadOutcome {
            session: snapshot(&session),
            error: Some(err),
            reload_after: None,
        }
    }

    /// Never blocks: the receiver may be drained late, or not at all.
    fn emit(&self, event: UploadEvent) {
        let _ = self.events_tx.send(event);
    }
}

fn lock(session: &Mutex<UploadSession>) -> std::sync::MutexGuard<'_, UploadSession> {
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn snapshot(session: &Mutex<UploadSession>) -> UploadSession {
    lock(session).clone()
}
