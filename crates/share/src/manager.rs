//! Share manager: dialog state machine over `ShareApi`.
//!
//! `Closed -> Loading -> Loaded -> {Mutating -> Loaded | Error}`, and back
//! to `Closed` on dismissal. At most one request is in flight per dialog:
//! `&mut self` rules out overlapping calls, and a mutation requested while
//! the dialog is loading or mutating is ignored.

use std::sync::Arc;

use crdrive_protocol::constants::{MSG_SHARE_LOAD_FAILED, MSG_VISIBILITY_UPDATED};
use crdrive_protocol::{AccessLevel, ApiResponse, Feedback, ShareTarget, Visibility};
use tracing::{debug, info, warn};

use crate::api::{ConfirmPrompt, ShareApi};
use crate::dialog::{DialogState, ShareDialog};
use crate::error::ShareError;

/// What a dialog action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Guard not met (disabled control, blank input, declined prompt, busy).
    /// No request was issued.
    Ignored,
    /// The server accepted the mutation.
    Applied,
    /// The request failed; the banner shows why.
    Failed(ShareError),
}

/// Drives the share dialog for one entity at a time.
pub struct ShareManager {
    api: Arc<dyn ShareApi>,
    state: DialogState,
    dialog: ShareDialog,
    /// Whether the current target has been fetched successfully at least once.
    loaded: bool,
}

impl ShareManager {
    pub fn new(api: Arc<dyn ShareApi>) -> Self {
        Self {
            api,
            state: DialogState::Closed,
            dialog: ShareDialog::default(),
            loaded: false,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn dialog(&self) -> &ShareDialog {
        &self.dialog
    }

    /// Opens (or re-opens) the dialog for `target` and fetches its state.
    ///
    /// Always issues exactly one share-info request.
    pub async fn open(&mut self, target: ShareTarget, display_name: &str) -> Result<(), ShareError> {
        if self.dialog.target != Some(target) {
            self.dialog = ShareDialog::default();
            self.loaded = false;
        }
        self.dialog.target = Some(target);
        self.dialog.title = display_name.to_string();
        self.dialog.reset_inputs();
        self.dialog.busy = true;
        self.state = DialogState::Loading;
        debug!(entity = %target, "loading share dialog");

        let result = self.api.get_share_info(&target).await;
        self.dialog.busy = false;

        match result {
            Ok(info) => {
                self.dialog.render(&info.dedup_users());
                self.loaded = true;
                self.state = DialogState::Loaded;
                Ok(())
            }
            Err(e) => {
                warn!(entity = %target, error = %e, "failed to load share info");
                self.dialog.feedback = Some(Feedback::error(e.user_message(MSG_SHARE_LOAD_FAILED)));
                self.state = DialogState::Error;
                Err(e)
            }
        }
    }

    /// Dismisses the dialog.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
        self.dialog = ShareDialog::default();
        self.loaded = false;
    }

    /// Changes the default visibility. No-op unless the caller owns the entity.
    ///
    /// The response is authoritative: nothing is re-fetched, only the
    /// banner changes.
    pub async fn change_visibility(&mut self, visibility: Visibility) -> MutationOutcome {
        let Some(target) = self.ready_target() else {
            return MutationOutcome::Ignored;
        };
        if self.dialog.visibility_disabled() {
            return MutationOutcome::Ignored;
        }

        let previous = self.dialog.visibility;
        self.dialog.visibility = visibility;
        self.begin_mutation();

        let result = check(self.api.update_visibility(&target, visibility).await);
        match result {
            Ok(resp) => {
                info!(entity = %target, %visibility, "visibility updated");
                self.dialog.feedback =
                    Some(Feedback::success(resp.message_or(MSG_VISIBILITY_UPDATED)));
                self.end_mutation(DialogState::Loaded);
                MutationOutcome::Applied
            }
            Err(e) => {
                self.dialog.visibility = previous;
                self.fail_mutation(e)
            }
        }
    }

    /// Grants `username` access at `access_level`, then reloads the dialog.
    ///
    /// No-op when the trimmed username is blank or the form is disabled.
    pub async fn add_user(&mut self, username: &str, access_level: AccessLevel) -> MutationOutcome {
        let username = username.trim();
        if username.is_empty() {
            return MutationOutcome::Ignored;
        }
        let Some(target) = self.ready_target() else {
            return MutationOutcome::Ignored;
        };
        if self.dialog.add_form_disabled() {
            return MutationOutcome::Ignored;
        }

        self.dialog.add_user.username = username.to_string();
        self.dialog.add_user.access_level = access_level;
        self.begin_mutation();

        let result = check(
            self.api
                .add_shared_user(&target, username, access_level)
                .await,
        );
        match result {
            Ok(_) => {
                info!(entity = %target, username, %access_level, "shared user added");
                self.end_mutation(DialogState::Loading);
                self.reload(target).await;
                MutationOutcome::Applied
            }
            Err(e) => self.fail_mutation(e),
        }
    }

    /// Revokes the access of `username` after interactive confirmation,
    /// then reloads the dialog.
    ///
    /// A failed removal leaves the row in place.
    pub async fn remove_user(
        &mut self,
        username: &str,
        prompt: &dyn ConfirmPrompt,
    ) -> MutationOutcome {
        let Some(target) = self.ready_target() else {
            return MutationOutcome::Ignored;
        };
        if !self.dialog.is_owner || self.dialog.busy {
            return MutationOutcome::Ignored;
        }
        if !prompt.confirm(&format!("Remove access for {username}?")) {
            debug!(entity = %target, username, "removal declined");
            return MutationOutcome::Ignored;
        }

        self.begin_mutation();
        let result = check(self.api.remove_shared_user(&target, username).await);
        match result {
            Ok(_) => {
                info!(entity = %target, username, "shared user removed");
                self.end_mutation(DialogState::Loading);
                self.reload(target).await;
                MutationOutcome::Applied
            }
            Err(e) => self.fail_mutation(e),
        }
    }

    /// Re-runs the open sequence for `target` with the current title.
    async fn reload(&mut self, target: ShareTarget) {
        let title = self.dialog.title.clone();
        // The load failure is already on the banner.
        let _ = self.open(target, &title).await;
    }

    /// Target of a dialog that can accept a mutation right now.
    fn ready_target(&self) -> Option<ShareTarget> {
        match self.state {
            DialogState::Loaded | DialogState::Error if self.loaded => self.dialog.target,
            _ => None,
        }
    }

    fn begin_mutation(&mut self) {
        self.state = DialogState::Mutating;
        self.dialog.busy = true;
        self.dialog.feedback = None;
    }

    fn end_mutation(&mut self, next: DialogState) {
        self.dialog.busy = false;
        self.state = next;
    }

    fn fail_mutation(&mut self, err: ShareError) -> MutationOutcome {
        warn!(entity = ?self.dialog.target, error = %err, "share mutation failed");
        self.dialog.feedback = Some(Feedback::error(err.mutation_message()));
        let next = if err.is_transport() {
            DialogState::Error
        } else {
            DialogState::Loaded
        };
        self.end_mutation(next);
        MutationOutcome::Failed(err)
    }
}

/// Turns a non-success `{status, message}` body into a rejection.
fn check(result: Result<ApiResponse, ShareError>) -> Result<ApiResponse, ShareError> {
    match result {
        Ok(resp) if resp.is_success() => Ok(resp),
        Ok(resp) => Err(ShareError::Rejected(resp.message)),
        Err(e) => Err(e),
    }
}
