//! View model of the share dialog.
//!
//! Holds exactly what a front-end needs to draw the dialog. Only the
//! manager mutates it.

use crdrive_protocol::constants::MSG_NO_SHARED_USERS;
use crdrive_protocol::{AccessLevel, Feedback, ShareInfoResponse, ShareTarget, Visibility};

/// Lifecycle of one dialog invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Loading,
    Loaded,
    Mutating,
    Error,
}

/// One row of the shared-users list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub access_level: AccessLevel,
    /// Whether the row carries a removal control (owners only).
    pub removable: bool,
}

/// Content of the shared-users list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserList {
    /// No users: a single placeholder row with this text.
    Placeholder(String),
    Rows(Vec<UserRow>),
}

impl Default for UserList {
    fn default() -> Self {
        Self::Placeholder(MSG_NO_SHARED_USERS.into())
    }
}

impl UserList {
    pub fn rows(&self) -> &[UserRow] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn find(&self, username: &str) -> Option<&UserRow> {
        self.rows().iter().find(|r| r.username == username)
    }
}

/// The "add user" inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddUserInputs {
    pub username: String,
    pub access_level: AccessLevel,
}

/// Everything the dialog shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareDialog {
    pub target: Option<ShareTarget>,
    pub title: String,
    pub share_link: String,
    pub visibility: Visibility,
    pub is_owner: bool,
    pub users: UserList,
    pub add_user: AddUserInputs,
    pub feedback: Option<Feedback>,
    /// A request is in flight; every control reports disabled.
    pub busy: bool,
}

impl ShareDialog {
    pub fn visibility_disabled(&self) -> bool {
        !self.is_owner || self.busy
    }

    pub fn add_form_disabled(&self) -> bool {
        !self.is_owner || self.busy
    }

    /// Clears the banner and resets the add-user inputs to defaults.
    pub(crate) fn reset_inputs(&mut self) {
        self.feedback = None;
        self.add_user = AddUserInputs::default();
    }

    /// Renders a fresh share-info snapshot.
    pub(crate) fn render(&mut self, info: &ShareInfoResponse) {
        self.share_link = info.share_link.clone();
        self.visibility = info.visibility;
        self.is_owner = info.is_owner;
        self.users = if info.shared_users.is_empty() {
            UserList::default()
        } else {
            UserList::Rows(
                info.shared_users
                    .iter()
                    .map(|u| UserRow {
                        username: u.username.clone(),
                        access_level: u.access_level,
                        removable: info.is_owner,
                    })
                    .collect(),
            )
        };
    }
}
