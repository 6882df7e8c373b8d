use std::time::Duration;

use crate::types::ShareTarget;

/// Delay between the final upload success and the view reload.
pub const RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// Header carrying the CSRF token on every mutating share request.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ---------------------------------------------------------------------------
// Upload form fields
// ---------------------------------------------------------------------------

/// Marker field telling the page handler that this POST is an upload.
pub const UPLOAD_MARKER_FIELD: &str = "upload_file";

/// Value sent with [`UPLOAD_MARKER_FIELD`].
pub const UPLOAD_MARKER_VALUE: &str = "1";

/// Multipart field holding the file payload.
pub const UPLOAD_FILE_FIELD: &str = "encrypted_file";

/// Form field carrying the CSRF token inside the multipart body.
pub const UPLOAD_CSRF_FIELD: &str = "csrfmiddlewaretoken";

// ---------------------------------------------------------------------------
// Share form fields
// ---------------------------------------------------------------------------

pub const FIELD_VISIBILITY: &str = "visibility";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_ACCESS_LEVEL: &str = "access_level";

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

pub const MSG_EMPTY_SELECTION: &str = "Please select files to upload.";
pub const MSG_UPLOAD_COMPLETE: &str = "All files uploaded! Refreshing...";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed.";
pub const MSG_UPLOAD_RETRY: &str = "Upload failed. Please try again.";

pub const MSG_SHARE_LOAD_FAILED: &str = "Could not load sharing settings.";
pub const MSG_VISIBILITY_UPDATED: &str = "Visibility updated.";
pub const MSG_SHARE_FAILED: &str = "Sharing update failed.";
pub const MSG_SHARE_RETRY: &str = "Could not reach the server. Please try again.";
pub const MSG_NO_SHARED_USERS: &str = "Not shared with anyone yet.";

/// Remote endpoints used by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ShareInfo,
    ShareUpdate,
    ShareAddUser,
    ShareRemoveUser,
}

impl Endpoint {
    /// Path prefix segment for this endpoint.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::ShareInfo => "share-info",
            Self::ShareUpdate => "share-update",
            Self::ShareAddUser => "share-add-user",
            Self::ShareRemoveUser => "share-remove-user",
        }
    }

    /// Builds the absolute path for `target`, e.g. `/share-info/file/7/`.
    pub fn path(self, target: &ShareTarget) -> String {
        format!("/{}/{}/{}/", self.prefix(), target.kind, target.id)
    }
}

/// Path of the inline viewer for a file.
pub fn view_path(file_id: u64) -> String {
    format!("/storage/view/{file_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityKind;

    #[test]
    fn endpoint_paths() {
        let file = ShareTarget::new(EntityKind::File, 7);
        let folder = ShareTarget::new(EntityKind::Folder, 12);
        assert_eq!(Endpoint::ShareInfo.path(&file), "/share-info/file/7/");
        assert_eq!(Endpoint::ShareUpdate.path(&folder), "/share-update/folder/12/");
        assert_eq!(
            Endpoint::ShareAddUser.path(&file),
            "/share-add-user/file/7/"
        );
        assert_eq!(
            Endpoint::ShareRemoveUser.path(&folder),
            "/share-remove-user/folder/12/"
        );
    }

    #[test]
    fn view_path_format() {
        assert_eq!(view_path(42), "/storage/view/42/");
    }
}
