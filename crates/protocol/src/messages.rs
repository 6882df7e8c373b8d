use serde::{Deserialize, Serialize};

use crate::types::{AccessLevel, Visibility};

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Status discriminator reported by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    Success,
    Other(String),
}

impl From<String> for ApiStatus {
    fn from(s: String) -> Self {
        if s == "success" {
            Self::Success
        } else {
            Self::Other(s)
        }
    }
}

impl From<ApiStatus> for String {
    fn from(s: ApiStatus) -> Self {
        match s {
            ApiStatus::Success => "success".into(),
            ApiStatus::Other(s) => s,
        }
    }
}

/// Generic `{status, message}` body returned by uploads and share mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            status: ApiStatus::Success,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Other("error".into()),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Returns the server message, or `fallback` when absent or blank.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

/// One `shared_users` entry of the share-info response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUserEntry {
    #[serde(rename = "user__username")]
    pub username: String,
    pub access_level: AccessLevel,
}

/// Body of `GET /share-info/{kind}/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInfoResponse {
    #[serde(default)]
    pub share_link: String,
    pub visibility: Visibility,
    pub is_owner: bool,
    #[serde(default)]
    pub shared_users: Vec<SharedUserEntry>,
}

impl ShareInfoResponse {
    /// Drops repeated usernames, keeping the first occurrence.
    pub fn dedup_users(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.shared_users.retain(|u| seen.insert(u.username.clone()));
        self
    }
}

// ---------------------------------------------------------------------------
// Request forms
// ---------------------------------------------------------------------------

/// Form body of `POST /share-update/{kind}/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityForm {
    pub visibility: Visibility,
}

/// Form body of `POST /share-add-user/{kind}/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddUserForm<'a> {
    pub username: &'a str,
    pub access_level: AccessLevel,
}

/// Form body of `POST /share-remove-user/{kind}/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveUserForm<'a> {
    pub username: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_success_and_other() {
        let ok: ApiResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.message, None);

        let err: ApiResponse =
            serde_json::from_str(r#"{"status":"error","message":"User not found."}"#).unwrap();
        assert!(!err.is_success());
        assert_eq!(err.message_or("fallback"), "User not found.");
    }

    #[test]
    fn message_or_ignores_blank() {
        let resp = ApiResponse {
            status: ApiStatus::Other("error".into()),
            message: Some("   ".into()),
        };
        assert_eq!(resp.message_or("Upload failed."), "Upload failed.");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&ApiResponse::success()).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }

    #[test]
    fn share_info_parses_server_shape() {
        let json = r#"{
            "share_link": "https://drive.example/s/abc",
            "visibility": "private",
            "is_owner": false,
            "shared_users": [{"user__username": "bob", "access_level": "read"}]
        }"#;
        let info: ShareInfoResponse = serde_json::from_str(json).unwrap();
        assert!(!info.is_owner);
        assert_eq!(info.visibility, Visibility::Private);
        assert_eq!(info.shared_users.len(), 1);
        assert_eq!(info.shared_users[0].username, "bob");
        assert_eq!(info.shared_users[0].access_level, AccessLevel::Read);
    }

    #[test]
    fn share_info_missing_users_defaults_empty() {
        let json = r#"{"visibility":"public","is_owner":true}"#;
        let info: ShareInfoResponse = serde_json::from_str(json).unwrap();
        assert!(info.shared_users.is_empty());
        assert!(info.share_link.is_empty());
    }

    #[test]
    fn dedup_keeps_first_entry() {
        let info = ShareInfoResponse {
            share_link: String::new(),
            visibility: Visibility::Private,
            is_owner: true,
            shared_users: vec![
                SharedUserEntry {
                    username: "alice".into(),
                    access_level: AccessLevel::Write,
                },
                SharedUserEntry {
                    username: "bob".into(),
                    access_level: AccessLevel::Read,
                },
                SharedUserEntry {
                    username: "alice".into(),
                    access_level: AccessLevel::Read,
                },
            ],
        }
        .dedup_users();
        assert_eq!(info.shared_users.len(), 2);
        assert_eq!(info.shared_users[0].access_level, AccessLevel::Write);
    }

    #[test]
    fn add_user_form_fields() {
        let form = AddUserForm {
            username: "alice",
            access_level: AccessLevel::Write,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["username"], "alice");
        assert_eq!(value["access_level"], "write");
    }
}
