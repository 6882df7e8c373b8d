//! Drive API client.
//!
//! Async HTTP client using `reqwest`. The CSRF token and optional session
//! cookie are installed as default headers once, at construction.

use std::time::Duration;

use crdrive_protocol::constants::{
    CSRF_HEADER, UPLOAD_CSRF_FIELD, UPLOAD_FILE_FIELD, UPLOAD_MARKER_FIELD, UPLOAD_MARKER_VALUE,
};
use crdrive_protocol::messages::{AddUserForm, RemoveUserForm, VisibilityForm};
use crdrive_protocol::{
    AccessLevel, ApiResponse, Endpoint, ShareInfoResponse, ShareTarget, Visibility,
};
use crdrive_transfer::{DEFAULT_CHUNK_SIZE, FileHandle, ProgressCallback};
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::body::file_body;
use crate::error::ClientError;

/// Connection settings for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Scheme and host of the drive server, e.g. `https://drive.example`.
    pub base_url: String,
    /// CSRF token issued with the page.
    pub csrf_token: String,
    /// Raw `Cookie` header value for an already-authenticated session.
    pub session_cookie: Option<String>,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Size of the pieces upload bodies are streamed in.
    pub chunk_size: Option<usize>,
}

/// Drive API client.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    chunk_size: usize,
}

impl Client {
    /// Creates a new client from `options`.
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-csrftoken"),
            HeaderValue::from_str(&options.csrf_token)
                .map_err(|_| ClientError::InvalidHeader(CSRF_HEADER))?,
        );
        if let Some(cookie) = options.session_cookie.as_deref() {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(cookie).map_err(|_| ClientError::InvalidHeader("Cookie"))?,
            );
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            chunk_size: options.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        })
    }

    /// Resolves a server-relative path (or passes an absolute URL through).
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fetches the current sharing state of `target`.
    pub async fn get_share_info(
        &self,
        target: &ShareTarget,
    ) -> Result<ShareInfoResponse, ClientError> {
        let url = self.url(&Endpoint::ShareInfo.path(target));
        debug!(entity = %target, "fetching share info");
        let resp = self.http.get(&url).send().await?;
        let info: ShareInfoResponse = read_json(resp).await?;
        Ok(info.dedup_users())
    }

    /// Changes the default visibility of `target`.
    pub async fn update_visibility(
        &self,
        target: &ShareTarget,
        visibility: Visibility,
    ) -> Result<ApiResponse, ClientError> {
        self.post_form(Endpoint::ShareUpdate, target, &VisibilityForm { visibility })
            .await
    }

    /// Grants `username` access to `target`.
    pub async fn add_shared_user(
        &self,
        target: &ShareTarget,
        username: &str,
        access_level: AccessLevel,
    ) -> Result<ApiResponse, ClientError> {
        self.post_form(
            Endpoint::ShareAddUser,
            target,
            &AddUserForm {
                username,
                access_level,
            },
        )
        .await
    }

    /// Revokes the access of `username` to `target`.
    pub async fn remove_shared_user(
        &self,
        target: &ShareTarget,
        username: &str,
    ) -> Result<ApiResponse, ClientError> {
        self.post_form(Endpoint::ShareRemoveUser, target, &RemoveUserForm { username })
            .await
    }

    /// Uploads one file to `page_url` as a multipart form.
    ///
    /// `progress` receives `(bytes_sent, bytes_total)` as the body streams.
    pub async fn upload_file(
        &self,
        page_url: &str,
        file: &FileHandle,
        csrf_token: &str,
        progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse, ClientError> {
        let body = file_body(file, self.chunk_size, progress).await?;
        let part = Part::stream_with_length(body, file.size())
            .file_name(file.name().to_string())
            .mime_str("application/octet-stream")?;

        let form = Form::new()
            .text(UPLOAD_MARKER_FIELD, UPLOAD_MARKER_VALUE)
            .part(UPLOAD_FILE_FIELD, part)
            .text(UPLOAD_CSRF_FIELD, csrf_token.to_string());

        let url = self.url(page_url);
        debug!(file = file.name(), size = file.size(), %url, "uploading file");
        let resp = self.http.post(&url).multipart(form).send().await?;
        read_json(resp).await
    }

    /// Re-fetches the page at `page_url` and returns its body.
    pub async fn fetch_page(&self, page_url: &str) -> Result<String, ClientError> {
        let resp = self.http.get(self.url(page_url)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: None,
            });
        }
        Ok(text)
    }

    async fn post_form<F: serde::Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        target: &ShareTarget,
        form: &F,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(&endpoint.path(target));
        debug!(endpoint = endpoint.prefix(), entity = %target, "posting share form");
        let resp = self.http.post(&url).form(form).send().await?;
        read_json(resp).await
    }
}

/// Reads a JSON body, mapping non-success statuses to [`ClientError::Status`].
///
/// An error status whose body still parses as `{status, message}` keeps the
/// server's message.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ApiResponse>(&bytes)
            .ok()
            .and_then(|r| r.message);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
