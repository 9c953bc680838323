//! Drive v3 file operations.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_core::traits::{DriveClient, DriveFile};

use crate::oauth::DriveOAuth;

const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/drive/v3/files";
const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

/// [`DriveClient`] bound to one refresh token.
///
/// An access token is minted per operation; the task-level call pattern
/// (a handful of uploads per job) does not justify caching tokens.
#[derive(Debug)]
pub struct GoogleDriveClient {
    http: reqwest::Client,
    oauth: DriveOAuth,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct FileResource {
    id: Option<String>,
    #[serde(rename = "webViewLink")]
    web_view_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileResource>,
}

/// Assemble a `multipart/related` body: JSON metadata part followed by
/// the raw content part.
fn multipart_related_body(
    boundary: &str,
    metadata: &serde_json::Value,
    content: &[u8],
    mime_type: &str,
) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 512);
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(metadata.to_string().as_bytes());
    body.extend_from_slice(format!("\r\n--{boundary}\r\nContent-Type: {mime_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Escape a file name for use inside a Drive `q` string literal.
fn escape_query_literal(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}

impl GoogleDriveClient {
    pub fn new(oauth: DriveOAuth, refresh_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            oauth,
            refresh_token,
        }
    }

    async fn bearer(&self) -> AppResult<String> {
        self.oauth.access_token(&self.refresh_token).await
    }

    async fn create_folder(
        &self,
        token: &str,
        name: &str,
        parent_id: Option<&str>,
    ) -> AppResult<String> {
        let mut metadata = json!({ "name": name, "mimeType": FOLDER_MIME });
        if let Some(parent) = parent_id {
            metadata["parents"] = json!([parent]);
        }

        let response = self
            .http
            .post(FILES_ENDPOINT)
            .bearer_auth(token)
            .query(&[("fields", "id")])
            .json(&metadata)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Drive folder create failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Drive folder create failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let resource: FileResource = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to decode Drive response", e)
        })?;
        resource
            .id
            .ok_or_else(|| AppError::external("Drive folder create returned no ID"))
    }
}

#[async_trait]
impl DriveClient for GoogleDriveClient {
    async fn upload_file(
        &self,
        name: &str,
        content: &[u8],
        mime_type: &str,
        parent_id: Option<&str>,
    ) -> AppResult<DriveFile> {
        let token = self.bearer().await?;

        let mut metadata = json!({ "name": name });
        if let Some(parent) = parent_id {
            metadata["parents"] = json!([parent]);
        }

        let boundary = format!("adscope-{}", uuid::Uuid::new_v4().simple());
        let body = multipart_related_body(&boundary, &metadata, content, mime_type);

        tracing::debug!(name, size = content.len(), "uploading file to Drive");

        let response = self
            .http
            .post(UPLOAD_ENDPOINT)
            .bearer_auth(&token)
            .query(&[("uploadType", "multipart"), ("fields", "id,webViewLink")])
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/related; boundary={boundary}"),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Drive upload failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Drive upload failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let resource: FileResource = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to decode Drive response", e)
        })?;
        Ok(DriveFile {
            id: resource.id.unwrap_or_default(),
            web_view_link: resource.web_view_link.unwrap_or_default(),
        })
    }

    async fn get_or_create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
    ) -> AppResult<String> {
        let token = self.bearer().await?;

        let mut query = format!(
            "mimeType = '{}' and name = '{}' and trashed = false",
            FOLDER_MIME,
            escape_query_literal(name)
        );
        if let Some(parent) = parent_id {
            query.push_str(&format!(" and '{parent}' in parents"));
        }

        let response = self
            .http
            .get(FILES_ENDPOINT)
            .bearer_auth(&token)
            .query(&[("q", query.as_str()), ("fields", "files(id)")])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Drive folder lookup failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Drive folder lookup failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let listing: FileList = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to decode Drive response", e)
        })?;

        if let Some(id) = listing.files.into_iter().next().and_then(|f| f.id) {
            return Ok(id);
        }
        self.create_folder(&token, name, parent_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_body_layout() {
        let metadata = json!({ "name": "report.md" });
        let body = multipart_related_body("b0undary", &metadata, b"# Report", "text/markdown");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--b0undary\r\nContent-Type: application/json"));
        assert!(text.contains(r#"{"name":"report.md"}"#));
        assert!(text.contains("Content-Type: text/markdown\r\n\r\n# Report"));
        assert!(text.ends_with("--b0undary--\r\n"));
    }

    #[test]
    fn test_query_literal_escaping() {
        assert_eq!(escape_query_literal("O'Neill"), "O\\'Neill");
        assert_eq!(escape_query_literal("plain"), "plain");
    }
}
