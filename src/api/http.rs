//! reqwest implementation of [`StudyApi`].

use super::{
    ApiError, ChatMessage, ChatRequest, ChatResponse, ClearResponse, HealthResponse, ServiceInfo, StatusResponse,
    StudyApi, UploadFile, UploadResponse,
};
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Error body FastAPI-style backends send with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// HTTP client for the Study Assistant backend.
#[derive(Clone, Debug)]
pub struct HttpStudyApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStudyApi {
    /// Create a client for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `[api]` config section.
    ///
    /// The base URL is resolved once here; later changes to the environment
    /// are not observed.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.resolve_base_url(),
        })
    }

    /// Point an existing client at another backend, keeping its settings.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a response into `T`, or into an [`ApiError`] for non-2xx statuses.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl StudyApi for HttpStudyApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn upload_file(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        let mime = mime_for(&file.filename);
        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(mime)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        Self::decode(response).await
    }

    async fn chat(&self, query: &str, chat_history: Option<Vec<ChatMessage>>) -> Result<ChatResponse, ApiError> {
        let body = ChatRequest {
            query: query.to_string(),
            chat_history,
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        Self::decode(response).await
    }

    async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        let response = self.client.get(self.url("/status")).send().await.map_err(network_error)?;
        Self::decode(response).await
    }

    async fn clear_documents(&self) -> Result<ClearResponse, ApiError> {
        let response = self
            .client
            .delete(self.url("/clear"))
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let response = self.client.get(self.url("/health")).send().await.map_err(network_error)?;
        Self::decode(response).await
    }

    async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        let response = self.client.get(self.url("/")).send().await.map_err(network_error)?;
        Self::decode(response).await
    }
}

impl UploadFile {
    /// Read a file from disk, keeping only its file name for the form part.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ApiError::Io(format!("{} has no file name", path.display())))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Io(format!("{}: {}", path.display(), e)))?;

        Ok(Self { filename, bytes })
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Pick the message shown to the user from an error body.
///
/// `{"detail": "..."}` yields the detail text; validation errors with a list
/// detail are rendered as JSON; anything else falls back to the raw body.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return match parsed.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("request failed").to_string()
    } else {
        trimmed.to_string()
    }
}

fn mime_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("pptx") => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => "application/octet-stream",
    }
}
