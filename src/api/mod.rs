//! Client layer for the Study Assistant backend.
//!
//! This module defines the interface the UI talks to, the request and response
//! shapes of the backend's REST contract, and the error type shared by every
//! call. The HTTP implementation lives in [`http`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpStudyApi;

/// Errors returned by backend operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read file: {0}")]
    Io(String),
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of conversation history as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub message: String,
    pub filename: String,
    pub chunks_added: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub document_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub documents_indexed: u64,
}

/// Response of the service root, `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// A file ready to be sent to `POST /upload`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Operations offered by the Study Assistant backend.
///
/// Every call is a single request with no retry and no caching. The UI holds
/// the client as `Arc<dyn StudyApi>` so tests can substitute their own.
#[async_trait]
pub trait StudyApi: Send + Sync {
    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    async fn upload_file(&self, file: UploadFile) -> Result<UploadResponse, ApiError>;
    async fn chat(&self, query: &str, chat_history: Option<Vec<ChatMessage>>) -> Result<ChatResponse, ApiError>;
    async fn get_status(&self) -> Result<StatusResponse, ApiError>;
    async fn clear_documents(&self) -> Result<ClearResponse, ApiError>;
    async fn health_check(&self) -> Result<HealthResponse, ApiError>;
    async fn service_info(&self) -> Result<ServiceInfo, ApiError>;
}
