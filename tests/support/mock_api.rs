//! Scriptable in-memory `StudyApi` shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use study_assistant::api::{
    ApiError, ChatMessage, ChatResponse, ClearResponse, HealthResponse, ServiceInfo, StatusResponse, StudyApi,
    UploadFile, UploadResponse,
};

#[derive(Default)]
pub struct MockApi {
    pub document_count: AtomicU64,
    pub chunks_per_upload: u64,
    pub fail_uploads: bool,
    pub fail_chat: bool,
    pub fail_health: bool,
    pub fail_clear: bool,
    pub status_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub clear_calls: AtomicUsize,
    pub chat_requests: Mutex<Vec<(String, Option<Vec<ChatMessage>>)>>,
}

impl MockApi {
    pub fn with_documents(count: u64) -> Self {
        Self {
            document_count: AtomicU64::new(count),
            chunks_per_upload: 5,
            ..Self::default()
        }
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudyApi for MockApi {
    fn base_url(&self) -> &str {
        "http://mock.test"
    }

    async fn upload_file(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads {
            return Err(ApiError::Http {
                status: 500,
                message: "Error processing file: corrupt PDF".to_string(),
            });
        }

        self.document_count.fetch_add(self.chunks_per_upload, Ordering::SeqCst);
        Ok(UploadResponse {
            status: "success".to_string(),
            message: format!("Successfully processed {}", file.filename),
            filename: file.filename,
            chunks_added: self.chunks_per_upload,
        })
    }

    async fn chat(&self, query: &str, chat_history: Option<Vec<ChatMessage>>) -> Result<ChatResponse, ApiError> {
        self.chat_requests
            .lock()
            .unwrap()
            .push((query.to_string(), chat_history));
        if self.fail_chat {
            return Err(ApiError::Network("connection reset".to_string()));
        }

        Ok(ChatResponse {
            answer: format!("Answer to: {}", query),
            sources: vec!["lecture1.pdf".to_string()],
        })
    }

    async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let count = self.document_count.load(Ordering::SeqCst);
        Ok(StatusResponse {
            status: "ok".to_string(),
            message: format!("System is running with {} document chunks indexed", count),
            document_count: count,
        })
    }

    async fn clear_documents(&self) -> Result<ClearResponse, ApiError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_clear {
            return Err(ApiError::Http {
                status: 500,
                message: "vector store unavailable".to_string(),
            });
        }
        self.document_count.store(0, Ordering::SeqCst);
        Ok(ClearResponse {
            status: "success".to_string(),
            message: "All documents cleared successfully".to_string(),
        })
    }

    async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        if self.fail_health {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(HealthResponse {
            status: "healthy".to_string(),
            documents_indexed: self.document_count.load(Ordering::SeqCst),
        })
    }

    async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        Ok(ServiceInfo {
            message: "Study Assistant API".to_string(),
            version: "1.0.0".to_string(),
            status: "running".to_string(),
        })
    }
}
