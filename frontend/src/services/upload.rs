//! HTTP service for uploading documents to the backend

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{FileHandle, UploadTransport};
use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult, UploadResponse};

impl FileHandle for File {
    fn name(&self) -> String {
        File::name(self)
    }
}

/// Upload over `fetch`, one multipart part named `file`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl UploadTransport for FetchTransport {
    type File = File;

    async fn post(&self, endpoint: &str, file: File) -> AppResult<UploadResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
            .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(endpoint)
            .body(form_data)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        log::debug!("POST {} ({} bytes)", endpoint, file.size());

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(UploadResponse { status, body })
    }
}
