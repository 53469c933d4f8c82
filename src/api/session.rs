//! The slice of the API the upload loop depends on.

use async_trait::async_trait;

use crate::api::client::WikiApi;
use crate::api::types::{CsrfToken, UploadRequest, UploadResponse};
use crate::error::Result;

/// Operations needed once logged in: refreshing the CSRF token and uploading.
#[async_trait]
pub trait WikiSession: Send + Sync {
    /// Fetch a fresh CSRF token.
    async fn fetch_csrf_token(&self) -> Result<CsrfToken>;

    /// Send one upload request and return the parsed response.
    async fn upload(&self, request: &UploadRequest<'_>) -> Result<UploadResponse>;
}

#[async_trait]
impl WikiSession for WikiApi {
    async fn fetch_csrf_token(&self) -> Result<CsrfToken> {
        WikiApi::fetch_csrf_token(self).await
    }

    async fn upload(&self, request: &UploadRequest<'_>) -> Result<UploadResponse> {
        WikiApi::upload(self, request).await
    }
}
