//! Scripted in-memory session for upload tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{CsrfToken, UploadRequest, UploadResponse, WikiSession};
use crate::error::{Error, Result};

pub const SUCCESS: &str = r#"{"upload":{"result":"Success","filename":"X.jpg"}}"#;
pub const BAD_TOKEN: &str = r#"{"error":{"code":"badtoken","info":"Invalid CSRF token."}}"#;
pub const RATE_LIMITED: &str =
    r#"{"error":{"code":"ratelimited","info":"As an anti-abuse measure, you are limited."}}"#;

/// One recorded upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub filename: String,
    pub token: String,
}

/// Replies to uploads from a queue of raw bodies (success once it runs dry)
/// and hands out CSRF tokens from a second queue.
#[derive(Default)]
pub struct FakeWiki {
    responses: Mutex<VecDeque<String>>,
    fresh_tokens: Mutex<VecDeque<String>>,
    attempts: Mutex<Vec<Attempt>>,
    token_fetches: Mutex<usize>,
}

impl FakeWiki {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, bodies: &[&str]) -> Self {
        self.responses
            .lock()
            .unwrap()
            .extend(bodies.iter().map(|b| b.to_string()));
        self
    }

    pub fn with_fresh_tokens(self, tokens: &[&str]) -> Self {
        self.fresh_tokens
            .lock()
            .unwrap()
            .extend(tokens.iter().map(|t| t.to_string()));
        self
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.attempts().into_iter().map(|a| a.filename).collect()
    }

    pub fn token_fetches(&self) -> usize {
        *self.token_fetches.lock().unwrap()
    }
}

#[async_trait]
impl WikiSession for FakeWiki {
    async fn fetch_csrf_token(&self) -> Result<CsrfToken> {
        *self.token_fetches.lock().unwrap() += 1;
        self.fresh_tokens
            .lock()
            .unwrap()
            .pop_front()
            .map(CsrfToken)
            .ok_or_else(|| Error::Api("no token scripted".to_string()))
    }

    async fn upload(&self, request: &UploadRequest<'_>) -> Result<UploadResponse> {
        self.attempts.lock().unwrap().push(Attempt {
            filename: request.filename.to_string(),
            token: request.token.as_str().to_string(),
        });

        let body = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| SUCCESS.to_string());

        Ok(UploadResponse::from_body(body)?)
    }
}
