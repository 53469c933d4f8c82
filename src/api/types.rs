//! API request and response type definitions.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::Assertion;

/// Kind of token requested from `action=query&meta=tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Login,
    Csrf,
}

impl TokenKind {
    /// Value of the `type` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Login => "login",
            TokenKind::Csrf => "csrf",
        }
    }

    /// Key of this token inside `query.tokens`.
    pub fn response_key(&self) -> String {
        format!("{}token", self.as_str())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time token that starts a login exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginToken(pub String);

impl LoginToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Token authorizing state-changing actions such as uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(pub String);

impl CsrfToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Response of `action=query&meta=tokens`.
#[derive(Debug, Deserialize)]
pub struct TokensResponse {
    pub query: TokensQuery,
}

/// `query` member holding the requested tokens by key.
#[derive(Debug, Deserialize)]
pub struct TokensQuery {
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

/// Response of `action=login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub login: Option<LoginResult>,
}

/// Login outcome.
#[derive(Debug, Deserialize)]
pub struct LoginResult {
    pub result: String,
    pub lgusername: Option<String>,
    pub reason: Option<String>,
}

impl LoginResponse {
    /// Whether the server accepted the credentials.
    pub fn is_success(&self) -> bool {
        self.login
            .as_ref()
            .map(|l| l.result == "Success")
            .unwrap_or(false)
    }
}

/// Error member present on failed API calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: Option<String>,
}

/// Parameters of one `action=upload` request.
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    /// Local file to send.
    pub path: &'a Path,
    /// Target file name on the wiki.
    pub filename: &'a str,
    /// Upload comment.
    pub comment: &'a str,
    pub token: &'a CsrfToken,
    pub ignore_warnings: bool,
    pub assertion: Assertion,
    /// Account the session must belong to.
    pub assert_user: &'a str,
    pub maxlag: u32,
}

/// Response of `action=upload`.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub upload: Option<UploadResult>,
    pub error: Option<ApiErrorBody>,

    /// Raw response body, kept for reporting failures.
    #[serde(skip)]
    pub raw: String,
}

/// Upload outcome.
#[derive(Debug, Deserialize)]
pub struct UploadResult {
    pub result: String,
    pub filename: Option<String>,
}

/// Classification of an upload response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// `upload.result == "Success"`.
    Success,
    /// The CSRF token was rejected as stale or invalid.
    BadToken,
    /// The server is throttling this account.
    RateLimited,
    /// Anything else.
    Failed,
}

/// Error code for a rejected CSRF token.
pub const BAD_TOKEN_CODE: &str = "badtoken";

/// Error code for a throttled request.
pub const RATE_LIMITED_CODE: &str = "ratelimited";

impl UploadResponse {
    /// Parse a raw response body, keeping the body for error reporting.
    pub fn from_body(body: String) -> serde_json::Result<Self> {
        let mut response: UploadResponse = serde_json::from_str(&body)?;
        response.raw = body;
        Ok(response)
    }

    /// Classify the response. A bad token takes precedence over rate limiting.
    pub fn outcome(&self) -> UploadOutcome {
        if let Some(error) = &self.error {
            return match error.code.as_str() {
                BAD_TOKEN_CODE => UploadOutcome::BadToken,
                RATE_LIMITED_CODE => UploadOutcome::RateLimited,
                _ => UploadOutcome::Failed,
            };
        }

        match &self.upload {
            Some(upload) if upload.result == "Success" => UploadOutcome::Success,
            _ => UploadOutcome::Failed,
        }
    }
}
