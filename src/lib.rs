//! mw-bulk-upload - bulk file uploads to MediaWiki wikis
//!
//! This library logs in to a MediaWiki Action API endpoint and uploads the
//! files of a folder one request at a time.
//!
//! # Features
//!
//! - Bot password login with a cookie session
//! - Sorted, resumable batches (1-based start offset)
//! - CSRF token refresh and rate-limit backoff, each at most once per file
//! - Percent-decoded upload names
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use url::Url;
//! use mw_bulk_upload::{run_batch, BatchPlan, Config, UploadParams, WikiApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let endpoint = Url::parse("https://wiki.example.org/w/api.php")?;
//!     let api = WikiApi::new(endpoint, &config.client.user_agent)?;
//!
//!     let login_token = api.fetch_login_token().await?;
//!     api.login(&login_token, "Uploader@bulk", "bot-password").await?;
//!     let csrf = api.fetch_csrf_token().await?;
//!
//!     let plan = BatchPlan::from_folder(Path::new("scans"), 1)?;
//!     run_batch(&api, &UploadParams::from_config(&config), &plan, csrf).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod upload;

// Re-exports for convenience
pub use api::{CsrfToken, LoginToken, WikiApi, WikiSession};
pub use config::{Assertion, Config};
pub use error::{Error, Result};
pub use fs::{BatchPlan, SourceFile};
pub use upload::{run_batch, upload_file, BatchState, UploadParams};
