//! MediaWiki Action API module.
//!
//! This module provides:
//! - HTTP client with a cookie session
//! - Token, login and upload requests
//! - API response types

pub mod client;
pub mod session;
pub mod types;

pub use client::WikiApi;
pub use session::WikiSession;
pub use types::*;
