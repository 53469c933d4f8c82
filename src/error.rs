//! Error types for the mw-bulk-upload application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Login failed, server responded with: {body}")]
    LoginFailed { body: String },

    #[error("Unexpected response while {context}: {body}")]
    MalformedResponse { context: String, body: String },

    // Upload errors
    #[error("Upload of '{file}' failed, server responded with: {body}")]
    UploadFailed { file: String, body: String },

    #[error("Batch stopped at file {position} ('{file}'): {source}")]
    BatchAborted {
        position: usize,
        file: String,
        #[source]
        source: Box<Error>,
    },

    // Terminal errors
    #[error("Could not read password: {0}")]
    Prompt(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    ///
    /// A batch abort reports the code of the error that stopped it.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Api(_)
            | Error::LoginFailed { .. }
            | Error::MalformedResponse { .. }
            | Error::Http(_)
            | Error::Json(_) => exit_codes::API_ERROR,
            Error::UploadFailed { .. } | Error::Io(_) => exit_codes::UPLOAD_ERROR,
            Error::BatchAborted { source, .. } => source.exit_code(),
            Error::Prompt(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UPLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
