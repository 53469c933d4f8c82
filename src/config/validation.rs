//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    parse_endpoint(&config.job.api_endpoint)?;
    validate_username(&config.job.username)?;
    validate_image_folder(&config.job.image_folder)?;
    validate_offset(config.job.image_offset)?;
    validate_user_agent(&config.client.user_agent)?;
    validate_maxlag(config.upload.maxlag)?;

    Ok(())
}

/// Parse the API endpoint, which must be an absolute http(s) URL.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(Error::MissingConfig("api_endpoint".to_string()));
    }

    let url = Url::parse(endpoint.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::ConfigValidation {
            field: "api_endpoint".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", other),
        }),
    }
}

/// Validate the account name.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::MissingConfig("username".to_string()));
    }

    Ok(())
}

/// Validate that the source folder exists and is a directory.
pub fn validate_image_folder(folder: &std::path::Path) -> Result<()> {
    if !folder.is_dir() {
        return Err(Error::ConfigValidation {
            field: "image_folder".to_string(),
            message: format!("'{}' is not a directory", folder.display()),
        });
    }

    Ok(())
}

/// Validate the 1-based start offset.
pub fn validate_offset(offset: usize) -> Result<()> {
    if offset == 0 {
        return Err(Error::ConfigValidation {
            field: "image_offset".to_string(),
            message: "Offset is 1-based, use 1 to start with the first file".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}

/// Validate the maxlag ceiling.
pub fn validate_maxlag(maxlag: u32) -> Result<()> {
    if maxlag == 0 {
        return Err(Error::ConfigValidation {
            field: "maxlag".to_string(),
            message: "maxlag must be at least 1 second".to_string(),
        });
    }

    Ok(())
}
