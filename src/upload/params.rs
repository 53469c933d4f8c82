//! Per-run upload parameters.

use std::time::Duration;

use crate::api::{CsrfToken, UploadRequest};
use crate::config::{Assertion, Config};
use crate::fs::SourceFile;

/// Everything an upload needs besides the file and the token.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Upload comment.
    pub summary: String,
    /// Account name sent as `assertuser`.
    pub username: String,
    pub assertion: Assertion,
    pub maxlag: u32,
    pub ignore_warnings: bool,
    /// Pause after a `ratelimited` response.
    pub ratelimit_wait: Duration,
}

impl UploadParams {
    /// Build upload parameters from the merged configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            summary: config.job.summary.clone(),
            username: config.job.username.clone(),
            assertion: config.upload.assert,
            maxlag: config.upload.maxlag,
            ignore_warnings: config.upload.ignore_warnings,
            ratelimit_wait: Duration::from_secs(config.upload.ratelimit_wait_seconds),
        }
    }

    /// Request for uploading `file` as `upload_name` with `token`.
    pub fn request<'a>(
        &'a self,
        file: &'a SourceFile,
        upload_name: &'a str,
        token: &'a CsrfToken,
    ) -> UploadRequest<'a> {
        UploadRequest {
            path: &file.path,
            filename: upload_name,
            comment: &self.summary,
            token,
            ignore_warnings: self.ignore_warnings,
            assertion: self.assertion,
            assert_user: &self.username,
            maxlag: self.maxlag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JobConfig;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_from_config() {
        let mut config = Config {
            job: JobConfig {
                api_endpoint: "https://wiki.example.org/w/api.php".to_string(),
                username: "Uploader".to_string(),
                summary: "Scans from the archive".to_string(),
                image_folder: PathBuf::from("/srv/scans"),
                image_offset: 1,
            },
            ..Default::default()
        };
        config.upload.ratelimit_wait_seconds = 90;

        let params = UploadParams::from_config(&config);
        assert_eq!(params.summary, "Scans from the archive");
        assert_eq!(params.username, "Uploader");
        assert_eq!(params.assertion, Assertion::Bot);
        assert_eq!(params.maxlag, 5);
        assert_eq!(params.ratelimit_wait, Duration::from_secs(90));
    }

    #[test]
    fn test_request_uses_decoded_name() {
        let config = Config::default();
        let params = UploadParams::from_config(&config);
        let file = SourceFile::new(Path::new("/srv/scans"), "Old%20map.png".to_string());
        let token = CsrfToken("tok+\\".to_string());
        let upload_name = file.upload_name();

        let request = params.request(&file, &upload_name, &token);
        assert_eq!(request.filename, "Old map.png");
        assert_eq!(request.path, Path::new("/srv/scans/Old%20map.png"));
        assert_eq!(request.token, &token);
    }
}
