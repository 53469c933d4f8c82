//! MediaWiki Action API HTTP client.

use reqwest::{multipart, Client};
use url::Url;

use crate::api::types::*;
use crate::error::{Error, Result};

/// MediaWiki API client with a persistent cookie session.
pub struct WikiApi {
    client: Client,
    endpoint: Url,
}

impl WikiApi {
    /// Create a new API client for the given `api.php` endpoint.
    pub fn new(endpoint: Url, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// The `api.php` URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST form-encoded parameters and return the raw response body.
    async fn post_form(&self, params: &[(&str, &str)]) -> Result<String> {
        tracing::debug!("POST {} action={:?}", self.endpoint, action_of(params));

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        Ok(text)
    }

    /// Fetch a token of the given kind.
    pub async fn fetch_token(&self, kind: TokenKind) -> Result<String> {
        let text = self
            .post_form(&[
                ("action", "query"),
                ("meta", "tokens"),
                ("type", kind.as_str()),
                ("format", "json"),
            ])
            .await?;
        tracing::debug!("Token response: {}", text);

        let malformed = || Error::MalformedResponse {
            context: format!("fetching {} token", kind),
            body: text.clone(),
        };

        let response: TokensResponse = serde_json::from_str(&text).map_err(|_| malformed())?;
        response
            .query
            .tokens
            .get(&kind.response_key())
            .cloned()
            .ok_or_else(malformed)
    }

    /// Fetch a one-time login token.
    pub async fn fetch_login_token(&self) -> Result<LoginToken> {
        self.fetch_token(TokenKind::Login).await.map(LoginToken)
    }

    /// Fetch a fresh CSRF token for the logged-in session.
    pub async fn fetch_csrf_token(&self) -> Result<CsrfToken> {
        self.fetch_token(TokenKind::Csrf).await.map(CsrfToken)
    }

    /// Log in with a bot password or account credentials.
    ///
    /// The session cookie set by the server is kept by the client's cookie
    /// store for every later request.
    pub async fn login(&self, token: &LoginToken, username: &str, password: &str) -> Result<()> {
        let text = self
            .post_form(&[
                ("action", "login"),
                ("lgname", username),
                ("lgpassword", password),
                ("lgtoken", token.as_str()),
                ("format", "json"),
            ])
            .await?;

        let response: LoginResponse = match serde_json::from_str(&text) {
            Ok(response) => response,
            Err(_) => return Err(Error::LoginFailed { body: text }),
        };

        if !response.is_success() {
            return Err(Error::LoginFailed { body: text });
        }

        if let Some(name) = response.login.as_ref().and_then(|l| l.lgusername.as_deref()) {
            tracing::debug!("Logged in as {}", name);
        }

        Ok(())
    }

    /// Upload one file as multipart form data.
    ///
    /// The file is opened and streamed on every call, so a retry re-reads it
    /// from the start.
    pub async fn upload(&self, request: &UploadRequest<'_>) -> Result<UploadResponse> {
        let file = tokio::fs::File::open(request.path).await?;
        let length = file.metadata().await?.len();
        let mime = mime_guess::from_path(request.path).first_or_octet_stream();

        let part = multipart::Part::stream_with_length(file, length)
            .file_name(request.filename.to_string())
            .mime_str(mime.essence_str())?;

        let mut form = multipart::Form::new()
            .text("action", "upload")
            .text("filename", request.filename.to_string())
            .text("comment", request.comment.to_string())
            .text("token", request.token.as_str().to_string())
            .text("assert", request.assertion.as_str())
            .text("assertuser", request.assert_user.to_string())
            .text("maxlag", request.maxlag.to_string())
            .text("format", "json");

        if request.ignore_warnings {
            form = form.text("ignorewarnings", "1");
        }

        let form = form.part("file", part);

        tracing::debug!(
            "POST {} action=upload filename={} ({} bytes, {})",
            self.endpoint,
            request.filename,
            length,
            mime
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        tracing::debug!("Upload response: {}", text);

        UploadResponse::from_body(text.clone()).map_err(|_| Error::MalformedResponse {
            context: format!("uploading {}", request.filename),
            body: text,
        })
    }
}

/// The `action` value of a parameter list, for logging.
fn action_of<'a>(params: &[(&'a str, &'a str)]) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| *key == "action")
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_of() {
        assert_eq!(
            action_of(&[("format", "json"), ("action", "login")]),
            Some("login")
        );
        assert_eq!(action_of(&[("format", "json")]), None);
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let endpoint = Url::parse("https://wiki.example.org/w/api.php").unwrap();
        let api = WikiApi::new(endpoint.clone(), "TestAgent/1.0").unwrap();
        assert_eq!(api.endpoint(), &endpoint);
    }
}
