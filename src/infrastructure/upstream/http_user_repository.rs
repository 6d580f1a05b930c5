//! [`UserRepository`] backed by the upstream REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

use crate::domain::repositories::UserRepository;
use crate::error::UpstreamError;

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Upstream REST client for the `/users` resource.
///
/// The underlying [`Client`] is cheap to clone and pools connections, so a
/// single instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    http: Client,
    base_url: Url,
}

impl HttpUserRepository {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidUrl`] if `base_url` cannot carry a
    /// path, or [`UpstreamError::Transport`] if the HTTP client fails to build.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(http, base_url)
    }

    /// Creates a repository around an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidUrl`] if `base_url` cannot carry a path.
    pub fn with_client(http: Client, base_url: Url) -> Result<Self, UpstreamError> {
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `<base>/users` or `<base>/users/<id>`.
    ///
    /// The id is pushed as a single percent-encoded segment, so it can never
    /// escape the users resource.
    fn users_url(&self, user_id: Option<&str>) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| UpstreamError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = user_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Fails on any non-success status, otherwise decodes the JSON body.
    async fn read_json(response: Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn list(&self) -> Result<Value, UpstreamError> {
        let url = self.users_url(None)?;
        tracing::debug!(%url, "GET upstream users");

        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<Value>, UpstreamError> {
        let url = self.users_url(Some(user_id))?;
        tracing::debug!(%url, "GET upstream user");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Self::read_json(response).await.map(Some)
    }

    async fn create(&self, payload: &Value) -> Result<Value, UpstreamError> {
        let url = self.users_url(None)?;
        tracing::debug!(%url, "POST upstream user");

        let response = self.http.post(url).json(payload).send().await?;
        Self::read_json(response).await
    }

    async fn delete(&self, user_id: &str) -> Result<Value, UpstreamError> {
        let url = self.users_url(Some(user_id))?;
        tracing::debug!(%url, "DELETE upstream user");

        let response = self.http.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        // An empty delete body is read as an empty object.
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
