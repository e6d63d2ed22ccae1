//! Request transport abstraction and its HTTP implementation.

use futures::future::BoxFuture;
use futures::FutureExt;
pub use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ClientError;

/// Sends one JSON request and yields the decoded JSON response.
///
/// The returned future is `'static` so the cache can share it between
/// concurrent callers.
pub trait Transport: Send + Sync + 'static {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> BoxFuture<'static, Result<Value, ClientError>>;
}

/// [`Transport`] over HTTP using [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Error body produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl HttpTransport {
    /// * `base_url` - Server origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shares its connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Attach a previously obtained admin token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchange the admin password for a token and keep it for later requests.
    pub async fn login(&mut self, password: &str) -> Result<(), ClientError> {
        let value = self
            .request(
                Method::POST,
                "/api/auth/login",
                Some(json!({ "password": password })),
            )
            .await?;
        let response: LoginResponse =
            serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.token = Some(response.token);
        tracing::debug!("Obtained admin token");
        Ok(())
    }

    /// Map a response to its JSON body, or to [`ClientError::Http`] on a
    /// non-2xx status using the server's `error` message when present.
    async fn parse_response(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> BoxFuture<'static, Result<Value, ClientError>> {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            Self::parse_response(response).await
        }
        .boxed()
    }
}
