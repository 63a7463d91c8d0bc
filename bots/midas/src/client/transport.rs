use async_trait::async_trait;
use core_logic::ApiError;
use reqwest::header::HeaderMap;

/// HTTP verb subset the remote API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Raw result of one remote call: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The opaque HTTP transport capability.
///
/// One implementation wraps a real browser-emulating client; tests swap in
/// a scripted mock. Anti-automation challenge handling, if any, lives
/// entirely behind this seam.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError>;
}

/// Production transport over a single shared `reqwest::Client`.
///
/// The client is built once and reused across all accounts and cycles.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: "client".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
        }
        .headers(headers);

        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            endpoint: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport {
            endpoint: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(ApiResponse { status, body })
    }
}
