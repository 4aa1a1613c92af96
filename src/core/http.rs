use crate::core::HttpSettings;
use crate::utils::error::{Result, TxError};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl FromStr for HttpMethod {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            _ => Err(TxError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([(
        DEFAULT_CONTENT_TYPE.0.to_string(),
        DEFAULT_CONTENT_TYPE.1.to_string(),
    )])
}

/// JSON-over-HTTP client. Headers passed to [`HttpClient::request`] replace
/// the client's defaults rather than merging with them.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            default_headers: default_headers(),
            timeout: None,
        }
    }

    pub fn from_settings<C: HttpSettings + ?Sized>(settings: &C) -> Self {
        Self {
            client: Client::new(),
            default_headers: settings.default_headers(),
            timeout: settings.timeout_seconds().map(Duration::from_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        payload: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        let mut request = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
        };

        for (key, value) in headers.unwrap_or(&self.default_headers) {
            request = request.header(key, value);
        }

        match payload {
            Some(body) if method.carries_body() => {
                request = request.json(body);
            }
            Some(_) => {
                tracing::debug!("📡 Ignoring payload for {} request", method);
            }
            None => {}
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 Making {} request to: {}", method, url);
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                TxError::ValidationError {
                    message: format!("Could not build request: {}", e),
                }
            } else {
                TxError::ApiError(e)
            }
        })?;
        let status = response.status();
        tracing::debug!("📡 Response status: {}", status);

        let body = response.bytes().await?;
        if !status.is_success() {
            tracing::warn!("📡 {} {} failed with status {}", method, url, status);
            return Err(TxError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| TxError::InvalidResponse {
            message: e.to_string(),
        })
    }
}

/// One-shot request through a default client. The method is parsed before
/// any network I/O, so an unsupported verb never reaches the wire.
pub async fn http_request(
    url: &str,
    method: &str,
    payload: Option<&Value>,
    headers: Option<&HashMap<String, String>>,
) -> Result<Value> {
    let method: HttpMethod = method.parse()?;
    HttpClient::new().request(url, method, payload, headers).await
}
