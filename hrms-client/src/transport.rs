//! HTTP transport with bounded exponential backoff
//!
//! All backend traffic funnels through [`HttpTransport::call`]: a typed
//! JSON request that retries transient failures up to the configured
//! attempt bound. An HTTP 401 is a business rejection, not a transport
//! failure: its body is decoded and handed back as a normal result so the
//! caller can inspect the `message`/`user` fields.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body shape used by the backend for non-success statuses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Network transport to the HRMS backend
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    max_attempts: u32,
    retry_base_delay: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_attempts: config.max_attempts.max(1),
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Delay slept after failed attempt `i` (0-indexed): `base * 2^i`.
    pub fn backoff_delay(&self, failed_attempt: u32) -> Duration {
        self.retry_base_delay * 2u32.saturating_pow(failed_attempt)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.call(Method::POST, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.call(Method::PUT, path, Some(body)).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call::<T, ()>(Method::PUT, path, None).await
    }

    /// Issue a request, retrying failed attempts with exponential backoff.
    ///
    /// The delay is a cooperative `tokio::time::sleep`; other queued work
    /// keeps running while a retry is pending. After the last attempt the
    /// original error propagates unchanged.
    pub async fn call<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0u32;
        loop {
            match self.attempt(method.clone(), &url, body).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        url = %url,
                        error = %err,
                        "request attempt failed"
                    );
                    attempt += 1;
                    if attempt >= self.max_attempts {
                        return Err(err);
                    }
                    tokio::time::sleep(self.backoff_delay(attempt - 1)).await;
                }
            }
        }
    }

    async fn attempt<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let response = req.send().await?;
        let status = response.status();

        // 401 reached the server and was rejected for business reasons;
        // its JSON body is a normal result for the caller.
        if !status.is_success() && status != StatusCode::UNAUTHORIZED {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16()));
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_failed_attempt() {
        let config = ClientConfig::new("http://localhost:5000");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.backoff_delay(0), Duration::from_secs(1));
        assert_eq!(transport.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(transport.backoff_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn base_url_is_normalized() {
        let config = ClientConfig::new("http://localhost:5000/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:5000");
    }
}
