//! Shared HTTP transport to the Record Service
//!
//! One pooled `reqwest::Client` is built per configuration and cloned into
//! every component; cloning shares the connection pool.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::config::ClientConfig;
use super::error::{ClientError, ClientResult};

/// Raw response body returned by write endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement(pub String);

impl Acknowledgement {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to the Record Service
#[derive(Debug, Clone)]
pub struct RecordService {
    client: Client,
    config: ClientConfig,
}

impl RecordService {
    /// Build the transport with the configured timeout
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::transport("build http client", e))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a path and return the body as text
    pub async fn get_text(&self, operation: &'static str, path: &str) -> ClientResult<String> {
        let url = self.config.url(path);
        debug!(%url, operation, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e))?;

        read_body(operation, response).await
    }

    /// GET a path and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> ClientResult<T> {
        let body = self.get_text(operation, path).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::serialization(operation, e))
    }

    /// Send a JSON body with the given method and return the acknowledgement
    pub async fn send_json<B: Serialize>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Acknowledgement> {
        let payload =
            serde_json::to_vec(body).map_err(|e| ClientError::serialization(operation, e))?;
        let url = self.config.url(path);
        debug!(%url, %method, operation, bytes = payload.len(), "sending");

        let response = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e))?;

        read_body(operation, response).await.map(Acknowledgement)
    }
}

/// Read a response body, rejecting non-success statuses
async fn read_body(operation: &'static str, response: Response) -> ClientResult<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::transport(operation, e))?;

    if !status.is_success() {
        return Err(ClientError::protocol(
            operation,
            format!("unexpected status {}: {}", status, body.trim()),
        ));
    }

    Ok(body)
}
