//! HTTP reporter for the `updateDeliveryStatus` endpoint
//!
//! Every report is a single POST. There is no retry, no authentication and
//! no interpretation of the response beyond its status code.

use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::status::{DeliveryStatus, JSON_CONTENT_TYPE};

pub const DEFAULT_ENDPOINT: &str = "https://fcm-server-gct0.onrender.com/updateDeliveryStatus";

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct DeliveryClient {
    endpoint: Arc<String>,
    timeout: Option<Duration>,
}

impl Default for DeliveryClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl DeliveryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Arc::new(endpoint.into()),
            timeout: None,
        }
    }

    /// Overall request timeout. Without one the HTTP client's default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// POST the status and return the response code.
    ///
    /// Any response counts as sent, including 4xx and 5xx. Only transport
    /// failures (connect, timeout, invalid endpoint) are errors.
    pub async fn send(&self, status: &DeliveryStatus) -> Result<u16, DeliveryError> {
        // A fresh client per report: connections are never reused across messages.
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let body = status.to_body();
        debug!("Posting delivery status to {}: {}", self.endpoint, body);

        let response = client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let code = response.status().as_u16();
        info!("Delivery status sent: {}", code);
        Ok(code)
    }
}
