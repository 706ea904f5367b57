use anyhow::{Context, Result};
use delivery_client::{DeliveryClient, DEFAULT_ENDPOINT};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where delivery reports are POSTed
    pub delivery_status_url: String,
    /// No explicit timeout when unset
    pub delivery_timeout: Option<Duration>,

    pub bind_addr: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            delivery_status_url: lookup("DELIVERY_STATUS_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),

            delivery_timeout: match lookup("DELIVERY_TIMEOUT_SECS") {
                Some(s) if !s.trim().is_empty() => Some(Duration::from_secs(
                    s.trim()
                        .parse()
                        .context("DELIVERY_TIMEOUT_SECS must be a whole number of seconds")?,
                )),
                _ => None,
            },

            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),

            http_port: lookup("HTTP_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("HTTP_PORT must be a valid port number")?,
        })
    }

    pub fn delivery_client(&self) -> DeliveryClient {
        let client = DeliveryClient::new(self.delivery_status_url.clone());
        match self.delivery_timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}
