//! HTTP client for registry lookups
//!
//! Wraps reqwest with:
//! - Configurable timeout and User-Agent
//! - Exponential backoff on transient failures (429, connection errors)
//! - Mapping of HTTP failures onto `RegistryError`

use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("next-update/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// GET `url` and decode the JSON body.
    ///
    /// `package` and `registry` are only used to label errors.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let mut delay = BASE_DELAY_MS;
        let mut attempt = 0;

        loop {
            let error = match self.client.get(url).send().await {
                Ok(response) => match response.status() {
                    StatusCode::NOT_FOUND => {
                        return Err(RegistryError::package_not_found(package, registry));
                    }
                    StatusCode::TOO_MANY_REQUESTS => RegistryError::rate_limit_exceeded(registry),
                    status if !status.is_success() => {
                        return Err(RegistryError::network_error(
                            package,
                            registry,
                            format!("HTTP {}", status),
                        ));
                    }
                    _ => {
                        return response.json::<T>().await.map_err(|e| {
                            RegistryError::InvalidResponse {
                                package: package.to_string(),
                                registry: registry.to_string(),
                                message: format!("failed to parse JSON: {}", e),
                            }
                        });
                    }
                },
                Err(e) if e.is_timeout() => RegistryError::timeout(package, registry),
                Err(e) => RegistryError::network_error(package, registry, e.to_string()),
            };

            if attempt >= self.max_retries {
                return Err(error);
            }
            attempt += 1;
            debug!(%url, attempt, "retrying registry request after: {}", error);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            delay *= 2;
        }
    }
}
