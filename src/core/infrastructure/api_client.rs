//! Internal HTTP client for the provisioning service's REST gateway.

use crate::core::{
    config::ClientConfig,
    domain::error::{CmaError, CmaResult, ValidationError},
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, Method, StatusCode};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Internal HTTP client that sends JSON requests to the provisioning service.
///
/// Every request honours the optional client-side rate limit. Non-success
/// responses are mapped onto [`CmaError`]; a `404` becomes
/// [`CmaError::NotFound`].
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient` rooted at `base_url`.
    ///
    /// # Errors
    /// Returns `CmaError::Validation` for an invalid configuration and
    /// `CmaError::Connection` if the HTTP client cannot be built.
    pub fn new(base_url: Url, config: &ClientConfig) -> CmaResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| CmaError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero("requests_per_second", rl.requests_per_second)?;
                let burst = non_zero("burst_size", rl.burst_size)?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url,
            rate_limiter,
        })
    }

    /// Returns the root URL of the provisioning service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs a GET request with the given query parameters.
    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> CmaResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::GET, path, query, None::<&()>)
            .await
    }

    /// Performs a POST request with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> CmaResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::POST, path, &[], Some(body))
            .await
    }

    /// Performs a PUT request with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> CmaResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::PUT, path, &[], Some(body))
            .await
    }

    /// Performs a DELETE request with the given query parameters.
    pub async fn delete<T>(&self, path: &str, query: &[(&str, &str)]) -> CmaResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::DELETE, path, query, None::<&()>)
            .await
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> CmaResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))
            .map_err(|e| ValidationError::Format(format!("Invalid request URL: {}", e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> CmaResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.build_url(path, query)?;
        debug!(%method, %url, "sending provisioning request");

        let mut req_builder = self.http_client.request(method, url);
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| CmaError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            if status == StatusCode::NOT_FOUND {
                return Err(CmaError::NotFound(error_text));
            }
            return Err(CmaError::provisioning(status.as_u16(), error_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CmaError::Serialization(format!("Failed to parse response: {}", e)))
    }
}

fn non_zero(field: &str, value: u32) -> CmaResult<NonZeroU32> {
    NonZeroU32::new(value)
        .ok_or_else(|| ValidationError::field(field, "Value cannot be 0").into())
}
