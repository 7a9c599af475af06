//! Configuration for the adapter and its HTTP provisioning client.

use crate::core::domain::error::ValidationError;
use std::{env, time::Duration};

/// Provider name written into cluster records when none is configured.
pub const DEFAULT_PROVIDER: &str = "vmware";

/// Namespace holding cluster records when none is configured.
pub const DEFAULT_RECORD_NAMESPACE: &str = "default";

/// Settings of the cluster adapter itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Provider name stamped on every cluster record.
    pub provider: String,
    /// Kubernetes namespace of the cluster records.
    pub record_namespace: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            record_namespace: DEFAULT_RECORD_NAMESPACE.to_string(),
        }
    }
}

impl AdapterConfig {
    /// Reads `CMA_VMWARE_PROVIDER` and `CMA_RECORD_NAMESPACE`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        let defaults = Self::default();
        let config = Self {
            provider: env::var("CMA_VMWARE_PROVIDER").unwrap_or(defaults.provider),
            record_namespace: env::var("CMA_RECORD_NAMESPACE")
                .unwrap_or(defaults.record_namespace),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider.trim().is_empty() {
            return Err(ValidationError::field("provider", "Provider cannot be empty"));
        }
        if self.record_namespace.trim().is_empty() {
            return Err(ValidationError::field(
                "record_namespace",
                "Record namespace cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Client-side rate limit for calls to the provisioning service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Settings of the HTTP provisioning client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Accept self-signed certificates on the provisioning endpoint.
    pub accept_invalid_certs: bool,
    /// `None` disables rate limiting.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout.is_zero() {
            return Err(ValidationError::field("timeout", "Timeout cannot be zero"));
        }
        if let Some(rl) = self.rate_limit {
            if rl.requests_per_second == 0 {
                return Err(ValidationError::field(
                    "requests_per_second",
                    "Rate limit must allow at least one request per second",
                ));
            }
            if rl.burst_size == 0 {
                return Err(ValidationError::field(
                    "burst_size",
                    "Burst size cannot be 0",
                ));
            }
        }
        Ok(())
    }
}
