//! # Status Probe
//!
//! The one network interface in the app: a health-check ping that returns a
//! fixed acknowledgement. Carries no business logic; it exists so the shell
//! can show whether the backend placeholder answers at all.
//!
//! The trait seam lets tests substitute a canned probe without a server.

use std::fmt;

use async_trait::async_trait;

use super::types::HealthAck;

/// Errors from a ping attempt.
#[derive(Debug)]
pub enum ProbeError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Status(u16),
    /// Body wasn't the expected acknowledgement payload.
    Parse(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Network(msg) => write!(f, "network error: {msg}"),
            ProbeError::Status(code) => write!(f, "unexpected status: HTTP {code}"),
            ProbeError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Returns the name of the probe (for logging).
    fn name(&self) -> &str;

    /// Ping the health endpoint and return its acknowledgement.
    async fn ping(&self) -> Result<HealthAck, ProbeError>;
}

/// Probe that GETs `{base_url}/api/health` and expects a JSON `HealthAck`.
pub struct HttpStatusProbe {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStatusProbe {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/health", self.base_url)
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    fn name(&self) -> &str {
        "http"
    }

    async fn ping(&self) -> Result<HealthAck, ProbeError> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status.as_u16()));
        }

        response
            .json::<HealthAck>()
            .await
            .map_err(|e| ProbeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let probe = HttpStatusProbe::new("http://localhost:3000/".to_string());
        assert_eq!(probe.endpoint(), "http://localhost:3000/api/health");

        let probe = HttpStatusProbe::new("http://localhost:3000".to_string());
        assert_eq!(probe.endpoint(), "http://localhost:3000/api/health");
    }

    #[test]
    fn test_probe_error_display() {
        assert_eq!(
            ProbeError::Status(503).to_string(),
            "unexpected status: HTTP 503"
        );
        assert!(ProbeError::Network("refused".into()).to_string().contains("refused"));
    }
}
