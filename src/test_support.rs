//! Shared helpers for unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::probe::{ProbeError, StatusProbe};
use crate::api::types::HealthAck;
use crate::core::state::{App, Section};

/// A probe that always answers instantly. Keeps tests off the network.
pub struct NoopProbe;

#[async_trait]
impl StatusProbe for NoopProbe {
    fn name(&self) -> &str {
        "noop"
    }

    async fn ping(&self) -> Result<HealthAck, ProbeError> {
        Ok(HealthAck {
            message: String::from("pong"),
            timestamp: Utc::now(),
        })
    }
}

/// An app wired to the noop probe, starting on the home page.
pub fn test_app() -> App {
    App::new(Arc::new(NoopProbe), Section::Home)
}
