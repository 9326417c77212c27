//! Wire types for the placeholder RPC surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed acknowledgement payload returned by the health endpoint.
/// This is the entire protocol: a message and a server timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthAck {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
