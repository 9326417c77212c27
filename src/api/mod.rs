//! # API Layer
//!
//! The placeholder network surface: one request/response pair. See
//! [`probe::StatusProbe`] for the seam and [`types::HealthAck`] for the
//! entire wire format.

pub mod probe;
pub mod types;

pub use probe::{HttpStatusProbe, ProbeError, StatusProbe};
pub use types::HealthAck;
