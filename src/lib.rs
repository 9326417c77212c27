//! # Atrium
//!
//! A terminal workspace dashboard: home overview, inbox triage, and a
//! contextual detail pane, with a small HTTP health probe against the
//! backend.
//!
//! The crate splits into three layers:
//!
//! - [`core`] — UI-agnostic application state: the detail pane store,
//!   section navigation, inbox filtering, and configuration.
//! - [`api`] — HTTP client types and the [`api::StatusProbe`] trait.
//! - [`tui`] — the ratatui adapter: rendering, event routing, and the
//!   main loop.

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
