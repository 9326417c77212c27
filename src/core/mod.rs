//! # Core Application Logic
//!
//! Atrium's domain layer. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • state (App/Section)  │
//!                    │  • detail_pane (store)  │
//!                    │  • inbox / home (mocks) │
//!                    │  • config               │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`detail_pane`]: the shared open/close/content store behind the
//!   sliding detail panel — the one stateful component everything shares
//! - [`state`]: the `App` struct and the `Section` rail enum
//! - [`inbox`] / [`home`]: read-only mock datasets and the inbox filter
//! - [`config`]: TOML config with env/CLI overrides

pub mod config;
pub mod detail_pane;
pub mod home;
pub mod inbox;
pub mod state;
