//! # TUI Components
//!
//! All UI pieces for the terminal shell, one file per component.
//!
//! Two patterns, per the rest of the codebase:
//!
//! - **Stateless / transient**: created fresh each frame from props
//!   (`ToolRail`, `DetailPaneView`, `AgentsPage`).
//! - **Persistent state + transient wrapper**: an `*State` struct lives in
//!   `TuiState` across frames; a borrowing wrapper is built per frame for
//!   rendering (`HomeState`/`HomePage`, `InboxState`/`InboxPage`). The
//!   composer keeps its buffer internally and is rendered directly.
//!
//! Components receive external data as props and never reach into global
//! state; page components emit high-level events (`HomeEvent`,
//! `InboxEvent`, `ComposerEvent`) that the event loop turns into detail
//! pane store calls.

use ratatui::style::Color;

use crate::core::home::Accent;

pub mod agents;
pub mod composer;
pub mod detail_pane;
pub mod home;
pub mod inbox;
pub mod tool_rail;

pub use agents::AgentsPage;
pub use composer::{Composer, ComposerEvent};
pub use detail_pane::DetailPaneView;
pub use home::{HomeEvent, HomePage, HomeState};
pub use inbox::{InboxEvent, InboxPage, InboxState};
pub use tool_rail::{RAIL_WIDTH, ToolRail};

/// Map a core accent hue to a terminal color.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Violet => Color::Magenta,
        Accent::Blue => Color::Blue,
        Accent::Emerald => Color::Green,
    }
}
