//! # Application State
//!
//! Core state for Atrium. This module contains domain state only —
//! no TUI-specific types. Page-local presentation state (search text,
//! cursor rows, composer buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── active_section: Section           // which page the rail points at
//! ├── status_message: String            // status line text
//! ├── detail: DetailPaneProvider        // the shared detail pane store
//! ├── probe: Arc<dyn StatusProbe>       // health-check stub
//! ├── last_ack: Option<HealthAck>       // most recent ping acknowledgement
//! ├── ping_in_flight: bool              // a ping task is running
//! └── inbox_items / projects / ...      // session-lifetime mock datasets
//! ```

use std::sync::Arc;

use crate::api::probe::StatusProbe;
use crate::api::types::HealthAck;
use crate::core::detail_pane::DetailPaneProvider;
use crate::core::home::{self, Artifact, Email, Meeting, Project};
use crate::core::inbox::{self, InboxItem};

/// Top-level sections listed on the tool rail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Inbox,
    Agents,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Inbox, Section::Agents];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Inbox => "Inbox",
            Section::Agents => "Agents",
        }
    }

    /// Parse a config/CLI name. Case-insensitive, `None` for unknown names.
    pub fn parse(name: &str) -> Option<Section> {
        match name.trim().to_lowercase().as_str() {
            "home" => Some(Section::Home),
            "inbox" => Some(Section::Inbox),
            "agents" => Some(Section::Agents),
            _ => None,
        }
    }

    pub fn next(&self) -> Section {
        match self {
            Section::Home => Section::Inbox,
            Section::Inbox => Section::Agents,
            Section::Agents => Section::Home,
        }
    }

    pub fn prev(&self) -> Section {
        match self {
            Section::Home => Section::Agents,
            Section::Inbox => Section::Home,
            Section::Agents => Section::Inbox,
        }
    }
}

pub struct App {
    pub active_section: Section,
    pub status_message: String,
    pub detail: DetailPaneProvider,
    pub probe: Arc<dyn StatusProbe>,
    pub last_ack: Option<HealthAck>,
    pub ping_in_flight: bool,
    pub inbox_items: Vec<InboxItem>,
    pub projects: Vec<Project>,
    pub meetings: Vec<Meeting>,
    pub emails: Vec<Email>,
    pub artifacts: Vec<Artifact>,
}

impl App {
    pub fn new(probe: Arc<dyn StatusProbe>, start_section: Section) -> Self {
        Self {
            active_section: start_section,
            status_message: String::from("Welcome to Atrium"),
            detail: DetailPaneProvider::new(),
            probe,
            last_ack: None,
            ping_in_flight: false,
            inbox_items: inbox::mock_items(),
            projects: home::mock_projects(),
            meetings: home::mock_meetings(),
            emails: home::mock_emails(),
            artifacts: home::mock_artifacts(),
        }
    }
}
