//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell,
//! and translates keyboard events into store calls and page actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only draws when something changed: it sleeps up to 250ms
//! in `poll`, flags a redraw on any event or background ping result, and
//! drains all pending events before the next draw.
//!
//! ## Event Routing
//!
//! Global keys (quit, section cycling, detail toggle, ping) are handled
//! first; everything else goes to the active page. Pages emit high-level
//! events (`HomeEvent::OpenProject`, `InboxEvent::Open`, ...) and the loop
//! turns those into detail pane store calls — `set_content` then `open`,
//! the "show details for X" contract.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::probe::{ProbeError, StatusProbe};
use crate::api::types::HealthAck;
use crate::core::config::ResolvedConfig;
use crate::core::detail_pane::DetailContent;
use crate::core::inbox::filter_items;
use crate::core::state::{App, Section};
use crate::tui::component::EventHandler;
use crate::tui::components::{Composer, ComposerEvent, HomeEvent, HomeState, InboxEvent, InboxState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Outcome of a background ping task.
type PingOutcome = Result<HealthAck, ProbeError>;

/// TUI-specific presentation state (not part of core business logic).
/// Each page owns its local UI state here; none of it leaks into the store.
pub struct TuiState {
    pub home: HomeState,
    pub inbox: InboxState,
    pub composer: Composer,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home: HomeState::default(),
            inbox: InboxState::default(),
            composer: Composer::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search/composer fields
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig, probe: Arc<dyn StatusProbe>) -> std::io::Result<()> {
    let mut app = App::new(probe, config.start_section);
    let mut tui = TuiState::new();
    let detail = app.detail.handle();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for ping results from background tasks
    let (tx, rx) = mpsc::channel();

    if config.ping_on_start {
        spawn_ping(app.probe.clone(), tx.clone());
        app.ping_in_flight = true;
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Section cycling
            if matches!(event, TuiEvent::NextSection | TuiEvent::PrevSection) {
                app.active_section = if event == TuiEvent::NextSection {
                    app.active_section.next()
                } else {
                    app.active_section.prev()
                };
                info!("Switched to section: {}", app.active_section.label());
                continue;
            }

            // Ctrl+D toggles the detail pane without touching its content
            if matches!(event, TuiEvent::ToggleDetail) {
                if let Err(e) = detail.toggle() {
                    warn!("Detail pane unavailable: {}", e);
                }
                continue;
            }

            // Ctrl+P pings the health endpoint
            if matches!(event, TuiEvent::Ping) {
                if app.ping_in_flight {
                    debug!("Ping already in flight, ignoring");
                } else {
                    spawn_ping(app.probe.clone(), tx.clone());
                    app.ping_in_flight = true;
                    app.status_message = String::from("Pinging backend...");
                }
                continue;
            }

            // Esc: close the pane if it's open; otherwise it's the inbox's
            // clear-search affordance
            if matches!(event, TuiEvent::Escape) {
                let open = detail.is_open().unwrap_or_else(|e| {
                    warn!("Detail pane unavailable: {}", e);
                    false
                });
                if open {
                    if let Err(e) = detail.close() {
                        warn!("Detail pane unavailable: {}", e);
                    }
                } else if app.active_section == Section::Inbox && !tui.inbox.query.is_empty() {
                    tui.inbox.clear_query();
                }
                continue;
            }

            // Everything else goes to the active page
            match app.active_section {
                Section::Home => handle_home_event(&event, &mut app, &mut tui, &detail),
                Section::Inbox => handle_inbox_event(&event, &mut app, &mut tui, &detail),
                Section::Agents => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background ping results
        while let Ok(outcome) = rx.try_recv() {
            needs_redraw = true;
            app.ping_in_flight = false;
            match outcome {
                Ok(ack) => {
                    debug!("Ping acknowledged: {} @ {}", ack.message, ack.timestamp);
                    app.status_message = format!("Backend answered: {}", ack.message);
                    app.last_ack = Some(ack);
                }
                Err(e) => {
                    warn!("Ping failed: {}", e);
                    app.status_message = format!("Ping failed: {}", e);
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Home page routing: editing keys feed the composer, selection keys feed
/// the project list. Enter goes to the composer only when it has text, so
/// an empty composer leaves Enter free to open the selected project.
fn handle_home_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    detail: &crate::core::detail_pane::DetailPaneHandle,
) {
    let composer_has_text = !tui.composer.buffer.trim().is_empty();

    let home_event = match event {
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::ScrollUp
        | TuiEvent::ScrollDown => tui.home.handle_event(event, &app.projects),
        TuiEvent::Submit if !composer_has_text => tui.home.handle_event(event, &app.projects),
        other => {
            if let Some(composer_event) = tui.composer.handle_event(other) {
                match composer_event {
                    ComposerEvent::Submit(text) => {
                        // No backend to send to — acknowledge in the status
                        // line and show the captured text in the detail pane
                        info!("Composer submitted: {}", text);
                        app.status_message = format!("Captured: {}", text);
                        if let Err(e) = detail
                            .set_content(DetailContent::Note(text))
                            .and_then(|_| detail.open())
                        {
                            warn!("Detail pane unavailable: {}", e);
                        }
                    }
                    ComposerEvent::ContentChanged => {}
                }
            }
            None
        }
    };

    if let Some(HomeEvent::OpenProject(project)) = home_event {
        app.status_message = format!("Viewing {}", project.name);
        if let Err(e) = detail
            .set_content(DetailContent::Project(project))
            .and_then(|_| detail.open())
        {
            warn!("Detail pane unavailable: {}", e);
        }
    }
}

/// Inbox routing: the page edits its own query and selection against the
/// filtered view; an `Open` event pushes the item into the detail pane.
fn handle_inbox_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    detail: &crate::core::detail_pane::DetailPaneHandle,
) {
    let inbox_event = {
        let filtered = filter_items(&app.inbox_items, &tui.inbox.query);
        tui.inbox.handle_event(event, &filtered)
    };

    if let Some(InboxEvent::Open(item)) = inbox_event {
        app.status_message = format!("Viewing {}", item.title);
        if let Err(e) = detail
            .set_content(DetailContent::InboxItem(item))
            .and_then(|_| detail.open())
        {
            warn!("Detail pane unavailable: {}", e);
        }
    }
}

fn spawn_ping(probe: Arc<dyn StatusProbe>, tx: mpsc::Sender<PingOutcome>) {
    info!("Spawning health ping via '{}' probe", probe.name());
    tokio::spawn(async move {
        let outcome = probe.ping().await;
        if tx.send(outcome).is_err() {
            warn!("Failed to send ping outcome: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_open_project_sets_content_then_opens() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let detail = app.detail.handle();

        // Select the second project and open it
        handle_home_event(&TuiEvent::CursorDown, &mut app, &mut tui, &detail);
        handle_home_event(&TuiEvent::Submit, &mut app, &mut tui, &detail);

        let pane = app.detail.pane();
        assert!(pane.is_open());
        match pane.content() {
            Some(DetailContent::Project(p)) => assert_eq!(p.name, "Mobile App v2"),
            other => panic!("expected project content, got {:?}", other),
        }
    }

    #[test]
    fn test_composer_text_shadows_project_submit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let detail = app.detail.handle();

        handle_home_event(&TuiEvent::InputChar('h'), &mut app, &mut tui, &detail);
        handle_home_event(&TuiEvent::InputChar('i'), &mut app, &mut tui, &detail);
        handle_home_event(&TuiEvent::Submit, &mut app, &mut tui, &detail);

        // The submit went to the composer, not the project list: the pane
        // shows the captured note rather than a project
        assert_eq!(app.status_message, "Captured: hi");
        assert!(tui.composer.buffer.is_empty());
        let pane = app.detail.pane();
        assert!(pane.is_open());
        assert_eq!(pane.content(), Some(&DetailContent::Note("hi".to_string())));
    }

    #[test]
    fn test_inbox_open_pushes_item_into_pane() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let detail = app.detail.handle();

        for c in "urgent".chars() {
            handle_inbox_event(&TuiEvent::InputChar(c), &mut app, &mut tui, &detail);
        }
        handle_inbox_event(&TuiEvent::Submit, &mut app, &mut tui, &detail);

        let pane = app.detail.pane();
        assert!(pane.is_open());
        match pane.content() {
            Some(DetailContent::InboxItem(item)) => assert_eq!(item.id, "1"),
            other => panic!("expected inbox content, got {:?}", other),
        }
    }

    #[test]
    fn test_reopen_after_close_restores_content() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let detail = app.detail.handle();

        handle_home_event(&TuiEvent::Submit, &mut app, &mut tui, &detail);
        detail.close().unwrap();
        detail.open().unwrap();

        let pane = app.detail.pane();
        match pane.content() {
            Some(DetailContent::Project(p)) => assert_eq!(p.name, "Website Redesign"),
            other => panic!("expected project content, got {:?}", other),
        }
    }
}
