//! Top-level frame layout: tool rail on the left, the active page in the
//! content region, the detail pane when the store says it is open, and a
//! one-line status bar at the bottom.
//!
//! The content region has exactly two postures, chosen from the store's
//! open flag: a single centered main pane, or an even main/detail split.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::inbox::filter_items;
use crate::core::state::{App, Section};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AgentsPage, DetailPaneView, HomePage, InboxPage, RAIL_WIDTH, ToolRail,
};

/// Width of the main pane (percent of the content region) when the detail
/// pane is closed and the main pane sits centered.
const CENTERED_MAIN_PERCENT: u16 = 62;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let [body_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
    let [rail_area, content_area] =
        Layout::horizontal([Length(RAIL_WIDTH), Min(0)]).areas(body_area);

    ToolRail::new(app.active_section).render(frame, rail_area);

    // Posture: centered single pane, or split main + detail
    let pane = app.detail.pane();
    if pane.is_open() {
        let [main_area, detail_area] =
            Layout::horizontal([Percentage(50), Min(0)]).areas(content_area);
        draw_page(frame, main_area, app, tui);
        DetailPaneView::new(pane.content()).render(frame, detail_area);
    } else {
        let [main_area] = Layout::horizontal([Percentage(CENTERED_MAIN_PERCENT)])
            .flex(Flex::Center)
            .areas(content_area);
        draw_page(frame, main_area, app, tui);
    }
    drop(pane);

    draw_status_line(frame, status_area, app);
}

fn draw_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    match app.active_section {
        Section::Home => {
            // Composer pinned under the widget grid, home page only
            let composer_height = tui.composer.required_height(area.width);
            let [grid_area, composer_area] =
                Layout::vertical([Min(0), Length(composer_height)]).areas(area);

            HomePage::new(
                &mut tui.home,
                &app.projects,
                &app.meetings,
                &app.emails,
                &app.artifacts,
            )
            .render(frame, grid_area);
            tui.composer.render(frame, composer_area);
        }
        Section::Inbox => {
            let filtered = filter_items(&app.inbox_items, &tui.inbox.query);
            InboxPage::new(&mut tui.inbox, &filtered).render(frame, area);
        }
        Section::Agents => AgentsPage.render(frame, area),
    }
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let health = if app.ping_in_flight {
        "api: pinging...".to_string()
    } else {
        match &app.last_ack {
            Some(ack) => format!(
                "api: {} @ {}",
                ack.message,
                ack.timestamp.format("%H:%M:%S")
            ),
            None => "api: -".to_string(),
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.active_section.label()),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(" "),
        Span::raw(app.status_message.as_str()),
        Span::styled(
            format!("  |  {health}  |  Tab Sections  Ctrl+P Ping  Ctrl+C Quit"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::api::types::HealthAck;
    use crate::core::detail_pane::DetailContent;
    use crate::test_support::test_app;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_closed_posture() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        // Rail + home grid + composer + status, but no detail pane
        assert!(text.contains("Home"));
        assert!(text.contains("Projects"));
        assert!(text.contains("Ask anything..."));
        assert!(!text.contains("Details"));
        assert!(text.contains("api: -"));
    }

    #[test]
    fn test_draw_open_posture_shows_placeholder() {
        let app = test_app();
        app.detail.pane_mut().open();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Details"));
        assert!(text.contains("contextual information"));
    }

    #[test]
    fn test_draw_open_posture_with_content() {
        let app = test_app();
        {
            let mut pane = app.detail.pane_mut();
            pane.set_content(DetailContent::Project(app.projects[2].clone()));
            pane.open();
        }
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("API Integration"));
        assert!(text.contains("90% complete"));
    }

    #[test]
    fn test_draw_inbox_section() {
        let mut app = test_app();
        app.active_section = Section::Inbox;
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Inbox (5)"));
        assert!(!text.contains("Ask anything..."), "composer is home-only");
    }

    #[test]
    fn test_status_line_shows_last_ack() {
        let mut app = test_app();
        app.last_ack = Some(HealthAck {
            message: "pong".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 29, 9, 30, 0).unwrap(),
        });
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("api: pong @ 09:30:00"));
    }
}
