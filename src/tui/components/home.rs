//! # Home Page Component
//!
//! The widget grid: Projects (selectable), Upcoming meetings, Emails, and
//! Artifacts. Only the project rows have behavior — Up/Down moves the
//! selection and Enter asks the shell to open the project in the detail pane.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HomeState` lives in `TuiState`
//! - `HomePage` is created each frame with borrowed state and data

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::home::{Artifact, Email, Meeting, Project};
use crate::tui::component::Component;
use crate::tui::components::accent_color;
use crate::tui::event::TuiEvent;

/// Persistent state for the home page: which project row is selected.
#[derive(Default)]
pub struct HomeState {
    pub selected: usize,
}

/// Events emitted by the home page.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    /// Show this project in the detail pane.
    OpenProject(Project),
}

impl HomeState {
    /// Handle a key event against the given project list.
    pub fn handle_event(&mut self, event: &TuiEvent, projects: &[Project]) -> Option<HomeEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                if !projects.is_empty() {
                    self.selected = (self.selected + 1).min(projects.len() - 1);
                }
                None
            }
            TuiEvent::Submit => projects
                .get(self.selected)
                .cloned()
                .map(HomeEvent::OpenProject),
            _ => None,
        }
    }
}

/// Transient render wrapper for the home widget grid.
pub struct HomePage<'a> {
    state: &'a mut HomeState,
    projects: &'a [Project],
    meetings: &'a [Meeting],
    emails: &'a [Email],
    artifacts: &'a [Artifact],
}

impl<'a> HomePage<'a> {
    pub fn new(
        state: &'a mut HomeState,
        projects: &'a [Project],
        meetings: &'a [Meeting],
        emails: &'a [Email],
        artifacts: &'a [Artifact],
    ) -> Self {
        Self {
            state,
            projects,
            meetings,
            emails,
            artifacts,
        }
    }

    fn render_projects(&self, frame: &mut Frame, area: Rect) {
        let block = card_block(" Projects ")
            .title_bottom(Line::from(" ↑↓ select  ⏎ open ").centered());

        let bar_width = 12usize;
        let lines: Vec<Line> = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let accent = accent_color(project.accent);
                let filled = project.progress.min(100) as usize * bar_width / 100;
                let bar: String = (0..bar_width)
                    .map(|j| if j < filled { '█' } else { '░' })
                    .collect();

                let row_style = if i == self.state.selected {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(accent)),
                    Span::styled(format!("{:<28}", project.name), row_style),
                    Span::styled(bar, Style::default().fg(accent)),
                    Span::styled(format!(" {:>3}%", project.progress), row_style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_meetings(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();

        for meeting in self.meetings.iter().filter(|m| m.featured) {
            lines.push(Line::from(Span::styled(
                meeting.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("⏱ {}", meeting.time),
                Style::default().fg(Color::DarkGray),
            )));
            let mut attendees = meeting.attendees.join(", ");
            if meeting.extra_attendees > 0 {
                attendees.push_str(&format!(" +{}", meeting.extra_attendees));
            }
            lines.push(Line::from(vec![
                Span::styled(attendees, Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled("[Join]", Style::default().fg(Color::Green)),
            ]));
            lines.push(Line::default());
        }

        for meeting in self.meetings.iter().filter(|m| !m.featured) {
            lines.push(Line::from(vec![
                Span::styled("▍", Style::default().fg(Color::Blue)),
                Span::raw(meeting.title),
            ]));
            lines.push(Line::from(Span::styled(
                format!(" {}", meeting.time),
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(card_block(" Upcoming meetings "))
                .wrap(ratatui::widgets::Wrap { trim: true }),
            area,
        );
    }

    fn render_emails(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .emails
            .iter()
            .map(|email| {
                let dot = if email.unread {
                    Span::styled("● ", Style::default().fg(Color::Blue))
                } else {
                    Span::raw("  ")
                };
                Line::from(vec![
                    dot,
                    Span::raw(email.subject),
                    Span::styled(
                        format!("  {}", email.from),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(card_block(" Emails ")), area);
    }

    fn render_artifacts(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .artifacts
            .iter()
            .map(|artifact| {
                Line::from(vec![
                    Span::styled(
                        format!("[{:<5}] ", artifact.kind.tag()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(artifact.name),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(card_block(" Artifacts ")), area);
    }
}

impl Component for HomePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Min, Percentage};

        // Keep the selection valid even if the dataset shrank
        if !self.projects.is_empty() {
            self.state.selected = self.state.selected.min(self.projects.len() - 1);
        }

        let [left, right] = Layout::horizontal([Percentage(62), Min(0)]).areas(area);
        let [projects_area, bottom] = Layout::vertical([Percentage(50), Min(0)]).areas(left);
        let [emails_area, artifacts_area] =
            Layout::horizontal([Percentage(50), Min(0)]).areas(bottom);

        self.render_projects(frame, projects_area);
        self.render_meetings(frame, right);
        self.render_emails(frame, emails_area);
        self.render_artifacts(frame, artifacts_area);
    }
}

fn card_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .padding(Padding::horizontal(1))
}
