//! # Detail Pane Component
//!
//! Renders the right-hand detail region from the store's content slot.
//! Knows how to draw each `DetailContent` variant, and falls back to the
//! static placeholder when nothing was ever set.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::detail_pane::DetailContent;
use crate::core::home::Project;
use crate::core::inbox::{InboxItem, Priority};
use crate::tui::component::Component;
use crate::tui::components::accent_color;

const PLACEHOLDER: &str = "This panel shows contextual information. When you select a \
document, its metadata appears here. When you view a teammate, their activity shows. \
The right column adapts to the left.";

/// Transient render wrapper: created each frame with the current slot value.
pub struct DetailPaneView<'a> {
    content: Option<&'a DetailContent>,
}

impl<'a> DetailPaneView<'a> {
    pub fn new(content: Option<&'a DetailContent>) -> Self {
        Self { content }
    }

    fn placeholder_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Details",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))),
        ]
    }

    fn note_lines(text: &str) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Captured",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(text.to_string()),
            Line::default(),
            Line::from(Span::styled(
                "There is no backend to send this to yet; it is kept here for reference.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    fn project_lines(project: &Project) -> Vec<Line<'static>> {
        let bar = progress_bar(project.progress, 24);
        vec![
            Line::from(Span::styled(
                project.name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This is placeholder content for the project detail pane.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(vec![
                Span::raw("Status: "),
                Span::styled(bar, Style::default().fg(accent_color(project.accent))),
                Span::raw(format!(" {}% complete", project.progress)),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Next steps: review scope, confirm stakeholders, and draft a short \
execution plan. This section will eventually include project artifacts, recent \
activity, and assigned work.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    fn inbox_lines(item: &InboxItem) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Header: glyph + title, sender line, tag chips
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", item.kind.glyph()),
                Style::default().fg(priority_color(item.priority)),
            ),
            Span::styled(item.title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("From {} • {}", item.from, item.received_at),
            Style::default().fg(Color::DarkGray),
        )));

        let mut chips: Vec<Span> = Vec::new();
        for tag in &item.tags {
            chips.push(Span::styled(
                format!("[{tag}] "),
                Style::default().fg(Color::Cyan),
            ));
        }
        if item.priority == Priority::High {
            chips.push(Span::styled(
                "[high]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(chips));
        lines.push(Line::default());

        // Summary
        lines.push(section_heading("Summary"));
        lines.push(Line::from(Span::styled(
            item.detail.summary.to_string(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());

        // What you need to do
        lines.push(section_heading("What you need to do"));
        for task in &item.detail.action_items {
            lines.push(Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::DarkGray)),
                Span::raw(task.to_string()),
            ]));
        }
        lines.push(Line::default());

        // Suggested actions (disabled buttons in the original; chips here)
        lines.push(section_heading("Suggested actions"));
        let actions: Vec<Span> = item
            .detail
            .suggested_actions
            .iter()
            .map(|a| Span::styled(format!("［{a}］ "), Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(actions));

        // Context links
        if !item.detail.context_links.is_empty() {
            lines.push(Line::default());
            lines.push(section_heading("Context"));
            for link in &item.detail.context_links {
                lines.push(Line::from(vec![
                    Span::styled(" ↗ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(link.label.to_string()),
                    Span::styled(
                        format!("  ({})", link.kind),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }

        lines
    }
}

impl Component for DetailPaneView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close  Ctrl+D Toggle ").centered())
            .padding(Padding::horizontal(1));

        let lines = match self.content {
            None => Self::placeholder_lines(),
            Some(DetailContent::Project(project)) => Self::project_lines(project),
            Some(DetailContent::InboxItem(item)) => Self::inbox_lines(item),
            Some(DetailContent::Note(text)) => Self::note_lines(text),
        };

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn section_heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Normal => Color::Gray,
        Priority::High => Color::Red,
    }
}

/// Fixed-width unicode bar, filled proportionally to `percent`.
fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::home::mock_projects;
    use crate::core::inbox::mock_items;

    fn render_to_text(content: Option<&DetailContent>) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = DetailPaneView::new(content);
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_slot_renders_placeholder() {
        let text = render_to_text(None);
        assert!(text.contains("Details"));
        assert!(text.contains("contextual information"));
    }

    #[test]
    fn test_project_content() {
        let project = mock_projects().remove(0);
        let content = DetailContent::Project(project);
        let text = render_to_text(Some(&content));
        assert!(text.contains("Website Redesign"));
        assert!(text.contains("75% complete"));
    }

    #[test]
    fn test_inbox_item_content_sections() {
        let item = mock_items().remove(0);
        let content = DetailContent::InboxItem(item);
        let text = render_to_text(Some(&content));
        assert!(text.contains("Review Q4 Planning Document"));
        assert!(text.contains("From Sarah K."));
        assert!(text.contains("Summary"));
        assert!(text.contains("What you need to do"));
        assert!(text.contains("Suggested actions"));
        assert!(text.contains("Context"));
        assert!(text.contains("[high]"));
    }

    #[test]
    fn test_note_content() {
        let content = DetailContent::Note("ship the Q4 summary".to_string());
        let text = render_to_text(Some(&content));
        assert!(text.contains("Captured"));
        assert!(text.contains("ship the Q4 summary"));
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(100, 4), "████");
        // Clamped above 100
        assert_eq!(progress_bar(250, 4), "████");
    }
}
