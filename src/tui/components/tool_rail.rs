//! # Tool Rail Component
//!
//! The fixed vertical navigation strip on the left edge: one entry per
//! top-level section, with a marker next to the active one. Stateless —
//! the active section is a prop from `App`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::Section;
use crate::tui::component::Component;

/// Columns the rail occupies, borders included.
pub const RAIL_WIDTH: u16 = 12;

pub struct ToolRail {
    /// Currently active section (prop).
    pub active: Section,
}

impl ToolRail {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    fn entry(&self, section: Section) -> Line<'static> {
        let is_active = section == self.active;
        let marker = if is_active { "▎" } else { " " };
        let style = if is_active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::White)),
            Span::styled(section.label(), style),
        ])
    }
}

impl Component for ToolRail {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Center the entry stack vertically, one row per section
        let [entries_area] = Layout::vertical([Constraint::Length(Section::ALL.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);

        let lines: Vec<Line> = Section::ALL.iter().map(|s| self.entry(*s)).collect();
        let rail = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(rail, entries_area);
    }
}
