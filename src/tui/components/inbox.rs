//! # Inbox Page Component
//!
//! Search row, time-filter pills, the item list, and the key-hint footer.
//! Typed characters edit the search query; the visible list is the filtered
//! view and re-computed by the shell each event. Enter asks the shell to
//! open the selected item in the detail pane.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `InboxState` lives in `TuiState`
//! - `InboxPage` is created each frame with borrowed state and the
//!   already-filtered rows

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::inbox::{InboxItem, Priority, TimeFilter};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent state for the inbox page.
#[derive(Default)]
pub struct InboxState {
    /// Search query, edited by typed characters.
    pub query: String,
    /// Index into the *filtered* list.
    pub selected: usize,
    pub time_filter: TimeFilter,
    pub list_state: ListState,
}

/// Events emitted by the inbox page.
#[derive(Debug, Clone, PartialEq)]
pub enum InboxEvent {
    /// Show this item in the detail pane.
    Open(InboxItem),
}

impl InboxState {
    /// Handle a key event against the currently filtered rows.
    pub fn handle_event(&mut self, event: &TuiEvent, filtered: &[&InboxItem]) -> Option<InboxEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                self.selected = 0;
                None
            }
            TuiEvent::Paste(text) => {
                self.query.push_str(text);
                self.selected = 0;
                None
            }
            TuiEvent::Backspace => {
                self.query.pop();
                self.selected = 0;
                None
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                if !filtered.is_empty() {
                    self.selected = (self.selected + 1).min(filtered.len() - 1);
                }
                None
            }
            TuiEvent::CycleTimeFilter => {
                self.time_filter = self.time_filter.next();
                None
            }
            TuiEvent::Submit => filtered
                .get(self.selected)
                .map(|item| InboxEvent::Open((*item).clone())),
            _ => None,
        }
    }

    /// Clear the search query (the Esc affordance when the pane is closed).
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.selected = 0;
    }
}

/// Transient render wrapper for the inbox page.
pub struct InboxPage<'a> {
    state: &'a mut InboxState,
    /// Rows that survived the current query, in dataset order.
    filtered: &'a [&'a InboxItem],
}

impl<'a> InboxPage<'a> {
    pub fn new(state: &'a mut InboxState, filtered: &'a [&'a InboxItem]) -> Self {
        Self { state, filtered }
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let content = if self.state.query.is_empty() {
            Span::styled("Search...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.state.query.as_str())
        };
        let search = Paragraph::new(Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(Color::DarkGray)),
            content,
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(search, area);

        // Cursor at the end of the query
        let cursor_x = area.x + 2 + self.state.query.width() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
    }

    fn render_pills(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for filter in TimeFilter::ALL {
            let style = if filter == self.state.time_filter {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "(Ctrl+F)",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        if self.filtered.is_empty() {
            let empty = Paragraph::new("No items found")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .filtered
            .iter()
            .map(|item| {
                let glyph_style = Style::default().fg(priority_color(item.priority));
                let mut title_line = vec![
                    Span::styled(format!("{} ", item.kind.glyph()), glyph_style),
                    Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", item.received_at),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if item.priority == Priority::High {
                    title_line.push(Span::styled(
                        "  high",
                        Style::default().fg(Color::Red),
                    ));
                }
                let preview = truncate_str(item.preview, width.saturating_sub(4));
                ListItem::new(vec![
                    Line::from(title_line),
                    Line::from(Span::styled(
                        format!("  {preview}"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        self.state.list_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(Span::styled(
            "↑↓ Navigate   ⏎ Select   Esc Clear search",
            Style::default().fg(Color::DarkGray),
        )))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(footer, area);
    }
}

impl Component for InboxPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        // Clamp selection to the filtered view
        if !self.filtered.is_empty() {
            self.state.selected = self.state.selected.min(self.filtered.len() - 1);
        }

        let title = format!(" Inbox ({}) ", self.filtered.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_area, pills_area, list_area, footer_area] =
            Layout::vertical([Length(2), Length(1), Min(0), Length(2)]).areas(inner);

        self.render_pills(frame, pills_area);
        self.render_list(frame, list_area);
        self.render_footer(frame, footer_area);
        // Search last: it positions the terminal cursor
        self.render_search(frame, search_area);
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Normal => Color::Gray,
        Priority::High => Color::Red,
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let cut: String = s.chars().take(max_width - 3).collect();
        format!("{cut}...")
    }
}
