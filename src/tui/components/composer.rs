//! # Chat Composer Component
//!
//! The "Ask anything..." input pinned under the home page. Text entry and a
//! submit event — nothing more. The auto-growing box is clamped to two
//! visible lines, matching the original composer's clamp, and scrolls the
//! oldest lines out beyond that.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows taken by the top and bottom border.
const VERTICAL_OVERHEAD: u16 = 2;
/// Columns taken by the borders (1 left + 1 right).
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Content rows visible at once before old lines scroll out.
const MAX_VISIBLE_LINES: u16 = 2;

const DEFAULT_PLACEHOLDER: &str = "Ask anything...";

/// High-level events emitted by the composer.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// User submitted non-blank text (already trimmed).
    Submit(String),
    /// Buffer changed; parent may want to redraw.
    ContentChanged,
}

pub struct Composer {
    /// Text being typed (internal state).
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
    placeholder: &'static str,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Rows this component wants for the given width, borders included.
    pub fn required_height(&self, width: u16) -> u16 {
        let lines = self.wrapped_lines(width).len() as u16;
        lines.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn inner_width(width: u16) -> usize {
        width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize
    }

    fn wrapped_lines(&self, width: u16) -> Vec<String> {
        if self.buffer.is_empty() {
            return vec![String::new()];
        }
        textwrap::wrap(&self.buffer, Self::inner_width(width))
            .into_iter()
            .map(|cow| cow.into_owned())
            .collect()
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut prev = pos;
        while prev > 0 {
            prev -= 1;
            if self.buffer.is_char_boundary(prev) {
                break;
            }
        }
        prev
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut next = pos;
        while next < self.buffer.len() {
            next += 1;
            if self.buffer.is_char_boundary(next) {
                break;
            }
        }
        next
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Composer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.wrapped_lines(area.width);
        let visible = MAX_VISIBLE_LINES as usize;
        let skipped = lines.len().saturating_sub(visible);
        let visible_text = lines[skipped..].join("\n");

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Composer ");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
        } else {
            Paragraph::new(visible_text).block(block)
        };
        frame.render_widget(paragraph, area);

        // Cursor sits at the end of the last visible line
        let last_line = lines.last().map(String::as_str).unwrap_or("");
        let cursor_x = area.x + 1 + last_line.width() as u16;
        let cursor_y = area.y + 1 + (lines.len().min(visible) as u16).saturating_sub(1);
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), cursor_y));
    }
}

impl EventHandler for Composer {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(ComposerEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(ComposerEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary(self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary(self.cursor);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary(self.cursor);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Submit => {
                let trimmed = self.buffer.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    let text = trimmed.to_string();
                    self.buffer.clear();
                    self.cursor = 0;
                    Some(ComposerEvent::Submit(text))
                }
            }
            _ => None,
        }
    }
}
