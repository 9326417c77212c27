use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI piece that draws itself into a given area.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal presentation
/// state (list offsets, cached widths) during the render pass, matching
/// Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events and may emit a high-level one
/// for the shell to act on (open a detail, submit a message, ...).
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
