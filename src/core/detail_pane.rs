//! # Detail Pane Store
//!
//! Single source of truth for the sliding detail panel: whether it is open
//! and what it currently shows. Pages write to it ("show details for X"),
//! the shell reads it to pick a layout posture and render the content slot.
//!
//! ```text
//! DetailPaneProvider (owner, session lifetime)
//!        │ handle()
//!        ▼
//! DetailPaneHandle ──► open / close / toggle / set_content
//! ```
//!
//! Contract notes:
//! - `close()` does NOT clear the content slot. Re-opening redisplays
//!   whatever was set last, or the default placeholder if nothing ever was.
//! - `set_content()` never touches the open flag.
//! - A handle whose provider has been dropped is outside its provisioning
//!   scope; every operation on it returns `DetailPaneError::NotProvisioned`.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::home::Project;
use crate::core::inbox::InboxItem;

/// What the detail pane can display. A closed set of renderable variants
/// rather than an opaque payload — the shell knows how to draw each one.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Project(Project),
    InboxItem(InboxItem),
    Note(String),
}

/// The store itself: one flag, one content slot.
#[derive(Debug, Default)]
pub struct DetailPane {
    is_open: bool,
    content: Option<DetailContent>,
}

impl DetailPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the pane. Idempotent; does not touch the content slot.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the pane. Idempotent; the content slot survives for the next open.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip the open flag.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replace the content slot unconditionally. Does not open the pane;
    /// callers that want "show details for X" call this and then `open()`.
    pub fn set_content(&mut self, content: DetailContent) {
        self.content = Some(content);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }
}

/// Errors from store access. The store's operations themselves are total;
/// the only failure is using a handle after its provider is gone.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailPaneError {
    /// The handle outlived its `DetailPaneProvider`.
    NotProvisioned,
}

impl fmt::Display for DetailPaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailPaneError::NotProvisioned => {
                write!(f, "detail pane accessed outside its provisioning scope")
            }
        }
    }
}

impl std::error::Error for DetailPaneError {}

/// Owns the store for the lifetime of the session. Created once at startup;
/// hands out weak handles to every consumer.
pub struct DetailPaneProvider {
    inner: Rc<RefCell<DetailPane>>,
}

impl DetailPaneProvider {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DetailPane::new())),
        }
    }

    /// A handle for consumers. Cheap to clone, fails loudly once the
    /// provider is dropped.
    pub fn handle(&self) -> DetailPaneHandle {
        DetailPaneHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Infallible read access for the owner (the render path).
    pub fn pane(&self) -> Ref<'_, DetailPane> {
        self.inner.borrow()
    }

    /// Infallible write access for the owner.
    pub fn pane_mut(&self) -> RefMut<'_, DetailPane> {
        self.inner.borrow_mut()
    }
}

impl Default for DetailPaneProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer-side accessor. All mutations are synchronous and single-threaded
/// (the TUI event loop), so shared `RefCell` access cannot conflict.
#[derive(Clone)]
pub struct DetailPaneHandle {
    inner: Weak<RefCell<DetailPane>>,
}

impl DetailPaneHandle {
    fn pane(&self) -> Result<Rc<RefCell<DetailPane>>, DetailPaneError> {
        self.inner.upgrade().ok_or(DetailPaneError::NotProvisioned)
    }

    pub fn open(&self) -> Result<(), DetailPaneError> {
        self.pane()?.borrow_mut().open();
        Ok(())
    }

    pub fn close(&self) -> Result<(), DetailPaneError> {
        self.pane()?.borrow_mut().close();
        Ok(())
    }

    pub fn toggle(&self) -> Result<(), DetailPaneError> {
        self.pane()?.borrow_mut().toggle();
        Ok(())
    }

    pub fn set_content(&self, content: DetailContent) -> Result<(), DetailPaneError> {
        self.pane()?.borrow_mut().set_content(content);
        Ok(())
    }

    pub fn is_open(&self) -> Result<bool, DetailPaneError> {
        Ok(self.pane()?.borrow().is_open())
    }

    /// Read the content slot without cloning it out.
    pub fn with_content<T>(
        &self,
        f: impl FnOnce(Option<&DetailContent>) -> T,
    ) -> Result<T, DetailPaneError> {
        let pane = self.pane()?;
        let borrowed = pane.borrow();
        Ok(f(borrowed.content()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> DetailContent {
        DetailContent::Note(s.to_string())
    }

    #[test]
    fn test_initial_state_closed_and_empty() {
        let pane = DetailPane::new();
        assert!(!pane.is_open());
        assert!(pane.content().is_none());
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut pane = DetailPane::new();
        pane.open();
        pane.open();
        assert!(pane.is_open());
        pane.close();
        pane.close();
        assert!(!pane.is_open());
    }

    #[test]
    fn test_toggle_negates_open_flag() {
        let mut pane = DetailPane::new();
        for _ in 0..5 {
            let before = pane.is_open();
            pane.toggle();
            assert_eq!(pane.is_open(), !before);
        }
    }

    #[test]
    fn test_close_preserves_content_until_replaced() {
        let mut pane = DetailPane::new();
        // set_content while closed, then open → content must appear
        pane.set_content(note("A"));
        assert!(!pane.is_open(), "set_content must not open the pane");
        pane.open();
        assert_eq!(pane.content(), Some(&note("A")));
        // close → open keeps the same content
        pane.close();
        pane.open();
        assert_eq!(pane.content(), Some(&note("A")));
        // replaced only by an explicit set_content
        pane.set_content(note("B"));
        assert_eq!(pane.content(), Some(&note("B")));
        assert!(pane.is_open(), "set_content must not close the pane either");
    }

    #[test]
    fn test_open_close_never_change_content() {
        let mut pane = DetailPane::new();
        pane.set_content(note("kept"));
        pane.open();
        assert_eq!(pane.content(), Some(&note("kept")));
        pane.close();
        assert_eq!(pane.content(), Some(&note("kept")));
        pane.toggle();
        assert_eq!(pane.content(), Some(&note("kept")));
    }

    #[test]
    fn test_scenario_from_contract() {
        // {false, None} → setContent("A") → {false, A} → open → {true, A}
        // → close → {false, A} → toggle → {true, A}
        let mut pane = DetailPane::new();
        assert!(!pane.is_open());
        assert!(pane.content().is_none());

        pane.set_content(note("A"));
        assert!(!pane.is_open());
        assert_eq!(pane.content(), Some(&note("A")));

        pane.open();
        assert!(pane.is_open());
        assert_eq!(pane.content(), Some(&note("A")));

        pane.close();
        assert!(!pane.is_open());
        assert_eq!(pane.content(), Some(&note("A")));

        pane.toggle();
        assert!(pane.is_open());
        assert_eq!(pane.content(), Some(&note("A")));
    }

    #[test]
    fn test_handle_operations_through_provider() {
        let provider = DetailPaneProvider::new();
        let handle = provider.handle();

        handle.set_content(note("via handle")).unwrap();
        handle.open().unwrap();
        assert_eq!(handle.is_open(), Ok(true));

        let seen = handle
            .with_content(|c| c.cloned())
            .unwrap()
            .expect("content was set");
        assert_eq!(seen, note("via handle"));

        // Owner sees the same store
        assert!(provider.pane().is_open());
    }

    #[test]
    fn test_dropped_provider_fails_every_access() {
        let provider = DetailPaneProvider::new();
        let handle = provider.handle();
        drop(provider);

        assert_eq!(handle.open(), Err(DetailPaneError::NotProvisioned));
        assert_eq!(handle.close(), Err(DetailPaneError::NotProvisioned));
        assert_eq!(handle.toggle(), Err(DetailPaneError::NotProvisioned));
        assert_eq!(
            handle.set_content(note("lost")),
            Err(DetailPaneError::NotProvisioned)
        );
        assert_eq!(handle.is_open(), Err(DetailPaneError::NotProvisioned));
        assert_eq!(
            handle.with_content(|_| ()),
            Err(DetailPaneError::NotProvisioned)
        );
        // And it stays that way — every time, not just the first
        assert_eq!(handle.open(), Err(DetailPaneError::NotProvisioned));
    }

    #[test]
    fn test_cloned_handles_share_the_store() {
        let provider = DetailPaneProvider::new();
        let a = provider.handle();
        let b = a.clone();

        a.open().unwrap();
        assert_eq!(b.is_open(), Ok(true));
        b.close().unwrap();
        assert_eq!(a.is_open(), Ok(false));
    }
}
