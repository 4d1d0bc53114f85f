//! Tab strip controller.
//!
//! Owns the read path that merges pinned and recent pages into the rendered
//! tab row, plus the transient pointer state: the drag session while a
//! pinned tab is being reordered, and the pending scroll intent the widget
//! applies after the next paint. Nothing in this module is persisted.
//!
//! # Drag protocol
//!
//! ```text
//! press on pinned tab        begin_drag(index)
//! pointer over pinned tab    drag_over(index)
//! release over pinned tab    release_over(index) -> Activate | Move
//! release anywhere else      cancel_drag()
//! ```
//!
//! A session becomes a drag once the pointer has hovered any index other
//! than the source; the mark is sticky, so a drag that returns to its
//! source still suppresses activation.

use crate::pinned::PinnedTabs;
use crate::recent::{PageEntry, RecentPages};

// ============================================================================
// Merged Tab Row
// ============================================================================

/// One tab of the merged display row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTab<'a> {
    /// The page the tab shows
    pub entry: &'a PageEntry,
    /// Whether the tab sits in the pinned region
    pub pinned: bool,
    /// Strip-wide display index
    pub index: usize,
}

/// Merge pinned and recent pages into display order.
///
/// Pinned tabs come first in their stored order, then recent entries whose
/// paths are not pinned, in their stored order. The two regions are
/// disjoint by path. The row is derived fresh on every call and never
/// cached, so it cannot drift from the lists it is built from.
pub fn visible_tabs<'a>(pinned: &'a PinnedTabs, recent: &'a RecentPages) -> Vec<VisibleTab<'a>> {
    let mut tabs = Vec::with_capacity(pinned.len() + recent.len());
    for entry in pinned.tabs() {
        tabs.push(VisibleTab {
            entry,
            pinned: true,
            index: tabs.len(),
        });
    }
    for entry in recent.entries() {
        if !pinned.is_pinned(&entry.path) {
            tabs.push(VisibleTab {
                entry,
                pinned: false,
                index: tabs.len(),
            });
        }
    }
    tabs
}

// ============================================================================
// Drag Session
// ============================================================================

/// Transient pointer state while a pinned tab is being reordered.
///
/// Held as `Option<DragSession>` by [`TabStrip`]: `None` between gestures,
/// reset on every release or cancel, never written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pinned-region index where the gesture started
    pub source: usize,
    /// Most recently hovered pinned-region index
    pub hover: Option<usize>,
    /// Whether any index other than the source has been hovered
    pub moved: bool,
}

/// What a pointer release over a tab means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabGesture {
    /// A clean click: the page should activate
    Activate,
    /// A drag: move the pinned tab at `from` to display position `to`
    Move { from: usize, to: usize },
}

/// Deferred scroll intent for the unpinned region.
///
/// Mutations record the intent; the widget takes it after the next paint
/// and applies it to the real offset, clamped to the rendered content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Adjust the scroll offset by a pixel delta
    By(f32),
    /// Jump to the end of the row
    ToEnd,
}

// ============================================================================
// Tab Strip Controller
// ============================================================================

/// Transient tab-strip state: the drag session plus the pending scroll
/// intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabStrip {
    drag: Option<DragSession>,
    pending_scroll: Option<ScrollCommand>,
}

impl TabStrip {
    /// No session, no pending scroll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a drag session on a pinned-region index.
    ///
    /// A press while another session is somehow still open replaces it.
    pub fn begin_drag(&mut self, source: usize) {
        self.drag = Some(DragSession {
            source,
            hover: None,
            moved: false,
        });
    }

    /// Record the pointer hovering a pinned-region index.
    ///
    /// No-op without an open session. Marks the session as a drag once an
    /// index other than the source is hovered (sticky).
    pub fn drag_over(&mut self, index: usize) {
        if let Some(drag) = &mut self.drag {
            drag.hover = Some(index);
            if index != drag.source {
                drag.moved = true;
            }
        }
    }

    /// Close the session on a release over a pinned-region index.
    ///
    /// An unmoved session, or no session at all, is a clean click and the
    /// page should activate. A moved session yields the move to apply; it
    /// never activates, even when it lands back on its source.
    pub fn release_over(&mut self, index: usize) -> TabGesture {
        match self.drag.take() {
            Some(drag) if drag.moved => TabGesture::Move {
                from: drag.source,
                to: index,
            },
            _ => TabGesture::Activate,
        }
    }

    /// Abandon the session: release outside any tab, escape, focus loss.
    /// Idempotent.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// The open drag session, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The pinned-region index currently hovered by an open session.
    /// Drives the drop-indicator styling.
    pub fn hover_index(&self) -> Option<usize> {
        self.drag.and_then(|d| d.hover)
    }

    /// Ask the unpinned region to scroll by a pixel delta after the next
    /// paint. Deltas accumulate; a pending jump is replaced.
    pub fn request_scroll_by(&mut self, delta: f32) {
        self.pending_scroll = match self.pending_scroll {
            Some(ScrollCommand::By(prev)) => Some(ScrollCommand::By(prev + delta)),
            _ => Some(ScrollCommand::By(delta)),
        };
    }

    /// Ask the unpinned region to jump to its end after the next paint.
    /// Requested whenever a visit appends a tab, so the new tab is visible.
    pub fn request_scroll_to_end(&mut self) {
        self.pending_scroll = Some(ScrollCommand::ToEnd);
    }

    /// Take the pending scroll intent, leaving none.
    pub fn take_scroll_command(&mut self) -> Option<ScrollCommand> {
        self.pending_scroll.take()
    }

    /// Peek at the pending scroll intent without consuming it.
    pub fn pending_scroll(&self) -> Option<ScrollCommand> {
        self.pending_scroll
    }
}

// ============================================================================
// Tests
// ============================================================================
