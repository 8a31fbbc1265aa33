#![forbid(unsafe_code)]

//! Press-and-drag state machine.
//!
//! Two states, Idle and Dragging, encoded as the presence of a grab offset.
//! The offset is captured exactly once on the Idle→Dragging transition and
//! never mutated while dragging, so the dragged element's position is always
//! `pointer - grab`, independent of how many frames the drag lasts.
//!
//! Arming is the container's decision: it routes the press (deepest eligible
//! child first) and calls [`DragController::arm`] only when the press target
//! arms drag. Release is unconditional, wherever the pointer is.

use glaze_core::Vec2;

/// Idle/Dragging state with the grab offset captured at arm time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    /// `Some(pointer - element_top_left)` while dragging.
    grab: Option<Vec2>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition Idle→Dragging, capturing the grab offset.
    ///
    /// A second arm while already dragging is ignored; the original grab
    /// stays authoritative until release.
    pub fn arm(&mut self, pointer: Vec2, element_top_left: Vec2) {
        if self.grab.is_none() {
            self.grab = Some(pointer - element_top_left);
            tracing::debug!(?pointer, "drag armed");
        }
    }

    /// Transition to Idle unconditionally.
    pub fn release(&mut self) {
        if self.grab.take().is_some() {
            tracing::debug!("drag released");
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// New element top-left for the current pointer, or `None` when idle.
    #[must_use]
    pub fn track(&self, pointer: Vec2) -> Option<Vec2> {
        self.grab.map(|grab| pointer - grab)
    }
}
