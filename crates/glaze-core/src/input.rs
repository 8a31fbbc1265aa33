#![forbid(unsafe_code)]

//! Per-frame input snapshots.
//!
//! The host samples pointer position, button state, key state, and raw text
//! once per frame and turns them into an immutable [`FrameInput`] via
//! [`InputTracker::begin_frame`]. Every state machine observing that frame
//! reads the same snapshot, so a press/release edge can never be seen by one
//! consumer and missed by another within the same update+draw pass.
//!
//! Edges are transitions against the previous frame's sample, which the
//! tracker owns: `pressed()` is down-now and up-last-frame, `key_edge(k)` is
//! down-now and up-last-frame for `k`.

use bitflags::bitflags;

use crate::geometry::Vec2;

bitflags! {
    /// Keys the overlay core cares about (commit/cancel edges).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Keys: u8 {
        const ENTER = 1 << 0;
        const TAB = 1 << 1;
        const ESCAPE = 1 << 2;
    }
}

/// Immutable input sample for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    pointer: Vec2,
    left_down: bool,
    left_was_down: bool,
    keys: Keys,
    prev_keys: Keys,
    text: String,
}

impl FrameInput {
    /// Pointer position in screen coordinates.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the left button is currently held.
    #[must_use]
    pub fn left_down(&self) -> bool {
        self.left_down
    }

    /// Left button went down this frame.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.left_down && !self.left_was_down
    }

    /// Left button went up this frame.
    #[must_use]
    pub fn released(&self) -> bool {
        !self.left_down && self.left_was_down
    }

    /// Keys that went down this frame.
    #[must_use]
    pub fn key_edges(&self) -> Keys {
        self.keys & !self.prev_keys
    }

    /// Whether any key in `mask` went down this frame.
    #[must_use]
    pub fn key_edge(&self, mask: Keys) -> bool {
        self.key_edges().intersects(mask)
    }

    /// Raw text accumulated by the host since the previous frame
    /// (IME-composed or direct).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Previous frame's button and key sample.
#[derive(Debug, Clone, Copy)]
struct PrevSample {
    left_down: bool,
    keys: Keys,
}

/// Owns the previous frame's sample and freezes each new one.
///
/// A fresh tracker has no history: the first sample seeds it, so the first
/// frame never reports an edge. An element created mid-click does not
/// observe a phantom press, and an element created under a resting pointer
/// does not observe a phantom release.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    prev: Option<PrevSample>,
}

impl InputTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze this frame's raw sample into a [`FrameInput`] and remember it
    /// for next frame's edge tests. Call exactly once per frame, before any
    /// state-machine update.
    pub fn begin_frame(
        &mut self,
        pointer: Vec2,
        left_down: bool,
        keys: Keys,
        text: impl Into<String>,
    ) -> FrameInput {
        let prev = self.prev.unwrap_or(PrevSample { left_down, keys });
        let frame = FrameInput {
            pointer,
            left_down,
            left_was_down: prev.left_down,
            keys,
            prev_keys: prev.keys,
            text: text.into(),
        };
        self.prev = Some(PrevSample { left_down, keys });
        frame
    }
}
