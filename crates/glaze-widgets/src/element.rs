#![forbid(unsafe_code)]

//! Element capabilities and press routing.
//!
//! Instead of a virtual-override hierarchy, every element advertises a small
//! capability set, and containers route input by explicit composition: the
//! deepest element under the pointer wins the press, and a parent's drag
//! controller arms only when the press lands on the parent's own background.

use bitflags::bitflags;

bitflags! {
    /// What an element participates in each frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        /// Receives an update() call during the update pass.
        const UPDATE = 1 << 0;
        /// Issues draw calls during the draw pass.
        const DRAW = 1 << 1;
        /// Tracks pointer containment with a hover timer.
        const HOVER = 1 << 2;
        /// Arms a drag controller from background presses.
        const DRAG = 1 << 3;
    }
}

/// Where a press landed after hit-testing a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The container's own background.
    Background,
    /// A nested child; presses routed here never arm the container's drag.
    Child,
}

impl PressTarget {
    /// Whether this target may arm the containing panel's drag controller.
    ///
    /// Press routing gives the deepest eligible child priority; only the
    /// background itself arms dragging.
    #[must_use]
    pub fn arms_drag(&self) -> bool {
        matches!(self, PressTarget::Background)
    }
}
