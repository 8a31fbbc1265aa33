#![forbid(unsafe_code)]

//! Hover tracking on top of the animation timer.
//!
//! A [`HoverTracker`] samples pointer containment once per frame and drives
//! its timer on the enter/leave edges only: entering calls `open()` (no
//! reset, so rapid in/out resumes from the current progress instead of
//! snapping), leaving calls `close()`. Holding the pointer inside for N
//! frames is indistinguishable from a single enter followed by no-ops.

use glaze_core::{AnimationTimer, FrameInput, Rect};

use crate::collab::{AudioCue, Cue};

/// Edge-triggered hover state with interpolation progress.
#[derive(Debug)]
pub struct HoverTracker {
    timer: AnimationTimer,
    inside: bool,
    /// Cue fired once per enter edge; `None` for silent hover.
    enter_cue: Option<Cue>,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverTracker {
    /// Tracker with the default eased timer and the menu tick on enter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timer: AnimationTimer::default(),
            inside: false,
            enter_cue: Some(Cue::MenuTick),
        }
    }

    /// Use a custom timer (builder).
    #[must_use]
    pub fn with_timer(mut self, timer: AnimationTimer) -> Self {
        self.timer = timer;
        self
    }

    /// Set or silence the enter cue (builder).
    #[must_use]
    pub fn with_enter_cue(mut self, cue: Option<Cue>) -> Self {
        self.enter_cue = cue;
        self
    }

    /// Sample containment for this frame and advance the timer.
    ///
    /// Call exactly once per frame during the update pass.
    pub fn update(&mut self, bounds: Rect, input: &FrameInput, audio: &mut dyn AudioCue) {
        let inside = bounds.contains(input.pointer());
        if inside && !self.inside {
            self.timer.open();
            if let Some(cue) = self.enter_cue {
                audio.play(cue);
            }
        } else if !inside && self.inside {
            self.timer.close();
        }
        self.inside = inside;
        self.timer.update();
    }

    /// Whether the pointer was inside bounds at the last sample.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Normalized hover progress in `[0, 1]` for color/geometry blending.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// The underlying timer, for state branching in draw code.
    #[must_use]
    pub fn timer(&self) -> &AnimationTimer {
        &self.timer
    }
}
