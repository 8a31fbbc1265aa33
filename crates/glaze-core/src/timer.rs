#![forbid(unsafe_code)]

//! Frame-driven animation timer.
//!
//! [`AnimationTimer`] is a bounded counter advanced once per frame by its
//! owner. It drives every open/close/hover transition in the overlay: the
//! owner calls [`AnimationTimer::update`] during the update pass and reads
//! [`AnimationTimer::progress`] during the draw pass to interpolate colors,
//! positions, and sizes.
//!
//! Two advancement laws exist. `Linear` adds/subtracts a fixed step.
//! `Eased` moves by a fraction of the remaining distance plus one
//! (`(max + 1 - timer) / speed` while opening), which is self-damping: the
//! step shrinks near the bound, but the `+ 1` term keeps the step bounded
//! away from zero so the timer always settles in finitely many frames.
//!
//! # Invariants
//!
//! 1. `0 <= timer <= max` after every `update()`.
//! 2. `state` alone determines the direction of motion; `Idle`, `Opened`,
//!    and `Closed` updates are no-ops.
//! 3. `on_opened` / `on_closed` fire exactly once per transition into
//!    `Opened` / `Closed`, never again while the timer stays settled.
//! 4. Reversal (`close()` while opening, or vice versa) resumes from the
//!    current counter value; it never snaps to a bound first.
//!
//! # Failure Modes
//!
//! - `speed <= 1` or `max < 1` at construction: clamped to 1.0. An eased
//!   step with `speed < 1` would overshoot past the opposite bound in a
//!   single frame; the clamp rules that out instead of treating it as a
//!   precondition violation.

use crate::color::Color;
use crate::geometry::Vec2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where the timer currently is in its open/close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Never started; the counter holds its initial value.
    #[default]
    Idle,
    /// Moving toward `max`.
    Opening,
    /// Moving toward zero.
    Closing,
    /// Settled at `max`.
    Opened,
    /// Settled at zero.
    Closed,
}

/// Advancement law applied each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Fixed step of `speed` per frame.
    Linear,
    /// Step proportional to remaining distance; decelerates near the bound.
    #[default]
    Eased,
}

type SettleHook = Box<dyn FnMut()>;

/// A bounded per-frame counter with settle callbacks.
pub struct AnimationTimer {
    timer: f32,
    max: f32,
    speed: f32,
    curve: Curve,
    state: TimerState,
    on_opened: Option<SettleHook>,
    on_closed: Option<SettleHook>,
}

impl std::fmt::Debug for AnimationTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationTimer")
            .field("timer", &self.timer)
            .field("max", &self.max)
            .field("speed", &self.speed)
            .field("curve", &self.curve)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for AnimationTimer {
    /// Eased timer with `speed = 5`, `max = 100`.
    fn default() -> Self {
        Self::new(5.0, 100.0)
    }
}

// ---------------------------------------------------------------------------
// AnimationTimer
// ---------------------------------------------------------------------------

impl AnimationTimer {
    /// Minimum accepted `speed` and `max`; lower values are clamped.
    pub const MIN_SPEED: f32 = 1.0;
    pub const MIN_SPAN: f32 = 1.0;

    /// Create a timer at rest (state `Idle`, counter at zero).
    #[must_use]
    pub fn new(speed: f32, max: f32) -> Self {
        Self {
            timer: 0.0,
            max: if max.is_finite() { max.max(Self::MIN_SPAN) } else { Self::MIN_SPAN },
            speed: if speed.is_finite() { speed.max(Self::MIN_SPEED) } else { Self::MIN_SPEED },
            curve: Curve::default(),
            state: TimerState::Idle,
            on_opened: None,
            on_closed: None,
        }
    }

    /// Set the advancement law (builder).
    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Register the hook fired on each transition into `Opened` (builder).
    #[must_use]
    pub fn with_on_opened(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_opened = Some(Box::new(hook));
        self
    }

    /// Register the hook fired on each transition into `Closed` (builder).
    #[must_use]
    pub fn with_on_closed(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_closed = Some(Box::new(hook));
        self
    }

    // --- Transitions ---

    /// Start moving toward `max` from wherever the counter currently sits.
    pub fn open(&mut self) {
        self.state = TimerState::Opening;
    }

    /// Start moving toward `max` from zero.
    pub fn open_and_reset(&mut self) {
        self.state = TimerState::Opening;
        self.timer = 0.0;
    }

    /// Start moving toward zero from wherever the counter currently sits.
    pub fn close(&mut self) {
        self.state = TimerState::Closing;
    }

    /// Start moving toward zero from `max`.
    pub fn close_and_reset(&mut self) {
        self.state = TimerState::Closing;
        self.timer = self.max;
    }

    /// Advance one frame. The owner calls this exactly once per frame,
    /// before any draw-pass read of [`progress`](Self::progress).
    pub fn update(&mut self) {
        match self.state {
            TimerState::Opening => {
                self.timer += match self.curve {
                    Curve::Eased => (self.max + 1.0 - self.timer) / self.speed,
                    Curve::Linear => self.speed,
                };
                if self.timer > self.max {
                    self.timer = self.max;
                    self.state = TimerState::Opened;
                    tracing::trace!(max = self.max, "timer settled open");
                    if let Some(hook) = self.on_opened.as_mut() {
                        hook();
                    }
                }
            }
            TimerState::Closing => {
                self.timer -= match self.curve {
                    Curve::Eased => (self.timer + 1.0) / self.speed,
                    Curve::Linear => self.speed,
                };
                if self.timer < 0.0 {
                    self.timer = 0.0;
                    self.state = TimerState::Closed;
                    tracing::trace!(max = self.max, "timer settled closed");
                    if let Some(hook) = self.on_closed.as_mut() {
                        hook();
                    }
                }
            }
            TimerState::Idle | TimerState::Opened | TimerState::Closed => {}
        }
    }

    // --- Observation ---

    /// Normalized progress in `[0, 1]`, the interpolation factor for the
    /// draw pass.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.timer / self.max).clamp(0.0, 1.0)
    }

    /// Raw counter value in `[0, max]`.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.timer
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == TimerState::Idle
    }

    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.state == TimerState::Opening
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.state == TimerState::Closing
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.state == TimerState::Opened
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == TimerState::Closed
    }

    /// Opening or already open.
    #[must_use]
    pub fn any_open(&self) -> bool {
        matches!(self.state, TimerState::Opening | TimerState::Opened)
    }

    /// Closing or already closed.
    #[must_use]
    pub fn any_close(&self) -> bool {
        matches!(self.state, TimerState::Closing | TimerState::Closed)
    }

    // --- Interpolation helpers ---

    /// Blend two scalars by current progress.
    #[must_use]
    pub fn lerp(&self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress()
    }

    /// Blend two points by current progress.
    #[must_use]
    pub fn lerp_vec2(&self, from: Vec2, to: Vec2) -> Vec2 {
        Vec2::new(self.lerp(from.x, to.x), self.lerp(from.y, to.y))
    }

    /// Blend two colors by current progress.
    #[must_use]
    pub fn lerp_color(&self, from: Color, to: Color) -> Color {
        from.lerp(to, self.progress())
    }
}
