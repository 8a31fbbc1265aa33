#![forbid(unsafe_code)]

//! Core: animation timers, input snapshots, and the primitives they share.
//!
//! # Role in Glaze
//! `glaze-core` is the timing and input layer of the overlay kit. It owns the
//! frame-driven [`AnimationTimer`](timer::AnimationTimer) state machine and
//! the per-frame [`FrameInput`](input::FrameInput) snapshot that every
//! interaction state machine in `glaze-widgets` observes.
//!
//! # Primary responsibilities
//! - **AnimationTimer**: bounded counter with Linear/Eased laws, normalized
//!   progress, and one-shot settle callbacks.
//! - **FrameInput / InputTracker**: immutable per-frame input sample with
//!   press/release and key edges derived against the previous frame.
//! - **Geometry / Color**: the float rectangles and RGBA blending the timers
//!   interpolate over.
//!
//! # How it fits in the system
//! Widgets update their timers during the frame's update pass and read
//! `progress()` during the draw pass; this crate knows nothing about
//! rendering, audio, or the filesystem.

pub mod color;
pub mod geometry;
pub mod input;
pub mod timer;

pub use color::Color;
pub use geometry::{Rect, Vec2};
pub use input::{FrameInput, InputTracker, Keys};
pub use timer::{AnimationTimer, Curve, TimerState};
