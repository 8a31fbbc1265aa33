#![forbid(unsafe_code)]

//! External collaborator interfaces.
//!
//! The widget layer never rasterizes, plays audio, or touches the
//! filesystem itself; it drives these traits, which the host game supplies.
//! All of them are synchronous call-throughs: a failed file operation is
//! surfaced as a message or a log line, never propagated out of a frame.

use glaze_core::{Color, Vec2};

/// Corner rounding for a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Corners {
    /// Same radius on all four corners.
    Uniform(f32),
    /// Individual radii: top-left, top-right, bottom-left, bottom-right.
    PerCorner {
        tl: f32,
        tr: f32,
        bl: f32,
        br: f32,
    },
}

impl Default for Corners {
    fn default() -> Self {
        Corners::Uniform(12.0)
    }
}

/// Icons the file row asks the host to draw; asset lookup is the host's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Apply/load the entry.
    Play,
    Delete,
    Rename,
}

/// Drawing surface supplied by the host renderer.
///
/// Calls are issued during the draw pass only; nothing in the widget layer
/// reads back from the canvas except [`measure`](Canvas::measure), which is
/// pure layout arithmetic on the host's font metrics.
pub trait Canvas {
    /// Soft drop shadow behind a rounded rectangle.
    fn shadow(&mut self, pos: Vec2, size: Vec2, radius: f32, color: Color, thickness: f32);

    /// Rounded rectangle with an optional border stroke.
    fn round_rect(
        &mut self,
        pos: Vec2,
        size: Vec2,
        corners: Corners,
        fill: Color,
        border: f32,
        border_color: Color,
    );

    /// A cross (×) glyph with rounded stroke ends.
    fn cross(
        &mut self,
        pos: Vec2,
        size: f32,
        radius: f32,
        fill: Color,
        border: f32,
        border_color: Color,
    );

    /// A 1px horizontal rule.
    fn hline(&mut self, pos: Vec2, width: f32, color: Color);

    /// Text at `scale` relative to the host's base font size.
    fn text(&mut self, pos: Vec2, text: &str, scale: f32, color: Color);

    /// An icon from the host's asset store.
    fn icon(&mut self, pos: Vec2, size: Vec2, icon: Icon);

    /// Measured size of `text` at `scale`.
    fn measure(&self, text: &str, scale: f32) -> Vec2;
}

/// One-shot audio cues, identified by name and fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The short menu tick played on hover-enter and clicks.
    MenuTick,
}

pub trait AudioCue {
    fn play(&mut self, cue: Cue);
}

/// Audio sink that drops every cue; for hosts without sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// The sibling file set a row's entry lives in, keyed by display name.
///
/// `rename` and `delete` are synchronous and may fail; callers check
/// [`exists`](FileStore::exists) first and treat failures as non-fatal.
pub trait FileStore {
    fn exists(&self, name: &str) -> bool;
    fn rename(&mut self, from: &str, to: &str) -> std::io::Result<()>;
    fn delete(&mut self, name: &str) -> std::io::Result<()>;
}

/// Transient user-visible feedback (chat line, toast, status bar).
pub trait MessageSink {
    fn notify(&mut self, message: &str);
}
