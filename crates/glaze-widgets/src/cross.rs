#![forbid(unsafe_code)]

//! The close button: a rounded box with a × whose colors follow hover
//! progress.

use glaze_core::{Color, FrameInput, Rect, Vec2};

use crate::collab::{AudioCue, Canvas, Corners};
use crate::element::Capabilities;
use crate::hover::HoverTracker;
use crate::theme::Theme;

type ClickHook = Box<dyn FnMut()>;

/// Close control with hover-blended background and stroke.
pub struct CrossButton {
    pos: Vec2,
    /// Side length of the × glyph.
    pub fork_size: f32,
    /// Rounding of the stroke ends.
    pub stroke_radius: f32,
    pub stroke_width: f32,
    hover: HoverTracker,
    on_click: Option<ClickHook>,
}

impl std::fmt::Debug for CrossButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossButton")
            .field("pos", &self.pos)
            .field("fork_size", &self.fork_size)
            .field("hovered", &self.hover.is_inside())
            .finish_non_exhaustive()
    }
}

impl CrossButton {
    /// Button sized around a × of `fork_size` (the box adds its own margin).
    #[must_use]
    pub fn new(fork_size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            fork_size,
            stroke_radius: 3.7,
            stroke_width: 2.0,
            hover: HoverTracker::new(),
            on_click: None,
        }
    }

    /// Set position (builder).
    #[must_use]
    pub fn at(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    /// Hook fired on a click released inside the button (builder).
    #[must_use]
    pub fn with_on_click(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::DRAW | Capabilities::HOVER
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.fork_size + 20.0, self.fork_size + 10.0)
    }

    #[must_use]
    pub fn hover_progress(&self) -> f32 {
        self.hover.progress()
    }

    /// Advance hover and fire the click hook on a release inside bounds.
    pub fn update(&mut self, input: &FrameInput, audio: &mut dyn AudioCue) {
        self.hover.update(self.bounds(), input, audio);
        if input.released()
            && self.bounds().contains(input.pointer())
            && let Some(hook) = self.on_click.as_mut()
        {
            hook();
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        let bounds = self.bounds();
        let background = theme
            .title_bg
            .scale(0.5)
            .lerp(theme.title_bg, self.hover.progress());
        let fork = Color::TRANSPARENT.lerp(theme.cross, self.hover.progress());

        canvas.round_rect(
            bounds.position(),
            bounds.size(),
            Corners::Uniform(10.0),
            background,
            3.0,
            theme.panel_border,
        );
        let fork_pos = bounds.center() - Vec2::splat(self.fork_size / 2.0);
        canvas.cross(
            fork_pos,
            self.fork_size,
            self.stroke_radius,
            fork,
            self.stroke_width,
            theme.panel_border,
        );
    }
}
