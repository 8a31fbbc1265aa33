#![forbid(unsafe_code)]

//! The generic overlay panel: rounded rectangle, optional shadow, optional
//! drag.
//!
//! A panel owns its bounds and, when draggable, a [`DragController`]. Press
//! routing is the owner's job: it hit-tests children first and passes the
//! resulting [`PressTarget`] to [`Panel::handle_press`]; only a background
//! press arms the drag. Update and draw are separate passes — `update`
//! advances state, `draw` only reads it.

use glaze_core::{Color, FrameInput, Rect, Vec2};

use crate::collab::{Canvas, Corners};
use crate::drag::DragController;
use crate::element::{Capabilities, PressTarget};

/// Drop-shadow parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub thickness: f32,
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            thickness: 50.0,
            color: Color::rgba(0, 0, 0, 64),
        }
    }
}

type DragObserver = Box<dyn FnMut(Vec2)>;

/// A rounded, bordered, optionally draggable rectangle.
pub struct Panel {
    pos: Vec2,
    size: Vec2,
    pub corners: Corners,
    pub border: f32,
    pub border_color: Color,
    pub background: Color,
    pub padding: f32,
    pub shadow: Option<Shadow>,
    draggable: bool,
    drag: DragController,
    on_drag: Option<DragObserver>,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("pos", &self.pos)
            .field("size", &self.size)
            .field("corners", &self.corners)
            .field("draggable", &self.draggable)
            .field("dragging", &self.drag.is_dragging())
            .finish_non_exhaustive()
    }
}

impl Panel {
    /// Panel with the border/background colors and the stock geometry:
    /// 12px corners, 2px border, 10px padding, no shadow, not draggable.
    #[must_use]
    pub fn new(border_color: Color, background: Color) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            corners: Corners::Uniform(12.0),
            border: 2.0,
            border_color,
            background,
            padding: 10.0,
            shadow: None,
            draggable: false,
            drag: DragController::new(),
            on_drag: None,
        }
    }

    /// Set position (builder).
    #[must_use]
    pub fn at(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    /// Set size (builder).
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Set corner rounding (builder).
    #[must_use]
    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    /// Enable the drop shadow (builder).
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Allow background presses to drag the panel (builder).
    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Observe drag movement; called with the new top-left every dragged
    /// frame (builder).
    #[must_use]
    pub fn with_on_drag(mut self, observer: impl FnMut(Vec2) + 'static) -> Self {
        self.on_drag = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::UPDATE | Capabilities::DRAW;
        if self.draggable {
            caps |= Capabilities::DRAG;
        }
        caps
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Outer bounds in screen space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Bounds shrunk by the padding, where children lay out.
    #[must_use]
    pub fn inner_bounds(&self) -> Rect {
        self.bounds().inset(self.padding)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Route a press that landed inside the panel's bounds.
    ///
    /// The owner resolves the deepest child under the pointer first; a press
    /// consumed by (or routed to) a child never arms the drag.
    pub fn handle_press(&mut self, input: &FrameInput, target: PressTarget) {
        if self.draggable
            && input.pressed()
            && target.arms_drag()
            && self.bounds().contains(input.pointer())
        {
            self.drag.arm(input.pointer(), self.pos);
        }
    }

    /// Per-frame state advance: releases the drag on the button-up edge and
    /// follows the pointer while dragging, notifying the drag observer.
    pub fn update(&mut self, input: &FrameInput) {
        if input.released() {
            self.drag.release();
        }
        if let Some(new_pos) = self.drag.track(input.pointer()) {
            self.pos = new_pos;
            if let Some(observer) = self.on_drag.as_mut() {
                observer(new_pos);
            }
        }
    }

    /// Issue this panel's draw calls. Read-only; state was settled by
    /// `update`.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(shadow) = self.shadow {
            let area = self.bounds().expand(shadow.thickness);
            canvas.shadow(
                area.position(),
                area.size(),
                self.corner_radius(),
                shadow.color,
                shadow.thickness,
            );
        }
        canvas.round_rect(
            self.pos,
            self.size,
            self.corners,
            self.background,
            self.border,
            self.border_color,
        );
    }

    fn corner_radius(&self) -> f32 {
        match self.corners {
            Corners::Uniform(r) => r,
            Corners::PerCorner { tl, .. } => tl,
        }
    }
}
