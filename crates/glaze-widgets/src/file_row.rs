#![forbid(unsafe_code)]

//! The file-list row: name line, separator, detail/delete/rename buttons,
//! and a truncated path line, composed from the hover and rename state
//! machines.
//!
//! A row owns one [`HoverTracker`], one [`RenameController`], and a selected
//! flag. Per frame it advances all of them against the shared input
//! snapshot and reports what happened as [`RowEvent`]s; the owner reloads
//! its list on `Deleted`, applies the entry on `DetailsRequested`, and so
//! on. Colors are blended from hover progress in the draw pass only.

use glaze_core::{FrameInput, Rect, Vec2};
use unicode_segmentation::UnicodeSegmentation;

use crate::collab::{AudioCue, Canvas, Corners, Cue, FileStore, Icon, MessageSink};
use crate::element::Capabilities;
use crate::hover::HoverTracker;
use crate::panel::Panel;
use crate::rename::{RenameController, TextRouting};
use crate::theme::Theme;

const ROW_WIDTH: f32 = 540.0;
const NAME_HEIGHT: f32 = 24.0;
const BUTTON: f32 = 24.0;
const PATH_HEIGHT: f32 = 23.0;
const NAME_SCALE: f32 = 1.05;
const PATH_SCALE: f32 = 0.7;

/// What a row did this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// Background click toggled the row's selection.
    SelectionChanged(bool),
    /// The external rename was issued and the committed name updated.
    RenameCommitted { old: String, new: String },
    /// The entry was deleted; the owner should reload the list.
    Deleted,
    /// The detail/apply button was clicked.
    DetailsRequested,
}

/// One entry in the file list.
#[derive(Debug)]
pub struct FileRow {
    /// Directory prefix including its trailing separator; may be empty.
    dir: String,
    /// Extension including the dot; may be empty.
    ext: String,
    panel: Panel,
    hover: HoverTracker,
    rename: RenameController,
    selected: bool,
}

impl FileRow {
    /// Build a row for `path`, splitting off the directory and extension so
    /// the rename controller owns just the stem.
    #[must_use]
    pub fn new(path: &str, theme: &Theme) -> Self {
        let (dir, file) = match path.rfind(['/', '\\']) {
            Some(idx) => path.split_at(idx + 1),
            None => ("", path),
        };
        let (stem, ext) = match file.rfind('.') {
            Some(idx) if idx > 0 => file.split_at(idx),
            _ => (file, ""),
        };
        let height = 10.0 + NAME_HEIGHT + 3.0 + PATH_HEIGHT + 22.0;
        Self {
            dir: dir.to_string(),
            ext: ext.to_string(),
            panel: Panel::new(theme.row_border, theme.row_fill)
                .with_size(Vec2::new(ROW_WIDTH, height)),
            hover: HoverTracker::new().with_enter_cue(None),
            rename: RenameController::new(stem),
            selected: false,
        }
    }

    /// Set position (builder).
    #[must_use]
    pub fn at(mut self, pos: Vec2) -> Self {
        self.panel.set_position(pos);
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::DRAW | Capabilities::HOVER
    }

    /// The committed display name (the stem, no directory or extension).
    #[must_use]
    pub fn name(&self) -> &str {
        self.rename.name()
    }

    /// Full path recomposed around the committed name.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}{}{}", self.dir, self.rename.name(), self.ext)
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.rename.is_editing()
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.panel.bounds()
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.panel.set_position(pos);
    }

    // --- Layout ---

    fn name_pos(&self) -> Vec2 {
        let inner = self.panel.inner_bounds();
        Vec2::new(inner.x + 2.0, inner.y)
    }

    fn separator_pos(&self) -> Vec2 {
        let inner = self.panel.inner_bounds();
        Vec2::new(inner.x, inner.y + NAME_HEIGHT - 2.0)
    }

    fn buttons_top(&self) -> f32 {
        self.panel.inner_bounds().y + NAME_HEIGHT + 3.0
    }

    /// The apply/load button, rightmost.
    #[must_use]
    pub fn detail_rect(&self) -> Rect {
        let inner = self.panel.inner_bounds();
        Rect::new(inner.right() - BUTTON, self.buttons_top(), BUTTON, BUTTON)
    }

    #[must_use]
    pub fn delete_rect(&self) -> Rect {
        let detail = self.detail_rect();
        Rect::new(detail.x - BUTTON, detail.y, BUTTON, BUTTON)
    }

    /// The rename trigger region.
    #[must_use]
    pub fn rename_rect(&self) -> Rect {
        let delete = self.delete_rect();
        Rect::new(delete.x - BUTTON, delete.y, BUTTON, BUTTON)
    }

    fn path_rect(&self) -> Rect {
        let inner = self.panel.inner_bounds();
        let width = self.rename_rect().x - inner.x - 10.0;
        Rect::new(inner.x, self.buttons_top(), width, PATH_HEIGHT)
    }

    // --- Frame passes ---

    /// Advance the row's state machines for this frame.
    pub fn update(
        &mut self,
        input: &FrameInput,
        routing: &mut TextRouting,
        files: &mut dyn FileStore,
        audio: &mut dyn AudioCue,
        messages: &mut dyn MessageSink,
    ) -> Vec<RowEvent> {
        let mut events = Vec::new();
        let was_editing = self.rename.is_editing();

        if let Some(commit) =
            self.rename
                .update(input, self.rename_rect(), routing, files, audio, messages)
        {
            events.push(RowEvent::RenameCommitted {
                old: commit.old,
                new: commit.new,
            });
        }

        self.hover.update(self.bounds(), input, audio);

        // A click that lands while editing is the commit click; it must not
        // double as a button press or a selection toggle.
        if !was_editing && input.released() && self.bounds().contains(input.pointer()) {
            let p = input.pointer();
            if self.detail_rect().contains(p) {
                events.push(RowEvent::DetailsRequested);
            } else if self.delete_rect().contains(p) {
                audio.play(Cue::MenuTick);
                if files.exists(self.rename.name()) {
                    match files.delete(self.rename.name()) {
                        Ok(()) => events.push(RowEvent::Deleted),
                        Err(err) => {
                            tracing::warn!(name = %self.rename.name(), %err, "delete failed");
                        }
                    }
                }
            } else if !self.rename_rect().contains(p) && !self.rename.is_editing() {
                audio.play(Cue::MenuTick);
                self.selected = !self.selected;
                events.push(RowEvent::SelectionChanged(self.selected));
            }
        }

        events
    }

    /// Issue the row's draw calls, blending colors from hover progress.
    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        let t = self.hover.progress();
        let border = theme.row_border.lerp(theme.row_border_hot, t);
        let fill = theme.row_fill.lerp(theme.row_fill_hot, t);
        canvas.round_rect(
            self.panel.position(),
            self.panel.size(),
            self.panel.corners,
            fill,
            self.panel.border,
            border,
        );

        let name_color = if self.selected {
            theme.name_active
        } else {
            theme.name.lerp(theme.name_hot, t)
        };
        canvas.text(self.name_pos(), &self.rename.display_name(), NAME_SCALE, name_color);

        let inner = self.panel.inner_bounds();
        canvas.hline(self.separator_pos(), inner.width, theme.separator);

        let path_rect = self.path_rect();
        canvas.round_rect(
            path_rect.position(),
            path_rect.size(),
            Corners::Uniform(10.0),
            theme.path_bg,
            0.0,
            theme.path_bg,
        );
        let label = self.path_label(canvas, path_rect.width);
        let label_pos = Vec2::new(
            path_rect.x + 6.0,
            path_rect.y + (path_rect.height - canvas.measure(&label, PATH_SCALE).y) / 2.0,
        );
        canvas.text(label_pos, &label, PATH_SCALE, theme.path_text);

        canvas.icon(self.detail_rect().position(), self.detail_rect().size(), Icon::Play);
        canvas.icon(self.delete_rect().position(), self.delete_rect().size(), Icon::Delete);
        canvas.icon(self.rename_rect().position(), self.rename_rect().size(), Icon::Rename);
    }

    /// `"Path: <path>"`, with the head elided to `"Path: ...<tail>"` when
    /// the full path does not fit the line.
    fn path_label(&self, canvas: &dyn Canvas, max_width: f32) -> String {
        let path = self.path();
        let budget = max_width
            - 16.0
            - canvas.measure("Path: ", PATH_SCALE).x
            - canvas.measure("...", PATH_SCALE).x;
        if canvas.measure(&path, PATH_SCALE).x < budget {
            return format!("Path: {path}");
        }

        // Keep the longest tail that fits, walking graphemes from the end.
        let mut width = 0.0;
        let mut cut = 0;
        for (idx, grapheme) in path.grapheme_indices(true).rev() {
            width += canvas.measure(grapheme, PATH_SCALE).x;
            cut = idx;
            if width >= budget {
                break;
            }
        }
        format!("Path: ...{}", &path[cut..])
    }
}
