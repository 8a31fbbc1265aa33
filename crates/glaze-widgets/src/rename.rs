#![forbid(unsafe_code)]

//! Inline rename: a Viewing/Editing state machine over a staging buffer.
//!
//! The controller owns the committed display name. A click released inside
//! the trigger region enters Editing: the staging buffer is seeded from the
//! committed name and the process-wide text routing is captured so no other
//! consumer sees keystrokes. Editing ends on an Enter/Tab/Escape key edge or
//! on any subsequent click; both paths are the same commit transition with
//! the same validation order.
//!
//! # Invariants
//!
//! 1. The staging buffer is only populated while Editing; it is discarded on
//!    every exit.
//! 2. Text routing is released on every exit path — commit, collision
//!    rejection, missing source, failed rename — before any validation runs.
//! 3. The blink clock free-runs modulo 60 every frame, in both modes.
//! 4. The external rename call is issued at most once per commit, and only
//!    after the collision and existence preconditions pass.
//!
//! # Failure Modes
//!
//! - Reserved character in the frame's input: the whole keystroke batch is
//!   rejected, the staging buffer keeps its pre-keystroke value, a message
//!   is surfaced, and Editing continues.
//! - Over-long input: truncated to the 40-grapheme cap with a message;
//!   Editing continues.
//! - Target name already taken: commit exits Editing, restores the old
//!   name, surfaces a message, and issues no rename call.
//! - Source entry missing or rename I/O failure: no commit event, no
//!   refresh; logged and swallowed.

use glaze_core::{FrameInput, Keys, Rect};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::collab::{AudioCue, Cue, FileStore, MessageSink};

/// Grapheme cap on a file display name.
pub const MAX_NAME_GRAPHEMES: usize = 40;

/// Characters the filesystem collaborator cannot accept in a name.
pub const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '\'', '<', '>', '|'];

/// Frames in one full cursor blink cycle.
const BLINK_CYCLE: u8 = 60;

/// Why a rename edit or commit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("name is limited to 40 characters")]
    TooLong,
    #[error("name may not contain \\ / : * ? \" ' < > |")]
    ReservedCharacter,
    #[error("a file with that name already exists")]
    NameTaken,
}

/// Process-wide keyboard capture while a rename edit is active.
///
/// The host checks [`is_captured`](TextRouting::is_captured) before routing
/// text anywhere else, and drains its pending input buffer when
/// [`take_clear_request`](TextRouting::take_clear_request) reports one.
/// Capture is acquired on the Viewing→Editing transition and released on
/// every Editing→Viewing path, validation failures included.
#[derive(Debug, Clone, Default)]
pub struct TextRouting {
    captured: bool,
    clear_requested: bool,
}

impl TextRouting {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn capture(&mut self) {
        self.captured = true;
        self.clear_requested = true;
    }

    fn release(&mut self) {
        self.captured = false;
    }

    /// Whether keystrokes are currently reserved for a rename edit.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// One-shot request to drop any input buffered before capture.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

/// Current mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameMode {
    #[default]
    Viewing,
    Editing,
}

/// A successful commit: the external rename was issued with these names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCommit {
    pub old: String,
    pub new: String,
}

/// Viewing/Editing state machine owning the committed name and the staging
/// buffer.
#[derive(Debug, Clone)]
pub struct RenameController {
    mode: RenameMode,
    committed: String,
    staging: String,
    /// Free-running frame clock, wraps modulo 60.
    blink: u8,
}

impl RenameController {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            mode: RenameMode::Viewing,
            committed: name.into(),
            staging: String::new(),
            blink: 0,
        }
    }

    /// The committed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.committed
    }

    #[must_use]
    pub fn mode(&self) -> RenameMode {
        self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == RenameMode::Editing
    }

    /// The in-progress buffer; empty outside Editing.
    #[must_use]
    pub fn staging(&self) -> &str {
        &self.staging
    }

    /// Cursor glyph is shown for the first half of each blink cycle.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.blink < BLINK_CYCLE / 2
    }

    /// What the row renders this frame: the staging buffer with a trailing
    /// cursor glyph while editing, the committed name otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.mode {
            RenameMode::Viewing => self.committed.clone(),
            RenameMode::Editing if self.cursor_visible() => format!("{}|", self.staging),
            RenameMode::Editing => self.staging.clone(),
        }
    }

    /// Advance one frame: blink clock, click transitions, text ingestion,
    /// and commit key edges. Returns the commit when one lands this frame.
    ///
    /// `trigger` is the region whose click starts editing (the rename
    /// button). While editing, any released click — trigger included —
    /// commits, exactly like an Escape/Enter/Tab edge.
    pub fn update(
        &mut self,
        input: &FrameInput,
        trigger: Rect,
        routing: &mut TextRouting,
        files: &mut dyn FileStore,
        audio: &mut dyn AudioCue,
        messages: &mut dyn MessageSink,
    ) -> Option<RenameCommit> {
        self.blink = (self.blink + 1) % BLINK_CYCLE;

        if input.released() {
            match self.mode {
                RenameMode::Viewing => {
                    if trigger.contains(input.pointer()) {
                        self.begin(routing, audio);
                        return None;
                    }
                }
                RenameMode::Editing => return self.commit(routing, files, messages),
            }
        }

        if self.mode == RenameMode::Editing {
            if !input.text().is_empty() {
                self.apply_text(input.text(), messages);
            }
            if input.key_edge(Keys::ENTER | Keys::TAB | Keys::ESCAPE) {
                return self.commit(routing, files, messages);
            }
        }
        None
    }

    fn begin(&mut self, routing: &mut TextRouting, audio: &mut dyn AudioCue) {
        self.mode = RenameMode::Editing;
        self.staging = self.committed.clone();
        routing.capture();
        audio.play(Cue::MenuTick);
        tracing::debug!(name = %self.committed, "rename started");
    }

    /// The single Editing→Viewing transition. Routing is released first so
    /// no rejection path can leak a captured keyboard.
    fn commit(
        &mut self,
        routing: &mut TextRouting,
        files: &mut dyn FileStore,
        messages: &mut dyn MessageSink,
    ) -> Option<RenameCommit> {
        self.mode = RenameMode::Viewing;
        routing.release();
        let staged = std::mem::take(&mut self.staging);

        if staged == self.committed {
            return None;
        }
        if files.exists(&staged) {
            tracing::warn!(from = %self.committed, to = %staged, "rename collision");
            messages.notify(&RenameError::NameTaken.to_string());
            return None;
        }
        if !files.exists(&self.committed) {
            // Entry vanished underneath us; nothing to move, no refresh.
            tracing::warn!(name = %self.committed, "rename source missing");
            return None;
        }
        match files.rename(&self.committed, &staged) {
            Ok(()) => {
                let old = std::mem::replace(&mut self.committed, staged);
                tracing::debug!(from = %old, to = %self.committed, "rename committed");
                Some(RenameCommit {
                    old,
                    new: self.committed.clone(),
                })
            }
            Err(err) => {
                tracing::warn!(name = %self.committed, %err, "rename failed");
                None
            }
        }
    }

    /// Fold one frame's raw text into the staging buffer.
    ///
    /// Backspace removes the trailing grapheme; commit keys arrive as key
    /// edges, so their control characters are dropped here. The batch is
    /// truncated to the cap first, then rejected wholesale if a reserved
    /// character survives.
    fn apply_text(&mut self, raw: &str, messages: &mut dyn MessageSink) {
        let mut candidate = self.staging.clone();
        for ch in raw.chars() {
            match ch {
                '\u{8}' => {
                    if let Some((idx, _)) = candidate.grapheme_indices(true).next_back() {
                        candidate.truncate(idx);
                    }
                }
                '\r' | '\n' | '\t' => {}
                _ => candidate.push(ch),
            }
        }

        if candidate.graphemes(true).count() > MAX_NAME_GRAPHEMES {
            let end = candidate
                .grapheme_indices(true)
                .nth(MAX_NAME_GRAPHEMES)
                .map_or(candidate.len(), |(idx, _)| idx);
            candidate.truncate(end);
            messages.notify(&RenameError::TooLong.to_string());
        }

        if candidate.chars().any(|c| RESERVED_CHARS.contains(&c)) {
            messages.notify(&RenameError::ReservedCharacter.to_string());
            return;
        }
        self.staging = candidate;
    }
}
