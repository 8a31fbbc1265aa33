#![forbid(unsafe_code)]

//! Widgets: panels, close buttons, and file rows for the Glaze overlay kit.
//!
//! # Role in Glaze
//! `glaze-widgets` composes the timing core into interactive elements. Each
//! element owns its state machines — a hover timer, possibly a drag
//! controller, possibly a rename controller — and exposes two passes:
//! `update` (advance state against this frame's input snapshot) and `draw`
//! (read progress/state and issue collaborator draw calls). The owner runs
//! all updates before any draw, once per frame.
//!
//! # Primary responsibilities
//! - **HoverTracker / DragController / RenameController**: the interaction
//!   state machines.
//! - **Panel / CrossButton / FileRow**: visual composition over them.
//! - **Collaborator traits** ([`collab`]): rendering, audio, filesystem, and
//!   user-message interfaces the host supplies.
//!
//! # How it fits in the system
//! Everything here is synchronous and frame-driven; no widget blocks or
//! spawns work. Failures from collaborators are surfaced as messages or log
//! lines and never escape a frame.

pub mod collab;
pub mod cross;
pub mod drag;
pub mod element;
pub mod file_row;
pub mod hover;
pub mod panel;
pub mod rename;
pub mod theme;

pub use collab::{AudioCue, Canvas, Corners, Cue, FileStore, Icon, MessageSink, SilentAudio};
pub use cross::CrossButton;
pub use drag::DragController;
pub use element::{Capabilities, PressTarget};
pub use file_row::{FileRow, RowEvent};
pub use hover::HoverTracker;
pub use panel::{Panel, Shadow};
pub use rename::{
    MAX_NAME_GRAPHEMES, RenameCommit, RenameController, RenameError, RenameMode, TextRouting,
};
pub use theme::Theme;
