//! Frame-level integration: panels, the close button, and file rows driven
//! together from one input snapshot per frame, update pass before draw pass.

use std::cell::RefCell;
use std::rc::Rc;

use glaze_core::{AnimationTimer, Color, InputTracker, Keys, TimerState, Vec2};
use glaze_widgets::{
    AudioCue, Canvas, Corners, CrossButton, Cue, FileRow, FileStore, Icon, MessageSink, Panel,
    RowEvent, Shadow, TextRouting, Theme,
};
use unicode_width::UnicodeWidthStr;

// ── Collaborator doubles ────────────────────────────────────────────────

#[derive(Default)]
struct Cues(Vec<Cue>);

impl AudioCue for Cues {
    fn play(&mut self, cue: Cue) {
        self.0.push(cue);
    }
}

#[derive(Default)]
struct Messages(Vec<String>);

impl MessageSink for Messages {
    fn notify(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

#[derive(Default)]
struct Store {
    names: Vec<String>,
    renames: Vec<(String, String)>,
}

impl Store {
    fn with(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
            renames: Vec::new(),
        }
    }
}

impl FileStore for Store {
    fn exists(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
    fn rename(&mut self, from: &str, to: &str) -> std::io::Result<()> {
        self.renames.push((from.to_string(), to.to_string()));
        if let Some(slot) = self.names.iter_mut().find(|n| *n == from) {
            *slot = to.to_string();
        }
        Ok(())
    }
    fn delete(&mut self, name: &str) -> std::io::Result<()> {
        self.names.retain(|n| n != name);
        Ok(())
    }
}

/// Records draw calls; measures text as terminal display width times a cell
/// size, scaled.
#[derive(Default)]
struct Recorder {
    round_rects: Vec<(Vec2, Vec2, Color)>,
    crosses: usize,
    hlines: usize,
    icons: Vec<Icon>,
    texts: Vec<String>,
    shadows: Vec<(Vec2, Vec2)>,
}

impl Canvas for Recorder {
    fn shadow(&mut self, pos: Vec2, size: Vec2, _radius: f32, _color: Color, _thickness: f32) {
        self.shadows.push((pos, size));
    }
    fn round_rect(
        &mut self,
        pos: Vec2,
        size: Vec2,
        _corners: Corners,
        fill: Color,
        _border: f32,
        _border_color: Color,
    ) {
        self.round_rects.push((pos, size, fill));
    }
    fn cross(&mut self, _pos: Vec2, _size: f32, _radius: f32, _fill: Color, _b: f32, _bc: Color) {
        self.crosses += 1;
    }
    fn hline(&mut self, _pos: Vec2, _width: f32, _color: Color) {
        self.hlines += 1;
    }
    fn text(&mut self, _pos: Vec2, text: &str, _scale: f32, _color: Color) {
        self.texts.push(text.to_string());
    }
    fn icon(&mut self, _pos: Vec2, _size: Vec2, icon: Icon) {
        self.icons.push(icon);
    }
    fn measure(&self, text: &str, scale: f32) -> Vec2 {
        Vec2::new(text.width() as f32 * 8.0 * scale, 14.0 * scale)
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn cross_click_drives_the_panel_close_timer() {
    // The panel's visibility timer is shared with the cross's click hook,
    // the way a mod window wires its close button.
    let closed = Rc::new(RefCell::new(0u32));
    let closed_count = Rc::clone(&closed);
    let visibility = Rc::new(RefCell::new(
        AnimationTimer::new(5.0, 100.0).with_on_closed(move || *closed_count.borrow_mut() += 1),
    ));
    let hook_timer = Rc::clone(&visibility);
    visibility.borrow_mut().open_and_reset();

    let mut cross = CrossButton::new(20.0)
        .at(Vec2::new(500.0, 10.0))
        .with_on_click(move || hook_timer.borrow_mut().close());

    let mut input = InputTracker::new();
    let mut cues = Cues::default();

    // Let the window finish opening.
    for _ in 0..200 {
        let f = input.begin_frame(Vec2::new(-100.0, -100.0), false, Keys::empty(), "");
        cross.update(&f, &mut cues);
        visibility.borrow_mut().update();
    }
    assert_eq!(visibility.borrow().state(), TimerState::Opened);

    // Click the cross; the shared timer reverses and settles closed once.
    let target = cross.bounds().center();
    let f = input.begin_frame(target, true, Keys::empty(), "");
    cross.update(&f, &mut cues);
    visibility.borrow_mut().update();
    let f = input.begin_frame(target, false, Keys::empty(), "");
    cross.update(&f, &mut cues);
    visibility.borrow_mut().update();

    for _ in 0..400 {
        let f = input.begin_frame(target, false, Keys::empty(), "");
        cross.update(&f, &mut cues);
        visibility.borrow_mut().update();
    }
    assert_eq!(visibility.borrow().state(), TimerState::Closed);
    assert_eq!(*closed.borrow(), 1);
    assert!(cues.0.contains(&Cue::MenuTick), "hover-enter ticked");
}

#[test]
fn one_snapshot_one_edge_no_double_trigger() {
    // Two rows observe the same release edge; only the row under the
    // pointer reacts, and re-reading the snapshot cannot re-trigger it.
    let theme = Theme::default();
    let mut top = FileRow::new("saves/top.plot", &theme).at(Vec2::new(0.0, 0.0));
    let mut bottom = FileRow::new("saves/bottom.plot", &theme).at(Vec2::new(0.0, 90.0));

    let mut input = InputTracker::new();
    let mut routing = TextRouting::new();
    let mut store = Store::with(&["top", "bottom"]);
    let mut cues = Cues::default();
    let mut messages = Messages::default();

    let in_top = Vec2::new(30.0, 12.0);
    let mut all = Vec::new();
    for down in [true, false] {
        let f = input.begin_frame(in_top, down, Keys::empty(), "");
        all.extend(top.update(&f, &mut routing, &mut store, &mut cues, &mut messages));
        all.extend(bottom.update(&f, &mut routing, &mut store, &mut cues, &mut messages));
    }
    assert_eq!(all, vec![RowEvent::SelectionChanged(true)]);
    assert!(top.is_selected());
    assert!(!bottom.is_selected());
}

#[test]
fn row_created_under_resting_pointer_stays_untouched() {
    // A fresh tracker has no button history; the pointer sitting over the
    // row with the button up must not read as a release, so the row neither
    // toggles selection nor ticks.
    let theme = Theme::default();
    let mut row = FileRow::new("saves/tower.plot", &theme).at(Vec2::new(0.0, 0.0));

    let mut input = InputTracker::new();
    let mut routing = TextRouting::new();
    let mut store = Store::with(&["tower"]);
    let mut cues = Cues::default();
    let mut messages = Messages::default();

    let over_row = Vec2::new(30.0, 12.0);
    let f = input.begin_frame(over_row, false, Keys::empty(), "");
    let events = row.update(&f, &mut routing, &mut store, &mut cues, &mut messages);

    assert!(events.is_empty(), "no click happened: {events:?}");
    assert!(!row.is_selected());
    assert!(!cues.0.contains(&Cue::MenuTick), "selection tick requires a real click");
}

#[test]
fn rename_collision_across_sibling_rows() {
    let theme = Theme::default();
    let mut row = FileRow::new("saves/tower.plot", &theme).at(Vec2::new(0.0, 0.0));

    let mut input = InputTracker::new();
    let mut routing = TextRouting::new();
    let mut store = Store::with(&["tower", "castle"]);
    let mut cues = Cues::default();
    let mut messages = Messages::default();

    let mut run = |pointer: Vec2, down: bool, keys: Keys, text: &str| {
        let f = input.begin_frame(pointer, down, keys, text);
        row.update(&f, &mut routing, &mut store, &mut cues, &mut messages)
    };

    let trigger = Vec2::new(470.0, 49.0);
    run(trigger, true, Keys::empty(), "");
    run(trigger, false, Keys::empty(), "");

    let away = Vec2::new(-50.0, -50.0);
    run(away, false, Keys::empty(), &"\u{8}".repeat("tower".len()));
    run(away, false, Keys::empty(), "castle");
    let events = run(away, false, Keys::ENTER, "");

    assert!(events.is_empty(), "collision commits nothing: {events:?}");
    assert!(store.renames.is_empty());
    assert_eq!(messages.0, vec!["a file with that name already exists".to_string()]);
    assert_eq!(row.name(), "tower", "old name restored");
    assert!(!routing.is_captured(), "capture released on the rejection path");
}

#[test]
fn draw_pass_reflects_update_pass_state() {
    let theme = Theme::default();
    let mut row = FileRow::new("saves/tower.plot", &theme).at(Vec2::new(0.0, 0.0));
    let panel = Panel::new(theme.panel_border, theme.panel_bg)
        .at(Vec2::new(-20.0, -20.0))
        .with_size(Vec2::new(600.0, 400.0))
        .with_shadow(Shadow::default());

    let mut input = InputTracker::new();
    let mut routing = TextRouting::new();
    let mut store = Store::with(&["tower"]);
    let mut cues = Cues::default();
    let mut messages = Messages::default();

    // Hover the row for a few frames, then draw.
    for _ in 0..4 {
        let f = input.begin_frame(Vec2::new(30.0, 12.0), false, Keys::empty(), "");
        row.update(&f, &mut routing, &mut store, &mut cues, &mut messages);
    }

    let mut canvas = Recorder::default();
    panel.draw(&mut canvas);
    row.draw(&mut canvas, &theme);

    // Shadow grows outward from the panel bounds by its thickness.
    assert_eq!(
        canvas.shadows,
        vec![(Vec2::new(-70.0, -70.0), Vec2::new(700.0, 500.0))]
    );
    // Backdrop panel + row body + path backdrop.
    assert_eq!(canvas.round_rects.len(), 3);
    let (_, _, row_fill) = canvas.round_rects[1];
    assert_ne!(row_fill, theme.row_fill, "hover progress blended the fill");
    assert_ne!(row_fill, theme.row_fill_hot, "not settled yet either");
    assert_eq!(canvas.hlines, 1);
    assert_eq!(canvas.crosses, 0, "no close button in this scene");
    assert_eq!(canvas.icons, vec![Icon::Play, Icon::Delete, Icon::Rename]);
    assert_eq!(canvas.texts.len(), 2);
    assert_eq!(canvas.texts[0], "tower");
    assert!(canvas.texts[1].starts_with("Path: "));
}

#[test]
fn editing_row_draws_staging_buffer_with_cursor() {
    let theme = Theme::default();
    let mut row = FileRow::new("tower.plot", &theme).at(Vec2::new(0.0, 0.0));

    let mut input = InputTracker::new();
    let mut routing = TextRouting::new();
    let mut store = Store::with(&["tower"]);
    let mut cues = Cues::default();
    let mut messages = Messages::default();

    let trigger = row.rename_rect().center();
    for down in [true, false] {
        let f = input.begin_frame(trigger, down, Keys::empty(), "");
        row.update(&f, &mut routing, &mut store, &mut cues, &mut messages);
    }
    assert!(row.is_editing());
    let away = Vec2::new(-50.0, -50.0);
    let f = input.begin_frame(away, false, Keys::empty(), "s");
    row.update(&f, &mut routing, &mut store, &mut cues, &mut messages);

    // Blink clock is 3 frames in: cursor visible in the first half-cycle.
    let mut canvas = Recorder::default();
    row.draw(&mut canvas, &theme);
    assert_eq!(canvas.texts[0], "towers|");
}
