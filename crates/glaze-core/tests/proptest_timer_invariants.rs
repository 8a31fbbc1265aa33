//! Property-based invariant tests for the animation timer.
//!
//! These tests verify the contracts that must hold for any valid parameters
//! and any interleaving of transitions and updates:
//!
//! 1. Bounded counter: `0 <= value <= max` after every update, both curves.
//! 2. Finite convergence: an opening timer settles within a bounded number
//!    of frames; same for closing.
//! 3. Single-fire callbacks: settle hooks fire once per transition into a
//!    settled state, regardless of extra updates.
//! 4. Resumable reversal: closing mid-open strictly decreases the counter
//!    on the next update.

use std::cell::Cell;
use std::rc::Rc;

use glaze_core::{AnimationTimer, Curve, TimerState};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Open,
    OpenAndReset,
    Close,
    CloseAndReset,
    Update,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Open),
        1 => Just(Op::OpenAndReset),
        1 => Just(Op::Close),
        1 => Just(Op::CloseAndReset),
        6 => Just(Op::Update),
    ]
}

fn curve_strategy() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::Linear), Just(Curve::Eased)]
}

fn apply(timer: &mut AnimationTimer, op: Op) {
    match op {
        Op::Open => timer.open(),
        Op::OpenAndReset => timer.open_and_reset(),
        Op::Close => timer.close(),
        Op::CloseAndReset => timer.close_and_reset(),
        Op::Update => timer.update(),
    }
}

/// Worst-case frame budget for either curve: linear needs `max / speed`
/// frames, eased shrinks the remaining distance but never steps less than
/// `1 / speed`, so `max * speed` frames always suffice.
fn frame_budget(speed: f32, max: f32) -> usize {
    (max * speed) as usize + 4
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bounded counter under arbitrary op sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn counter_stays_in_bounds(
        speed in 1.0f32..60.0,
        max in 1.0f32..500.0,
        curve in curve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..200),
    ) {
        let mut timer = AnimationTimer::new(speed, max).with_curve(curve);
        for op in ops {
            apply(&mut timer, op);
            prop_assert!(timer.value() >= 0.0, "value {} below 0", timer.value());
            prop_assert!(timer.value() <= max, "value {} above max {max}", timer.value());
            prop_assert!((0.0..=1.0).contains(&timer.progress()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Finite convergence from any reachable intermediate value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn opening_settles_within_budget(
        speed in 1.0f32..60.0,
        max in 1.0f32..500.0,
        curve in curve_strategy(),
        warmup in proptest::collection::vec(op_strategy(), 0..50),
    ) {
        let mut timer = AnimationTimer::new(speed, max).with_curve(curve);
        for op in warmup {
            apply(&mut timer, op);
        }
        timer.open();
        let mut settled = false;
        for _ in 0..frame_budget(speed, max) {
            timer.update();
            if timer.state() == TimerState::Opened {
                settled = true;
                break;
            }
        }
        prop_assert!(settled, "never settled: {timer:?}");
        prop_assert_eq!(timer.value(), max);
    }

    #[test]
    fn closing_settles_within_budget(
        speed in 1.0f32..60.0,
        max in 1.0f32..500.0,
        curve in curve_strategy(),
        warmup in proptest::collection::vec(op_strategy(), 0..50),
    ) {
        let mut timer = AnimationTimer::new(speed, max).with_curve(curve);
        for op in warmup {
            apply(&mut timer, op);
        }
        timer.close();
        let mut settled = false;
        for _ in 0..frame_budget(speed, max) {
            timer.update();
            if timer.state() == TimerState::Closed {
                settled = true;
                break;
            }
        }
        prop_assert!(settled, "never settled: {timer:?}");
        prop_assert_eq!(timer.value(), 0.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Single-fire callbacks across arbitrary histories
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hooks_fire_once_per_settle_transition(
        speed in 1.0f32..20.0,
        max in 1.0f32..200.0,
        curve in curve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..300),
    ) {
        let opened = Rc::new(Cell::new(0u32));
        let closed = Rc::new(Cell::new(0u32));
        let (o, c) = (Rc::clone(&opened), Rc::clone(&closed));
        let mut timer = AnimationTimer::new(speed, max)
            .with_curve(curve)
            .with_on_opened(move || o.set(o.get() + 1))
            .with_on_closed(move || c.set(c.get() + 1));

        let mut expected_opened = 0u32;
        let mut expected_closed = 0u32;
        for op in ops {
            let before = timer.state();
            apply(&mut timer, op);
            if before != TimerState::Opened && timer.state() == TimerState::Opened {
                expected_opened += 1;
            }
            if before != TimerState::Closed && timer.state() == TimerState::Closed {
                expected_closed += 1;
            }
        }
        prop_assert_eq!(opened.get(), expected_opened);
        prop_assert_eq!(closed.get(), expected_closed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Resumable reversal never snaps to a bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reversal_resumes_from_current_value(
        speed in 2.0f32..30.0,
        max in 10.0f32..500.0,
        curve in curve_strategy(),
        open_frames in 1usize..20,
    ) {
        let mut timer = AnimationTimer::new(speed, max).with_curve(curve);
        timer.open_and_reset();
        for _ in 0..open_frames {
            timer.update();
        }
        // Whether still opening or already settled, reversal resumes from
        // the current value; after one opening update it is strictly
        // positive, so one closing update must strictly decrease it.
        let x = timer.value();
        prop_assert!(x > 0.0);
        timer.close();
        timer.update();
        prop_assert!(timer.value() < x, "expected decrease from {x}, got {}", timer.value());
        prop_assert!(timer.value() >= 0.0);
    }
}
