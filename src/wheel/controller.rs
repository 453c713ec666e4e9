//! Input controller: typed scroll events and the state transition they drive.
//!
//! Wheel and drag input both land in [`ScrollState::apply`]. Each transition
//! finishes through the shared clamp, so the target never leaves its bounds.

use super::snap::snap_to_step;
use super::state::{DragAnchor, ScrollState};

/// One input-driven change to the scroll state.
///
/// Pointer positions and wheel deltas are in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Wheel turned; positive delta scrolls toward later items.
    WheelScrolled(f64),
    /// Pointer pressed inside the widget at this y.
    DragStarted(f64),
    /// Pointer moved to this y (anywhere on screen).
    DragMoved(f64),
    /// Pointer released (anywhere on screen).
    DragReleased,
}

impl ScrollState {
    /// Apply one event.
    pub fn apply(&mut self, event: ScrollEvent) {
        match event {
            ScrollEvent::WheelScrolled(delta) => self.wheel(delta),
            ScrollEvent::DragStarted(y) => self.drag_start(y),
            ScrollEvent::DragMoved(y) => self.drag_move(y),
            ScrollEvent::DragReleased => self.drag_release(),
        }
    }

    /// Wheel input: no snapping, the target rests wherever it lands.
    pub fn wheel(&mut self, delta: f64) {
        self.set_target(self.target_angle + delta * self.tuning.scroll_sensitivity);
    }

    /// Begin a drag. Easing is suspended until release.
    pub fn drag_start(&mut self, y: f64) {
        self.drag = Some(DragAnchor {
            y,
            angle: self.target_angle,
        });
        self.current_angle = self.target_angle;
    }

    /// Track the pointer. Moving down reveals earlier items.
    pub fn drag_move(&mut self, y: f64) {
        let Some(anchor) = self.drag else {
            return;
        };
        self.set_target(anchor.angle - (y - anchor.y) * self.tuning.drag_sensitivity);
    }

    /// End a drag and snap to the nearest item. Ignored when not dragging.
    pub fn drag_release(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.snap();
    }

    /// Round the target to the nearest item boundary, then re-clamp.
    pub fn snap(&mut self) {
        if self.step_angle <= 0.0 {
            return;
        }
        self.set_target(snap_to_step(self.target_angle, self.step_angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::state::{ScrollBounds, ScrollTuning};
    use proptest::prelude::*;

    const STEP: f64 = 12.0;
    const MAX: f64 = 59.0 * STEP;

    fn state() -> ScrollState {
        ScrollState::new(STEP, ScrollBounds::up_to(MAX), ScrollTuning::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_wheel_adds_scaled_delta() {
        let mut state = state();
        state.apply(ScrollEvent::WheelScrolled(100.0));
        assert!(approx(state.target_angle(), 10.0));
        state.apply(ScrollEvent::WheelScrolled(-30.0));
        assert!(approx(state.target_angle(), 7.0));
        // No snapping on wheel input
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_wheel_clamps_both_ends() {
        let mut state = state();
        state.apply(ScrollEvent::WheelScrolled(-500.0));
        assert!(approx(state.target_angle(), 0.0));
        state.apply(ScrollEvent::WheelScrolled(1_000_000.0));
        assert!(approx(state.target_angle(), MAX));
    }

    #[test]
    fn test_drag_tracks_pointer_one_to_one() {
        let mut state = state();
        state.apply(ScrollEvent::WheelScrolled(2000.0));
        assert!(approx(state.target_angle(), 200.0));

        state.apply(ScrollEvent::DragStarted(300.0));
        assert!(state.is_dragging());
        assert!(approx(state.current_angle(), state.target_angle()));

        for d in [-40.0, -10.0, 0.0, 25.0, 90.0] {
            state.apply(ScrollEvent::DragMoved(300.0 + d));
            assert!(approx(state.target_angle(), 200.0 - d * 0.5));
            assert!(approx(state.current_angle(), state.target_angle()));
        }
    }

    #[test]
    fn test_drag_move_ignored_when_not_dragging() {
        let mut state = state();
        state.apply(ScrollEvent::DragMoved(500.0));
        assert!(approx(state.target_angle(), 0.0));
    }

    #[test]
    fn test_drag_up_reveals_later_items() {
        let mut state = state();
        state.apply(ScrollEvent::DragStarted(400.0));
        state.apply(ScrollEvent::DragMoved(300.0));
        assert!(approx(state.target_angle(), 50.0));
    }

    #[test]
    fn test_release_snaps_to_nearest_item() {
        let mut state = state();
        state.apply(ScrollEvent::DragStarted(400.0));
        state.apply(ScrollEvent::DragMoved(300.0)); // 50 degrees
        state.apply(ScrollEvent::DragReleased);
        assert!(!state.is_dragging());
        assert!(approx(state.target_angle(), 48.0));

        state.apply(ScrollEvent::DragStarted(0.0));
        state.apply(ScrollEvent::DragMoved(-14.0)); // 48 + 7 = 55 degrees
        state.apply(ScrollEvent::DragReleased);
        assert!(approx(state.target_angle(), 60.0));
    }

    #[test]
    fn test_release_without_drag_does_not_snap() {
        let mut state = state();
        state.apply(ScrollEvent::WheelScrolled(50.0));
        state.apply(ScrollEvent::DragReleased);
        assert!(approx(state.target_angle(), 5.0));
    }

    #[test]
    fn test_snap_near_max_stays_in_bounds() {
        let mut state = state();
        state.apply(ScrollEvent::WheelScrolled((MAX - 1.0) * 10.0));
        assert!(approx(state.target_angle(), MAX - 1.0));
        state.apply(ScrollEvent::DragStarted(0.0));
        state.apply(ScrollEvent::DragReleased);
        assert!(state.target_angle() <= MAX);
        assert!(approx(state.target_angle(), MAX));
    }

    #[test]
    fn test_snap_reclamps_when_max_is_off_grid() {
        // max sits 9 degrees past the last boundary; rounding up would escape
        let mut state = ScrollState::new(STEP, ScrollBounds::up_to(57.0), ScrollTuning::default());
        state.apply(ScrollEvent::WheelScrolled(570.0));
        state.apply(ScrollEvent::DragStarted(0.0));
        state.apply(ScrollEvent::DragReleased);
        assert!(approx(state.target_angle(), 57.0));
    }

    #[test]
    fn test_clamp_holds_for_mixed_sequences() {
        let mut state = state();
        let events = [
            ScrollEvent::WheelScrolled(-120.0),
            ScrollEvent::DragStarted(10.0),
            ScrollEvent::DragMoved(-5000.0),
            ScrollEvent::WheelScrolled(300.0),
            ScrollEvent::DragMoved(9000.0),
            ScrollEvent::DragReleased,
            ScrollEvent::WheelScrolled(99_999.0),
            ScrollEvent::DragStarted(0.0),
            ScrollEvent::DragMoved(-3.0),
            ScrollEvent::DragReleased,
        ];
        for event in events {
            state.apply(event);
            assert!(state.bounds().contains(state.target_angle()), "{event:?}");
            if state.is_dragging() {
                assert!(approx(state.current_angle(), state.target_angle()));
            }
        }
    }

    fn arb_event() -> impl Strategy<Value = ScrollEvent> {
        prop_oneof![
            (-5_000.0..5_000.0_f64).prop_map(ScrollEvent::WheelScrolled),
            (-2_000.0..2_000.0_f64).prop_map(ScrollEvent::DragStarted),
            (-20_000.0..20_000.0_f64).prop_map(ScrollEvent::DragMoved),
            Just(ScrollEvent::DragReleased),
        ]
    }

    proptest! {
        /// The target stays in bounds after every event, whatever the order
        #[test]
        fn test_clamp_holds_for_any_sequence(
            step in 0.5..30.0_f64,
            count in 1usize..120,
            events in prop::collection::vec(arb_event(), 0..200),
        ) {
            #[allow(clippy::cast_precision_loss)]
            let max = (count - 1) as f64 * step;
            let mut state = ScrollState::new(step, ScrollBounds::up_to(max), ScrollTuning::default());

            for event in events {
                state.apply(event);
                prop_assert!(state.bounds().contains(state.target_angle()), "{:?} -> {}", event, state.target_angle());
                if state.is_dragging() {
                    prop_assert!(approx(state.current_angle(), state.target_angle()));
                }
            }
        }

        /// A completed drag always ends on an item boundary or a bound
        #[test]
        fn test_release_lands_on_grid(
            start in 0.0..400.0_f64,
            moves in prop::collection::vec(-20_000.0..20_000.0_f64, 1..20),
        ) {
            let mut state = state();
            state.apply(ScrollEvent::DragStarted(start));
            for y in moves {
                state.apply(ScrollEvent::DragMoved(y));
            }
            state.apply(ScrollEvent::DragReleased);

            let target = state.target_angle();
            let offset = (target / STEP - (target / STEP).round()).abs();
            prop_assert!(!state.is_dragging());
            prop_assert!(offset < 1e-9 || approx(target, MAX), "{}", target);
        }
    }
}
