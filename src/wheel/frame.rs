//! Render loop: per-frame easing and visibility culling.
//!
//! The host ticker calls [`FrameLoop::step`] once per frame. Each step eases
//! the drawn angle toward the target (or follows it exactly while dragging)
//! and recomputes which items face the viewer.

use super::items::ItemLayout;
use super::state::ScrollState;

/// Items further than this from the front (degrees) face away and are hidden.
pub const VISIBILITY_LIMIT: f64 = 90.0;

/// Whether an item at `item_angle` faces the viewer at rotation `current_angle`.
#[inline]
pub fn is_visible(item_angle: f64, current_angle: f64) -> bool {
    (item_angle + current_angle).abs() < VISIBILITY_LIMIT
}

/// One easing step from `current` toward `target`.
///
/// Settles exactly on `target` once the gap is at most `epsilon`.
#[inline]
pub fn ease_toward(current: f64, target: f64, factor: f64, epsilon: f64) -> f64 {
    let diff = target - current;
    if diff.abs() > epsilon {
        current + diff * factor
    } else {
        target
    }
}

impl ScrollState {
    /// Advance the drawn angle by one frame.
    pub fn tick(&mut self) {
        self.current_angle = if self.is_dragging() {
            self.target_angle
        } else {
            ease_toward(
                self.current_angle,
                self.target_angle,
                self.tuning.ease_factor,
                self.tuning.settle_epsilon,
            )
        };
    }
}

/// What one frame produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Frame number since the loop started.
    pub number: u64,
    /// Rotation applied to the cylinder this frame.
    pub rotation: f64,
    /// Visibility per item, indexed like the layout.
    pub visible: Vec<bool>,
}

impl Frame {
    /// Indices of visible items, in order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, &shown)| shown.then_some(index))
    }
}

/// Frame driver with an explicit run flag.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
    last: Frame,
}

impl FrameLoop {
    /// A loop that is running and has produced no frames yet.
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    /// Whether frames are being produced.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop producing frames; `step` becomes a no-op.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Resume producing frames.
    pub const fn resume(&mut self) {
        self.running = true;
    }

    /// Number of frames produced so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The most recent frame.
    pub const fn last(&self) -> &Frame {
        &self.last
    }

    /// Run one frame: ease, apply the rotation, cull.
    ///
    /// Returns `None` when stopped.
    pub fn step(&mut self, state: &mut ScrollState, layout: &ItemLayout) -> Option<&Frame> {
        if !self.running {
            return None;
        }

        state.tick();
        let rotation = state.current_angle();

        self.last.number = self.frames;
        self.last.rotation = rotation;
        self.last.visible.clear();
        self.last.visible.extend(
            layout
                .items()
                .iter()
                .map(|item| is_visible(item.angle(), rotation)),
        );
        self.frames += 1;

        Some(&self.last)
    }
}
