//! Scroll state: the single owner of the cylinder's rotation.
//!
//! `target_angle` is where the cylinder is heading; `current_angle` is what
//! gets drawn. Every mutation of the target goes through [`ScrollBounds::clamp`].

/// Allowed range for the target angle, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Lowest rotation (item 0 facing the viewer).
    pub min: f64,
    /// Highest rotation (last item facing the viewer).
    pub max: f64,
}

impl ScrollBounds {
    /// Bounds for `[0, max]`.
    pub const fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    /// Clamp an angle into range.
    #[inline]
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.min).min(self.max)
    }

    /// Whether `angle` lies within range.
    #[inline]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}

/// Feel constants for input and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTuning {
    /// Degrees per pixel of wheel delta.
    pub scroll_sensitivity: f64,
    /// Degrees per pixel of pointer travel while dragging.
    pub drag_sensitivity: f64,
    /// Fraction of the remaining distance covered per frame.
    pub ease_factor: f64,
    /// Remaining distance (degrees) below which easing settles exactly.
    pub settle_epsilon: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            scroll_sensitivity: 0.1,
            drag_sensitivity: 0.5,
            ease_factor: 0.1,
            settle_epsilon: 0.01,
        }
    }
}

/// An in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer y (pixels) when the drag started.
    pub y: f64,
    /// Target angle when the drag started.
    pub angle: f64,
}

/// Rotation state of one cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub(super) current_angle: f64,
    pub(super) target_angle: f64,
    pub(super) drag: Option<DragAnchor>,
    pub(super) bounds: ScrollBounds,
    pub(super) step_angle: f64,
    pub(super) tuning: ScrollTuning,
}

impl ScrollState {
    /// Create a resting state at rotation 0.
    pub const fn new(step_angle: f64, bounds: ScrollBounds, tuning: ScrollTuning) -> Self {
        Self {
            current_angle: 0.0,
            target_angle: 0.0,
            drag: None,
            bounds,
            step_angle,
            tuning,
        }
    }

    /// Angle actually drawn this frame.
    #[inline]
    pub const fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Angle the cylinder is converging toward.
    #[inline]
    pub const fn target_angle(&self) -> f64 {
        self.target_angle
    }

    /// Whether a drag gesture is active.
    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag anchor, if any.
    #[inline]
    pub const fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    /// Allowed target range.
    #[inline]
    pub const fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    /// Angular spacing between items.
    #[inline]
    pub const fn step_angle(&self) -> f64 {
        self.step_angle
    }

    /// Feel constants.
    #[inline]
    pub const fn tuning(&self) -> ScrollTuning {
        self.tuning
    }

    /// Whether the drawn angle has caught up with the target.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_settled(&self) -> bool {
        self.current_angle == self.target_angle
    }

    /// Set the target, clamped. While dragging the drawn angle follows 1:1.
    pub(super) fn set_target(&mut self, angle: f64) {
        self.target_angle = self.bounds.clamp(angle);
        if self.is_dragging() {
            self.current_angle = self.target_angle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamp() {
        let bounds = ScrollBounds::up_to(100.0);
        assert!((bounds.clamp(-5.0) - 0.0).abs() < f64::EPSILON);
        assert!((bounds.clamp(150.0) - 100.0).abs() < f64::EPSILON);
        assert!((bounds.clamp(42.5) - 42.5).abs() < f64::EPSILON);
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(100.5));
    }

    #[test]
    fn test_set_target_clamps() {
        let mut state = ScrollState::new(12.0, ScrollBounds::up_to(708.0), ScrollTuning::default());
        state.set_target(1000.0);
        assert!((state.target_angle() - 708.0).abs() < f64::EPSILON);
        // Not dragging: the drawn angle lags behind
        assert!(state.current_angle().abs() < f64::EPSILON);
        assert!(!state.is_settled());
    }
}
