//! Snap resolver: round a released drag to the nearest item boundary.

/// Round `angle` to the nearest multiple of `step`.
///
/// The remainder is truncated (it keeps the sign of `angle`). The result is
/// not clamped.
pub fn snap_to_step(angle: f64, step: f64) -> f64 {
    let remainder = angle % step;
    if remainder.abs() > step / 2.0 {
        angle + (step * remainder.signum() - remainder)
    } else {
        angle - remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_backward_below_half() {
        assert!((snap_to_step(50.0, 12.0) - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap_forward_above_half() {
        assert!((snap_to_step(55.0, 12.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap_exact_half_goes_backward() {
        assert!((snap_to_step(54.0, 12.0) - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap_on_boundary_is_stable() {
        assert!((snap_to_step(36.0, 12.0) - 36.0).abs() < 1e-9);
        assert!(snap_to_step(0.0, 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_snap_negative_angles_mirror() {
        assert!((snap_to_step(-50.0, 12.0) + 48.0).abs() < 1e-9);
        assert!((snap_to_step(-55.0, 12.0) + 60.0).abs() < 1e-9);
    }
}
