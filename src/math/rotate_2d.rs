use nalgebra::Rotation2;

use super::Point2;

/// Rotates point `p` about `pivot` by `angle` radians, counter-clockwise
/// for positive angles.
#[must_use]
pub fn rotate_about(p: Point2, pivot: Point2, angle: f64) -> Point2 {
    pivot + Rotation2::new(angle) * (p - pivot)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn quarter_turn_about_origin() {
        let p = rotate_about(Point2::new(1.0, 0.0), Point2::origin(), FRAC_PI_2);
        assert!((p.x).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_about_self_is_identity() {
        let pivot = Point2::new(3.0, -2.0);
        let p = rotate_about(pivot, pivot, 1.234);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!((p.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let pivot = Point2::new(1.0, 1.0);
        let p = Point2::new(4.0, 5.0);
        let rotated = rotate_about(p, pivot, 0.7);
        let before = (p - pivot).norm();
        let after = (rotated - pivot).norm();
        assert!((before - after).abs() < 1e-12);
    }
}
