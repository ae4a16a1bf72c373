use super::{Point2, Vector2};

/// Rotates `point` counter-clockwise by `angle` radians about `pivot`.
#[must_use]
pub fn rotate_about(point: &Point2, pivot: &Point2, angle: f64) -> Point2 {
    let rot = nalgebra::Rotation2::new(angle);
    pivot + rot * (point - pivot)
}

/// Rotates every point in place about a shared pivot.
pub fn rotate_all_about(points: &mut [Point2], pivot: &Point2, angle: f64) {
    let rot = nalgebra::Rotation2::new(angle);
    for p in points.iter_mut() {
        *p = pivot + rot * (*p - pivot);
    }
}

/// Translates every point in place.
pub fn translate_all(points: &mut [Point2], offset: &Vector2) {
    for p in points.iter_mut() {
        *p += offset;
    }
}
