pub mod polygon_2d;
pub mod rotate_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Wraps a path parameter into `[0, 1)` via `t - floor(t)`.
#[must_use]
pub fn wrap_unit(t: f64) -> f64 {
    let wrapped = t - t.floor();
    // -1e-17 - floor(-1e-17) rounds up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Greatest common divisor of two non-negative integers (Euclid).
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_unit_keeps_unit_interval() {
        assert!((wrap_unit(0.25) - 0.25).abs() < TOLERANCE);
        assert!((wrap_unit(2.25) - 0.25).abs() < TOLERANCE);
        assert!((wrap_unit(-0.25) - 0.75).abs() < TOLERANCE);
        assert!(wrap_unit(3.0).abs() < TOLERANCE);
    }

    #[test]
    fn wrap_unit_never_returns_one() {
        let w = wrap_unit(-1e-17);
        assert!((0.0..1.0).contains(&w));
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(10, 4), 2);
        assert_eq!(gcd(4, 10), 2);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }
}
