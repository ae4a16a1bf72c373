mod label;

pub use label::parse_star_label;

use serde::Serialize;

use crate::error::{ConfigError, GeometryError, Result};
use crate::math::gcd;

/// Outer circle radius used when settings do not override it.
pub const DEFAULT_OUTER_RADIUS: f64 = 3.0;

/// A `{points/skip}` star polygon in lowest terms.
///
/// Invariants: `0 < skip < points` and `gcd(points, skip) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StarParameters {
    points: u32,
    skip: u32,
}

impl StarParameters {
    /// Builds star parameters from a raw ratio, reducing it to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStar`] if either value is non-positive,
    /// too large, or `skip >= points`.
    pub fn new(points: i64, skip: i64) -> std::result::Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidStar {
            points,
            skip,
            reason,
        };
        if points <= 0 || skip <= 0 {
            return Err(invalid("points and skip must be positive"));
        }
        if skip >= points {
            return Err(invalid("skip must be less than points"));
        }
        let p = u32::try_from(points).map_err(|_| invalid("points is too large"))?;
        let s = u32::try_from(skip).map_err(|_| invalid("skip is too large"))?;

        let g = gcd(u64::from(p), u64::from(s));
        // g divides both, so the quotients fit back into u32
        #[allow(clippy::cast_possible_truncation)]
        let g = g as u32;
        Ok(Self {
            points: p / g,
            skip: s / g,
        })
    }

    /// Parses and reduces a `{points/skip}` label.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the label is malformed or names an
    /// invalid star.
    pub fn from_label(label: &str) -> std::result::Result<Self, ConfigError> {
        let (points, skip) = parse_star_label(label)?;
        Self::new(points, skip)
    }

    /// Number of vertices of the star polygon.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Step between connected vertices.
    #[must_use]
    pub fn skip(&self) -> u32 {
        self.skip
    }

    /// `points - skip`: the size of the forward (green) family and the
    /// number of dots sampled in the blue construction pass.
    #[must_use]
    pub fn complement(&self) -> u32 {
        self.points - self.skip
    }

    /// `points / skip` as a float: the spin-to-orbit ratio of the rolling circle.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.points) / f64::from(self.skip)
    }
}

impl std::fmt::Display for StarParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}/{}}}", self.points, self.skip)
    }
}

/// Reduces a `(points, skip)` ratio to lowest terms.
///
/// # Errors
///
/// Returns an invalid-config error when the pair does not describe a star.
pub fn reduce_star_label(points: i64, skip: i64) -> Result<(u32, u32)> {
    let star = StarParameters::new(points, skip)?;
    Ok((star.points(), star.skip()))
}

/// The fixed outer circle and the inner circle rolling inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circles {
    outer_radius: f64,
    inner_radius: f64,
}

impl Circles {
    /// Derives the inner radius `R * skip / points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the outer radius is not a positive finite number.
    pub fn new(outer_radius: f64, star: &StarParameters) -> Result<Self> {
        if !outer_radius.is_finite() || outer_radius <= 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "outer radius must be positive and finite, got {outer_radius}"
            ))
            .into());
        }
        let inner_radius = outer_radius * f64::from(star.skip()) / f64::from(star.points());
        Ok(Self {
            outer_radius,
            inner_radius,
        })
    }

    /// Radius `R` of the fixed circle centred on the origin.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Radius `r` of the rolling circle.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Distance `R - r` between the two centres.
    #[must_use]
    pub fn center_distance(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn five_two_is_already_reduced() {
        let star = StarParameters::new(5, 2).unwrap();
        assert_eq!((star.points(), star.skip()), (5, 2));
        assert_eq!(star.complement(), 3);
    }

    #[test]
    fn reduces_to_lowest_terms() {
        assert_eq!(reduce_star_label(10, 4).unwrap(), (5, 2));
        assert_eq!(reduce_star_label(12, 3).unwrap(), (4, 1));
    }

    #[test]
    fn reduction_is_coprime_same_ratio_and_idempotent() {
        for p in 2..40_i64 {
            for s in 1..p {
                let (rp, rs) = reduce_star_label(p, s).unwrap();
                assert_eq!(gcd(u64::from(rp), u64::from(rs)), 1);
                assert_eq!(p * i64::from(rs), s * i64::from(rp));
                let again = reduce_star_label(i64::from(rp), i64::from(rs)).unwrap();
                assert_eq!(again, (rp, rs));
            }
        }
    }

    #[test]
    fn equal_points_and_skip_is_invalid_config() {
        let err = reduce_star_label(4, 4).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn rejects_non_positive_and_inverted() {
        assert!(StarParameters::new(0, 1).is_err());
        assert!(StarParameters::new(5, 0).is_err());
        assert!(StarParameters::new(-5, 2).is_err());
        assert!(StarParameters::new(3, 5).is_err());
    }

    #[test]
    fn from_label_reduces() {
        let star = StarParameters::from_label("{14/4}").unwrap();
        assert_eq!(star.to_string(), "{7/2}");
    }

    #[test]
    fn inner_radius_scales_by_ratio() {
        let star = StarParameters::new(5, 2).unwrap();
        let circles = Circles::new(3.0, &star).unwrap();
        assert!((circles.inner_radius() - 1.2).abs() < TOLERANCE);
        assert!((circles.center_distance() - 1.8).abs() < TOLERANCE);
        assert!(circles.inner_radius() < circles.outer_radius());
    }

    #[test]
    fn rejects_bad_outer_radius() {
        let star = StarParameters::new(5, 2).unwrap();
        assert!(Circles::new(0.0, &star).is_err());
        assert!(Circles::new(-1.0, &star).is_err());
        assert!(Circles::new(f64::NAN, &star).is_err());
    }
}
