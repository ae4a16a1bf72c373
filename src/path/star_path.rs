use std::f64::consts::TAU;

use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::star::{Circles, StarParameters};

use super::{PathDomain, Polyline, SampleParams};

/// Position of the traced point at path parameter `t`.
///
/// `t` is the fraction of one full star cycle; the rolling circle orbits the
/// outer centre `skip` times per cycle. Any real `t` is accepted, so callers
/// interpolating across several laps can pass unwrapped values.
///
/// ```text
/// theta = t * 2π * skip
/// x = (R - r) cos(theta) + r cos((R - r) / r * theta)
/// y = (R - r) sin(theta) - r sin((R - r) / r * theta)
/// ```
///
/// Requires `0 < inner_radius < outer_radius`; a zero inner radius yields NaN.
/// [`Circles::new`] enforces this for radii derived from a star.
#[must_use]
pub fn traced_point(outer_radius: f64, inner_radius: f64, skip: u32, t: f64) -> Point2 {
    debug_assert!(
        inner_radius > 0.0 && inner_radius < outer_radius,
        "inner radius {inner_radius} outside (0, {outer_radius})"
    );
    let d = outer_radius - inner_radius;
    let theta = t * TAU * f64::from(skip);
    let k = d / inner_radius;
    Point2::new(
        d * theta.cos() + inner_radius * (k * theta).cos(),
        d * theta.sin() - inner_radius * (k * theta).sin(),
    )
}

/// The closed star path for one pair of circles.
///
/// The path has period 1 in its parameter because the inner radius is
/// `R * skip / points`, so the spin factor `(R - r) / r` equals
/// `(points - skip) / skip`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarPath {
    star: StarParameters,
    circles: Circles,
}

impl StarPath {
    /// Creates the star path for the given star and circles.
    #[must_use]
    pub fn new(star: StarParameters, circles: Circles) -> Self {
        Self { star, circles }
    }

    /// Star parameters the path was built from.
    #[must_use]
    pub fn star(&self) -> &StarParameters {
        &self.star
    }

    /// Circles the path was built from.
    #[must_use]
    pub fn circles(&self) -> &Circles {
        &self.circles
    }

    /// Evaluates the path at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        traced_point(
            self.circles.outer_radius(),
            self.circles.inner_radius(),
            self.star.skip(),
            t,
        )
    }

    /// Unit tangent at `t`, in the direction of increasing `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] at the cusps of the star, where
    /// the traced point momentarily stops.
    pub fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.circles.center_distance();
        let k = d / self.circles.inner_radius();
        let theta = t * TAU * f64::from(self.star.skip());
        // d/dtheta of the traced point; the dtheta/dt factor drops out on normalizing
        let v = Vector2::new(
            -d * (theta.sin() + (k * theta).sin()),
            d * (theta.cos() - (k * theta).cos()),
        );
        let len = v.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate(format!("star path has a cusp at t = {t}")).into());
        }
        Ok(v / len)
    }

    /// Returns the parameter domain, `[0, 1)`.
    #[must_use]
    pub fn domain(&self) -> PathDomain {
        PathDomain::new(0.0, 1.0)
    }

    /// The star path always closes after one cycle.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        true
    }

    /// Path parameters of the star's outer tips (the cusps), in `[0, 1)`.
    ///
    /// The traced point touches the outer circle every time the rolling circle
    /// completes one turn relative to the contact point, `points` times per
    /// cycle.
    #[must_use]
    pub fn cusp_params(&self) -> Vec<f64> {
        let n = self.star.points();
        (0..n).map(|i| f64::from(i) / f64::from(n)).collect()
    }

    /// Samples the path into a closed polyline.
    #[must_use]
    pub fn sample(&self, params: &SampleParams) -> Polyline {
        let n = params.segment_count(self.star.points());
        #[allow(clippy::cast_precision_loss)]
        let points = (0..n)
            .map(|i| self.evaluate(i as f64 / n as f64))
            .collect();
        Polyline {
            points,
            closed: true,
        }
    }
}
