//! The star path: the curve traced by a point on the rim of a circle rolling
//! inside a larger fixed circle.

mod sample;
mod star_path;

pub use sample::{Polyline, SampleParams};
pub use star_path::{traced_point, StarPath};

use serde::Serialize;

/// Parameter domain of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range (exclusive for closed paths).
    pub t_max: f64,
}

impl PathDomain {
    /// Creates a new path domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}
