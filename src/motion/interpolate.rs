use std::f64::consts::TAU;

use serde::Serialize;

use crate::math::{wrap_unit, Point2};
use crate::path::StarPath;

use super::ease::RateFunc;
use super::plan::PathMotionSpec;

/// Where a travelling group should be at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPose {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    /// Wrapped path parameter in `[0, 1)`.
    pub param: f64,
    /// Point on the star path where the group's anchor lands.
    pub position: Point2,
    /// Total rotation about the group's centre since `alpha = 0`, in radians.
    pub rotation: f64,
}

/// Evaluates a motion spec at progress `alpha`.
///
/// The result depends only on `alpha`, never on earlier calls, so hosts can
/// scrub back and forth freely.
#[must_use]
pub fn interpolate(
    spec: &PathMotionSpec,
    path: &StarPath,
    alpha: f64,
    rate: RateFunc,
) -> PathPose {
    let progress = rate.apply(alpha);
    let span = spec.span();
    let param = wrap_unit(spec.start + progress * span);
    PathPose {
        progress,
        param,
        position: path.evaluate(param),
        rotation: progress * spec.direction * TAU * span,
    }
}

impl PathMotionSpec {
    /// Evaluates this spec at progress `alpha`; see [`interpolate`].
    #[must_use]
    pub fn pose_at(&self, path: &StarPath, alpha: f64, rate: RateFunc) -> PathPose {
        interpolate(self, path, alpha, rate)
    }

    /// A per-frame function of progress for a host's update loop.
    ///
    /// The closure owns copies of the spec and the path and holds no
    /// mutable state.
    #[must_use]
    pub fn updater(&self, path: &StarPath, rate: RateFunc) -> impl Fn(f64) -> PathPose {
        let spec = *self;
        let path = *path;
        move |alpha| interpolate(&spec, &path, alpha, rate)
    }
}
