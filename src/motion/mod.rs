//! Travel of polygon families along the star path.

mod ease;
mod interpolate;
mod plan;

pub use ease::RateFunc;
pub use interpolate::{interpolate, PathPose};
pub use plan::{plan_motion, Family, PathMotionSpec, PlanMotion};
