use serde::Serialize;
use tracing::debug;

use crate::error::{GeometryError, Result};

/// Which family of polygon copies a plan is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Green polygons, one per blue anchor: `N = points - skip` members,
    /// phases `i / N`, rotating against the travel by default.
    Forward,
    /// Blue polygons, one per green anchor: `M = skip` members, phases
    /// `(M - i) / M`, rotating with the travel by default.
    Reverse,
}

impl Family {
    /// Phase of member `i` of a family of `size` along the path.
    #[must_use]
    pub fn start_param(self, index: usize, size: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let (i, n) = (index as f64, size as f64);
        match self {
            Self::Forward => i / n,
            Self::Reverse => (n - i) / n,
        }
    }

    /// Turns per lap applied when no direction is given: `-N` for the
    /// forward family, `+M` for the reverse one.
    #[must_use]
    pub fn default_direction(self, size: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = size as f64;
        match self {
            Self::Forward => -n,
            Self::Reverse => n,
        }
    }
}

/// How one polygon copy travels along the star path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathMotionSpec {
    /// Member index within its family.
    pub index: usize,
    /// Path parameter at `alpha = 0` (unwrapped).
    pub start: f64,
    /// Path parameter at `alpha = 1` (unwrapped).
    pub end: f64,
    /// Full turns about the group's centre per lap of the path.
    pub direction: f64,
    /// Run time of the whole transition, in seconds.
    pub run_time: f64,
    /// Number of laps.
    pub repeats: u32,
}

impl PathMotionSpec {
    /// Path distance covered, in laps.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Plans the synchronized travel of every member of one family.
///
/// All members share the run time `duration * repeats`; their phases are
/// staggered so they are shifted copies of one wave along the path.
pub struct PlanMotion {
    family_size: usize,
    repeats: u32,
    duration: f64,
    family: Family,
    direction: Option<f64>,
}

impl PlanMotion {
    /// Creates a new `PlanMotion` operation.
    ///
    /// * `duration` - Seconds per lap.
    #[must_use]
    pub fn new(family_size: usize, repeats: u32, duration: f64, family: Family) -> Self {
        Self {
            family_size,
            repeats,
            duration,
            family,
            direction: None,
        }
    }

    /// Overrides the family's default turns per lap.
    #[must_use]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Executes the plan, returning one spec per member in index order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for an empty family and
    /// [`GeometryError::InvalidInput`] for a negative or non-finite duration
    /// or direction.
    pub fn execute(&self) -> Result<Vec<PathMotionSpec>> {
        if self.family_size == 0 {
            return Err(GeometryError::DivisionByZero("family size is zero").into());
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "duration must be non-negative, got {}",
                self.duration
            ))
            .into());
        }
        let direction = self
            .direction
            .unwrap_or_else(|| self.family.default_direction(self.family_size));
        if !direction.is_finite() {
            return Err(GeometryError::InvalidInput(format!(
                "direction must be finite, got {direction}"
            ))
            .into());
        }

        let laps = f64::from(self.repeats);
        let run_time = self.duration * laps;
        let specs: Vec<_> = (0..self.family_size)
            .map(|index| {
                let start = self.family.start_param(index, self.family_size);
                PathMotionSpec {
                    index,
                    start,
                    end: laps + start,
                    direction,
                    run_time,
                    repeats: self.repeats,
                }
            })
            .collect();

        debug!(
            family = ?self.family,
            size = self.family_size,
            repeats = self.repeats,
            run_time,
            direction,
            "planned family motion"
        );
        Ok(specs)
    }
}

/// Plans a family's motion with the default direction.
///
/// `forward` selects [`Family::Forward`], otherwise [`Family::Reverse`].
///
/// # Errors
///
/// See [`PlanMotion::execute`].
pub fn plan_motion(
    family_size: usize,
    repeats: u32,
    duration: f64,
    forward: bool,
) -> Result<Vec<PathMotionSpec>> {
    let family = if forward {
        Family::Forward
    } else {
        Family::Reverse
    };
    PlanMotion::new(family_size, repeats, duration, family).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn forward_five_two() {
        let specs = plan_motion(3, 2, 4.0, true).unwrap();
        assert_eq!(specs.len(), 3);
        for (i, expected) in [0.0, 1.0 / 3.0, 2.0 / 3.0].iter().enumerate() {
            assert_relative_eq!(specs[i].start, *expected);
            assert_relative_eq!(specs[i].end, specs[i].start + 2.0);
            assert_relative_eq!(specs[i].run_time, 8.0);
            assert_relative_eq!(specs[i].direction, -3.0);
            assert_eq!(specs[i].index, i);
        }
    }

    #[test]
    fn reverse_five_two() {
        let specs = plan_motion(2, 3, 1.5, false).unwrap();
        assert_relative_eq!(specs[0].start, 1.0);
        assert_relative_eq!(specs[1].start, 0.5);
        assert_relative_eq!(specs[1].end, 3.5);
        assert_relative_eq!(specs[0].direction, 2.0);
        assert_relative_eq!(specs[0].run_time, 4.5);
    }

    #[test]
    fn direction_override() {
        let specs = PlanMotion::new(3, 1, 1.0, Family::Forward)
            .with_direction(0.5)
            .execute()
            .unwrap();
        assert!(specs.iter().all(|s| (s.direction - 0.5).abs() < 1e-12));
    }

    #[test]
    fn zero_repeats_has_no_span() {
        let specs = plan_motion(4, 0, 2.0, true).unwrap();
        for s in &specs {
            assert!(s.span().abs() < 1e-12);
            assert!(s.run_time.abs() < 1e-12);
        }
    }

    #[test]
    fn empty_family_is_division_by_zero() {
        let err = plan_motion(0, 2, 1.0, true).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(plan_motion(3, 2, -1.0, true).is_err());
        assert!(plan_motion(3, 2, f64::NAN, false).is_err());
    }
}
