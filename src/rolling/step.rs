use std::f64::consts::TAU;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::error::{GeometryError, Result};

/// Rotation increments for one tick of a rolling circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RollStep {
    /// Rotation about the outer circle's centre, in radians.
    pub orbital: f64,
    /// Rotation about the rolling circle's own centre, in radians.
    pub spin: f64,
}

impl RollStep {
    /// Returns `true` if the step moves nothing.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.orbital == 0.0 && self.spin == 0.0
    }

    /// Net rotation of the rolling body's orientation.
    ///
    /// Rotating about two different pivots composes to a single rotation by
    /// the sum of the angles, plus a translation.
    #[must_use]
    pub fn net_rotation(&self) -> f64 {
        self.orbital + self.spin
    }
}

impl Add for RollStep {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            orbital: self.orbital + rhs.orbital,
            spin: self.spin + rhs.spin,
        }
    }
}

impl AddAssign for RollStep {
    fn add_assign(&mut self, rhs: Self) {
        self.orbital += rhs.orbital;
        self.spin += rhs.spin;
    }
}

/// Computes the rotations of a circle rolling without slipping for `dt`
/// seconds, when one full trip around the outer circle takes `roll_duration`.
///
/// The orbit is `dt * 2π / D`; the spin runs the opposite way, scaled by
/// `points / skip`. A negative `roll_duration` rolls backwards.
///
/// # Errors
///
/// Returns [`GeometryError::DivisionByZero`] if `roll_duration` or `skip` is
/// zero.
pub fn roll_step(dt: f64, roll_duration: f64, points: u32, skip: u32) -> Result<RollStep> {
    if roll_duration == 0.0 {
        return Err(GeometryError::DivisionByZero("roll duration is zero").into());
    }
    if skip == 0 {
        return Err(GeometryError::DivisionByZero("star skip is zero").into());
    }
    if dt == 0.0 {
        return Ok(RollStep::default());
    }
    let orbital = dt * TAU / roll_duration;
    let spin = -orbital * f64::from(points) / f64::from(skip);
    Ok(RollStep { orbital, spin })
}
