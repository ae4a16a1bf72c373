use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::math::rotate_2d::{rotate_about, rotate_all_about};
use crate::math::Point2;
use crate::star::{Circles, StarParameters};

use super::step::{roll_step, RollStep};

/// Accumulated rotations of the rolling circle during one rolling phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RollingState {
    /// Total rotation about the outer circle's centre.
    pub rotation_about_outer_center: f64,
    /// Total rotation about the rolling circle's own centre.
    pub rotation_about_own_center: f64,
}

impl RollingState {
    /// Folds one step into the accumulated rotations.
    pub fn accumulate(&mut self, step: RollStep) {
        self.rotation_about_outer_center += step.orbital;
        self.rotation_about_own_center += step.spin;
    }

    /// Zeroes both rotations.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The rolling circle and everything rigidly attached to it.
///
/// Holds the circle's centre, the traced dot on its rim, and any markers
/// (for example sampled dots) that ride along while it rolls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingBody {
    outer_center: Point2,
    center: Point2,
    dot: Point2,
    markers: Vec<Point2>,
}

impl RollingBody {
    /// Places the rolling circle touching the outer circle on the +x axis,
    /// with the traced dot at the contact point `(R, 0)`.
    #[must_use]
    pub fn at_start(circles: &Circles) -> Self {
        Self {
            outer_center: Point2::origin(),
            center: Point2::new(circles.center_distance(), 0.0),
            dot: Point2::new(circles.outer_radius(), 0.0),
            markers: Vec::new(),
        }
    }

    /// Centre of the rolling circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// The traced dot on the rolling circle's rim.
    #[must_use]
    pub fn dot(&self) -> &Point2 {
        &self.dot
    }

    /// Markers carried along by the body, in attachment order.
    #[must_use]
    pub fn markers(&self) -> &[Point2] {
        &self.markers
    }

    /// Attaches a marker at `point`; returns its index.
    pub fn attach(&mut self, point: Point2) -> usize {
        self.markers.push(point);
        self.markers.len() - 1
    }

    /// Removes and returns every attached marker.
    pub fn detach_all(&mut self) -> Vec<Point2> {
        std::mem::take(&mut self.markers)
    }

    /// Applies one step: orbit about the outer centre, then spin about the
    /// circle's (moved) centre.
    pub fn advance(&mut self, step: RollStep) {
        if step.is_zero() {
            return;
        }
        let outer = self.outer_center;
        self.center = rotate_about(&self.center, &outer, step.orbital);
        self.dot = rotate_about(&self.dot, &outer, step.orbital);
        rotate_all_about(&mut self.markers, &outer, step.orbital);

        let center = self.center;
        self.dot = rotate_about(&self.dot, &center, step.spin);
        rotate_all_about(&mut self.markers, &center, step.spin);
    }
}

/// The named rolling phases of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RollKind {
    /// Traces the whole star path once over the configured duration.
    StarPath,
    /// Slow roll during which the green polygon's dots are sampled.
    GreenRolling,
    /// Reverse roll returning the body (and green dots) to the start pose.
    GreenUnrolling,
    /// Roll during which the blue polygon's dots are sampled.
    BlueRolling,
}

impl RollKind {
    /// Roll duration `D` (time for one orbit) derived from the phase's
    /// configured duration.
    #[must_use]
    pub fn roll_duration(self, star: &StarParameters, configured: f64) -> f64 {
        let skip = f64::from(star.skip());
        match self {
            Self::StarPath | Self::BlueRolling => configured / skip,
            Self::GreenRolling => configured * star.ratio(),
            Self::GreenUnrolling => -configured * star.ratio(),
        }
    }
}

/// Upper bound on the ticks a single [`RollingPhase::run`] may take.
pub const MAX_RUN_TICKS: u64 = 1 << 24;

/// One continuous rolling phase. Owns the [`RollingState`], which starts at
/// zero and is only reset by [`RollingPhase::restart`].
#[derive(Debug, Clone, Serialize)]
pub struct RollingPhase {
    kind: RollKind,
    star: StarParameters,
    roll_duration: f64,
    state: RollingState,
}

impl RollingPhase {
    /// Starts a phase of `kind` for a configured duration.
    #[must_use]
    pub fn new(kind: RollKind, star: StarParameters, configured: f64) -> Self {
        Self {
            kind,
            star,
            roll_duration: kind.roll_duration(&star, configured),
            state: RollingState::default(),
        }
    }

    /// Which phase this is.
    #[must_use]
    pub fn kind(&self) -> RollKind {
        self.kind
    }

    /// Time for one orbit; negative when unrolling.
    #[must_use]
    pub fn roll_duration(&self) -> f64 {
        self.roll_duration
    }

    /// Rotations accumulated so far.
    #[must_use]
    pub fn state(&self) -> &RollingState {
        &self.state
    }

    /// The step this phase produces for `dt`, without applying it.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if the roll duration is zero.
    pub fn step_for(&self, dt: f64) -> Result<RollStep> {
        roll_step(dt, self.roll_duration, self.star.points(), self.star.skip())
    }

    /// Advances `body` by `dt` seconds and records the rotation.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if the roll duration is zero.
    pub fn tick(&mut self, body: &mut RollingBody, dt: f64) -> Result<RollStep> {
        let step = self.step_for(dt)?;
        body.advance(step);
        self.state.accumulate(step);
        Ok(step)
    }

    /// Zeroes the accumulated rotations so the phase can be played again.
    pub fn restart(&mut self) {
        self.state.reset();
    }

    /// Ticks `body` at a fixed frame interval until `duration` seconds have
    /// elapsed; the last tick is shortened to land exactly on `duration`.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll duration is zero, if `duration` is not a
    /// finite non-negative number, if `frame_dt` is not a positive finite
    /// number, or if the run would take more than [`MAX_RUN_TICKS`] ticks.
    pub fn run(&mut self, body: &mut RollingBody, duration: f64, frame_dt: f64) -> Result<()> {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "frame interval must be positive, got {frame_dt}"
            ))
            .into());
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "run duration must be a non-negative number of seconds, got {duration}"
            ))
            .into());
        }
        let ticks = (duration / frame_dt).ceil();
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_RUN_TICKS as f64;
        if ticks > limit {
            return Err(GeometryError::InvalidInput(format!(
                "{duration}s at {frame_dt}s per frame exceeds {MAX_RUN_TICKS} ticks"
            ))
            .into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ticks = ticks as u64;
        for i in 0..ticks {
            #[allow(clippy::cast_precision_loss)]
            let elapsed = i as f64 * frame_dt;
            let dt = frame_dt.min(duration - elapsed).max(0.0);
            self.tick(body, dt)?;
        }
        Ok(())
    }
}
