use std::f64::consts::TAU;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::math::rotate_2d::rotate_about;
use crate::math::Point2;
use crate::rolling::{RollKind, RollingBody, RollingPhase};
use crate::star::{Circles, StarParameters};

use super::polygon::PolygonGroup;

/// Colour of a construction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotColor {
    Green,
    Blue,
}

/// A point sampled from the traced dot during a construction pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleDot {
    /// Order in which the dot was sampled within its pass.
    pub index: usize,
    /// Pass that produced the dot.
    pub color: DotColor,
    /// Position of the dot.
    pub position: Point2,
}

impl SampleDot {
    /// Creates a new sample dot.
    #[must_use]
    pub fn new(index: usize, color: DotColor, position: Point2) -> Self {
        Self {
            index,
            color,
            position,
        }
    }
}

/// Samples the green polygon: `skip` dots around the rolling circle.
///
/// The circle rolls slowly; after each `duration / skip` seconds the traced
/// dot is copied and the copy turned by `2π j / skip` about the circle's
/// centre. Copies ride along with the circle, which finally unrolls back to
/// its start pose, leaving a regular `skip`-gon inscribed in the circle.
pub struct SampleGreenPass {
    star: StarParameters,
    circles: Circles,
    duration: f64,
}

impl SampleGreenPass {
    /// Creates a new `SampleGreenPass` operation.
    ///
    /// * `duration` - Configured green polygon duration, in seconds.
    #[must_use]
    pub fn new(star: StarParameters, circles: Circles, duration: f64) -> Self {
        Self {
            star,
            circles,
            duration,
        }
    }

    /// Executes the pass.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if `duration` is zero.
    pub fn execute(&self) -> Result<PolygonGroup> {
        let skip = self.star.skip();
        let step_time = self.duration / f64::from(skip);

        let mut body = RollingBody::at_start(&self.circles);
        let mut rolling = RollingPhase::new(RollKind::GreenRolling, self.star, self.duration);
        let first = *body.dot();
        body.attach(first);

        for j in 1..skip {
            rolling.tick(&mut body, step_time)?;
            let turn = TAU * f64::from(j) / f64::from(skip);
            let turned = rotate_about(body.dot(), body.center(), turn);
            body.attach(turned);
        }

        let mut unrolling = RollingPhase::new(RollKind::GreenUnrolling, self.star, self.duration);
        unrolling.tick(&mut body, step_time * f64::from(skip - 1))?;

        let dots: Vec<_> = body
            .detach_all()
            .into_iter()
            .enumerate()
            .map(|(i, p)| SampleDot::new(i, DotColor::Green, p))
            .collect();
        debug!(star = %self.star, count = dots.len(), "sampled green dots");
        Ok(PolygonGroup::new(DotColor::Green, dots))
    }
}

/// Samples the blue polygon: `points - skip` traced-dot positions spaced
/// evenly in path parameter, `j / (points - skip)`.
pub struct SampleBluePass {
    star: StarParameters,
    circles: Circles,
    duration: f64,
}

impl SampleBluePass {
    /// Creates a new `SampleBluePass` operation.
    ///
    /// * `duration` - Configured blue polygon duration, in seconds.
    #[must_use]
    pub fn new(star: StarParameters, circles: Circles, duration: f64) -> Self {
        Self {
            star,
            circles,
            duration,
        }
    }

    /// Executes the pass.
    ///
    /// # Errors
    ///
    /// Returns a division-by-zero error if `duration` is zero.
    pub fn execute(&self) -> Result<PolygonGroup> {
        let count = self.star.complement();
        let step_time = self.duration / f64::from(count);

        let mut body = RollingBody::at_start(&self.circles);
        let mut rolling = RollingPhase::new(RollKind::BlueRolling, self.star, self.duration);
        let mut dots = vec![SampleDot::new(0, DotColor::Blue, *body.dot())];

        for j in 1..count as usize {
            rolling.tick(&mut body, step_time)?;
            dots.push(SampleDot::new(j, DotColor::Blue, *body.dot()));
        }
        debug!(star = %self.star, count = dots.len(), "sampled blue dots");
        Ok(PolygonGroup::new(DotColor::Blue, dots))
    }
}
