//! The whole demonstration for one set of settings: geometry, sampled
//! polygons, the two families with their travel plans, and the timeline.

mod timeline;

pub use timeline::{Effect, Phase, PhaseKind, Timeline, TravelKind, TRANSITION_TIME, WAIT_TIME};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::construction::{BuildFamily, PolygonFamily, PolygonGroup, SampleBluePass, SampleGreenPass};
use crate::error::Result;
use crate::math::TOLERANCE;
use crate::motion::{Family, PathMotionSpec, RateFunc};
use crate::path::StarPath;
use crate::rolling::{RollKind, RollingBody, RollingPhase};
use crate::star::Circles;

/// Everything the host needs to play one run.
#[derive(Debug, Clone, Serialize)]
pub struct Choreography {
    settings: Settings,
    path: StarPath,
    green: PolygonGroup,
    blue: PolygonGroup,
    green_family: PolygonFamily,
    blue_family: PolygonFamily,
    green_plan: Vec<PathMotionSpec>,
    blue_plan: Vec<PathMotionSpec>,
    timeline: Timeline,
}

impl Choreography {
    /// Builds the geometry, families and timeline for `settings`.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if any construction step degenerates.
    #[tracing::instrument(skip_all, fields(star = %settings.star))]
    pub fn build(settings: &Settings) -> Result<Self> {
        let star = settings.star;
        let circles = Circles::new(settings.outer_radius, &star)?;
        let path = StarPath::new(star, circles);

        let green = SampleGreenPass::new(star, circles, settings.green_polygon_duration).execute()?;
        let blue = SampleBluePass::new(star, circles, settings.blue_polygon_duration).execute()?;

        let green_family = BuildFamily::new(&green, blue.dots(), Family::Forward).execute()?;
        let blue_family = BuildFamily::new(&blue, green.dots(), Family::Reverse).execute()?;

        let green_plan = green_family.plan(settings.animation_repeats, settings.animation_duration)?;
        let blue_plan = blue_family.plan(settings.animation_repeats, settings.animation_duration)?;
        for (family, plan) in [(&green_family, &green_plan), (&blue_family, &blue_plan)] {
            for index in off_anchor_members(&path, family, plan) {
                warn!(
                    family = ?family.family(),
                    index,
                    "planned start is off the member's anchor; the copy jumps when travel begins"
                );
            }
        }

        let timeline = Timeline::for_settings(settings);
        info!(
            green = green.len(),
            blue = blue.len(),
            duration = timeline.total_duration(),
            "built choreography"
        );

        Ok(Self {
            settings: *settings,
            path,
            green,
            blue,
            green_family,
            blue_family,
            green_plan,
            blue_plan,
            timeline,
        })
    }

    /// The validated settings this run was built from.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The star path every family travels along.
    #[must_use]
    pub fn path(&self) -> &StarPath {
        &self.path
    }

    /// The polygon sampled during the green pass (`skip` dots).
    #[must_use]
    pub fn green_polygon(&self) -> &PolygonGroup {
        &self.green
    }

    /// The polygon sampled during the blue pass (`points - skip` dots).
    #[must_use]
    pub fn blue_polygon(&self) -> &PolygonGroup {
        &self.blue
    }

    /// The green ([`Family::Forward`]) or blue ([`Family::Reverse`]) family.
    #[must_use]
    pub fn family(&self, family: Family) -> &PolygonFamily {
        match family {
            Family::Forward => &self.green_family,
            Family::Reverse => &self.blue_family,
        }
    }

    /// Travel plan of `family`, one spec per member.
    #[must_use]
    pub fn plan(&self, family: Family) -> &[PathMotionSpec] {
        match family {
            Family::Forward => &self.green_plan,
            Family::Reverse => &self.blue_plan,
        }
    }

    /// Phases of the whole demonstration.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Members of `family` whose planned start is not on their anchor dot.
    /// These copies jump to the path when travel begins.
    #[must_use]
    pub fn off_anchor_members(&self, family: Family) -> Vec<usize> {
        off_anchor_members(&self.path, self.family(family), self.plan(family))
    }

    /// Poses every member of `family` at travel progress `alpha`.
    ///
    /// # Errors
    ///
    /// Returns an error if the family and its plan disagree in size.
    pub fn pose_family(&self, family: Family, alpha: f64, rate: RateFunc) -> Result<Vec<PolygonGroup>> {
        self.family(family)
            .pose_at(&self.path, self.plan(family), alpha, rate)
    }

    /// A fresh rolling phase of `kind`, driven by the matching configured
    /// duration.
    #[must_use]
    pub fn rolling_phase(&self, kind: RollKind) -> RollingPhase {
        let configured = match kind {
            RollKind::StarPath => self.settings.star_path_duration,
            RollKind::GreenRolling | RollKind::GreenUnrolling => {
                self.settings.green_polygon_duration
            }
            RollKind::BlueRolling => self.settings.blue_polygon_duration,
        };
        RollingPhase::new(kind, self.settings.star, configured)
    }

    /// The rolling body at its start pose.
    #[must_use]
    pub fn rolling_body(&self) -> RollingBody {
        RollingBody::at_start(self.path.circles())
    }
}

/// Indices of members whose planned start does not coincide with their anchor.
fn off_anchor_members(path: &StarPath, family: &PolygonFamily, plan: &[PathMotionSpec]) -> Vec<usize> {
    family
        .members()
        .iter()
        .zip(plan)
        .filter(|(member, spec)| {
            member
                .group
                .anchor()
                .is_some_and(|anchor| (path.evaluate(spec.start) - anchor).norm() > TOLERANCE.sqrt())
        })
        .map(|(member, _)| member.index)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn build(label: &str) -> Choreography {
        let settings = Settings::from_ini_str(&format!(
            "[DEFAULT]\nStarLabel = {label}\nStarPathDuration = 4\nGreenPolygonDuration = 2\n\
             BluePolygonDuration = 3\nAnimationDuration = 4\nAnimationRepeats = 2\n"
        ))
        .unwrap();
        Choreography::build(&settings).unwrap()
    }

    #[test]
    fn five_two_sizes() {
        let c = build("{5/2}");
        assert_eq!(c.green_polygon().len(), 2);
        assert_eq!(c.blue_polygon().len(), 3);
        assert_eq!(c.family(Family::Forward).len(), 3);
        assert_eq!(c.family(Family::Reverse).len(), 2);
        assert_eq!(c.plan(Family::Forward).len(), 3);
        assert_eq!(c.plan(Family::Reverse).len(), 2);
    }

    #[test]
    fn reverse_starts_match_anchors_only_when_points_is_one_mod_skip() {
        for label in ["{5/2}", "{7/3}"] {
            let c = build(label);
            assert!(c.off_anchor_members(Family::Forward).is_empty(), "{label}");
            assert!(c.off_anchor_members(Family::Reverse).is_empty(), "{label}");
        }
        let c = build("{8/3}");
        assert!(c.off_anchor_members(Family::Forward).is_empty());
        assert_eq!(c.off_anchor_members(Family::Reverse), vec![1, 2]);
    }

    #[test]
    fn posed_families_keep_their_shape() {
        let c = build("{7/3}");
        for family in [Family::Forward, Family::Reverse] {
            let base = &c.family(family).members()[0].group;
            let posed = c.pose_family(family, 0.37, RateFunc::Smooth).unwrap();
            for group in &posed {
                assert!((group.signed_area() - base.signed_area()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn rolling_phase_uses_configured_duration() {
        let c = build("{5/2}");
        let phase = c.rolling_phase(RollKind::StarPath);
        assert!((phase.roll_duration() - 2.0).abs() < 1e-12);
        let unroll = c.rolling_phase(RollKind::GreenUnrolling);
        assert!((unroll.roll_duration() + 5.0).abs() < 1e-12);
    }

    #[test]
    fn star_path_phase_closes_the_loop() {
        let c = build("{5/2}");
        let mut body = c.rolling_body();
        let start = *body.dot();
        let mut phase = c.rolling_phase(RollKind::StarPath);
        phase.run(&mut body, 4.0, 1.0 / 60.0).unwrap();
        assert!((body.dot() - start).norm() < 1e-9);
    }
}
