use serde::Serialize;

use crate::config::Settings;
use crate::rolling::RollKind;

/// Run time of a show/hide/recolour transition, in seconds.
pub const TRANSITION_TIME: f64 = 1.0;

/// Length of the pause between steps, in seconds.
pub const WAIT_TIME: f64 = 1.0;

/// Visual effects the host plays between geometric phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    CreateCircles,
    Recolor,
    CreatePolygon,
    FadeOut,
    CreateFamily,
    CrossFade,
    FadeIn,
}

/// Which families travel during a travel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelKind {
    Green,
    Blue,
    Both,
}

/// What happens during one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "what", rename_all = "kebab-case")]
pub enum PhaseKind {
    Show(Effect),
    Wait,
    Roll(RollKind),
    Travel(TravelKind),
}

/// One step of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phase {
    pub kind: PhaseKind,
    /// Start time, in seconds from the beginning.
    pub start: f64,
    /// Duration, in seconds.
    pub run_time: f64,
}

impl Phase {
    /// End time, in seconds from the beginning.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.run_time
    }
}

/// The ordered phases of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    phases: Vec<Phase>,
}

impl Timeline {
    /// Lays out every phase of the demonstration for the given settings.
    #[must_use]
    pub fn for_settings(settings: &Settings) -> Self {
        let star = settings.star;
        let skip = star.skip();
        let complement = star.complement();
        let travel = settings.animation_duration * f64::from(settings.animation_repeats);

        let mut t = Self::default();
        t.push(PhaseKind::Show(Effect::CreateCircles), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Roll(RollKind::StarPath), settings.star_path_duration);
        t.push(PhaseKind::Wait, WAIT_TIME);

        t.push(PhaseKind::Show(Effect::Recolor), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        let green_step = settings.green_polygon_duration / f64::from(skip);
        for _ in 1..skip {
            t.push(PhaseKind::Roll(RollKind::GreenRolling), green_step);
        }
        t.push(PhaseKind::Show(Effect::CreatePolygon), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        if skip > 1 {
            t.push(
                PhaseKind::Roll(RollKind::GreenUnrolling),
                green_step * f64::from(skip - 1),
            );
        }
        t.push(PhaseKind::Show(Effect::FadeOut), TRANSITION_TIME);

        t.push(PhaseKind::Show(Effect::Recolor), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        let blue_step = settings.blue_polygon_duration / f64::from(complement);
        for _ in 1..complement {
            t.push(PhaseKind::Roll(RollKind::BlueRolling), blue_step);
        }
        t.push(PhaseKind::Show(Effect::CreatePolygon), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Show(Effect::FadeOut), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);

        t.push(PhaseKind::Show(Effect::CreateFamily), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Travel(TravelKind::Green), travel);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Show(Effect::CrossFade), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Travel(TravelKind::Blue), travel);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Show(Effect::FadeIn), TRANSITION_TIME);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t.push(PhaseKind::Travel(TravelKind::Both), travel);
        t.push(PhaseKind::Wait, WAIT_TIME);
        t
    }

    fn push(&mut self, kind: PhaseKind, run_time: f64) {
        let start = self.total_duration();
        self.phases.push(Phase {
            kind,
            start,
            run_time,
        });
    }

    /// Phases in playing order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Total running time, in seconds.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.phases.last().map_or(0.0, Phase::end)
    }

    /// Maps a host clock time onto `(phase index, progress in [0, 1])`.
    ///
    /// Returns `None` before the start or after the end. At a boundary the
    /// later phase wins, except at the very end, which belongs to the last
    /// phase with progress 1.
    #[must_use]
    pub fn locate(&self, time: f64) -> Option<(usize, f64)> {
        if !(0.0..=self.total_duration()).contains(&time) {
            return None;
        }
        let found = self
            .phases
            .iter()
            .position(|p| p.run_time > 0.0 && time >= p.start && time < p.end());
        match found {
            Some(i) => {
                let p = &self.phases[i];
                Some((i, (time - p.start) / p.run_time))
            }
            None => {
                let last = self.phases.iter().rposition(|p| p.run_time > 0.0)?;
                Some((last, 1.0))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn settings(label: &str) -> Settings {
        Settings::from_ini_str(&format!(
            "[DEFAULT]\nStarLabel = {label}\nStarPathDuration = 4\nGreenPolygonDuration = 2\n\
             BluePolygonDuration = 3\nAnimationDuration = 4\nAnimationRepeats = 2\n"
        ))
        .unwrap()
    }

    fn count(t: &Timeline, kind: PhaseKind) -> usize {
        t.phases().iter().filter(|p| p.kind == kind).count()
    }

    #[test]
    fn phases_are_contiguous() {
        let t = Timeline::for_settings(&settings("{7/3}"));
        for pair in t.phases().windows(2) {
            assert!((pair[0].end() - pair[1].start).abs() < 1e-12);
        }
    }

    #[test]
    fn construction_steps_match_star() {
        let t = Timeline::for_settings(&settings("{7/3}"));
        assert_eq!(count(&t, PhaseKind::Roll(RollKind::GreenRolling)), 2);
        assert_eq!(count(&t, PhaseKind::Roll(RollKind::GreenUnrolling)), 1);
        assert_eq!(count(&t, PhaseKind::Roll(RollKind::BlueRolling)), 3);
        assert_eq!(count(&t, PhaseKind::Roll(RollKind::StarPath)), 1);
    }

    #[test]
    fn unit_skip_has_no_unroll() {
        let t = Timeline::for_settings(&settings("{5/1}"));
        assert_eq!(count(&t, PhaseKind::Roll(RollKind::GreenUnrolling)), 0);
    }

    #[test]
    fn total_for_five_two() {
        // 1s per transition/wait, star path 4, green step 1, unroll 1,
        // blue steps 2, three travels of 8
        let t = Timeline::for_settings(&settings("{5/2}"));
        let fixed = t
            .phases()
            .iter()
            .filter(|p| matches!(p.kind, PhaseKind::Show(_) | PhaseKind::Wait))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let expected = fixed as f64 + 4.0 + 1.0 + 1.0 + 2.0 + 24.0;
        assert!((t.total_duration() - expected).abs() < 1e-9);
    }

    #[test]
    fn locate_maps_time_to_progress() {
        let t = Timeline::for_settings(&settings("{5/2}"));
        // 1s create + 1s wait, then the 4s star path roll
        let (i, alpha) = t.locate(3.0).unwrap();
        assert_eq!(t.phases()[i].kind, PhaseKind::Roll(RollKind::StarPath));
        assert!((alpha - 0.25).abs() < 1e-12);

        let (i, alpha) = t.locate(t.total_duration()).unwrap();
        assert_eq!(i, t.phases().len() - 1);
        assert!((alpha - 1.0).abs() < 1e-12);

        assert!(t.locate(-0.1).is_none());
        assert!(t.locate(t.total_duration() + 0.1).is_none());
    }
}
