#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::TAU;

use starroll::choreography::{Choreography, PhaseKind};
use starroll::config::Settings;
use starroll::motion::{Family, RateFunc};
use starroll::path::traced_point;
use starroll::rolling::RollKind;

const FIVE_TWO: &str = "\
# five-pointed star
[DEFAULT]
StarLabel = {5/2}
StarPathDuration = 4
GreenPolygonDuration = 2
BluePolygonDuration = 3
AnimationDuration = 4
AnimationRepeats = 2
";

fn build(text: &str) -> Choreography {
    let settings = Settings::from_ini_str(text).unwrap();
    Choreography::build(&settings).unwrap()
}

#[test]
fn five_two_geometry() {
    let c = build(FIVE_TWO);
    let circles = c.path().circles();
    assert_relative_eq!(circles.outer_radius(), 3.0);
    assert_relative_eq!(circles.inner_radius(), 1.2, epsilon = 1e-12);

    // green dots sit on the rolling circle at its start pose
    let green = c.green_polygon();
    assert_eq!(green.len(), 2);
    for (j, dot) in green.dots().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * j as f64 / 2.0;
        assert_abs_diff_eq!(dot.position.x, 1.8 + 1.2 * angle.cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(dot.position.y, 1.2 * angle.sin(), epsilon = 1e-9);
    }

    // blue dots are the traced point at t = j / 3
    let blue = c.blue_polygon();
    assert_eq!(blue.len(), 3);
    for (j, dot) in blue.dots().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = traced_point(3.0, 1.2, 2, j as f64 / 3.0);
        assert_abs_diff_eq!(dot.position.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(dot.position.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn five_two_motion_plans() {
    let c = build(FIVE_TWO);

    let forward = c.plan(Family::Forward);
    assert_eq!(forward.len(), 3);
    for (i, spec) in forward.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let start = i as f64 / 3.0;
        assert_relative_eq!(spec.start, start, epsilon = 1e-12);
        assert_relative_eq!(spec.end, start + 2.0, epsilon = 1e-12);
        assert_relative_eq!(spec.direction, -3.0);
        assert_relative_eq!(spec.run_time, 8.0);
    }

    let reverse = c.plan(Family::Reverse);
    assert_eq!(reverse.len(), 2);
    assert_relative_eq!(reverse[0].start, 1.0);
    assert_relative_eq!(reverse[1].start, 0.5);
    assert!(reverse.iter().all(|s| (s.direction - 2.0).abs() < 1e-12));
}

#[test]
fn travelling_families_stay_rigid() {
    let c = build(FIVE_TWO);
    for family in [Family::Forward, Family::Reverse] {
        let base = &c.family(family).members()[0].group;
        let base_gaps: Vec<f64> = base
            .dots()
            .windows(2)
            .map(|w| (w[1].position - w[0].position).norm())
            .collect();
        for alpha in [0.0, 0.2, 0.5, 0.9, 1.0] {
            for group in c.pose_family(family, alpha, RateFunc::Smooth).unwrap() {
                let gaps = group
                    .dots()
                    .windows(2)
                    .map(|w| (w[1].position - w[0].position).norm());
                for (g, b) in gaps.zip(&base_gaps) {
                    assert_abs_diff_eq!(g, *b, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn posed_anchor_follows_the_path() {
    let c = build(FIVE_TWO);
    let specs = c.plan(Family::Forward);
    let posed = c.pose_family(Family::Forward, 0.5, RateFunc::Linear).unwrap();
    for (group, spec) in posed.iter().zip(specs) {
        let expected = spec.pose_at(c.path(), 0.5, RateFunc::Linear).position;
        let anchor = group.anchor().unwrap();
        assert_abs_diff_eq!(anchor.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(anchor.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn timeline_runs_every_roll() {
    let c = build(FIVE_TWO);
    let rolls: Vec<RollKind> = c
        .timeline()
        .phases()
        .iter()
        .filter_map(|p| match p.kind {
            PhaseKind::Roll(kind) => Some(kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        rolls,
        vec![
            RollKind::StarPath,
            RollKind::GreenRolling,
            RollKind::GreenUnrolling,
            RollKind::BlueRolling,
            RollKind::BlueRolling,
        ]
    );
}

#[test]
fn degenerate_star_is_rejected() {
    let text = FIVE_TWO.replace("{5/2}", "{4/4}");
    let err = Settings::from_ini_str(&text).unwrap_err();
    assert!(err.is_invalid_config());
}

#[test]
fn unreduced_label_matches_reduced() {
    let reduced = build(FIVE_TWO);
    let scaled = build(&FIVE_TWO.replace("{5/2}", "{10/4}"));
    assert_eq!(reduced.settings().star, scaled.settings().star);
    assert_eq!(
        reduced.plan(Family::Forward).len(),
        scaled.plan(Family::Forward).len()
    );
}
