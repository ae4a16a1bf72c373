use serde::Serialize;

use crate::math::polygon_2d::{bounding_box_center, signed_area_2d};
use crate::math::rotate_2d::{rotate_all_about, translate_all};
use crate::math::{Point2, Vector2};
use crate::motion::PathPose;

use super::dots::{DotColor, SampleDot};

/// An ordered ring of sample dots and the closed outline through them.
///
/// Dot 0 is the anchor: the point that is pinned to the star path when the
/// group travels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonGroup {
    color: DotColor,
    dots: Vec<SampleDot>,
}

impl PolygonGroup {
    /// Builds a group from dots in sampling order.
    #[must_use]
    pub fn new(color: DotColor, dots: Vec<SampleDot>) -> Self {
        Self { color, dots }
    }

    /// Colour of the pass that produced the group.
    #[must_use]
    pub fn color(&self) -> DotColor {
        self.color
    }

    /// The dots, in outline order.
    #[must_use]
    pub fn dots(&self) -> &[SampleDot] {
        &self.dots
    }

    /// Number of dots (and outline vertices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Returns `true` if the group has no dots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Dot positions; also the vertices of the closed outline.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2> {
        self.dots.iter().map(|d| d.position).collect()
    }

    /// The anchor dot's position, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<Point2> {
        self.dots.first().map(|d| d.position)
    }

    /// Centre of the group's bounding box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        bounding_box_center(&self.outline())
    }

    /// Signed area of the outline (zero for one or two dots).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.outline())
    }

    /// Returns a copy moved rigidly by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        let mut points = self.outline();
        translate_all(&mut points, offset);
        self.with_positions(&points)
    }

    /// Returns a copy shifted so the anchor lands on `target`.
    #[must_use]
    pub fn anchored_at(&self, target: &Point2) -> Self {
        match self.anchor() {
            Some(anchor) => self.translated(&(target - anchor)),
            None => self.clone(),
        }
    }

    /// Applies a travel pose to this group, treated as the starting pose.
    ///
    /// The group is rotated by `pose.rotation` about its centre, then
    /// translated so its anchor lands on `pose.position`. Because the pose is
    /// always applied to the starting pose, evaluating the same pose twice
    /// gives the same result.
    #[must_use]
    pub fn posed(&self, pose: &PathPose) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let pivot = self.center();
        let mut points = self.outline();
        rotate_all_about(&mut points, &pivot, pose.rotation);
        let rotated_anchor = points[0];
        translate_all(&mut points, &(pose.position - rotated_anchor));
        self.with_positions(&points)
    }

    fn with_positions(&self, points: &[Point2]) -> Self {
        let dots = self
            .dots
            .iter()
            .zip(points)
            .map(|(d, p)| SampleDot {
                position: *p,
                ..*d
            })
            .collect();
        Self {
            color: self.color,
            dots,
        }
    }
}
