use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::motion::{interpolate, Family, PathMotionSpec, PlanMotion, RateFunc};
use crate::path::StarPath;

use super::dots::SampleDot;
use super::polygon::PolygonGroup;

/// One translated copy of a base polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyMember {
    /// Position of the member in its family.
    pub index: usize,
    /// Index of the anchor dot (of the other colour) the copy was moved onto.
    pub anchor_index: usize,
    /// The copy at its construction-time position.
    pub group: PolygonGroup,
}

/// A flat, indexed set of polygon copies, one per anchor dot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonFamily {
    family: Family,
    members: Vec<FamilyMember>,
}

impl PolygonFamily {
    /// Which family this is.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Members in index order.
    #[must_use]
    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the family has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Plans this family's travel with its default direction.
    ///
    /// # Errors
    ///
    /// See [`PlanMotion::execute`].
    pub fn plan(&self, repeats: u32, duration: f64) -> Result<Vec<PathMotionSpec>> {
        PlanMotion::new(self.len(), repeats, duration, self.family).execute()
    }

    /// Poses every member at progress `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if `specs` does not have one
    /// entry per member.
    pub fn pose_at(
        &self,
        path: &StarPath,
        specs: &[PathMotionSpec],
        alpha: f64,
        rate: RateFunc,
    ) -> Result<Vec<PolygonGroup>> {
        if specs.len() != self.members.len() {
            return Err(GeometryError::InvalidInput(format!(
                "{} motion specs for a family of {}",
                specs.len(),
                self.members.len()
            ))
            .into());
        }
        Ok(self
            .members
            .iter()
            .zip(specs)
            .map(|(member, spec)| member.group.posed(&interpolate(spec, path, alpha, rate)))
            .collect())
    }
}

/// Builds a family: the cross product of a base polygon with a list of
/// anchor dots. Member `i` is the base moved so its dot 0 sits on anchor `i`.
pub struct BuildFamily<'a> {
    base: &'a PolygonGroup,
    anchors: &'a [SampleDot],
    family: Family,
}

impl<'a> BuildFamily<'a> {
    /// Creates a new `BuildFamily` operation.
    #[must_use]
    pub fn new(base: &'a PolygonGroup, anchors: &'a [SampleDot], family: Family) -> Self {
        Self {
            base,
            anchors,
            family,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the base polygon or the anchor
    /// list is empty.
    pub fn execute(&self) -> Result<PolygonFamily> {
        if self.base.is_empty() {
            return Err(GeometryError::Degenerate("base polygon has no dots".into()).into());
        }
        if self.anchors.is_empty() {
            return Err(GeometryError::Degenerate("family has no anchors".into()).into());
        }
        let members = self
            .anchors
            .iter()
            .enumerate()
            .map(|(index, anchor)| FamilyMember {
                index,
                anchor_index: anchor.index,
                group: self.base.anchored_at(&anchor.position),
            })
            .collect();
        Ok(PolygonFamily {
            family: self.family,
            members,
        })
    }
}
