//! Construction passes: sampling dots off the rolling circle, closing them
//! into polygons, and replicating those polygons into families.

mod dots;
mod family;
mod polygon;

pub use dots::{DotColor, SampleBluePass, SampleDot, SampleGreenPass};
pub use family::{BuildFamily, FamilyMember, PolygonFamily};
pub use polygon::PolygonGroup;
