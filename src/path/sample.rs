use serde::Serialize;

use crate::math::Point2;

/// Parameters controlling how finely the star path is sampled.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleParams {
    /// Segments allotted per star point (each point is one lobe of the path).
    pub segments_per_point: usize,
    /// Minimum number of segments for the whole path.
    pub min_segments: usize,
    /// Maximum number of segments for the whole path.
    pub max_segments: usize,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            segments_per_point: 32,
            min_segments: 64,
            max_segments: 4096,
        }
    }
}

impl SampleParams {
    /// Uses exactly `segments` segments regardless of the star.
    #[must_use]
    pub fn fixed(segments: usize) -> Self {
        Self {
            segments_per_point: segments,
            min_segments: segments,
            max_segments: segments,
        }
    }

    /// Number of segments to use for a star with `points` tips.
    #[must_use]
    pub fn segment_count(&self, points: u32) -> usize {
        let wanted = self.segments_per_point.saturating_mul(points as usize);
        wanted
            .clamp(self.min_segments, self.max_segments.max(self.min_segments))
            .max(1)
    }
}

/// A polyline approximation of the star path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Total length of the polyline, including the closing segment when closed.
    #[must_use]
    pub fn length(&self) -> f64 {
        let open: f64 = self
            .points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .sum();
        match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) => open + (first - last).norm(),
            _ => open,
        }
    }
}
