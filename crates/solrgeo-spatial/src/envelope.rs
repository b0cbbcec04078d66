//! Spatial envelope rendering.

use std::fmt;

use crate::BoundingBox;

/// The `ENVELOPE(minX, maxX, maxY, minY)` form of a bounding box.
///
/// This is the rectangle constructor of Solr's spatial query syntax. Note
/// the argument order differs from the rectangle input order: east comes
/// second and the two Y bounds are swapped to north-before-south.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// The bounds being rendered.
    bbox: BoundingBox,
}

impl From<BoundingBox> for Envelope {
    fn from(bbox: BoundingBox) -> Self {
        Self { bbox }
    }
}

impl fmt::Display for Envelope {
    /// Renders the envelope using natural `f64` formatting, so integral
    /// bounds print without a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ENVELOPE({}, {}, {}, {})",
            self.bbox.min_x, self.bbox.max_x, self.bbox.max_y, self.bbox.min_y
        )
    }
}
