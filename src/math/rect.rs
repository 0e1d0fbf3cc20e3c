use super::Point2d;
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Bounds may be infinite, which is used to represent road segments
/// of unbounded extent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The extent of the rectangle along the x-axis.
    pub x: Interval<f64>,
    /// The extent of the rectangle along the y-axis.
    pub y: Interval<f64>,
}

impl Rect {
    /// Creates a rectangle from its axis bounds.
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x: Interval::new(x_min, x_max),
            y: Interval::new(y_min, y_max),
        }
    }

    /// Creates a rectangle of the given width and height centred on a point.
    pub fn from_centre(centre: Point2d, width: f64, height: f64) -> Self {
        Self {
            x: Interval::disc(centre.x, 0.5 * width),
            y: Interval::disc(centre.y, 0.5 * height),
        }
    }

    /// Returns true if the point lies within the rectangle.
    /// The boundary is included.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Returns true if this rectangle overlaps with the other.
    ///
    /// Rectangles that merely share a boundary edge or corner count
    /// as overlapping; only strict separation on an axis rules it out.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x.clearance_with(&other.x) <= 0.0 && self.y.clearance_with(&other.y) <= 0.0
    }
}
