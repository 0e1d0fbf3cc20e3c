use super::Point2d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line in the implicit form `a·x + b·y + c = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Creates a new line.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates `a·x + b·y + c` at the given point.
    ///
    /// The sign indicates which half-plane the point lies in;
    /// zero means the point is on the line.
    pub fn signed_value(&self, point: Point2d) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }
}
