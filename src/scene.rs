//! The fixed scene an ego agent navigates: road geometry, lane markings
//! and the reference path followed during a turn maneuver.

use crate::error::{Result, SimError};
use crate::math::{Line, Point2d, Rect, Vector2d};
use crate::util::Interval;

/// A time-parameterised reference path for the ego's turn maneuver.
///
/// The path is an ordered sequence of `(time, position)` waypoints with
/// strictly increasing times, the first at `t = 0`. Queries before the
/// first waypoint clamp to it, queries between waypoints interpolate
/// linearly, and queries beyond the last waypoint extrapolate at the
/// final segment's velocity so the path never terminates abruptly.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnPath {
    waypoints: Vec<(f64, Point2d)>,
}

impl TurnPath {
    /// Creates a turn path from its waypoints.
    ///
    /// Fails if the sequence is empty, does not start at `t = 0`,
    /// or is not strictly increasing in time.
    pub fn new(waypoints: Vec<(f64, Point2d)>) -> Result<Self> {
        let first = waypoints
            .first()
            .ok_or_else(|| SimError::InvalidArgument("turn path must have at least one waypoint".to_string()))?;
        if first.0 != 0.0 {
            return Err(SimError::InvalidArgument(format!(
                "turn path must start at t = 0, got t = {}",
                first.0
            )));
        }
        if let Some(w) = waypoints.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(SimError::InvalidArgument(format!(
                "turn path times must be strictly increasing, got {} after {}",
                w[1].0, w[0].0
            )));
        }
        Ok(Self { waypoints })
    }

    /// The waypoints defining the path.
    pub fn waypoints(&self) -> &[(f64, Point2d)] {
        &self.waypoints
    }

    /// The time of the final waypoint.
    pub fn duration(&self) -> f64 {
        self.waypoints[self.waypoints.len() - 1].0
    }

    /// Samples the path position at a time relative to the start of the
    /// maneuver.
    ///
    /// Fails if `t` is negative; no position is defined before the
    /// maneuver decision.
    pub fn position_at(&self, t: f64) -> Result<Point2d> {
        if !(t >= 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "turn path query time must be non-negative, got {t}"
            )));
        }
        let (first_t, first_p) = self.waypoints[0];
        if t <= first_t {
            return Ok(first_p);
        }
        for w in self.waypoints.windows(2) {
            let ((t0, p0), (t1, p1)) = (w[0], w[1]);
            if t <= t1 {
                let frac = Interval::new(t0, t1).inv_lerp(t);
                return Ok(p0 + (p1 - p0) * frac);
            }
        }
        // Beyond the last waypoint: continue at the final segment's velocity.
        match self.waypoints.len() {
            1 => Ok(first_p),
            n => {
                let (t0, p0) = self.waypoints[n - 2];
                let (t1, p1) = self.waypoints[n - 1];
                let velocity = (p1 - p0) / (t1 - t0);
                Ok(p1 + velocity * (t - t1))
            }
        }
    }

    /// Estimates the path velocity at a time relative to the start of the
    /// maneuver, using a forward finite difference over `dt`.
    ///
    /// This is an approximation, not an analytic derivative: within a
    /// segment it recovers the segment's constant velocity, while near
    /// waypoint boundaries it blends the two adjacent segments.
    pub fn velocity_at(&self, t: f64, dt: f64) -> Result<Vector2d> {
        if !(dt > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "finite difference step must be positive, got {dt}"
            )));
        }
        let p0 = self.position_at(t)?;
        let p1 = self.position_at(t + dt)?;
        Ok((p1 - p0) / dt)
    }
}

/// The geometry of a fixed intersection: road and crossing segments,
/// lane markings and the ego's turn path.
///
/// Constructed once per simulation and shared read-only by every
/// [`WorldState`](crate::WorldState) snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGeometry {
    /// The road furthest from the ego's approach, running east-west.
    pub far_road: Rect,
    /// The road nearest the ego's approach, running east-west.
    pub near_road: Rect,
    /// The crossing the ego enters the intersection through.
    pub near_cross: Rect,
    /// The near half of the far-side crossing.
    pub far_cross_near: Rect,
    /// The far half of the far-side crossing.
    pub far_cross_far: Rect,
    /// The outer boundary of the far road.
    pub top_boundary: Line,
    /// The centre line of the far road.
    pub far_center: Line,
    /// The marking separating the two roads.
    pub middle_road: Line,
    /// The centre line of the near road.
    pub near_center: Line,
    /// The line the ego must stop at before entering the intersection.
    pub stop_line: Line,
    /// The reference path followed during the TURN maneuver.
    pub turn_path: TurnPath,
}

impl SceneGeometry {
    /// The occluded left-turn scenario: a two-road intersection where the
    /// ego turns left from a stop line across an oncoming lane.
    ///
    /// The coordinates are hand-authored and define this exact layout.
    /// The turn path runs straight from the stop line through the
    /// intersection, then arcs left into the far road, paced at one
    /// waypoint per second.
    pub fn occluded_left_turn() -> Self {
        let turn_path = TurnPath::new(vec![
            (0.0, Point2d::new(0.0, 2.0)),
            (1.0, Point2d::new(0.0, 3.0)),
            (2.0, Point2d::new(0.0, 4.0)),
            (3.0, Point2d::new(-1.5, 4.5)),
            (4.0, Point2d::new(-1.0, 5.0)),
            (5.0, Point2d::new(-2.0, 5.0)),
        ])
        .expect("hand-authored turn path is valid");

        Self {
            far_road: Rect::new(f64::NEG_INFINITY, f64::INFINITY, 4.0, 6.0),
            near_road: Rect::new(f64::NEG_INFINITY, f64::INFINITY, 2.0, 4.0),
            near_cross: Rect::new(-2.0, 0.0, 1.0, 2.0),
            far_cross_near: Rect::new(-3.0, -2.0, 2.0, 4.0),
            far_cross_far: Rect::new(-3.0, -2.0, 4.0, 6.0),
            top_boundary: Line::new(0.0, 1.0, -6.0),
            far_center: Line::new(0.0, 1.0, -5.0),
            middle_road: Line::new(0.0, 1.0, -4.0),
            near_center: Line::new(0.0, 1.0, -3.0),
            stop_line: Line::new(0.0, 1.0, -1.0),
            turn_path,
        }
    }
}
