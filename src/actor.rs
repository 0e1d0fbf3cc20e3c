use crate::math::{Point2d, Rect, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The role an actor plays in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActorRole {
    /// The single controlled agent whose decision drives each step.
    Ego,
    /// An uncontrolled vehicle moving at constant velocity.
    Vehicle,
    /// An uncontrolled pedestrian moving at constant velocity.
    Pedestrian,
}

/// A moving object in the scene: the ego, a vehicle or a pedestrian.
///
/// Actors are immutable values; every kinematic update produces a new
/// `Actor` rather than mutating in place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actor {
    /// The world-space centre of the actor.
    pub position: Point2d,
    /// The velocity in m/s.
    pub velocity: Vector2d,
    /// The footprint dimensions `(width, length)` in m.
    /// Width spans the x-axis, length the y-axis.
    pub dims: (f64, f64),
    /// The role this actor plays.
    pub role: ActorRole,
}

impl Actor {
    /// Creates a new actor.
    pub const fn new(position: Point2d, velocity: Vector2d, dims: (f64, f64), role: ActorRole) -> Self {
        Self {
            position,
            velocity,
            dims,
            role,
        }
    }

    /// The actor's axis-aligned footprint, centred on its position.
    pub fn footprint(&self) -> Rect {
        Rect::from_centre(self.position, self.dims.0, self.dims.1)
    }

    /// Returns the actor after `dt` seconds of constant-velocity motion.
    pub fn driven(&self, dt: f64) -> Actor {
        Actor {
            position: self.position + self.velocity * dt,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn driven_integrates_constant_velocity() {
        let actor = Actor::new(
            Point2d::new(8.0, 5.0),
            Vector2d::new(-6.0, 0.0),
            (2.0, 2.0),
            ActorRole::Vehicle,
        );
        let moved = actor.driven(0.5);
        assert_approx_eq!(moved.position.x, 5.0);
        assert_approx_eq!(moved.position.y, 5.0);
        assert_eq!(moved.velocity, actor.velocity);
        assert_eq!(moved.dims, actor.dims);
        assert_eq!(moved.role, actor.role);
    }

    #[test]
    fn footprint_is_centred_on_position() {
        let actor = Actor::new(
            Point2d::new(1.0, 2.0),
            Vector2d::new(0.0, 0.0),
            (2.0, 4.0),
            ActorRole::Pedestrian,
        );
        let footprint = actor.footprint();
        assert_approx_eq!(footprint.x.min, 0.0);
        assert_approx_eq!(footprint.x.max, 2.0);
        assert_approx_eq!(footprint.y.min, 0.0);
        assert_approx_eq!(footprint.y.max, 4.0);
    }
}
