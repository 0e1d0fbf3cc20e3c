//! Immutable snapshots of the simulated world.

use crate::actor::{Actor, ActorRole};
use crate::error::{Result, SimError};
use crate::scene::SceneGeometry;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// The ego's chosen maneuver for a single simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Decision {
    /// Hold position with zero velocity, interrupting any turn in progress.
    Wait,
    /// Follow the scene's turn path, resuming an in-progress turn.
    Turn,
    /// Reserved for future inaction semantics; currently rejected.
    Abstain,
}

/// A complete, immutable description of the world at one instant.
///
/// Snapshots are never mutated; each simulation step produces a new
/// `WorldState` and prior snapshots remain valid, so a trajectory is
/// simply an ordered sequence of them. The scene geometry is shared
/// read-only by every snapshot in a run.
#[derive(Clone, Debug)]
pub struct WorldState {
    geometry: Rc<SceneGeometry>,
    time: f64,
    turn_start_time: Option<f64>,
    actors: Vec<Actor>,
}

impl WorldState {
    /// Creates a new snapshot, validating its invariants: exactly one
    /// actor has the [`ActorRole::Ego`] role, every actor's dimensions
    /// are strictly positive, and time is non-negative.
    pub fn new(
        geometry: Rc<SceneGeometry>,
        time: f64,
        turn_start_time: Option<f64>,
        actors: Vec<Actor>,
    ) -> Result<Self> {
        let ego_count = actors.iter().filter(|a| a.role == ActorRole::Ego).count();
        if ego_count != 1 {
            return Err(SimError::InvalidArgument(format!(
                "world must contain exactly one ego actor, found {ego_count}"
            )));
        }
        if let Some(actor) = actors.iter().find(|a| !(a.dims.0 > 0.0 && a.dims.1 > 0.0)) {
            return Err(SimError::InvalidArgument(format!(
                "actor dimensions must be positive, got {:?}",
                actor.dims
            )));
        }
        if !(time >= 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "time must be non-negative, got {time}"
            )));
        }
        Ok(Self {
            geometry,
            time,
            turn_start_time,
            actors,
        })
    }

    /// The scene geometry shared by every snapshot in this run.
    pub fn geometry(&self) -> &Rc<SceneGeometry> {
        &self.geometry
    }

    /// The simulation time of this snapshot, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The absolute time the current turn maneuver began, or `None`
    /// when the ego is not turning.
    pub fn turn_start_time(&self) -> Option<f64> {
        self.turn_start_time
    }

    /// All actors in the snapshot, ego first once stepped.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// The ego actor, which is guaranteed to exist.
    pub fn ego(&self) -> &Actor {
        self.actors
            .iter()
            .find(|a| a.role == ActorRole::Ego)
            .expect("validated world contains an ego actor")
    }

    /// The uncontrolled vehicles in the snapshot.
    pub fn vehicles(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.role == ActorRole::Vehicle)
    }

    /// The pedestrians in the snapshot.
    pub fn pedestrians(&self) -> impl Iterator<Item = &Actor> {
        self.actors
            .iter()
            .filter(|a| a.role == ActorRole::Pedestrian)
    }
}
