//! Stepping the world forward in time given the ego's decision.

use crate::actor::{Actor, ActorRole};
use crate::error::{Result, SimError};
use crate::math::Vector2d;
use crate::world::{Decision, WorldState};
use cgmath::prelude::*;
use log::trace;

/// Evolves the world by `dt` seconds given the ego's decision.
///
/// Produces a new [`WorldState`]; the input snapshot is left untouched.
/// The ego's new kinematic state is resolved from the decision, every
/// other actor advances under constant-velocity kinematics, and the
/// output places the updated ego first followed by the others in their
/// original relative order.
///
/// The turn maneuver is stateful: the first [`Decision::Turn`] records
/// the maneuver start time and later calls resume the path from the
/// time elapsed since then, while [`Decision::Wait`] interrupts any
/// turn in progress.
///
/// Fails with [`SimError::InvalidArgument`] if `dt` is not strictly
/// positive, and with [`SimError::Unsupported`] for the reserved
/// [`Decision::Abstain`]. No partial update occurs on failure.
pub fn step_world(state: &WorldState, decision: Decision, dt: f64) -> Result<WorldState> {
    if !(dt > 0.0) {
        return Err(SimError::InvalidArgument(format!(
            "time step dt must be positive, got {dt}"
        )));
    }

    let ego = state.ego();
    let (updated_ego, turn_start_time) = match decision {
        Decision::Turn => {
            // The first TURN step marks the maneuver start; later steps
            // resume from the time elapsed since then, measured at the
            // start of this step.
            let turn_start = state.turn_start_time().unwrap_or_else(|| state.time());
            let relative_t = state.time() - turn_start;
            let path = &state.geometry().turn_path;
            let position = path.position_at(relative_t)?;
            let velocity = path.velocity_at(relative_t, dt)?;
            trace!(
                "ego turning: relative_t={relative_t:.3}s position=({:.2}, {:.2})",
                position.x,
                position.y
            );
            (
                Actor {
                    position,
                    velocity,
                    ..*ego
                },
                Some(turn_start),
            )
        }
        Decision::Wait => (
            Actor {
                velocity: Vector2d::zero(),
                ..*ego
            },
            None,
        ),
        Decision::Abstain => {
            return Err(SimError::Unsupported(
                "the ABSTAIN decision is reserved and has no step semantics",
            ));
        }
    };

    let mut actors = Vec::with_capacity(state.actors().len());
    actors.push(updated_ego);
    actors.extend(
        state
            .actors()
            .iter()
            .filter(|a| a.role != ActorRole::Ego)
            .map(|a| a.driven(dt)),
    );

    WorldState::new(
        state.geometry().clone(),
        state.time() + dt,
        turn_start_time,
        actors,
    )
}

/// Simulates a full trajectory, holding the ego's decision constant.
///
/// Returns the initial snapshot followed by one snapshot per step of
/// the step engine, covering exactly `duration` seconds. Each step
/// advances by `min(dt, duration - elapsed)`, so the final step may be
/// shortened and the accumulated elapsed time never overshoots the
/// requested duration.
///
/// Fails with [`SimError::InvalidArgument`] if `duration` or `dt` is
/// not strictly positive.
pub fn simulate_trajectory(
    initial: &WorldState,
    decision: Decision,
    duration: f64,
    dt: f64,
) -> Result<Vec<WorldState>> {
    if !(duration > 0.0) {
        return Err(SimError::InvalidArgument(format!(
            "duration must be positive, got {duration}"
        )));
    }
    if !(dt > 0.0) {
        return Err(SimError::InvalidArgument(format!(
            "time step dt must be positive, got {dt}"
        )));
    }

    let mut states = vec![initial.clone()];
    let mut elapsed = 0.0;
    // Accumulate elapsed time from the actual step sizes, not step
    // counts, so the loop terminates at equality without drift.
    while elapsed < duration {
        let step = dt.min(duration - elapsed);
        let next = step_world(states.last().expect("states is non-empty"), decision, step)?;
        states.push(next);
        elapsed += step;
    }
    trace!(
        "simulated {} steps over {duration}s with decision {decision:?}",
        states.len() - 1
    );
    Ok(states)
}
