//! Scenario tests for the occluded left turn.

use intersection_sim::{
    find_collisions, simulate_trajectory,
    math::{Point2d, Vector2d},
    Actor, ActorRole, Decision, SceneGeometry, WorldState,
};
use std::rc::Rc;

fn left_turn_world() -> WorldState {
    let geometry = Rc::new(SceneGeometry::occluded_left_turn());
    let ego = Actor::new(
        Point2d::new(0.0, 1.0),
        Vector2d::new(0.0, 0.0),
        (2.0, 2.0),
        ActorRole::Ego,
    );
    let oncoming = Actor::new(
        Point2d::new(8.0, 5.0),
        Vector2d::new(-6.0, 0.0),
        (2.0, 2.0),
        ActorRole::Vehicle,
    );
    WorldState::new(geometry, 0.0, None, vec![ego, oncoming]).unwrap()
}

/// Turning across the oncoming lane must collide with the oncoming vehicle.
#[test]
fn turning_into_oncoming_traffic_collides() {
    let initial = left_turn_world();
    let states = simulate_trajectory(&initial, Decision::Turn, 4.0, 0.1).unwrap();
    assert_eq!(states.len(), 41);

    let collisions: Vec<_> = states
        .iter()
        .flat_map(|state| find_collisions(state))
        .collect();
    assert!(!collisions.is_empty());
    for (a, b) in &collisions {
        assert!(a.role == ActorRole::Ego || b.role == ActorRole::Ego);
    }
}

/// Waiting at the stop line keeps the ego clear of the oncoming lane.
#[test]
fn waiting_avoids_the_oncoming_vehicle() {
    let initial = left_turn_world();
    let states = simulate_trajectory(&initial, Decision::Wait, 4.0, 0.1).unwrap();

    for state in &states {
        assert!(find_collisions(state).is_empty());
        assert_eq!(state.ego().position, Point2d::new(0.0, 1.0));
    }
}

/// A completed turn carries the ego from the near side of the
/// intersection into the far road.
#[test]
fn completed_turn_ends_in_the_far_road() {
    let initial = left_turn_world();
    let geometry = initial.geometry().clone();
    let states = simulate_trajectory(&initial, Decision::Turn, 4.0, 0.1).unwrap();

    let start = initial.ego().position;
    let end = states.last().unwrap().ego().position;
    assert!(geometry.middle_road.signed_value(start) < 0.0);
    assert!(geometry.middle_road.signed_value(end) > 0.0);
    assert!(geometry.far_road.contains(end));
}

/// Maneuver state is carried across the whole trajectory: the turn
/// starts once and resumes on every subsequent step.
#[test]
fn turn_start_time_is_recorded_once() {
    let initial = left_turn_world();
    let states = simulate_trajectory(&initial, Decision::Turn, 2.0, 0.5).unwrap();

    assert_eq!(states[0].turn_start_time(), None);
    for state in &states[1..] {
        assert_eq!(state.turn_start_time(), Some(0.0));
    }
}
