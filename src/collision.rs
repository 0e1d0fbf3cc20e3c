//! Ground-truth collision detection over a world snapshot.

use crate::actor::Actor;
use crate::world::WorldState;
use itertools::Itertools;

/// Returns true if the two actors' footprints overlap.
pub fn actors_collide(a: &Actor, b: &Actor) -> bool {
    a.footprint().overlaps(&b.footprint())
}

/// Finds every colliding pair of actors in the snapshot.
///
/// Checks all `n·(n-1)/2` unordered pairs with no spatial index; this
/// is the simple ground-truth oracle, not a performance-critical path.
/// Each pair is reported at most once, in traversal order.
pub fn find_collisions(state: &WorldState) -> Vec<(Actor, Actor)> {
    state
        .actors()
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| actors_collide(a, b))
        .map(|(a, b)| (*a, *b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorRole;
    use crate::math::{Point2d, Vector2d};
    use crate::scene::SceneGeometry;
    use crate::world::WorldState;
    use std::rc::Rc;

    fn actor_at(x: f64, y: f64, dims: (f64, f64), role: ActorRole) -> Actor {
        Actor::new(Point2d::new(x, y), Vector2d::new(0.0, 0.0), dims, role)
    }

    fn state_of(actors: Vec<Actor>) -> WorldState {
        let geometry = Rc::new(SceneGeometry::occluded_left_turn());
        WorldState::new(geometry, 0.0, None, actors).unwrap()
    }

    #[test]
    fn pair_test_is_symmetric() {
        let a = actor_at(0.0, 0.0, (2.0, 2.0), ActorRole::Ego);
        let b = actor_at(1.5, 0.5, (2.0, 2.0), ActorRole::Vehicle);
        assert!(actors_collide(&a, &b));
        assert!(actors_collide(&b, &a));
    }

    #[test]
    fn separated_actors_do_not_collide() {
        // Centres further apart than the sum of half-extents on the x-axis.
        let a = actor_at(0.0, 0.0, (2.0, 2.0), ActorRole::Ego);
        let b = actor_at(2.5, 0.0, (2.0, 2.0), ActorRole::Vehicle);
        assert!(find_collisions(&state_of(vec![a, b])).is_empty());
    }

    #[test]
    fn reports_each_overlapping_pair_once() {
        // Three mutually overlapping actors yield all three pairs.
        let a = actor_at(0.0, 0.0, (2.0, 2.0), ActorRole::Ego);
        let b = actor_at(1.0, 0.0, (2.0, 2.0), ActorRole::Vehicle);
        let c = actor_at(0.5, 1.0, (2.0, 2.0), ActorRole::Pedestrian);
        let collisions = find_collisions(&state_of(vec![a, b, c]));
        assert_eq!(collisions.len(), 3);
    }

    #[test]
    fn detects_other_vs_other_collisions() {
        // Ego is far away; the two vehicles overlap each other.
        let ego = actor_at(100.0, 100.0, (2.0, 2.0), ActorRole::Ego);
        let a = actor_at(0.0, 0.0, (2.0, 2.0), ActorRole::Vehicle);
        let b = actor_at(0.5, 0.5, (2.0, 2.0), ActorRole::Vehicle);
        let collisions = find_collisions(&state_of(vec![ego, a, b]));
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].0.role, ActorRole::Vehicle);
        assert_eq!(collisions[0].1.role, ActorRole::Vehicle);
    }
}
