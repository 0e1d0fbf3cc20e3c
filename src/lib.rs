pub use actor::{Actor, ActorRole};
pub use cgmath;
pub use collision::{actors_collide, find_collisions};
pub use error::{Result, SimError};
pub use scene::{SceneGeometry, TurnPath};
pub use simulation::{simulate_trajectory, step_world};
pub use util::Interval;
pub use world::{Decision, WorldState};

mod actor;
mod collision;
mod error;
pub mod math;
mod scene;
mod simulation;
mod util;
mod world;
