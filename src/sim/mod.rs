//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick`'s elapsed milliseconds
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod grid;
pub mod projection;
pub mod rotation;
pub mod snake;
pub mod state;
pub mod tick;
pub mod topology;

pub use camera::{AngleDeg, CameraMode, CameraState, rotation_for_position, solve};
pub use grid::{Direction, Face, FaceMap, GridPosition};
pub use projection::to_vector3;
pub use rotation::{rotation_direction, rotation_step};
pub use snake::{Snake, StepReport};
pub use state::{GameState, GameStatus, Snapshot};
pub use tick::{TickInput, autopilot_direction, tick};
pub use topology::{EdgeCrossing, cross_face, edge_crossing, next_position};
