//! Cube Snake - snake on the six faces of a cube
//!
//! Core modules:
//! - `sim`: Deterministic simulation (topology, camera geometry, snake, game state)
//! - `controls`: Keyboard mapping into game commands
//! - `settings`: Data-driven game tuning

pub mod controls;
pub mod settings;
pub mod sim;

pub use controls::{Command, Key};
pub use settings::{Pace, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Cells along each side of a face (every face is GRID_SIZE x GRID_SIZE)
    pub const GRID_SIZE: i32 = 16;
    /// Number of cube faces
    pub const FACE_COUNT: usize = 6;

    /// Rotation differences below this snap straight to the target (degrees)
    pub const ROTATION_STEP_MIN: f32 = 0.5;
    /// Largest rotation step, used when the target is half a turn away (degrees)
    pub const ROTATION_STEP_MAX: f32 = 10.0;
    /// Angular distance range the step size is projected from (degrees)
    pub const ROTATION_ANGLE_RANGE: (f32, f32) = (0.0, 180.0);

    /// Snake segments closer to the head than this never count as a self-hit
    pub const SELF_COLLISION_SKIP: usize = 3;
}

/// Normalize degrees to (-180, 180]
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Project `value` linearly from range `from` onto range `to`
#[inline]
pub fn project_to_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let ratio = (value - from.0) / (from.1 - from.0);
    to.0 + (to.1 - to.0) * ratio
}
