//! Camera orientation: angles that face a point on the cube, and the
//! follow/spin/free camera state driven by the game loop.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::grid::GridPosition;
use super::projection::to_vector3;
use super::rotation::rotation_step;
use crate::normalize_degrees;

/// Model rotation in degrees: `x` is pitch, `y` is yaw. Both in (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleDeg {
    pub x: f32,
    pub y: f32,
}

impl AngleDeg {
    pub const ZERO: AngleDeg = AngleDeg { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components normalized to (-180, 180]
    pub fn normalized(self) -> Self {
        Self {
            x: normalize_degrees(self.x),
            y: normalize_degrees(self.y),
        }
    }
}

/// Sign that maps zero to zero (`f32::signum` maps +0.0 to 1.0)
#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unsigned angle between two vectors in radians
#[inline]
fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let cos = a.dot(b) / (a.length() * b.length());
    cos.clamp(-1.0, 1.0).acos()
}

/// Whole degrees in (-180, 180].
///
/// Rounded before wrapping so that values a hair above 180 cannot come out
/// as -180.
#[inline]
fn whole_degrees(radians: f32) -> f32 {
    normalize_degrees(radians.to_degrees().round())
}

/// Rotation that turns the cube so that `p` faces the camera.
///
/// Pitch is the angle between `p` and its projection onto the XZ plane;
/// yaw the angle between `p` and its projection onto the YZ plane, mirrored
/// for points behind the cube (`z < 0`). `p` must lie on a cube face.
pub fn solve(p: Vec3) -> AngleDeg {
    let pitch = sign(p.y) * angle_between(p, Vec3::new(p.x, 0.0, p.z));

    let mut yaw = -sign(p.x) * angle_between(p, Vec3::new(0.0, p.y, p.z));
    if p.z < 0.0 {
        yaw = std::f32::consts::PI - yaw;
    }

    AngleDeg {
        x: whole_degrees(pitch),
        y: whole_degrees(yaw),
    }
}

/// Rotation that brings grid cell `pos` to face the camera
pub fn rotation_for_position(pos: GridPosition) -> AngleDeg {
    solve(to_vector3(pos))
}

/// How the camera target is chosen each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Target set directly by drag input
    Free,
    /// Yaw target drifts continuously (menus, win/fail screens)
    #[default]
    AutoSpin,
    /// Target tracks the snake's head
    FollowSnake,
}

/// Current and target camera rotation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraState {
    pub current: AngleDeg,
    pub target: AngleDeg,
    pub mode: CameraMode,
    /// Set whenever the view changed; cleared by the renderer
    pub needs_redraw: bool,
}

impl CameraState {
    /// True once the camera has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Drift the yaw target by `-deg` (AutoSpin)
    pub fn spin(&mut self, deg: f32) {
        self.target.y = normalize_degrees(self.target.y - deg);
    }

    /// Point the target at a grid cell (FollowSnake)
    pub fn follow(&mut self, pos: GridPosition) {
        self.target = rotation_for_position(pos);
    }

    /// Move the current rotation one interpolation step toward the target
    pub fn step_toward_target(&mut self) {
        if self.is_settled() {
            return;
        }
        self.needs_redraw = true;

        if self.current.x != self.target.x {
            self.current.x = rotation_step(self.current.x, self.target.x);
        }
        if self.current.y != self.target.y {
            self.current.y = rotation_step(self.current.y, self.target.y);
        }
    }

    /// Direct manipulation: rotate the target by a drag offset and jump to it
    pub fn drag(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.target = AngleDeg {
            x: self.target.x - dy * sensitivity,
            y: self.target.y - dx * sensitivity,
        }
        .normalized();
        self.current = self.target;
        self.needs_redraw = true;
    }
}
