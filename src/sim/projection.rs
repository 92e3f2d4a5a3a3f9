//! Grid cell to 3D point projection
//!
//! The cube is centred on the origin with unit edge length, so every face
//! spans [-0.5, 0.5] on its two free axes and is pinned to ±0.5 on the third.

use glam::Vec3;

use super::grid::{Face, GridPosition};
use crate::consts::GRID_SIZE;

/// Coordinate span of a face along one axis: (value at index 0 side, value at far side)
type AxisRange = (f32, f32);

/// Per-axis ranges covered by a face. The pinned axis has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

/// Which grid coordinate drives an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    Row,
    Col,
    Pinned,
}

/// Axis ranges for each face, oriented to match the topology table
pub fn face_ranges(face: Face) -> FaceRanges {
    match face {
        Face::Front => FaceRanges {
            x: (-0.5, 0.5),
            y: (-0.5, 0.5),
            z: (0.5, 0.5),
        },
        Face::Back => FaceRanges {
            x: (0.5, -0.5),
            y: (-0.5, 0.5),
            z: (-0.5, -0.5),
        },
        Face::Up => FaceRanges {
            x: (-0.5, 0.5),
            y: (0.5, 0.5),
            z: (0.5, -0.5),
        },
        Face::Down => FaceRanges {
            x: (-0.5, 0.5),
            y: (-0.5, -0.5),
            z: (-0.5, 0.5),
        },
        Face::Left => FaceRanges {
            x: (-0.5, -0.5),
            y: (-0.5, 0.5),
            z: (-0.5, 0.5),
        },
        Face::Right => FaceRanges {
            x: (0.5, 0.5),
            y: (-0.5, 0.5),
            z: (0.5, -0.5),
        },
    }
}

/// (x, y, z) drivers for a face
fn axis_drivers(face: Face) -> [Driver; 3] {
    use Driver::*;
    match face {
        Face::Front | Face::Back => [Col, Row, Pinned],
        Face::Left | Face::Right => [Pinned, Row, Col],
        Face::Up | Face::Down => [Col, Pinned, Row],
    }
}

/// Centre of the cell at `index` within `range`
#[inline]
fn cell_centre(range: AxisRange, index: i32) -> f32 {
    let ratio = (index as f32 + 0.5) / GRID_SIZE as f32;
    range.0 + (range.1 - range.0) * ratio
}

/// Map a grid cell to the 3D point at its centre on the unit cube
pub fn to_vector3(pos: GridPosition) -> Vec3 {
    assert!(pos.is_on_face(), "cannot project off-face position {pos:?}");

    let ranges = face_ranges(pos.face);
    let drivers = axis_drivers(pos.face);

    let coord = |range: AxisRange, driver: Driver| match driver {
        Driver::Row => cell_centre(range, pos.row),
        Driver::Col => cell_centre(range, pos.col),
        Driver::Pinned => range.0,
    };

    Vec3::new(
        coord(ranges.x, drivers[0]),
        coord(ranges.y, drivers[1]),
        coord(ranges.z, drivers[2]),
    )
}
