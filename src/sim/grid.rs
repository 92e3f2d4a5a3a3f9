//! Cube faces, travel directions and grid cells

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::consts::{FACE_COUNT, GRID_SIZE};

/// One of the six faces of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    Front = 0,
    Back = 1,
    Up = 2,
    Down = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    /// All six faces in canonical order
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
    ];

    /// Stable index into face-keyed arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Up => "up",
            Face::Down => "down",
            Face::Left => "left",
            Face::Right => "right",
        }
    }
}

/// Direction of travel in the current face's row/col frame.
///
/// `Up` increases the row, `Right` increases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the (d_row, d_col) for one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A cell on the cube surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub face: Face,
    pub row: i32,
    pub col: i32,
}

impl GridPosition {
    pub const fn new(face: Face, row: i32, col: i32) -> Self {
        Self { face, row, col }
    }

    /// True if both coordinates are inside the face grid
    #[inline]
    pub fn is_on_face(&self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }

    /// One step in `dir` without leaving the face (may land off the grid)
    pub fn offset(&self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.delta();
        Self {
            face: self.face,
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Fixed-size storage with one slot per face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceMap<T>([T; FACE_COUNT]);

impl<T: Copy> FaceMap<T> {
    pub fn filled(value: T) -> Self {
        Self([value; FACE_COUNT])
    }

    pub fn fill(&mut self, value: T) {
        self.0 = [value; FACE_COUNT];
    }

    /// Iterate faces together with their values
    pub fn iter(&self) -> impl Iterator<Item = (Face, T)> + '_ {
        Face::ALL.iter().map(move |&face| (face, self.0[face.index()]))
    }
}

impl FaceMap<bool> {
    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    /// Faces whose flag is set
    pub fn set_faces(&self) -> Vec<Face> {
        self.iter().filter(|&(_, flag)| flag).map(|(face, _)| face).collect()
    }

    /// Set every flag that is set in `other`
    pub fn merge(&mut self, other: &FaceMap<bool>) {
        for (slot, &flag) in self.0.iter_mut().zip(other.0.iter()) {
            *slot |= flag;
        }
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.index()]
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.index()]
    }
}
