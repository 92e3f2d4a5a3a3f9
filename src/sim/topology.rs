//! Face-crossing topology of the cube surface
//!
//! Moving off the edge of one face lands the snake on a neighbouring face,
//! possibly with its travel direction rotated. The whole unfolding is encoded
//! in a single 24-entry table ([`edge_crossing`]); everything else here is
//! derived from it.

use super::grid::{Direction, Face, GridPosition};
use crate::consts::GRID_SIZE;

/// Where a position lands after leaving `face` through one of its edges.
///
/// Edges are named by the [`Direction`] that leads off the face through them:
/// the `Up` edge is row `GRID_SIZE - 1`, the `Left` edge is column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCrossing {
    /// The adjacent face
    pub face: Face,
    /// Edge of the adjacent face the position enters through
    pub edge: Direction,
    /// Whether the coordinate along the shared edge is reversed (`N - 1 - v`)
    pub flipped: bool,
}

impl EdgeCrossing {
    const fn new(face: Face, edge: Direction, flipped: bool) -> Self {
        Self {
            face,
            edge,
            flipped,
        }
    }

    /// Travel direction on the new face: straight away from the entry edge
    pub fn direction(&self) -> Direction {
        self.edge.opposite()
    }
}

/// The adjacency table: for each face and each exit edge, the face it joins
/// and how coordinates carry over.
///
/// The Up and Down faces are laid out so that their rows run from the front
/// edge towards the back (Up) and from the back edge towards the front
/// (Down). That is why the Back face and the side faces cross onto them with
/// rotated directions.
pub fn edge_crossing(face: Face, exit: Direction) -> EdgeCrossing {
    use Direction as D;
    use Face::*;

    match (face, exit) {
        // Front face edges
        (Front, D::Up) => EdgeCrossing::new(Up, D::Down, false),
        (Front, D::Down) => EdgeCrossing::new(Down, D::Up, false),
        (Front, D::Right) => EdgeCrossing::new(Right, D::Left, false),
        (Front, D::Left) => EdgeCrossing::new(Left, D::Right, false),

        // Back face edges
        (Back, D::Up) => EdgeCrossing::new(Up, D::Up, true),
        (Back, D::Down) => EdgeCrossing::new(Down, D::Down, true),
        (Back, D::Right) => EdgeCrossing::new(Left, D::Left, false),
        (Back, D::Left) => EdgeCrossing::new(Right, D::Right, false),

        // Up face edges
        (Up, D::Up) => EdgeCrossing::new(Back, D::Up, true),
        (Up, D::Down) => EdgeCrossing::new(Front, D::Up, false),
        (Up, D::Right) => EdgeCrossing::new(Right, D::Up, false),
        (Up, D::Left) => EdgeCrossing::new(Left, D::Up, true),

        // Down face edges
        (Down, D::Up) => EdgeCrossing::new(Front, D::Down, false),
        (Down, D::Down) => EdgeCrossing::new(Back, D::Down, true),
        (Down, D::Right) => EdgeCrossing::new(Right, D::Down, true),
        (Down, D::Left) => EdgeCrossing::new(Left, D::Down, false),

        // Left face edges
        (Left, D::Up) => EdgeCrossing::new(Up, D::Left, true),
        (Left, D::Down) => EdgeCrossing::new(Down, D::Left, false),
        (Left, D::Right) => EdgeCrossing::new(Front, D::Left, false),
        (Left, D::Left) => EdgeCrossing::new(Back, D::Right, false),

        // Right face edges
        (Right, D::Up) => EdgeCrossing::new(Up, D::Right, false),
        (Right, D::Down) => EdgeCrossing::new(Down, D::Right, true),
        (Right, D::Right) => EdgeCrossing::new(Back, D::Left, false),
        (Right, D::Left) => EdgeCrossing::new(Front, D::Right, false),
    }
}

/// The edge a one-step overflow went through, if any.
///
/// Panics if both axes are out of range: a single step only moves one axis.
fn exit_edge(pos: &GridPosition) -> Option<Direction> {
    let row_exit = if pos.row >= GRID_SIZE {
        Some(Direction::Up)
    } else if pos.row < 0 {
        Some(Direction::Down)
    } else {
        None
    };
    let col_exit = if pos.col >= GRID_SIZE {
        Some(Direction::Right)
    } else if pos.col < 0 {
        Some(Direction::Left)
    } else {
        None
    };

    match (row_exit, col_exit) {
        (Some(_), Some(_)) => panic!("position {pos:?} overflows both axes"),
        (exit, None) | (None, exit) => exit,
    }
}

/// Resolve a position that stepped off its face onto the adjacent face.
///
/// `pos` must be at most one step outside the grid on a single axis. In-grid
/// positions are returned unchanged together with `dir`.
pub fn cross_face(pos: GridPosition, dir: Direction) -> (GridPosition, Direction) {
    let Some(exit) = exit_edge(&pos) else {
        return (pos, dir);
    };
    assert!(
        (-1..=GRID_SIZE).contains(&pos.row) && (-1..=GRID_SIZE).contains(&pos.col),
        "position {pos:?} is more than one step off its face"
    );

    let crossing = edge_crossing(pos.face, exit);

    // Coordinate along the shared edge, taken from the axis that did not overflow
    let along = match exit {
        Direction::Up | Direction::Down => pos.col,
        Direction::Left | Direction::Right => pos.row,
    };
    let along = if crossing.flipped {
        GRID_SIZE - 1 - along
    } else {
        along
    };

    let (row, col) = match crossing.edge {
        Direction::Up => (GRID_SIZE - 1, along),
        Direction::Down => (0, along),
        Direction::Left => (along, 0),
        Direction::Right => (along, GRID_SIZE - 1),
    };

    (
        GridPosition::new(crossing.face, row, col),
        crossing.direction(),
    )
}

/// Take one step from `pos` in `dir`, crossing onto a neighbouring face if needed
pub fn next_position(pos: GridPosition, dir: Direction) -> (GridPosition, Direction) {
    cross_face(pos.offset(dir), dir)
}
