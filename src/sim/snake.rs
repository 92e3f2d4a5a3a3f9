//! The snake: movement across faces, feeding and collisions

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Direction, Face, FaceMap, GridPosition};
use super::topology::next_position;
use crate::consts::SELF_COLLISION_SKIP;

/// Where every new snake starts
pub const SNAKE_START: GridPosition = GridPosition::new(Face::Front, 0, 0);
/// Initial travel direction
pub const SNAKE_START_DIRECTION: Direction = Direction::Right;

/// What happened during one snake step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Head landed on food and the snake grew
    pub ate_food: bool,
    /// Head landed on an obstacle or the snake's own body
    pub crashed: bool,
    /// Faces whose occupancy changed
    pub touched: FaceMap<bool>,
}

/// Speed tuning applied when the snake eats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speedup {
    /// Multiplier applied to the move period per food eaten
    pub factor: f64,
    /// Floor for the move period (ms)
    pub min_period_ms: f64,
}

/// The snake on the cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, head first
    pub segments: VecDeque<GridPosition>,
    /// Current direction of travel in the head face's frame
    pub direction: Direction,
    /// Direction of the last step actually taken, in the head face's frame
    pub heading: Direction,
    /// Time between steps (ms); shrinks as food is eaten
    pub move_period_ms: f64,
    pub crashed: bool,
    /// Game clock at the last step, `None` before the first one
    pub last_move_ms: Option<f64>,
}

impl Snake {
    /// A one-segment snake at the start cell
    pub fn new(move_period_ms: f64) -> Self {
        Self {
            segments: VecDeque::from([SNAKE_START]),
            direction: SNAKE_START_DIRECTION,
            heading: SNAKE_START_DIRECTION,
            move_period_ms,
            crashed: false,
            last_move_ms: None,
        }
    }

    /// Head position
    pub fn head(&self) -> GridPosition {
        *self.segments.front().expect("snake has no segments")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if any segment occupies `pos`
    pub fn occupies(&self, pos: &GridPosition) -> bool {
        self.segments.contains(pos)
    }

    /// Change direction; a reversal into the second segment is rejected.
    ///
    /// Checked against the last step taken, not the last request, so two
    /// quick turns between steps cannot fold the snake back on itself.
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// True once at least `move_period_ms` has passed since the last step
    pub fn is_move_due(&self, now_ms: f64) -> bool {
        match self.last_move_ms {
            None => true,
            Some(last) => now_ms - last >= self.move_period_ms,
        }
    }

    /// Move one cell: the tail segment is recycled as the new head.
    ///
    /// Returns the cell the tail vacated.
    fn advance_head(&mut self) -> GridPosition {
        let head = self.head();
        let vacated = self.segments.pop_back().expect("snake has no segments");

        let (next, direction) = next_position(head, self.direction);
        if next.face != head.face {
            log::debug!(
                "Snake crossed {} -> {} heading {:?}",
                head.face.label(),
                next.face.label(),
                direction
            );
        }

        self.direction = direction;
        self.heading = direction;
        self.segments.push_front(next);
        vacated
    }

    /// Eat food under the head if there is any: grow back into `vacated` and speed up
    fn feed(&mut self, food: &mut Vec<GridPosition>, vacated: GridPosition, speedup: Speedup) -> bool {
        let head = self.head();
        let Some(index) = food.iter().position(|f| *f == head) else {
            return false;
        };

        food.remove(index);
        self.segments.push_back(vacated);
        self.move_period_ms = (self.move_period_ms * speedup.factor).max(speedup.min_period_ms);

        log::debug!(
            "Ate food at {:?}, length {}, period {:.1}ms",
            head,
            self.len(),
            self.move_period_ms
        );
        true
    }

    /// Whether the head sits on an obstacle or on its own body.
    ///
    /// The first segments behind the head are skipped: right after a step
    /// they are its immediate neighbours and can never be hit.
    pub fn is_colliding(&self, obstacles: &[GridPosition]) -> bool {
        let head = self.head();
        obstacles.contains(&head)
            || self
                .segments
                .iter()
                .skip(SELF_COLLISION_SKIP)
                .any(|segment| *segment == head)
    }

    /// Advance one step: move, feed, then check for a crash
    pub fn advance(
        &mut self,
        food: &mut Vec<GridPosition>,
        obstacles: &[GridPosition],
        speedup: Speedup,
    ) -> StepReport {
        let old_head = self.head();
        let vacated = self.advance_head();

        let ate_food = self.feed(food, vacated, speedup);

        let crashed = self.is_colliding(obstacles);
        if crashed {
            self.crashed = true;
            log::debug!("Snake crashed at {:?}", self.head());
        }

        let mut touched = FaceMap::filled(false);
        touched[vacated.face] = true;
        touched[old_head.face] = true;
        touched[self.head().face] = true;

        StepReport {
            ate_food,
            crashed,
            touched,
        }
    }
}
