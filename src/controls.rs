//! Keyboard controls
//!
//! Keys name screen directions. On most of the cube the screen and the
//! snake's frame agree, but the follow camera views the far half of the Up
//! face and the near half of the Down face upside down, so turns there are
//! mirrored before they reach the snake.

use crate::consts::GRID_SIZE;
use crate::sim::{Direction, Face, GameState, GridPosition};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
    Enter,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn toward a screen direction
    Turn(Direction),
    /// Start, pause, resume or restart
    ToggleRunning,
}

impl Key {
    /// Parse a browser `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyW" => Some(Key::W),
            "KeyA" => Some(Key::A),
            "KeyS" => Some(Key::S),
            "KeyD" => Some(Key::D),
            "Space" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    pub fn command(self) -> Command {
        match self {
            Key::ArrowUp | Key::W => Command::Turn(Direction::Up),
            Key::ArrowDown | Key::S => Command::Turn(Direction::Down),
            Key::ArrowLeft | Key::A => Command::Turn(Direction::Left),
            Key::ArrowRight | Key::D => Command::Turn(Direction::Right),
            Key::Space | Key::Enter => Command::ToggleRunning,
        }
    }
}

/// Convert a screen direction into the head face's frame
pub fn screen_direction_to_snake(head: GridPosition, direction: Direction) -> Direction {
    let half = GRID_SIZE / 2;
    let inverted = match head.face {
        Face::Up => head.row >= half,
        Face::Down => head.row < half,
        _ => false,
    };

    if inverted {
        direction.opposite()
    } else {
        direction
    }
}

/// Apply a command to the game. Returns false if a turn was rejected.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match command {
        Command::Turn(direction) => {
            let direction = screen_direction_to_snake(state.snake.head(), direction);
            state.set_direction(direction)
        }
        Command::ToggleRunning => {
            state.toggle_running();
            true
        }
    }
}

/// Handle a key press by its browser code; unknown keys are ignored
pub fn handle_key_code(state: &mut GameState, code: &str) -> bool {
    match Key::from_code(code) {
        Some(key) => apply_command(state, key.command()),
        None => {
            log::debug!("Ignoring key {code}");
            false
        }
    }
}
