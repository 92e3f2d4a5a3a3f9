//! Game state and status machine
//!
//! Everything a running game owns lives in [`GameState`], which the host
//! passes by `&mut` into [`tick`](super::tick::tick).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::{AngleDeg, CameraMode, CameraState};
use super::grid::{Direction, Face, FaceMap, GridPosition};
use super::snake::{Snake, StepReport};
use super::topology::next_position;
use crate::consts::{FACE_COUNT, GRID_SIZE};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fresh board, waiting for the first start
    Welcome,
    /// Snake is moving
    Running,
    /// Game is paused
    Paused,
    /// All food eaten
    Win,
    /// Snake crashed
    Fail,
}

/// Read-only view of the board for a renderer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub status: GameStatus,
    /// Snake segments, head first
    pub snake: Vec<GridPosition>,
    pub direction: Direction,
    pub food: Vec<GridPosition>,
    pub obstacles: Vec<GridPosition>,
    pub camera: AngleDeg,
    pub camera_mode: CameraMode,
    /// Faces that need to be redrawn
    pub redraw: FaceMap<bool>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Placement RNG
    rng: Pcg32,
    /// Active tuning
    pub settings: Settings,
    pub status: GameStatus,
    /// Game clock (ms), advanced by every tick
    pub clock_ms: f64,
    pub snake: Snake,
    /// Food cells (distinct)
    pub food: Vec<GridPosition>,
    /// Obstacle cells (distinct, never under food)
    pub obstacles: Vec<GridPosition>,
    pub camera: CameraState,
    /// Faces whose contents changed since the renderer last cleared them
    pub redraw: FaceMap<bool>,
}

impl GameState {
    /// Create a new game state with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    /// Create a new game state with the given seed and settings.
    ///
    /// Settings that fail validation are replaced by the defaults.
    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Settings::default()
            }
        };

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            snake: Snake::new(settings.move_period_ms),
            settings,
            status: GameStatus::Welcome,
            clock_ms: 0.0,
            food: Vec::new(),
            obstacles: Vec::new(),
            camera: CameraState::default(),
            redraw: FaceMap::filled(true),
        };

        state.plant_objects();
        log::info!("Game created with seed {}", seed);

        state
    }

    /// A uniformly random cell on the cube
    fn random_position(&mut self) -> GridPosition {
        let face = Face::ALL[self.rng.random_range(0..Face::ALL.len())];
        let row = self.rng.random_range(0..GRID_SIZE);
        let col = self.rng.random_range(0..GRID_SIZE);
        GridPosition::new(face, row, col)
    }

    /// Reset the snake and scatter fresh food and obstacles.
    ///
    /// Counts are capped to the free cells so planting always terminates,
    /// even if `settings` was edited past what `Settings::validate` allows.
    pub fn plant_objects(&mut self) {
        self.snake = Snake::new(self.settings.move_period_ms);

        let cells = FACE_COUNT * (GRID_SIZE * GRID_SIZE) as usize;
        let food_count = self.settings.food_count.min(cells - self.snake.len());
        if food_count < self.settings.food_count {
            log::warn!(
                "Only {} of {} food fit on the board",
                food_count,
                self.settings.food_count
            );
        }

        self.food.clear();
        while self.food.len() < food_count {
            let pos = self.random_position();
            if !self.snake.occupies(&pos) && !self.food.contains(&pos) {
                self.food.push(pos);
            }
        }

        // Keep the first cell in front of the snake clear
        let (ahead, _) = next_position(self.snake.head(), self.snake.direction);

        let reserved =
            self.snake.len() + self.food.len() + usize::from(!self.food.contains(&ahead));
        let obstacle_count = self.settings.obstacle_count.min(cells - reserved);
        if obstacle_count < self.settings.obstacle_count {
            log::warn!(
                "Only {} of {} obstacles fit on the board",
                obstacle_count,
                self.settings.obstacle_count
            );
        }

        self.obstacles.clear();
        while self.obstacles.len() < obstacle_count {
            let pos = self.random_position();
            if pos != ahead
                && !self.snake.occupies(&pos)
                && !self.food.contains(&pos)
                && !self.obstacles.contains(&pos)
            {
                self.obstacles.push(pos);
            }
        }

        self.redraw.fill(true);
        log::info!(
            "Planted {} food and {} obstacles",
            self.food.len(),
            self.obstacles.len()
        );
    }

    /// Start, pause, resume or restart depending on the current status
    pub fn toggle_running(&mut self) {
        let previous = self.status;
        self.status = match self.status {
            GameStatus::Welcome | GameStatus::Paused => GameStatus::Running,
            GameStatus::Win | GameStatus::Fail => {
                self.plant_objects();
                GameStatus::Running
            }
            GameStatus::Running => GameStatus::Paused,
        };

        self.camera.mode = if self.status == GameStatus::Running {
            CameraMode::FollowSnake
        } else {
            CameraMode::AutoSpin
        };
        self.redraw.fill(true);

        log::info!("Status {:?} -> {:?}", previous, self.status);
    }

    /// Request a new travel direction; reversals are rejected
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_direction(direction)
    }

    /// Grab the cube: outside of play the camera switches to free rotation
    pub fn begin_drag(&mut self) {
        if self.status != GameStatus::Running {
            self.camera.mode = CameraMode::Free;
        }
    }

    /// Rotate the cube by a pointer drag (only in free camera mode)
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if self.camera.mode == CameraMode::Free {
            self.camera.drag(dx, dy, self.settings.drag_sensitivity);
        }
    }

    /// Move the snake one cell and flag the faces it touched
    pub fn step_snake(&mut self) -> StepReport {
        let speedup = self.settings.speedup();
        let report = self.snake.advance(&mut self.food, &self.obstacles, speedup);
        self.redraw.merge(&report.touched);
        report
    }

    /// Finish the run on a crash or when the last food is eaten
    pub fn resolve_status(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let outcome = if self.snake.crashed {
            GameStatus::Fail
        } else if self.food.is_empty() {
            GameStatus::Win
        } else {
            return;
        };

        log::info!(
            "Run over: {:?} with length {} after {:.1}s",
            outcome,
            self.snake.len(),
            self.clock_ms / 1000.0
        );
        self.status = outcome;
        self.camera.mode = CameraMode::AutoSpin;
        self.redraw.fill(true);
    }

    /// Pick the camera target for the current mode
    pub fn update_camera_target(&mut self) {
        match self.camera.mode {
            CameraMode::FollowSnake => self.camera.follow(self.snake.head()),
            CameraMode::AutoSpin => self.camera.spin(self.settings.auto_spin_deg_per_tick),
            CameraMode::Free => {}
        }
    }

    /// True if any face or the camera needs redrawing
    pub fn needs_redraw(&self) -> bool {
        self.redraw.any() || self.camera.needs_redraw
    }

    /// Hand the pending face flags to the renderer and clear them
    pub fn take_redraw(&mut self) -> FaceMap<bool> {
        std::mem::replace(&mut self.redraw, FaceMap::filled(false))
    }

    /// Clear one face after the renderer has redrawn it
    pub fn clear_redraw(&mut self, face: Face) {
        self.redraw[face] = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            snake: self.snake.segments.iter().copied().collect(),
            direction: self.snake.direction,
            food: self.food.clone(),
            obstacles: self.obstacles.clone(),
            camera: self.camera.current,
            camera_mode: self.camera.mode,
            redraw: self.redraw,
        }
    }
}
