//! Per-frame game loop
//!
//! The host calls [`tick`] once per display frame with the time elapsed since
//! the previous call. Within a tick the order is fixed: input, snake step (if
//! due), status, camera target, camera interpolation. The follow camera needs
//! the post-move head, so the order matters.

use super::grid::Direction;
use super::projection::to_vector3;
use super::state::{GameState, GameStatus};
use super::topology::next_position;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested travel direction (already in the snake's frame)
    pub direction: Option<Direction>,
    /// Start/pause/restart toggle
    pub toggle_running: bool,
    /// Pointer pressed on the cube
    pub begin_drag: bool,
    /// Pointer drag offset in pixels since the last tick
    pub drag: Option<(f32, f32)>,
    /// Idle/demo mode - the game steers the snake itself
    pub idle_mode: bool,
}

/// Advance the game by one frame of `elapsed_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f64) {
    if input.toggle_running {
        state.toggle_running();
    }
    if input.begin_drag {
        state.begin_drag();
    }
    if let Some((dx, dy)) = input.drag {
        state.drag(dx, dy);
    }

    let mut direction = input.direction;
    if input.idle_mode {
        // Auto-start from the welcome screen
        if state.status == GameStatus::Welcome {
            state.toggle_running();
        }
        if state.status == GameStatus::Running {
            direction = direction.or_else(|| autopilot_direction(state));
        }
    }
    if let Some(direction) = direction {
        state.set_direction(direction);
    }

    state.clock_ms += elapsed_ms.max(0.0);

    if state.status == GameStatus::Running && state.snake.is_move_due(state.clock_ms) {
        state.step_snake();
        state.snake.last_move_ms = Some(state.clock_ms);
    }

    state.resolve_status();
    state.update_camera_target();
    state.camera.step_toward_target();
}

/// Greedy steering for demo mode.
///
/// Considers every direction except a reversal, drops the ones that would
/// hit an obstacle or the body, and heads for the food closest in 3D.
/// Returns `None` when every option is fatal.
pub fn autopilot_direction(state: &GameState) -> Option<Direction> {
    let snake = &state.snake;
    let head = snake.head();
    // The tail moves out of the way on this step
    let body_len = snake.len().saturating_sub(1);

    Direction::ALL
        .into_iter()
        .filter(|dir| !snake.heading.is_opposite(*dir))
        .filter_map(|dir| {
            let (next, _) = next_position(head, dir);
            let blocked = state.obstacles.contains(&next)
                || snake.segments.iter().take(body_len).any(|s| *s == next);
            if blocked {
                return None;
            }

            let here = to_vector3(next);
            let distance = state
                .food
                .iter()
                .map(|food| here.distance(to_vector3(*food)))
                .fold(f32::INFINITY, f32::min);
            Some((dir, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(dir, _)| dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::camera::{AngleDeg, CameraMode, rotation_for_position};
    use crate::sim::grid::{Face, GridPosition};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// A running game with nothing on the board but the snake
    fn empty_running_game() -> GameState {
        let mut state = GameState::new(12345);
        state.obstacles.clear();
        state.food = vec![GridPosition::new(Face::Back, 8, 8)];
        tick(
            &mut state,
            &TickInput {
                toggle_running: true,
                ..Default::default()
            },
            0.0,
        );
        state
    }

    #[test]
    fn test_tick_welcome_to_running() {
        let mut state = GameState::new(12345);
        assert_eq!(state.status, GameStatus::Welcome);

        // Tick without input - nothing moves
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.status, GameStatus::Welcome);
        assert_eq!(state.snake.head(), GridPosition::new(Face::Front, 0, 0));

        let input = TickInput {
            toggle_running: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_MS);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.camera.mode, CameraMode::FollowSnake);
        // First running tick steps immediately
        assert_eq!(state.snake.head(), GridPosition::new(Face::Front, 0, 1));
    }

    #[test]
    fn test_steps_gated_by_move_period() {
        let mut state = empty_running_game();
        assert_eq!(state.snake.head().col, 1);

        // 150 ms period: 8 frames of 16.7 ms = 133 ms is not enough
        for _ in 0..8 {
            tick(&mut state, &TickInput::default(), FRAME_MS);
        }
        assert_eq!(state.snake.head().col, 1);

        tick(&mut state, &TickInput::default(), 20.0);
        assert_eq!(state.snake.head().col, 2);
    }

    #[test]
    fn test_pause_freezes_snake() {
        let mut state = empty_running_game();
        let toggle = TickInput {
            toggle_running: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, FRAME_MS);
        assert_eq!(state.status, GameStatus::Paused);

        let head = state.snake.head();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), FRAME_MS);
        }
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.camera.mode, CameraMode::AutoSpin);

        tick(&mut state, &toggle, FRAME_MS);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn test_direction_input_applies_before_step() {
        let mut state = empty_running_game();
        let input = TickInput {
            direction: Some(Direction::Up),
            ..Default::default()
        };
        tick(&mut state, &input, 200.0);
        assert_eq!(state.snake.head(), GridPosition::new(Face::Front, 1, 1));

        // Reversal is ignored
        let input = TickInput {
            direction: Some(Direction::Down),
            ..Default::default()
        };
        tick(&mut state, &input, 200.0);
        assert_eq!(state.snake.head(), GridPosition::new(Face::Front, 2, 1));
    }

    #[test]
    fn test_camera_follows_post_move_head() {
        let mut state = empty_running_game();
        tick(&mut state, &TickInput::default(), 200.0);
        let expected = rotation_for_position(state.snake.head());
        assert_eq!(state.camera.target, expected);

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.camera.current, expected);
        state.camera.needs_redraw = false;
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(!state.camera.needs_redraw);
    }

    #[test]
    fn test_crash_on_obstacle_fails_run() {
        let mut state = empty_running_game();
        state.obstacles = vec![GridPosition::new(Face::Front, 0, 2)];
        tick(&mut state, &TickInput::default(), 200.0);
        assert!(state.snake.crashed);
        assert_eq!(state.status, GameStatus::Fail);
        assert_eq!(state.camera.mode, CameraMode::AutoSpin);

        // Nothing moves after the crash
        let head = state.snake.head();
        tick(&mut state, &TickInput::default(), 200.0);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn test_auto_spin_drifts_yaw() {
        let mut state = GameState::new(7);
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert!((state.camera.target.y + 0.3).abs() < 1e-6);
        assert!(state.camera.needs_redraw);
    }

    #[test]
    fn test_free_camera_drag() {
        let mut state = GameState::new(8);
        let input = TickInput {
            begin_drag: true,
            drag: Some((0.0, 20.0)),
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_MS);
        assert_eq!(state.camera.mode, CameraMode::Free);
        assert_eq!(state.camera.target, AngleDeg::new(-5.0, 0.0));
        assert_eq!(state.camera.current, state.camera.target);

        // Free mode keeps the target where the drag left it
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.camera.target, AngleDeg::new(-5.0, 0.0));
    }

    #[test]
    fn test_redraw_flags_follow_snake() {
        let mut state = empty_running_game();
        state.take_redraw();
        tick(&mut state, &TickInput::default(), 200.0);
        assert_eq!(state.redraw.set_faces(), vec![Face::Front]);
    }

    #[test]
    fn test_autopilot_avoids_obstacle() {
        let mut state = empty_running_game();
        // Head at Front(0,1) heading Right; block the cell ahead
        state.obstacles = vec![GridPosition::new(Face::Front, 0, 2)];
        let dir = autopilot_direction(&state).unwrap();
        assert_ne!(dir, Direction::Right);
        assert_ne!(dir, Direction::Left);
    }

    #[test]
    fn test_idle_mode_eats_food() {
        let mut state = GameState::new(4242);
        state.obstacles.clear();
        state.food = vec![GridPosition::new(Face::Front, 5, 5)];
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &input, 200.0);
            if state.status != GameStatus::Running {
                break;
            }
        }
        assert_eq!(state.status, GameStatus::Win);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                toggle_running: true,
                ..Default::default()
            },
            TickInput {
                direction: Some(Direction::Up),
                ..Default::default()
            },
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(200) {
            tick(&mut state1, input, 50.0);
            tick(&mut state2, input, 50.0);
        }

        assert_eq!(state1.status, state2.status);
        assert_eq!(state1.snake.segments, state2.snake.segments);
        assert_eq!(state1.camera.current, state2.camera.current);
    }
}
