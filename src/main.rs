//! Cube Snake entry point
//!
//! Runs the game headless: a fixed-rate host loop feeds `tick` while the demo
//! autopilot steers. Useful for soak-testing the core and for dumping board
//! snapshots that a renderer would consume.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use cube_snake::sim::{GameState, GameStatus, TickInput, tick};
    use cube_snake::{Pace, Settings};

    /// Command-line arguments.
    ///
    /// CLI values override settings loaded from `--settings`.
    #[derive(Parser, Debug)]
    #[command(name = "cube-snake", about = "Snake on the surface of a cube (headless demo)")]
    pub struct CliArgs {
        /// Run seed (defaults to the current time).
        #[arg(long)]
        pub seed: Option<u64>,

        /// Number of frames to simulate.
        #[arg(long, default_value_t = 60 * 60)]
        pub ticks: u32,

        /// Milliseconds per simulated frame.
        #[arg(long, default_value_t = 1000.0 / 60.0)]
        pub frame_ms: f64,

        /// Starting pace (relaxed, normal, frantic).
        #[arg(long)]
        pub pace: Option<String>,

        /// Path to a JSON settings file.
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// Restart after a win or a crash instead of stopping.
        #[arg(long)]
        pub restart: bool,

        /// Print the final board snapshot as JSON.
        #[arg(long)]
        pub json: bool,
    }

    fn time_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn run() {
        env_logger::init();
        let args = CliArgs::parse();
        log::info!("Cube Snake (native) starting...");

        let mut settings = Settings::load(args.settings.as_deref());
        if let Some(name) = &args.pace {
            match Pace::from_str(name) {
                Some(pace) => settings.apply_pace(pace),
                None => log::warn!("Unknown pace {name:?}, keeping {}", settings.pace.as_str()),
            }
        }

        let seed = args.seed.unwrap_or_else(time_seed);
        let mut state = GameState::with_settings(seed, settings);
        log::info!("Game initialized with seed: {}", seed);

        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let restart = TickInput {
            toggle_running: true,
            ..demo.clone()
        };

        let mut runs = 0u32;
        let mut best = 0usize;
        for _ in 0..args.ticks {
            let finished = matches!(state.status, GameStatus::Win | GameStatus::Fail);
            if finished && !args.restart {
                break;
            }
            let input = if finished { &restart } else { &demo };
            if finished || state.status == GameStatus::Welcome {
                runs += 1;
            }

            tick(&mut state, input, args.frame_ms);
            best = best.max(state.snake.len());

            // Nothing draws in headless mode
            state.take_redraw();
            state.camera.needs_redraw = false;
        }

        log::info!(
            "Simulated {:.1}s over {} run(s): status {:?}, best length {}, food left {}",
            state.clock_ms / 1000.0,
            runs,
            state.status,
            best,
            state.food.len()
        );

        if args.json {
            match serde_json::to_string_pretty(&state.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize snapshot: {e}"),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // On the web the host page drives `tick`; there is no native loop to run
}
