//! Hero Arena: a small real-time arena game
//!
//! A hero moves around an 800x600 field, collects treasure and fights a
//! growing crowd of randomly wandering monsters. Attacking makes the hero
//! briefly invincible and lets it destroy monsters on contact.
//!
//! Controls: WASD / arrows to move, Space to attack (or restart after game
//! over), Escape to quit from the game over screen, F3 for the debug overlay.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;

use macroquad::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use config::Settings;
use game::{draw_frame, Flow, Simulation, Sprites, Tuning};
use game::tuning::{ARENA_HEIGHT, ARENA_WIDTH};
use input::InputState;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Hero Arena v{}", VERSION),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Log to stderr. `RUST_LOG` picks the filter, `LOG_FORMAT=json` switches
/// to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_tracing();

    let settings_path = Settings::path();
    let settings = match Settings::load_or_default(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %settings_path.display(), error = %e, "bad settings file, using defaults");
            Settings::default()
        }
    };

    let seed = settings.seed.unwrap_or_else(now_nanos);
    let sprites = Sprites::load(&settings.sprites).await;

    let mut sim = Simulation::new(Tuning::default(), seed);
    let mut input = InputState::new();
    let mut show_overlay = settings.show_debug_overlay;

    info!(version = VERSION, fps_limit = ?settings.fps_limit, "hero arena started");

    'frames: loop {
        let frame_start = get_time();

        if input.overlay_toggled() {
            show_overlay = !show_overlay;
        }

        let commands = input.poll().to_vec();
        for command in commands {
            if sim.handle(command) == Flow::Quit {
                break 'frames;
            }
        }

        sim.step(get_frame_time() as f64);

        draw_frame(&sim.snapshot(), &sprites, show_overlay);

        // FPS limiting: movement is per step, so the frame rate sets game speed
        if let Some(target_frame_time) = settings.fps_limit.frame_time() {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;

            if remaining > 0.0 {
                // Native: sleep for the bulk, then spin for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: no thread::sleep, the browser paces frames
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {}
                }
            }
        }

        next_frame().await;
    }

    info!(score = sim.hero().score, "quit");
}
