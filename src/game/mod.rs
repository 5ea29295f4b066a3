//! Game Module
//!
//! The arena simulation and its presentation.
//!
//! Key pieces:
//! - Simulation: owns the hero, the arena and the spawn rules; advanced by `step`
//! - Commands: input arrives as `Command`s, never as raw key polling
//! - Events: per-step record of what happened (kills, hits, waves, game over)
//! - Snapshot: read-only view handed to the renderer
//!
//! Gameplay code never touches the window. Only `renderer` draws.

pub mod clock;
pub mod components;
pub mod tuning;
pub mod hero;
pub mod monster;
pub mod treasure;
pub mod world;
pub mod spawn;
pub mod event;
pub mod collision;
pub mod snapshot;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use runtime::{Flow, GameState, Simulation};
pub use tuning::Tuning;
pub use snapshot::Snapshot;
pub use renderer::{draw_frame, Sprites};
