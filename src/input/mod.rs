//! Input handling
//!
//! Provides an action-based input layer: keyboard keys map to `Action`s,
//! and key edges become `Command`s for the simulation.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
