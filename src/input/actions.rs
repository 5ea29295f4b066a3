//! Game action definitions
//!
//! Actions are what the player wants, independent of which key asked for it.
//! The simulation only ever sees `Command`s built from these.

/// All possible game actions that can be triggered by input
///
/// Keyboard mapping:
/// - W/S/A/D = Move up/down/left/right
/// - Space = Attack (Restart once the game is over)
/// - Escape = Quit (only once the game is over)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Attack,

    // Game over screen
    Restart,
    Quit,
}

/// A discrete input event delivered to the simulation between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Press(Action),
    Release(Action),
}
