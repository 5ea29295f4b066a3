//! Input state management
//!
//! Polls the keyboard through macroquad once per frame and turns key edges
//! into simulation `Command`s.

use macroquad::prelude::*;
use super::{Action, Command};

/// Key bindings. One key may drive several actions; the simulation ignores
/// the ones that don't apply in its current state (Space attacks while
/// playing and restarts on the game over screen).
const BINDINGS: &[(KeyCode, &[Action])] = &[
    (KeyCode::W, &[Action::MoveUp]),
    (KeyCode::S, &[Action::MoveDown]),
    (KeyCode::A, &[Action::MoveLeft]),
    (KeyCode::D, &[Action::MoveRight]),
    (KeyCode::Up, &[Action::MoveUp]),
    (KeyCode::Down, &[Action::MoveDown]),
    (KeyCode::Left, &[Action::MoveLeft]),
    (KeyCode::Right, &[Action::MoveRight]),
    (KeyCode::Space, &[Action::Attack, Action::Restart]),
    (KeyCode::Escape, &[Action::Quit]),
];

/// Debug overlay toggle (handled by the frame loop, not the simulation)
const OVERLAY_KEY: KeyCode = KeyCode::F3;

/// Actions bound to `key`
pub fn actions_for(key: KeyCode) -> &'static [Action] {
    BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// Commands for a key going down (`pressed`) or up
pub fn commands_for(key: KeyCode, pressed: bool) -> impl Iterator<Item = Command> {
    actions_for(key).iter().map(move |&action| {
        if pressed {
            Command::Press(action)
        } else {
            Command::Release(action)
        }
    })
}

/// Keyboard state for the frame loop
pub struct InputState {
    commands: Vec<Command>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Call once per frame. Returns this frame's commands, presses first.
    pub fn poll(&mut self) -> &[Command] {
        self.commands.clear();

        for &(key, _) in BINDINGS {
            if is_key_pressed(key) {
                self.commands.extend(commands_for(key, true));
            }
        }
        for &(key, _) in BINDINGS {
            if is_key_released(key) {
                self.commands.extend(commands_for(key, false));
            }
        }

        &self.commands
    }

    /// Was the debug overlay key pressed this frame?
    pub fn overlay_toggled(&self) -> bool {
        is_key_pressed(OVERLAY_KEY)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
