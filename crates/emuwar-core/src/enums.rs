//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// Legal edges: `Instructions -> Playing`, `Playing -> Victory`,
/// `Playing -> GameOver`, and any phase back to `Instructions` on reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a match.
    #[default]
    Instructions,
    /// Match in progress; ticks and volleys advance the world.
    Playing,
    /// Every target destroyed.
    Victory,
    /// Out of lives.
    GameOver,
}

impl GamePhase {
    /// Victory and GameOver end the match; nothing mutates until reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }

    /// Whether `self -> next` is an edge of the phase state machine.
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        match (self, next) {
            (_, GamePhase::Instructions) => true,
            (GamePhase::Instructions, GamePhase::Playing) => true,
            (GamePhase::Playing, GamePhase::Victory | GamePhase::GameOver) => true,
            _ => false,
        }
    }
}

/// Which way the player sprite faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Movement direction requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a key name to a direction.
    ///
    /// Accepts browser arrow-key names (`ArrowUp`, ...) and the plain
    /// lowercase words. Anything else maps to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "up" => Some(Direction::Up),
            "ArrowDown" | "down" => Some(Direction::Down),
            "ArrowLeft" | "left" => Some(Direction::Left),
            "ArrowRight" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}
