//! Application state shared between the presentation side and the game loop thread.

use std::sync::{Arc, Mutex};

use emuwar_core::commands::PlayerCommand;
use emuwar_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest published snapshot, for synchronous polling by a view layer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, snapshot: &GameStateSnapshot) {
        if let Ok(mut lock) = self.latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.latest().is_none());
    }

    #[test]
    fn test_store_and_poll() {
        let state = AppState::new();
        let snapshot = GameStateSnapshot {
            score: 30,
            ..Default::default()
        };
        state.store(&snapshot);
        assert_eq!(state.latest().unwrap().score, 30);
    }
}
