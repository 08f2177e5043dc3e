//! Emu War headless runner.
//!
//! Reads commands from stdin, one per line: `start`, `reset`, `status`,
//! `quit`, or a direction key (`up`, `ArrowLeft`, ...). Match progress is
//! reported through the log.

use std::io::BufRead;
use std::path::PathBuf;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use emuwar_app::config::AppConfig;
use emuwar_app::game_loop::spawn_game_loop;
use emuwar_app::state::AppState;
use emuwar_app::AppError;
use emuwar_core::commands::PlayerCommand;
use emuwar_core::enums::Direction;
use emuwar_core::events::GameEvent;
use emuwar_core::state::GameStateSnapshot;

fn main() -> Result<(), AppError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        tick_ms = config.tick_period_ms,
        volley_ms = config.volley_period_ms,
        "Emu War"
    );

    let state = AppState::new();
    let handle = spawn_game_loop(config, state.clone(), report)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(AppError::Input)?;
        let word = line.trim();

        let command = match word {
            "" => continue,
            "quit" | "exit" => break,
            "start" => PlayerCommand::Start,
            "reset" => PlayerCommand::Reset,
            "status" => {
                if let Some(snapshot) = state.latest() {
                    match serde_json::to_string_pretty(&snapshot) {
                        Ok(json) => println!("{json}"),
                        Err(e) => warn!("failed to encode snapshot: {e}"),
                    }
                }
                continue;
            }
            key => match Direction::from_key(key) {
                Some(direction) => PlayerCommand::Move { direction },
                None => {
                    debug!(key, "unrecognised input ignored");
                    continue;
                }
            },
        };
        handle.send(command)?;
    }

    handle.shutdown()
}

/// Log the notable events carried by a snapshot.
fn report(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::PhaseChanged { from, to } => {
                info!(
                    ?from,
                    ?to,
                    score = snapshot.score,
                    lives = snapshot.lives,
                    targets_destroyed = snapshot.targets_destroyed,
                    "phase changed"
                );
            }
            GameEvent::TargetDestroyed { target_id } => {
                info!(target_id, score = snapshot.score, "crop destroyed");
            }
            GameEvent::PlayerHit { lives_remaining } => {
                info!(lives_remaining, "hit");
            }
            GameEvent::ProjectileFired { .. } | GameEvent::PlayerMoved => {}
        }
    }
}
