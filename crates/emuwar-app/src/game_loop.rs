//! Game loop thread. Drives the simulation on wall-clock cadences.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and are applied the moment they are
//! received. While a match is playing the thread also runs two periodic
//! drivers: one tick every `tick_period` and one volley every
//! `volley_period`. Both stop as soon as the phase leaves `Playing`.
//! Every change is published to the snapshot callback and stored in shared
//! state for synchronous polling.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::any::Any;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use emuwar_core::commands::PlayerCommand;
use emuwar_core::state::GameStateSnapshot;
use emuwar_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand};

/// Owner-side handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.commands
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::ChannelClosed)
    }

    /// Stop the thread and wait for it to exit.
    pub fn shutdown(self) -> Result<(), AppError> {
        // A closed channel means the thread already exited.
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|payload| {
            let message = panic_message(payload.as_ref());
            error!(%message, "game loop panicked");
            AppError::Panicked(message)
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<F>(
    config: AppConfig,
    state: AppState,
    on_snapshot: F,
) -> Result<GameLoopHandle, AppError>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("emuwar-game-loop".into())
        .spawn(move || {
            let mut publisher = Publisher { state, on_snapshot };
            run_game_loop(&config, cmd_rx, &mut publisher);
        })
        .map_err(AppError::Spawn)?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

struct Publisher<F> {
    state: AppState,
    on_snapshot: F,
}

impl<F: FnMut(&GameStateSnapshot)> Publisher<F> {
    fn publish(&mut self, snapshot: GameStateSnapshot) {
        (self.on_snapshot)(&snapshot);
        self.state.store(&snapshot);
    }
}

/// Next due instants of the two periodic drivers.
#[derive(Debug, Clone, Copy)]
struct Cadence {
    next_tick: Instant,
    next_volley: Instant,
}

impl Cadence {
    fn starting_at(now: Instant, config: &AppConfig) -> Self {
        Self {
            next_tick: now + config.tick_period(),
            next_volley: now + config.volley_period(),
        }
    }

    fn next_due(&self) -> Instant {
        self.next_tick.min(self.next_volley)
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F: FnMut(&GameStateSnapshot)>(
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    publisher: &mut Publisher<F>,
) {
    let mut engine = SimulationEngine::new(config.sim_config());
    let mut cadence: Option<Cadence> = None;
    let tick_period = config.tick_period();
    let volley_period = config.volley_period();

    publisher.publish(engine.snapshot());
    info!(seed = config.seed, "game loop ready");

    loop {
        // 1. Wait for a command, or until the next driver is due
        let received = match cadence {
            Some(c) => {
                let wait = c.next_due().saturating_duration_since(Instant::now());
                cmd_rx.recv_timeout(wait)
            }
            None => cmd_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(GameLoopCommand::Player(cmd)) => {
                debug!(?cmd, "command");
                engine.apply_command(cmd);
                publisher.publish(engine.snapshot());
            }
            Ok(GameLoopCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                info!("game loop stopped");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        // 2. Start or halt the drivers to match the phase
        cadence = sync_cadence(cadence, engine.is_running(), config);

        // 3. Run whichever drivers are due
        let Some(c) = cadence.as_mut() else {
            continue;
        };
        let now = Instant::now();
        if now >= c.next_tick {
            publisher.publish(engine.tick());
            c.next_tick = advance_deadline(c.next_tick, tick_period, now);
        }
        if engine.is_running() && now >= c.next_volley {
            publisher.publish(engine.fire_volley());
            c.next_volley = advance_deadline(c.next_volley, volley_period, now);
        }
        cadence = sync_cadence(cadence, engine.is_running(), config);
    }
}

fn sync_cadence(cadence: Option<Cadence>, running: bool, config: &AppConfig) -> Option<Cadence> {
    match (cadence, running) {
        (None, true) => {
            info!("drivers started");
            Some(Cadence::starting_at(Instant::now(), config))
        }
        (Some(_), false) => {
            info!("drivers halted");
            None
        }
        (current, _) => current,
    }
}

/// Next deadline after `due`. Too far behind resets to avoid a catch-up spiral.
fn advance_deadline(due: Instant, period: Duration, now: Instant) -> Instant {
    let next = due + period;
    if now > next + period * 2 {
        now + period
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emuwar_core::enums::{Direction, GamePhase};
    use emuwar_core::events::GameEvent;
    use std::sync::{Arc, Mutex};

    fn fast_config() -> AppConfig {
        AppConfig {
            tick_period_ms: 5,
            volley_period_ms: 20,
            ..Default::default()
        }
    }

    fn wait_for(state: &AppState, pred: impl Fn(&GameStateSnapshot) -> bool) -> GameStateSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snap) = state.latest() {
                if pred(&snap) {
                    return snap;
                }
            }
            assert!(Instant::now() < deadline, "timed out waiting for snapshot");
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Start)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Reset)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Reset)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drivers_run_while_playing_and_stop_on_reset() {
        let state = AppState::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let handle = spawn_game_loop(fast_config(), state.clone(), move |snap| {
            sink.lock().unwrap().extend(snap.events.iter().cloned());
        })
        .unwrap();

        let idle = wait_for(&state, |_| true);
        assert_eq!(idle.phase, GamePhase::Instructions);

        handle.send(PlayerCommand::Start).unwrap();
        let playing = wait_for(&state, |s| s.time.tick >= 10);
        assert_eq!(playing.phase, GamePhase::Playing);

        wait_for(&state, |_| {
            events
                .lock()
                .unwrap()
                .iter()
                .any(|e| matches!(e, GameEvent::ProjectileFired { .. }))
        });

        handle.send(PlayerCommand::Reset).unwrap();
        let reset = wait_for(&state, |s| s.phase == GamePhase::Instructions);
        assert_eq!(reset.time.tick, 0);

        // Drivers are halted: time stays put.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(state.latest().unwrap().time.tick, 0);

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_drivers_halt_on_game_over() {
        let state = AppState::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let handle = spawn_game_loop(fast_config(), state.clone(), move |snap| {
            sink.lock().unwrap().extend(snap.events.iter().cloned());
        })
        .unwrap();

        // Park the player on the first emitter's muzzle, (65, 65): every
        // projectile it fires overlaps the player right away.
        handle.send(PlayerCommand::Start).unwrap();
        for _ in 0..7 {
            handle
                .send(PlayerCommand::Move {
                    direction: Direction::Left,
                })
                .unwrap();
        }
        for _ in 0..17 {
            handle
                .send(PlayerCommand::Move {
                    direction: Direction::Up,
                })
                .unwrap();
        }

        let over = wait_for(&state, |s| s.phase == GamePhase::GameOver);
        assert_eq!(over.lives, 0);
        assert!(events.lock().unwrap().contains(&GameEvent::PhaseChanged {
            from: GamePhase::Playing,
            to: GamePhase::GameOver,
        }));

        std::thread::sleep(Duration::from_millis(60));
        let later = state.latest().unwrap();
        assert_eq!(later.phase, GamePhase::GameOver);
        assert_eq!(later.time.tick, over.time.tick);
        assert_eq!(later.projectiles.len(), over.projectiles.len());

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_panicking_callback_reported_on_shutdown() {
        let handle =
            spawn_game_loop(fast_config(), AppState::new(), |_| panic!("renderer gone")).unwrap();
        assert!(matches!(
            handle.shutdown(),
            Err(AppError::Panicked(message)) if message == "renderer gone"
        ));
    }

    #[test]
    fn test_input_before_start_is_ignored() {
        let state = AppState::new();
        let handle = spawn_game_loop(fast_config(), state.clone(), |_| {}).unwrap();

        handle
            .send(PlayerCommand::Move {
                direction: Direction::Right,
            })
            .unwrap();
        std::thread::sleep(Duration::from_millis(30));
        let snap = wait_for(&state, |_| true);
        assert_eq!(snap.player.position.x, 100.0);

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_send_after_shutdown_fails() {
        let handle = spawn_game_loop(fast_config(), AppState::new(), |_| {}).unwrap();
        let commands = handle.commands.clone();
        handle.shutdown().unwrap();
        assert!(commands
            .send(GameLoopCommand::Player(PlayerCommand::Start))
            .is_err());
    }

    #[test]
    fn test_zero_period_rejected_before_spawn() {
        let config = AppConfig {
            tick_period_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            spawn_game_loop(config, AppState::new(), |_| {}),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_advance_deadline_skips_when_far_behind() {
        let start = Instant::now();
        let period = Duration::from_millis(50);
        assert_eq!(advance_deadline(start, period, start), start + period);

        let late = start + Duration::from_secs(1);
        assert_eq!(advance_deadline(start, period, late), late + period);
    }
}
