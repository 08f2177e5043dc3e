//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no timers or threads), enabling deterministic testing. The tick and
//! volley cadences are driven from outside by calling [`SimulationEngine::tick`]
//! and [`SimulationEngine::fire_volley`].

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use emuwar_core::commands::PlayerCommand;
use emuwar_core::enums::{Direction, GamePhase};
use emuwar_core::events::GameEvent;
use emuwar_core::state::GameStateSnapshot;
use emuwar_core::types::SimTime;

use crate::outcome;
use crate::scoring::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for a simulation engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: ScoreState,
    /// Never reset between matches, so projectile ids stay unique.
    next_projectile_id: u64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine, sitting on the instructions screen with a
    /// freshly set up world.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: ScoreState::default(),
            next_projectile_id: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.setup();
        engine
    }

    /// Apply a player command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => self.start(),
            PlayerCommand::Move { direction } => self.handle_direction(direction),
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Begin a new match.
    ///
    /// From a finished match the phase first steps back to `Instructions`,
    /// so every transition stays on a legal edge. Ignored while a match is
    /// running.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                debug!("start ignored, match already running");
                return;
            }
            GamePhase::Victory | GamePhase::GameOver => self.transition(GamePhase::Instructions),
            GamePhase::Instructions => {}
        }

        self.setup();
        self.transition(GamePhase::Playing);
        info!("match started");
    }

    /// Step the player one unit. Ignored outside `Playing`.
    pub fn handle_direction(&mut self, direction: Direction) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if systems::input::apply_direction(&mut self.world, direction) {
            self.events.push(GameEvent::PlayerMoved);
        }
    }

    /// Return to the instructions screen with a fresh world.
    pub fn reset(&mut self) {
        self.setup();
        if self.phase != GamePhase::Instructions {
            self.transition(GamePhase::Instructions);
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Outside `Playing` nothing changes.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }
        self.snapshot()
    }

    /// Fire one volley from every emitter and return the resulting snapshot.
    /// Outside `Playing` nothing changes.
    pub fn fire_volley(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            let fired = systems::combat::fire_volley(
                &mut self.world,
                &mut self.rng,
                &mut self.next_projectile_id,
                &mut self.events,
            );
            debug!(fired, tick = self.time.tick, "volley");
        }
        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Whether the tick and volley drivers should be running.
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn lives(&self) -> u32 {
        self.score.lives
    }

    pub fn targets_destroyed(&self) -> u32 {
        self.score.targets_destroyed
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact positions.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable counter access for tests.
    #[cfg(test)]
    pub fn score_state_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Rebuild the world and counters for a new match.
    fn setup(&mut self) {
        world_setup::setup_match(&mut self.world, &mut self.rng);
        self.score = ScoreState::default();
        self.time = SimTime::default();
    }

    fn transition(&mut self, to: GamePhase) {
        let from = self.phase;
        debug_assert!(from.can_transition_to(to), "illegal phase edge {from:?} -> {to:?}");
        debug!(?from, ?to, "phase change");
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 0. Cosmetic pulse countdown
        systems::pulse::run(&mut self.world);
        // 1. Projectile motion, then drop anything that left the arena
        systems::movement::run_projectiles(&mut self.world);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 2. Collisions and scoring
        systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 3. Decoy wander
        systems::movement::run_decoys(&mut self.world, &mut self.rng);
        // 4. Win/lose
        if let Some(end) = outcome::evaluate(&self.score) {
            self.transition(end);
            info!(
                phase = ?end,
                score = self.score.score,
                targets_destroyed = self.score.targets_destroyed,
                "match over"
            );
        }
    }
}
