//! Simulation engine for Emu War.
//!
//! Owns the hecs ECS world, runs systems once per tick, fires emitter
//! volleys on request, and produces GameStateSnapshots for the view layer.

pub mod engine;
pub mod outcome;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use emuwar_core as core;
pub use engine::{SimConfig, SimulationEngine};
