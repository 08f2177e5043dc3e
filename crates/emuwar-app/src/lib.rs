//! Emu War headless application.
//!
//! This crate wires the simulation engine to wall-clock drivers and
//! exposes it to a presentation layer through a command channel and
//! snapshot callbacks.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use emuwar_core as core;
pub use error::AppError;
