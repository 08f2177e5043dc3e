//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use emuwar_core::components::*;
use emuwar_core::enums::GamePhase;
use emuwar_core::events::GameEvent;
use emuwar_core::state::*;
use emuwar_core::types::{Position, SimTime, Velocity};

use crate::scoring::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: score.score,
        lives: score.lives,
        targets_destroyed: score.targets_destroyed,
        player: build_player(world),
        targets: build_targets(world),
        emitters: build_emitters(world),
        decoys: build_decoys(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, pos))| PlayerView {
            position: *pos,
            facing: player.facing,
            moving: player.moving_ticks > 0,
            hit: player.hit_ticks > 0,
        })
        .unwrap_or_default()
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(_, (target, pos))| TargetView {
            id: target.id,
            position: *pos,
            destroyed: target.destroyed,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

fn build_emitters(world: &World) -> Vec<EmitterView> {
    let mut emitters: Vec<EmitterView> = world
        .query::<(&Emitter, &Position)>()
        .iter()
        .map(|(_, (emitter, pos))| EmitterView {
            id: emitter.id,
            position: *pos,
        })
        .collect();

    emitters.sort_by_key(|e| e.id);
    emitters
}

fn build_decoys(world: &World) -> Vec<DecoyView> {
    let mut decoys: Vec<DecoyView> = world
        .query::<(&Decoy, &Position)>()
        .iter()
        .map(|(_, (decoy, pos))| DecoyView {
            id: decoy.id,
            position: *pos,
        })
        .collect();

    decoys.sort_by_key(|d| d.id);
    decoys
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            position: *pos,
            velocity: *vel,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
