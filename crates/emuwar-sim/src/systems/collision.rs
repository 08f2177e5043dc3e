//! Collision & scoring system: player vs targets, then player vs projectiles.

use hecs::{Entity, World};

use emuwar_core::components::{Player, Projectile, Target};
use emuwar_core::constants::*;
use emuwar_core::events::GameEvent;
use emuwar_core::geometry::is_colliding;
use emuwar_core::types::Position;

use crate::scoring::ScoreState;

use super::find_player;

/// Resolve this tick's overlaps with the player.
///
/// Every overlapping target is destroyed and every overlapping projectile
/// costs a life, so a crowded tick can take several lives at once.
pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let Some((player_entity, player_pos)) = find_player(world) else {
        return;
    };

    collect_targets(world, &player_pos, score, events);

    // Projectile hits
    despawn_buffer.clear();
    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if is_colliding(&player_pos, pos, PROJECTILE_HIT_RADIUS) {
            despawn_buffer.push(entity);
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }

    for _ in 0..despawn_buffer.len() {
        score.lives = score.lives.saturating_sub(1);
        events.push(GameEvent::PlayerHit {
            lives_remaining: score.lives,
        });
    }

    if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
        player.hit_ticks = HIT_PULSE_TICKS;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Destroy every standing target within pickup range of the player.
fn collect_targets(
    world: &mut World,
    player_pos: &Position,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (target, pos)) in world.query_mut::<(&mut Target, &Position)>() {
        if target.destroyed || !is_colliding(player_pos, pos, TARGET_PICKUP_RADIUS) {
            continue;
        }
        target.destroyed = true;
        score.targets_destroyed += 1;
        score.score += TARGET_SCORE;
        events.push(GameEvent::TargetDestroyed {
            target_id: target.id,
        });
    }
}
