//! Direction input: steps the player and keeps it inside the arena.

use hecs::World;

use emuwar_core::components::Player;
use emuwar_core::constants::*;
use emuwar_core::enums::{Direction, Facing};
use emuwar_core::types::Position;

/// Move the player one step. Returns whether it actually moved.
///
/// A step that starts at an edge is refused; a step that would cross an
/// edge stops on it. Facing changes only on a successful horizontal step.
pub fn apply_direction(world: &mut World, direction: Direction) -> bool {
    let Some((_entity, (player, pos))) = world
        .query_mut::<(&mut Player, &mut Position)>()
        .into_iter()
        .next()
    else {
        return false;
    };

    let max_x = ARENA_WIDTH - PLAYER_EXTENT;
    let max_y = ARENA_HEIGHT - PLAYER_EXTENT;
    let speed = player.speed;

    let moved = match direction {
        Direction::Up => step(&mut pos.y, -speed, max_y),
        Direction::Down => step(&mut pos.y, speed, max_y),
        Direction::Left => step(&mut pos.x, -speed, max_x),
        Direction::Right => step(&mut pos.x, speed, max_x),
    };

    if moved {
        match direction {
            Direction::Left => player.facing = Facing::Left,
            Direction::Right => player.facing = Facing::Right,
            Direction::Up | Direction::Down => {}
        }
        player.moving_ticks = MOVE_PULSE_TICKS;
    }
    moved
}

/// Shift `coord` by `delta` within `[0, max]`.
fn step(coord: &mut f64, delta: f64, max: f64) -> bool {
    let blocked = if delta < 0.0 {
        *coord <= 0.0
    } else {
        *coord >= max
    };
    if blocked {
        return false;
    }
    *coord = (*coord + delta).clamp(0.0, max);
    true
}
