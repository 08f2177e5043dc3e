//! Cosmetic pulse countdowns on the player.

use hecs::World;

use emuwar_core::components::Player;

/// Tick down the "moving" and "hit" pulses.
pub fn run(world: &mut World) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.moving_ticks = player.moving_ticks.saturating_sub(1);
        player.hit_ticks = player.hit_ticks.saturating_sub(1);
    }
}
