//! Win/lose evaluation for the end of a tick.
//!
//! Pure function over the match counters, no ECS dependency.

use emuwar_core::constants::TARGET_COUNT;
use emuwar_core::enums::GamePhase;

use crate::scoring::ScoreState;

/// Terminal phase the match should enter, if any.
///
/// Victory is checked before defeat and defeat overrides it, so a tick that
/// clears the last target while losing the last life ends in `GameOver`.
pub fn evaluate(score: &ScoreState) -> Option<GamePhase> {
    let mut outcome = None;

    if score.targets_destroyed >= TARGET_COUNT {
        outcome = Some(GamePhase::Victory);
    }
    if score.lives == 0 {
        outcome = Some(GamePhase::GameOver);
    }

    outcome
}
