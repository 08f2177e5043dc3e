//! Distance-threshold proximity test shared by the collision systems.

use crate::constants::DEFAULT_COLLISION_THRESHOLD;
use crate::types::Position;

/// True iff the distance between `a` and `b` is strictly less than `threshold`.
pub fn is_colliding(a: &Position, b: &Position, threshold: f64) -> bool {
    a.distance_to(b) < threshold
}

/// [`is_colliding`] with [`DEFAULT_COLLISION_THRESHOLD`].
pub fn is_colliding_default(a: &Position, b: &Position) -> bool {
    is_colliding(a, b, DEFAULT_COLLISION_THRESHOLD)
}
