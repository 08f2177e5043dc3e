//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Milliseconds per tick.
pub const TICK_PERIOD_MS: u64 = 1000 / TICK_RATE as u64;

/// Milliseconds between emitter volleys.
pub const VOLLEY_PERIOD_MS: u64 = 2000;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 350.0;

// --- Player ---

/// Player spawn position.
pub const PLAYER_START: (f64, f64) = (100.0, 150.0);

/// Pixels moved per direction input.
pub const PLAYER_SPEED: f64 = 5.0;

/// Sprite extent kept inside the arena on the right and bottom edges.
pub const PLAYER_EXTENT: f64 = 40.0;

/// Lives at the start of a match.
pub const STARTING_LIVES: u32 = 3;

/// Ticks the "moving" pulse stays lit after an input step (200 ms).
pub const MOVE_PULSE_TICKS: u32 = (200 / TICK_PERIOD_MS) as u32;

/// Ticks the "hit" pulse stays lit after a projectile hit (500 ms).
pub const HIT_PULSE_TICKS: u32 = (500 / TICK_PERIOD_MS) as u32;

// --- Targets ---

/// Targets per match.
pub const TARGET_COUNT: u32 = 20;

/// Columns in the target grid.
pub const TARGET_GRID_COLUMNS: u32 = 5;

/// Grid pitch (horizontal, vertical) in pixels.
pub const TARGET_GRID_PITCH: (f64, f64) = (150.0, 80.0);

/// Grid origin offset in pixels.
pub const TARGET_GRID_OFFSET: (f64, f64) = (200.0, 50.0);

/// Maximum placement jitter (horizontal, vertical) in pixels.
pub const TARGET_JITTER: (f64, f64) = (50.0, 30.0);

/// Points per destroyed target.
pub const TARGET_SCORE: u32 = 10;

// --- Emitters ---

/// Emitter positions, fixed for every match.
pub const EMITTER_POSITIONS: [(f64, f64); 3] = [(50.0, 50.0), (750.0, 100.0), (400.0, 300.0)];

/// Projectile spawn offset from the emitter origin.
pub const MUZZLE_OFFSET: (f64, f64) = (15.0, 15.0);

/// Projectile speed (pixels per tick).
pub const PROJECTILE_SPEED: f64 = 3.0;

// --- Decoys ---

/// Decoy start positions.
pub const DECOY_POSITIONS: [(f64, f64); 4] = [
    (200.0, 200.0),
    (600.0, 150.0),
    (300.0, 250.0),
    (500.0, 100.0),
];

/// Per-tick probability that a decoy takes a step.
pub const DECOY_MOVE_CHANCE: f64 = 0.1;

/// Decoy step length in pixels.
pub const DECOY_SPEED: f64 = 2.0;

/// Sprite extent kept inside the arena on the right and bottom edges.
pub const DECOY_EXTENT: f64 = 30.0;

// --- Collision ---

/// Proximity threshold when none is given.
pub const DEFAULT_COLLISION_THRESHOLD: f64 = 25.0;

/// Player-vs-target pickup radius.
pub const TARGET_PICKUP_RADIUS: f64 = 30.0;

/// Player-vs-projectile hit radius.
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;
