//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Per-second multiplicative velocity retention. Raised to `dt` every frame.
pub const DEFAULT_DRAG_CONSTANT: f32 = 0.999;

/// Fraction of speed kept after bouncing off a container wall.
pub const DEFAULT_COLLISION_SCALE: f32 = 0.99;

/// Half-width of the cubical particle container.
pub const DEFAULT_CONTAINER_HALF_WIDTH: f32 = 3.0;

/// Displacement per tick below which a particle near the floor is put to rest.
pub const DEFAULT_STOP_DISTANCE: f32 = 0.01;

/// Height above the floor under which the rest check is applied.
pub const DEFAULT_FLOOR_THRESHOLD: f32 = 0.01;

/// Converts host timestamps (milliseconds) into simulated seconds.
pub const DEFAULT_TIME_SCALE: f32 = 1.0 / 5000.0;

/// Number of particles spawned by default.
pub const DEFAULT_PARTICLE_COUNT: usize = 10;

/// Initial fault displacement before decay.
pub const DEFAULT_FAULT_DELTA: f32 = 0.02;

/// Default number of fault passes.
pub const DEFAULT_FAULT_ITERATIONS: u32 = 1000;

/// Default terrain grid resolution (quads per axis).
pub const DEFAULT_TERRAIN_RESOLUTION: u32 = 64;

