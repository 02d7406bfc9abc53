// Arena constants
pub const WORLD_SIZE: f64 = 3000.0;
pub const TICK_RATE: u64 = 60; // simulation ticks per second (matches display refresh)
pub const TICK_DURATION_MS: f64 = 1000.0 / TICK_RATE as f64;

// Blob constants
pub const STARTING_RADIUS: f64 = 10.0;
pub const BASE_SPEED: f64 = 8.0; // units per tick at radius 1
pub const MIN_SPEED: f64 = 0.5;
pub const SPEED_BOOST_FACTOR: f64 = 1.5;
pub const EAT_MARGIN: f64 = 1.1; // predator needs >10% more mass than prey

// AI constants
pub const NUM_AI: usize = 15;
pub const AI_RESPAWN_DELAY_MS: f64 = 3000.0;
pub const AGGRESSION_CHANCE: f64 = 0.3;
pub const MOOD_SWITCH_MIN_MS: f64 = 3000.0;
pub const MOOD_SWITCH_JITTER_MS: f64 = 4000.0;

// Player constants
pub const SPAWN_GRACE_MS: f64 = 5000.0;

// Food constants
pub const FOOD_COUNT: usize = 225;
pub const FOOD_MAINTAIN_INTERVAL_MS: f64 = 2000.0;
pub const FOOD_CLUSTER_SPREAD: f64 = 100.0;
pub const FOOD_RADIUS_SMALL: f64 = 2.0;
pub const FOOD_RADIUS_MEDIUM: f64 = 5.0;
pub const FOOD_RADIUS_LARGE: f64 = 7.0;
pub const FOOD_LARGE_CHANCE: f64 = 0.1;
pub const FOOD_MEDIUM_CHANCE: f64 = 0.2;

// Power-up effect durations
pub const SPEED_BOOST_MS: f64 = 10_000.0;
pub const SHIELD_MS: f64 = 5_000.0;
pub const MAGNET_MS: f64 = 8_000.0;
pub const TRAP_MS: f64 = 5_000.0;

// Magnet pull
pub const MAGNET_RANGE: f64 = 500.0;
pub const MAGNET_DEAD_ZONE: f64 = 1.0; // skip pull below this distance
pub const MAGNET_PULL: f64 = 1.5; // units per tick

// Zones
pub const ZONE_RADIUS: f64 = 250.0;
pub const ZONE_EDGE_MARGIN: f64 = 300.0;
pub const ZONE_LIFETIME_MS: f64 = 15_000.0;
pub const DECAY_FACTOR: f64 = 0.9985; // multiplicative shrink per tick inside a zone or while trapped

// Kill feed
pub const KILL_FEED_MAX: usize = 5;

// Particles
pub const PARTICLE_LIFE_TICKS: i32 = 30;
pub const SPEED_TRAIL_COUNT: usize = 5;

// Camera hint
pub const ZOOM_MIN: f64 = 0.6;
pub const ZOOM_MAX: f64 = 1.2;
pub const ZOOM_FALLOFF: f64 = 0.015; // zoom lost per unit of radius above starting size

// Helper: speed for a blob of the given radius (before boosts)
pub fn speed_for_radius(radius: f64) -> f64 {
    (BASE_SPEED / radius).max(MIN_SPEED)
}
