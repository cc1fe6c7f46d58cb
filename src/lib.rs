//! Corn Battles - a side-scrolling wave shooter for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, combat, waves)
//! - `session`: Screen state machine driving menu/game/records transitions
//! - `highscores`: Capped leaderboard persisted to LocalStorage
//! - `render`: Canvas-2d renderer (wasm only), draws read-only snapshots

pub mod highscores;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod session;
pub mod sim;

pub use highscores::Leaderboard;
pub use session::{Screen, Session};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - spawns at the left edge, vertically centered
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_DAMAGE: f32 = 25.0;
    /// Minimum time between honored shots (milliseconds)
    pub const SHOT_COOLDOWN_MS: f64 = 200.0;

    /// Enemy defaults - stats scale with the wave they spawn in
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_BASE_HEALTH: f32 = 50.0;
    pub const ENEMY_HEALTH_PER_WAVE: f32 = 10.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 0.3;
    /// Horizontal scatter applied to spawn x past the right edge
    pub const ENEMY_SPAWN_SCATTER: f32 = 100.0;

    /// Enemies in the first wave; each wave adds one more
    pub const WAVE_BASE_ENEMIES: u32 = 3;
    /// Damage applied per frame of player/enemy contact
    pub const CONTACT_DAMAGE: f32 = 0.5;
    /// Score awarded per enemy kill
    pub const SCORE_PER_KILL: u64 = 10;

    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: f32 = 30.0;
    /// Burst sizes for the three combat events
    pub const BURST_BULLET_IMPACT: u32 = 8;
    pub const BURST_ENEMY_DEATH: u32 = 15;
    pub const BURST_PLAYER_DAMAGE: u32 = 5;
}
