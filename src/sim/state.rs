//! Game state and core simulation types
//!
//! One `GameState` per session, owned exclusively by the session and
//! passed by `&mut` through each tick stage in a fixed order. Nothing
//! outside the tick mutates it while a run is live.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::particles::Particle;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (player health reached zero)
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Health fraction for the HUD bar
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// An enemy, drifting leftward toward the player
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub health: f32,
    /// Spawn-time health, pinned so the health bar stays consistent even
    /// if the wave counter advances while this enemy is still alive
    pub max_health: f32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Health fraction against the spawn-time maximum
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// A player bullet, travelling rightward
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub damage: f32,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Fire-and-forget notifications drained by the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new wave started with this many enemies
    WaveStarted { wave: u32, enemies: u32 },
    /// The player died; final score and wave reached
    GameOver { score: u64, wave: u32 },
}

/// Complete per-run simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Current wave (starts at 1)
    pub wave: u32,
    /// Running score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Clock reading of the last honored shot, for the fire cooldown
    pub last_shot_ms: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Pending notifications, drained each frame by the platform
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run and spawn the first wave
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            wave: 1,
            score: 0,
            time_ticks: 0,
            // Far enough in the past that the first shot always fires
            last_shot_ms: f64::MIN,
            player: Player::default(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        };
        super::wave::spawn_wave(&mut state);
        state
    }

    /// Take all pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_spawns_first_wave() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.len(), WAVE_BASE_ENEMIES as usize);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.speed, eb.speed);
        }
    }

    #[test]
    fn test_enemy_health_fraction_uses_pinned_max() {
        let enemy = Enemy {
            pos: glam::Vec2::ZERO,
            size: glam::Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 1.0,
            health: 30.0,
            max_health: 60.0,
        };
        assert!((enemy.health_fraction() - 0.5).abs() < f32::EPSILON);
    }
}
