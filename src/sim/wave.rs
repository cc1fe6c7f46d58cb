//! Wave director
//!
//! The sole progression mechanism: when the enemy pool empties after a
//! frame's removals, the wave counter advances and a bigger, tougher
//! batch spawns just past the right edge.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState};
use crate::consts::*;

/// Number of enemies spawned for a given wave
pub fn enemies_for_wave(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + (wave - 1)
}

/// Per-enemy health for a given wave (also the health-bar denominator)
pub fn enemy_health_for_wave(wave: u32) -> f32 {
    ENEMY_BASE_HEALTH + wave as f32 * ENEMY_HEALTH_PER_WAVE
}

/// Spawn the current wave's enemies at the right edge
///
/// Stats derive from the wave counter as it stands now; each enemy pins
/// its own max health so later wave advances cannot skew its bar.
pub fn spawn_wave(state: &mut GameState) {
    let wave = state.wave;
    let health = enemy_health_for_wave(wave);
    for _ in 0..enemies_for_wave(wave) {
        let x = FIELD_WIDTH + state.rng.random::<f32>() * ENEMY_SPAWN_SCATTER;
        let y = state.rng.random::<f32>() * (FIELD_HEIGHT - ENEMY_HEIGHT);
        let speed =
            ENEMY_BASE_SPEED + wave as f32 * ENEMY_SPEED_PER_WAVE + state.rng.random::<f32>();
        state.enemies.push(Enemy {
            pos: Vec2::new(x, y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed,
            health,
            max_health: health,
        });
    }
}

/// Advance the wave if this frame's removals emptied the pool
pub fn advance_wave_if_cleared(state: &mut GameState) {
    if !state.enemies.is_empty() {
        return;
    }
    state.wave += 1;
    spawn_wave(state);
    let spawned = state.enemies.len() as u32;
    log::info!("Wave {} started with {} enemies", state.wave, spawned);
    state.events.push(GameEvent::WaveStarted {
        wave: state.wave,
        enemies: spawned,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_counts_per_wave() {
        assert_eq!(enemies_for_wave(1), 3);
        assert_eq!(enemies_for_wave(2), 4);
        assert_eq!(enemies_for_wave(10), 12);
    }

    #[test]
    fn test_health_scales_linearly() {
        assert_eq!(enemy_health_for_wave(1), 60.0);
        assert_eq!(enemy_health_for_wave(5), 100.0);
    }

    #[test]
    fn test_empty_pool_advances_exactly_one_wave() {
        let mut state = GameState::new(3);
        state.enemies.clear();

        advance_wave_if_cleared(&mut state);
        assert_eq!(state.wave, 2);
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::WaveStarted { wave: 2, enemies: 4 }]
        );

        // Pool is no longer empty, so no further advance
        advance_wave_if_cleared(&mut state);
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_spawned_enemies_use_new_wave_stats() {
        let mut state = GameState::new(4);
        state.enemies.clear();
        advance_wave_if_cleared(&mut state);

        let expected_health = enemy_health_for_wave(2);
        for enemy in &state.enemies {
            assert_eq!(enemy.health, expected_health);
            assert_eq!(enemy.max_health, expected_health);
            assert!(enemy.pos.x >= FIELD_WIDTH);
            assert!(enemy.pos.x < FIELD_WIDTH + ENEMY_SPAWN_SCATTER);
            assert!(enemy.pos.y >= 0.0);
            assert!(enemy.pos.y <= FIELD_HEIGHT - ENEMY_HEIGHT);
            let base = ENEMY_BASE_SPEED + 2.0 * ENEMY_SPEED_PER_WAVE;
            assert!(enemy.speed >= base && enemy.speed < base + 1.0);
        }
    }
}
