//! Per-frame simulation tick
//!
//! One tick runs the stages in a fixed order: player movement, shooting,
//! bullet and enemy movement, combat resolution, particle aging, then
//! the wave-advance check. Later stages read state the earlier ones
//! mutated, so the order is load-bearing.

use super::combat::resolve_combat;
use super::particles::update_particles;
use super::state::{Bullet, GamePhase, GameState};
use super::wave::advance_wave_if_cleared;
use crate::consts::*;
use glam::Vec2;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement directions; opposite directions cancel, diagonals
    /// apply full speed on both axes
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Edge-triggered fire request, subject to the cooldown gate
    pub fire: bool,
    /// Monotonic clock reading in milliseconds, injected by the platform
    pub now_ms: f64,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    move_player(state, input);
    if input.fire {
        try_shoot(state, input.now_ms);
    }
    move_bullets(state);
    move_enemies(state);

    resolve_combat(state);
    if state.phase == GamePhase::GameOver {
        // Terminal transition: no further mutation this frame
        return;
    }

    update_particles(&mut state.particles);
    advance_wave_if_cleared(state);
}

/// Apply held directions to the player, clamped to the play-field
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.up {
        player.pos.y = (player.pos.y - player.speed).max(0.0);
    }
    if input.down {
        player.pos.y = (player.pos.y + player.speed).min(FIELD_HEIGHT - player.size.y);
    }
    if input.left {
        player.pos.x = (player.pos.x - player.speed).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + player.speed).min(FIELD_WIDTH - player.size.x);
    }
}

/// Honor a fire request if the cooldown has elapsed; otherwise drop it
fn try_shoot(state: &mut GameState, now_ms: f64) {
    if now_ms - state.last_shot_ms < SHOT_COOLDOWN_MS {
        return;
    }
    state.last_shot_ms = now_ms;
    let player = &state.player;
    state.bullets.push(Bullet {
        pos: Vec2::new(
            player.pos.x + player.size.x,
            player.pos.y + player.size.y / 2.0 - BULLET_HEIGHT / 2.0,
        ),
        size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
        speed: BULLET_SPEED,
        damage: BULLET_DAMAGE,
    });
}

/// Advance bullets rightward and drop the ones past the field edge
fn move_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.x += bullet.speed;
    }
    state.bullets.retain(|b| b.pos.x < FIELD_WIDTH);
}

/// Advance enemies leftward; fully off-screen enemies vanish scoreless
fn move_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.pos.x -= enemy.speed;
    }
    state.enemies.retain(|e| e.pos.x + e.size.x > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, GameEvent};

    /// State with no enemies in play and the wave check defused by a
    /// parked sentinel, so movement tests run in isolation
    fn quiet_state() -> GameState {
        let mut state = GameState::new(11);
        state.enemies.clear();
        state.enemies.push(Enemy {
            pos: Vec2::new(700.0, 550.0),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 0.0,
            health: 1000.0,
            max_health: 1000.0,
        });
        state
    }

    #[test]
    fn test_shot_cooldown_gate() {
        let mut state = quiet_state();

        let fire_at = |t: f64| TickInput {
            fire: true,
            now_ms: t,
            ..Default::default()
        };

        tick(&mut state, &fire_at(0.0));
        assert_eq!(state.bullets.len(), 1);

        // 150 ms later: inside the 200 ms window, silently dropped
        tick(&mut state, &fire_at(150.0));
        assert_eq!(state.bullets.len(), 1);

        // 250 ms: window elapsed since the honored shot at t=0
        tick(&mut state, &fire_at(250.0));
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_spawns_at_player_muzzle() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(100.0, 200.0);
        tick(
            &mut state,
            &TickInput {
                fire: true,
                now_ms: 0.0,
                ..Default::default()
            },
        );
        let b = &state.bullets[0];
        // One tick of travel after spawning at the player's right edge
        assert_eq!(b.pos.x, 100.0 + PLAYER_WIDTH + BULLET_SPEED);
        assert_eq!(b.pos.y, 200.0 + PLAYER_HEIGHT / 2.0 - BULLET_HEIGHT / 2.0);
    }

    #[test]
    fn test_diagonal_movement_is_additive() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(100.0, 100.0);
        tick(
            &mut state,
            &TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
        );
        // Full speed on both axes, not normalized
        assert_eq!(state.player.pos, Vec2::new(105.0, 95.0));
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(2.0, 1.0);
        tick(
            &mut state,
            &TickInput {
                up: true,
                left: true,
                ..Default::default()
            },
        );
        assert_eq!(state.player.pos, Vec2::ZERO);

        state.player.pos = Vec2::new(FIELD_WIDTH - PLAYER_WIDTH - 1.0, FIELD_HEIGHT - PLAYER_HEIGHT);
        tick(
            &mut state,
            &TickInput {
                down: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(
            state.player.pos,
            Vec2::new(FIELD_WIDTH - PLAYER_WIDTH, FIELD_HEIGHT - PLAYER_HEIGHT)
        );
    }

    #[test]
    fn test_bullets_dropped_at_right_edge() {
        let mut state = quiet_state();
        state.bullets.push(Bullet {
            pos: Vec2::new(FIELD_WIDTH - 5.0, 300.0),
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
        });
        tick(&mut state, &TickInput::default());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_offscreen_enemy_dropped_without_score() {
        let mut state = quiet_state();
        state.enemies.push(Enemy {
            pos: Vec2::new(-ENEMY_WIDTH + 0.5, 300.0),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 1.0,
            health: 60.0,
            max_health: 60.0,
        });
        tick(&mut state, &TickInput::default());
        // Only the sentinel remains; no score for escapees
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_wave_advances_when_last_enemy_escapes() {
        let mut state = GameState::new(12);
        state.enemies.clear();
        state.enemies.push(Enemy {
            pos: Vec2::new(-ENEMY_WIDTH + 0.5, 300.0),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 1.0,
            health: 60.0,
            max_health: 60.0,
        });

        tick(&mut state, &TickInput::default());
        // Removal and wave check happen inside the same tick
        assert_eq!(state.wave, 2);
        assert_eq!(state.enemies.len(), 4);
        assert!(matches!(
            state.take_events().as_slice(),
            [GameEvent::WaveStarted { wave: 2, enemies: 4 }]
        ));
    }

    #[test]
    fn test_game_over_halts_ticking() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        let ticks_before = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks_before);
    }

    #[test]
    fn test_death_tick_stops_before_wave_check() {
        let mut state = GameState::new(13);
        state.enemies.clear();
        state.player.health = 0.5;
        // Single enemy on top of the player: contact kills this tick
        state.enemies.push(Enemy {
            pos: state.player.pos,
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 0.0,
            health: 60.0,
            max_health: 60.0,
        });

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        // The emptied pool must NOT trigger a new wave on the death tick
        assert_eq!(state.wave, 1);
        assert!(state.enemies.is_empty());
    }
}
