//! Combat resolver
//!
//! Applies bullet/enemy and player/enemy collisions for one frame,
//! mutating health, awarding score and emitting particle bursts.
//! Dead entities leave their pool in the same pass that detected them,
//! so no stale collision can carry into the next frame.

use super::collision::overlaps;
use super::particles::{BurstColor, spawn_burst};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Resolve all combat collisions for this frame
///
/// Enemies are visited in pool order. For each enemy, bullets are walked
/// from the end of the pool backward so in-place removal never skips an
/// element. A kill stops further bullet checks against that enemy; a
/// player death ends the run immediately and removes the killing enemy.
pub fn resolve_combat(state: &mut GameState) {
    let GameState {
        player,
        enemies,
        bullets,
        particles,
        rng,
        score,
        events,
        phase,
        wave,
        ..
    } = state;

    let mut i = 0;
    while i < enemies.len() {
        let mut killed = false;
        {
            let enemy = &mut enemies[i];
            let mut j = bullets.len();
            while j > 0 {
                j -= 1;
                if !overlaps(&bullets[j].rect(), &enemy.rect()) {
                    continue;
                }
                enemy.health -= bullets[j].damage;
                let hit_pos = bullets[j].pos;
                bullets.remove(j);
                spawn_burst(particles, rng, hit_pos, BurstColor::Impact, BURST_BULLET_IMPACT);

                if enemy.health <= 0.0 {
                    *score += SCORE_PER_KILL;
                    spawn_burst(
                        particles,
                        rng,
                        enemy.rect().center(),
                        BurstColor::Death,
                        BURST_ENEMY_DEATH,
                    );
                    killed = true;
                    break;
                }
            }
        }
        if killed {
            enemies.remove(i);
            continue;
        }

        if overlaps(&player.rect(), &enemies[i].rect()) {
            player.health -= CONTACT_DAMAGE;
            spawn_burst(
                particles,
                rng,
                player.rect().center(),
                BurstColor::Damage,
                BURST_PLAYER_DAMAGE,
            );
            if player.health <= 0.0 {
                player.health = 0.0;
                *phase = GamePhase::GameOver;
                enemies.remove(i);
                log::info!("Player died on wave {} with score {}", wave, score);
                events.push(GameEvent::GameOver {
                    score: *score,
                    wave: *wave,
                });
                return;
            }
        }
        i += 1;
    }
}
