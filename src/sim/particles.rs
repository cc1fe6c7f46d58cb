//! Particle bursts for combat feedback
//!
//! Purely cosmetic: nothing in gameplay ever reads a particle back.
//! Bursts fan out at even angular offsets with randomized speed and
//! size, then age out over a fixed lifetime.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::PARTICLE_LIFE;

/// Color role of a burst, mapped to CSS by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstColor {
    /// Bullet striking an enemy
    Impact,
    /// Enemy destroyed
    Death,
    /// Player taking contact damage
    Damage,
}

impl BurstColor {
    pub fn css(&self) -> &'static str {
        match self {
            BurstColor::Impact | BurstColor::Damage => "#b13e53",
            BurstColor::Death => "#41a6f6",
        }
    }
}

/// A single visual particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub life: f32,
    /// Initial life, kept for the alpha fade
    pub max_life: f32,
    pub size: f32,
    pub color: BurstColor,
}

impl Particle {
    /// Rendering alpha: fades linearly with remaining life
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Emit `count` particles radiating from `origin`
///
/// Directions are spread evenly around the full circle; speed and size
/// carry a little randomness so bursts do not look stamped.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec2,
    color: BurstColor,
    count: u32,
) {
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        let speed = 2.0 + rng.random::<f32>() * 3.0;
        let size = 3.0 + rng.random::<f32>() * 3.0;
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
            size,
            color,
        });
    }
}

/// Advance all particles by one tick and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.life -= 1.0;
    }
    particles.retain(|p| p.life > 0.0);
}
