//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only, owned by the state
//! - Clock readings injected through `TickInput`
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod particles;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Rect, overlaps};
pub use particles::{BurstColor, Particle};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
