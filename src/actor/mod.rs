//! Actor module - the engine-independent health/timer/ability state
//! machine shared by the player and every enemy.
//!
//! Nothing in here touches input, physics, or rendering: systems feed
//! these types an explicit `advance(dt)` once per tick and read the
//! boolean/duration accessors back out.

mod ability;
mod components;
mod timed_flag;
mod vitals;

pub use ability::{Ability, AbilityCycle};
pub use components::{Actor, AdvanceEdges, ATTACK_WINDOW, HIT_FLASH, HIT_INVINCIBILITY};
pub use timed_flag::TimedFlag;
pub use vitals::Vitals;
