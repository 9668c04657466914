//! Timed player conditions
//!
//! Stun has its own ranked accumulator; everything else is a plain turn
//! counter in [`TimedEffects`].

mod setter;
mod stun;
mod timed;

pub use setter::StatusSetter;
pub use stun::{PlayerStun, StunRank};
pub use timed::{Condition, TimedEffects};
