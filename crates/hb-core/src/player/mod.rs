//! Player system
//!
//! Contains the Player struct and the attributes spells read from it.

mod class;
mod position;
mod state;

pub use class::PlayerClass;
pub use position::{Direction, Position};
pub use state::{Player, RedrawFlags, UpdateFlags};
