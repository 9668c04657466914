//! hb-core: status-effect and spell-effect dispatch for a Hengband-style
//! roguelike
//!
//! This crate contains the game rules with no I/O dependencies. Everything
//! outside the player (the map, monsters, the terminal) is reached through
//! the collaborator traits in [`context`], so the rules can be driven by a
//! full game, the `hengband` console tool, or a test script.

pub mod color;
pub mod context;
pub mod error;
pub mod locale;
pub mod magic;
pub mod options;
pub mod player;
pub mod rng;
pub mod status;

mod consts;

pub use consts::*;
pub use context::{GameContext, MessageLog, ScriptedInput};
pub use error::{InvariantViolation, OptionsError, SpellError};
pub use locale::{Locale, Text};
pub use options::GameOptions;
pub use rng::{DiceRng, FixedRng, GameRng};
