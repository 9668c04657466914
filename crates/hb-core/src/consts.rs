//! Core game constants
//!
//! Limits shared by the status, spell and elemental modules.

/// Maximum player level
pub const PY_MAX_LEVEL: i32 = 50;

/// Maximum distance the player can see
pub const MAX_PLAYER_SIGHT: i32 = 20;

/// Radius of the default detection spells
pub const DETECT_RAD_DEFAULT: i32 = 30;

/// Ceiling for every timed effect counter, including the stun accumulator
pub const MAX_TIMED_EFFECT: i32 = 10000;

/// Ceiling for temporary brand and immunity durations
pub const MAX_ELEMENTAL_DURATION: i32 = MAX_TIMED_EFFECT;

/// Upper bound of the stun accumulator
pub const STUN_MAX: i32 = MAX_TIMED_EFFECT;
