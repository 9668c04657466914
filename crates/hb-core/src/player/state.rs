//! The player entity
//!
//! Owns every piece of mutable state the spell and status code touches.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{PlayerClass, Position};
use crate::PY_MAX_LEVEL;
use crate::magic::elemental::ElementalState;
use crate::status::{PlayerStun, TimedEffects};

bitflags! {
    /// Derived values the per-turn update pass must recompute
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UpdateFlags: u32 {
        /// Bonuses (to-hit, AC, speed, resistances)
        const BONUS = 0x0001;
    }
}

bitflags! {
    /// Screen regions the display pass must redraw
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RedrawFlags: u32 {
        /// Status bar (timed effects, brands, immunities)
        const STATUS = 0x0001;
        /// Hit point display
        const HP = 0x0002;
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub class: PlayerClass,
    /// Experience level, `1..=PY_MAX_LEVEL`
    pub level: i32,
    pub chp: i32,
    pub mhp: i32,
    pub position: Position,
    /// Holding a melee weapon in either hand
    pub has_melee_weapon: bool,

    pub stun: PlayerStun,
    pub timed: TimedEffects,
    /// Temporary elemental brand on melee blows
    pub brand: ElementalState,
    /// Temporary elemental immunity
    pub immunity: ElementalState,

    pub update: UpdateFlags,
    pub redraw: RedrawFlags,
    /// Set when something happened that should interrupt repeated commands
    pub disturbed: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerClass::default(), 1)
    }
}

impl Player {
    /// A fresh character of `class` at `level`, at full health
    pub fn new(class: PlayerClass, level: i32) -> Self {
        let level = level.clamp(1, PY_MAX_LEVEL);
        let mhp = 10 + level * 10;
        Self {
            class,
            level,
            chp: mhp,
            mhp,
            position: Position::default(),
            has_melee_weapon: true,
            stun: PlayerStun::default(),
            timed: TimedEffects::default(),
            brand: ElementalState::default(),
            immunity: ElementalState::default(),
            update: UpdateFlags::empty(),
            redraw: RedrawFlags::empty(),
            disturbed: false,
        }
    }

    /// Interrupt whatever the player is repeating
    pub fn disturb(&mut self) {
        self.disturbed = true;
    }

    /// Percent chance a bolt spell becomes a beam
    pub fn beam_chance(&self) -> i32 {
        match self.class {
            PlayerClass::Mage => self.level,
            PlayerClass::HighMage | PlayerClass::Sorcerer => self.level + 10,
            _ => self.level / 2,
        }
    }

    pub fn is_hurt(&self) -> bool {
        self.chp < self.mhp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_clamps_level() {
        assert_eq!(Player::new(PlayerClass::Priest, 0).level, 1);
        assert_eq!(Player::new(PlayerClass::Priest, 99).level, PY_MAX_LEVEL);
    }

    #[test]
    fn test_new_player_is_clean() {
        let p = Player::new(PlayerClass::Paladin, 20);
        assert_eq!(p.chp, p.mhp);
        assert!(!p.stun.is_stunned());
        assert!(!p.brand.is_active());
        assert!(!p.immunity.is_active());
        assert!(p.update.is_empty());
        assert!(p.redraw.is_empty());
    }

    #[test]
    fn test_beam_chance() {
        assert_eq!(Player::new(PlayerClass::Mage, 30).beam_chance(), 30);
        assert_eq!(Player::new(PlayerClass::Sorcerer, 30).beam_chance(), 40);
        assert_eq!(Player::new(PlayerClass::Paladin, 30).beam_chance(), 15);
    }

    #[test]
    fn test_player_serde() {
        let mut p = Player::new(PlayerClass::Priest, 12);
        p.stun.set(60);
        p.update |= UpdateFlags::BONUS;
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
