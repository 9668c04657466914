//! Effect magnitudes
//!
//! A spell computes one [`EffectMagnitude`] from the caster's level. The same
//! value is formatted for the spell menu and rolled when the spell is cast, so
//! what the menu shows is always what the cast uses.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::rng::DiceRng;

/// A damage, duration or power figure before it is rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectMagnitude {
    /// `count`d`sides` + `bonus`
    Dice { count: i32, sides: i32, bonus: i32 },
    /// `base` + 1d`sides` turns
    Duration { base: i32, sides: i32 },
    /// Saving-throw difficulty handed to the resistance check
    Power(i32),
    /// Area radius
    Radius(i32),
    /// Teleport distance
    Range(i32),
    /// Flat damage dealt by each of several projections
    MultiDamage(i32),
    /// `count`d`sides` dealt by each of several projections
    MultiDamageDice { count: i32, sides: i32 },
    /// `count`d`sides` + `bonus` hit points restored
    Heal { count: i32, sides: i32, bonus: i32 },
}

impl EffectMagnitude {
    pub const fn dice(count: i32, sides: i32, bonus: i32) -> Self {
        EffectMagnitude::Dice {
            count,
            sides,
            bonus,
        }
    }

    /// Fixed damage, shown without dice
    pub const fn flat(damage: i32) -> Self {
        Self::dice(0, 0, damage)
    }

    pub const fn duration(base: i32, sides: i32) -> Self {
        EffectMagnitude::Duration { base, sides }
    }

    /// Roll the magnitude for a real cast
    pub fn roll(&self, rng: &mut dyn DiceRng) -> i32 {
        match *self {
            EffectMagnitude::Dice {
                count,
                sides,
                bonus,
            }
            | EffectMagnitude::Heal {
                count,
                sides,
                bonus,
            } => rng.damroll(count, sides) + bonus,
            EffectMagnitude::Duration { base, sides } => rng.randint1(sides) + base,
            EffectMagnitude::MultiDamageDice { count, sides } => rng.damroll(count, sides),
            EffectMagnitude::Power(v)
            | EffectMagnitude::Radius(v)
            | EffectMagnitude::Range(v)
            | EffectMagnitude::MultiDamage(v) => v,
        }
    }

    /// Smallest value [`roll`](Self::roll) can return
    pub fn min(&self) -> i32 {
        match *self {
            EffectMagnitude::Dice {
                count,
                sides,
                bonus,
            }
            | EffectMagnitude::Heal {
                count,
                sides,
                bonus,
            } => dice_floor(count, sides) + bonus,
            EffectMagnitude::Duration { base, sides } => dice_floor(1, sides) + base,
            EffectMagnitude::MultiDamageDice { count, sides } => dice_floor(count, sides),
            EffectMagnitude::Power(v)
            | EffectMagnitude::Radius(v)
            | EffectMagnitude::Range(v)
            | EffectMagnitude::MultiDamage(v) => v,
        }
    }

    /// Largest value [`roll`](Self::roll) can return
    pub fn max(&self) -> i32 {
        match *self {
            EffectMagnitude::Dice {
                count,
                sides,
                bonus,
            }
            | EffectMagnitude::Heal {
                count,
                sides,
                bonus,
            } => count.max(0) * sides.max(0) + bonus,
            EffectMagnitude::Duration { base, sides } => sides.max(0) + base,
            EffectMagnitude::MultiDamageDice { count, sides } => count.max(0) * sides.max(0),
            EffectMagnitude::Power(v)
            | EffectMagnitude::Radius(v)
            | EffectMagnitude::Range(v)
            | EffectMagnitude::MultiDamage(v) => v,
        }
    }

    /// Spell menu string, e.g. `dam 4d4` or `dur 24+1d24`
    pub fn describe(&self, locale: Locale) -> String {
        match *self {
            EffectMagnitude::Dice {
                count,
                sides,
                bonus,
            } => info_damage(count, sides, bonus, locale),
            EffectMagnitude::Heal {
                count,
                sides,
                bonus,
            } => info_heal(count, sides, bonus, locale),
            EffectMagnitude::Duration { base, sides } => info_duration(base, sides, locale),
            EffectMagnitude::Power(power) => info_power(power, locale),
            EffectMagnitude::Radius(rad) => info_radius(rad, locale),
            EffectMagnitude::Range(range) => info_range(range, locale),
            EffectMagnitude::MultiDamage(dam) => info_multi_damage(dam, locale),
            EffectMagnitude::MultiDamageDice { count, sides } => {
                info_multi_damage_dice(count, sides, locale)
            }
        }
    }
}

/// A die with no sides rolls 0, so the floor is 0 rather than `count`.
fn dice_floor(count: i32, sides: i32) -> i32 {
    if sides > 0 { count.max(0) } else { 0 }
}

/// `NdS`, `NdS+B`, `NdS-B`, or just `B` when there are no dice
fn dice_string(prefix: &str, count: i32, sides: i32, bonus: i32) -> String {
    if count == 0 {
        format!("{}{}", prefix, bonus)
    } else if bonus == 0 {
        format!("{}{}d{}", prefix, count, sides)
    } else {
        format!("{}{}d{}{:+}", prefix, count, sides, bonus)
    }
}

pub fn info_damage(count: i32, sides: i32, bonus: i32, locale: Locale) -> String {
    let prefix = match locale {
        Locale::English => "dam ",
        Locale::Japanese => "損傷:",
    };
    dice_string(prefix, count, sides, bonus)
}

pub fn info_heal(count: i32, sides: i32, bonus: i32, locale: Locale) -> String {
    let prefix = match locale {
        Locale::English => "heal ",
        Locale::Japanese => "回復:",
    };
    dice_string(prefix, count, sides, bonus)
}

pub fn info_duration(base: i32, sides: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("dur {}+1d{}", base, sides),
        Locale::Japanese => format!("期間:{}+1d{}", base, sides),
    }
}

pub fn info_power(power: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("power {}", power),
        Locale::Japanese => format!("効力:{}", power),
    }
}

pub fn info_radius(rad: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("rad {}", rad),
        Locale::Japanese => format!("半径:{}", rad),
    }
}

pub fn info_range(range: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("range {}", range),
        Locale::Japanese => format!("範囲:{}", range),
    }
}

pub fn info_multi_damage(dam: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("dam {} each", dam),
        Locale::Japanese => format!("損傷:各{}", dam),
    }
}

pub fn info_multi_damage_dice(count: i32, sides: i32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("dam {}d{} each", count, sides),
        Locale::Japanese => format!("損傷:各{}d{}", count, sides),
    }
}
