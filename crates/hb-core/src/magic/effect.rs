//! Vocabulary for effects applied to the world outside the player
//!
//! Projection, summoning and detection are carried out by an
//! [`EffectApplication`] implementation. [`EffectLog`] is the recording
//! implementation used by the console front end and by tests.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

use crate::context::EffectApplication;
use crate::player::{Direction, Position};

/// Damage type of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Element {
    Elec,
    Fire,
    Cold,
    Acid,
    Poison,
    Lite,
    HolyFire,
    /// Teleports evil monsters instead of damaging them
    AwayEvil,
}

/// Shape of an aimed projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    Bolt,
    Beam,
    Ball { radius: i32 },
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Bolt => write!(f, "bolt"),
            Projection::Beam => write!(f, "beam"),
            Projection::Ball { radius } => write!(f, "ball (rad {})", radius),
        }
    }
}

/// Effect on every monster in line of sight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SightEffect {
    DispelUndead,
    DispelDemons,
    DispelEvil,
    DispelAll,
    TurnEvil,
    TurnAll,
    Slow,
    Stun,
    Confuse,
    Stasis,
    BanishEvil,
}

/// Effect on the first monster or feature along a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AimedEffect {
    Scare,
    StasisEvil,
    DestroyDoors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DetectTarget {
    EvilMonsters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SummonKind {
    Angel,
    Knights,
}

bitflags! {
    /// Placement flags for summoned monsters
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SummonFlags: u32 {
        /// Summoned monster is a pet
        const FORCE_PET = 0x0001;
        /// Summoned monster is never a pet
        const NO_PET = 0x0002;
        /// Escorts and groups allowed
        const ALLOW_GROUP = 0x0004;
        /// Summoned monster starts hasted
        const HASTE = 0x0008;
    }
}

/// A single summoning attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonRequest {
    pub kind: SummonKind,
    /// Depth used to pick the monster
    pub level: i32,
    pub position: Position,
    pub flags: SummonFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WeaponBrand {
    SlayEvil,
}

/// One call made on an [`EffectApplication`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect {
    Fire {
        projection: Projection,
        element: Element,
        dir: Direction,
        dam: i32,
    },
    Blast {
        element: Element,
        dir: Direction,
        count: i32,
        sides: i32,
        bolts: i32,
        spread: i32,
    },
    ProjectAround {
        center: Position,
        radius: i32,
        element: Element,
        dam: i32,
    },
    Sight {
        effect: SightEffect,
        power: i32,
    },
    Aimed {
        effect: AimedEffect,
        dir: Direction,
        power: i32,
    },
    SleepAdjacent {
        power: i32,
    },
    Detect {
        target: DetectTarget,
        radius: i32,
    },
    Teleport {
        range: i32,
    },
    Summon(SummonRequest),
    RemoveCurse {
        heavy: bool,
    },
    BrandWeapon(WeaponBrand),
    DestroyArea {
        center: Position,
        radius: i32,
    },
    WrathOfTheGod {
        dir: Direction,
        dam: i32,
        radius: i32,
    },
    CharmGood {
        power: i32,
    },
}

impl fmt::Display for AppliedEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedEffect::Fire {
                projection,
                element,
                dir,
                dam,
            } => write!(
                f,
                "{} {} toward {} for {}",
                element,
                projection,
                dir.keypad(),
                dam
            ),
            AppliedEffect::Blast {
                element,
                dir,
                count,
                sides,
                bolts,
                spread,
            } => write!(
                f,
                "{} {}d{} x{} bolts (spread {}) toward {}",
                element,
                count,
                sides,
                bolts,
                spread,
                dir.keypad()
            ),
            AppliedEffect::ProjectAround {
                center,
                radius,
                element,
                dam,
            } => write!(
                f,
                "{} burst at ({}, {}) rad {} for {}",
                element, center.y, center.x, radius, dam
            ),
            AppliedEffect::Sight { effect, power } => {
                write!(f, "{} on monsters in sight (power {})", effect, power)
            }
            AppliedEffect::Aimed { effect, dir, power } => {
                write!(f, "{} toward {} (power {})", effect, dir.keypad(), power)
            }
            AppliedEffect::SleepAdjacent { power } => {
                write!(f, "sleep adjacent monsters (power {})", power)
            }
            AppliedEffect::Detect { target, radius } => {
                write!(f, "detect {} within {}", target, radius)
            }
            AppliedEffect::Teleport { range } => write!(f, "teleport player {}", range),
            AppliedEffect::Summon(req) => write!(
                f,
                "summon {} at ({}, {}) level {} flags {:?}",
                req.kind, req.position.y, req.position.x, req.level, req.flags
            ),
            AppliedEffect::RemoveCurse { heavy } => {
                if *heavy {
                    write!(f, "remove all curses")
                } else {
                    write!(f, "remove curses")
                }
            }
            AppliedEffect::BrandWeapon(brand) => write!(f, "brand weapon: {}", brand),
            AppliedEffect::DestroyArea { center, radius } => write!(
                f,
                "destroy area at ({}, {}) rad {}",
                center.y, center.x, radius
            ),
            AppliedEffect::WrathOfTheGod { dir, dam, radius } => write!(
                f,
                "wrath of the god toward {} for {} each (rad {})",
                dir.keypad(),
                dam,
                radius
            ),
            AppliedEffect::CharmGood { power } => {
                write!(f, "charm good monsters in sight (power {})", power)
            }
        }
    }
}

/// Records every effect instead of resolving it against a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectLog {
    pub applied: Vec<AppliedEffect>,
    /// Answer returned by effects that can fail or be resisted
    pub succeed: bool,
    /// Answer returned by [`EffectApplication::is_empty_floor`]
    pub floor_empty: bool,
}

impl Default for EffectLog {
    fn default() -> Self {
        Self {
            applied: Vec::new(),
            succeed: true,
            floor_empty: true,
        }
    }
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log whose fallible effects all fail
    pub fn failing() -> Self {
        Self {
            succeed: false,
            ..Self::default()
        }
    }

    fn record(&mut self, effect: AppliedEffect) -> bool {
        self.applied.push(effect);
        self.succeed
    }

    pub fn count_summons(&self) -> usize {
        self.applied
            .iter()
            .filter(|e| matches!(e, AppliedEffect::Summon(_)))
            .count()
    }
}

impl EffectApplication for EffectLog {
    fn fire(&mut self, projection: Projection, element: Element, dir: Direction, dam: i32) -> bool {
        self.record(AppliedEffect::Fire {
            projection,
            element,
            dir,
            dam,
        })
    }

    fn fire_blast(
        &mut self,
        element: Element,
        dir: Direction,
        count: i32,
        sides: i32,
        bolts: i32,
        spread: i32,
    ) -> bool {
        self.record(AppliedEffect::Blast {
            element,
            dir,
            count,
            sides,
            bolts,
            spread,
        })
    }

    fn project_around(&mut self, center: Position, radius: i32, element: Element, dam: i32) -> bool {
        self.record(AppliedEffect::ProjectAround {
            center,
            radius,
            element,
            dam,
        })
    }

    fn affect_monsters_in_sight(&mut self, effect: SightEffect, power: i32) -> bool {
        self.record(AppliedEffect::Sight { effect, power })
    }

    fn aim_effect(&mut self, effect: AimedEffect, dir: Direction, power: i32) -> bool {
        self.record(AppliedEffect::Aimed { effect, dir, power })
    }

    fn sleep_adjacent(&mut self, power: i32) -> bool {
        self.record(AppliedEffect::SleepAdjacent { power })
    }

    fn detect(&mut self, target: DetectTarget, radius: i32) -> bool {
        self.record(AppliedEffect::Detect { target, radius })
    }

    fn teleport_player(&mut self, range: i32) -> bool {
        self.record(AppliedEffect::Teleport { range })
    }

    fn summon(&mut self, request: &SummonRequest) -> bool {
        self.record(AppliedEffect::Summon(*request))
    }

    fn scatter(&mut self, center: Position, _distance: i32) -> Position {
        center
    }

    fn is_empty_floor(&self, _pos: Position) -> bool {
        self.floor_empty
    }

    fn remove_curse(&mut self, heavy: bool) -> bool {
        self.record(AppliedEffect::RemoveCurse { heavy })
    }

    fn brand_weapon(&mut self, brand: WeaponBrand) -> bool {
        self.record(AppliedEffect::BrandWeapon(brand))
    }

    fn destroy_area(&mut self, center: Position, radius: i32) -> bool {
        self.record(AppliedEffect::DestroyArea { center, radius })
    }

    fn wrath_of_the_god(&mut self, dir: Direction, dam: i32, radius: i32) -> bool {
        self.record(AppliedEffect::WrathOfTheGod { dir, dam, radius })
    }

    fn charm_good_monsters(&mut self, power: i32) -> bool {
        self.record(AppliedEffect::CharmGood { power })
    }
}
