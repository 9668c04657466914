//! Magic system
//!
//! Spell realms, effect magnitudes, and temporary elemental brands and
//! immunities.

pub mod crusade;
pub mod effect;
pub mod elemental;
pub mod magnitude;
pub mod realm;

pub use effect::{AppliedEffect, EffectLog, Element, Projection};
pub use elemental::{
    ElementKind, ElementalState, choose_ele_attack, choose_ele_immune, set_ele_attack,
    set_ele_immune,
};
pub use magnitude::EffectMagnitude;
pub use realm::{
    CastOutcome, Realm, SpellDescriptor, SpellMode, SpellOutput, cast_spell, dispatch,
    spell_description, spell_info, spell_name,
};
