//! Spell realms and the per-mode dispatcher
//!
//! A spell is identified by its realm and its index inside that realm. The
//! same pair answers four questions: its name, its description, the effect
//! summary shown in the spell menu, and what happens when it is cast.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

use super::crusade::CRUSADE;
use super::effect::{Element, Projection};
use crate::context::GameContext;
use crate::error::SpellError;
use crate::locale::{Locale, Text};
use crate::player::{Direction, Player};

/// A school of magic
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Realm {
    Crusade,
}

impl Realm {
    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Result<Self, SpellError> {
        Realm::iter()
            .find(|realm| realm.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| SpellError::UnknownRealm(name.to_string()))
    }

    pub fn spells(&self) -> &'static [SpellDescriptor] {
        match self {
            Realm::Crusade => &CRUSADE,
        }
    }

    pub fn spell_count(&self) -> usize {
        self.spells().len()
    }

    pub fn descriptor(&self, index: usize) -> Result<&'static SpellDescriptor, SpellError> {
        self.spells()
            .get(index)
            .ok_or(SpellError::UnknownSpell {
                realm: *self,
                index,
                count: self.spell_count(),
            })
    }
}

/// What a dispatch call is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SpellMode {
    Name,
    Description,
    Info,
    Cast,
}

/// How a cast ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CastOutcome {
    /// The spell took effect, even if every monster resisted
    Completed,
    /// The player declined to pick a target
    Cancelled,
    /// A sub-effect refused to apply
    Aborted,
}

impl CastOutcome {
    /// Only a completed cast costs the player a turn and mana
    pub fn consumes_turn(&self) -> bool {
        matches!(self, CastOutcome::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellOutput {
    Text(String),
    Cast(CastOutcome),
}

/// One row of a realm's spell table
pub struct SpellDescriptor {
    pub name: Text,
    pub description: Text,
    /// Menu summary for a caster; `None` for spells that show nothing
    pub info: fn(&Player, Locale) -> Option<String>,
    pub cast: fn(&mut GameContext) -> CastOutcome,
}

impl std::fmt::Debug for SpellDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellDescriptor")
            .field("name", &self.name.en)
            .finish_non_exhaustive()
    }
}

pub fn spell_name(realm: Realm, index: usize, locale: Locale) -> Result<&'static str, SpellError> {
    Ok(realm.descriptor(index)?.name.get(locale))
}

pub fn spell_description(
    realm: Realm,
    index: usize,
    locale: Locale,
) -> Result<&'static str, SpellError> {
    Ok(realm.descriptor(index)?.description.get(locale))
}

/// Menu summary as `player` would see it; empty when the spell has none
pub fn spell_info(
    realm: Realm,
    index: usize,
    player: &Player,
    locale: Locale,
) -> Result<String, SpellError> {
    let descriptor = realm.descriptor(index)?;
    Ok((descriptor.info)(player, locale).unwrap_or_default())
}

pub fn cast_spell(realm: Realm, index: usize, ctx: &mut GameContext) -> Result<CastOutcome, SpellError> {
    let descriptor = realm.descriptor(index)?;
    let outcome = (descriptor.cast)(ctx);
    debug!(
        %realm,
        index,
        spell = descriptor.name.en,
        level = ctx.player.level,
        %outcome,
        "cast spell"
    );
    Ok(outcome)
}

pub fn dispatch(
    realm: Realm,
    index: usize,
    mode: SpellMode,
    ctx: &mut GameContext,
) -> Result<SpellOutput, SpellError> {
    let locale = ctx.locale();
    let output = match mode {
        SpellMode::Name => SpellOutput::Text(spell_name(realm, index, locale)?.to_string()),
        SpellMode::Description => {
            SpellOutput::Text(spell_description(realm, index, locale)?.to_string())
        }
        SpellMode::Info => SpellOutput::Text(spell_info(realm, index, ctx.player, locale)?),
        SpellMode::Cast => SpellOutput::Cast(cast_spell(realm, index, ctx)?),
    };
    Ok(output)
}

/// Fire a beam with `prob` percent chance, a bolt otherwise
pub fn fire_bolt_or_beam(
    ctx: &mut GameContext,
    prob: i32,
    element: Element,
    dir: Direction,
    dam: i32,
) -> bool {
    let projection = if ctx.rng.randint0(100) < prob {
        Projection::Beam
    } else {
        Projection::Bolt
    };
    ctx.effects.fire(projection, element, dir, dam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MessageLog, ScriptedInput};
    use crate::magic::effect::{AppliedEffect, EffectLog};
    use crate::options::GameOptions;
    use crate::player::PlayerClass;
    use crate::rng::FixedRng;

    #[test]
    fn test_realm_lookup() {
        assert_eq!(Realm::from_name("crusade"), Ok(Realm::Crusade));
        assert_eq!(Realm::from_name("CRUSADE"), Ok(Realm::Crusade));
        assert_eq!(
            Realm::from_name("chaos"),
            Err(SpellError::UnknownRealm("chaos".to_string()))
        );
        assert_eq!(Realm::Crusade.spell_count(), 32);
    }

    #[test]
    fn test_unknown_index() {
        let err = spell_name(Realm::Crusade, 32, Locale::English).unwrap_err();
        assert_eq!(
            err,
            SpellError::UnknownSpell {
                realm: Realm::Crusade,
                index: 32,
                count: 32
            }
        );
    }

    #[test]
    fn test_consumes_turn() {
        assert!(CastOutcome::Completed.consumes_turn());
        assert!(!CastOutcome::Cancelled.consumes_turn());
        assert!(!CastOutcome::Aborted.consumes_turn());
    }

    #[test]
    fn test_dispatch_modes() {
        let mut player = Player::new(PlayerClass::Priest, 10);
        let mut rng = FixedRng::Min;
        let mut effects = EffectLog::new();
        let mut input = ScriptedInput::declining();
        let mut log = MessageLog::new();
        let options = GameOptions::default();
        let mut ctx = GameContext::new(
            &mut player,
            &mut rng,
            &mut effects,
            &mut input,
            &mut log,
            &options,
        );

        assert_eq!(
            dispatch(Realm::Crusade, 0, SpellMode::Name, &mut ctx),
            Ok(SpellOutput::Text("Punishment".to_string()))
        );
        assert_eq!(
            dispatch(Realm::Crusade, 0, SpellMode::Info, &mut ctx),
            Ok(SpellOutput::Text("dam 4d4".to_string()))
        );
        assert_eq!(
            dispatch(Realm::Crusade, 0, SpellMode::Cast, &mut ctx),
            Ok(SpellOutput::Cast(CastOutcome::Cancelled))
        );
        assert!(dispatch(Realm::Crusade, 99, SpellMode::Description, &mut ctx).is_err());
    }

    #[test]
    fn test_bolt_or_beam() {
        let mut player = Player::new(PlayerClass::Mage, 40);
        let mut rng = FixedRng::Min;
        let mut effects = EffectLog::new();
        let mut input = ScriptedInput::declining();
        let mut log = MessageLog::new();
        let options = GameOptions::default();
        let mut ctx = GameContext::new(
            &mut player,
            &mut rng,
            &mut effects,
            &mut input,
            &mut log,
            &options,
        );
        // randint0 rolls 0 under FixedRng::Min
        fire_bolt_or_beam(&mut ctx, 1, Element::Elec, Direction::TARGET, 10);
        fire_bolt_or_beam(&mut ctx, 0, Element::Elec, Direction::TARGET, 10);

        let shapes: Vec<Projection> = effects
            .applied
            .iter()
            .filter_map(|e| match e {
                AppliedEffect::Fire { projection, .. } => Some(*projection),
                _ => None,
            })
            .collect();
        assert_eq!(shapes, vec![Projection::Beam, Projection::Bolt]);
    }
}
