//! Temporary elemental brands and immunities
//!
//! The player carries two independent [`ElementalState`] slots, one for the
//! melee brand and one for the immunity. Each slot holds at most one element
//! at a time; switching element ends the old one first.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, warn};

use crate::MAX_ELEMENTAL_DURATION;
use crate::color::TermColor;
use crate::context::{GameContext, MenuEntry};
use crate::error::InvariantViolation;
use crate::locale::Text;

/// Elements a brand or immunity can carry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ElementKind {
    Acid = 0,
    Elec = 1,
    Fire = 2,
    Cold = 3,
    Poison = 4,
}

impl TryFrom<u8> for ElementKind {
    type Error = InvariantViolation;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ElementKind::Acid),
            1 => Ok(ElementKind::Elec),
            2 => Ok(ElementKind::Fire),
            3 => Ok(ElementKind::Cold),
            4 => Ok(ElementKind::Poison),
            _ => Err(InvariantViolation::ElementKind(raw)),
        }
    }
}

impl ElementKind {
    const fn brand_gained(&self) -> Text {
        match self {
            ElementKind::Acid => Text::new(
                "For a while, the blows you deal will melt with acid!",
                "酸で攻撃できるようになった！",
            ),
            ElementKind::Elec => Text::new(
                "For a while, the blows you deal will shock your foes!",
                "電撃で攻撃できるようになった！",
            ),
            ElementKind::Fire => Text::new(
                "For a while, the blows you deal will burn with fire!",
                "火炎で攻撃できるようになった！",
            ),
            ElementKind::Cold => Text::new(
                "For a while, the blows you deal will chill to the bone!",
                "冷気で攻撃できるようになった！",
            ),
            ElementKind::Poison => Text::new(
                "For a while, the blows you deal will poison your enemies!",
                "毒で攻撃できるようになった！",
            ),
        }
    }

    const fn brand_lost(&self) -> Text {
        match self {
            ElementKind::Acid => Text::new(
                "Your temporary acidic brand fades away.",
                "酸で攻撃できなくなった。",
            ),
            ElementKind::Elec => Text::new(
                "Your temporary electrical brand fades away.",
                "電撃で攻撃できなくなった。",
            ),
            ElementKind::Fire => Text::new(
                "Your temporary fiery brand fades away.",
                "火炎で攻撃できなくなった。",
            ),
            ElementKind::Cold => Text::new(
                "Your temporary frost brand fades away.",
                "冷気で攻撃できなくなった。",
            ),
            ElementKind::Poison => Text::new(
                "Your temporary poison brand fades away.",
                "毒で攻撃できなくなった。",
            ),
        }
    }

    const fn immunity_gained(&self) -> Text {
        match self {
            ElementKind::Acid => {
                Text::new("For a while, you are immune to acid!", "酸の攻撃を受けつけなくなった！")
            }
            ElementKind::Elec => Text::new(
                "For a while, you are immune to electricity!",
                "電撃の攻撃を受けつけなくなった！",
            ),
            ElementKind::Fire => {
                Text::new("For a while, you are immune to fire!", "火炎の攻撃を受けつけなくなった！")
            }
            ElementKind::Cold => {
                Text::new("For a while, you are immune to cold!", "冷気の攻撃を受けつけなくなった！")
            }
            ElementKind::Poison => {
                Text::new("For a while, you are immune to poison!", "毒の攻撃を受けつけなくなった！")
            }
        }
    }

    const fn immunity_lost(&self) -> Text {
        match self {
            ElementKind::Acid => Text::new(
                "You are no longer immune to acid.",
                "酸の攻撃で傷つけられるようになった。",
            ),
            ElementKind::Elec => Text::new(
                "You are no longer immune to electricity.",
                "電撃の攻撃で傷つけられるようになった。",
            ),
            ElementKind::Fire => Text::new(
                "You are no longer immune to fire.",
                "火炎の攻撃で傷つけられるようになった。",
            ),
            ElementKind::Cold => Text::new(
                "You are no longer immune to cold.",
                "冷気の攻撃で傷つけられるようになった。",
            ),
            ElementKind::Poison => Text::new(
                "You are no longer immune to poison.",
                "毒の攻撃で傷つけられるようになった。",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct ActiveElement {
    kind: ElementKind,
    remaining: u16,
}

/// One brand or immunity slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredSlot")]
pub struct ElementalState {
    active: Option<ActiveElement>,
}

#[derive(Deserialize)]
struct StoredElement {
    kind: ElementKind,
    remaining: i64,
}

/// Wire shape of [`ElementalState`]. Durations are clamped on load and a
/// zero duration loads as an empty slot.
#[derive(Deserialize)]
struct StoredSlot {
    active: Option<StoredElement>,
}

impl From<StoredSlot> for ElementalState {
    fn from(stored: StoredSlot) -> Self {
        let active = stored.active.and_then(|e| {
            let remaining = e.remaining.clamp(0, MAX_ELEMENTAL_DURATION as i64) as u16;
            (remaining > 0).then_some(ActiveElement {
                kind: e.kind,
                remaining,
            })
        });
        Self { active }
    }
}

impl ElementalState {
    pub fn kind(&self) -> Option<ElementKind> {
        self.active.map(|a| a.kind)
    }

    /// Turns left, 0 when inactive
    pub fn remaining(&self) -> i32 {
        self.active.map_or(0, |a| a.remaining as i32)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn has(&self, kind: ElementKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Core transition shared by brands and immunities. Returns true if the
    /// slot ended up different from how it started.
    fn apply(
        &mut self,
        ctx: &mut GameContext,
        kind: Option<ElementKind>,
        duration: i32,
        lost: fn(&ElementKind) -> Text,
        gained: fn(&ElementKind) -> Text,
    ) -> bool {
        let before = *self;
        let duration = duration.clamp(0, MAX_ELEMENTAL_DURATION);

        if let Some(old) = self.active {
            if Some(old.kind) != kind || duration == 0 {
                ctx.msg(lost(&old.kind));
                self.active = None;
            }
        }

        if let Some(kind) = kind.filter(|_| duration > 0) {
            self.active = Some(ActiveElement {
                kind,
                remaining: duration as u16,
            });
            ctx.msg(gained(&kind));
        }

        ctx.status_changed();
        *self != before
    }
}

/// Set the temporary melee brand. `None` or a zero duration ends it.
pub fn set_ele_attack(ctx: &mut GameContext, kind: Option<ElementKind>, duration: i32) -> bool {
    let mut brand = ctx.player.brand;
    let changed = brand.apply(
        ctx,
        kind,
        duration,
        ElementKind::brand_lost,
        ElementKind::brand_gained,
    );
    ctx.player.brand = brand;
    debug!(?kind, duration, remaining = brand.remaining(), changed, "elemental brand");
    changed
}

/// Set the temporary elemental immunity. `None` or a zero duration ends it.
pub fn set_ele_immune(ctx: &mut GameContext, kind: Option<ElementKind>, duration: i32) -> bool {
    let mut immunity = ctx.player.immunity;
    let changed = immunity.apply(
        ctx,
        kind,
        duration,
        ElementKind::immunity_lost,
        ElementKind::immunity_gained,
    );
    ctx.player.immunity = immunity;
    debug!(?kind, duration, remaining = immunity.remaining(), changed, "elemental immunity");
    changed
}

/// Menu line for one element; `min_num` is the `(level - 20) / 5` needed
struct BrandOption {
    key: char,
    kind: ElementKind,
    label: Text,
    color: TermColor,
    min_num: i32,
}

const BRAND_OPTIONS: [BrandOption; 5] = [
    BrandOption {
        key: 'a',
        kind: ElementKind::Fire,
        label: Text::new("Fire Brand", "焼棄"),
        color: TermColor::Red,
        min_num: i32::MIN,
    },
    BrandOption {
        key: 'b',
        kind: ElementKind::Cold,
        label: Text::new("Cold Brand", "凍結"),
        color: TermColor::LightWhite,
        min_num: 2,
    },
    BrandOption {
        key: 'c',
        kind: ElementKind::Poison,
        label: Text::new("Poison Brand", "毒殺"),
        color: TermColor::Green,
        min_num: 3,
    },
    BrandOption {
        key: 'd',
        kind: ElementKind::Acid,
        label: Text::new("Acid Brand", "溶解"),
        color: TermColor::LightDark,
        min_num: 4,
    },
    BrandOption {
        key: 'e',
        kind: ElementKind::Elec,
        label: Text::new("Elec Brand", "電撃"),
        color: TermColor::Blue,
        min_num: 5,
    },
];

const IMMUNE_OPTIONS: [BrandOption; 4] = [
    BrandOption {
        key: 'a',
        kind: ElementKind::Fire,
        label: Text::new("Immunity to fire", "火炎"),
        color: TermColor::Red,
        min_num: i32::MIN,
    },
    BrandOption {
        key: 'b',
        kind: ElementKind::Cold,
        label: Text::new("Immunity to cold", "冷気"),
        color: TermColor::LightWhite,
        min_num: i32::MIN,
    },
    BrandOption {
        key: 'c',
        kind: ElementKind::Acid,
        label: Text::new("Immunity to acid", "酸"),
        color: TermColor::LightDark,
        min_num: i32::MIN,
    },
    BrandOption {
        key: 'd',
        kind: ElementKind::Elec,
        label: Text::new("Immunity to elec", "電撃"),
        color: TermColor::Blue,
        min_num: i32::MIN,
    },
];

/// Show the offered options and map the answer back to an element.
/// Unknown or unoffered keys are treated like an escape.
fn ask(ctx: &mut GameContext, prompt: Text, options: &[BrandOption], num: i32) -> Option<ElementKind> {
    let locale = ctx.locale();
    let offered: Vec<&BrandOption> = options.iter().filter(|o| num >= o.min_num).collect();
    let entries: Vec<MenuEntry> = offered
        .iter()
        .map(|o| MenuEntry {
            key: o.key,
            label: o.label.get(locale).to_string(),
            color: o.color,
        })
        .collect();

    let answer = ctx.input.choose(prompt.get(locale), &entries)?;
    let key = answer.to_ascii_lowercase();
    let picked = offered.iter().find(|o| o.key == key).map(|o| o.kind);
    if picked.is_none() {
        warn!(answer = %answer, "menu answer not among the offered options");
    }
    picked
}

/// Let the player pick a melee brand. The choice widens with level.
pub fn choose_ele_attack(ctx: &mut GameContext) -> Option<ElementKind> {
    if !ctx.player.has_melee_weapon {
        ctx.msg(Text::new(
            "You cannot use temporary branding with no weapon.",
            "武器を持たないと魔法剣は使えない。",
        ));
        return None;
    }

    let level = ctx.player.level;
    let num = (level - 20) / 5;
    let prompt = Text::new("Choose a temporary elemental brand", "どの元素攻撃をしますか？");

    let Some(kind) = ask(ctx, prompt, &BRAND_OPTIONS, num) else {
        ctx.msg(Text::new("You cancel the temporary branding.", "魔法剣を使うのをやめた。"));
        return None;
    };

    let duration = level / 2 + ctx.rng.randint1(level / 2);
    set_ele_attack(ctx, Some(kind), duration);
    ctx.player.brand.has(kind).then_some(kind)
}

/// Let the player pick an immunity lasting `turns`
pub fn choose_ele_immune(ctx: &mut GameContext, turns: i32) -> Option<ElementKind> {
    let prompt = Text::new(
        "Choose a temporary elemental immunity",
        "どの元素の免疫をつけますか？",
    );

    let Some(kind) = ask(ctx, prompt, &IMMUNE_OPTIONS, 0) else {
        ctx.msg(Text::new("You cancel the temporary immunity.", "免疫を付けるのをやめた。"));
        return None;
    };

    set_ele_immune(ctx, Some(kind), turns);
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MessageLog, ScriptedInput};
    use crate::magic::effect::EffectLog;
    use crate::options::GameOptions;
    use crate::player::{Player, PlayerClass, RedrawFlags, UpdateFlags};
    use crate::rng::FixedRng;
    use strum::IntoEnumIterator;

    struct Harness {
        player: Player,
        rng: FixedRng,
        effects: EffectLog,
        input: ScriptedInput,
        log: MessageLog,
        options: GameOptions,
    }

    impl Harness {
        fn new(level: i32) -> Self {
            Self {
                player: Player::new(PlayerClass::RedMage, level),
                rng: FixedRng::Max,
                effects: EffectLog::new(),
                input: ScriptedInput::declining(),
                log: MessageLog::new(),
                options: GameOptions::default(),
            }
        }

        fn run<R>(&mut self, f: impl FnOnce(&mut GameContext) -> R) -> R {
            let mut ctx = GameContext::new(
                &mut self.player,
                &mut self.rng,
                &mut self.effects,
                &mut self.input,
                &mut self.log,
                &self.options,
            );
            f(&mut ctx)
        }
    }

    #[test]
    fn test_brand_exclusivity() {
        let mut h = Harness::new(40);
        h.run(|ctx| set_ele_attack(ctx, Some(ElementKind::Fire), 20));
        h.run(|ctx| set_ele_attack(ctx, Some(ElementKind::Cold), 30));
        assert!(h.player.brand.has(ElementKind::Cold));
        assert!(!h.player.brand.has(ElementKind::Fire));
        assert_eq!(h.player.brand.remaining(), 30);
        assert!(h.log.contains("Your temporary fiery brand fades away."));
        assert!(h.log.contains("chill to the bone!"));
    }

    #[test]
    fn test_duration_clamped() {
        let mut h = Harness::new(40);
        h.run(|ctx| set_ele_immune(ctx, Some(ElementKind::Acid), 999_999));
        assert_eq!(h.player.immunity.remaining(), 10000);

        h.run(|ctx| set_ele_immune(ctx, Some(ElementKind::Acid), -5));
        assert!(!h.player.immunity.is_active());
        assert!(h.log.contains("You are no longer immune to acid."));
    }

    #[test]
    fn test_none_clears_and_marks_status() {
        let mut h = Harness::new(40);
        h.run(|ctx| set_ele_attack(ctx, Some(ElementKind::Poison), 10));
        h.player.update = UpdateFlags::empty();
        h.player.redraw = RedrawFlags::empty();
        h.player.disturbed = false;

        assert!(h.run(|ctx| set_ele_attack(ctx, None, 10)));
        assert!(!h.player.brand.is_active());
        assert!(h.player.disturbed);
        assert!(h.player.update.contains(UpdateFlags::BONUS));
        assert!(h.player.redraw.contains(RedrawFlags::STATUS));
    }

    #[test]
    fn test_brand_and_immunity_independent() {
        let mut h = Harness::new(40);
        h.run(|ctx| set_ele_attack(ctx, Some(ElementKind::Fire), 10));
        h.run(|ctx| set_ele_immune(ctx, Some(ElementKind::Cold), 10));
        assert!(h.player.brand.has(ElementKind::Fire));
        assert!(h.player.immunity.has(ElementKind::Cold));
    }

    #[test]
    fn test_choose_brand_requires_weapon() {
        let mut h = Harness::new(45);
        h.player.has_melee_weapon = false;
        h.input = ScriptedInput::with_choice('a');
        assert_eq!(h.run(choose_ele_attack), None);
        assert!(h.log.contains("no weapon"));
        assert!(!h.player.brand.is_active());
    }

    #[test]
    fn test_choose_brand_level_gates() {
        // level 30: num = 2, so fire and cold only
        let mut h = Harness::new(30);
        h.input = ScriptedInput::with_choice('c');
        assert_eq!(h.run(choose_ele_attack), None);
        assert!(h.log.contains("You cancel the temporary branding."));
        assert_eq!(h.input.prompts[0].1.len(), 2);

        h.input = ScriptedInput::with_choice('B');
        assert_eq!(h.run(choose_ele_attack), Some(ElementKind::Cold));
        // 15 + 1d15 rolled at max
        assert_eq!(h.player.brand.remaining(), 30);
    }

    #[test]
    fn test_choose_brand_all_at_high_level() {
        let mut h = Harness::new(50);
        h.input = ScriptedInput::with_choice('e');
        assert_eq!(h.run(choose_ele_attack), Some(ElementKind::Elec));
        assert_eq!(h.input.prompts[0].1.len(), 5);
    }

    #[test]
    fn test_choose_immunity() {
        let mut h = Harness::new(20);
        h.input = ScriptedInput::with_choice('d');
        assert_eq!(
            h.run(|ctx| choose_ele_immune(ctx, 40)),
            Some(ElementKind::Elec)
        );
        assert_eq!(h.player.immunity.remaining(), 40);

        h.input = ScriptedInput::declining();
        assert_eq!(h.run(|ctx| choose_ele_immune(ctx, 40)), None);
        assert!(h.log.contains("You cancel the temporary immunity."));
        assert!(h.player.immunity.has(ElementKind::Elec));
    }

    #[test]
    fn test_choose_brand_too_short_to_install() {
        // level 1: 0 + 1d0 turns
        let mut h = Harness::new(1);
        h.input = ScriptedInput::with_choice('a');
        assert_eq!(h.run(choose_ele_attack), None);
        assert!(!h.player.brand.is_active());
        assert!(!h.log.contains("burn with fire"));
    }

    #[test]
    fn test_loaded_slot_keeps_invariants() {
        let slot: ElementalState =
            serde_json::from_str(r#"{"active":{"kind":"Fire","remaining":0}}"#).unwrap();
        assert!(!slot.is_active());
        assert_eq!(slot.remaining(), 0);

        let slot: ElementalState =
            serde_json::from_str(r#"{"active":{"kind":"Cold","remaining":65000}}"#).unwrap();
        assert!(slot.has(ElementKind::Cold));
        assert_eq!(slot.remaining(), MAX_ELEMENTAL_DURATION);

        let mut h = Harness::new(40);
        h.run(|ctx| set_ele_immune(ctx, Some(ElementKind::Acid), 25));
        let saved = serde_json::to_string(&h.player.immunity).unwrap();
        let loaded: ElementalState = serde_json::from_str(&saved).unwrap();
        assert_eq!(loaded, h.player.immunity);
    }

    #[test]
    fn test_element_kind_decoding() {
        for kind in ElementKind::iter() {
            assert_eq!(ElementKind::try_from(kind as u8), Ok(kind));
        }
        assert_eq!(
            ElementKind::try_from(7),
            Err(InvariantViolation::ElementKind(7))
        );
    }
}
