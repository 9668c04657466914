//! The Crusade realm: holy magic for priests and paladins
//!
//! Each spell that has a number to show derives it from one
//! [`EffectMagnitude`] function, used by both its menu summary and its cast.

use super::effect::{
    AimedEffect, DetectTarget, Element, Projection, SightEffect, SummonFlags, SummonKind,
    SummonRequest, WeaponBrand,
};
use super::magnitude::EffectMagnitude;
use super::realm::{CastOutcome, SpellDescriptor, fire_bolt_or_beam};
use crate::context::GameContext;
use crate::locale::{Locale, Text};
use crate::player::Player;
use crate::status::StatusSetter;
use crate::{DETECT_RAD_DEFAULT, MAX_PLAYER_SIGHT};

fn no_info(_: &Player, _: Locale) -> Option<String> {
    None
}

/// Ask for a direction or bail out of the cast
macro_rules! aim_or_cancel {
    ($ctx:expr) => {
        match $ctx.get_aim_dir() {
            Some(dir) => dir,
            None => return CastOutcome::Cancelled,
        }
    };
}

// 0: Punishment

fn punishment(p: &Player) -> EffectMagnitude {
    EffectMagnitude::dice(3 + (p.level - 1) / 5, 4, 0)
}

fn info_punishment(p: &Player, locale: Locale) -> Option<String> {
    Some(punishment(p).describe(locale))
}

fn cast_punishment(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let dam = punishment(ctx.player).roll(ctx.rng);
    let prob = ctx.player.beam_chance() - 10;
    fire_bolt_or_beam(ctx, prob, Element::Elec, dir, dam);
    CastOutcome::Completed
}

// 1: Detect Evil

fn info_detect_evil(_: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::Radius(DETECT_RAD_DEFAULT).describe(locale))
}

fn cast_detect_evil(ctx: &mut GameContext) -> CastOutcome {
    ctx.effects.detect(DetectTarget::EvilMonsters, DETECT_RAD_DEFAULT);
    CastOutcome::Completed
}

// 2: Remove Fear

fn cast_remove_fear(ctx: &mut GameContext) -> CastOutcome {
    StatusSetter::new(ctx).set_fear(0);
    CastOutcome::Completed
}

// 3: Scare Monster

fn info_scare_monster(p: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::Power(p.level).describe(locale))
}

fn cast_scare_monster(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let power = ctx.player.level;
    ctx.effects.aim_effect(AimedEffect::Scare, dir, power);
    CastOutcome::Completed
}

// 4: Sanctuary

fn info_sanctuary(p: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::Power(p.level).describe(locale))
}

fn cast_sanctuary(ctx: &mut GameContext) -> CastOutcome {
    let power = ctx.player.level;
    ctx.effects.sleep_adjacent(power);
    CastOutcome::Completed
}

// 5: Portal

fn portal(p: &Player) -> EffectMagnitude {
    EffectMagnitude::Range(25 + p.level / 2)
}

fn info_portal(p: &Player, locale: Locale) -> Option<String> {
    Some(portal(p).describe(locale))
}

fn cast_portal(ctx: &mut GameContext) -> CastOutcome {
    let range = portal(ctx.player).roll(ctx.rng);
    ctx.effects.teleport_player(range);
    CastOutcome::Completed
}

// 6: Star Dust

fn star_dust(p: &Player) -> (i32, i32) {
    (3 + (p.level - 1) / 9, 2)
}

fn info_star_dust(p: &Player, locale: Locale) -> Option<String> {
    let (count, sides) = star_dust(p);
    Some(EffectMagnitude::MultiDamageDice { count, sides }.describe(locale))
}

fn cast_star_dust(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let (count, sides) = star_dust(ctx.player);
    ctx.effects.fire_blast(Element::Lite, dir, count, sides, 10, 3);
    CastOutcome::Completed
}

// 7: Purify

fn cast_purify(ctx: &mut GameContext) -> CastOutcome {
    let mut setter = StatusSetter::new(ctx);
    setter.set_cut(0);
    setter.set_poison(0);
    setter.set_stun(0);
    CastOutcome::Completed
}

// 8: Scatter Evil

const SCATTER_EVIL_POWER: i32 = MAX_PLAYER_SIGHT * 5;

fn info_scatter_evil(_: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::Power(SCATTER_EVIL_POWER).describe(locale))
}

fn cast_scatter_evil(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    ctx.effects.fire(
        Projection::Ball { radius: 0 },
        Element::AwayEvil,
        dir,
        SCATTER_EVIL_POWER,
    );
    CastOutcome::Completed
}

// 9: Holy Orb

/// Priests and pure casters get a bigger flat bonus
fn holy_orb(p: &Player) -> EffectMagnitude {
    let base = if p.class.is_devout_caster() {
        p.level + p.level / 2
    } else {
        p.level + p.level / 4
    };
    EffectMagnitude::dice(3, 6, base)
}

fn holy_orb_radius(p: &Player) -> i32 {
    if p.level < 30 { 2 } else { 3 }
}

fn info_holy_orb(p: &Player, locale: Locale) -> Option<String> {
    Some(holy_orb(p).describe(locale))
}

fn cast_holy_orb(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let dam = holy_orb(ctx.player).roll(ctx.rng);
    let radius = holy_orb_radius(ctx.player);
    ctx.effects
        .fire(Projection::Ball { radius }, Element::HolyFire, dir, dam);
    CastOutcome::Completed
}

// 10: Exorcism

fn exorcism(p: &Player) -> EffectMagnitude {
    EffectMagnitude::dice(1, p.level, 0)
}

fn info_exorcism(p: &Player, locale: Locale) -> Option<String> {
    Some(exorcism(p).describe(locale))
}

fn cast_exorcism(ctx: &mut GameContext) -> CastOutcome {
    let dam = exorcism(ctx.player);
    let undead = dam.roll(ctx.rng);
    ctx.effects
        .affect_monsters_in_sight(SightEffect::DispelUndead, undead);
    let demons = dam.roll(ctx.rng);
    ctx.effects
        .affect_monsters_in_sight(SightEffect::DispelDemons, demons);
    let power = ctx.player.level;
    ctx.effects.affect_monsters_in_sight(SightEffect::TurnEvil, power);
    CastOutcome::Completed
}

// 11: Remove Curse

fn cast_remove_curse(ctx: &mut GameContext) -> CastOutcome {
    ctx.effects.remove_curse(false);
    CastOutcome::Completed
}

// 12: Sense Unseen

const SENSE_UNSEEN: EffectMagnitude = EffectMagnitude::duration(24, 24);

fn info_sense_unseen(_: &Player, locale: Locale) -> Option<String> {
    Some(SENSE_UNSEEN.describe(locale))
}

fn cast_sense_unseen(ctx: &mut GameContext) -> CastOutcome {
    let turns = SENSE_UNSEEN.roll(ctx.rng);
    StatusSetter::new(ctx).set_tim_invis(turns);
    CastOutcome::Completed
}

// 13: Protection from Evil

fn protection_from_evil(p: &Player) -> EffectMagnitude {
    EffectMagnitude::duration(25, 3 * p.level)
}

fn info_protection_from_evil(p: &Player, locale: Locale) -> Option<String> {
    Some(protection_from_evil(p).describe(locale))
}

fn cast_protection_from_evil(ctx: &mut GameContext) -> CastOutcome {
    let turns = protection_from_evil(ctx.player).roll(ctx.rng);
    StatusSetter::new(ctx).set_protevil(turns);
    CastOutcome::Completed
}

// 14: Judgment Thunder

fn judgment_thunder(p: &Player) -> EffectMagnitude {
    EffectMagnitude::flat(p.level * 5)
}

fn info_judgment_thunder(p: &Player, locale: Locale) -> Option<String> {
    Some(judgment_thunder(p).describe(locale))
}

fn cast_judgment_thunder(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let dam = judgment_thunder(ctx.player).roll(ctx.rng);
    ctx.effects.fire(Projection::Bolt, Element::Elec, dir, dam);
    CastOutcome::Completed
}

// 15: Holy Word

const HOLY_WORD_HEAL: i32 = 100;

fn holy_word_sides(p: &Player) -> i32 {
    p.level * 6
}

fn holy_word(p: &Player) -> EffectMagnitude {
    EffectMagnitude::dice(1, holy_word_sides(p), 0)
}

fn info_holy_word(p: &Player, locale: Locale) -> Option<String> {
    let sides = holy_word_sides(p);
    Some(match locale {
        Locale::English => format!("dam:d{}/h{}", sides, HOLY_WORD_HEAL),
        Locale::Japanese => format!("損:1d{}/回{}", sides, HOLY_WORD_HEAL),
    })
}

fn cast_holy_word(ctx: &mut GameContext) -> CastOutcome {
    let dam = holy_word(ctx.player).roll(ctx.rng);
    ctx.effects.affect_monsters_in_sight(SightEffect::DispelEvil, dam);

    let mut setter = StatusSetter::new(ctx);
    setter.hp_player(HOLY_WORD_HEAL);
    setter.set_fear(0);
    setter.set_poison(0);
    setter.set_stun(0);
    setter.set_cut(0);
    CastOutcome::Completed
}

// 16: Unbarring Ways

fn cast_unbarring_ways(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    ctx.effects.aim_effect(AimedEffect::DestroyDoors, dir, 0);
    CastOutcome::Completed
}

// 17: Arrest

fn arrest(p: &Player) -> EffectMagnitude {
    EffectMagnitude::Power(p.level * 2)
}

fn info_arrest(p: &Player, locale: Locale) -> Option<String> {
    Some(arrest(p).describe(locale))
}

fn cast_arrest(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let power = arrest(ctx.player).roll(ctx.rng);
    ctx.effects.aim_effect(AimedEffect::StasisEvil, dir, power);
    CastOutcome::Completed
}

// 18: Holy Aura

const HOLY_AURA: EffectMagnitude = EffectMagnitude::duration(20, 20);

fn info_holy_aura(_: &Player, locale: Locale) -> Option<String> {
    Some(HOLY_AURA.describe(locale))
}

fn cast_holy_aura(ctx: &mut GameContext) -> CastOutcome {
    let turns = HOLY_AURA.roll(ctx.rng);
    StatusSetter::new(ctx).set_holy_aura(turns);
    CastOutcome::Completed
}

// 19: Dispel Undead & Demons, 20: Dispel Evil

fn dispel(p: &Player) -> EffectMagnitude {
    EffectMagnitude::dice(1, p.level * 4, 0)
}

fn info_dispel(p: &Player, locale: Locale) -> Option<String> {
    Some(dispel(p).describe(locale))
}

fn cast_dispel_undead_demons(ctx: &mut GameContext) -> CastOutcome {
    let dam = dispel(ctx.player);
    let undead = dam.roll(ctx.rng);
    ctx.effects
        .affect_monsters_in_sight(SightEffect::DispelUndead, undead);
    let demons = dam.roll(ctx.rng);
    ctx.effects
        .affect_monsters_in_sight(SightEffect::DispelDemons, demons);
    CastOutcome::Completed
}

fn cast_dispel_evil(ctx: &mut GameContext) -> CastOutcome {
    let dam = dispel(ctx.player).roll(ctx.rng);
    ctx.effects.affect_monsters_in_sight(SightEffect::DispelEvil, dam);
    CastOutcome::Completed
}

// 21: Holy Blade

fn cast_holy_blade(ctx: &mut GameContext) -> CastOutcome {
    ctx.effects.brand_weapon(WeaponBrand::SlayEvil);
    CastOutcome::Completed
}

// 22: Star Burst

fn star_burst(p: &Player) -> EffectMagnitude {
    EffectMagnitude::flat(100 + p.level * 2)
}

fn info_star_burst(p: &Player, locale: Locale) -> Option<String> {
    Some(star_burst(p).describe(locale))
}

fn cast_star_burst(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let dam = star_burst(ctx.player).roll(ctx.rng);
    ctx.effects
        .fire(Projection::Ball { radius: 4 }, Element::Lite, dir, dam);
    CastOutcome::Completed
}

// 23: Summon Angel

fn cast_summon_angel(ctx: &mut GameContext) -> CastOutcome {
    let level = ctx.player.level;
    let pet = !ctx.rng.one_in(3);

    let mut flags = if pet {
        SummonFlags::FORCE_PET
    } else {
        SummonFlags::NO_PET
    };
    if !(pet && level < 50) {
        flags |= SummonFlags::ALLOW_GROUP;
    }

    let request = SummonRequest {
        kind: SummonKind::Angel,
        level: level * 3 / 2,
        position: ctx.player.position,
        flags,
    };
    if ctx.effects.summon(&request) {
        if pet {
            ctx.msg(Text::new(
                "'What is thy bidding... Master?'",
                "「ご用でございますか、ご主人様」",
            ));
        } else {
            ctx.msg(Text::new(
                "Mortal! Repent of thy impiousness.",
                "「我は汝の下僕にあらず！ 悪行者よ、悔い改めよ！」",
            ));
        }
    }
    CastOutcome::Completed
}

// 24: Heroism

const HEROISM_BASE: i32 = 25;

fn info_heroism(_: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::duration(HEROISM_BASE, HEROISM_BASE).describe(locale))
}

fn cast_heroism(ctx: &mut GameContext) -> CastOutcome {
    StatusSetter::new(ctx).heroism(HEROISM_BASE);
    CastOutcome::Completed
}

// 25: Dispel Curse

fn cast_dispel_curse(ctx: &mut GameContext) -> CastOutcome {
    ctx.effects.remove_curse(true);
    CastOutcome::Completed
}

// 26: Banish Evil

const BANISH_EVIL_POWER: i32 = 100;

fn info_banish_evil(_: &Player, locale: Locale) -> Option<String> {
    Some(EffectMagnitude::Power(BANISH_EVIL_POWER).describe(locale))
}

fn cast_banish_evil(ctx: &mut GameContext) -> CastOutcome {
    if ctx
        .effects
        .affect_monsters_in_sight(SightEffect::BanishEvil, BANISH_EVIL_POWER)
    {
        ctx.msg(Text::new(
            "The holy power banishes evil!",
            "神聖な力が邪悪を打ち払った！",
        ));
    }
    CastOutcome::Completed
}

// 27: Armageddon

fn cast_armageddon(ctx: &mut GameContext) -> CastOutcome {
    let radius = EffectMagnitude::duration(12, 4).roll(ctx.rng);
    let center = ctx.player.position;
    ctx.effects.destroy_area(center, radius);
    CastOutcome::Completed
}

// 28: An Eye for an Eye

const EYE_FOR_EYE: EffectMagnitude = EffectMagnitude::duration(10, 10);

fn info_eye_for_eye(_: &Player, locale: Locale) -> Option<String> {
    Some(EYE_FOR_EYE.describe(locale))
}

fn cast_eye_for_eye(ctx: &mut GameContext) -> CastOutcome {
    let turns = EYE_FOR_EYE.roll(ctx.rng);
    StatusSetter::new(ctx).set_eye_for_eye(turns);
    CastOutcome::Completed
}

// 29: Wrath of the God

fn wrath_of_the_god(p: &Player) -> EffectMagnitude {
    EffectMagnitude::MultiDamage(p.level * 3 + 25)
}

fn info_wrath_of_the_god(p: &Player, locale: Locale) -> Option<String> {
    Some(wrath_of_the_god(p).describe(locale))
}

fn cast_wrath_of_the_god(ctx: &mut GameContext) -> CastOutcome {
    let dir = aim_or_cancel!(ctx);
    let dam = wrath_of_the_god(ctx.player).roll(ctx.rng);
    if !ctx.effects.wrath_of_the_god(dir, dam, 2) {
        return CastOutcome::Aborted;
    }
    CastOutcome::Completed
}

// 30: Divine Intervention

const DIVINE_HEAL: i32 = 100;

/// Strengths of the burst at the caster's feet and the sight effects
struct DivinePowers {
    burst: i32,
    dispel: i32,
    slow: i32,
    power: i32,
}

fn divine_intervention(p: &Player) -> DivinePowers {
    DivinePowers {
        burst: p.level * 11,
        dispel: p.level * 4,
        slow: p.level,
        power: p.level * 4,
    }
}

// The burst is a radius 1 ball, so the menu shows its damage next to the
// caster rather than at the centre.
fn info_divine_intervention(p: &Player, locale: Locale) -> Option<String> {
    let powers = divine_intervention(p);
    let burst = powers.burst / 2;
    Some(match locale {
        Locale::English => format!("h{}/dm{}+{}", DIVINE_HEAL, powers.dispel, burst),
        Locale::Japanese => format!("回{}/損{}+{}", DIVINE_HEAL, powers.dispel, burst),
    })
}

fn cast_divine_intervention(ctx: &mut GameContext) -> CastOutcome {
    let powers = divine_intervention(ctx.player);
    let center = ctx.player.position;

    ctx.effects
        .project_around(center, 1, Element::HolyFire, powers.burst);
    for (effect, strength) in [
        (SightEffect::DispelAll, powers.dispel),
        (SightEffect::Slow, powers.slow),
        (SightEffect::Stun, powers.power),
        (SightEffect::Confuse, powers.power),
        (SightEffect::TurnAll, powers.power),
        (SightEffect::Stasis, powers.power),
    ] {
        ctx.effects.affect_monsters_in_sight(effect, strength);
    }
    StatusSetter::new(ctx).hp_player(DIVINE_HEAL);
    CastOutcome::Completed
}

// 31: Crusade

const CRUSADE_KNIGHTS: usize = 12;
const KNIGHT_PLACEMENT_ATTEMPTS: usize = 10;

fn cast_crusade(ctx: &mut GameContext) -> CastOutcome {
    let level = ctx.player.level;
    let center = ctx.player.position;
    ctx.effects.charm_good_monsters(level * 4);

    for _ in 0..CRUSADE_KNIGHTS {
        let mut spot = None;
        for _ in 0..KNIGHT_PLACEMENT_ATTEMPTS {
            let pos = ctx.effects.scatter(center, 4);
            if ctx.effects.is_empty_floor(pos) {
                spot = Some(pos);
                break;
            }
        }
        let Some(position) = spot else {
            continue;
        };

        ctx.effects.summon(&SummonRequest {
            kind: SummonKind::Knights,
            level,
            position,
            flags: SummonFlags::ALLOW_GROUP | SummonFlags::FORCE_PET | SummonFlags::HASTE,
        });
    }

    let buff = EffectMagnitude::duration(25, 25);
    let hero = buff.roll(ctx.rng);
    let blessed = buff.roll(ctx.rng);
    let speed = EffectMagnitude::duration(level, 20 + level).roll(ctx.rng);
    let protevil = buff.roll(ctx.rng);

    let mut setter = StatusSetter::new(ctx);
    setter.set_hero(hero);
    setter.set_blessed(blessed);
    setter.set_acceleration(speed);
    setter.set_protevil(protevil);
    setter.set_fear(0);
    CastOutcome::Completed
}

pub static CRUSADE: [SpellDescriptor; 32] = [
    SpellDescriptor {
        name: Text::new("Punishment", "懲罰"),
        description: Text::new(
            "Fires a bolt or beam of lightning.",
            "電撃のボルトもしくはビームを放つ。",
        ),
        info: info_punishment,
        cast: cast_punishment,
    },
    SpellDescriptor {
        name: Text::new("Detect Evil", "邪悪存在感知"),
        description: Text::new(
            "Detects all evil monsters in your vicinity.",
            "近くの邪悪なモンスターを感知する。",
        ),
        info: info_detect_evil,
        cast: cast_detect_evil,
    },
    SpellDescriptor {
        name: Text::new("Remove Fear", "恐怖除去"),
        description: Text::new("Removes fear.", "恐怖を取り除く。"),
        info: no_info,
        cast: cast_remove_fear,
    },
    SpellDescriptor {
        name: Text::new("Scare Monster", "威圧"),
        description: Text::new(
            "Attempts to scare a monster.",
            "モンスター1体を恐怖させる。抵抗されると無効。",
        ),
        info: info_scare_monster,
        cast: cast_scare_monster,
    },
    SpellDescriptor {
        name: Text::new("Sanctuary", "聖域"),
        description: Text::new(
            "Attempts to put to sleep monsters in the adjacent squares.",
            "隣接した全てのモンスターを眠らせる。抵抗されると無効。",
        ),
        info: info_sanctuary,
        cast: cast_sanctuary,
    },
    SpellDescriptor {
        name: Text::new("Portal", "入口"),
        description: Text::new(
            "Teleports you a medium distance.",
            "中距離のテレポートをする。",
        ),
        info: info_portal,
        cast: cast_portal,
    },
    SpellDescriptor {
        name: Text::new("Star Dust", "スターダスト"),
        description: Text::new(
            "Fires many bolts of light near the target.",
            "ターゲット付近に閃光のボルトを連射する。",
        ),
        info: info_star_dust,
        cast: cast_star_dust,
    },
    SpellDescriptor {
        name: Text::new("Purify", "身体浄化"),
        description: Text::new(
            "Heals all cuts, poisons and being stunned.",
            "傷、毒、朦朧から全快する。",
        ),
        info: no_info,
        cast: cast_purify,
    },
    SpellDescriptor {
        name: Text::new("Scatter Evil", "邪悪飛ばし"),
        description: Text::new(
            "Attempts to teleport an evil monster away.",
            "邪悪なモンスター1体をテレポートさせる。抵抗されると無効。",
        ),
        info: info_scatter_evil,
        cast: cast_scatter_evil,
    },
    SpellDescriptor {
        name: Text::new("Holy Orb", "聖なる光球"),
        description: Text::new(
            "Fires a ball with holy power. Hurts evil monsters greatly but doesn't affect good monsters.",
            "聖なる力をもつ宝珠を放つ。邪悪なモンスターに対して大きなダメージを与えるが、善良なモンスターには効果がない。",
        ),
        info: info_holy_orb,
        cast: cast_holy_orb,
    },
    SpellDescriptor {
        name: Text::new("Exorcism", "悪魔払い"),
        description: Text::new(
            "Damages all undead and demons in sight, and scares all evil monsters in sight.",
            "視界内の全てのアンデッド及び悪魔にダメージを与え、邪悪なモンスターを恐怖させる。",
        ),
        info: info_exorcism,
        cast: cast_exorcism,
    },
    SpellDescriptor {
        name: Text::new("Remove Curse", "解呪"),
        description: Text::new(
            "Removes normal curses from equipped items.",
            "アイテムにかかった弱い呪いを解除する。",
        ),
        info: no_info,
        cast: cast_remove_curse,
    },
    SpellDescriptor {
        name: Text::new("Sense Unseen", "透明視認"),
        description: Text::new(
            "Gives see invisible for a while.",
            "一定時間、透明なものが見えるようになる。",
        ),
        info: info_sense_unseen,
        cast: cast_sense_unseen,
    },
    SpellDescriptor {
        name: Text::new("Protection from Evil", "対邪悪結界"),
        description: Text::new(
            "Gives aura which protects you from evil monster's physical attack.",
            "邪悪なモンスターの攻撃を防ぐバリアを張る。",
        ),
        info: info_protection_from_evil,
        cast: cast_protection_from_evil,
    },
    SpellDescriptor {
        name: Text::new("Judgment Thunder", "裁きの雷"),
        description: Text::new(
            "Fires a powerful bolt of lightning.",
            "強力な電撃のボルトを放つ。",
        ),
        info: info_judgment_thunder,
        cast: cast_judgment_thunder,
    },
    SpellDescriptor {
        name: Text::new("Holy Word", "聖なる御言葉"),
        description: Text::new(
            "Damages all evil monsters in sight, heals HP somewhat and completely cures fear, poisons, cuts and being stunned.",
            "視界内の邪悪な存在に大きなダメージを与え、体力を回復し、毒、恐怖、朦朧状態、負傷から全快する。",
        ),
        info: info_holy_word,
        cast: cast_holy_word,
    },
    SpellDescriptor {
        name: Text::new("Unbarring Ways", "開かれた道"),
        description: Text::new(
            "Fires a beam which destroy traps and doors.",
            "一直線上の全ての罠と扉を破壊する。",
        ),
        info: no_info,
        cast: cast_unbarring_ways,
    },
    SpellDescriptor {
        name: Text::new("Arrest", "封魔"),
        description: Text::new(
            "Attempts to paralyze an evil monster.",
            "邪悪なモンスターの動きを止める。",
        ),
        info: info_arrest,
        cast: cast_arrest,
    },
    SpellDescriptor {
        name: Text::new("Holy Aura", "聖なるオーラ"),
        description: Text::new(
            "Gives a temporary aura of holy power that injures evil monsters which attack you.",
            "一定時間、邪悪なモンスターを傷つける聖なるオーラを得る。",
        ),
        info: info_holy_aura,
        cast: cast_holy_aura,
    },
    SpellDescriptor {
        name: Text::new("Dispel Undead & Demons", "アンデッド&悪魔退散"),
        description: Text::new(
            "Damages all undead and demons in sight.",
            "視界内の全てのアンデッド及び悪魔にダメージを与える。",
        ),
        info: info_dispel,
        cast: cast_dispel_undead_demons,
    },
    SpellDescriptor {
        name: Text::new("Dispel Evil", "邪悪退散"),
        description: Text::new(
            "Damages all evil monsters in sight.",
            "視界内の全ての邪悪なモンスターにダメージを与える。",
        ),
        info: info_dispel,
        cast: cast_dispel_evil,
    },
    SpellDescriptor {
        name: Text::new("Holy Blade", "聖なる刃"),
        description: Text::new(
            "Makes current weapon especially deadly against evil monsters.",
            "通常の武器に滅邪の属性をつける。",
        ),
        info: no_info,
        cast: cast_holy_blade,
    },
    SpellDescriptor {
        name: Text::new("Star Burst", "スターバースト"),
        description: Text::new(
            "Fires a huge ball of powerful light.",
            "巨大な閃光の球を放つ。",
        ),
        info: info_star_burst,
        cast: cast_star_burst,
    },
    SpellDescriptor {
        name: Text::new("Summon Angel", "天使召喚"),
        description: Text::new("Summons an angel.", "天使を1体召喚する。"),
        info: no_info,
        cast: cast_summon_angel,
    },
    SpellDescriptor {
        name: Text::new("Heroism", "士気高揚"),
        description: Text::new(
            "Removes fear. Gives a bonus to hit for a while. Heals you for 10 HP.",
            "一定時間、ヒーロー気分になる。",
        ),
        info: info_heroism,
        cast: cast_heroism,
    },
    SpellDescriptor {
        name: Text::new("Dispel Curse", "呪い退散"),
        description: Text::new(
            "Removes normal and heavy curses from equipped items.",
            "アイテムにかかった強力な呪いを解除する。",
        ),
        info: no_info,
        cast: cast_dispel_curse,
    },
    SpellDescriptor {
        name: Text::new("Banish Evil", "邪悪追放"),
        description: Text::new(
            "Teleports all evil monsters in sight away unless resisted.",
            "視界内の全ての邪悪なモンスターをテレポートさせる。抵抗されると無効。",
        ),
        info: info_banish_evil,
        cast: cast_banish_evil,
    },
    SpellDescriptor {
        name: Text::new("Armageddon", "ハルマゲドン"),
        description: Text::new(
            "Destroys everything in nearby area.",
            "周辺のアイテム、モンスター、地形を破壊する。",
        ),
        info: no_info,
        cast: cast_armageddon,
    },
    SpellDescriptor {
        name: Text::new("An Eye for an Eye", "目には目を"),
        description: Text::new(
            "Gives special aura for a while. When you are attacked by a monster, the monster is injured with same amount of damage as you took.",
            "一定時間、自分がダメージを受けたときに攻撃を行ったモンスターに対して同等のダメージを与える。",
        ),
        info: info_eye_for_eye,
        cast: cast_eye_for_eye,
    },
    SpellDescriptor {
        name: Text::new("Wrath of the God", "神の怒り"),
        description: Text::new(
            "Drops many balls of disintegration near the target.",
            "ターゲットの周囲に分解の球を多数落とす。",
        ),
        info: info_wrath_of_the_god,
        cast: cast_wrath_of_the_god,
    },
    SpellDescriptor {
        name: Text::new("Divine Intervention", "神威"),
        description: Text::new(
            "Damages all adjacent monsters with holy power. Damages and attempt to slow, stun, confuse, scare and freeze all monsters in sight. And heals HP.",
            "隣接するモンスターに聖なるダメージを与え、視界内のモンスターにダメージ、減速、朦朧、混乱、恐怖、眠りを与える。さらに体力を回復する。",
        ),
        info: info_divine_intervention,
        cast: cast_divine_intervention,
    },
    SpellDescriptor {
        name: Text::new("Crusade", "聖戦"),
        description: Text::new(
            "Attempts to charm all good monsters in sight and scares all non-charmed monsters. Summons a great number of knights. Gives heroism, bless, speed and protection from evil to the caster.",
            "視界内の善良なモンスターをペットにしようとし、ならなかった場合及び善良でないモンスターを恐怖させる。さらに多数の加速された騎士を召喚し、ヒーロー、祝福、加速、対邪悪結界を得る。",
        ),
        info: no_info,
        cast: cast_crusade,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MessageLog, ScriptedInput};
    use crate::magic::effect::{AppliedEffect, EffectLog};
    use crate::magic::realm::{Realm, cast_spell, spell_info};
    use crate::options::GameOptions;
    use crate::player::{Direction, PlayerClass};
    use crate::rng::FixedRng;

    struct Harness {
        player: Player,
        rng: FixedRng,
        effects: EffectLog,
        input: ScriptedInput,
        log: MessageLog,
        options: GameOptions,
    }

    impl Harness {
        fn new(class: PlayerClass, level: i32) -> Self {
            Self {
                player: Player::new(class, level),
                rng: FixedRng::Max,
                effects: EffectLog::new(),
                input: ScriptedInput::with_dir(Direction::TARGET),
                log: MessageLog::new(),
                options: GameOptions::default(),
            }
        }

        fn cast(&mut self, index: usize) -> CastOutcome {
            let mut ctx = GameContext::new(
                &mut self.player,
                &mut self.rng,
                &mut self.effects,
                &mut self.input,
                &mut self.log,
                &self.options,
            );
            cast_spell(Realm::Crusade, index, &mut ctx).unwrap()
        }

        fn info(&self, index: usize) -> String {
            spell_info(Realm::Crusade, index, &self.player, Locale::English).unwrap()
        }
    }

    #[test]
    fn test_punishment_info_scales() {
        assert_eq!(Harness::new(PlayerClass::Priest, 1).info(0), "dam 3d4");
        assert_eq!(Harness::new(PlayerClass::Priest, 10).info(0), "dam 4d4");
        assert_eq!(Harness::new(PlayerClass::Priest, 50).info(0), "dam 12d4");
    }

    #[test]
    fn test_punishment_cast_uses_info_dice() {
        let mut h = Harness::new(PlayerClass::Paladin, 10);
        h.rng = FixedRng::Max;
        assert_eq!(h.cast(0), CastOutcome::Completed);
        match &h.effects.applied[0] {
            AppliedEffect::Fire { element, dam, .. } => {
                assert_eq!(*element, Element::Elec);
                assert_eq!(*dam, 16);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_holy_orb_class_bonus() {
        assert_eq!(Harness::new(PlayerClass::Priest, 20).info(9), "dam 3d6+30");
        assert_eq!(Harness::new(PlayerClass::Paladin, 20).info(9), "dam 3d6+25");
        assert_eq!(Harness::new(PlayerClass::Sorcerer, 20).info(9), "dam 3d6+30");
    }

    #[test]
    fn test_holy_orb_radius_threshold() {
        let mut low = Harness::new(PlayerClass::Priest, 29);
        low.cast(9);
        let mut high = Harness::new(PlayerClass::Priest, 30);
        high.cast(9);
        assert!(matches!(
            low.effects.applied[0],
            AppliedEffect::Fire {
                projection: Projection::Ball { radius: 2 },
                ..
            }
        ));
        assert!(matches!(
            high.effects.applied[0],
            AppliedEffect::Fire {
                projection: Projection::Ball { radius: 3 },
                ..
            }
        ));
    }

    #[test]
    fn test_custom_info_strings() {
        let h = Harness::new(PlayerClass::Priest, 20);
        assert_eq!(h.info(15), "dam:d120/h100");
        assert_eq!(h.info(30), "h100/dm80+110");
        assert_eq!(h.info(29), "dam 85 each");
        assert_eq!(h.info(6), "dam 5d2 each");
        assert_eq!(h.info(2), "");
        assert_eq!(h.info(31), "");
        assert_eq!(
            spell_info(Realm::Crusade, 15, &h.player, Locale::Japanese).unwrap(),
            "損:1d120/回100"
        );
    }

    #[test]
    fn test_aimed_spells_cancel_without_target() {
        for index in [0, 3, 6, 8, 9, 14, 16, 17, 22, 29] {
            let mut h = Harness::new(PlayerClass::Priest, 30);
            h.input = ScriptedInput::declining();
            let before = h.player.clone();
            assert_eq!(h.cast(index), CastOutcome::Cancelled, "spell {}", index);
            assert_eq!(h.player, before);
            assert!(h.effects.applied.is_empty());
        }
    }

    #[test]
    fn test_wrath_of_the_god_aborts() {
        let mut h = Harness::new(PlayerClass::Priest, 40);
        h.effects = EffectLog::failing();
        assert_eq!(h.cast(29), CastOutcome::Aborted);
    }

    #[test]
    fn test_banish_evil_message_only_on_success() {
        let mut h = Harness::new(PlayerClass::Priest, 40);
        assert_eq!(h.cast(26), CastOutcome::Completed);
        assert!(h.log.contains("The holy power banishes evil!"));

        let mut resisted = Harness::new(PlayerClass::Priest, 40);
        resisted.effects = EffectLog::failing();
        assert_eq!(resisted.cast(26), CastOutcome::Completed);
        assert!(resisted.log.messages().is_empty());
    }

    #[test]
    fn test_summon_angel_pet_flags() {
        // FixedRng::Max makes one_in(3) false, so the angel is a pet
        let mut h = Harness::new(PlayerClass::Priest, 40);
        h.cast(23);
        match &h.effects.applied[0] {
            AppliedEffect::Summon(req) => {
                assert_eq!(req.kind, SummonKind::Angel);
                assert_eq!(req.level, 60);
                assert_eq!(req.flags, SummonFlags::FORCE_PET);
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(h.log.contains("What is thy bidding"));

        // FixedRng::Min makes one_in(3) true: hostile, groups allowed
        let mut hostile = Harness::new(PlayerClass::Priest, 40);
        hostile.rng = FixedRng::Min;
        hostile.cast(23);
        match &hostile.effects.applied[0] {
            AppliedEffect::Summon(req) => {
                assert_eq!(req.flags, SummonFlags::NO_PET | SummonFlags::ALLOW_GROUP);
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(hostile.log.contains("Repent"));
    }

    #[test]
    fn test_crusade_summons_and_buffs() {
        let mut h = Harness::new(PlayerClass::Priest, 40);
        h.player.timed.fear = 10;
        assert_eq!(h.cast(31), CastOutcome::Completed);
        assert_eq!(h.effects.count_summons(), 12);
        assert_eq!(h.player.timed.hero, 50);
        assert_eq!(h.player.timed.blessed, 50);
        assert_eq!(h.player.timed.protevil, 50);
        assert_eq!(h.player.timed.acceleration, 40 + 60);
        assert_eq!(h.player.timed.fear, 0);
    }

    #[test]
    fn test_crusade_skips_knights_without_floor() {
        let mut h = Harness::new(PlayerClass::Priest, 40);
        h.effects.floor_empty = false;
        h.cast(31);
        assert_eq!(h.effects.count_summons(), 0);
        assert!(h.player.timed.hero > 0);
    }

    #[test]
    fn test_holy_word_heals_and_cures() {
        let mut h = Harness::new(PlayerClass::Priest, 20);
        h.player.chp = 50;
        h.player.timed.poison = 10;
        h.player.timed.cut = 10;
        h.player.stun.set(70);
        h.cast(15);
        assert_eq!(h.player.chp, 150);
        assert_eq!(h.player.timed.poison, 0);
        assert_eq!(h.player.timed.cut, 0);
        assert!(!h.player.stun.is_stunned());
    }

    #[test]
    fn test_divine_intervention_effects() {
        let mut h = Harness::new(PlayerClass::Priest, 20);
        h.cast(30);
        assert_eq!(
            h.effects.applied[0],
            AppliedEffect::ProjectAround {
                center: h.player.position,
                radius: 1,
                element: Element::HolyFire,
                dam: 220,
            }
        );
        // burst plus six sight effects
        assert_eq!(h.effects.applied.len(), 7);
    }

    #[test]
    fn test_menu_numbers_match_cast() {
        let mut h = Harness::new(PlayerClass::Priest, 20);
        let info = spell_info(Realm::Crusade, 30, &h.player, Locale::English).unwrap();
        assert_eq!(info, "h100/dm80+110");
        h.cast(30);
        assert!(h.effects.applied.iter().any(|e| matches!(
            e,
            AppliedEffect::Sight { effect: SightEffect::DispelAll, power: 80 }
        )));

        let info = spell_info(Realm::Crusade, 15, &h.player, Locale::English).unwrap();
        assert_eq!(info, "dam:d120/h100");
        h.effects = EffectLog::new();
        h.cast(15);
        assert!(h.effects.applied.iter().any(|e| matches!(
            e,
            AppliedEffect::Sight { effect: SightEffect::DispelEvil, power: 120 }
        )));
    }

    #[test]
    fn test_armageddon_radius() {
        let mut h = Harness::new(PlayerClass::Priest, 45);
        h.rng = FixedRng::Min;
        h.cast(27);
        assert!(matches!(
            h.effects.applied[0],
            AppliedEffect::DestroyArea { radius: 13, .. }
        ));
    }
}
