//! Timed player conditions other than stun

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::MAX_TIMED_EFFECT;
use crate::locale::Text;

/// A timed condition on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Condition {
    Fear,
    Cut,
    Poison,
    Stun,
    Hero,
    Blessed,
    ProtectionFromEvil,
    SeeInvisible,
    HolyAura,
    EyeForEye,
    Acceleration,
}

impl Condition {
    /// Beneficial conditions keep the longer of the old and new durations
    pub const fn is_buff(&self) -> bool {
        matches!(
            self,
            Condition::Hero
                | Condition::Blessed
                | Condition::ProtectionFromEvil
                | Condition::SeeInvisible
                | Condition::HolyAura
                | Condition::EyeForEye
                | Condition::Acceleration
        )
    }

    /// Message when the condition starts
    pub const fn gain_message(&self) -> Text {
        match self {
            Condition::Fear => Text::new("You are terrified!", "何もかも恐くなってきた！"),
            Condition::Cut => Text::new("You have been cut.", "切り傷を負ってしまった。"),
            Condition::Poison => Text::new("You are poisoned!", "毒に侵されてしまった！"),
            Condition::Stun => Text::new("You have been stunned.", "意識がもうろうとしてきた。"),
            Condition::Hero => Text::new("You feel like a hero!", "ヒーローになった気がする！"),
            Condition::Blessed => Text::new("You feel righteous!", "高潔な気分になった！"),
            Condition::ProtectionFromEvil => Text::new(
                "You feel safe from evil!",
                "邪悪なる存在から守られているような感じがする！",
            ),
            Condition::SeeInvisible => Text::new(
                "Your eyes feel very sensitive!",
                "目が非常に敏感になった気がする！",
            ),
            Condition::HolyAura => Text::new(
                "You feel a holy aura around you!",
                "体が聖なるオーラで覆われた。",
            ),
            Condition::EyeForEye => Text::new(
                "You feel like a keeper of commandments!",
                "法の守り手になった気がした！",
            ),
            Condition::Acceleration => Text::new(
                "You feel yourself moving faster!",
                "素早く動けるようになった！",
            ),
        }
    }

    /// Message when the condition ends
    pub const fn lose_message(&self) -> Text {
        match self {
            Condition::Fear => Text::new("You feel bolder now.", "やっと恐怖を振り払った。"),
            Condition::Cut => Text::new("You are no longer bleeding.", "やっと出血が止まった。"),
            Condition::Poison => {
                Text::new("You are no longer poisoned.", "やっと毒の痛みがなくなった。")
            }
            Condition::Stun => Text::new("You are no longer stunned.", "やっと朦朧状態から回復した。"),
            Condition::Hero => Text::new("The heroism wears off.", "ヒーローの気分が消え失せた。"),
            Condition::Blessed => Text::new("The prayer has expired.", "高潔な気分が消え失せた。"),
            Condition::ProtectionFromEvil => Text::new(
                "You no longer feel safe from evil.",
                "邪悪なる存在から守られている感じがなくなった。",
            ),
            Condition::SeeInvisible => {
                Text::new("Your eyes feel less sensitive.", "目の敏感さがなくなったようだ。")
            }
            Condition::HolyAura => Text::new("The holy aura disappears.", "聖なるオーラが消えた。"),
            Condition::EyeForEye => Text::new(
                "You lost your aura of retaliation.",
                "懲罰を執行することができなくなった。",
            ),
            Condition::Acceleration => {
                Text::new("You feel yourself slow down.", "動きの素早さがなくなったようだ。")
            }
        }
    }
}

/// Remaining turns for each timed condition except stun
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEffects {
    pub fear: u16,
    pub cut: u16,
    pub poison: u16,
    pub hero: u16,
    pub blessed: u16,
    pub protevil: u16,
    pub see_invisible: u16,
    pub holy_aura: u16,
    pub eye_for_eye: u16,
    pub acceleration: u16,
}

impl TimedEffects {
    /// Turns left on `condition`. Stun lives in [`crate::status::PlayerStun`]
    /// and always reads 0 here.
    pub const fn get(&self, condition: Condition) -> i32 {
        let turns = match condition {
            Condition::Fear => self.fear,
            Condition::Cut => self.cut,
            Condition::Poison => self.poison,
            Condition::Stun => 0,
            Condition::Hero => self.hero,
            Condition::Blessed => self.blessed,
            Condition::ProtectionFromEvil => self.protevil,
            Condition::SeeInvisible => self.see_invisible,
            Condition::HolyAura => self.holy_aura,
            Condition::EyeForEye => self.eye_for_eye,
            Condition::Acceleration => self.acceleration,
        };
        turns as i32
    }

    /// Store `turns`, clamped to `0..=MAX_TIMED_EFFECT`. Stun is ignored.
    pub fn put(&mut self, condition: Condition, turns: i32) {
        let turns = turns.clamp(0, MAX_TIMED_EFFECT) as u16;
        let slot = match condition {
            Condition::Fear => &mut self.fear,
            Condition::Cut => &mut self.cut,
            Condition::Poison => &mut self.poison,
            Condition::Stun => return,
            Condition::Hero => &mut self.hero,
            Condition::Blessed => &mut self.blessed,
            Condition::ProtectionFromEvil => &mut self.protevil,
            Condition::SeeInvisible => &mut self.see_invisible,
            Condition::HolyAura => &mut self.holy_aura,
            Condition::EyeForEye => &mut self.eye_for_eye,
            Condition::Acceleration => &mut self.acceleration,
        };
        *slot = turns;
    }
}
