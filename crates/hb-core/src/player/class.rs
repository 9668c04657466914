//! Player classes
//!
//! Spells that scale differently for dedicated casters test class membership
//! at the moment they are described or cast. Nothing about the class is cached.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::locale::Text;

/// Player class
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum PlayerClass {
    #[default]
    Warrior,
    Mage,
    Priest,
    Rogue,
    Ranger,
    Paladin,
    WarriorMage,
    ChaosWarrior,
    Monk,
    Mindcrafter,
    HighMage,
    Tourist,
    Imitator,
    BeastMaster,
    Sorcerer,
    Archer,
    MagicEater,
    Bard,
    RedMage,
    Samurai,
    ForceTrainer,
    BlueMage,
    Cavalry,
    Berserker,
    Smith,
    MirrorMaster,
    Ninja,
    Sniper,
    Elementalist,
}

impl PlayerClass {
    pub const fn title(&self) -> Text {
        match self {
            PlayerClass::Warrior => Text::new("Warrior", "戦士"),
            PlayerClass::Mage => Text::new("Mage", "メイジ"),
            PlayerClass::Priest => Text::new("Priest", "プリースト"),
            PlayerClass::Rogue => Text::new("Rogue", "盗賊"),
            PlayerClass::Ranger => Text::new("Ranger", "レンジャー"),
            PlayerClass::Paladin => Text::new("Paladin", "パラディン"),
            PlayerClass::WarriorMage => Text::new("Warrior-Mage", "魔法戦士"),
            PlayerClass::ChaosWarrior => Text::new("Chaos-Warrior", "混沌の戦士"),
            PlayerClass::Monk => Text::new("Monk", "修行僧"),
            PlayerClass::Mindcrafter => Text::new("Mindcrafter", "超能力者"),
            PlayerClass::HighMage => Text::new("High-Mage", "ハイ=メイジ"),
            PlayerClass::Tourist => Text::new("Tourist", "観光客"),
            PlayerClass::Imitator => Text::new("Imitator", "ものまね師"),
            PlayerClass::BeastMaster => Text::new("Beastmaster", "魔獣使い"),
            PlayerClass::Sorcerer => Text::new("Sorcerer", "スペルマスター"),
            PlayerClass::Archer => Text::new("Archer", "アーチャー"),
            PlayerClass::MagicEater => Text::new("Magic-Eater", "魔道具術師"),
            PlayerClass::Bard => Text::new("Bard", "吟遊詩人"),
            PlayerClass::RedMage => Text::new("Red-Mage", "赤魔道師"),
            PlayerClass::Samurai => Text::new("Samurai", "剣術家"),
            PlayerClass::ForceTrainer => Text::new("ForceTrainer", "練気術師"),
            PlayerClass::BlueMage => Text::new("Blue-Mage", "青魔道師"),
            PlayerClass::Cavalry => Text::new("Cavalry", "騎兵"),
            PlayerClass::Berserker => Text::new("Berserker", "狂戦士"),
            PlayerClass::Smith => Text::new("Weaponsmith", "鍛冶師"),
            PlayerClass::MirrorMaster => Text::new("Mirror-Master", "鏡使い"),
            PlayerClass::Ninja => Text::new("Ninja", "忍者"),
            PlayerClass::Sniper => Text::new("Sniper", "スナイパー"),
            PlayerClass::Elementalist => Text::new("Elementalist", "元素使い"),
        }
    }

    /// Classes that get the larger holy orb bonus
    pub const fn is_devout_caster(&self) -> bool {
        matches!(
            self,
            PlayerClass::Priest | PlayerClass::HighMage | PlayerClass::Sorcerer
        )
    }

    /// Parse a class from its English title or variant name, ignoring case
    /// and punctuation ("high-mage", "HighMage", "high mage").
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        PlayerClass::iter().find(|class| {
            normalize(class.title().en) == wanted || normalize(&class.to_string()) == wanted
        })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(PlayerClass::from_name("priest"), Some(PlayerClass::Priest));
        assert_eq!(
            PlayerClass::from_name("High-Mage"),
            Some(PlayerClass::HighMage)
        );
        assert_eq!(
            PlayerClass::from_name("highmage"),
            Some(PlayerClass::HighMage)
        );
        assert_eq!(PlayerClass::from_name("Weaponsmith"), Some(PlayerClass::Smith));
        assert_eq!(PlayerClass::from_name("bogus"), None);
    }

    #[test]
    fn test_devout_casters() {
        let devout: Vec<_> = PlayerClass::iter()
            .filter(|c| c.is_devout_caster())
            .collect();
        assert_eq!(
            devout,
            vec![
                PlayerClass::Priest,
                PlayerClass::HighMage,
                PlayerClass::Sorcerer
            ]
        );
    }
}
