//! Player stun
//!
//! The stun accumulator degrades the player through four ranks. The rank is
//! always recomputed from the raw value and never stored next to it.

use serde::{Deserialize, Serialize};

use crate::STUN_MAX;
use crate::color::TermColor;
use crate::error::InvariantViolation;
use crate::locale::{EMPTY_TEXT, Locale, Text};

/// Stun severity, ordered from harmless to helpless
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StunRank {
    None = 0,
    Normal = 1,
    Hard = 2,
    Unconscious = 3,
}

impl StunRank {
    /// Percent added to every failure roll.
    ///
    /// An unconscious player never gets to act, so 100 only matters to
    /// callers that ask anyway.
    pub const fn decrease_chance(&self) -> i32 {
        match self {
            StunRank::None => 0,
            StunRank::Normal => 15,
            StunRank::Hard => 25,
            StunRank::Unconscious => 100,
        }
    }

    /// Flat penalty subtracted from damage or to-hit by the caller.
    pub const fn decrease_damage(&self) -> i32 {
        match self {
            StunRank::None => 0,
            StunRank::Normal => 5,
            StunRank::Hard => 20,
            StunRank::Unconscious => 100,
        }
    }

    /// Message shown when the player falls into this rank
    pub const fn message(&self) -> Text {
        match self {
            StunRank::None => EMPTY_TEXT,
            StunRank::Normal => Text::new("You have been stunned.", "意識がもうろうとしてきた。"),
            StunRank::Hard => Text::new(
                "You have been heavily stunned.",
                "意識がひどくもうろうとしてきた。",
            ),
            StunRank::Unconscious => Text::new(
                "You have been knocked out.",
                "頭がクラクラして意識が遠のいてきた。",
            ),
        }
    }

    /// Status bar color and fixed-width label
    pub const fn expr(&self) -> (TermColor, Text) {
        match self {
            StunRank::None => (TermColor::White, Text::new("            ", "            ")),
            StunRank::Normal => (TermColor::Orange, Text::new("Stun        ", "朦朧        ")),
            StunRank::Hard => (TermColor::Orange, Text::new("Heavy stun  ", "ひどく朦朧  ")),
            StunRank::Unconscious => {
                (TermColor::Red, Text::new("Knocked out ", "意識不明瞭  "))
            }
        }
    }
}

impl TryFrom<u8> for StunRank {
    type Error = InvariantViolation;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(StunRank::None),
            1 => Ok(StunRank::Normal),
            2 => Ok(StunRank::Hard),
            3 => Ok(StunRank::Unconscious),
            _ => Err(InvariantViolation::StunRank(raw)),
        }
    }
}

/// The stun accumulator, clamped to `0..=STUN_MAX`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredStun")]
pub struct PlayerStun {
    stun: u16,
}

/// Wire shape of [`PlayerStun`]; loaded values go through the clamp.
#[derive(Deserialize)]
struct StoredStun {
    stun: i64,
}

impl From<StoredStun> for PlayerStun {
    fn from(stored: StoredStun) -> Self {
        let mut stun = PlayerStun::default();
        stun.set(stored.stun.clamp(0, STUN_MAX as i64) as i32);
        stun
    }
}

impl PlayerStun {
    pub const fn current(&self) -> i32 {
        self.stun as i32
    }

    pub const fn get_rank(&self) -> StunRank {
        Self::rank_of(self.current())
    }

    pub const fn rank_of(value: i32) -> StunRank {
        if value > 100 {
            return StunRank::Unconscious;
        }

        if value > 50 {
            return StunRank::Hard;
        }

        if value > 0 {
            return StunRank::Normal;
        }

        StunRank::None
    }

    /// Message for entering `rank`; empty for [`StunRank::None`]
    pub const fn rank_message(rank: StunRank, locale: Locale) -> &'static str {
        rank.message().get(locale)
    }

    pub const fn decrease_chance(&self) -> i32 {
        self.get_rank().decrease_chance()
    }

    pub const fn decrease_damage(&self) -> i32 {
        self.get_rank().decrease_damage()
    }

    pub const fn is_stunned(&self) -> bool {
        !matches!(self.get_rank(), StunRank::None)
    }

    pub const fn get_expr(&self, locale: Locale) -> (TermColor, &'static str) {
        let (color, label) = self.get_rank().expr();
        (color, label.get(locale))
    }

    pub fn set(&mut self, value: i32) {
        self.stun = value.clamp(0, STUN_MAX) as u16;
    }

    pub fn reset(&mut self) {
        self.set(0);
    }
}
