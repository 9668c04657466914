//! Setters for the player's timed conditions
//!
//! Every setter stores the new value, prints a message when the condition
//! starts or stops, and reports whether anything the player would notice
//! changed. Status bookkeeping (disturb, bonus update, status redraw) only
//! runs when something did.

use tracing::debug;

use super::{Condition, PlayerStun, StunRank};
use crate::context::GameContext;
use crate::locale::Text;
use crate::magic::EffectMagnitude;
use crate::player::RedrawFlags;

/// Applies condition changes to the player held by a [`GameContext`]
pub struct StatusSetter<'c, 'a> {
    ctx: &'c mut GameContext<'a>,
}

impl<'c, 'a> StatusSetter<'c, 'a> {
    pub fn new(ctx: &'c mut GameContext<'a>) -> Self {
        Self { ctx }
    }

    /// Set `condition` to `turns` (clamped). Buffs never shorten an
    /// already running effect unless `turns` is 0.
    pub fn set(&mut self, condition: Condition, turns: i32) -> bool {
        if condition == Condition::Stun {
            return self.set_stun(turns);
        }

        let old = self.ctx.player.timed.get(condition);
        if condition.is_buff() && old > 0 && turns > 0 && old > turns {
            return false;
        }

        let mut notice = false;
        if turns > 0 && old == 0 {
            self.ctx.msg(condition.gain_message());
            notice = true;
        } else if turns <= 0 && old > 0 {
            self.ctx.msg(condition.lose_message());
            notice = true;
        }

        self.ctx.player.timed.put(condition, turns);
        if notice {
            self.ctx.status_changed();
        }
        notice
    }

    pub fn set_fear(&mut self, turns: i32) -> bool {
        self.set(Condition::Fear, turns)
    }

    pub fn set_cut(&mut self, turns: i32) -> bool {
        self.set(Condition::Cut, turns)
    }

    pub fn set_poison(&mut self, turns: i32) -> bool {
        self.set(Condition::Poison, turns)
    }

    /// Stun changes are reported by rank, not by raw value
    pub fn set_stun(&mut self, value: i32) -> bool {
        let old_rank = self.ctx.player.stun.get_rank();
        let new_rank = PlayerStun::rank_of(value);

        let mut notice = false;
        if new_rank > old_rank {
            self.ctx.msg(new_rank.message());
            notice = true;
        } else if new_rank < old_rank && new_rank == StunRank::None {
            self.ctx.msg(Condition::Stun.lose_message());
            notice = true;
        }

        self.ctx.player.stun.set(value);
        if new_rank != old_rank {
            debug!(?old_rank, ?new_rank, value, "stun rank changed");
            self.ctx.status_changed();
        }
        notice
    }

    pub fn set_hero(&mut self, turns: i32) -> bool {
        self.set(Condition::Hero, turns)
    }

    pub fn set_blessed(&mut self, turns: i32) -> bool {
        self.set(Condition::Blessed, turns)
    }

    pub fn set_protevil(&mut self, turns: i32) -> bool {
        self.set(Condition::ProtectionFromEvil, turns)
    }

    pub fn set_tim_invis(&mut self, turns: i32) -> bool {
        self.set(Condition::SeeInvisible, turns)
    }

    pub fn set_holy_aura(&mut self, turns: i32) -> bool {
        self.set(Condition::HolyAura, turns)
    }

    pub fn set_eye_for_eye(&mut self, turns: i32) -> bool {
        self.set(Condition::EyeForEye, turns)
    }

    pub fn set_acceleration(&mut self, turns: i32) -> bool {
        self.set(Condition::Acceleration, turns)
    }

    /// Restore up to `num` hit points. Returns false at full health.
    pub fn hp_player(&mut self, num: i32) -> bool {
        let player = &mut *self.ctx.player;
        if num <= 0 || !player.is_hurt() {
            return false;
        }

        player.chp = (player.chp + num).min(player.mhp);
        player.redraw |= RedrawFlags::HP;

        let text = if num < 5 {
            Text::new("You feel a little better.", "少し気分が良くなった。")
        } else if num < 15 {
            Text::new("You feel better.", "気分が良くなった。")
        } else if num < 35 {
            Text::new("You feel much better.", "とても気分が良くなった。")
        } else {
            Text::new("You feel very good.", "ひじょうに気分が良くなった。")
        };
        self.ctx.msg(text);
        true
    }

    /// Hero for `base`+1d`base` turns, heal 10, remove fear
    pub fn heroism(&mut self, base: i32) -> bool {
        let turns = EffectMagnitude::duration(base, base).roll(self.ctx.rng);
        let mut ident = self.set_hero(turns);
        if self.set_fear(0) {
            ident = true;
        }
        if self.hp_player(10) {
            ident = true;
        }
        ident
    }
}
