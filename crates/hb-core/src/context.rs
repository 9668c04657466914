//! Collaborators a spell reaches through while it runs
//!
//! Spells only ever see a [`GameContext`]. Map effects, aiming, menus and
//! message output are all behind traits so the spell code can be driven by a
//! real game, the console front end, or a scripted test.

use std::collections::VecDeque;

use crate::color::TermColor;
use crate::locale::{Locale, Text};
use crate::magic::effect::{
    AimedEffect, DetectTarget, Element, Projection, SightEffect, SummonRequest, WeaponBrand,
};
use crate::options::GameOptions;
use crate::player::{Direction, Player, Position, RedrawFlags, UpdateFlags};
use crate::rng::DiceRng;

/// Effects on the dungeon and its monsters
///
/// Every method reports whether anything noticeable happened. A `false`
/// from an effect that can be resisted is not an error.
pub trait EffectApplication {
    /// Bolt, beam or ball toward `dir`
    fn fire(&mut self, projection: Projection, element: Element, dir: Direction, dam: i32) -> bool;

    /// `bolts` bolts of `count`d`sides` scattered around the aim point
    fn fire_blast(
        &mut self,
        element: Element,
        dir: Direction,
        count: i32,
        sides: i32,
        bolts: i32,
        spread: i32,
    ) -> bool;

    /// Explosion centred on a grid rather than aimed
    fn project_around(&mut self, center: Position, radius: i32, element: Element, dam: i32) -> bool;

    fn affect_monsters_in_sight(&mut self, effect: SightEffect, power: i32) -> bool;

    fn aim_effect(&mut self, effect: AimedEffect, dir: Direction, power: i32) -> bool;

    fn sleep_adjacent(&mut self, power: i32) -> bool;

    fn detect(&mut self, target: DetectTarget, radius: i32) -> bool;

    fn teleport_player(&mut self, range: i32) -> bool;

    fn summon(&mut self, request: &SummonRequest) -> bool;

    /// A random grid within `distance` of `center`
    fn scatter(&mut self, center: Position, distance: i32) -> Position;

    /// Open floor with no monster on it
    fn is_empty_floor(&self, pos: Position) -> bool;

    fn remove_curse(&mut self, heavy: bool) -> bool;

    fn brand_weapon(&mut self, brand: WeaponBrand) -> bool;

    fn destroy_area(&mut self, center: Position, radius: i32) -> bool;

    /// Several disintegration balls around the target. `false` means the
    /// spell could not be completed.
    fn wrath_of_the_god(&mut self, dir: Direction, dam: i32, radius: i32) -> bool;

    /// Try to charm every good monster in sight and scare the rest
    fn charm_good_monsters(&mut self, power: i32) -> bool;
}

/// One line of a selection menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: char,
    pub label: String,
    pub color: TermColor,
}

impl MenuEntry {
    pub fn new(key: char, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            color: TermColor::White,
        }
    }
}

/// Questions the player has to answer
pub trait TargetInput {
    /// `None` when the player declines to aim
    fn get_aim_dir(&mut self) -> Option<Direction>;

    /// Pick one key out of `entries`. `None` on escape. A key not in
    /// `entries` is treated as a cancel by the caller.
    fn choose(&mut self, prompt: &str, entries: &[MenuEntry]) -> Option<char>;
}

/// Sink for player-facing messages
pub trait Notifier {
    fn msg(&mut self, text: &str);
}

/// Collects messages in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Notifier for MessageLog {
    fn msg(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// Input answered from pre-loaded queues; an empty queue means cancel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInput {
    pub dirs: VecDeque<Direction>,
    pub choices: VecDeque<char>,
    /// Every prompt passed to [`TargetInput::choose`], with its entries
    pub prompts: Vec<(String, Vec<MenuEntry>)>,
}

impl ScriptedInput {
    /// Input that declines every question
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn with_dir(dir: Direction) -> Self {
        let mut input = Self::default();
        input.dirs.push_back(dir);
        input
    }

    pub fn with_choice(key: char) -> Self {
        let mut input = Self::default();
        input.choices.push_back(key);
        input
    }
}

impl TargetInput for ScriptedInput {
    fn get_aim_dir(&mut self) -> Option<Direction> {
        self.dirs.pop_front()
    }

    fn choose(&mut self, prompt: &str, entries: &[MenuEntry]) -> Option<char> {
        self.prompts.push((prompt.to_string(), entries.to_vec()));
        self.choices.pop_front()
    }
}

/// Everything a spell or status setter may touch
pub struct GameContext<'a> {
    pub player: &'a mut Player,
    pub rng: &'a mut dyn DiceRng,
    pub effects: &'a mut dyn EffectApplication,
    pub input: &'a mut dyn TargetInput,
    pub notifier: &'a mut dyn Notifier,
    pub options: &'a GameOptions,
}

impl<'a> GameContext<'a> {
    pub fn new(
        player: &'a mut Player,
        rng: &'a mut dyn DiceRng,
        effects: &'a mut dyn EffectApplication,
        input: &'a mut dyn TargetInput,
        notifier: &'a mut dyn Notifier,
        options: &'a GameOptions,
    ) -> Self {
        Self {
            player,
            rng,
            effects,
            input,
            notifier,
            options,
        }
    }

    pub fn locale(&self) -> Locale {
        self.options.locale
    }

    /// Emit `text` in the configured language
    pub fn msg(&mut self, text: Text) {
        let line = text.get(self.locale());
        self.notifier.msg(line);
    }

    pub fn get_aim_dir(&mut self) -> Option<Direction> {
        self.input.get_aim_dir()
    }

    /// Bookkeeping after a visible status change: disturb (if the player
    /// asked for it), recompute bonuses, redraw the status bar.
    pub fn status_changed(&mut self) {
        if self.options.disturb_state {
            self.player.disturb();
        }
        self.player.update |= UpdateFlags::BONUS;
        self.player.redraw |= RedrawFlags::STATUS;
    }
}
