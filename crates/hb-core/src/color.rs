//! Terminal color tags
//!
//! The core only picks a tag; mapping it to real terminal attributes is the
//! display layer's job.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Color tags understood by the status bar and menus
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TermColor {
    Dark = 0,
    #[default]
    White = 1,
    Slate = 2,
    Orange = 3,
    Red = 4,
    Green = 5,
    Blue = 6,
    Umber = 7,
    LightDark = 8,
    LightWhite = 9,
    Violet = 10,
    Yellow = 11,
    LightRed = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightUmber = 15,
}

impl TermColor {
    /// ANSI escape for the tag, used by the console front end.
    pub const fn ansi(&self) -> &'static str {
        match self {
            TermColor::Dark => "\x1b[30m",
            TermColor::White => "\x1b[97m",
            TermColor::Slate => "\x1b[37m",
            TermColor::Orange => "\x1b[38;5;208m",
            TermColor::Red => "\x1b[31m",
            TermColor::Green => "\x1b[32m",
            TermColor::Blue => "\x1b[34m",
            TermColor::Umber => "\x1b[33m",
            TermColor::LightDark => "\x1b[90m",
            TermColor::LightWhite => "\x1b[37;1m",
            TermColor::Violet => "\x1b[35m",
            TermColor::Yellow => "\x1b[93m",
            TermColor::LightRed => "\x1b[91m",
            TermColor::LightGreen => "\x1b[92m",
            TermColor::LightBlue => "\x1b[94m",
            TermColor::LightUmber => "\x1b[38;5;180m",
        }
    }
}
