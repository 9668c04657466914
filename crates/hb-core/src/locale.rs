//! Message localization
//!
//! Every player-facing string in the core is a [`Text`] pair. The language is
//! picked once, at the point a message leaves the core, from [`Locale`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Output language
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Locale {
    #[default]
    English,
    Japanese,
}

impl Locale {
    /// Short code used in config files and on the command line
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
        }
    }

    /// Parse a short code or full name, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "ja" | "jp" | "japanese" => Some(Locale::Japanese),
            _ => None,
        }
    }
}

/// A message available in both languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Text {
    pub en: &'static str,
    pub ja: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ja: &'static str) -> Self {
        Self { en, ja }
    }

    /// Pick the string for `locale`
    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.en,
            Locale::Japanese => self.ja,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ja.is_empty()
    }
}

/// The empty message in both languages
pub const EMPTY_TEXT: Text = Text::new("", "");
