//! Game options and configuration
//!
//! Options are read from an rc-style file:
//!
//! ```text
//! # comment
//! OPTIONS=locale:ja,!disturb_state,color
//! ```
//!
//! Nothing in the core reads a global; functions that depend on an option get
//! it through [`crate::GameContext::options`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::OptionsError;
use crate::locale::Locale;

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Language of every emitted message
    pub locale: Locale,
    /// Interrupt repeated actions when a status changes
    pub disturb_state: bool,
    /// Colored status output in the console front end
    pub color: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            disturb_state: true,
            color: true,
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        let (negated, name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };
        self.set_bool_option(name, !negated)
    }

    /// Set a boolean option
    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "disturb_state" => self.disturb_state = value,
            "color" => self.color = value,
            "locale" => return self.set_option(name, None),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value.ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;

        match name {
            "locale" | "language" => {
                self.locale = Locale::from_code(value).ok_or_else(|| {
                    OptionsError::InvalidValue(name.to_string(), value.to_string())
                })?;
            }
            "disturb_state" | "color" => {
                let flag = match value.to_ascii_lowercase().as_str() {
                    "yes" | "true" | "on" | "1" => true,
                    "no" | "false" | "off" | "0" => false,
                    _ => {
                        return Err(OptionsError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        let contents = self.to_config_string();
        std::fs::write(path, contents).map_err(|e| OptionsError::IoError(e.to_string()))
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                name.to_string()
            } else {
                format!("!{}", name)
            }
        };

        let mut lines = Vec::new();
        lines.push("# hengband configuration file".to_string());
        lines.push(format!("OPTIONS=locale:{}", self.locale.code()));
        lines.push(format!(
            "OPTIONS={},{}",
            flag(self.disturb_state, "disturb_state"),
            flag(self.color, "color")
        ));
        lines.join("\n") + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GameOptions::default();
        assert_eq!(opts.locale, Locale::English);
        assert!(opts.disturb_state);
        assert!(opts.color);
    }

    #[test]
    fn test_parse_bool_option() {
        let opts = GameOptions::parse_config("OPTIONS=!disturb_state,color").unwrap();
        assert!(!opts.disturb_state);
        assert!(opts.color);
    }

    #[test]
    fn test_parse_value_option() {
        let opts = GameOptions::parse_config("OPTIONS=locale:ja").unwrap();
        assert_eq!(opts.locale, Locale::Japanese);

        let opts = GameOptions::parse_config("OPTIONS=disturb_state=off").unwrap();
        assert!(!opts.disturb_state);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let config = "# header\n\n   \nOPTIONS=locale:en\n";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.locale, Locale::English);
    }

    #[test]
    fn test_unknown_option() {
        let err = GameOptions::parse_config("OPTIONS=autopickup").unwrap_err();
        assert_eq!(err, OptionsError::UnknownOption("autopickup".to_string()));
    }

    #[test]
    fn test_invalid_locale() {
        let err = GameOptions::parse_config("OPTIONS=locale:fr").unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue(_, _)));
    }

    #[test]
    fn test_locale_needs_value() {
        let err = GameOptions::parse_config("OPTIONS=locale").unwrap_err();
        assert_eq!(err, OptionsError::MissingValue("locale".to_string()));
    }

    #[test]
    fn test_roundtrip() {
        let opts = GameOptions {
            locale: Locale::Japanese,
            disturb_state: false,
            color: false,
        };

        let parsed = GameOptions::parse_config(&opts.to_config_string()).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_file() {
        let err = GameOptions::load_from_file(Path::new("/nonexistent/hengbandrc")).unwrap_err();
        assert!(matches!(err, OptionsError::IoError(_)));
    }
}
