//! Error types
//!
//! Cancelled input and resisted effects are ordinary outcomes and never show
//! up here. These are the conditions a caller has to handle or report.

use thiserror::Error;

use crate::magic::Realm;

/// Lookup failures in the spell tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    #[error("realm {realm} has no spell #{index} (it has {count})")]
    UnknownSpell {
        realm: Realm,
        index: usize,
        count: usize,
    },

    #[error("unknown realm '{0}'")]
    UnknownRealm(String),
}

/// A raw value that can only come from corrupted state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("invalid stun rank {0}")]
    StunRank(u8),

    #[error("invalid element kind {0}")]
    ElementKind(u8),
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_spell_display() {
        let err = SpellError::UnknownSpell {
            realm: Realm::Crusade,
            index: 40,
            count: 32,
        };
        let text = err.to_string();
        assert!(text.contains("#40"));
        assert!(text.contains("32"));
    }

    #[test]
    fn test_options_error_display() {
        let err = OptionsError::InvalidValue("locale".to_string(), "fr".to_string());
        assert_eq!(err.to_string(), "Invalid value 'fr' for option 'locale'");
    }

    #[test]
    fn test_invariant_display() {
        assert_eq!(
            InvariantViolation::StunRank(9).to_string(),
            "invalid stun rank 9"
        );
    }
}
