//! Map positions and aiming directions

use serde::{Deserialize, Serialize};

/// Position on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub y: i32,
    pub x: i32,
}

impl Position {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

/// Aiming direction in keypad layout; 5 means "at the current target".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const TARGET: Direction = Direction(5);

    /// Build from a keypad digit, rejecting 0 and anything above 9
    pub const fn new(keypad: u8) -> Option<Self> {
        if keypad >= 1 && keypad <= 9 {
            Some(Direction(keypad))
        } else {
            None
        }
    }

    pub const fn keypad(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_bounds() {
        assert!(Direction::new(0).is_none());
        assert!(Direction::new(10).is_none());
        assert_eq!(Direction::new(5), Some(Direction::TARGET));
    }

    #[test]
    fn test_keypad_round_trip() {
        for key in 1..=9 {
            assert_eq!(Direction::new(key).map(|d| d.keypad()), Some(key));
        }
    }
}
