//! Error types for character creation, inventory handling and options loading
//!
//! Creation errors point at inconsistent archetype data and are meant to abort
//! start-up. Inventory errors are ordinary outcomes of a player's action: the
//! rejected operation leaves the character untouched.

use crate::character::Archetype;
use thiserror::Error;

/// Failures of the character construction pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    #[error("Base attribute total is {sum}, higher than the allowed {limit}")]
    TooHighAttributes { sum: i32, limit: i32 },

    #[error("Only {count} special moves defined, {required} are required")]
    TooFewSpecialMoves { count: usize, required: usize },

    #[error(
        "{archetype} constraints violated by strength {strength}, dexterity {dexterity}, defense {defense}"
    )]
    InvalidConstraints {
        archetype: Archetype,
        strength: i32,
        dexterity: i32,
        defense: i32,
    },
}

/// Rejected inventory or equipment operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Carrying {current} of {max}, an item weighing {item} would be too heavy")]
    TooHeavy { current: u32, item: u32, max: u32 },

    #[error("Cannot wear more than {max} armors")]
    TooManyArmors { max: u8 },

    #[error("Cannot wield more than {max} weapons")]
    TooManyWeapons { max: u8 },

    #[error("No item at position {index} (holding {len})")]
    NoSuchItem { index: usize, len: usize },
}

/// Failures while loading [`crate::options::GameOptions`]
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Could not read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_error_display() {
        let err = CreationError::TooHighAttributes { sum: 90, limit: 70 };
        assert!(err.to_string().contains("90"));
        assert!(err.to_string().contains("70"));

        let err = CreationError::InvalidConstraints {
            archetype: Archetype::Warrior,
            strength: 20,
            dexterity: 40,
            defense: 30,
        };
        assert!(err.to_string().starts_with("Warrior"));
    }

    #[test]
    fn test_inventory_error_display() {
        let err = InventoryError::TooHeavy {
            current: 70,
            item: 10,
            max: 75,
        };
        assert!(err.to_string().contains("too heavy"));
        assert_eq!(
            InventoryError::TooManyArmors { max: 2 }.to_string(),
            "Cannot wear more than 2 armors"
        );
    }
}
