//! Character attributes (Strength, Dexterity, Defense, Health)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Attribute type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Attribute {
    Strength = 0,
    Dexterity = 1,
    Defense = 2,
    Health = 3,
}

impl Attribute {
    /// Short name for display
    pub const fn short_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Defense => "Def",
            Attribute::Health => "HP",
        }
    }

    /// Create from index (0-3)
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Attribute::Strength),
            1 => Some(Attribute::Dexterity),
            2 => Some(Attribute::Defense),
            3 => Some(Attribute::Health),
            _ => None,
        }
    }

    /// Get index (0-3)
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All attributes in order
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Defense,
        Attribute::Health,
    ];

    /// Attributes a level-up may raise
    pub const UPGRADABLE: [Attribute; 3] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Defense,
    ];
}

/// A signed change to one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub attribute: Attribute,
    pub delta: i32,
}

impl Effect {
    pub const fn new(attribute: Attribute, delta: i32) -> Self {
        Self { attribute, delta }
    }

    /// The same change with the opposite sign
    pub const fn reversed(&self) -> Self {
        Self {
            attribute: self.attribute,
            delta: self.delta.saturating_neg(),
        }
    }
}

/// Attribute values of one character
///
/// Stores raw values only. Health bounds are the character's business since
/// they depend on its max health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    values: [i32; 4],
}

impl Attributes {
    /// Create new attributes with given values, in [`Attribute::ALL`] order
    pub const fn new(values: [i32; 4]) -> Self {
        Self { values }
    }

    /// Combat attributes with zero health
    pub const fn from_base(strength: i32, dexterity: i32, defense: i32) -> Self {
        Self {
            values: [strength, dexterity, defense, 0],
        }
    }

    /// Get an attribute value
    pub const fn get(&self, attr: Attribute) -> i32 {
        self.values[attr as usize]
    }

    /// Set an attribute value
    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.values[attr as usize] = value;
    }

    /// Modify an attribute by delta
    pub fn modify(&mut self, attr: Attribute, delta: i32) {
        let idx = attr as usize;
        self.values[idx] = self.values[idx].saturating_add(delta);
    }

    /// Strength + Dexterity + Defense
    pub fn combat_total(&self) -> i32 {
        Attribute::UPGRADABLE
            .iter()
            .fold(0i32, |total, &a| total.saturating_add(self.get(a)))
    }

    pub const fn strength(&self) -> i32 {
        self.get(Attribute::Strength)
    }

    pub const fn dexterity(&self) -> i32 {
        self.get(Attribute::Dexterity)
    }

    pub const fn defense(&self) -> i32 {
        self.get(Attribute::Defense)
    }

    pub const fn health(&self) -> i32 {
        self.get(Attribute::Health)
    }
}
