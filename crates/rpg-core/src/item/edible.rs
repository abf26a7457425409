//! Edible items: food, potions and spells

use super::Item;
use crate::character::{Attribute, Effect};
use serde::{Deserialize, Serialize};

/// What consuming an edible item does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdibleKind {
    /// Raises Dexterity
    Food { additional_dexterity: i32 },
    /// Restores Health
    Potion { additional_health: i32 },
    /// Applies several effects at once
    Spell { effects: Vec<Effect> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdibleItem {
    pub name: String,
    pub weight: u32,
    pub kind: EdibleKind,
}

impl EdibleItem {
    pub fn food(name: impl Into<String>, weight: u32, additional_dexterity: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            kind: EdibleKind::Food {
                additional_dexterity,
            },
        }
    }

    pub fn potion(name: impl Into<String>, weight: u32, additional_health: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            kind: EdibleKind::Potion { additional_health },
        }
    }

    pub fn spell(name: impl Into<String>, weight: u32, effects: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            weight,
            kind: EdibleKind::Spell { effects },
        }
    }
}

impl Item for EdibleItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn value_for(&self, attribute: Attribute) -> i32 {
        match &self.kind {
            EdibleKind::Food {
                additional_dexterity,
            } if attribute == Attribute::Dexterity => *additional_dexterity,
            EdibleKind::Potion { additional_health } if attribute == Attribute::Health => {
                *additional_health
            }
            // First matching effect wins
            EdibleKind::Spell { effects } => effects
                .iter()
                .find(|e| e.attribute == attribute)
                .map_or(0, |e| e.delta),
            _ => 0,
        }
    }
}
