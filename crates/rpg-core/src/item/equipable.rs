//! Equipable items: weapons and armor

use super::Item;
use crate::character::Attribute;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Equipment slot an item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipableKind {
    Weapon { additional_strength: i32 },
    Armor { additional_defense: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipableItem {
    pub name: String,
    pub weight: u32,
    pub kind: EquipableKind,
}

impl EquipableItem {
    pub fn weapon(name: impl Into<String>, weight: u32, additional_strength: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            kind: EquipableKind::Weapon {
                additional_strength,
            },
        }
    }

    pub fn armor(name: impl Into<String>, weight: u32, additional_defense: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            kind: EquipableKind::Armor { additional_defense },
        }
    }

    pub const fn slot(&self) -> EquipSlot {
        match self.kind {
            EquipableKind::Weapon { .. } => EquipSlot::Weapon,
            EquipableKind::Armor { .. } => EquipSlot::Armor,
        }
    }

    pub const fn is_weapon(&self) -> bool {
        matches!(self.kind, EquipableKind::Weapon { .. })
    }

    pub const fn is_armor(&self) -> bool {
        matches!(self.kind, EquipableKind::Armor { .. })
    }
}

impl Item for EquipableItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn value_for(&self, attribute: Attribute) -> i32 {
        match (self.kind, attribute) {
            (
                EquipableKind::Weapon {
                    additional_strength,
                },
                Attribute::Strength,
            ) => additional_strength,
            (EquipableKind::Armor { additional_defense }, Attribute::Defense) => {
                additional_defense
            }
            _ => 0,
        }
    }
}
