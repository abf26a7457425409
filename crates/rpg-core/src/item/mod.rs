//! Item model
//!
//! Items are immutable values. Edible items are carried in the inventory and
//! consumed once; equipable items are worn and contribute while equipped.

mod edible;
mod equipable;

use crate::character::Attribute;
use serde::{Deserialize, Serialize};

pub use edible::{EdibleItem, EdibleKind};
pub use equipable::{EquipSlot, EquipableItem, EquipableKind};

/// Capabilities shared by every item
pub trait Item {
    fn name(&self) -> &str;

    fn weight(&self) -> u32;

    /// Contribution of this item to `attribute`, 0 if it has none
    fn value_for(&self, attribute: Attribute) -> i32;
}

/// Any item a scenario can hand out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loot {
    Edible(EdibleItem),
    Equipable(EquipableItem),
}

impl Loot {
    pub fn as_item(&self) -> &dyn Item {
        match self {
            Loot::Edible(item) => item as &dyn Item,
            Loot::Equipable(item) => item as &dyn Item,
        }
    }
}

impl From<EdibleItem> for Loot {
    fn from(item: EdibleItem) -> Self {
        Loot::Edible(item)
    }
}

impl From<EquipableItem> for Loot {
    fn from(item: EquipableItem) -> Self {
        Loot::Equipable(item)
    }
}
