//! Inventory and equipment management
//!
//! Every operation validates first and mutates second, so a rejected call
//! leaves inventory, equipment, weight and slot counters exactly as they
//! were.

use super::attributes::{Attribute, Effect};
use super::character::Character;
use crate::error::InventoryError;
use crate::item::{EdibleItem, EquipSlot, EquipableItem, Item};
use crate::{MAX_ARMORS, MAX_WEAPONS};

impl Character {
    /// Weight still available before hitting `max_weight`
    pub fn remaining_capacity(&self) -> u32 {
        self.max_weight.saturating_sub(self.current_weight)
    }

    fn check_weight(&self, item: &dyn Item) -> Result<(), InventoryError> {
        let total = self.current_weight.checked_add(item.weight());
        if total.is_none_or(|total| total > self.max_weight) {
            tracing::warn!(
                character = %self.name(),
                item = item.name(),
                current = self.current_weight,
                max = self.max_weight,
                "item rejected, too heavy"
            );
            return Err(InventoryError::TooHeavy {
                current: self.current_weight,
                item: item.weight(),
                max: self.max_weight,
            });
        }
        Ok(())
    }

    /// Put an edible item in the inventory
    pub fn pick_up(&mut self, item: EdibleItem) -> Result<(), InventoryError> {
        self.check_weight(&item)?;

        tracing::debug!(character = %self.name(), item = %item.name, weight = item.weight, "picked up");
        self.current_weight += item.weight;
        self.inventory.push(item);
        Ok(())
    }

    /// Eat, drink or cast the inventory item at `index`
    ///
    /// The item's contribution is added to every attribute. Health stays
    /// within `[0, max_health]`.
    pub fn consume_item(&mut self, index: usize) -> Result<EdibleItem, InventoryError> {
        let item = self.take_from_inventory(index)?;

        for attribute in Attribute::ALL {
            let delta = item.value_for(attribute);
            if delta != 0 {
                self.apply_effect(Effect::new(attribute, delta));
            }
        }

        tracing::debug!(character = %self.name(), item = %item.name, "consumed");
        Ok(item)
    }

    /// Throw away the inventory item at `index` without using it
    pub fn drop_item(&mut self, index: usize) -> Result<EdibleItem, InventoryError> {
        let item = self.take_from_inventory(index)?;
        tracing::debug!(character = %self.name(), item = %item.name, "dropped");
        Ok(item)
    }

    fn take_from_inventory(&mut self, index: usize) -> Result<EdibleItem, InventoryError> {
        if index >= self.inventory.len() {
            return Err(InventoryError::NoSuchItem {
                index,
                len: self.inventory.len(),
            });
        }
        let item = self.inventory.remove(index);
        self.current_weight -= item.weight;
        Ok(item)
    }

    /// Wear armor or wield a weapon
    ///
    /// Checks weight first, then the slot limit for the item's type.
    pub fn equip_with(&mut self, item: EquipableItem) -> Result<(), InventoryError> {
        self.check_weight(&item)?;

        match item.slot() {
            EquipSlot::Armor if self.armor_count >= MAX_ARMORS => {
                tracing::warn!(character = %self.name(), item = %item.name, "no armor slot left");
                return Err(InventoryError::TooManyArmors { max: MAX_ARMORS });
            }
            EquipSlot::Weapon if self.weapon_count >= MAX_WEAPONS => {
                tracing::warn!(character = %self.name(), item = %item.name, "no weapon slot left");
                return Err(InventoryError::TooManyWeapons { max: MAX_WEAPONS });
            }
            EquipSlot::Armor => self.armor_count += 1,
            EquipSlot::Weapon => self.weapon_count += 1,
        }

        tracing::debug!(character = %self.name(), item = %item.name, slot = %item.slot(), "equipped");
        self.current_weight += item.weight;
        self.equipped.push(item);
        Ok(())
    }

    /// Take off the equipped item at `index`
    pub fn unequip_with(&mut self, index: usize) -> Result<EquipableItem, InventoryError> {
        if index >= self.equipped.len() {
            return Err(InventoryError::NoSuchItem {
                index,
                len: self.equipped.len(),
            });
        }

        let item = self.equipped.remove(index);
        match item.slot() {
            EquipSlot::Armor => self.armor_count -= 1,
            EquipSlot::Weapon => self.weapon_count -= 1,
        }
        self.current_weight -= item.weight;

        tracing::debug!(character = %self.name(), item = %item.name, "unequipped");
        Ok(item)
    }

    /// Position of the first inventory item called `name`
    pub fn find_in_inventory(&self, name: &str) -> Option<usize> {
        self.inventory.iter().position(|item| item.name == name)
    }

    /// Position of the first equipped item called `name`
    pub fn find_equipped(&self, name: &str) -> Option<usize> {
        self.equipped.iter().position(|item| item.name == name)
    }
}
