//! Notifications from the core to the presentation layer
//!
//! The core does no I/O. A caller that wants to show what happens passes a
//! [`CombatObserver`] to the [`crate::encounter`] functions; every callback
//! has an empty default, so implementors only override what they display.

use crate::character::{Archetype, Attribute, Attributes, Character};
use crate::item::{EdibleItem, EquipableItem};
use serde::{Deserialize, Serialize};

/// Read-only copy of a character's state at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub archetype: Archetype,
    pub attributes: Attributes,
    pub max_health: i32,
    pub experience_level: i32,
    pub current_experience: i32,
    pub current_weight: u32,
}

impl CharacterSnapshot {
    pub fn of(character: &Character) -> Self {
        Self {
            name: character.name().to_string(),
            archetype: character.archetype(),
            attributes: *character.attributes(),
            max_health: character.max_health(),
            experience_level: character.experience_level(),
            current_experience: character.current_experience(),
            current_weight: character.current_weight(),
        }
    }

    pub fn health(&self) -> i32 {
        self.attributes.health()
    }
}

impl Character {
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot::of(self)
    }
}

pub trait CombatObserver {
    fn before_fight(&mut self, _attacker: &CharacterSnapshot, _defender: &CharacterSnapshot) {}

    fn after_fight(&mut self, _attacker: &CharacterSnapshot, _defender: &CharacterSnapshot) {}

    fn character_died(&mut self, _name: &str) {}

    fn item_picked_up(&mut self, _character: &str, _item: &EdibleItem) {}

    fn item_equipped(&mut self, _character: &str, _item: &EquipableItem) {}

    fn level_gained(&mut self, _character: &str, _new_level: i32, _attribute: Attribute) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CombatObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_state() {
        let mut c = Character::new(Archetype::Archer, "Robin").unwrap();
        let snap = c.snapshot();
        c.take_damage(10);

        assert_eq!(snap.name, "Robin");
        assert_eq!(snap.archetype, Archetype::Archer);
        assert_eq!(snap.health(), 70);
        assert_eq!(snap.max_health, 70);
        assert_eq!(snap.experience_level, 1);
        assert_eq!(c.snapshot().health(), 60);
    }

    #[test]
    fn test_snapshot_serializes() {
        let c = Character::new(Archetype::Magician, "Merlin").unwrap();
        let json = serde_json::to_string(&c.snapshot()).unwrap();
        assert!(json.contains("\"Merlin\""));
        assert!(json.contains("\"Magician\""));
    }
}
