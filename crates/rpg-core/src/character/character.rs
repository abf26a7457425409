//! The Character struct
//!
//! A character is built once through [`Character::from_profile`], which
//! either returns a fully valid character or a [`CreationError`]. All state
//! is private; mutation goes through the inventory, combat and leveling
//! operations so that health stays within `[0, max_health]` and the carried
//! weight never exceeds `max_weight`.

use core::fmt;

use super::archetype::{Archetype, ArchetypeProfile};
use super::attributes::{Attribute, Attributes, Effect};
use crate::combat::{self, SpecialMove};
use crate::error::CreationError;
use crate::item::{EdibleItem, EquipableItem, Item};
use crate::options::GameOptions;
use crate::rng::RandomSource;
use crate::{
    DEFAULT_MAX_WEIGHT, HEALTH_PER_EXPERIENCE, MAX_BASE_ATTRIBUTE_SUM, MIN_SPECIAL_MOVES,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    archetype: Archetype,
    pub(super) attributes: Attributes,
    pub(super) max_health: i32,
    pub(super) experience_level: i32,
    pub(super) current_experience: i32,
    pub(super) max_weight: u32,
    pub(super) current_weight: u32,
    pub(super) inventory: Vec<EdibleItem>,
    pub(super) equipped: Vec<EquipableItem>,
    special_moves: Vec<SpecialMove>,
    pub(super) weapon_count: u8,
    pub(super) armor_count: u8,
}

impl Character {
    /// Create a character from its archetype's fixed table
    pub fn new(archetype: Archetype, name: impl Into<String>) -> Result<Self, CreationError> {
        Self::from_profile(name, archetype.profile(), DEFAULT_MAX_WEIGHT)
    }

    /// Create a character whose carrying capacity comes from `options`
    pub fn with_options(
        archetype: Archetype,
        name: impl Into<String>,
        options: &GameOptions,
    ) -> Result<Self, CreationError> {
        Self::from_profile(name, archetype.profile(), options.max_weight)
    }

    /// Run the construction pipeline on an arbitrary profile
    ///
    /// Checks, in order: base attribute total, special move count, and the
    /// archetype constraint on the final attributes.
    pub fn from_profile(
        name: impl Into<String>,
        profile: ArchetypeProfile,
        max_weight: u32,
    ) -> Result<Self, CreationError> {
        let ArchetypeProfile {
            archetype,
            base,
            special_moves,
        } = profile;

        let mut attributes = base;
        attributes.set(Attribute::Health, 0);

        let sum = attributes.combat_total();
        if sum > MAX_BASE_ATTRIBUTE_SUM {
            return Err(CreationError::TooHighAttributes {
                sum,
                limit: MAX_BASE_ATTRIBUTE_SUM,
            });
        }

        if special_moves.len() < MIN_SPECIAL_MOVES {
            return Err(CreationError::TooFewSpecialMoves {
                count: special_moves.len(),
                required: MIN_SPECIAL_MOVES,
            });
        }

        let current_experience = 0;
        let max_health = sum + current_experience * HEALTH_PER_EXPERIENCE;
        attributes.set(Attribute::Health, max_health);

        if !archetype.satisfies_constraints(&attributes) {
            return Err(CreationError::InvalidConstraints {
                archetype,
                strength: attributes.strength(),
                dexterity: attributes.dexterity(),
                defense: attributes.defense(),
            });
        }

        Ok(Self {
            name: name.into(),
            archetype,
            attributes,
            max_health,
            experience_level: 1,
            current_experience,
            max_weight,
            current_weight: 0,
            inventory: Vec::new(),
            equipped: Vec::new(),
            special_moves,
            weapon_count: 0,
            armor_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Base attributes, without equipment bonuses
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, attr: Attribute) -> i32 {
        self.attributes.get(attr)
    }

    pub fn health(&self) -> i32 {
        self.attributes.health()
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn experience_level(&self) -> i32 {
        self.experience_level
    }

    pub fn current_experience(&self) -> i32 {
        self.current_experience
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn current_weight(&self) -> u32 {
        self.current_weight
    }

    /// Edible items carried, in pick-up order
    pub fn inventory(&self) -> &[EdibleItem] {
        &self.inventory
    }

    /// Worn and wielded items, in equip order
    pub fn equipped_items(&self) -> &[EquipableItem] {
        &self.equipped
    }

    pub fn special_moves(&self) -> &[SpecialMove] {
        &self.special_moves
    }

    pub fn weapon_count(&self) -> u8 {
        self.weapon_count
    }

    pub fn armor_count(&self) -> u8 {
        self.armor_count
    }

    pub fn is_dead(&self) -> bool {
        self.health() == 0
    }

    /// Strength plus the bonus of every equipped weapon
    pub fn effective_strength(&self) -> i32 {
        self.equipped
            .iter()
            .filter(|item| item.is_weapon())
            .fold(self.attributes.strength(), |total, item| {
                total.saturating_add(item.value_for(Attribute::Strength))
            })
    }

    /// Defense plus the bonus of every equipped armor
    pub fn effective_defense(&self) -> i32 {
        self.equipped
            .iter()
            .filter(|item| item.is_armor())
            .fold(self.attributes.defense(), |total, item| {
                total.saturating_add(item.value_for(Attribute::Defense))
            })
    }

    /// Attack `defender` once
    ///
    /// The outcome is only visible through the two characters afterwards:
    /// check [`Character::is_dead`] on the defender and
    /// [`Character::can_level_up`] on the attacker.
    pub fn attack<R: RandomSource>(&mut self, defender: &mut Character, rng: &mut R) {
        combat::resolve_attack(self, defender, rng);
    }

    /// Apply `effect` and return the change actually made
    ///
    /// Health is kept within `[0, max_health]`; other attributes are plain
    /// additions.
    pub(crate) fn apply_effect(&mut self, effect: Effect) -> i32 {
        let before = self.attributes.get(effect.attribute);
        if effect.attribute == Attribute::Health {
            let after = before
                .saturating_add(effect.delta)
                .clamp(0, self.max_health.max(0));
            self.attributes.set(Attribute::Health, after);
        } else {
            self.attributes.modify(effect.attribute, effect.delta);
        }
        self.attributes.get(effect.attribute).saturating_sub(before)
    }

    pub(crate) fn take_damage(&mut self, damage: i32) {
        self.apply_effect(Effect::new(Attribute::Health, -damage));
    }

    pub(crate) fn gain_experience(&mut self, amount: i32) {
        self.current_experience = self.current_experience.saturating_add(amount);
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} the {} (HP {}/{}, level {}, xp {}, weight {}/{}, weapons {}, armors {})",
            self.name,
            self.archetype,
            self.health(),
            self.max_health,
            self.experience_level,
            self.current_experience,
            self.current_weight,
            self.max_weight,
            self.weapon_count,
            self.armor_count,
        )
    }
}
