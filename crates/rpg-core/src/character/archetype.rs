//! Character archetypes
//!
//! Each archetype is a fixed configuration: a base attribute table, a list of
//! special moves and a relational constraint between Strength, Dexterity and
//! Defense. Construction in [`super::Character::from_profile`] only consumes
//! this data.

use super::attributes::{Attribute, Attributes, Effect};
use crate::combat::SpecialMove;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Gap the dominant attribute must keep over the secondary one
const DOMINANCE_GAP: i32 = 10;

/// Character role
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Archetype {
    #[default]
    Warrior,
    Archer,
    Magician,
    Athlete,
}

impl Archetype {
    /// Base Strength, Dexterity and Defense
    pub const fn base_attributes(&self) -> Attributes {
        match self {
            Archetype::Warrior => Attributes::from_base(40, 20, 10),
            Archetype::Archer => Attributes::from_base(45, 20, 5),
            Archetype::Magician => Attributes::from_base(20, 35, 15),
            Archetype::Athlete => Attributes::from_base(15, 45, 10),
        }
    }

    /// Initial special moves
    pub fn special_moves(&self) -> Vec<SpecialMove> {
        match self {
            Archetype::Warrior => vec![
                SpecialMove::parry(0.25),
                SpecialMove::heal(0.08, Effect::new(Attribute::Health, 75)),
                SpecialMove::heal(0.005, Effect::new(Attribute::Health, 160)),
            ],
            Archetype::Archer => vec![
                SpecialMove::heal(0.1, Effect::new(Attribute::Health, 25)),
                SpecialMove::parry(0.05),
            ],
            Archetype::Magician => vec![
                SpecialMove::parry(0.025),
                SpecialMove::heal(0.1, Effect::new(Attribute::Health, 40)),
            ],
            Archetype::Athlete => vec![SpecialMove::run_away(0.05), SpecialMove::parry(0.005)],
        }
    }

    /// Check the role's dominant/secondary/tertiary ordering
    ///
    /// - Warrior, Archer: `Str >= Dex + 10 >= Def`
    /// - Athlete: `Dex >= Def + 10 >= Str`
    /// - Magician: `Dex >= Str + 10 >= Def`
    pub fn satisfies_constraints(&self, attrs: &Attributes) -> bool {
        let (dominant, secondary, tertiary) = match self {
            Archetype::Warrior | Archetype::Archer => {
                (attrs.strength(), attrs.dexterity(), attrs.defense())
            }
            Archetype::Athlete => (attrs.dexterity(), attrs.defense(), attrs.strength()),
            Archetype::Magician => (attrs.dexterity(), attrs.strength(), attrs.defense()),
        };
        dominant >= secondary + DOMINANCE_GAP && secondary + DOMINANCE_GAP >= tertiary
    }

    /// The fixed configuration of this archetype
    pub fn profile(&self) -> ArchetypeProfile {
        ArchetypeProfile {
            archetype: *self,
            base: self.base_attributes(),
            special_moves: self.special_moves(),
        }
    }
}

/// Configuration record a character is built from
///
/// The archetype decides which constraint applies; `base` and
/// `special_moves` may differ from the archetype's own table when a scenario
/// supplies a custom roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub base: Attributes,
    pub special_moves: Vec<SpecialMove>,
}
