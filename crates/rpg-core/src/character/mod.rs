//! Character system
//!
//! Contains the Character struct and all character-related functionality.

mod archetype;
mod attributes;
#[allow(clippy::module_inception)]
mod character;
mod inventory;
mod leveling;

pub use archetype::{Archetype, ArchetypeProfile};
pub use attributes::{Attribute, Attributes, Effect};
pub use character::Character;
pub use leveling::experience_threshold;
