//! Core rule constants
//!
//! Capacity limits, experience rates and leveling numbers shared by the
//! character, inventory and combat modules.

/// Upper bound for Strength + Dexterity + Defense in an archetype's base table
pub const MAX_BASE_ATTRIBUTE_SUM: i32 = 70;

/// Minimum number of special moves a character must carry
pub const MIN_SPECIAL_MOVES: usize = 2;

/// Default carrying capacity of a new character
pub const DEFAULT_MAX_WEIGHT: u32 = 75;

/// Weapons a character can wield at once
pub const MAX_WEAPONS: u8 = 1;

/// Armors a character can wear at once
pub const MAX_ARMORS: u8 = 2;

/// Experience earned per point of damage dealt
pub const EXPERIENCE_PER_DAMAGE: i32 = 3;

/// Max health bonus per point of experience at creation
pub const HEALTH_PER_EXPERIENCE: i32 = 3;

/// Level `n` requires more than `n * LEVEL_THRESHOLD_MULTIPLIER` experience
pub const LEVEL_THRESHOLD_MULTIPLIER: i32 = 1000;

/// Attribute points granted by one level-up
pub const LEVEL_UP_BONUS: i32 = 5;

/// Chance that a loot roll yields an item
pub const DEFAULT_LOOT_DROP_CHANCE: f64 = 0.25;
