//! Experience thresholds and level-up

use super::attributes::{Attribute, Effect};
use super::character::Character;
use crate::{LEVEL_THRESHOLD_MULTIPLIER, LEVEL_UP_BONUS};

/// Experience that must be exceeded to leave `level`
pub const fn experience_threshold(level: i32) -> i32 {
    level.saturating_mul(LEVEL_THRESHOLD_MULTIPLIER)
}

impl Character {
    pub fn can_level_up(&self) -> bool {
        self.current_experience > experience_threshold(self.experience_level)
    }

    /// Gain a level and raise `attribute` by [`LEVEL_UP_BONUS`]
    ///
    /// Does nothing and returns false unless [`Character::can_level_up`].
    /// The threshold of the *new* level is paid out of the current
    /// experience, floored at zero. Health is not topped up.
    pub fn upgrade_characteristic(&mut self, attribute: Attribute) -> bool {
        if !self.can_level_up() {
            return false;
        }

        self.experience_level = self.experience_level.saturating_add(1);
        self.current_experience = self
            .current_experience
            .saturating_sub(experience_threshold(self.experience_level))
            .max(0);

        if attribute != Attribute::Health {
            self.attributes.modify(attribute, LEVEL_UP_BONUS);
        }

        self.max_health = self.attributes.combat_total();
        if self.health() > self.max_health {
            self.attributes.set(Attribute::Health, self.max_health.max(0));
        }
        if attribute == Attribute::Health {
            self.apply_effect(Effect::new(Attribute::Health, LEVEL_UP_BONUS));
        }

        tracing::info!(
            character = %self.name(),
            level = self.experience_level,
            attribute = %attribute,
            "level gained"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;

    fn warrior_with_experience(xp: i32) -> Character {
        let mut c = Character::new(Archetype::Warrior, "Conan").unwrap();
        c.gain_experience(xp);
        c
    }

    #[test]
    fn test_threshold() {
        assert_eq!(experience_threshold(1), 1000);
        assert_eq!(experience_threshold(3), 3000);
    }

    #[test]
    fn test_threshold_must_be_exceeded() {
        assert!(!warrior_with_experience(1000).can_level_up());
        assert!(warrior_with_experience(1001).can_level_up());
    }

    #[test]
    fn test_upgrade_without_enough_experience_is_noop() {
        let mut c = warrior_with_experience(999);
        let before = c.clone();
        assert!(!c.upgrade_characteristic(Attribute::Strength));
        assert_eq!(c, before);
    }

    #[test]
    fn test_upgrade_pays_new_level_threshold() {
        let mut c = warrior_with_experience(2500);
        assert!(c.upgrade_characteristic(Attribute::Strength));
        assert_eq!(c.experience_level(), 2);
        assert_eq!(c.current_experience(), 500);
        assert_eq!(c.attribute(Attribute::Strength), 45);
        assert_eq!(c.max_health(), 75);
        // Not topped up
        assert_eq!(c.health(), 70);
    }

    #[test]
    fn test_upgrade_floors_experience_at_zero() {
        let mut c = warrior_with_experience(1200);
        assert!(c.upgrade_characteristic(Attribute::Defense));
        assert_eq!(c.experience_level(), 2);
        assert_eq!(c.current_experience(), 0);
        assert_eq!(c.attribute(Attribute::Defense), 15);
        assert!(!c.can_level_up());
    }

    #[test]
    fn test_upgrade_health_heals_within_new_max() {
        let mut c = warrior_with_experience(3000);
        c.take_damage(20);
        assert!(c.upgrade_characteristic(Attribute::Health));
        assert_eq!(c.max_health(), 70);
        assert_eq!(c.health(), 55);
    }

    #[test]
    fn test_upgrade_keeps_health_within_shrunken_max() {
        let mut c = warrior_with_experience(3000);
        c.apply_effect(Effect::new(Attribute::Dexterity, -15));
        assert!(c.upgrade_characteristic(Attribute::Strength));
        assert_eq!(c.max_health(), 60);
        assert_eq!(c.health(), 60);
    }
}
