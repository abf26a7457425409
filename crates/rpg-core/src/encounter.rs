//! One step of a fight, as seen by the turn layer
//!
//! These functions wrap the character operations with the observer
//! notifications. The caller still decides who attacks whom, which item to
//! use and which attribute to raise.

use crate::character::{Attribute, Character};
use crate::combat::{self, AttackReport};
use crate::error::InventoryError;
use crate::item::Loot;
use crate::observer::CombatObserver;
use crate::rng::RandomSource;

/// Result of [`engage`]
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementOutcome {
    pub defender_died: bool,
    /// New level if the attacker leveled up
    pub attacker_leveled: Option<i32>,
    pub report: AttackReport,
}

/// Let `attacker` hit `defender` once and report it to `observer`
///
/// When the attacker has earned a level and `upgrade` names an attribute,
/// the level is taken right away. With `upgrade` set to `None` the
/// experience stays banked.
pub fn engage<R, O>(
    attacker: &mut Character,
    defender: &mut Character,
    rng: &mut R,
    observer: &mut O,
    upgrade: Option<Attribute>,
) -> EngagementOutcome
where
    R: RandomSource,
    O: CombatObserver + ?Sized,
{
    observer.before_fight(&attacker.snapshot(), &defender.snapshot());
    let report = combat::resolve_attack(attacker, defender, rng);
    observer.after_fight(&attacker.snapshot(), &defender.snapshot());

    let defender_died = defender.is_dead();
    if defender_died {
        tracing::info!(defender = %defender.name(), attacker = %attacker.name(), "character died");
        observer.character_died(defender.name());
    }

    let mut attacker_leveled = None;
    if let Some(attribute) = upgrade
        && attacker.upgrade_characteristic(attribute)
    {
        let level = attacker.experience_level();
        observer.level_gained(attacker.name(), level, attribute);
        attacker_leveled = Some(level);
    }

    EngagementOutcome {
        defender_died,
        attacker_leveled,
        report,
    }
}

/// Hand `loot` to `character`
///
/// Edible loot goes into the inventory, equipable loot is worn at once.
pub fn grant_loot<O>(
    character: &mut Character,
    loot: Loot,
    observer: &mut O,
) -> Result<(), InventoryError>
where
    O: CombatObserver + ?Sized,
{
    match loot {
        Loot::Edible(item) => {
            character.pick_up(item.clone())?;
            observer.item_picked_up(character.name(), &item);
        }
        Loot::Equipable(item) => {
            character.equip_with(item.clone())?;
            observer.item_equipped(character.name(), &item);
        }
    }
    Ok(())
}

/// Roll for a drop from `catalog`
///
/// One draw against `chance`; on success a second draw picks the item.
pub fn roll_loot<R: RandomSource>(catalog: &[Loot], chance: f64, rng: &mut R) -> Option<Loot> {
    if catalog.is_empty() || !rng.chance(chance) {
        return None;
    }
    let loot = catalog[rng.next_index(catalog.len())].clone();
    tracing::debug!(item = loot.as_item().name(), "loot dropped");
    Some(loot)
}
