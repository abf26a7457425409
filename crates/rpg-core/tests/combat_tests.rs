use rpg_core::character::{Archetype, ArchetypeProfile, Attribute, Attributes, Character, Effect};
use rpg_core::combat::{SpecialMove, resolve_attack};
use rpg_core::encounter::{engage, grant_loot};
use rpg_core::error::{CreationError, InventoryError};
use rpg_core::item::{EdibleItem, EquipableItem};
use rpg_core::observer::NullObserver;
use rpg_core::{DEFAULT_MAX_WEIGHT, GameRng, ScriptedRng};

fn hero(archetype: Archetype, name: &str) -> Character {
    Character::new(archetype, name).expect("shipped archetypes are valid")
}

fn custom(archetype: Archetype, base: Attributes, moves: Vec<SpecialMove>) -> Character {
    let profile = ArchetypeProfile {
        archetype,
        base,
        special_moves: moves,
    };
    Character::from_profile("Custom", profile, DEFAULT_MAX_WEIGHT).expect("valid profile")
}

#[test]
fn test_warrior_hits_magician() {
    let mut warrior = hero(Archetype::Warrior, "Conan");
    let mut magician = hero(Archetype::Magician, "Merlin");

    warrior.attack(&mut magician, &mut ScriptedRng::never());

    assert_eq!(magician.health(), 45);
    assert_eq!(warrior.current_experience(), 75);
    assert_eq!(warrior.health(), 70);
}

#[test]
fn test_parry_scenario() {
    // 25 Strength against 10 Defense, parried
    let mut attacker = custom(
        Archetype::Warrior,
        Attributes::from_base(25, 15, 5),
        vec![SpecialMove::parry(0.0), SpecialMove::parry(0.0)],
    );
    let mut defender = custom(
        Archetype::Warrior,
        Attributes::from_base(40, 20, 10),
        vec![SpecialMove::parry(0.5), SpecialMove::run_away(0.5)],
    );

    let mut rng = ScriptedRng::new(vec![ScriptedRng::ALWAYS, ScriptedRng::NEVER]);
    let report = resolve_attack(&mut attacker, &mut defender, &mut rng);

    assert_eq!(report.raw_damage, 15);
    assert_eq!(report.applied_damage, 7);
    assert_eq!(defender.health(), 63);
    assert_eq!(attacker.current_experience(), 21);
}

#[test]
fn test_parry_and_run_away_together() {
    let mut attacker = hero(Archetype::Warrior, "Conan");
    let mut defender = custom(
        Archetype::Warrior,
        Attributes::from_base(40, 20, 10),
        vec![SpecialMove::parry(0.5), SpecialMove::run_away(0.5)],
    );
    let before = defender.clone();

    let mut rng = ScriptedRng::new(vec![ScriptedRng::ALWAYS]);
    let report = resolve_attack(&mut attacker, &mut defender, &mut rng);

    assert!(report.triggered.parry && report.triggered.run_away);
    assert_eq!(defender, before);
    assert_eq!(attacker.current_experience(), 0);
}

#[test]
fn test_heal_of_twenty_is_net_zero() {
    let mut attacker = custom(
        Archetype::Magician,
        Attributes::from_base(5, 30, 5),
        vec![SpecialMove::parry(0.0), SpecialMove::parry(0.0)],
    );
    let mut defender = custom(
        Archetype::Warrior,
        Attributes::from_base(40, 20, 10),
        vec![
            SpecialMove::heal(0.5, Effect::new(Attribute::Health, 20)),
            SpecialMove::parry(0.0),
        ],
    );
    let health = defender.health();

    let mut rng = ScriptedRng::new(vec![ScriptedRng::ALWAYS]);
    let report = resolve_attack(&mut attacker, &mut defender, &mut rng);

    assert_eq!(report.triggered.heals.len(), 1);
    assert_eq!(report.applied_damage, 0);
    assert_eq!(defender.health(), health);
}

#[test]
fn test_fight_until_death() {
    let mut warrior = hero(Archetype::Warrior, "Conan");
    let mut athlete = hero(Archetype::Athlete, "Flash");
    let mut rng = ScriptedRng::never();

    // 40 - 10 = 30 per hit
    let mut hits = 0;
    while !athlete.is_dead() {
        let outcome = engage(&mut warrior, &mut athlete, &mut rng, &mut NullObserver, None);
        hits += 1;
        assert_eq!(outcome.defender_died, athlete.is_dead());
    }

    assert_eq!(hits, 3);
    assert_eq!(athlete.health(), 0);
    assert_eq!(warrior.current_experience(), 270);
}

#[test]
fn test_level_up_after_many_fights() {
    let mut warrior = hero(Archetype::Warrior, "Conan");
    let mut rng = ScriptedRng::never();

    // Twelve kills worth 90 experience each
    for _ in 0..12 {
        let mut target = hero(Archetype::Athlete, "Target");
        while !target.is_dead() {
            warrior.attack(&mut target, &mut rng);
        }
    }
    assert_eq!(warrior.current_experience(), 1080);
    assert!(warrior.can_level_up());

    assert!(warrior.upgrade_characteristic(Attribute::Defense));
    assert_eq!(warrior.experience_level(), 2);
    assert_eq!(warrior.current_experience(), 0);
    assert_eq!(warrior.attribute(Attribute::Defense), 15);
    assert_eq!(warrior.max_health(), 75);
    assert!(!warrior.upgrade_characteristic(Attribute::Defense));
}

#[test]
fn test_loot_changes_the_fight() {
    let mut warrior = hero(Archetype::Warrior, "Conan");
    let mut magician = hero(Archetype::Magician, "Merlin");
    grant_loot(
        &mut magician,
        EquipableItem::armor("Robe of warding", 5, 20).into(),
        &mut NullObserver,
    )
    .unwrap();

    warrior.attack(&mut magician, &mut ScriptedRng::never());
    assert_eq!(magician.health(), 65);
    assert_eq!(warrior.current_experience(), 15);
}

#[test]
fn test_consumables_in_a_fight() {
    let mut warrior = hero(Archetype::Warrior, "Conan");
    let mut magician = hero(Archetype::Magician, "Merlin");
    magician
        .pick_up(EdibleItem::potion("Healing potion", 2, 30))
        .unwrap();
    magician.pick_up(EdibleItem::food("Apple", 1, 4)).unwrap();

    warrior.attack(&mut magician, &mut ScriptedRng::never());
    assert_eq!(magician.health(), 45);

    let potion = magician.find_in_inventory("Healing potion").unwrap();
    magician.consume_item(potion).unwrap();
    assert_eq!(magician.health(), 70);

    let apple = magician.find_in_inventory("Apple").unwrap();
    magician.consume_item(apple).unwrap();
    assert_eq!(magician.attribute(Attribute::Dexterity), 39);
    assert_eq!(magician.current_weight(), 0);
    assert!(magician.inventory().is_empty());
}

#[test]
fn test_equipment_limits_through_public_api() {
    let mut archer = hero(Archetype::Archer, "Robin");
    archer.equip_with(EquipableItem::weapon("Bow", 5, 10)).unwrap();
    archer.equip_with(EquipableItem::armor("Cap", 2, 1)).unwrap();
    archer.equip_with(EquipableItem::armor("Vest", 6, 3)).unwrap();

    assert_eq!(
        archer.equip_with(EquipableItem::armor("Boots", 3, 1)),
        Err(InventoryError::TooManyArmors { max: 2 })
    );
    assert_eq!(
        archer.equip_with(EquipableItem::weapon("Dagger", 1, 3)),
        Err(InventoryError::TooManyWeapons { max: 1 })
    );
    assert_eq!(archer.current_weight(), 13);
}

#[test]
fn test_creation_failures() {
    let too_strong = ArchetypeProfile {
        archetype: Archetype::Warrior,
        base: Attributes::from_base(20, 40, 30),
        special_moves: Archetype::Warrior.special_moves(),
    };
    assert!(matches!(
        Character::from_profile("A", too_strong, DEFAULT_MAX_WEIGHT),
        Err(CreationError::TooHighAttributes { sum: 90, limit: 70 })
    ));

    let wrong_shape = ArchetypeProfile {
        archetype: Archetype::Athlete,
        base: Attributes::from_base(40, 20, 10),
        special_moves: Archetype::Athlete.special_moves(),
    };
    assert!(matches!(
        Character::from_profile("B", wrong_shape, DEFAULT_MAX_WEIGHT),
        Err(CreationError::InvalidConstraints { .. })
    ));
}

#[test]
fn test_seeded_fights_replay() {
    let run = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let mut warrior = hero(Archetype::Warrior, "Conan");
        let mut archer = hero(Archetype::Archer, "Robin");
        for _ in 0..5 {
            warrior.attack(&mut archer, &mut rng);
            archer.attack(&mut warrior, &mut rng);
        }
        (warrior, archer)
    };

    assert_eq!(run(1234), run(1234));
}
