//! Command-line duel between two characters
//!
//! Drives the rpg-core rules: the two fighters take turns attacking, spend
//! earned levels on the chosen attribute, drink potions when wounded and
//! pick up whatever the loot table drops.

use anyhow::{Context, Result, bail};
use clap::Parser;
use strum::IntoEnumIterator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rpg_core::character::{Archetype, Attribute, Character, Effect};
use rpg_core::encounter::{engage, grant_loot, roll_loot};
use rpg_core::item::{EdibleItem, EdibleKind, EquipableItem, Loot};
use rpg_core::observer::{CharacterSnapshot, CombatObserver};
use rpg_core::options::GameOptions;
use rpg_core::{GameRng, LEVEL_UP_BONUS};

/// Turn-based duel simulator
#[derive(Parser, Debug)]
#[command(name = "rpg-sim")]
#[command(author, version, about = "Pit two characters against each other", long_about = None)]
struct Args {
    /// First fighter's archetype (Warrior, Archer, Magician, Athlete)
    #[arg(short = 'a', long = "attacker", default_value = "warrior")]
    attacker: String,

    /// Second fighter's archetype
    #[arg(short = 'd', long = "defender", default_value = "magician")]
    defender: String,

    /// First fighter's name
    #[arg(long = "attacker-name", default_value = "Conan")]
    attacker_name: String,

    /// Second fighter's name
    #[arg(long = "defender-name", default_value = "Merlin")]
    defender_name: String,

    /// Attribute raised on level-up (strength, dexterity, defense, health)
    #[arg(short = 'u', long = "upgrade", default_value = "strength")]
    upgrade: String,

    /// JSON options file
    #[arg(short = 'o', long = "options")]
    options: Option<String>,

    /// RNG seed, overrides the options file
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Round limit, overrides the options file
    #[arg(short = 'r', long = "max-rounds")]
    max_rounds: Option<u32>,

    /// Carrying capacity, overrides the options file
    #[arg(short = 'w', long = "max-weight")]
    max_weight: Option<u32>,

    /// Loot drop chance, overrides the options file
    #[arg(long = "loot-chance")]
    loot_chance: Option<f64>,
}

/// Prints every notification to stdout
struct ConsoleObserver;

impl CombatObserver for ConsoleObserver {
    fn before_fight(&mut self, attacker: &CharacterSnapshot, defender: &CharacterSnapshot) {
        println!(
            "{} ({} HP) attacks {} ({} HP)",
            attacker.name,
            attacker.health(),
            defender.name,
            defender.health()
        );
    }

    fn after_fight(&mut self, _attacker: &CharacterSnapshot, defender: &CharacterSnapshot) {
        println!(
            "  {} is left with {}/{} HP",
            defender.name,
            defender.health(),
            defender.max_health
        );
    }

    fn character_died(&mut self, name: &str) {
        println!("  {name} dies!");
    }

    fn item_picked_up(&mut self, character: &str, item: &EdibleItem) {
        println!("  {character} picks up {}", item.name);
    }

    fn item_equipped(&mut self, character: &str, item: &EquipableItem) {
        println!("  {character} equips {} ({})", item.name, item.slot());
    }

    fn level_gained(&mut self, character: &str, new_level: i32, attribute: Attribute) {
        println!(
            "  {character} reaches level {new_level}, {} +{LEVEL_UP_BONUS}",
            attribute.short_name()
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpg_core=info,rpg_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let options = load_options(&args)?;

    let attacker_type = parse_archetype(&args.attacker)
        .with_context(|| format!("unknown archetype '{}'", args.attacker))?;
    let defender_type = parse_archetype(&args.defender)
        .with_context(|| format!("unknown archetype '{}'", args.defender))?;
    let upgrade = parse_attribute(&args.upgrade)
        .with_context(|| format!("unknown attribute '{}'", args.upgrade))?;

    let first = Character::with_options(attacker_type, args.attacker_name.as_str(), &options)
        .with_context(|| format!("cannot create {attacker_type}"))?;
    let second = Character::with_options(defender_type, args.defender_name.as_str(), &options)
        .with_context(|| format!("cannot create {defender_type}"))?;

    let mut rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "starting duel");

    let mut fighters = [first, second];
    let winner = duel(&mut fighters, &mut rng, &options, upgrade);

    println!();
    for fighter in &fighters {
        println!("{fighter}");
    }
    match winner {
        Some(index) => println!("{} wins", fighters[index].name()),
        None => println!("Draw after {} rounds", options.max_rounds),
    }
    Ok(())
}

fn load_options(args: &Args) -> Result<GameOptions> {
    let mut options = match &args.options {
        Some(path) => GameOptions::load(path)?,
        None => GameOptions::default(),
    };

    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    if let Some(max_rounds) = args.max_rounds {
        options.max_rounds = max_rounds;
    }
    if let Some(max_weight) = args.max_weight {
        options.max_weight = max_weight;
    }
    if let Some(chance) = args.loot_chance {
        if !(0.0..=1.0).contains(&chance) {
            bail!("loot chance must be within [0, 1], got {chance}");
        }
        options.loot_drop_chance = chance;
    }
    Ok(options)
}

/// Alternate attacks until someone dies; returns the winner's index
fn duel(
    fighters: &mut [Character; 2],
    rng: &mut GameRng,
    options: &GameOptions,
    upgrade: Attribute,
) -> Option<usize> {
    let catalog = loot_catalog();
    let mut observer = ConsoleObserver;

    for round in 0..options.max_rounds {
        let turn = (round % 2) as usize;
        let [first, second] = &mut *fighters;
        let (attacker, defender) = if turn == 0 {
            (first, second)
        } else {
            (second, first)
        };

        drink_if_wounded(attacker);

        let outcome = engage(attacker, defender, rng, &mut observer, Some(upgrade));
        if outcome.defender_died {
            return Some(turn);
        }

        if let Some(loot) = roll_loot(&catalog, options.loot_drop_chance, rng)
            && let Err(err) = grant_loot(attacker, loot, &mut observer)
        {
            println!(
                "  {} leaves the loot behind ({} weight left): {err}",
                attacker.name(),
                attacker.remaining_capacity()
            );
        }
    }
    None
}

/// Drink the first potion when below half health
fn drink_if_wounded(character: &mut Character) {
    if character.health().saturating_mul(2) >= character.max_health() {
        return;
    }
    let potion = character
        .inventory()
        .iter()
        .position(|item| matches!(item.kind, EdibleKind::Potion { .. }));
    if let Some(index) = potion
        && let Ok(item) = character.consume_item(index)
    {
        println!("{} drinks {}", character.name(), item.name);
    }
}

fn loot_catalog() -> Vec<Loot> {
    vec![
        EdibleItem::potion("Healing potion", 2, 30).into(),
        EdibleItem::food("Apple", 1, 2).into(),
        EdibleItem::spell(
            "Scroll of might",
            1,
            vec![Effect::new(Attribute::Strength, 3)],
        )
        .into(),
        EquipableItem::weapon("Long sword", 15, 10).into(),
        EquipableItem::armor("Leather armor", 12, 4).into(),
        EquipableItem::armor("Iron helmet", 8, 3).into(),
    ]
}

/// Parse archetype from string
fn parse_archetype(s: &str) -> Option<Archetype> {
    let s = s.to_lowercase();
    if s.is_empty() {
        return None;
    }
    Archetype::iter().find(|archetype| archetype.to_string().to_lowercase().starts_with(&s))
}

/// Parse attribute from string
fn parse_attribute(s: &str) -> Option<Attribute> {
    let s = s.to_lowercase();
    if s.is_empty() {
        return None;
    }
    Attribute::iter().find(|attribute| attribute.to_string().to_lowercase().starts_with(&s))
}
