//! Combat system
//!
//! One attack is a single exchange: the defender's special moves are
//! evaluated, temporary heals are applied, damage is computed from
//! effective Strength and Defense, and the heals are rolled back.

mod special_move;

pub use special_move::{SpecialMove, SpecialMoveKind, TriggeredMoves, can_trigger, evaluate_moves};

use crate::EXPERIENCE_PER_DAMAGE;
use crate::character::{Character, Effect};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// What happened during one exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackReport {
    pub triggered: TriggeredMoves,
    /// Attacker Strength including weapons
    pub effective_strength: i32,
    /// Defender Defense including armor and heal boosts
    pub effective_defense: i32,
    /// Strength minus Defense, before parry
    pub raw_damage: i32,
    /// Health actually taken from the defender
    pub applied_damage: i32,
    pub experience_gained: i32,
}

impl AttackReport {
    pub fn hit(&self) -> bool {
        self.applied_damage > 0
    }
}

/// Resolve one attack of `attacker` against `defender`
///
/// Draws exactly one value per defender special move. Heals last only for
/// this exchange: the change each one actually made is undone afterwards,
/// so a heal that was clamped at full health leaves nothing behind.
pub fn resolve_attack<R: RandomSource>(
    attacker: &mut Character,
    defender: &mut Character,
    rng: &mut R,
) -> AttackReport {
    let moves = defender.special_moves().to_vec();
    let triggered = evaluate_moves(&moves, rng);

    let applied_heals: Vec<Effect> = triggered
        .heals
        .iter()
        .map(|effect| Effect::new(effect.attribute, defender.apply_effect(*effect)))
        .collect();

    let effective_strength = attacker.effective_strength();
    let effective_defense = defender.effective_defense();

    let mut report = AttackReport {
        effective_strength,
        effective_defense,
        ..AttackReport::default()
    };

    if triggered.run_away {
        tracing::debug!(defender = %defender.name(), "defender ran away");
    } else {
        report.raw_damage = effective_strength.saturating_sub(effective_defense);
        report.applied_damage = if triggered.parry {
            report.raw_damage / 2
        } else {
            report.raw_damage
        };

        if report.applied_damage > 0 {
            defender.take_damage(report.applied_damage);
            report.experience_gained = report
                .applied_damage
                .saturating_mul(EXPERIENCE_PER_DAMAGE);
            attacker.gain_experience(report.experience_gained);
        } else {
            report.applied_damage = 0;
        }
    }

    for effect in applied_heals.iter().rev() {
        defender.apply_effect(effect.reversed());
    }

    tracing::debug!(
        attacker = %attacker.name(),
        defender = %defender.name(),
        strength = effective_strength,
        defense = effective_defense,
        damage = report.applied_damage,
        parry = triggered.parry,
        health = defender.health(),
        "attack resolved"
    );

    report.triggered = triggered;
    report
}
