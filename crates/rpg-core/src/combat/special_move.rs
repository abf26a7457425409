//! Special moves and their per-exchange evaluation
//!
//! Each time a character is attacked, every one of its moves gets its own
//! draw from the injected [`RandomSource`]. Several moves may trigger in the
//! same exchange; their contributions are collected into [`TriggeredMoves`]
//! before any attribute is touched.

use crate::character::Effect;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Special move type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum SpecialMoveKind {
    /// Halves incoming damage
    Parry,
    /// Temporary boost for the duration of the exchange
    Heal,
    /// Avoids the exchange entirely
    RunAway,
    /// Reserved, no effect yet
    AvoidAttack,
}

/// A probabilistic defensive action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialMove {
    /// Chance in `[0, 1)` that the move triggers when its owner is attacked
    pub probability: f64,
    pub kind: SpecialMoveKind,
    pub effect: Option<Effect>,
}

impl SpecialMove {
    pub const fn new(probability: f64, kind: SpecialMoveKind, effect: Option<Effect>) -> Self {
        Self {
            probability,
            kind,
            effect,
        }
    }

    pub const fn parry(probability: f64) -> Self {
        Self::new(probability, SpecialMoveKind::Parry, None)
    }

    pub const fn run_away(probability: f64) -> Self {
        Self::new(probability, SpecialMoveKind::RunAway, None)
    }

    pub const fn heal(probability: f64, effect: Effect) -> Self {
        Self::new(probability, SpecialMoveKind::Heal, Some(effect))
    }
}

/// Whether `mv` triggers for the given draw
pub fn can_trigger(mv: &SpecialMove, draw: f64) -> bool {
    draw < mv.probability
}

/// Outcome of evaluating a defender's moves for one exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggeredMoves {
    pub parry: bool,
    pub run_away: bool,
    pub avoid_attack: bool,
    /// Effects of triggered heals, in move order
    pub heals: Vec<Effect>,
}

impl TriggeredMoves {
    pub fn any(&self) -> bool {
        self.parry || self.run_away || self.avoid_attack || !self.heals.is_empty()
    }
}

/// Draw once per move, in order, and collect what triggered
pub fn evaluate_moves<R: RandomSource>(moves: &[SpecialMove], rng: &mut R) -> TriggeredMoves {
    let mut triggered = TriggeredMoves::default();

    for mv in moves {
        let draw = rng.next_unit();
        if !can_trigger(mv, draw) {
            continue;
        }
        tracing::debug!(kind = %mv.kind, probability = mv.probability, draw, "special move triggered");

        match mv.kind {
            SpecialMoveKind::Parry => triggered.parry = true,
            SpecialMoveKind::RunAway => triggered.run_away = true,
            SpecialMoveKind::Heal => {
                if let Some(effect) = mv.effect {
                    triggered.heals.push(effect);
                }
            }
            SpecialMoveKind::AvoidAttack => {
                tracing::trace!("avoid-attack has no effect");
                triggered.avoid_attack = true;
            }
        }
    }

    triggered
}
