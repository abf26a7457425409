//! rpg-core: character and combat model for a turn-based party RPG
//!
//! This crate contains the rules only: attribute validation, inventory and
//! equipment capacity, the special-move engine, attack resolution and
//! leveling. It performs no I/O. Turn rotation, presentation and scenario
//! scripting live in the caller, which talks to the core through
//! [`character::Character`], [`encounter`] and the [`observer::CombatObserver`]
//! callbacks.

pub mod character;
pub mod combat;
pub mod encounter;
pub mod error;
pub mod item;
pub mod observer;
pub mod options;

mod consts;
mod rng;

pub use consts::*;
pub use rng::{GameRng, RandomSource, ScriptedRng};
