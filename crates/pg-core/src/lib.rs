//! Character model and training loop for Proving Grounds.
//!
//! A player names a character, picks one of three classes (Warrior, Mage,
//! Healer) and then practices attack, defense and special actions whose
//! outcomes are rolled from per-class tables.

pub mod action;
pub mod character;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod text;

pub use action::{Action, ActionRegistry, AttackAction, DefenseAction, SpecialAction};
pub use character::{Character, CharacterClass, ClassProfile, SpecialOutcome, StatKind, Stats};
pub use config::GameConfig;
pub use dice::RollRange;
pub use error::{GameError, GameResult};
pub use game::Game;
