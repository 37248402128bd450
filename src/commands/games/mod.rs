//! Shared building blocks for the card and chance games.

pub mod card;
pub mod deck;
pub mod engine;

pub use engine::{Game, GameManager, GameUpdate, SessionKey};
