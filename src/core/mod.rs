//! Core engine types: tiles, participants, RNG, configuration, turn records.
//!
//! These are the building blocks shared by the containers in `zones`, the
//! rules in `rules`, and the round state machine in `round`.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod turn;

pub use tile::{Tile, MAX_PIPS, STANDARD_SET_SIZE};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{RoundConfig, DEFAULT_HAND_SIZE};
pub use turn::{TurnOutcome, TurnRecord};
