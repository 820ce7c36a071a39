//! The round state machine and its snapshots.
//!
//! - `game`: `Round`, which deals, runs turns, and settles the result
//! - `snapshot`: `RoundSnapshot`, a plain-data copy of a round between turns

pub mod game;
pub mod snapshot;

pub use game::{Round, RoundPhase, TurnReport};
pub use snapshot::RoundSnapshot;
