//! Game rules shared by strategies and the round state machine.
//!
//! - `ownership`: which layout ends a participant may play on this turn
//! - `engine`: the opening double, termination, and scoring
//!
//! Rules are pure functions over the containers in `zones`; they never
//! mutate state.

pub mod engine;
pub mod ownership;

pub use engine::{engine_tile, engine_value, settle, RoundResult};
pub use ownership::{is_allowed, legal_sides, may_play_on, playable_indices, LegalSides};
