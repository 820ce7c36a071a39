//! # longana
//!
//! Round engine for Longana, the two-player double-six domino game.
//!
//! ## Design Principles
//!
//! 1. **Conservation**: The 28 tiles only move pool → hand → layout. Every
//!    rejected operation leaves its container untouched.
//!
//! 2. **Side Ownership**: Each participant owns one end of the layout.
//!    Doubles go anywhere; the other end opens only after an opponent pass.
//!
//! 3. **UI-Free Core**: Interactive input arrives through the `Prompt` trait.
//!    The engine never reads a terminal or installs a log subscriber.
//!
//! ## Modules
//!
//! - `core`: Tiles, participants, RNG, configuration, turn records
//! - `zones`: Boneyard, hands, and the layout
//! - `rules`: Side ownership, the engine double, termination and scoring
//! - `strategy`: Greedy and interactive turn strategies
//! - `round`: The round state machine and snapshots
//! - `notation`: `a-b` text encoding of tile lists
//!
//! ## Example
//!
//! ```
//! use longana::{PlayerMap, Round, RoundConfig, Strategy};
//!
//! let strategies = PlayerMap::from_pair(Strategy::greedy(), Strategy::greedy());
//! let mut round = Round::new(RoundConfig::default().with_seed(7), strategies).unwrap();
//! round.prepare(1).unwrap();
//!
//! let result = round.play_to_end().unwrap();
//! assert_eq!(round.scores().iter().map(|(_, s)| *s).sum::<u32>(), result.points());
//! ```

pub mod core;
pub mod zones;
pub mod rules;
pub mod strategy;
pub mod round;
pub mod notation;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Tile, MAX_PIPS, STANDARD_SET_SIZE,
    PlayerId, PlayerMap, PLAYER_COUNT,
    GameRng, GameRngState,
    RoundConfig, DEFAULT_HAND_SIZE,
    TurnOutcome, TurnRecord,
};

pub use crate::zones::{TilePool, Hand, Layout, Side};

pub use crate::rules::{engine_tile, engine_value, RoundResult};

pub use crate::strategy::{
    Strategy, TurnStrategy, TurnContext,
    GreedyStrategy, InteractiveStrategy, Prompt, ScriptedPrompt,
};

pub use crate::round::{Round, RoundPhase, TurnReport, RoundSnapshot};

pub use crate::notation::{parse_tiles, format_tiles, format_layout};

pub use crate::error::{LonganaError, Result};
