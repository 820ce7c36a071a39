//! Round snapshots for save/restore.
//!
//! A snapshot is plain data: ordered tile lists plus the few flags the
//! round needs to continue. Any persistence layer can encode it. `bincode`
//! and JSON encodings are provided.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRngState;
use crate::core::tile::Tile;
use crate::error::{LonganaError, Result};

/// Serializable state of a round between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// 1-based round number; fixes the engine double.
    pub round_number: u32,

    /// Layout tiles in reading order, left end first.
    pub layout: Vec<Tile>,

    /// Boneyard tiles; the last one is drawn next.
    pub pool: Vec<Tile>,

    /// Hand tiles in hand order.
    pub hands: PlayerMap<Vec<Tile>>,

    /// Cumulative scores.
    pub scores: PlayerMap<u32>,

    /// Whether each participant's last turn was a pass.
    pub passed: PlayerMap<bool>,

    /// Participant to act next. `None` once the round is over.
    pub next_player: Option<PlayerId>,

    /// RNG position, so later shuffles match an uninterrupted run.
    pub rng: GameRngState,
}

impl RoundSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| LonganaError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| LonganaError::Snapshot(e.to_string()))
    }

    /// Human-readable JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LonganaError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LonganaError::Snapshot(e.to_string()))
    }
}
