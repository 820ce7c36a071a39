//! Turn outcomes and the records kept in round history.
//!
//! Every turn ends in exactly one of two ways: a tile goes onto the layout,
//! or the participant passes. Either may follow a draw from the boneyard.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::tile::Tile;
use crate::zones::Side;

/// How a single turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A tile was placed. `drew` is set when it came straight from the boneyard.
    Placed { tile: Tile, side: Side, drew: bool },
    /// No placement. `drew` holds the unplayable tile taken from the boneyard, if any.
    Passed { drew: Option<Tile> },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, TurnOutcome::Passed { .. })
    }

    /// Tile placed this turn, if any.
    #[must_use]
    pub fn placed(&self) -> Option<(Tile, Side)> {
        match *self {
            TurnOutcome::Placed { tile, side, .. } => Some((tile, side)),
            TurnOutcome::Passed { .. } => None,
        }
    }

    /// Whether the participant drew from the boneyard this turn.
    #[must_use]
    pub fn drew(&self) -> bool {
        match *self {
            TurnOutcome::Placed { drew, .. } => drew,
            TurnOutcome::Passed { drew } => drew.is_some(),
        }
    }
}

/// A recorded turn for history tracking and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The participant who took the turn.
    pub player: PlayerId,

    /// Turn number within the round (starts at 1).
    pub turn: u32,

    pub outcome: TurnOutcome,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, outcome: TurnOutcome) -> Self {
        Self {
            player,
            turn,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_queries() {
        let tile = Tile::new(3, 4).unwrap();
        let placed = TurnOutcome::Placed {
            tile,
            side: Side::Right,
            drew: true,
        };
        assert!(!placed.is_pass());
        assert!(placed.drew());
        assert_eq!(placed.placed(), Some((tile, Side::Right)));

        let passed = TurnOutcome::Passed { drew: None };
        assert!(passed.is_pass());
        assert!(!passed.drew());
        assert_eq!(passed.placed(), None);
    }

    #[test]
    fn test_record_serialization() {
        let record = TurnRecord::new(
            PlayerId::new(1),
            4,
            TurnOutcome::Passed {
                drew: Some(Tile::new(0, 1).unwrap()),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
