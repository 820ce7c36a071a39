//! Round-level rules: the engine double, termination, and scoring.
//!
//! - `engine_value`: which double opens a given round
//! - `settle`: whether a round is over after a turn, and who scores what

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};
use crate::core::tile::{Tile, MAX_PIPS};
use crate::error::{LonganaError, Result};
use crate::zones::Hand;

/// Pip value of the engine for a 1-based round number.
///
/// Round 1 opens with 6-6, round 2 with 5-5, down to 0-0 in round 7, and
/// the cycle repeats from round 8.
///
/// ```
/// use longana::rules::engine_value;
///
/// assert_eq!(engine_value(1).unwrap(), 6);
/// assert_eq!(engine_value(7).unwrap(), 0);
/// assert_eq!(engine_value(8).unwrap(), 6);
/// ```
pub fn engine_value(round_number: u32) -> Result<u8> {
    if round_number == 0 {
        return Err(LonganaError::InvalidRoundNumber(round_number));
    }
    let cycle = u32::from(MAX_PIPS) + 1;
    // Remainder is below 7, so the cast cannot truncate.
    Ok(MAX_PIPS - ((round_number - 1) % cycle) as u8)
}

/// The engine tile for a round.
pub fn engine_tile(round_number: u32) -> Result<Tile> {
    Tile::double(engine_value(round_number)?)
}

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// `winner` emptied their hand and collects the opponent's pips.
    Domino { winner: PlayerId, points: u32 },
    /// Boneyard empty and both participants passed. The lighter hand
    /// collects the heavier hand's pips; `winner` is `None` on equal hands.
    Blocked { winner: Option<PlayerId>, points: u32 },
}

impl RoundResult {
    /// Participant who scored, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match *self {
            RoundResult::Domino { winner, .. } => Some(winner),
            RoundResult::Blocked { winner, .. } => winner,
        }
    }

    /// Points awarded to the winner.
    #[must_use]
    pub fn points(&self) -> u32 {
        match *self {
            RoundResult::Domino { points, .. } | RoundResult::Blocked { points, .. } => points,
        }
    }

    /// Check if a participant won the round.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, RoundResult::Blocked { .. })
    }

    /// Points each participant gains from this round.
    #[must_use]
    pub fn score_delta(&self) -> PlayerMap<u32> {
        PlayerMap::new(|p| if self.is_winner(p) { self.points() } else { 0 })
    }
}

/// Decide whether the round is over.
///
/// Checked in priority order:
/// 1. an empty hand wins, scoring the opponent's pips;
/// 2. an empty pool with both pass flags set blocks the round.
#[must_use]
pub fn settle(hands: &PlayerMap<Hand>, pool_empty: bool, passed: &PlayerMap<bool>) -> Option<RoundResult> {
    for player in PlayerId::ALL {
        if hands[player].is_empty() {
            return Some(RoundResult::Domino {
                winner: player,
                points: hands[player.opponent()].score(),
            });
        }
    }

    if pool_empty && PlayerId::ALL.iter().all(|&p| passed[p]) {
        let [first, second] = PlayerId::ALL;
        let (a, b) = (hands[first].score(), hands[second].score());
        let result = match a.cmp(&b) {
            std::cmp::Ordering::Less => RoundResult::Blocked { winner: Some(first), points: b },
            std::cmp::Ordering::Greater => RoundResult::Blocked { winner: Some(second), points: a },
            std::cmp::Ordering::Equal => RoundResult::Blocked { winner: None, points: 0 },
        };
        return Some(result);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(pairs: &[(u8, u8)]) -> Hand {
        Hand::from_tiles(pairs.iter().map(|&(a, b)| Tile::new(a, b).unwrap()).collect())
    }

    #[test]
    fn test_engine_value_cycles() {
        let values: Vec<_> = (1..=9).map(|r| engine_value(r).unwrap()).collect();
        assert_eq!(values, vec![6, 5, 4, 3, 2, 1, 0, 6, 5]);
        assert_eq!(engine_value(0), Err(LonganaError::InvalidRoundNumber(0)));
        assert_eq!(engine_tile(2).unwrap(), Tile::double(5).unwrap());
    }

    #[test]
    fn test_empty_hand_wins() {
        let hands = PlayerMap::from_pair(hand(&[]), hand(&[(5, 6)]));
        let result = settle(&hands, false, &PlayerMap::with_value(false));

        assert_eq!(
            result,
            Some(RoundResult::Domino {
                winner: PlayerId::new(0),
                points: 11
            })
        );
    }

    #[test]
    fn test_blocked_lower_hand_wins() {
        let hands = PlayerMap::from_pair(hand(&[(4, 5)]), hand(&[(6, 6), (1, 1)]));
        let result = settle(&hands, true, &PlayerMap::with_value(true)).unwrap();

        assert!(result.is_blocked());
        assert!(result.is_winner(PlayerId::new(0)));
        assert_eq!(result.points(), 14);
        assert_eq!(result.score_delta(), PlayerMap::from_pair(14, 0));
    }

    #[test]
    fn test_blocked_tie_awards_nothing() {
        let hands = PlayerMap::from_pair(hand(&[(3, 4)]), hand(&[(1, 6)]));
        let result = settle(&hands, true, &PlayerMap::with_value(true)).unwrap();

        assert_eq!(result, RoundResult::Blocked { winner: None, points: 0 });
        assert_eq!(result.score_delta(), PlayerMap::from_pair(0, 0));
    }

    #[test]
    fn test_not_blocked_while_pool_has_tiles_or_one_pass() {
        let hands = PlayerMap::from_pair(hand(&[(3, 4)]), hand(&[(1, 6)]));
        assert!(settle(&hands, false, &PlayerMap::with_value(true)).is_none());
        assert!(settle(&hands, true, &PlayerMap::from_pair(true, false)).is_none());
    }
}
