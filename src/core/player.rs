//! Participant identification and per-participant data storage.
//!
//! ## PlayerId
//!
//! Longana rounds always have exactly two participants, `PlayerId(0)` and
//! `PlayerId(1)`. Which of them is interactive is decided by the strategies
//! handed to the round, not by the id.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId` (hands, pass flags, scores).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of participants in a round.
pub const PLAYER_COUNT: usize = 2;

/// Participant identifier, `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Both participants in seating order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [PlayerId(0), PlayerId(1)];

    /// Create a player ID. Any non-zero index is treated as the second seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        if id == 0 {
            Self(0)
        } else {
            Self(1)
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other participant.
    ///
    /// ```
    /// use longana::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < PLAYER_COUNT {
            Ok(Self(value))
        } else {
            Err(format!("player index {value} out of range"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-participant data with O(1) access.
///
/// ## Example
///
/// ```
/// use longana::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::new(1)] += 14;
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 14);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a map from explicit per-participant values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform each entry, keeping the participant association.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
        assert_eq!(p0.opponent().opponent(), p0);
    }

    #[test]
    fn test_player_id_serde_rejects_third_seat() {
        let json = serde_json::to_string(&PlayerId::new(1)).unwrap();
        assert_eq!(json, "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map = PlayerMap::from_pair(false, false);
        map[PlayerId::new(1)] = true;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &false), (PlayerId::new(1), &true)]);

        let flipped = map.map(|b| !b);
        assert_eq!(flipped, PlayerMap::from_pair(true, false));
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(3u32, 7u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
