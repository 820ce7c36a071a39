//! A participant's hand.
//!
//! Tiles keep insertion order so "play tile N" stays stable between the
//! moment a hand is shown and the moment a selection comes back.

use serde::{Deserialize, Serialize};

use crate::core::tile::Tile;
use crate::error::{LonganaError, Result};

/// Ordered multiset of tiles held by one participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Append a tile at the end of the hand.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Tile at `index` without removing it.
    pub fn get(&self, index: usize) -> Result<Tile> {
        self.tiles.get(index).copied().ok_or(LonganaError::IndexOutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    /// Remove and return the tile at `index`. Out-of-range indices leave the hand untouched.
    pub fn take(&mut self, index: usize) -> Result<Tile> {
        if index >= self.tiles.len() {
            return Err(LonganaError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            });
        }
        Ok(self.tiles.remove(index))
    }

    /// Remove the first tile equal to `target`, ignoring orientation.
    pub fn find_and_remove(&mut self, target: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == target) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Sum of pips over all held tiles.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over `(index, tile)` pairs in hand order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Tile)> + '_ {
        self.tiles.iter().copied().enumerate()
    }

    /// Replace the contents, e.g. when loading a saved round.
    pub fn load(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(near: u8, far: u8) -> Tile {
        Tile::new(near, far).unwrap()
    }

    #[test]
    fn test_add_and_take_in_order() {
        let mut hand = Hand::new();
        hand.add(tile(1, 2));
        hand.add(tile(3, 4));
        hand.add(tile(5, 6));

        assert_eq!(hand.take(1).unwrap(), tile(3, 4));
        assert_eq!(hand.tiles(), &[tile(1, 2), tile(5, 6)]);
    }

    #[test]
    fn test_take_out_of_range_does_not_mutate() {
        let mut hand = Hand::from_tiles(vec![tile(0, 1)]);
        assert_eq!(
            hand.take(1),
            Err(LonganaError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_find_and_remove() {
        let mut hand = Hand::from_tiles(vec![tile(6, 6), tile(2, 5)]);

        assert!(hand.find_and_remove(tile(5, 2)));
        assert!(!hand.contains(tile(2, 5)));
        assert!(!hand.find_and_remove(tile(0, 0)));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_score() {
        let hand = Hand::from_tiles(vec![tile(6, 6), tile(2, 5), tile(0, 0)]);
        assert_eq!(hand.score(), 19);
        assert_eq!(Hand::new().score(), 0);
    }

    #[test]
    fn test_empty() {
        let mut hand = Hand::from_tiles(vec![tile(1, 1)]);
        assert!(!hand.is_empty());
        hand.take(0).unwrap();
        assert!(hand.is_empty());
    }
}
