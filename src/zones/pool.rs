//! The boneyard: tiles not yet dealt or drawn.
//!
//! The pool is an ordered stack whose top is the end of the backing `Vec`.
//! Order only matters for which tile `draw` hands out next.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::tile::Tile;

/// Shared reserve of undealt tiles.
///
/// ## Usage
///
/// ```
/// use longana::core::{GameRng, Tile};
/// use longana::zones::TilePool;
///
/// let mut pool = TilePool::standard();
/// pool.shuffle(&mut GameRng::new(1));
/// assert_eq!(pool.len(), 28);
///
/// assert!(pool.remove_specific(Tile::double(6).unwrap()));
/// assert!(!pool.remove_specific(Tile::double(6).unwrap()));
/// assert_eq!(pool.len(), 27);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A full, unshuffled double-six set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiles: Tile::standard_set().collect(),
        }
    }

    /// Pool holding exactly `tiles`; the last element is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Uniformly permute the remaining tiles.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Take the top tile. `None` when the pool is exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Remove the first tile equal to `target`, ignoring orientation.
    ///
    /// Returns whether a tile was removed.
    pub fn remove_specific(&mut self, target: Tile) -> bool {
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

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
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
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_pool_covers_every_pair_once() {
        let pool = TilePool::standard();
        assert_eq!(pool.len(), 28);

        let keys: FxHashSet<_> = pool.tiles().iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), 28);
        for low in 0..=6u8 {
            for high in low..=6u8 {
                assert!(keys.contains(&(low, high)));
            }
        }
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let mut pool = TilePool::standard();
        pool.shuffle(&mut GameRng::new(42));

        let mut keys: Vec<_> = pool.tiles().iter().map(|t| t.key()).collect();
        keys.sort();
        let expected: Vec<_> = Tile::standard_set().map(|t| t.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut pool = TilePool::standard();
        let mut drawn = FxHashSet::default();

        while let Some(tile) = pool.draw() {
            assert!(drawn.insert(tile));
        }

        assert!(pool.is_empty());
        assert_eq!(drawn.len(), 28);
        assert_eq!(pool.draw(), None);
    }

    #[test]
    fn test_draw_takes_top() {
        let a = Tile::new(1, 2).unwrap();
        let b = Tile::new(3, 4).unwrap();
        let mut pool = TilePool::from_tiles(vec![a, b]);

        assert_eq!(pool.draw(), Some(b));
        assert_eq!(pool.draw(), Some(a));
    }

    #[test]
    fn test_remove_specific_ignores_orientation() {
        let mut pool = TilePool::standard();
        assert!(pool.remove_specific(Tile::new(5, 2).unwrap()));
        assert!(!pool.contains(Tile::new(2, 5).unwrap()));
        assert_eq!(pool.len(), 27);
    }

    #[test]
    fn test_remove_specific_missing_leaves_pool_unchanged() {
        let mut pool = TilePool::from_tiles(vec![Tile::new(0, 0).unwrap()]);
        let before = pool.clone();
        assert!(!pool.remove_specific(Tile::new(6, 6).unwrap()));
        assert_eq!(pool, before);
    }
}
