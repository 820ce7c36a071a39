//! The line of play.
//!
//! Tiles are stored in reading order, left end first. Each stored tile's
//! `near` pip faces the left end and its `far` pip faces the right end, so
//! for adjacent tiles `a, b` the chain holds `a.far() == b.near()`.
//!
//! ```
//! use longana::core::Tile;
//! use longana::zones::{Layout, Side};
//!
//! let mut layout = Layout::new();
//! layout.place(Tile::double(2).unwrap(), Side::Left).unwrap();
//! layout.place(Tile::new(5, 2).unwrap(), Side::Right).unwrap();
//!
//! assert_eq!(layout.open_end(Side::Left).unwrap(), 2);
//! assert_eq!(layout.open_end(Side::Right).unwrap(), 5);
//! assert_eq!(layout.tiles().last().unwrap().near(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::hand::Hand;
use crate::core::tile::Tile;
use crate::error::{LonganaError, Result};

/// One of the two ends of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Parse a side letter (`L`/`R`, any case).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Side> {
        match letter.to_ascii_uppercase() {
            'L' => Some(Side::Left),
            'R' => Some(Side::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Double-ended chain of placed tiles.
///
/// Serialized as the tile list in reading order; loading checks the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Layout {
    tiles: VecDeque<Tile>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from tiles in reading order, checking the chain.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        if let Some(index) = tiles.windows(2).position(|pair| pair[0].far() != pair[1].near()) {
            return Err(LonganaError::BrokenChain { index });
        }
        Ok(Self {
            tiles: tiles.into(),
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Pip value exposed at `side`.
    pub fn open_end(&self, side: Side) -> Result<u8> {
        let end = match side {
            Side::Left => self.tiles.front().map(|t| t.near()),
            Side::Right => self.tiles.back().map(|t| t.far()),
        };
        end.ok_or(LonganaError::EmptyLayout)
    }

    /// Whether `tile` can attach at `side`. An empty layout accepts anything.
    #[must_use]
    pub fn is_legal_move(&self, tile: Tile, side: Side) -> bool {
        match self.open_end(side) {
            Ok(open) => tile.has(open),
            Err(_) => true,
        }
    }

    /// Attach `tile` at `side`, turning it so the matching pip touches the chain.
    ///
    /// The first tile placed defines both open ends. A tile that matches
    /// neither way is rejected and the layout is left unchanged.
    pub fn place(&mut self, tile: Tile, side: Side) -> Result<Tile> {
        let Ok(open) = self.open_end(side) else {
            self.tiles.push_back(tile);
            return Ok(tile);
        };

        let oriented = match side {
            // Left end: the tile's far pip must touch the chain.
            Side::Left if tile.far() == open => tile,
            Side::Left if tile.near() == open => tile.flipped(),
            // Right end: the tile's near pip must touch the chain.
            Side::Right if tile.near() == open => tile,
            Side::Right if tile.far() == open => tile.flipped(),
            _ => return Err(LonganaError::IllegalPlacement { tile, side, open }),
        };

        match side {
            Side::Left => self.tiles.push_front(oriented),
            Side::Right => self.tiles.push_back(oriented),
        }
        Ok(oriented)
    }

    /// Whether any tile in `hand` attaches at either end, ignoring side ownership.
    #[must_use]
    pub fn has_any_legal_move(&self, hand: &Hand) -> bool {
        self.is_empty()
            || hand
                .tiles()
                .iter()
                .any(|&t| Side::BOTH.iter().any(|&side| self.is_legal_move(t, side)))
    }

    /// Placed tiles in reading order.
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Placed tiles in reading order, collected.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

impl TryFrom<Vec<Tile>> for Layout {
    type Error = LonganaError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Layout> for Vec<Tile> {
    fn from(layout: Layout) -> Self {
        layout.tiles.into()
    }
}
