//! Text notation for tile lists.
//!
//! A tile is written `a-b` with the near pip first, and a list separates
//! its tiles with single spaces. A layout is framed by its side markers:
//!
//! ```text
//! L 3-5 5-5 5-1 R
//! ```
//!
//! Marker tokens (anything without a `-`) are skipped when reading, so a
//! written layout parses back into its tiles.

use crate::core::tile::Tile;
use crate::error::{LonganaError, Result};
use crate::zones::{Layout, Side};

/// Read whitespace-separated `a-b` tokens, keeping their orientation.
///
/// ```
/// use longana::notation::parse_tiles;
///
/// let tiles = parse_tiles("L 6-6 6-2 R").unwrap();
/// assert_eq!(tiles.len(), 2);
/// assert_eq!((tiles[1].near(), tiles[1].far()), (6, 2));
/// ```
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    text.split_whitespace()
        .filter(|token| token.contains('-'))
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<Tile> {
    let bad = || LonganaError::Notation(token.to_string());
    let (near, far) = token.split_once('-').ok_or_else(bad)?;
    let near: u8 = near.parse().map_err(|_| bad())?;
    let far: u8 = far.parse().map_err(|_| bad())?;
    Tile::new(near, far)
}

/// Write tiles as `a-b` tokens separated by one space.
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a layout between its side markers, e.g. `L 6-6 6-2 R`.
pub fn format_layout(layout: &Layout) -> String {
    let tiles = format_tiles(&layout.to_vec());
    let (left, right) = (Side::Left.letter(), Side::Right.letter());
    if tiles.is_empty() {
        format!("{left} {right}")
    } else {
        format!("{left} {tiles} {right}")
    }
}
