//! Side ownership.
//!
//! Each participant owns one end of the layout for the whole round. A tile
//! may go on a side when, checked in order:
//!
//! 1. it is a double (doubles play anywhere),
//! 2. the opponent passed on their last turn (both ends open up), or
//! 3. the side is the participant's own.
//!
//! Ownership is necessary but not sufficient: the layout must also accept
//! the tile at that end.

use smallvec::SmallVec;

use crate::core::tile::Tile;
use crate::zones::{Hand, Layout, Side};

/// Sides a tile may be played on, own side first.
pub type LegalSides = SmallVec<[Side; 2]>;

/// Ownership half of the placement rule.
#[must_use]
pub fn may_play_on(tile: Tile, side: Side, own_side: Side, opponent_passed: bool) -> bool {
    tile.is_double() || opponent_passed || side == own_side
}

/// Sides where `tile` is both permitted and matches the layout, own side first.
#[must_use]
pub fn legal_sides(tile: Tile, layout: &Layout, own_side: Side, opponent_passed: bool) -> LegalSides {
    [own_side, own_side.other()]
        .into_iter()
        .filter(|&side| may_play_on(tile, side, own_side, opponent_passed) && layout.is_legal_move(tile, side))
        .collect()
}

/// Whether `tile` can go on `side` under both halves of the rule.
#[must_use]
pub fn is_allowed(tile: Tile, side: Side, layout: &Layout, own_side: Side, opponent_passed: bool) -> bool {
    may_play_on(tile, side, own_side, opponent_passed) && layout.is_legal_move(tile, side)
}

/// Hand indices with at least one allowed side, in hand order.
#[must_use]
pub fn playable_indices(hand: &Hand, layout: &Layout, own_side: Side, opponent_passed: bool) -> Vec<usize> {
    hand.iter()
        .filter(|&(_, tile)| !legal_sides(tile, layout, own_side, opponent_passed).is_empty())
        .map(|(index, _)| index)
        .collect()
}
