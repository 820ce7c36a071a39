//! Domino tiles.
//!
//! A tile is a pair of pip counts in `0..=6`, named `near` and `far`.
//! The names only gain meaning once a tile sits in the layout, where `near`
//! faces the left end and `far` faces the right end.
//!
//! ## Equality
//!
//! Equality and hashing are rotation-insensitive: `3-5` and `5-3` are the
//! same tile. Use [`Tile::near`] and [`Tile::far`] when orientation matters.
//!
//! ```
//! use longana::core::Tile;
//!
//! let tile = Tile::new(3, 5).unwrap();
//! assert_eq!(tile, tile.flipped());
//! assert_eq!(tile.flipped().near(), 5);
//! assert!(Tile::new(7, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::{LonganaError, Result};

/// Highest pip value in a double-six set.
pub const MAX_PIPS: u8 = 6;

/// Number of tiles in a double-six set.
pub const STANDARD_SET_SIZE: usize = 28;

/// A single domino tile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    near: u8,
    far: u8,
}

impl Tile {
    /// Create a tile, rejecting pip values above [`MAX_PIPS`].
    pub fn new(near: u8, far: u8) -> Result<Self> {
        for pips in [near, far] {
            if pips > MAX_PIPS {
                return Err(LonganaError::MalformedTile { pips });
            }
        }
        Ok(Self { near, far })
    }

    /// Create the double carrying `pips` on both halves.
    pub fn double(pips: u8) -> Result<Self> {
        Self::new(pips, pips)
    }

    /// Pip value on the near half.
    #[must_use]
    pub const fn near(self) -> u8 {
        self.near
    }

    /// Pip value on the far half.
    #[must_use]
    pub const fn far(self) -> u8 {
        self.far
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.near == self.far
    }

    /// Total pips on the tile; the unit of scoring.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.near as u32 + self.far as u32
    }

    /// Turn the tile around in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.near, &mut self.far);
    }

    /// Copy of the tile turned around.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Whether either half shows `pips`.
    #[must_use]
    pub const fn has(self, pips: u8) -> bool {
        self.near == pips || self.far == pips
    }

    /// Orientation-free identity: `(low, high)`.
    #[must_use]
    pub fn key(self) -> (u8, u8) {
        (self.near.min(self.far), self.near.max(self.far))
    }

    /// Every tile of a double-six set, `(a, b)` with `a <= b`, in ascending order.
    pub fn standard_set() -> impl Iterator<Item = Tile> {
        (0..=MAX_PIPS).flat_map(|low| (low..=MAX_PIPS).map(move |high| Tile { near: low, far: high }))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = LonganaError;

    fn try_from((near, far): (u8, u8)) -> Result<Self> {
        Self::new(near, far)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        (tile.near, tile.far)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.near, self.far)
    }
}
