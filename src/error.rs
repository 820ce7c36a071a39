//! Error type shared by every part of the round engine.
//!
//! Nothing in the engine panics on bad input. Callers (console, persistence,
//! tournament layers) receive a `LonganaError` and decide how to present it.

use crate::core::player::PlayerId;
use crate::core::tile::Tile;
use crate::zones::Side;

/// Errors reported by the round engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LonganaError {
    /// A pip value outside `0..=6` was supplied.
    #[error("pip value {pips} is outside 0..=6")]
    MalformedTile { pips: u8 },

    /// The participant picked an option that is not currently playable.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A hand index outside `0..len`.
    #[error("hand index {index} is out of range for a hand of {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },

    /// A draw was required but the boneyard has no tiles left.
    #[error("boneyard is empty")]
    EmptyPool,

    /// The tile does not match the open end of the chosen side.
    #[error("{tile} does not match open end {open} on the {side} side")]
    IllegalPlacement { tile: Tile, side: Side, open: u8 },

    /// An open end was requested from an empty layout.
    #[error("layout is empty")]
    EmptyLayout,

    /// Two adjacent layout tiles do not share a pip value.
    #[error("layout chain is broken between positions {index} and {next}", next = index + 1)]
    BrokenChain { index: usize },

    /// Pool, hands and layout together are not exactly one double-six set.
    #[error("tile census failed: {0}")]
    TileCensus(String),

    /// A token in a tile list could not be read.
    #[error("unreadable tile token `{0}`")]
    Notation(String),

    /// Round numbers start at 1.
    #[error("round number must be at least 1, got {0}")]
    InvalidRoundNumber(u32),

    /// A turn was requested before `prepare` or `restore`.
    #[error("round has not been prepared")]
    NotPrepared,

    /// A turn was requested after the round ended.
    #[error("round is already over")]
    RoundOver,

    /// The interactive participant stopped supplying input.
    #[error("{0} abandoned the selection")]
    SelectionAborted(PlayerId),

    /// Configuration rejected by `RoundConfig::validate`.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LonganaError>;
