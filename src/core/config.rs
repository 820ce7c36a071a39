//! Round configuration.
//!
//! `RoundConfig` fixes the parameters the rules leave to the host: deal size,
//! which layout end each participant owns, who opens when the engine comes
//! out of the boneyard, and the RNG seed.
//!
//! ```
//! use longana::core::{PlayerId, RoundConfig};
//! use longana::zones::Side;
//!
//! let config = RoundConfig::default().with_seed(7);
//! assert_eq!(config.hand_size, 8);
//! assert_eq!(config.own_side(PlayerId::new(0)), Side::Left);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::tile::STANDARD_SET_SIZE;
use crate::error::{LonganaError, Result};
use crate::zones::Side;

/// Default number of tiles dealt to each hand.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Parameters of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Tiles dealt to each participant at setup.
    pub hand_size: usize,

    /// Layout end each participant owns for the whole round.
    pub own_sides: PlayerMap<Side>,

    /// Participant who acts first when no hand held the engine.
    pub opening_player: PlayerId,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            own_sides: PlayerMap::from_pair(Side::Left, Side::Right),
            opening_player: PlayerId::new(0),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LonganaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_opening_player(mut self, player: PlayerId) -> Self {
        self.opening_player = player;
        self
    }

    /// Assign `side` to `player` and the other end to the opponent.
    #[must_use]
    pub fn with_own_side(mut self, player: PlayerId, side: Side) -> Self {
        self.own_sides[player] = side;
        self.own_sides[player.opponent()] = side.other();
        self
    }

    /// Side owned by `player`.
    #[must_use]
    pub fn own_side(&self, player: PlayerId) -> Side {
        self.own_sides[player]
    }

    /// Check the configuration can produce a playable round.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(LonganaError::Config("hand_size must be positive".into()));
        }
        // Both hands plus a boneyard engine must fit in one set.
        if 2 * self.hand_size + 1 > STANDARD_SET_SIZE {
            return Err(LonganaError::Config(format!(
                "hand_size {} leaves no room for the engine in a {}-tile set",
                self.hand_size, STANDARD_SET_SIZE
            )));
        }
        if self.own_sides[PlayerId::new(0)] == self.own_sides[PlayerId::new(1)] {
            return Err(LonganaError::Config(
                "participants must own opposite layout ends".into(),
            ));
        }
        Ok(())
    }
}
