//! Turn strategies.
//!
//! A strategy decides one turn for one participant: which tile to play and
//! where, or to draw and then play or pass. The set of strategies is closed:
//!
//! - `GreedyStrategy`: fixed priority, own side first, no lookahead
//! - `InteractiveStrategy`: asks a `Prompt` supplied by the host UI
//!
//! Both act through a `TurnContext`, which only exposes all-or-nothing
//! mutations (a whole placement or a whole draw).

pub mod greedy;
pub mod interactive;

pub use greedy::GreedyStrategy;
pub use interactive::{InteractiveStrategy, Prompt, ScriptedPrompt};

use tracing::debug;

use crate::core::player::PlayerId;
use crate::core::tile::Tile;
use crate::core::turn::TurnOutcome;
use crate::error::{LonganaError, Result};
use crate::rules::ownership::{self, LegalSides};
use crate::zones::{Hand, Layout, Side, TilePool};

/// Everything a strategy may touch during one turn.
pub struct TurnContext<'a> {
    /// Participant taking the turn.
    pub player: PlayerId,
    pub hand: &'a mut Hand,
    pub layout: &'a mut Layout,
    pub pool: &'a mut TilePool,
    /// Layout end this participant owns.
    pub own_side: Side,
    /// Whether the opponent's last turn was a pass.
    pub opponent_passed: bool,
}

impl TurnContext<'_> {
    /// Sides `tile` may go on right now, own side first.
    #[must_use]
    pub fn legal_sides(&self, tile: Tile) -> LegalSides {
        ownership::legal_sides(tile, self.layout, self.own_side, self.opponent_passed)
    }

    /// Whether `tile` may go on `side` right now.
    #[must_use]
    pub fn allows(&self, tile: Tile, side: Side) -> bool {
        ownership::is_allowed(tile, side, self.layout, self.own_side, self.opponent_passed)
    }

    /// Hand indices with at least one legal side.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        ownership::playable_indices(self.hand, self.layout, self.own_side, self.opponent_passed)
    }

    /// Move the tile at `index` onto `side`.
    ///
    /// Returns the tile as oriented in the layout. Any rejection leaves the
    /// hand and layout unchanged.
    pub fn play(&mut self, index: usize, side: Side) -> Result<Tile> {
        let tile = self.hand.get(index)?;
        if !ownership::may_play_on(tile, side, self.own_side, self.opponent_passed) {
            return Err(LonganaError::InvalidSelection(format!(
                "{tile} may not be played on the {side} side this turn"
            )));
        }
        if !self.layout.is_legal_move(tile, side) {
            let open = self.layout.open_end(side)?;
            return Err(LonganaError::IllegalPlacement { tile, side, open });
        }

        let tile = self.hand.take(index)?;
        let placed = self.layout.place(tile, side)?;
        debug!(player = %self.player, tile = %placed, %side, "tile placed");
        Ok(placed)
    }

    /// Draw the top boneyard tile into the hand.
    pub fn draw(&mut self) -> Option<Tile> {
        let tile = self.pool.draw()?;
        self.hand.add(tile);
        debug!(player = %self.player, %tile, remaining = self.pool.len(), "drew from boneyard");
        Some(tile)
    }

    /// Finish a turn that drew `tile`: place it on `side`, or pass when there is none.
    ///
    /// The drawn tile is always the last one in the hand.
    fn settle_drawn(&mut self, tile: Tile, side: Option<Side>) -> Result<TurnOutcome> {
        let Some(side) = side else {
            debug!(player = %self.player, %tile, "drawn tile unplayable, passing");
            return Ok(TurnOutcome::Passed { drew: Some(tile) });
        };
        let index = self.hand.len() - 1;
        let placed = self.play(index, side)?;
        Ok(TurnOutcome::Placed {
            tile: placed,
            side,
            drew: true,
        })
    }
}

/// Capability shared by every participant kind.
pub trait TurnStrategy {
    /// Play exactly one turn.
    ///
    /// An `Err` means the turn was not taken and nothing was mutated,
    /// except that a completed draw stays in the hand.
    fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> Result<TurnOutcome>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// The closed set of participant strategies.
#[derive(Debug)]
pub enum Strategy {
    Interactive(InteractiveStrategy),
    Greedy(GreedyStrategy),
}

impl Strategy {
    #[must_use]
    pub fn greedy() -> Self {
        Strategy::Greedy(GreedyStrategy::new())
    }

    /// Interactive participant fed by `prompt`.
    pub fn interactive(prompt: impl Prompt + 'static) -> Self {
        Strategy::Interactive(InteractiveStrategy::new(prompt))
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Strategy::Interactive(_))
    }
}

impl TurnStrategy for Strategy {
    fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> Result<TurnOutcome> {
        match self {
            Strategy::Interactive(s) => s.take_turn(ctx),
            Strategy::Greedy(s) => s.take_turn(ctx),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Strategy::Interactive(s) => s.name(),
            Strategy::Greedy(s) => s.name(),
        }
    }
}
