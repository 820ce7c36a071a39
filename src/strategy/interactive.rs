//! Interactive strategy for the human participant.
//!
//! The strategy owns the rules of the exchange; the host UI only supplies
//! raw answers through [`Prompt`]. Answers that name an unplayable tile or
//! an unknown side are reported back through [`Prompt::rejected`] and asked
//! again. They never consume the turn.
//!
//! When nothing in hand is playable the participant draws once. A drawn
//! tile that fits must be played; the prompt is only asked for a side when
//! it fits both ends.

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::{TurnContext, TurnStrategy};
use crate::core::tile::Tile;
use crate::core::turn::TurnOutcome;
use crate::error::{LonganaError, Result};
use crate::zones::{Hand, Side};

/// Source of answers for an interactive participant.
///
/// Returning `None` means no more input is coming (closed stdin, a quit
/// command). The round is left exactly as it was before the turn.
pub trait Prompt {
    /// 0-based hand index to play. `playable` lists the indices that are legal.
    fn select_tile(&mut self, hand: &Hand, playable: &[usize]) -> Option<usize>;

    /// Side letter (`L` or `R`) for a tile that fits both `sides`.
    fn select_side(&mut self, tile: Tile, sides: &[Side]) -> Option<char>;

    /// A previous answer was refused.
    fn rejected(&mut self, _error: &LonganaError) {}

    /// The participant had no move and drew `tile`.
    fn drew(&mut self, _tile: Tile) {}
}

/// Strategy driven by a [`Prompt`].
pub struct InteractiveStrategy {
    prompt: Box<dyn Prompt>,
}

impl std::fmt::Debug for InteractiveStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractiveStrategy").finish_non_exhaustive()
    }
}

impl InteractiveStrategy {
    pub fn new(prompt: impl Prompt + 'static) -> Self {
        Self {
            prompt: Box::new(prompt),
        }
    }

    fn reject(&mut self, error: LonganaError) {
        warn!(%error, "selection rejected");
        self.prompt.rejected(&error);
    }

    /// Ask until the answer names one of `sides`. `None` when input stops.
    fn ask_side(&mut self, tile: Tile, sides: &[Side]) -> Option<Side> {
        loop {
            let letter = self.prompt.select_side(tile, sides)?;
            match Side::from_letter(letter) {
                Some(side) if sides.contains(&side) => return Some(side),
                _ => self.reject(LonganaError::InvalidSelection(format!(
                    "`{letter}` is not a side {tile} can be played on"
                ))),
            }
        }
    }

    /// Ask until the answer names a playable tile. `None` when input stops.
    fn ask_tile(&mut self, hand: &Hand, playable: &[usize]) -> Option<usize> {
        loop {
            let index = self.prompt.select_tile(hand, playable)?;
            if playable.contains(&index) {
                return Some(index);
            }
            let error = match hand.get(index) {
                Ok(tile) => LonganaError::InvalidSelection(format!("{tile} cannot be played this turn")),
                Err(out_of_range) => out_of_range,
            };
            self.reject(error);
        }
    }
}

impl TurnStrategy for InteractiveStrategy {
    fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> Result<TurnOutcome> {
        let playable = ctx.playable_indices();

        if playable.is_empty() {
            let Some(tile) = ctx.draw() else {
                debug!(player = %ctx.player, "no move and boneyard empty, passing");
                return Ok(TurnOutcome::Passed { drew: None });
            };
            self.prompt.drew(tile);

            let sides = ctx.legal_sides(tile);
            let side = match sides.as_slice() {
                [] => None,
                [only] => Some(*only),
                // The draw already happened; without an answer the tile goes on the own side.
                both => Some(self.ask_side(tile, both).unwrap_or(ctx.own_side)),
            };
            return ctx.settle_drawn(tile, side);
        }

        let aborted = LonganaError::SelectionAborted(ctx.player);
        let index = self.ask_tile(ctx.hand, &playable).ok_or_else(|| aborted.clone())?;
        let tile = ctx.hand.get(index)?;
        let sides = ctx.legal_sides(tile);
        let side = match sides.as_slice() {
            [only] => *only,
            both => self.ask_side(tile, both).ok_or(aborted)?,
        };

        let placed = ctx.play(index, side)?;
        Ok(TurnOutcome::Placed {
            tile: placed,
            side,
            drew: false,
        })
    }

    fn name(&self) -> &'static str {
        "interactive"
    }
}

/// Queue-backed [`Prompt`] for tests, replays and scripted play.
///
/// ```
/// use longana::strategy::{Prompt, ScriptedPrompt};
/// use longana::zones::Hand;
///
/// let mut prompt = ScriptedPrompt::new([2, 0], ['r']);
/// assert_eq!(prompt.select_tile(&Hand::new(), &[]), Some(2));
/// assert_eq!(prompt.select_tile(&Hand::new(), &[]), Some(0));
/// assert_eq!(prompt.select_tile(&Hand::new(), &[]), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    tiles: VecDeque<usize>,
    sides: VecDeque<char>,
    rejections: Vec<LonganaError>,
    drawn: Vec<Tile>,
}

impl ScriptedPrompt {
    pub fn new(tiles: impl IntoIterator<Item = usize>, sides: impl IntoIterator<Item = char>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            sides: sides.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answers refused so far, oldest first.
    #[must_use]
    pub fn rejections(&self) -> &[LonganaError] {
        &self.rejections
    }

    /// Tiles reported as drawn.
    #[must_use]
    pub fn drawn(&self) -> &[Tile] {
        &self.drawn
    }
}

impl Prompt for ScriptedPrompt {
    fn select_tile(&mut self, _hand: &Hand, _playable: &[usize]) -> Option<usize> {
        self.tiles.pop_front()
    }

    fn select_side(&mut self, _tile: Tile, _sides: &[Side]) -> Option<char> {
        self.sides.pop_front()
    }

    fn rejected(&mut self, error: &LonganaError) {
        self.rejections.push(error.clone());
    }

    fn drew(&mut self, tile: Tile) {
        self.drawn.push(tile);
    }
}
