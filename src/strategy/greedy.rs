//! Greedy strategy for the algorithmic participant.
//!
//! Scans the hand once in index order:
//! 1. the first tile that fits the own side is played there at once;
//! 2. otherwise the first tile that fits the other side (a double, or any
//!    tile after an opponent pass) is played there.
//!
//! With nothing playable it draws one tile and plays it own side first,
//! or passes. No lookahead.

use tracing::debug;

use super::{TurnContext, TurnStrategy};
use crate::core::turn::TurnOutcome;
use crate::error::Result;
use crate::zones::Side;

/// Fixed-priority strategy. Stateless; the owned side comes from the context.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Move this strategy would make from the current hand, if any.
    #[must_use]
    pub fn choose(&self, ctx: &TurnContext<'_>) -> Option<(usize, Side)> {
        let own = ctx.own_side;
        let mut fallback = None;

        for (index, tile) in ctx.hand.iter() {
            if ctx.allows(tile, own) {
                return Some((index, own));
            }
            if fallback.is_none() && ctx.allows(tile, own.other()) {
                fallback = Some((index, own.other()));
            }
        }

        fallback
    }
}

impl TurnStrategy for GreedyStrategy {
    fn take_turn(&mut self, ctx: &mut TurnContext<'_>) -> Result<TurnOutcome> {
        if let Some((index, side)) = self.choose(ctx) {
            let tile = ctx.play(index, side)?;
            return Ok(TurnOutcome::Placed {
                tile,
                side,
                drew: false,
            });
        }

        let Some(tile) = ctx.draw() else {
            debug!(player = %ctx.player, "no move and boneyard empty, passing");
            return Ok(TurnOutcome::Passed { drew: None });
        };
        let side = ctx.legal_sides(tile).first().copied();
        ctx.settle_drawn(tile, side)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerId;
    use crate::core::tile::Tile;
    use crate::zones::{Hand, Layout, TilePool};

    fn tile(near: u8, far: u8) -> Tile {
        Tile::new(near, far).unwrap()
    }

    struct Table {
        hand: Hand,
        layout: Layout,
        pool: TilePool,
    }

    impl Table {
        fn new(hand: Vec<Tile>, layout: Vec<Tile>, pool: Vec<Tile>) -> Self {
            Self {
                hand: Hand::from_tiles(hand),
                layout: Layout::from_tiles(layout).unwrap(),
                pool: TilePool::from_tiles(pool),
            }
        }

        fn turn(&mut self, own_side: Side, opponent_passed: bool) -> TurnOutcome {
            let mut ctx = TurnContext {
                player: PlayerId::new(1),
                hand: &mut self.hand,
                layout: &mut self.layout,
                pool: &mut self.pool,
                own_side,
                opponent_passed,
            };
            GreedyStrategy::new().take_turn(&mut ctx).unwrap()
        }
    }

    #[test]
    fn test_prefers_own_side_over_earlier_tile() {
        // Left end 3, right end 4. Index 0 fits only the left, index 2 the right.
        let mut table = Table::new(
            vec![tile(3, 1), tile(0, 0), tile(4, 5)],
            vec![tile(3, 4)],
            vec![],
        );

        let outcome = table.turn(Side::Right, true);

        assert_eq!(outcome.placed().map(|(t, s)| (t.key(), s)), Some(((4, 5), Side::Right)));
        assert_eq!(table.hand.tiles(), &[tile(3, 1), tile(0, 0)]);
    }

    #[test]
    fn test_falls_back_to_other_side_double() {
        let mut table = Table::new(vec![tile(0, 1), tile(3, 3)], vec![tile(3, 4)], vec![]);

        let outcome = table.turn(Side::Right, false);

        assert_eq!(outcome.placed().map(|(t, s)| (t.key(), s)), Some(((3, 3), Side::Left)));
    }

    #[test]
    fn test_ignores_other_side_non_double_without_pass() {
        let mut table = Table::new(vec![tile(3, 1)], vec![tile(3, 4)], vec![]);

        let outcome = table.turn(Side::Right, false);

        assert_eq!(outcome, TurnOutcome::Passed { drew: None });
        assert_eq!(table.hand.len(), 1);
    }

    #[test]
    fn test_draws_and_plays_fitting_tile() {
        let mut table = Table::new(vec![tile(0, 1)], vec![tile(3, 4)], vec![tile(2, 2), tile(4, 6)]);

        let outcome = table.turn(Side::Right, false);

        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                tile: tile(4, 6),
                side: Side::Right,
                drew: true
            }
        );
        assert_eq!(table.layout.open_end(Side::Right).unwrap(), 6);
        assert_eq!(table.pool.len(), 1);
        assert_eq!(table.hand.len(), 1);
    }

    #[test]
    fn test_draws_once_then_passes() {
        let mut table = Table::new(vec![tile(0, 1)], vec![tile(3, 4)], vec![tile(2, 2), tile(5, 6)]);

        let outcome = table.turn(Side::Right, false);

        assert_eq!(outcome, TurnOutcome::Passed { drew: Some(tile(5, 6)) });
        assert_eq!(table.hand.len(), 2);
        assert_eq!(table.pool.len(), 1);
    }

    #[test]
    fn test_drawn_tile_uses_other_side_after_pass() {
        let mut table = Table::new(vec![tile(0, 1)], vec![tile(3, 4)], vec![tile(3, 5)]);

        let outcome = table.turn(Side::Right, true);

        assert_eq!(outcome.placed().map(|(_, s)| s), Some(Side::Left));
        assert_eq!(table.layout.open_end(Side::Left).unwrap(), 5);
    }
}
