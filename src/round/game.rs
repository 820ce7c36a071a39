//! Round state machine.
//!
//! ```text
//! Setup ──prepare()──▶ AwaitingTurn(p) ──play_turn()──▶ AwaitingTurn(p') | Over(result)
//! ```
//!
//! A `Round` owns the layout, the boneyard, both hands and both strategies.
//! Cumulative scores live here too and survive `prepare`, so a tournament
//! layer can reuse one `Round` for every round it plays.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::snapshot::RoundSnapshot;
use crate::core::config::RoundConfig;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::tile::{Tile, STANDARD_SET_SIZE};
use crate::core::turn::{TurnOutcome, TurnRecord};
use crate::error::{LonganaError, Result};
use crate::rules::engine::{self, RoundResult};
use crate::strategy::{Strategy, TurnContext, TurnStrategy};
use crate::zones::{Hand, Layout, Side, TilePool};

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Not yet dealt.
    Setup,
    /// Waiting for this participant to act.
    AwaitingTurn(PlayerId),
    /// Finished.
    Over(RoundResult),
}

/// What one call to [`Round::play_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub record: TurnRecord,
    /// Set when this turn ended the round.
    pub result: Option<RoundResult>,
}

/// One round of Longana between two participants.
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    rng: GameRng,
    round_number: u32,
    phase: RoundPhase,
    turn_number: u32,

    layout: Layout,
    pool: TilePool,
    hands: PlayerMap<Hand>,
    strategies: PlayerMap<Strategy>,

    /// Whether each participant's most recent turn was a pass.
    passed: PlayerMap<bool>,
    /// Cumulative scores, including earlier rounds.
    scores: PlayerMap<u32>,
    history: Vector<TurnRecord>,
}

impl Round {
    /// Create an unprepared round. `strategies` are indexed by `PlayerId`.
    pub fn new(config: RoundConfig, strategies: PlayerMap<Strategy>) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            config,
            rng,
            round_number: 0,
            phase: RoundPhase::Setup,
            turn_number: 0,
            layout: Layout::new(),
            pool: TilePool::new(),
            hands: PlayerMap::with_value(Hand::new()),
            strategies,
            passed: PlayerMap::with_value(false),
            scores: PlayerMap::with_value(0),
            history: Vector::new(),
        })
    }

    /// Start from existing cumulative scores, e.g. carried over by a tournament.
    #[must_use]
    pub fn with_scores(mut self, scores: PlayerMap<u32>) -> Self {
        self.scores = scores;
        self
    }

    // === Setup ===

    /// Deal a fresh round and place its engine.
    ///
    /// The boneyard is rebuilt and shuffled, each hand receives
    /// `hand_size` tiles, and the holder of the engine double plays it at
    /// once, handing the first real turn to the opponent. When neither hand
    /// holds the engine it is pulled straight from the boneyard and
    /// `opening_player` acts first. If the opening move empties the
    /// holder's hand the round is over before any turn is taken.
    pub fn prepare(&mut self, round_number: u32) -> Result<()> {
        let engine = engine::engine_tile(round_number)?;

        self.round_number = round_number;
        self.turn_number = 0;
        self.history = Vector::new();
        self.passed = PlayerMap::with_value(false);
        self.layout.clear();
        self.hands.iter_mut().for_each(|(_, hand)| hand.clear());

        self.pool = TilePool::standard();
        self.pool.shuffle(&mut self.rng);

        for _ in 0..self.config.hand_size {
            for player in PlayerId::ALL {
                let tile = self.pool.draw().ok_or(LonganaError::EmptyPool)?;
                self.hands[player].add(tile);
            }
        }

        let holder = PlayerId::ALL
            .into_iter()
            .find(|&p| self.hands[p].find_and_remove(engine));

        let next = match holder {
            Some(player) => {
                self.layout.place(engine, Side::Left)?;
                info!(round = round_number, %engine, %player, "engine played from hand");
                player.opponent()
            }
            None if self.pool.remove_specific(engine) => {
                self.layout.place(engine, Side::Left)?;
                info!(round = round_number, %engine, "engine pulled from boneyard");
                self.config.opening_player
            }
            None => {
                warn!(round = round_number, %engine, "engine missing from the set, opening on an empty layout");
                self.config.opening_player
            }
        };

        // A one-tile hand holding the engine is emptied by the opening move.
        self.evaluate(next);
        Ok(())
    }

    // === Turns ===

    /// Let the active participant take exactly one turn.
    ///
    /// Errors from the strategy (an abandoned interactive selection) leave
    /// the round on the same participant with nothing applied.
    pub fn play_turn(&mut self) -> Result<TurnReport> {
        let player = match self.phase {
            RoundPhase::AwaitingTurn(player) => player,
            RoundPhase::Setup => return Err(LonganaError::NotPrepared),
            RoundPhase::Over(_) => return Err(LonganaError::RoundOver),
        };
        let opponent = player.opponent();

        let mut ctx = TurnContext {
            player,
            hand: &mut self.hands[player],
            layout: &mut self.layout,
            pool: &mut self.pool,
            own_side: self.config.own_side(player),
            opponent_passed: self.passed[opponent],
        };
        let outcome = self.strategies[player].take_turn(&mut ctx)?;

        self.passed[player] = outcome.is_pass();
        self.turn_number += 1;
        let record = TurnRecord::new(player, self.turn_number, outcome);
        self.history.push_back(record);
        log_outcome(player, self.strategies[player].name(), &outcome);

        let result = self.evaluate(opponent);
        Ok(TurnReport { record, result })
    }

    /// Play turns until the round ends.
    pub fn play_to_end(&mut self) -> Result<RoundResult> {
        loop {
            if let RoundPhase::Over(result) = self.phase {
                return Ok(result);
            }
            self.play_turn()?;
        }
    }

    /// Apply termination rules; otherwise hand the turn to `next`.
    fn evaluate(&mut self, next: PlayerId) -> Option<RoundResult> {
        match engine::settle(&self.hands, self.pool.is_empty(), &self.passed) {
            Some(result) => {
                for (player, delta) in result.score_delta().iter() {
                    self.scores[player] += delta;
                }
                info!(
                    round = self.round_number,
                    winner = ?result.winner(),
                    points = result.points(),
                    blocked = result.is_blocked(),
                    "round over"
                );
                self.phase = RoundPhase::Over(result);
                Some(result)
            }
            None => {
                self.phase = RoundPhase::AwaitingTurn(next);
                None
            }
        }
    }

    // === Views ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Engine pip value for the current round.
    pub fn engine_value(&self) -> Result<u8> {
        engine::engine_value(self.round_number)
    }

    /// Participant whose turn it is, if the round is in progress.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            RoundPhase::AwaitingTurn(player) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            RoundPhase::Over(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn strategy(&self, player: PlayerId) -> &Strategy {
        &self.strategies[player]
    }

    /// Whether `player`'s most recent turn was a pass.
    #[must_use]
    pub fn passed(&self, player: PlayerId) -> bool {
        self.passed[player]
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Turns taken this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Loading ===

    /// Replace a hand with externally supplied tiles.
    pub fn load_hand(&mut self, player: PlayerId, tiles: Vec<Tile>) {
        self.hands[player].load(tiles);
    }

    /// Replace the layout with tiles in reading order. The chain must hold.
    pub fn load_layout(&mut self, tiles: Vec<Tile>) -> Result<()> {
        self.layout = Layout::from_tiles(tiles)?;
        Ok(())
    }

    /// Replace the boneyard. The last tile is drawn first.
    pub fn load_pool(&mut self, tiles: Vec<Tile>) {
        self.pool.load(tiles);
    }

    pub fn set_scores(&mut self, scores: PlayerMap<u32>) {
        self.scores = scores;
    }

    /// Set the round number without dealing, for loaded rounds.
    pub fn set_round_number(&mut self, round_number: u32) -> Result<()> {
        engine::engine_value(round_number)?;
        self.round_number = round_number;
        Ok(())
    }

    /// Continue a loaded round with `next` to act.
    ///
    /// `previous_passed` is the pass flag of the participant who moved last
    /// (the opponent of `next`); `next`'s own flag is cleared. If the loaded
    /// position is already terminal the round ends immediately and scores.
    pub fn resume(&mut self, next: PlayerId, previous_passed: bool) -> Result<Option<RoundResult>> {
        engine::engine_value(self.round_number)?;
        self.passed[next] = false;
        self.passed[next.opponent()] = previous_passed;
        self.turn_number = 0;
        self.history = Vector::new();
        Ok(self.evaluate(next))
    }

    /// Check that boneyard, hands and layout hold each double-six tile exactly once.
    pub fn check_conservation(&self) -> Result<()> {
        let tiles: Vec<Tile> = self
            .pool
            .tiles()
            .iter()
            .copied()
            .chain(self.hands.iter().flat_map(|(_, h)| h.tiles().iter().copied()))
            .chain(self.layout.tiles())
            .collect();

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = tiles.iter().find(|&&t| !seen.insert(t)) {
            return Err(LonganaError::TileCensus(format!("{duplicate} appears more than once")));
        }
        if tiles.len() != STANDARD_SET_SIZE {
            return Err(LonganaError::TileCensus(format!(
                "found {} tiles, expected {}",
                tiles.len(),
                STANDARD_SET_SIZE
            )));
        }
        Ok(())
    }

    // === Snapshots ===

    /// Capture everything needed to continue this round later.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_number: self.round_number,
            layout: self.layout.to_vec(),
            pool: self.pool.tiles().to_vec(),
            hands: self.hands.map(|h| h.tiles().to_vec()),
            scores: self.scores.clone(),
            passed: self.passed.clone(),
            next_player: self.active_player(),
            rng: self.rng.state(),
        }
    }

    /// Continue from a snapshot. Strategies and configuration are kept.
    ///
    /// The snapshot is validated before anything is replaced: the layout
    /// chain must hold and the tiles must form exactly one double-six set.
    /// A snapshot naming a next player whose position is already terminal
    /// ends the round at once and scores it, as `resume` does.
    pub fn restore(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        engine::engine_value(snapshot.round_number)?;
        let layout = Layout::from_tiles(snapshot.layout.clone())?;

        let mut staged = Round {
            config: self.config.clone(),
            rng: GameRng::from_state(&snapshot.rng),
            round_number: snapshot.round_number,
            phase: RoundPhase::Setup,
            turn_number: 0,
            layout,
            pool: TilePool::from_tiles(snapshot.pool.clone()),
            hands: snapshot.hands.map(|tiles| Hand::from_tiles(tiles.clone())),
            strategies: PlayerMap::from_pair(Strategy::greedy(), Strategy::greedy()),
            passed: snapshot.passed.clone(),
            scores: snapshot.scores.clone(),
            history: Vector::new(),
        };
        staged.check_conservation()?;

        match snapshot.next_player {
            // Same as `resume`: a position that is already over ends and scores now.
            Some(next) => {
                staged.evaluate(next);
            }
            // Scores in the snapshot already include this round's result.
            None => match engine::settle(&staged.hands, staged.pool.is_empty(), &staged.passed) {
                Some(result) => staged.phase = RoundPhase::Over(result),
                None => {
                    return Err(LonganaError::Snapshot(
                        "snapshot has no next player but the round is not over".into(),
                    ))
                }
            },
        }

        std::mem::swap(&mut staged.strategies, &mut self.strategies);
        *self = staged;
        debug!(round = self.round_number, phase = ?self.phase, "round restored");
        Ok(())
    }
}

fn log_outcome(player: PlayerId, strategy: &str, outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Placed { tile, side, drew } => {
            debug!(%player, strategy, %tile, %side, drew, "turn: placed");
        }
        TurnOutcome::Passed { drew } => {
            debug!(%player, strategy, drew = ?drew, "turn: passed");
        }
    }
}
