//! Save/restore through `RoundSnapshot` and the text notation.

use longana::core::{PlayerId, PlayerMap, RoundConfig};
use longana::notation::{format_layout, format_tiles, parse_tiles};
use longana::round::{Round, RoundSnapshot};
use longana::strategy::Strategy;
use longana::rules::RoundResult;
use longana::LonganaError;

fn greedy_round(seed: u64) -> Round {
    Round::new(
        RoundConfig::default().with_seed(seed),
        PlayerMap::from_pair(Strategy::greedy(), Strategy::greedy()),
    )
    .unwrap()
}

#[test]
fn test_restored_round_continues_identically() {
    let mut original = greedy_round(404);
    original.prepare(3).unwrap();
    for _ in 0..4 {
        original.play_turn().unwrap();
    }
    assert!(original.result().is_none());

    let bytes = original.snapshot().to_bytes().unwrap();
    let mut restored = greedy_round(1);
    restored.restore(&RoundSnapshot::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(restored.snapshot(), original.snapshot());
    assert_eq!(format_layout(restored.layout()), format_layout(original.layout()));

    let expected = original.play_to_end().unwrap();
    assert_eq!(restored.play_to_end().unwrap(), expected);
    assert_eq!(restored.scores(), original.scores());
    assert_eq!(
        format_tiles(&restored.layout().to_vec()),
        format_tiles(&original.layout().to_vec())
    );
}

#[test]
fn test_restore_keeps_next_round_shuffle() {
    let mut original = greedy_round(12);
    original.prepare(1).unwrap();
    let snapshot = original.snapshot();

    let mut restored = greedy_round(99);
    restored.restore(&snapshot).unwrap();

    original.prepare(2).unwrap();
    restored.prepare(2).unwrap();
    assert_eq!(restored.snapshot(), original.snapshot());
}

#[test]
fn test_json_snapshot_round_trip_after_game_over() {
    let mut round = greedy_round(5);
    round.prepare(6).unwrap();
    let result = round.play_to_end().unwrap();

    let json = round.snapshot().to_json().unwrap();
    let mut restored = greedy_round(0);
    restored.restore(&RoundSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.result(), Some(result));
    assert_eq!(restored.play_turn().unwrap_err(), LonganaError::RoundOver);
}

#[test]
fn test_restore_rejects_bad_snapshots() {
    let mut round = greedy_round(8);
    round.prepare(1).unwrap();
    let good = round.snapshot();
    let active = round.active_player();

    let mut duplicated = good.clone();
    let extra = duplicated.pool[0];
    duplicated.hands[PlayerId::new(0)].push(extra);
    assert!(matches!(round.restore(&duplicated), Err(LonganaError::TileCensus(_))));

    let mut missing = good.clone();
    missing.pool.pop();
    assert!(matches!(round.restore(&missing), Err(LonganaError::TileCensus(_))));

    let mut zero = good.clone();
    zero.round_number = 0;
    assert_eq!(round.restore(&zero), Err(LonganaError::InvalidRoundNumber(0)));

    let mut stalled = good.clone();
    stalled.next_player = None;
    assert!(matches!(round.restore(&stalled), Err(LonganaError::Snapshot(_))));

    // Failed restores leave the round alone.
    assert_eq!(round.snapshot(), good);
    assert_eq!(round.active_player(), active);
}

#[test]
fn test_round_loaded_from_notation() {
    let mut round = greedy_round(0);
    round.set_round_number(2).unwrap();
    round.load_layout(parse_tiles("L 1-5 5-5 5-3 R").unwrap()).unwrap();
    round.load_hand(PlayerId::new(0), parse_tiles("3-6 0-0").unwrap());
    round.load_hand(PlayerId::new(1), parse_tiles("2-2 2-4").unwrap());
    round.load_pool(parse_tiles("4-4 0-1").unwrap());
    round.resume(PlayerId::new(1), false).unwrap();

    // Player 1 owns the right end (3) and cannot play, so draws 0-1 and passes.
    let report = round.play_turn().unwrap();
    assert!(report.record.outcome.is_pass());
    assert_eq!(format_tiles(round.hand(PlayerId::new(1)).tiles()), "2-2 2-4 0-1");

    // Player 0 owns the left end (1) but may now use the right end too.
    let report = round.play_turn().unwrap();
    assert!(!report.record.outcome.is_pass());
    assert_eq!(format_layout(round.layout()), "L 1-5 5-5 5-3 3-6 R");
}

#[test]
fn test_restore_ends_terminal_position_with_next_player() {
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let mut round = greedy_round(21);
    round.prepare(1).unwrap();
    let live = round.snapshot();

    // Player 0 out of tiles, player 1 named to move.
    let mut emptied = live.clone();
    let hand = std::mem::take(&mut emptied.hands[p0]);
    emptied.pool.extend(hand);
    emptied.next_player = Some(p1);

    let mut restored = greedy_round(0);
    restored.restore(&emptied).unwrap();
    let points = restored.hand(p1).score();
    assert_eq!(restored.result(), Some(RoundResult::Domino { winner: p0, points }));
    assert_eq!(restored.score(p0), live.scores[p0] + points);
    assert_eq!(restored.play_turn().unwrap_err(), LonganaError::RoundOver);

    // Empty boneyard and both participants passed.
    let mut blocked = live.clone();
    let pool = std::mem::take(&mut blocked.pool);
    blocked.hands[p1].extend(pool);
    blocked.passed = PlayerMap::from_pair(true, true);
    blocked.next_player = Some(p0);

    let mut restored = greedy_round(0);
    restored.restore(&blocked).unwrap();
    assert!(restored.result().is_some_and(|r| r.is_blocked()));
    assert_eq!(restored.active_player(), None);
}
