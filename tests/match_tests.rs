//! Full matches driven through the `Match` lifecycle with seeded dice.

use std::sync::Arc;

use snakes_ladders::core::{BoardDefinition, Dice, GameOptions, PlayerId, FINAL_SQUARE};
use snakes_ladders::session::{Match, MatchPhase, SessionError};

fn classic() -> Arc<BoardDefinition> {
    Arc::new(
        BoardDefinition::new("classic")
            .with_transitions([(4, 14), (9, 31), (21, 42), (28, 84), (51, 67), (72, 91), (80, 99)])
            .with_transitions([(17, 7), (54, 34), (62, 19), (64, 60), (87, 36), (93, 73), (95, 75), (98, 79)]),
    )
}

/// Play until someone wins or `max_rolls` is hit. Returns rolls taken.
fn play_out(m: &mut Match, dice: &mut Dice, max_rolls: usize) -> usize {
    let mut rolls = 0;
    while m.phase() == MatchPhase::InProgress && rolls < max_rolls {
        let id = m.game().turn().unwrap().id();
        m.play_roll(id, dice.roll()).unwrap();
        rolls += 1;
    }
    rolls
}

#[test]
fn test_game_to_completion() {
    for player_count in [1i64, 2, 4, 8] {
        let mut m = Match::new(classic(), PlayerId::new(1), GameOptions::default());
        for i in 1..=player_count {
            m.join(PlayerId::new(i), format!("bot-{}", i)).unwrap();
        }
        m.begin().unwrap();

        let mut dice = Dice::new(42);
        play_out(&mut m, &mut dice, 100_000);

        assert_eq!(m.phase(), MatchPhase::Finished, "{} players", player_count);
        let winner = m.game().winner().expect("someone reached the final square");
        assert_eq!(winner.position(), FINAL_SQUARE);
        let finishers = m.game().players().filter(|p| p.position() == FINAL_SQUARE).count();
        assert_eq!(finishers, 1);
    }
}

#[test]
fn test_deterministic_replay() {
    let run = |seed: u64| {
        let mut m = Match::new(classic(), PlayerId::new(1), GameOptions::new().with_bonus_turn_on_max(true));
        for i in 1..=3 {
            m.join(PlayerId::new(i), format!("bot-{}", i)).unwrap();
        }
        m.begin().unwrap();
        let mut dice = Dice::new(seed);
        let rolls = play_out(&mut m, &mut dice, 100_000);
        let positions: Vec<_> = m.game().players().map(|p| p.position()).collect();
        (rolls, positions)
    };

    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_late_join_during_play() {
    let mut m = Match::new(classic(), PlayerId::new(1), GameOptions::default());
    m.join(PlayerId::new(1), "first").unwrap();
    m.join(PlayerId::new(2), "second").unwrap();
    m.begin().unwrap();
    m.play_roll(PlayerId::new(1), 2).unwrap();

    m.join(PlayerId::new(3), "late").unwrap();
    m.play_roll(PlayerId::new(2), 2).unwrap();
    assert_eq!(m.game().turn().unwrap().name(), "late");
}

#[test]
fn test_abort_stops_play() {
    let mut m = Match::new(classic(), PlayerId::new(1), GameOptions::default());
    m.join(PlayerId::new(2), "bob").unwrap();
    m.begin().unwrap();
    m.abort(PlayerId::new(1)).unwrap();
    assert_eq!(m.play_roll(PlayerId::new(2), 3).unwrap_err(), SessionError::Finished);
    assert_eq!(m.abort(PlayerId::new(1)).unwrap_err(), SessionError::Finished);
}
