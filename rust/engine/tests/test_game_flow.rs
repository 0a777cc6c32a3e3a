use felt_engine::engine::Engine;
use felt_engine::errors::{ActionError, GameError};
use felt_engine::events::{GameEvent, MemorySink};
use felt_engine::game::{HandState, Street};
use felt_engine::player::{Action, Player};

fn heads_up(seed: u64) -> Engine {
    let mut engine = Engine::with_seed(10, 20, seed);
    engine
        .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 1_000, false)
        .expect("hand starts");
    engine
}

fn three_way(seed: u64) -> Engine {
    let mut engine = Engine::with_seed(10, 20, seed);
    engine
        .start_new_hand(&["p0", "p1", "p2"], &["A", "B", "C"], 1_000, false)
        .expect("hand starts");
    engine
}

#[test]
fn acting_before_any_hand_is_an_error() {
    let mut engine = Engine::new(10, 20);
    let err = engine.process_action("p1", Action::Check).unwrap_err();
    assert_eq!(err, GameError::Action(ActionError::NoActiveHand));
}

#[test]
fn blinds_and_first_to_act_heads_up() {
    let engine = heads_up(3);
    let hand = engine.hand().unwrap();
    // Dealer (seat 0) posts the small blind and acts first preflop.
    assert_eq!(hand.dealer_index(), 0);
    assert_eq!(hand.pot(), 30);
    assert_eq!(hand.current_bet(), 20);
    assert_eq!(hand.minimum_raise(), 10);
    assert_eq!(hand.current_player_id(), Some("p1"));
    assert_eq!(hand.player("p1").unwrap().current_bet(), 10);
    assert_eq!(hand.player("p2").unwrap().current_bet(), 20);
    for p in hand.players() {
        assert_eq!(p.hole_cards().len(), 2);
    }
}

#[test]
fn unknown_player_and_turn_order_are_enforced() {
    let mut engine = heads_up(4);
    let err = engine.process_action("nobody", Action::Call).unwrap_err();
    assert!(matches!(
        err,
        GameError::Action(ActionError::UnknownPlayer { .. })
    ));
    // p2 is the big blind; p1 acts first.
    let err = engine.process_action("p2", Action::Check).unwrap_err();
    assert!(matches!(
        err,
        GameError::Action(ActionError::NotYourTurn { .. })
    ));
    // Failed attempts must not have moved any chips.
    assert_eq!(engine.hand().unwrap().pot(), 30);
}

#[test]
fn checked_down_hand_reaches_showdown_and_conserves_chips() {
    let mut engine = heads_up(5);

    engine.process_action("p1", Action::Call).unwrap();
    // Big blind has the option even though the bets match.
    assert_eq!(engine.hand().unwrap().street(), Street::Preflop);
    assert_eq!(engine.current_player_id(), Some("p2"));
    engine.process_action("p2", Action::Check).unwrap();

    assert_eq!(engine.hand().unwrap().street(), Street::Flop);
    assert_eq!(engine.hand().unwrap().community_cards().len(), 3);
    assert_eq!(engine.hand().unwrap().pot(), 40);
    // Postflop the first seat after the dealer acts first.
    assert_eq!(engine.current_player_id(), Some("p2"));
    engine.process_action("p2", Action::Check).unwrap();
    engine.process_action("p1", Action::Check).unwrap();

    assert_eq!(engine.hand().unwrap().street(), Street::Turn);
    assert_eq!(engine.hand().unwrap().community_cards().len(), 4);
    engine.process_action("p2", Action::Check).unwrap();
    engine.process_action("p1", Action::Check).unwrap();

    assert_eq!(engine.hand().unwrap().street(), Street::River);
    assert_eq!(engine.hand().unwrap().community_cards().len(), 5);
    engine.process_action("p2", Action::Check).unwrap();
    let outcome = engine.process_action("p1", Action::Check).unwrap();

    assert!(outcome.hand_complete);
    let hand = engine.hand().unwrap();
    assert_eq!(hand.street(), Street::Showdown);
    assert_eq!(hand.pot(), 0);
    let summary = hand.summary().unwrap();
    assert_eq!(summary.pot_distributed, 40);
    assert!(!summary.winners.is_empty());

    let total: u32 = summary.players.iter().map(|p| p.final_chips).sum();
    assert_eq!(total, 2_000);
    let net_sum: i64 = summary.players.iter().map(|p| p.net_change).sum();
    assert_eq!(net_sum, 0);
    // Either one player takes the 40-chip pot or a tie splits it.
    let mut stacks: Vec<u32> = summary.players.iter().map(|p| p.final_chips).collect();
    stacks.sort_unstable();
    assert!(stacks == vec![980, 1_020] || stacks == vec![1_000, 1_000]);

    // The settled hand accepts no further actions.
    let err = engine.process_action("p1", Action::Check).unwrap_err();
    assert_eq!(err, GameError::Action(ActionError::NoActiveHand));
}

#[test]
fn folding_ends_the_hand_immediately() {
    let mut engine = heads_up(6);
    // p1 open-folds the small blind.
    let outcome = engine.process_action("p1", Action::Fold).unwrap();
    assert!(outcome.hand_complete);

    let hand = engine.hand().unwrap();
    let summary = hand.summary().unwrap();
    assert_eq!(summary.winners, vec!["p2".to_string()]);
    assert_eq!(summary.pot_distributed, 30);
    // The board is still run out for observers.
    assert_eq!(summary.community_cards.len(), 5);
    assert_eq!(hand.player("p1").unwrap().chips(), 990);
    assert_eq!(hand.player("p2").unwrap().chips(), 1_010);
}

#[test]
fn event_stream_covers_the_whole_hand() {
    let mut engine = Engine::with_seed(10, 20, 11);
    let sink = MemorySink::new();
    engine.add_sink(Box::new(sink.clone()));
    engine
        .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 1_000, false)
        .unwrap();
    engine.process_action("p1", Action::Fold).unwrap();

    let events = sink.snapshot();
    assert!(matches!(events[0], GameEvent::HandStarted { .. }));
    assert!(matches!(
        events[1],
        GameEvent::ActionApplied {
            action: Action::Fold,
            ..
        }
    ));
    assert!(matches!(
        events.last().unwrap(),
        GameEvent::HandSettled { .. }
    ));
}

#[test]
fn minimum_raise_grows_with_each_raise() {
    let mut engine = three_way(7);
    // Seats: dealer p0, small blind p1, big blind p2; p0 opens.
    assert_eq!(engine.current_player_id(), Some("p0"));

    engine.process_action("p0", Action::Raise(40)).unwrap();
    {
        let hand = engine.hand().unwrap();
        assert_eq!(hand.current_bet(), 40);
        assert_eq!(hand.minimum_raise(), 20);
    }

    // A raise to 50 is short of 40 + 20 and p1 can afford more.
    let err = engine.process_action("p1", Action::Raise(50)).unwrap_err();
    assert_eq!(
        err,
        GameError::Action(ActionError::RaiseBelowMinimum { to: 50, minimum: 60 })
    );
    // The rejected raise moved nothing.
    assert_eq!(engine.hand().unwrap().pot(), 70);
    assert_eq!(engine.current_player_id(), Some("p1"));

    engine.process_action("p1", Action::Raise(60)).unwrap();
    let hand = engine.hand().unwrap();
    assert_eq!(hand.current_bet(), 60);
    assert_eq!(hand.minimum_raise(), 20);
}

#[test]
fn a_raise_reopens_a_checked_round() {
    let mut engine = three_way(8);
    engine.process_action("p0", Action::Call).unwrap();
    engine.process_action("p1", Action::Call).unwrap();
    engine.process_action("p2", Action::Check).unwrap();
    assert_eq!(engine.hand().unwrap().street(), Street::Flop);
    assert_eq!(engine.hand().unwrap().pot(), 60);

    // Flop action starts left of the dealer.
    assert_eq!(engine.current_player_id(), Some("p1"));
    engine.process_action("p1", Action::Check).unwrap();
    engine.process_action("p2", Action::Check).unwrap();
    // Both already acted; this raise makes them owe action again.
    engine.process_action("p0", Action::Raise(20)).unwrap();
    assert_eq!(engine.hand().unwrap().street(), Street::Flop);
    assert_eq!(engine.current_player_id(), Some("p1"));

    engine.process_action("p1", Action::Call).unwrap();
    engine.process_action("p2", Action::Fold).unwrap();
    let hand = engine.hand().unwrap();
    assert_eq!(hand.street(), Street::Turn);
    assert_eq!(hand.pot(), 100);
    assert_eq!(
        hand.players().iter().filter(|p| p.is_active()).count(),
        2
    );
}

#[test]
fn dealer_rotates_and_chips_carry_across_hands() {
    let mut engine = heads_up(9);
    assert_eq!(engine.hand_number(), 1);
    engine.process_action("p1", Action::Fold).unwrap();

    engine
        .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 1_000, true)
        .unwrap();
    let hand = engine.hand().unwrap();
    assert_eq!(engine.hand_number(), 2);
    assert_eq!(hand.dealer_index(), 1);
    // p2 dealt this time, so p2 posts the small blind and opens.
    assert_eq!(hand.current_player_id(), Some("p2"));
    // Stacks carried over from hand one.
    assert_eq!(hand.player("p1").unwrap().chips(), 990 - 20);
    assert_eq!(hand.player("p2").unwrap().chips(), 1_010 - 10);
}

#[test]
fn fresh_stacks_when_chips_are_not_preserved() {
    let mut engine = heads_up(10);
    engine.process_action("p1", Action::Fold).unwrap();
    engine
        .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 500, false)
        .unwrap();
    let hand = engine.hand().unwrap();
    let total: u32 = hand.players().iter().map(|p| p.chips()).sum::<u32>() + hand.pot();
    assert_eq!(total, 1_000);
}

#[test]
fn short_call_goes_all_in_for_the_remaining_stack() {
    let players = vec![
        Player::new("short", "Shorty", 30, 0),
        Player::new("deep", "Deep", 200, 1),
    ];
    let (mut hand, _events) = HandState::new(players, 0, 10, 20, 1, 77).unwrap();

    // Dealer/small blind is the short stack and opens.
    assert_eq!(hand.current_player_id(), Some("short"));
    hand.process_action("short", Action::Call).unwrap();
    hand.process_action("deep", Action::Raise(120)).unwrap();
    assert_eq!(hand.current_bet(), 120);

    // 100 to call with only 10 behind: an automatic all-in for 10.
    let outcome = hand.process_action("short", Action::Call).unwrap();
    assert_eq!(outcome.paid, 10);
    assert!(outcome.all_in);
    assert!(outcome.hand_complete);

    let summary = hand.summary().unwrap();
    assert_eq!(summary.pot_distributed, 150);
    let total: u32 = summary.players.iter().map(|p| p.final_chips).sum();
    assert_eq!(total, 230);
    // The short stack contested only the 60-chip main pot: lose it, win
    // it, or split it.
    let short = summary.players.iter().find(|p| p.id == "short").unwrap();
    assert!([-30, 0, 30].contains(&short.net_change));
}

#[test]
fn roster_validation() {
    let mut engine = Engine::with_seed(10, 20, 12);
    assert_eq!(
        engine
            .start_new_hand(&["only"], &["Solo"], 1_000, false)
            .unwrap_err(),
        GameError::NotEnoughPlayers
    );
    assert!(matches!(
        engine
            .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 0, false)
            .unwrap_err(),
        GameError::BustedPlayer { .. }
    ));
}
