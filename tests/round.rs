//! Round engine integration tests.

use bjtable::card::{ACE, KING};
use bjtable::{
    ActionError, BetError, BetKind, Card, ClearError, DealError, DealerError, GameState,
    PairHand, RoundEngine, RoundEvent, RoundOutcome, Seat, SettleError, Shoe, SideBetHand, Suit,
    TableOptions, ThreeCardHand,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Cards kept under the rigged draws so the shoe stays above the refill
/// threshold.
const FILLER: usize = 20;

fn rigged_engine(draws: &[Card]) -> RoundEngine {
    rigged_engine_with(TableOptions::default(), draws)
}

fn rigged_engine_with(options: TableOptions, draws: &[Card]) -> RoundEngine {
    let mut stacked = draws.to_vec();
    stacked.extend(std::iter::repeat_n(card(Suit::Clubs, 2), FILLER));
    let shoe = Shoe::new(options.decks, options.reshuffle_threshold, 7).with_draws(&stacked);
    RoundEngine::with_shoe(options, shoe)
}

fn start_with_main_bet(engine: &mut RoundEngine, amount: usize) {
    engine.place_bet(BetKind::Main, amount).unwrap();
    engine.start_round().unwrap();
}

#[test]
fn stand_on_19_against_dealer_drawing_to_21() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Diamonds, 5), // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Spades, 10),  // dealer draw
    ]);
    assert_eq!(engine.bankroll(), 1000);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.bankroll(), 990);
    assert_eq!(engine.state(), GameState::PlayerTurn);
    assert_eq!(engine.player_value(), 19);
    assert_eq!(engine.dealer_value(), 6);
    assert_eq!(engine.dealer_hand().concealed_index(), Some(0));

    engine.stand().unwrap();
    assert_eq!(engine.state(), GameState::DealerTurn);

    let drawn = engine.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Spades, 10)]);
    assert_eq!(engine.state(), GameState::Settlement);
    assert_eq!(engine.dealer_value(), 21);
    assert_eq!(engine.dealer_hand().concealed_index(), None);

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Loss);
    assert_eq!(result.payout, 0);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.net(), -10);
    assert_eq!(engine.bankroll(), 990);
    assert_eq!(engine.state(), GameState::RoundOver);
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 8),
        card(Suit::Clubs, 6),
        card(Suit::Spades, KING),
    ]);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerBust);
    assert_eq!(result.payout, 20);
    assert_eq!(engine.bankroll(), 1010);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, ACE),
        card(Suit::Spades, 8),
        card(Suit::Clubs, 6),
    ]);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();

    let drawn = engine.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert!(engine.dealer_hand().is_soft());

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(engine.bankroll(), 1010);
}

#[test]
fn equal_totals_push_and_return_the_stake() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 8),
        card(Suit::Clubs, 8),
    ]);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Push);
    assert_eq!(result.payout, 10);
    assert_eq!(engine.bankroll(), 1000);
}

#[test]
fn natural_skips_both_turns_and_pays_three_to_two() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, ACE),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, KING),
        card(Suit::Clubs, 7),
    ]);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.state(), GameState::Settlement);
    assert_eq!(engine.outcome(), Some(RoundOutcome::Blackjack));
    assert_eq!(engine.dealer_hand().concealed_index(), None);
    assert_eq!(engine.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(engine.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(engine.dealer_play().unwrap_err(), DealerError::InvalidState);

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Blackjack);
    assert_eq!(result.payout, 25);
    assert_eq!(engine.bankroll(), 1015);
}

#[test]
fn natural_against_dealer_21_is_a_push() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, ACE),
        card(Suit::Diamonds, ACE),
        card(Suit::Spades, KING),
        card(Suit::Clubs, KING),
    ]);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.outcome(), Some(RoundOutcome::Push));

    let result = engine.settle().unwrap();
    assert_eq!(result.payout, 10);
    assert_eq!(engine.bankroll(), 1000);
}

#[test]
fn bust_goes_straight_to_settlement() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 7),
        card(Suit::Hearts, 3),    // hit to 19
        card(Suit::Spades, KING), // hit to 29
    ]);

    start_with_main_bet(&mut engine, 10);

    assert_eq!(engine.hit().unwrap(), card(Suit::Hearts, 3));
    assert_eq!(engine.state(), GameState::PlayerTurn);

    engine.hit().unwrap();
    assert_eq!(engine.state(), GameState::Settlement);
    assert_eq!(engine.outcome(), Some(RoundOutcome::Bust));
    assert_eq!(engine.dealer_play().unwrap_err(), DealerError::InvalidState);

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Bust);
    assert_eq!(result.payout, 0);
    assert_eq!(result.dealer_value, 16);
    assert_eq!(engine.bankroll(), 990);
}

#[test]
fn hit_during_dealer_turn_is_rejected() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 8),
    ]);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();

    assert_eq!(engine.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(engine.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(engine.state(), GameState::DealerTurn);
    assert_eq!(engine.player_hand().len(), 2);
}

#[test]
fn bet_rejections_leave_the_bankroll_alone() {
    let options = TableOptions::default().with_starting_bankroll(50);
    let mut engine = RoundEngine::new(options, 1);

    assert_eq!(
        engine.place_bet(BetKind::Main, 51).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(engine.bankroll(), 50);
    assert_eq!(engine.bet(BetKind::Main), 0);

    assert_eq!(
        engine.place_bet(BetKind::Main, 0).unwrap_err(),
        BetError::ZeroBet
    );

    engine.place_bet(BetKind::Main, 30).unwrap();
    assert_eq!(
        engine.place_bet(BetKind::PerfectPairs, 25).unwrap_err(),
        BetError::InsufficientFunds
    );
    engine.place_bet(BetKind::PerfectPairs, 20).unwrap();
    assert_eq!(engine.bankroll(), 0);
    assert_eq!(engine.bets().total(), 50);
}

#[test]
fn bets_are_only_accepted_while_betting() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 8),
    ]);
    start_with_main_bet(&mut engine, 10);

    assert_eq!(
        engine.place_bet(BetKind::Main, 10).unwrap_err(),
        BetError::InvalidState
    );
    // State is checked before the amount.
    assert_eq!(
        engine.place_bet(BetKind::Main, 0).unwrap_err(),
        BetError::InvalidState
    );
    assert_eq!(engine.clear_bets().unwrap_err(), BetError::InvalidState);
    assert_eq!(engine.start_round().unwrap_err(), DealError::InvalidState);
    assert_eq!(engine.bankroll(), 990);
}

#[test]
fn round_needs_the_minimum_main_bet() {
    let mut engine = RoundEngine::new(TableOptions::default(), 3);

    engine.place_bet(BetKind::Main, 5).unwrap();
    engine.place_bet(BetKind::PerfectPairs, 50).unwrap();
    assert_eq!(
        engine.start_round().unwrap_err(),
        DealError::BelowMinimumBet { minimum: 10 }
    );
    assert_eq!(engine.state(), GameState::Betting);
    assert!(engine.player_hand().is_empty());

    engine.place_bet(BetKind::Main, 5).unwrap();
    engine.start_round().unwrap();
    assert_ne!(engine.state(), GameState::Betting);
}

#[test]
fn clear_bets_refunds_every_wager() {
    let mut engine = RoundEngine::new(TableOptions::default(), 4);
    engine.place_bet(BetKind::Main, 25).unwrap();
    engine.place_bet(BetKind::TwentyOnePlusThree, 5).unwrap();
    assert_eq!(engine.bankroll(), 970);

    assert_eq!(engine.clear_bets().unwrap(), 30);
    assert_eq!(engine.bankroll(), 1000);
    assert!(engine.bets().is_empty());
}

#[test]
fn side_bets_pay_immediately_regardless_of_the_main_hand() {
    let mut engine = rigged_engine(&[
        card(Suit::Clubs, 7),     // player
        card(Suit::Hearts, 9),    // dealer hole
        card(Suit::Clubs, 7),     // player
        card(Suit::Clubs, 7),     // dealer up
        card(Suit::Spades, KING), // hit to 24
    ]);

    engine.place_bet(BetKind::Main, 10).unwrap();
    engine.place_bet(BetKind::PerfectPairs, 5).unwrap();
    engine.place_bet(BetKind::TwentyOnePlusThree, 2).unwrap();
    assert_eq!(engine.bankroll(), 983);

    engine.start_round().unwrap();
    let side_bets = engine.side_bet_results().to_vec();
    assert_eq!(side_bets.len(), 2);
    assert_eq!(side_bets[0].hand, Some(SideBetHand::Pair(PairHand::Perfect)));
    assert_eq!(side_bets[0].payout, 125);
    assert_eq!(
        side_bets[1].hand,
        Some(SideBetHand::ThreeCard(ThreeCardHand::SuitedTrips))
    );
    assert_eq!(side_bets[1].payout, 200);
    assert_eq!(engine.bankroll(), 1308);

    engine.hit().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Bust);
    assert_eq!(result.side_bets, side_bets);
    assert_eq!(result.total_wagered, 17);
    assert_eq!(result.net(), 308);
    assert_eq!(engine.bankroll(), 1308);
}

#[test]
fn side_bets_use_the_up_card_not_the_hole_card() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 6), // hole would complete a straight flush
        card(Suit::Hearts, 5),
        card(Suit::Spades, KING),
    ]);

    engine.place_bet(BetKind::Main, 10).unwrap();
    engine.place_bet(BetKind::TwentyOnePlusThree, 10).unwrap();
    engine.start_round().unwrap();

    let side_bets = engine.side_bet_results();
    assert_eq!(side_bets.len(), 1);
    assert_eq!(side_bets[0].hand, None);
    assert_eq!(side_bets[0].payout, 0);
    assert_eq!(engine.bankroll(), 980);
}

#[test]
fn losing_side_bets_forfeit_their_stake() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 8),
    ]);

    engine.place_bet(BetKind::Main, 10).unwrap();
    engine.place_bet(BetKind::PerfectPairs, 10).unwrap();
    engine.start_round().unwrap();
    engine.stand().unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.payout, 20);
    assert_eq!(engine.bankroll(), 1000);
}

#[test]
fn events_describe_the_deal_in_order() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 5),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 6),
        card(Suit::Spades, 10),
    ]);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(
        engine.take_events(),
        vec![
            RoundEvent::BetPlaced {
                kind: BetKind::Main,
                amount: 10,
                bankroll: 990,
            },
            RoundEvent::RoundStarted,
            RoundEvent::CardDealt {
                seat: Seat::Player,
                card: card(Suit::Hearts, 10),
                concealed: false,
            },
            RoundEvent::CardDealt {
                seat: Seat::Dealer,
                card: card(Suit::Diamonds, 5),
                concealed: true,
            },
            RoundEvent::CardDealt {
                seat: Seat::Player,
                card: card(Suit::Spades, 9),
                concealed: false,
            },
            RoundEvent::CardDealt {
                seat: Seat::Dealer,
                card: card(Suit::Clubs, 6),
                concealed: false,
            },
        ]
    );
    assert!(engine.take_events().is_empty());

    engine.stand().unwrap();
    engine.dealer_play().unwrap();
    engine.settle().unwrap();
    assert_eq!(
        engine.take_events(),
        vec![
            RoundEvent::HoleCardRevealed(card(Suit::Diamonds, 5)),
            RoundEvent::CardDealt {
                seat: Seat::Dealer,
                card: card(Suit::Spades, 10),
                concealed: false,
            },
            RoundEvent::RoundSettled {
                outcome: RoundOutcome::Loss,
                payout: 0,
                bankroll: 990,
            },
        ]
    );
}

#[test]
fn acknowledging_clears_the_round_but_not_the_bankroll() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, ACE),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, KING),
        card(Suit::Clubs, 7),
    ]);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(
        engine.acknowledge_round_over().unwrap_err(),
        ClearError::InvalidState
    );

    engine.settle().unwrap();
    assert_eq!(engine.settle().unwrap_err(), SettleError::InvalidState);

    engine.acknowledge_round_over().unwrap();
    assert_eq!(engine.state(), GameState::Betting);
    assert!(engine.player_hand().is_empty());
    assert!(engine.dealer_hand().is_empty());
    assert!(engine.bets().is_empty());
    assert!(engine.side_bet_results().is_empty());
    assert_eq!(engine.outcome(), None);
    assert_eq!(engine.bankroll(), 1015);
    assert_eq!(
        engine.last_result().map(|result| result.outcome),
        Some(RoundOutcome::Blackjack)
    );
}

#[test]
fn low_shoe_is_rebuilt_before_the_first_card() {
    let options = TableOptions::default();
    let shoe = Shoe::new(options.decks, options.reshuffle_threshold, 11)
        .with_draws(&[card(Suit::Clubs, 2); 19]);
    let mut engine = RoundEngine::with_shoe(options, shoe);
    assert_eq!(engine.cards_remaining(), 19);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.cards_remaining(), 312 - 4);

    let events = engine.take_events();
    assert_eq!(events[1], RoundEvent::Reshuffled { cards: 312 });
    assert_eq!(events[2], RoundEvent::RoundStarted);
}

#[test]
fn shoe_at_threshold_is_not_rebuilt() {
    let mut engine = rigged_engine(&[]);
    assert_eq!(engine.cards_remaining(), FILLER);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.cards_remaining(), FILLER - 4);
    assert!(
        !engine
            .take_events()
            .iter()
            .any(|event| matches!(event, RoundEvent::Reshuffled { .. }))
    );
}

#[test]
fn shoe_running_dry_on_a_hit_is_rebuilt() {
    let options = TableOptions::default().with_reshuffle_threshold(0);
    let shoe = Shoe::new(options.decks, options.reshuffle_threshold, 5).with_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 3),
        card(Suit::Clubs, 8),
    ]);
    let mut engine = RoundEngine::with_shoe(options, shoe);

    start_with_main_bet(&mut engine, 10);
    assert_eq!(engine.cards_remaining(), 0);
    let _ = engine.take_events();

    engine.hit().unwrap();
    assert_eq!(engine.state(), GameState::PlayerTurn);
    assert_eq!(engine.player_hand().len(), 3);
    assert_eq!(engine.cards_remaining(), 311);
    assert_eq!(
        engine.take_events()[0],
        RoundEvent::Reshuffled { cards: 312 }
    );
}

#[test]
fn shoe_running_dry_during_dealer_play_does_not_strand_the_round() {
    let options = TableOptions::default().with_reshuffle_threshold(0);
    let shoe = Shoe::new(options.decks, options.reshuffle_threshold, 5).with_draws(&[
        card(Suit::Hearts, 10), // player
        card(Suit::Diamonds, 2), // dealer hole
        card(Suit::Spades, 9),  // player
        card(Suit::Clubs, 3),   // dealer up
        card(Suit::Clubs, 2),   // dealer draw, last card in the shoe
    ]);
    let mut engine = RoundEngine::with_shoe(options, shoe);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();
    let _ = engine.take_events();

    let drawn = engine.dealer_play().unwrap();
    assert_eq!(drawn[0], card(Suit::Clubs, 2));
    assert!(drawn.len() >= 2);
    assert_eq!(engine.state(), GameState::Settlement);
    assert!(engine.dealer_hand().value() >= 17);
    assert!(
        engine
            .take_events()
            .contains(&RoundEvent::Reshuffled { cards: 312 })
    );

    engine.settle().unwrap();
    engine.acknowledge_round_over().unwrap();
    assert_eq!(engine.state(), GameState::Betting);
}

#[test]
fn dealer_draws_through_a_soft_total() {
    let mut engine = rigged_engine(&[
        card(Suit::Hearts, 10),    // player
        card(Suit::Diamonds, ACE), // dealer hole
        card(Suit::Spades, 10),    // player
        card(Suit::Clubs, 5),      // dealer up
        card(Suit::Diamonds, 10),  // dealer draw: soft 16 becomes hard 16
        card(Suit::Hearts, 3),     // dealer draw
    ]);

    start_with_main_bet(&mut engine, 10);
    engine.stand().unwrap();

    let drawn = engine.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Diamonds, 10), card(Suit::Hearts, 3)]);
    assert_eq!(engine.dealer_value(), 19);
    assert!(!engine.dealer_hand().is_soft());

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.payout, 20);
    assert_eq!(engine.bankroll(), 1010);
}

#[test]
fn huge_bankroll_win_saturates() {
    let options = TableOptions::default().with_starting_bankroll(usize::MAX);
    let mut engine = rigged_engine_with(options, &[
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 10),
        card(Suit::Clubs, 7),
    ]);

    start_with_main_bet(&mut engine, usize::MAX);
    assert_eq!(engine.bankroll(), 0);
    engine.stand().unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.payout, usize::MAX);
    assert_eq!(engine.bankroll(), usize::MAX);
}

#[test]
fn same_seed_replays_the_same_round() {
    let play = |seed| {
        let mut engine = RoundEngine::new(TableOptions::default(), seed);
        engine.place_bet(BetKind::Main, 10).unwrap();
        engine.start_round().unwrap();
        if engine.state() == GameState::PlayerTurn {
            engine.stand().unwrap();
            engine.dealer_play().unwrap();
        }
        engine.settle().unwrap()
    };

    assert_eq!(play(99), play(99));
}
