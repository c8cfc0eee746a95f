//! CLI blackjack table with Perfect Pairs and 21+3 side bets.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    BetKind, Card, DealerHand, GameState, PlayerHand, RoundEngine, RoundEvent, Seat, Suit,
    TableOptions,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut engine = RoundEngine::new(TableOptions::default(), seed);
    let minimum = engine.options().minimum_bet;

    loop {
        let money = engine.bankroll();
        if money < minimum {
            println!("You cannot cover the minimum bet of {minimum}. Game over.");
            break;
        }

        println!("\nBankroll: {money}");
        let Some(main) = prompt_usize(&format!("Main bet ({minimum}-{money}, 0 to quit): ")) else {
            break;
        };
        if main == 0 {
            println!("Goodbye.");
            break;
        }
        let Some(pairs) = prompt_usize("Perfect Pairs bet (0 to skip): ") else {
            break;
        };
        let Some(three) = prompt_usize("21+3 bet (0 to skip): ") else {
            break;
        };

        if let Err(err) = place_bets(&mut engine, &[
            (BetKind::Main, main),
            (BetKind::PerfectPairs, pairs),
            (BetKind::TwentyOnePlusThree, three),
        ]) {
            println!("Bet error: {err}");
            let _ = engine.clear_bets();
            continue;
        }

        if let Err(err) = engine.start_round() {
            println!("Deal error: {err}");
            let _ = engine.clear_bets();
            continue;
        }
        print_events(&mut engine);

        while engine.state() == GameState::PlayerTurn {
            print_table(&engine);

            let result = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => engine.hit().map(|_| ()),
                "s" | "stand" => engine.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            print_events(&mut engine);
        }

        if engine.state() == GameState::DealerTurn {
            if let Err(err) = engine.dealer_play() {
                println!("Dealer error: {err}");
            }
            print_events(&mut engine);
        }

        match engine.settle() {
            Ok(result) => {
                print_events(&mut engine);
                print_table(&engine);
                let code = if result.outcome.is_win() { "32" } else { "0" };
                println!(
                    "{}: payout {} (net {:+}), bankroll {}",
                    colorize(&result.outcome.to_string(), code),
                    result.payout,
                    result.net(),
                    result.bankroll
                );
            }
            Err(err) => println!("Settle error: {err}"),
        }

        if let Err(err) = engine.acknowledge_round_over() {
            println!("Round error: {err}");
            break;
        }
        let _ = engine.take_events();
    }
}

fn place_bets(engine: &mut RoundEngine, bets: &[(BetKind, usize)]) -> Result<(), bjtable::BetError> {
    for &(kind, amount) in bets {
        if amount > 0 {
            engine.place_bet(kind, amount)?;
        }
    }
    Ok(())
}

fn print_events(engine: &mut RoundEngine) {
    for event in engine.take_events() {
        match event {
            RoundEvent::Reshuffled { cards } => println!("Shoe reshuffled ({cards} cards)."),
            RoundEvent::CardDealt {
                seat,
                card,
                concealed,
            } => {
                let who = match seat {
                    Seat::Player => "You",
                    Seat::Dealer => "Dealer",
                };
                if concealed {
                    println!("{who}: ??");
                } else {
                    println!("{who}: {}", format_card(card));
                }
            }
            RoundEvent::SideBetResolved(result) => {
                let code = if result.is_win() { "32" } else { "90" };
                println!("{}", colorize(&result.to_string(), code));
            }
            RoundEvent::HoleCardRevealed(card) => {
                println!("Dealer reveals {}", format_card(card));
            }
            RoundEvent::PlayerBust { value } => println!("Bust with {value}."),
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(engine: &RoundEngine) {
    let remaining = engine.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");
    println!(
        "Dealer: {} (value {})",
        format_dealer(engine.dealer_hand()),
        engine.dealer_value()
    );
    println!(
        "You:    {} (value {})",
        format_hand(engine.player_hand()),
        engine.player_value()
    );
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let hidden = dealer.concealed_index();
    dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, &card)| {
            if Some(index) == hidden {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &PlayerHand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
