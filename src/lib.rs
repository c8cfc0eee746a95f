//! A single-seat blackjack round engine with Perfect Pairs and 21+3 side
//! bets, with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns the shoe, the bankroll and
//! the current round, and walks it through betting, the initial deal,
//! side-bet resolution, the player's and dealer's turns, and settlement.
//! Rendering and pacing are left to the caller, which reads the engine's
//! queries and drains its [`RoundEvent`] queue.
//!
//! # Example
//!
//! ```
//! use bjtable::{BetKind, GameState, RoundEngine, TableOptions};
//!
//! let mut engine = RoundEngine::new(TableOptions::default(), 42);
//! engine.place_bet(BetKind::Main, 10).unwrap();
//! engine.start_round().unwrap();
//!
//! if engine.state() == GameState::PlayerTurn {
//!     engine.stand().unwrap();
//!     engine.dealer_play().unwrap();
//! }
//!
//! let result = engine.settle().unwrap();
//! assert_eq!(engine.bankroll(), 990 + result.payout);
//! engine.acknowledge_round_over().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod bet;
pub mod card;
pub mod engine;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod side_bet;

// Re-export main types
pub use bankroll::Bankroll;
pub use bet::{BetKind, Bets};
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use engine::{GameState, RoundEngine};
pub use error::{
    ActionError, BetError, ClearError, DealError, DealerError, LedgerError, ReshuffleError,
    SettleError, ShoeError,
};
pub use event::{RoundEvent, Seat};
pub use hand::{DealerHand, PlayerHand, hand_value};
pub use options::{RoundingMode, TableOptions};
pub use result::{RoundOutcome, RoundResult};
pub use shoe::Shoe;
pub use side_bet::{PairHand, SideBetHand, SideBetResult, ThreeCardHand};
