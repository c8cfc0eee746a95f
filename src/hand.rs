//! Hand evaluation and the player and dealer hands.

use alloc::vec::Vec;

use crate::card::Card;

/// Computes the blackjack total of `cards`.
///
/// Aces start at 11 and are downgraded to 1, one at a time, only while the
/// total exceeds 21. An empty slice is worth 0.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.weight());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHand {
    cards: Vec<Card>,
}

impl PlayerHand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the first two cards, if dealt.
    #[must_use]
    pub fn initial_pair(&self) -> Option<(Card, Card)> {
        match self.cards.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card. It stays concealed
/// until [`reveal_hole`](Self::reveal_hole) is called at the start of the
/// dealer's turn; the second card is the up card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is still face down.
    concealed: bool,
}

impl DealerHand {
    /// Index of the hole card.
    pub const HOLE_INDEX: usize = 0;

    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            concealed: false,
        }
    }

    /// Deals the hole card face down.
    pub fn add_hole_card(&mut self, card: Card) {
        self.cards.push(card);
        self.concealed = true;
    }

    /// Adds a face-up card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a concealed hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hole card.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.cards.get(Self::HOLE_INDEX).copied()
    }

    /// Returns the face-up card dealt with the initial deal.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    /// Returns the index of the concealed card, if one is still face down.
    #[must_use]
    pub fn concealed_index(&self) -> Option<usize> {
        (self.concealed && !self.cards.is_empty()).then_some(Self::HOLE_INDEX)
    }

    /// Returns whether the hole card is still face down.
    #[must_use]
    pub const fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Turns the hole card face up. Returns the card if this call revealed it.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        if self.concealed {
            self.concealed = false;
            self.hole_card()
        } else {
            None
        }
    }

    /// Calculates the value a player can see: face-up cards only while the
    /// hole card is concealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.concealed {
            hand_value(self.cards.get(Self::HOLE_INDEX + 1..).unwrap_or_default())
        } else {
            self.value()
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.concealed = false;
    }
}
