use bjtable::{
    BetKind, Card, DealerHand, PlayerHand, RoundEngine, RoundEvent, RoundOutcome,
    RoundResult, Seat, SideBetResult, Suit, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    engine: RoundEngine,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            engine: RoundEngine::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.engine = RoundEngine::new(TableOptions::default(), seed as u64);
    }

    /// `kind` is one of `"main"`, `"perfectPairs"` or `"21+3"`.
    pub fn place_bet(&mut self, kind: &str, amount: u32) -> Result<(), JsValue> {
        let kind = parse_bet_kind(kind)?;
        self.engine
            .place_bet(kind, amount as usize)
            .map_err(js_err)
    }

    pub fn clear_bets(&mut self) -> Result<u32, JsValue> {
        self.engine
            .clear_bets()
            .map(|refunded| refunded as u32)
            .map_err(js_err)
    }

    pub fn start_round(&mut self) -> Result<(), JsValue> {
        self.engine.start_round().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.engine.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.engine.stand().map_err(js_err)
    }

    pub fn dealer_play(&mut self) -> Result<(), JsValue> {
        self.engine.dealer_play().map(|_| ()).map_err(js_err)
    }

    pub fn settle(&mut self) -> Result<JsValue, JsValue> {
        let result = self.engine.settle().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn acknowledge_round_over(&mut self) -> Result<(), JsValue> {
        self.engine.acknowledge_round_over().map_err(js_err)
    }

    /// Drains queued events. The page decides how slowly to animate them.
    pub fn take_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .engine
            .take_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let bets = self.engine.bets();
        let snapshot = Snapshot {
            state: self.engine.state().name(),
            bankroll: self.engine.bankroll() as u32,
            bets: JsBets {
                main: bets.get(BetKind::Main) as u32,
                perfect_pairs: bets.get(BetKind::PerfectPairs) as u32,
                twenty_one_plus_three: bets.get(BetKind::TwentyOnePlusThree) as u32,
            },
            player: JsPlayer::from(self.engine.player_hand()),
            dealer: JsDealer::from(self.engine.dealer_hand()),
            outcome: self.engine.outcome().map(outcome_to_str),
            side_bets: self
                .engine
                .side_bet_results()
                .iter()
                .map(JsSideBet::from)
                .collect(),
            cards_remaining: self.engine.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    state: &'static str,
    bankroll: u32,
    bets: JsBets,
    player: JsPlayer,
    dealer: JsDealer,
    outcome: Option<&'static str>,
    side_bets: Vec<JsSideBet>,
    cards_remaining: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsBets {
    main: u32,
    perfect_pairs: u32,
    #[serde(rename = "21+3")]
    twenty_one_plus_three: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPlayer {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
}

impl From<&PlayerHand> for JsPlayer {
    fn from(hand: &PlayerHand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDealer {
    /// `None` marks the concealed hole card.
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    concealed_index: Option<usize>,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let concealed_index = dealer.concealed_index();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if Some(index) == concealed_index {
                    None
                } else {
                    Some(card_to_js(*card))
                }
            })
            .collect();

        Self {
            cards,
            visible_value: dealer.visible_value(),
            concealed_index,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSideBet {
    kind: &'static str,
    stake: u32,
    payout: u32,
    win: bool,
    message: String,
}

impl From<&SideBetResult> for JsSideBet {
    fn from(result: &SideBetResult) -> Self {
        Self {
            kind: bet_kind_to_str(result.kind),
            stake: result.stake as u32,
            payout: result.payout as u32,
            win: result.is_win(),
            message: result.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRoundResult {
    outcome: &'static str,
    win: bool,
    message: String,
    stake: u32,
    payout: u32,
    net: i32,
    player_value: u8,
    dealer_value: u8,
    bankroll: u32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            win: result.outcome.is_win(),
            message: result.outcome.to_string(),
            stake: result.stake as u32,
            payout: result.payout as u32,
            net: result.net() as i32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            bankroll: result.bankroll as u32,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum JsEvent {
    Reshuffled { cards: u32 },
    BetPlaced { kind: &'static str, amount: u32, bankroll: u32 },
    BetsCleared { refunded: u32 },
    RoundStarted,
    CardDealt { seat: &'static str, card: Option<JsCard> },
    SideBetResolved(JsSideBet),
    HoleCardRevealed { card: JsCard },
    PlayerBust { value: u8 },
    RoundSettled { outcome: &'static str, payout: u32, bankroll: u32 },
    RoundCleared,
}

impl From<RoundEvent> for JsEvent {
    fn from(event: RoundEvent) -> Self {
        match event {
            RoundEvent::Reshuffled { cards } => Self::Reshuffled { cards: cards as u32 },
            RoundEvent::BetPlaced {
                kind,
                amount,
                bankroll,
            } => Self::BetPlaced {
                kind: bet_kind_to_str(kind),
                amount: amount as u32,
                bankroll: bankroll as u32,
            },
            RoundEvent::BetsCleared { refunded } => Self::BetsCleared {
                refunded: refunded as u32,
            },
            RoundEvent::RoundStarted => Self::RoundStarted,
            RoundEvent::CardDealt {
                seat,
                card,
                concealed,
            } => Self::CardDealt {
                seat: match seat {
                    Seat::Player => "player",
                    Seat::Dealer => "dealer",
                },
                card: (!concealed).then(|| card_to_js(card)),
            },
            RoundEvent::SideBetResolved(result) => Self::SideBetResolved(JsSideBet::from(&result)),
            RoundEvent::HoleCardRevealed(card) => Self::HoleCardRevealed {
                card: card_to_js(card),
            },
            RoundEvent::PlayerBust { value } => Self::PlayerBust { value },
            RoundEvent::RoundSettled {
                outcome,
                payout,
                bankroll,
            } => Self::RoundSettled {
                outcome: outcome_to_str(outcome),
                payout: payout as u32,
                bankroll: bankroll as u32,
            },
            RoundEvent::RoundCleared => Self::RoundCleared,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn parse_bet_kind(kind: &str) -> Result<BetKind, JsValue> {
    match kind {
        "main" => Ok(BetKind::Main),
        "perfectPairs" => Ok(BetKind::PerfectPairs),
        "21+3" => Ok(BetKind::TwentyOnePlusThree),
        other => Err(JsValue::from_str(&format!("unknown bet kind: {other}"))),
    }
}

fn bet_kind_to_str(kind: BetKind) -> &'static str {
    match kind {
        BetKind::Main => "main",
        BetKind::PerfectPairs => "perfectPairs",
        BetKind::TwentyOnePlusThree => "21+3",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Blackjack => "Blackjack",
        RoundOutcome::Win => "Win",
        RoundOutcome::DealerBust => "DealerBust",
        RoundOutcome::Push => "Push",
        RoundOutcome::Loss => "Loss",
        RoundOutcome::Bust => "Bust",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
