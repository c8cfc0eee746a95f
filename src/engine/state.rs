//! Round state types.

/// Round state.
///
/// A round walks `Betting → Dealing → SideBetResolution → PlayerTurn →
/// DealerTurn → Settlement → RoundOver` and returns to `Betting` once the
/// result is acknowledged. A natural skips straight from
/// `SideBetResolution` to `Settlement`, a bust from `PlayerTurn` to
/// `Settlement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing the initial four cards.
    Dealing,
    /// Resolving Perfect Pairs and 21+3.
    SideBetResolution,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome is known or computable and the main bet awaits payout.
    Settlement,
    /// Round has been settled; waiting for acknowledgment.
    RoundOver,
}

impl GameState {
    /// Returns a stable name for the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Betting => "Betting",
            Self::Dealing => "Dealing",
            Self::SideBetResolution => "SideBetResolution",
            Self::PlayerTurn => "PlayerTurn",
            Self::DealerTurn => "DealerTurn",
            Self::Settlement => "Settlement",
            Self::RoundOver => "RoundOver",
        }
    }
}
