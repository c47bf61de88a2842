//! Round and game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// State of the game as observed after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has passed the plurality threshold.
    Continue,
    /// Moves are exhausted and the top score is shared.
    Tie,
    /// Single winner, by plurality or by top score at exhaustion.
    Winner(PlayerId),
}

impl GameStatus {
    /// Whether the game has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Continue
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self == GameStatus::Winner(player)
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Winner(p) => Some(p),
            _ => None,
        }
    }

    /// Integer form used in logs: `-1` continue, `0` tie, otherwise the id.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            GameStatus::Continue => -1,
            GameStatus::Tie => 0,
            GameStatus::Winner(p) => i64::from(p.get()),
        }
    }
}

/// Result of scoring one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// The highest number was played by more than one seat. Nobody scores.
    Tie,
    /// This seat played the unique highest number and scored a point.
    Winner(PlayerId),
}

impl RoundResult {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            RoundResult::Winner(p) => Some(p),
            RoundResult::Tie => None,
        }
    }

    /// Integer form used in logs: `0` tie, otherwise the id.
    #[must_use]
    pub fn code(self) -> u32 {
        self.winner().map_or(0, PlayerId::get)
    }
}

/// Running maximum over `(seat, value)` pairs with a tie flag.
///
/// The maximum starts at zero. A strictly larger value takes the lead and
/// clears the flag; a value equal to the current maximum sets it. A run of
/// all-zero values is therefore a tie, as is an empty scan with no leader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Leader {
    leader: Option<PlayerId>,
    best: u32,
    tied: bool,
}

impl Leader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every pair in order.
    pub fn scan(entries: impl IntoIterator<Item = (PlayerId, u32)>) -> Self {
        let mut leader = Self::new();
        for (player, value) in entries {
            leader.observe(player, value);
        }
        leader
    }

    pub fn observe(&mut self, player: PlayerId, value: u32) {
        if value > self.best {
            self.best = value;
            self.leader = Some(player);
            self.tied = false;
        } else if value == self.best {
            self.tied = true;
        }
    }

    /// The unique leader, or `None` when tied or nothing led.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.tied {
            None
        } else {
            self.leader
        }
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.tied
    }
}
