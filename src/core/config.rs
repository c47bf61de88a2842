//! Game configuration and menu option codes.
//!
//! - `GameConfig`: runtime switches taken from the command line
//! - `MainMenuOption`, `PlayModeOption`, `BoardSizeOption`: numbered menu
//!   entries, with range predicates for the validated console reader
//!
//! Menu codes are what the player types, so they are 1-based and fixed.

use serde::{Deserialize, Serialize};

use super::player::Seat;

/// Board size used before a size has been chosen.
pub const DEFAULT_BOARD_SIZE: u32 = 9;

/// Total width of a rendered line, borders included.
pub const BOARD_WIDTH: usize = 35;

/// Padding between a border and the text inside it.
pub const INNER_PAD: usize = 2;

/// Width between the two vertical borders.
pub const INNER_WIDTH: usize = BOARD_WIDTH - INNER_PAD;

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the computer seats. `None` picks one at startup.
    pub seed: Option<u64>,

    /// Show every seat's moves to the human on turn, and never clear the
    /// screen. Useful for debugging and for piping a session to a file.
    pub reveal_board: bool,

    /// Clear the terminal before each full-screen header.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_board: false,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Fix the computer seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reveal the whole board on each human turn.
    #[must_use]
    pub fn reveal_board(mut self) -> Self {
        self.reveal_board = true;
        self
    }

    /// Never clear the terminal.
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Whether full-screen headers should clear first.
    #[must_use]
    pub fn clears_screen(&self) -> bool {
        self.clear_screen && !self.reveal_board
    }
}

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainMenuOption {
    PlayGame = 1,
    HowToPlay = 2,
    Quit = 3,
}

impl MainMenuOption {
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::PlayGame),
            2 => Some(Self::HowToPlay),
            3 => Some(Self::Quit),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_valid(code: u32) -> bool {
        Self::from_code(code).is_some()
    }
}

/// Entries of the play-mode menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayModeOption {
    PlayerVsPlayer = 1,
    PlayerVsCpu = 2,
    PlayerVsPlayerVsCpu = 3,
    ReturnToMainMenu = 4,
}

impl PlayModeOption {
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::PlayerVsPlayer),
            2 => Some(Self::PlayerVsCpu),
            3 => Some(Self::PlayerVsPlayerVsCpu),
            4 => Some(Self::ReturnToMainMenu),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_valid(code: u32) -> bool {
        Self::from_code(code).is_some()
    }

    /// Seats to add, in roster order. Empty for `ReturnToMainMenu`.
    #[must_use]
    pub fn seats(self) -> &'static [Seat] {
        match self {
            Self::PlayerVsPlayer => &[Seat::Human, Seat::Human],
            Self::PlayerVsCpu => &[Seat::Human, Seat::Computer],
            Self::PlayerVsPlayerVsCpu => &[Seat::Human, Seat::Human, Seat::Computer],
            Self::ReturnToMainMenu => &[],
        }
    }
}

/// Entries of the board-size menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSizeOption {
    Small = 1,
    Medium = 2,
    Large = 3,
    ReturnToMainMenu = 4,
}

impl BoardSizeOption {
    /// Every option in menu order.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ReturnToMainMenu];

    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| *o as u32 == code)
    }

    #[must_use]
    pub fn is_valid(code: u32) -> bool {
        Self::from_code(code).is_some()
    }

    /// Board size for this option: `option * 2 + 3`, so 5, 7 or 9.
    #[must_use]
    pub fn board_size(self) -> Option<u32> {
        match self {
            Self::ReturnToMainMenu => None,
            option => Some(option as u32 * 2 + 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_mapping() {
        assert_eq!(BoardSizeOption::Small.board_size(), Some(5));
        assert_eq!(BoardSizeOption::Medium.board_size(), Some(7));
        assert_eq!(BoardSizeOption::Large.board_size(), Some(9));
        assert_eq!(BoardSizeOption::ReturnToMainMenu.board_size(), None);
    }

    #[test]
    fn test_board_size_codes() {
        assert_eq!(BoardSizeOption::from_code(1), Some(BoardSizeOption::Small));
        assert_eq!(BoardSizeOption::from_code(4), Some(BoardSizeOption::ReturnToMainMenu));
        assert!(!BoardSizeOption::is_valid(0));
        assert!(!BoardSizeOption::is_valid(5));
    }

    #[test]
    fn test_menu_code_ranges() {
        assert!((1..=3).all(MainMenuOption::is_valid));
        assert!(!MainMenuOption::is_valid(0));
        assert!(!MainMenuOption::is_valid(4));

        assert!((1..=4).all(PlayModeOption::is_valid));
        assert!(!PlayModeOption::is_valid(5));
    }

    #[test]
    fn test_play_mode_seats() {
        assert_eq!(PlayModeOption::PlayerVsPlayer.seats(), &[Seat::Human, Seat::Human]);
        assert_eq!(PlayModeOption::PlayerVsCpu.seats(), &[Seat::Human, Seat::Computer]);
        assert_eq!(PlayModeOption::PlayerVsPlayerVsCpu.seats().len(), 3);
        assert!(PlayModeOption::ReturnToMainMenu.seats().is_empty());
    }

    #[test]
    fn test_config_builders() {
        let config = GameConfig::default().with_seed(9).without_clear();
        assert_eq!(config.seed, Some(9));
        assert!(!config.clears_screen());

        let revealed = GameConfig::default().reveal_board();
        assert!(revealed.clear_screen);
        assert!(!revealed.clears_screen());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_seed(1234);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_inner_width() {
        assert_eq!(INNER_WIDTH, 33);
    }
}
