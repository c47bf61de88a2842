//! The board: seat roster, shared board size, round and game scoring.
//!
//! ## Lifecycle
//!
//! - **Empty**: no seats (after `new` or `reset`)
//! - **Configured**: seats added with `add_player`, pools still empty
//! - **InProgress**: `initialize` has filled every pool
//! - **Finished**: `check_game_winner` reports `Tie` or `Winner`
//!
//! Finished is observed, not stored. `reset` returns to Empty from anywhere.
//!
//! ## Example
//!
//! ```
//! use numbers_royale::core::{Board, GameRng, PlayerId, Seat};
//! use numbers_royale::rules::{GameStatus, RoundResult};
//!
//! let mut board = Board::new(GameRng::new(42));
//! board.add_player(Seat::Human);
//! board.add_player(Seat::Human);
//! board.initialize(Some(5));
//!
//! board.player_at_mut(0).unwrap().play_move(5);
//! board.player_at_mut(1).unwrap().play_move(3);
//!
//! assert_eq!(board.check_round_winner(), RoundResult::Winner(PlayerId::new(1)));
//! assert_eq!(board.check_game_winner(), GameStatus::Continue);
//! ```

use tracing::{debug, info, instrument};

use super::config::DEFAULT_BOARD_SIZE;
use super::player::{Player, PlayerId, Seat};
use super::rng::GameRng;
use crate::rules::{GameStatus, Leader, RoundResult};

/// Seat roster and scoring state for one game.
///
/// The board is the sole owner of its players; seats hold no reference back.
#[derive(Clone, Debug)]
pub struct Board {
    players: Vec<Player>,
    board_size: u32,
    human_count: usize,
    rng: GameRng,
}

impl Board {
    /// Create an empty board with the default size.
    ///
    /// `rng` is the source computer seats fork their own streams from.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_size(rng, DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board with a specific size.
    #[must_use]
    pub fn with_size(rng: GameRng, board_size: u32) -> Self {
        Self {
            players: Vec::new(),
            board_size,
            human_count: 0,
            rng,
        }
    }

    /// Append a seat. Returns its id.
    ///
    /// The seat's pool stays empty until the next [`Board::initialize`].
    pub fn add_player(&mut self, seat: Seat) -> PlayerId {
        let id = PlayerId::from_index(self.players.len());
        let player = match seat {
            Seat::Human => {
                self.human_count += 1;
                Player::human(id)
            }
            Seat::Computer => Player::computer(id, self.rng.fork()),
        };
        debug!(player = %id, ?seat, "seat added");
        self.players.push(player);
        id
    }

    /// Start a game: adopt `board_size` if it is positive, then give every
    /// seat its id (`1..=N` in roster order) and a full pool.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub fn initialize(&mut self, board_size: Option<u32>) {
        if let Some(size) = board_size.filter(|&s| s > 0) {
            self.board_size = size;
        }
        for (index, player) in self.players.iter_mut().enumerate() {
            player.initialize(PlayerId::from_index(index), self.board_size);
        }
        info!(board_size = self.board_size, "board initialized");
    }

    /// Remove all seats.
    pub fn reset(&mut self) {
        self.players.clear();
        self.human_count = 0;
        debug!("board reset");
    }

    /// Decide whether the game is over.
    ///
    /// 1. No seats: `Tie`.
    /// 2. Any score above `board_size / player_count` wins at once.
    /// 3. Once the first seat's pool is empty, the top score wins, or `Tie`
    ///    if it is shared.
    /// 4. Otherwise `Continue`.
    ///
    /// Pools shrink in lockstep, one number per seat per round, so the first
    /// seat's pool stands for all of them.
    #[must_use]
    pub fn check_game_winner(&self) -> GameStatus {
        let Some(first) = self.players.first() else {
            return GameStatus::Tie;
        };

        let to_win = self.plurality_threshold();
        let mut leader = Leader::new();
        for player in &self.players {
            if player.score() > to_win {
                return GameStatus::Winner(player.id());
            }
            leader.observe(player.id(), player.score());
        }

        if first.has_moves() {
            return GameStatus::Continue;
        }
        leader.winner().map_or(GameStatus::Tie, GameStatus::Winner)
    }

    /// Score the round just played: the unique highest last move earns a
    /// point. A shared highest move scores nobody.
    ///
    /// Call exactly once per round; each call awards another point.
    pub fn check_round_winner(&mut self) -> RoundResult {
        let leader = Leader::scan(
            self.players
                .iter()
                .map(|p| (p.id(), p.last_move().unwrap_or(0))),
        );

        let result = match leader.winner() {
            Some(id) => {
                self.players[id.index()].increment_score();
                RoundResult::Winner(id)
            }
            None => RoundResult::Tie,
        };
        debug!(highest = leader.best(), result = result.code(), "round scored");
        result
    }

    /// Play a computer seat's turn. `None` if the seat is missing, human, or
    /// out of moves.
    pub fn take_computer_move(&mut self, index: usize) -> Option<u32> {
        self.players
            .get_mut(index)
            .filter(|p| p.is_computer())
            .and_then(Player::random_move)
    }

    /// Scores above this end the game immediately.
    ///
    /// Integer division: with 7 numbers and 2 seats, 4 points win.
    #[must_use]
    pub fn plurality_threshold(&self) -> u32 {
        match self.players.len() {
            0 => self.board_size,
            n => self.board_size / n as u32,
        }
    }

    /// Seats sorted by descending score; equal scores keep roster order.
    #[must_use]
    pub fn players_by_score(&self) -> Vec<&Player> {
        let mut view: Vec<&Player> = self.players.iter().collect();
        view.sort_by(|a, b| b.score().cmp(&a.score()));
        view
    }

    /// Seats sorted by descending last move; equal moves keep roster order.
    #[must_use]
    pub fn players_by_last_move(&self) -> Vec<&Player> {
        let mut view: Vec<&Player> = self.players.iter().collect();
        view.sort_by(|a, b| b.last_move().cmp(&a.last_move()));
        view
    }

    /// Seats in roster order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id() == id)
    }

    pub fn player_at_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of human seats; more than one means the device is passed
    /// between turns.
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.human_count
    }

    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
