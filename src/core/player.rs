//! Player identification and per-player move bookkeeping.
//!
//! ## PlayerId
//!
//! 1-based seat identifier. Ids are assigned by the board in roster order
//! and stay stable for the lifetime of a game.
//!
//! ## Player
//!
//! One participant: the pool of numbers not yet played, the round score and
//! the most recent move. Human and computer seats share the same state and
//! validation; they differ only in how a move is chosen and how the seat is
//! named.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rng::GameRng;

/// Display name used for every computer-controlled seat.
pub const CPU_NAME: &str = "CPU";

/// Player identifier, 1-based: the first seat is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id of the seat at roster position `index` (0-based).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Roster position (0-based) of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    /// Raw 1-based id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Who controls a seat. Fixed when the seat is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves are read from the console.
    Human,
    /// Moves are drawn uniformly at random from the remaining pool.
    Computer,
}

/// Move-selection policy, carrying the random source for computer seats.
#[derive(Clone, Debug)]
enum Controller {
    Human,
    Computer(GameRng),
}

/// A participant and their remaining numbers.
///
/// Invariant: `last_move`, when set, is no longer in the move pool.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    board_size: u32,
    moves: FxHashSet<u32>,
    score: u32,
    last_move: Option<u32>,
    controller: Controller,
}

impl Player {
    /// Create a human seat. The move pool stays empty until [`Player::initialize`].
    #[must_use]
    pub fn human(id: PlayerId) -> Self {
        Self::with_controller(id, Controller::Human)
    }

    /// Create a computer seat that draws its moves from `rng`.
    #[must_use]
    pub fn computer(id: PlayerId, rng: GameRng) -> Self {
        Self::with_controller(id, Controller::Computer(rng))
    }

    fn with_controller(id: PlayerId, controller: Controller) -> Self {
        Self {
            id,
            board_size: 0,
            moves: FxHashSet::default(),
            score: 0,
            last_move: None,
            controller,
        }
    }

    /// Reset the seat for a new game: score 0, no last move, and the full
    /// pool `1..=board_size`. Overwrites any prior state.
    pub fn initialize(&mut self, id: PlayerId, board_size: u32) {
        self.id = id;
        self.board_size = board_size;
        self.score = 0;
        self.last_move = None;
        self.moves.clear();
        self.moves.extend(1..=board_size);
    }

    /// True iff `number` is still in the move pool.
    #[must_use]
    pub fn is_valid_move(&self, number: u32) -> bool {
        self.moves.contains(&number)
    }

    /// Play `number`, removing it from the pool.
    ///
    /// Returns `None` and leaves the seat untouched if the number is not
    /// available.
    pub fn play_move(&mut self, number: u32) -> Option<u32> {
        if !self.moves.remove(&number) {
            return None;
        }
        self.last_move = Some(number);
        debug!(player = %self.id, number, remaining = self.moves.len(), "move played");
        Some(number)
    }

    /// Play a move according to the seat's controller.
    ///
    /// Human seats play `requested`; computer seats ignore it and pick at
    /// random. Returns `None` when nothing could be played.
    pub fn select_move(&mut self, requested: u32) -> Option<u32> {
        match self.controller {
            Controller::Human => self.play_move(requested),
            Controller::Computer(_) => self.random_move(),
        }
    }

    /// Draw numbers in `1..=board_size` until one is still available, then
    /// play it. `None` if the pool is empty or the seat is human.
    pub fn random_move(&mut self) -> Option<u32> {
        if self.moves.is_empty() {
            warn!(player = %self.id, "no moves left to choose from");
            return None;
        }
        let Controller::Computer(rng) = &mut self.controller else {
            return None;
        };

        let mut number = rng.gen_range_inclusive(1..=self.board_size);
        while !self.moves.contains(&number) {
            number = rng.gen_range_inclusive(1..=self.board_size);
        }
        self.play_move(number)
    }

    /// Award this seat one round.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Render `1..=board_size`, showing `_` for numbers already played,
    /// separated by two spaces.
    ///
    /// ```
    /// use numbers_royale::core::{Player, PlayerId};
    ///
    /// let mut p = Player::human(PlayerId::new(1));
    /// p.initialize(PlayerId::new(1), 5);
    /// p.play_move(2);
    /// p.play_move(4);
    /// assert_eq!(p.moves_display_string(), "1  _  3  _  5");
    /// ```
    #[must_use]
    pub fn moves_display_string(&self) -> String {
        (1..=self.board_size)
            .map(|n| {
                if self.moves.contains(&n) {
                    n.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Display name: `P<id>` for humans, [`CPU_NAME`] for computers.
    #[must_use]
    pub fn name(&self) -> String {
        match self.controller {
            Controller::Human => self.id.to_string(),
            Controller::Computer(_) => CPU_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Most recent move, `None` before the first move of a game.
    #[must_use]
    pub fn last_move(&self) -> Option<u32> {
        self.last_move
    }

    /// Numbers not yet played, unordered.
    #[must_use]
    pub fn available_moves(&self) -> &FxHashSet<u32> {
        &self.moves
    }

    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.moves.is_empty()
    }

    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        match self.controller {
            Controller::Human => Seat::Human,
            Controller::Computer(_) => Seat::Computer,
        }
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.seat() == Seat::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(board_size: u32) -> Player {
        let mut p = Player::human(PlayerId::new(1));
        p.initialize(PlayerId::new(1), board_size);
        p
    }

    fn cpu(board_size: u32, seed: u64) -> Player {
        let mut p = Player::computer(PlayerId::new(2), GameRng::new(seed));
        p.initialize(PlayerId::new(2), board_size);
        p
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p3 = PlayerId::from_index(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p3, PlayerId::new(3));
        assert_eq!(p3.index(), 2);
        assert_eq!(format!("{}", p3), "P3");
    }

    #[test]
    fn test_initialize_fills_pool() {
        let p = human(7);

        assert_eq!(p.available_moves().len(), 7);
        for n in 1..=7 {
            assert!(p.is_valid_move(n));
        }
        assert!(!p.is_valid_move(0));
        assert!(!p.is_valid_move(8));
        assert_eq!(p.score(), 0);
        assert_eq!(p.last_move(), None);
    }

    #[test]
    fn test_reinitialize_overwrites_state() {
        let mut p = human(5);
        p.play_move(3);
        p.increment_score();

        p.initialize(PlayerId::new(4), 9);

        assert_eq!(p.id(), PlayerId::new(4));
        assert_eq!(p.available_moves().len(), 9);
        assert!(p.is_valid_move(3));
        assert_eq!(p.score(), 0);
        assert_eq!(p.last_move(), None);
    }

    #[test]
    fn test_play_move_removes_number() {
        let mut p = human(5);

        assert_eq!(p.play_move(4), Some(4));
        assert_eq!(p.last_move(), Some(4));
        assert!(!p.is_valid_move(4));
        assert_eq!(p.available_moves().len(), 4);
    }

    #[test]
    fn test_play_move_rejects_unavailable() {
        let mut p = human(5);
        p.play_move(2);

        assert_eq!(p.play_move(2), None);
        assert_eq!(p.play_move(6), None);
        assert_eq!(p.last_move(), Some(2));
        assert_eq!(p.available_moves().len(), 4);
    }

    #[test]
    fn test_moves_display_string() {
        let mut p = human(5);
        assert_eq!(p.moves_display_string(), "1  2  3  4  5");

        p.play_move(2);
        p.play_move(4);
        assert_eq!(p.moves_display_string(), "1  _  3  _  5");

        p.play_move(5);
        assert_eq!(p.moves_display_string(), "1  _  3  _  _");
    }

    #[test]
    fn test_moves_display_string_uninitialized() {
        let p = Player::human(PlayerId::new(1));
        assert_eq!(p.moves_display_string(), "");
    }

    #[test]
    fn test_names() {
        assert_eq!(human(5).name(), "P1");
        assert_eq!(cpu(5, 1).name(), CPU_NAME);
    }

    #[test]
    fn test_seat_kind() {
        assert_eq!(human(5).seat(), Seat::Human);
        assert!(!human(5).is_computer());
        assert!(cpu(5, 1).is_computer());
    }

    #[test]
    fn test_computer_exhausts_pool() {
        let mut p = cpu(9, 42);
        let mut played = Vec::new();

        for _ in 0..9 {
            let n = p.select_move(0).expect("pool not yet empty");
            played.push(n);
        }
        played.sort_unstable();

        assert_eq!(played, (1..=9).collect::<Vec<_>>());
        assert!(!p.has_moves());
        assert_eq!(p.random_move(), None);
    }

    #[test]
    fn test_computer_ignores_requested_number() {
        let mut p = cpu(5, 11);
        let n = p.select_move(99).unwrap();

        assert!((1..=5).contains(&n));
        assert_eq!(p.last_move(), Some(n));
    }

    #[test]
    fn test_computer_moves_are_deterministic() {
        let mut a = cpu(9, 5);
        let mut b = cpu(9, 5);

        for _ in 0..9 {
            assert_eq!(a.random_move(), b.random_move());
        }
    }

    #[test]
    fn test_human_random_move_is_refused() {
        let mut p = human(5);
        assert_eq!(p.random_move(), None);
        assert_eq!(p.available_moves().len(), 5);
    }

    #[test]
    fn test_human_select_move_plays_requested() {
        let mut p = human(5);
        assert_eq!(p.select_move(3), Some(3));
        assert_eq!(p.select_move(3), None);
    }

    #[test]
    fn test_score_accumulates() {
        let mut p = human(3);
        for _ in 0..10 {
            p.increment_score();
        }
        assert_eq!(p.score(), 10);
    }
}
