//! Game controller: menus, seating, and the per-round loop.
//!
//! The controller owns the board and both halves of the terminal. Reader and
//! writer are generic so a whole session can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::core::{
    Board, BoardSizeOption, GameConfig, GameRng, MainMenuOption, PlayModeOption, Result,
};
use crate::rules::GameStatus;
use crate::ui::screens::{self, TITLE};
use crate::ui::{Console, Gui, DEFAULT_WAIT_MESSAGE};

const MAIN_MENU: [&str; 3] = ["Play Game", "How to Play", "Quit"];
const MODE_MENU: [&str; 4] = [
    "Player vs Player",
    "Player vs CPU",
    "Player vs Player vs CPU",
    "Return to Main Menu",
];
const SIZE_MENU: [&str; 4] = ["5", "7", "9", "Return to Main Menu"];

const SELECT_OPTION: &str = "Select option: ";
const RETURN_MESSAGE: &str = "Press <enter> to return to the main menu... ";

/// Interactive Numbers Royale session.
pub struct NumbersRoyale<R, W> {
    board: Board,
    gui: Gui<W>,
    console: Console<R>,
    config: GameConfig,
    seed: u64,
}

impl<R: BufRead, W: Write> NumbersRoyale<R, W> {
    /// Build a session. Without a configured seed, one is drawn at random
    /// and logged so the computer's moves can be replayed.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "computer seats seeded");

        Self {
            board: Board::new(GameRng::new(seed)),
            gui: Gui::new(output, config.clears_screen()),
            console: Console::new(input),
            config,
            seed,
        }
    }

    /// Show the main menu until the player quits.
    pub fn main_menu(&mut self) -> Result<()> {
        loop {
            screens::menu(&mut self.gui, TITLE, &MAIN_MENU)?;
            match self.select(MainMenuOption::from_code)? {
                MainMenuOption::PlayGame => self.play_mode()?,
                MainMenuOption::HowToPlay => self.how_to_play()?,
                MainMenuOption::Quit => return Ok(()),
            }
        }
    }

    pub fn how_to_play(&mut self) -> Result<()> {
        screens::how_to_play(&mut self.gui)?;
        self.console.wait_for_enter(self.gui.writer(), RETURN_MESSAGE)
    }

    /// Choose who plays, seat them, then move on to the board size.
    pub fn play_mode(&mut self) -> Result<()> {
        screens::menu(&mut self.gui, "SELECT MODE", &MODE_MENU)?;
        let mode = self.select(PlayModeOption::from_code)?;
        if mode == PlayModeOption::ReturnToMainMenu {
            return Ok(());
        }

        for &seat in mode.seats() {
            self.board.add_player(seat);
        }
        self.select_board_size()
    }

    /// Choose 5, 7 or 9 numbers and play, or drop the seats and go back.
    pub fn select_board_size(&mut self) -> Result<()> {
        screens::menu(&mut self.gui, "SELECT BOARD SIZE", &SIZE_MENU)?;
        let option = self.select(BoardSizeOption::from_code)?;

        match option.board_size() {
            Some(size) => {
                self.board.initialize(Some(size));
                self.play_game()
            }
            None => {
                self.board.reset();
                Ok(())
            }
        }
    }

    /// Play rounds until the game is decided, then clear the roster.
    pub fn play_game(&mut self) -> Result<()> {
        info!(
            players = self.board.player_count(),
            board_size = self.board.board_size(),
            "game started"
        );

        let mut status = self.board.check_game_winner();
        while status == GameStatus::Continue {
            for index in 0..self.board.player_count() {
                self.take_turn(index)?;
            }

            let round = self.board.check_round_winner();
            screens::round_result(&mut self.gui, &self.board, round)?;
            self.console.wait_for_enter(self.gui.writer(), DEFAULT_WAIT_MESSAGE)?;
            status = self.board.check_game_winner();
        }

        info!(result = status.code(), "game over");
        self.board.reset();
        Ok(())
    }

    fn take_turn(&mut self, index: usize) -> Result<()> {
        let Some(player) = self.board.players().get(index) else {
            return Ok(());
        };

        if player.is_computer() {
            if self.board.take_computer_move(index).is_none() {
                error!(seat = index + 1, "computer seat could not move");
            }
            return Ok(());
        }

        if self.board.human_count() > 1 {
            screens::pass_device(&mut self.gui, player)?;
            self.console.wait_for_enter(self.gui.writer(), DEFAULT_WAIT_MESSAGE)?;
        }

        if self.config.reveal_board {
            screens::board(&mut self.gui, &self.board)?;
        } else {
            screens::player_moves(&mut self.gui, player)?;
        }
        self.gui.prompt(&format!("{}, select a number: ", player.name()))?;
        let number = self
            .console
            .read_validated(self.gui.writer(), |n| player.is_valid_move(n))?;

        if let Some(player) = self.board.player_at_mut(index) {
            player.play_move(number);
        }
        Ok(())
    }

    /// Prompt for a menu code accepted by `from_code`.
    fn select<T>(&mut self, from_code: impl Fn(u32) -> Option<T>) -> Result<T> {
        self.gui.prompt(SELECT_OPTION)?;
        loop {
            let code = self
                .console
                .read_validated(self.gui.writer(), |n| from_code(n).is_some())?;
            if let Some(option) = from_code(code) {
                return Ok(option);
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed the computer seats were forked from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consume the session and return the output writer.
    pub fn into_output(self) -> W {
        self.gui.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str) -> NumbersRoyale<Cursor<Vec<u8>>, Vec<u8>> {
        let config = GameConfig::default().with_seed(42).without_clear();
        NumbersRoyale::new(config, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(game: NumbersRoyale<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(game.into_output()).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let mut game = session("3\n");
        game.main_menu().unwrap();

        let out = output(game);
        assert!(out.contains("| 1. Play Game"));
        assert!(out.contains("Select option: "));
    }

    #[test]
    fn test_invalid_menu_code_reprompts() {
        let mut game = session("0\n7\nq\n3\n");
        game.main_menu().unwrap();

        let out = output(game);
        assert_eq!(out.matches("Invalid input. Please try again: ").count(), 3);
    }

    #[test]
    fn test_how_to_play_returns_to_menu() {
        let mut game = session("2\n\n3\n");
        game.main_menu().unwrap();

        let out = output(game);
        assert!(out.contains("HOW TO PLAY"));
        assert!(out.contains(RETURN_MESSAGE));
        assert_eq!(out.matches("| 1. Play Game").count(), 2);
    }

    #[test]
    fn test_mode_return_seats_nobody() {
        let mut game = session("1\n4\n3\n");
        game.main_menu().unwrap();
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_size_return_resets_board() {
        let mut game = session("1\n2\n4\n3\n");
        game.main_menu().unwrap();

        assert!(game.board().is_empty());
        assert_eq!(game.board().human_count(), 0);
    }

    #[test]
    fn test_seed_is_kept() {
        let game = session("");
        assert_eq!(game.seed(), 42);
        assert_eq!(game.config().seed, Some(42));
    }

    #[test]
    fn test_eof_propagates() {
        let mut game = session("1\n");
        assert!(matches!(
            game.main_menu(),
            Err(crate::core::GameError::InputClosed)
        ));
    }

    #[test]
    fn test_play_game_with_no_seats_ends_at_once() {
        let mut game = session("");
        game.play_game().unwrap();
        assert!(game.board().is_empty());
    }

    /// Menu codes for a two-human game on 5 numbers, then one scripted
    /// line sequence per round: pass-device wait, P1's number, pass-device
    /// wait, P2's number, round-result wait.
    fn pvp_script(rounds: &[(u32, u32)]) -> String {
        let mut script = String::from("1\n1\n1\n");
        for (a, b) in rounds {
            script.push_str(&format!("\n{a}\n\n{b}\n\n"));
        }
        script.push_str("3\n");
        script
    }

    #[test]
    fn test_player_vs_player_plurality_win() {
        // 5 numbers, 2 seats: a third point is decisive.
        let mut game = session(&pvp_script(&[(5, 4), (4, 3), (3, 2)]));
        game.main_menu().unwrap();

        let out = output(game);
        assert!(out.contains("Pass the device to P1"));
        assert!(out.contains("Pass the device to P2"));
        assert!(out.contains("P1 wins the round!"));
        assert!(out.contains("P1 WINS!"));
    }

    #[test]
    fn test_player_vs_player_exhaustion_tie() {
        let rounds = [(5, 1), (4, 2), (3, 3), (2, 4), (1, 5)];
        let mut game = session(&pvp_script(&rounds));
        game.main_menu().unwrap();

        let out = output(game);
        assert!(out.contains("It's a tie!"));
        assert!(out.contains("P2 wins the round!"));
        assert!(out.contains("TIE GAME!"));
        assert!(game_board_reset(&out));
    }

    #[test]
    fn test_rejected_move_reprompts() {
        // P1 tries 5 twice; the second attempt is refused.
        let script = "1\n1\n1\n\n5\n\n1\n\n\n5\n4\n";
        let mut game = session(script);
        assert!(game.main_menu().is_err());

        let out = output(game);
        assert!(out.contains("| P1 moves:"));
        assert!(out.contains("_ |"));
        assert!(out.contains("Invalid input. Please try again: "));
    }

    /// The main menu is drawn again once a game has finished.
    fn game_board_reset(out: &str) -> bool {
        out.rfind("| 1. Play Game") > out.rfind("TIE GAME!")
    }
}
