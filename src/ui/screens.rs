//! Screens composed from `Gui` primitives.
//!
//! Each function draws one complete frame. Screens only read the board;
//! scoring happens before they are called.

use std::io::{self, Write};

use super::render::Gui;
use crate::core::{Board, Player};
use crate::rules::{GameStatus, RoundResult};

/// Title shown on gameplay screens.
pub const TITLE: &str = "NUMBERS ROYALE";

const HOW_TO_PLAY: [&str; 15] = [
    "1. Two or three players each",
    "   get the numbers 1 to N.",
    "2. Every round, each player",
    "   secretly picks one of their",
    "   remaining numbers.",
    "3. The highest number wins the",
    "   round. Equal highs score",
    "   nobody.",
    "4. A number can only be used",
    "   once.",
    "5. The game ends when the",
    "   numbers run out, or when a",
    "   player wins more than N",
    "   divided by the player count.",
    "6. Most points wins the game.",
];

/// Numbered menu under a cleared header.
pub fn menu<W: Write>(gui: &mut Gui<W>, title: &str, entries: &[&str]) -> io::Result<()> {
    gui.print_header(title, true)?;
    for (index, entry) in entries.iter().enumerate() {
        gui.print_item(&format!("{}. {entry}", index + 1), false)?;
    }
    gui.print_border()
}

pub fn how_to_play<W: Write>(gui: &mut Gui<W>) -> io::Result<()> {
    gui.print_header("HOW TO PLAY", true)?;
    for line in HOW_TO_PLAY {
        gui.print_item(line, false)?;
    }
    gui.print_border()
}

/// Every seat's score and moves, last seat first so P1 sits at the bottom.
pub fn board<W: Write>(gui: &mut Gui<W>, board: &Board) -> io::Result<()> {
    gui.print_header(TITLE, true)?;
    for player in board.players().iter().rev() {
        gui.print_item(&score_line(player), false)?;
        gui.print_item("Moves:", false)?;
        gui.print_item(&player.moves_display_string(), true)?;
    }
    gui.print_border()
}

/// One seat's remaining moves.
pub fn player_moves<W: Write>(gui: &mut Gui<W>, player: &Player) -> io::Result<()> {
    gui.print_header(TITLE, true)?;
    gui.print_item(&format!("{} moves:", player.name()), false)?;
    gui.print_item(&player.moves_display_string(), true)?;
    gui.print_border()
}

/// Scoreboard, headed by the game result once there is one.
pub fn scores<W: Write>(gui: &mut Gui<W>, board: &Board) -> io::Result<()> {
    match board.check_game_winner() {
        GameStatus::Tie => gui.print_header("TIE GAME!", true)?,
        GameStatus::Continue => gui.print_header("SCOREBOARD", false)?,
        GameStatus::Winner(id) => {
            let name = board.player(id).map(Player::name).unwrap_or_else(|| id.to_string());
            gui.print_header(&format!("{name} WINS!"), true)?;
        }
    }
    for player in board.players_by_score() {
        gui.print_item(&score_line(player), false)?;
    }
    gui.print_border()
}

/// Outcome of a scored round. When the round ended the game, only the final
/// scoreboard is shown.
pub fn round_result<W: Write>(gui: &mut Gui<W>, board: &Board, round: RoundResult) -> io::Result<()> {
    if board.check_game_winner().is_over() {
        return scores(gui, board);
    }

    match round {
        RoundResult::Tie => gui.print_header("It's a tie!", true)?,
        RoundResult::Winner(id) => {
            let name = board.player(id).map(Player::name).unwrap_or_else(|| id.to_string());
            gui.print_header(&format!("{name} wins the round!"), true)?;
        }
    }
    for player in board.players_by_last_move() {
        let line = format!("{} move: {}", player.name(), player.last_move().unwrap_or(0));
        gui.print_item(&line, false)?;
    }
    scores(gui, board)
}

pub fn pass_device<W: Write>(gui: &mut Gui<W>, player: &Player) -> io::Result<()> {
    gui.print_header(TITLE, true)?;
    gui.print_line(&format!("Pass the device to {}", player.name()))
}

fn score_line(player: &Player) -> String {
    format!("{}: {} points", player.name(), player.score())
}
