//! Fixed-width bordered output.
//!
//! Every line is [`BOARD_WIDTH`] columns:
//!
//! ```text
//! |=================================|
//! |          NUMBERS ROYALE         |
//! |=================================|
//! | 1. Play Game                    |
//! |                   1  2  3  4  5 |
//! |=================================|
//! ```

use std::io::{self, Write};

use crate::core::config::{BOARD_WIDTH, INNER_PAD, INNER_WIDTH};

/// ANSI erase-display plus cursor-home.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Text width available to `print_item`.
const ITEM_WIDTH: usize = INNER_WIDTH - INNER_PAD;

/// Bordered renderer over any writer.
#[derive(Debug)]
pub struct Gui<W> {
    out: W,
    clear: bool,
}

impl<W: Write> Gui<W> {
    /// `clear` enables screen clearing for headers that ask for it.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    /// Erase the terminal, if clearing is enabled.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            write!(self.out, "{CLEAR_SEQUENCE}")?;
        }
        Ok(())
    }

    /// `|===...===|`
    pub fn print_border(&mut self) -> io::Result<()> {
        writeln!(self.out, "|{}|", "=".repeat(BOARD_WIDTH - 2))
    }

    /// One padded line of text between borders, left- or right-justified.
    pub fn print_item(&mut self, item: &str, right_justify: bool) -> io::Result<()> {
        if right_justify {
            writeln!(self.out, "| {item:>width$} |", width = ITEM_WIDTH)
        } else {
            writeln!(self.out, "| {item:<width$} |", width = ITEM_WIDTH)
        }
    }

    /// Title centred between two borders. Odd leftover space goes left.
    pub fn print_header(&mut self, title: &str, clear: bool) -> io::Result<()> {
        if clear {
            self.clear_screen()?;
        }
        let len = title.chars().count();
        let right_pad = INNER_WIDTH.saturating_sub(len) / 2;
        let left_pad = INNER_WIDTH.saturating_sub(right_pad + len);

        self.print_border()?;
        writeln!(self.out, "|{:left_pad$}{title}{:right_pad$}|", "", "")?;
        self.print_border()
    }

    /// Unframed line, for prompts that sit under a frame.
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Text without newline, flushed so it shows before a read.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
