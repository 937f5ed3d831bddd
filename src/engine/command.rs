//! Commands understood by the console shell.

use anyhow::Context;

use crate::checkers::core::Move;

#[derive(Debug, PartialEq)]
pub(super) enum Command {
    /// Two squares, e.g. `A2 B3`.
    Move(Move),
    /// Lists the legal moves of the side to move.
    Moves,
    /// Prints the compact board layout.
    Layout,
    Quit,
    Empty,
}

impl Command {
    /// Parses a line of input. Keywords and squares are case-insensitive.
    pub(super) fn parse(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "moves" => Ok(Self::Moves),
            "board" | "d" => Ok(Self::Layout),
            "quit" => Ok(Self::Quit),
            _ => Move::try_from(input)
                .map(Self::Move)
                .context("Invalid move"),
        }
    }
}
