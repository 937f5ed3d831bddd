//! The engine puts the rules and the console together. It reads commands line
//! by line, applies moves to a [`Game`] and reports the results.
//!
//! [`Engine::run`] is the "main loop": before every command it draws the board
//! and announces the side to move, and it stops when the game is over, on
//! `quit` or at the end of input.

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;

use crate::checkers::core::Move;
use crate::checkers::game::Game;
use crate::engine::command::Command;

mod command;

const PROMPT: &str = "Enter move (e.g., 'A2 B3'): ";

/// Connects the game to an input and an output stream.
pub struct Engine<R: BufRead, W: Write> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    /// Creates an engine for a new game.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self::with_game(Game::new(), input, output)
    }

    /// Creates an engine that continues `game`.
    #[must_use]
    pub fn with_game(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Reads and executes commands until the game is over, `quit` is sent or
    /// the input is exhausted.
    ///
    /// Malformed commands are reported to the output and skipped.
    ///
    /// # Errors
    ///
    /// If reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if self.game.is_game_over() {
                self.announce_result()?;
                break;
            }
            self.prompt()?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                break;
            }
            match Command::parse(&line) {
                Ok(Command::Move(next_move)) => self.handle_move(next_move)?,
                Ok(Command::Moves) => self.handle_moves()?,
                Ok(Command::Layout) => writeln!(self.output, "{}", self.game.board().layout())?,
                Ok(Command::Quit) => break,
                Ok(Command::Empty) => {
                    writeln!(self.output, "No input provided. Please enter a valid move.")?;
                },
                Err(e) => writeln!(self.output, "{e:#}")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Draws the board and asks the side to move for a move.
    fn prompt(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}'s turn", self.game.side_to_move())?;
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle_move(&mut self, next_move: Move) -> anyhow::Result<()> {
        let mover = self.game.side_to_move();
        if !self.game.make_move(next_move) {
            writeln!(self.output, "Invalid move, try again.")?;
            return Ok(());
        }
        writeln!(self.output, "Move successful!")?;
        if self.game.side_to_move() == mover {
            writeln!(self.output, "You can continue capturing!")?;
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        let side = self.game.side_to_move();
        writeln!(
            self.output,
            "{}",
            self.game.board().legal_moves(side).iter().join(", ")
        )?;
        Ok(())
    }

    fn announce_result(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}", self.game.winner())?;
        writeln!(self.output, "Game Over!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::checkers::board::Board;
    use crate::checkers::core::Player;

    fn run(game: Game, input: &str) -> (Game, String) {
        let mut output = Vec::new();
        let mut engine = Engine::with_game(game, input.as_bytes(), &mut output);
        engine.run().expect("writing to a vector does not fail");
        let game = engine.game().clone();
        drop(engine);
        (game, String::from_utf8(output).expect("engine writes UTF-8"))
    }

    #[test]
    fn plays_moves() {
        let (game, output) = run(Game::new(), "B3 C4\nc6 b5\nquit\n");
        assert!(output.contains("Player 1's turn"));
        assert!(output.contains("Player 2's turn"));
        assert_eq!(output.matches("Move successful!").count(), 2);
        assert!(game.is_player_one_turn());
        assert_eq!(
            game.board().layout(),
            ".X.X.X.X/X.X.X.X./...X.X.X/..X...../.O....../O...O.O./.O.O.O.O/O.O.O.O."
        );
    }

    #[test]
    fn reports_bad_input() {
        let (game, output) = run(Game::new(), "B3 B4\n\nA2\n");
        assert!(output.contains("Invalid move, try again."));
        assert!(output.contains("No input provided. Please enter a valid move."));
        assert!(output.contains("Invalid move: move should be two squares"));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn lists_moves_and_layout() {
        let (_, output) = run(Game::new(), "moves\nd\n");
        assert!(output.contains("B3 A4, B3 C4, D3 C4, D3 E4, F3 E4, F3 G4, H3 G4\n"));
        assert!(output.contains(&format!("{}\n", Board::starting().layout())));
    }

    #[test]
    fn continues_capturing_until_game_over() {
        let board = Board::try_from(
            "......../......../......../..X...../...O..../......../.....O../........",
        )
        .unwrap();
        let (game, output) = run(Game::from_board(board, Player::One), "C4 E6\nE6 G8\n");
        assert_eq!(output.matches("You can continue capturing!").count(), 1);
        assert!(output.ends_with("Player 1 wins!\nGame Over!\n"));
        assert!(game.is_game_over());
    }

    #[test]
    fn stops_at_end_of_input() {
        let (_, output) = run(Game::new(), "");
        assert!(output.starts_with("  A B C D E F G H\n"));
        assert!(output.ends_with(PROMPT));
    }
}
