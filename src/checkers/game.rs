//! Turn order on top of [`Board`]: the move-execution protocol, capture
//! chaining and the end of the game.

use std::fmt;

use crate::checkers::board::Board;
use crate::checkers::core::{Move, Player};

/// Result of the game as seen by the players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The given side has won.
    Won(Player),
    /// Both sides can still play.
    Undecided,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(player) => write!(f, "{player} wins!"),
            Self::Undecided => write!(f, "No winner yet!"),
        }
    }
}

/// A game in progress: the board and the side to move.
///
/// The side to move changes after every completed move, except when the move
/// captured a piece and the capturing piece can capture again from where it
/// landed. Whether the game is over is derived from the board on every query.
///
/// ```
/// use draughts::checkers::core::{Move, Player};
/// use draughts::checkers::game::Game;
///
/// let mut game = Game::new();
/// assert!(game.make_move(Move::try_from("B3 C4").unwrap()));
/// assert_eq!(game.side_to_move(), Player::Two);
/// // Vertical moves are never legal.
/// assert!(!game.make_move(Move::try_from("C6 C5").unwrap()));
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Player,
}

impl Game {
    /// Starts a new game from the starting position with Player One to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Player::One)
    }

    /// Continues a game from an arbitrary position.
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_player_one_turn(&self) -> bool {
        self.side_to_move == Player::One
    }

    /// Plays `next_move` for the side to move. Returns `false` and leaves the
    /// game untouched if the move is illegal.
    ///
    /// Any two-square move counts as a capture: the turn stays with the mover
    /// if the piece can make another two-square move from where it landed.
    /// Nothing forces the mover to continue with that piece or to capture at
    /// all.
    pub fn make_move(&mut self, next_move: Move) -> bool {
        if !self.board.is_valid_move(next_move, self.side_to_move) {
            return false;
        }
        let _ = self.board.move_piece(next_move);
        let continues_capturing = next_move.row_span() == 2
            && self.board.can_capture(next_move.to(), self.side_to_move);
        if !continues_capturing {
            self.side_to_move = !self.side_to_move;
        }
        true
    }

    /// The game is over as soon as either side has no pieces or no legal
    /// moves left, regardless of whose turn it is.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        [Player::One, Player::Two]
            .into_iter()
            .any(|side| !self.board.has_pieces(side) || !self.board.player_has_moves(side))
    }

    /// Decides the winner: losing all pieces is checked before running out
    /// of moves, Player One before Player Two.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        if !self.board.has_pieces(Player::One) {
            return GameResult::Won(Player::Two);
        }
        if !self.board.has_pieces(Player::Two) {
            return GameResult::Won(Player::One);
        }
        if !self.board.player_has_moves(Player::One) {
            return GameResult::Won(Player::Two);
        }
        if !self.board.player_has_moves(Player::Two) {
            return GameResult::Won(Player::One);
        }
        GameResult::Undecided
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
