//! The checkers board: placement of pieces on the 8×8 grid and the rules that
//! decide whether a single move is legal.
//!
//! [`Board`] answers every rules question that does not depend on whose turn
//! it is: validating and executing a single move, promotion, capturing and
//! the aggregate "can this side still play" queries that decide the end of the
//! game. Turn order lives in [`crate::checkers::game::Game`].

use std::fmt;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::{iproduct, Itertools};

use crate::checkers::core::{Move, Piece, PieceKind, Player, Square, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Row and column offsets probed when looking for the destinations of a
/// piece: single steps and two-square jumps.
const OFFSETS: [i8; 4] = [-1, 1, -2, 2];
/// Offsets of two-square jumps, the only way to capture.
const JUMP_OFFSETS: [i8; 2] = [-2, 2];

/// Upper bound on the number of candidate destinations of a single piece.
pub const MAX_DESTINATIONS: usize = OFFSETS.len() * OFFSETS.len();

/// Destinations of a single piece, see [`Board::destinations`].
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

/// Square-centric board representation: each square is either empty or holds
/// exactly one [`Piece`].
///
/// [`Board::try_from()`] reads the compact layout produced by
/// [`Board::layout()`]: eight rows separated by `/`, starting from row 0, each
/// with eight symbols. `.` is an empty square, `X`/`K` are Player One's men and
/// kings and `O`/`Q` are Player Two's.
///
/// ```
/// use draughts::checkers::board::Board;
///
/// assert_eq!(
///     Board::starting().layout(),
///     ".X.X.X.X/X.X.X.X./.X.X.X.X/......../......../O.O.O.O./.O.O.O.O/O.O.O.O."
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; WIDTH]; WIDTH],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[None; WIDTH]; WIDTH],
        }
    }

    /// Creates the starting position: Player One's men on the dark squares of
    /// rows 0 to 2, Player Two's men on the dark squares of rows 5 to 7.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for square in Square::iter().filter(|square| square.is_dark()) {
            let owner = match square.row() {
                0..=2 => Player::One,
                5..=7 => Player::Two,
                _ => continue,
            };
            board.place(square, Some(Piece::man(owner)));
        }
        board
    }

    /// Returns the piece standing on `square`, if any.
    #[must_use]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    fn place(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[usize::from(square.row())][usize::from(square.col())] = piece;
    }

    /// Iterates over the occupied squares row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    /// Number of pieces `side` has left.
    #[must_use]
    pub fn count(&self, side: Player) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner() == side)
            .count()
    }

    /// Checks whether `side` may play `next_move` on this board. The query is
    /// pure and does not know whose turn it is.
    ///
    /// A move is legal if the start square holds a piece of `side`, the
    /// destination is empty and the geometry fits the piece:
    ///
    /// - A man steps one square diagonally forward or jumps two squares
    ///   diagonally, in either row direction, over an opposing piece.
    /// - A king slides any distance along a diagonal as long as every square
    ///   in between is empty, or jumps two squares over an adjacent opposing
    ///   piece. A capturable piece can only sit on the midpoint of a
    ///   two-square move, so kings never capture from a distance.
    #[must_use]
    pub fn is_valid_move(&self, next_move: Move, side: Player) -> bool {
        let Some(piece) = self.get(next_move.from()) else {
            return false;
        };
        if piece.owner() != side || self.get(next_move.to()).is_some() {
            return false;
        }
        let distance = next_move.row_span();
        if distance == 0 || distance != next_move.col_span() {
            return false;
        }
        match piece.kind() {
            PieceKind::Man => match distance {
                1 => next_move.row_direction() == side.forward(),
                2 => self.jumps_over_opponent(next_move, side),
                _ => false,
            },
            PieceKind::King => {
                next_move.path().all(|square| self.get(square).is_none())
                    || (distance == 2 && self.jumps_over_opponent(next_move, side))
            },
        }
    }

    fn jumps_over_opponent(&self, next_move: Move, side: Player) -> bool {
        next_move
            .middle()
            .and_then(|square| self.get(square))
            .is_some_and(|piece| piece.owner() != side)
    }

    /// Executes a move that was already validated by
    /// [`Board::is_valid_move`]; legality is not checked again.
    ///
    /// The piece is relocated and promoted if it reached its farthest row. If
    /// the move spans more than one square, the first opposing piece on its
    /// path is captured: removed from the board and its square returned.
    pub fn move_piece(&mut self, next_move: Move) -> Option<Square> {
        let mut piece = self.get(next_move.from())?;
        self.place(next_move.from(), None);
        if next_move.to().row() == piece.owner().promotion_row() {
            piece.promote();
        }
        self.place(next_move.to(), Some(piece));

        if next_move.row_span() <= 1 {
            return None;
        }
        let captured = next_move.path().find(|&square| {
            self.get(square)
                .is_some_and(|other| other.owner() != piece.owner())
        })?;
        self.place(captured, None);
        Some(captured)
    }

    /// Candidate destinations of the piece on `from` among single steps and
    /// two-square jumps that are legal for `side`.
    #[must_use]
    pub fn destinations(&self, from: Square, side: Player) -> Destinations {
        iproduct!(OFFSETS, OFFSETS)
            .filter_map(|(rows, cols)| from.offset(rows, cols))
            .filter(|&to| self.is_valid_move(Move::new(from, to), side))
            .collect()
    }

    /// All moves `side` can make with single steps and two-square jumps. Long
    /// king slides are not listed separately: a king that can slide further
    /// can always take the first step of the slide.
    #[must_use]
    pub fn legal_moves(&self, side: Player) -> Vec<Move> {
        self.pieces()
            .filter(|(_, piece)| piece.owner() == side)
            .flat_map(|(from, _)| {
                self.destinations(from, side)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns true if any piece of `side` has a step or a jump available.
    #[must_use]
    pub fn player_has_moves(&self, side: Player) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.owner() == side)
            .any(|(from, _)| !self.destinations(from, side).is_empty())
    }

    /// Returns true if `side` has at least one piece left.
    #[must_use]
    pub fn has_pieces(&self, side: Player) -> bool {
        self.pieces().any(|(_, piece)| piece.owner() == side)
    }

    /// Returns true if the piece on `square`, assumed to belong to `side`, has
    /// any legal two-square diagonal move. For a man that is always a jump
    /// over an opposing piece, a king may also just slide two squares.
    #[must_use]
    pub fn can_capture(&self, square: Square, side: Player) -> bool {
        iproduct!(JUMP_OFFSETS, JUMP_OFFSETS)
            .filter_map(|(rows, cols)| square.offset(rows, cols))
            .any(|to| self.is_valid_move(Move::new(square, to), side))
    }

    /// Serializes the board into the compact layout accepted by
    /// [`Board::try_from()`].
    #[must_use]
    pub fn layout(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| square.map_or_else(|| ".".to_string(), |piece| piece.to_string()))
                    .collect::<String>()
            })
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the compact layout. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// If the layout does not have exactly eight rows of eight symbols, uses
    /// unknown symbols or places a piece on a light square.
    fn try_from(layout: &str) -> anyhow::Result<Self> {
        let rows = layout.trim().split('/').collect_vec();
        if rows.len() != WIDTH {
            bail!("board layout should have {WIDTH} rows, got {}", rows.len());
        }
        let mut board = Self::empty();
        for (row, symbols) in (0..BOARD_WIDTH).zip(rows) {
            if symbols.chars().count() != WIDTH {
                bail!(
                    "row {} should have {WIDTH} squares, got '{symbols}'",
                    row + 1
                );
            }
            for (col, symbol) in (0..BOARD_WIDTH).zip(symbols.chars()) {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::try_from(symbol)?;
                let square = Square::try_from((row, col))?;
                if !square.is_dark() {
                    bail!("pieces can only be placed on dark squares, got {piece} on {square}");
                }
                board.place(square, Some(piece));
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Draws the board the way the console shell shows it: columns are
    /// lettered, rows are numbered from 1 and empty dark squares are shaded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (row, squares) in self.grid.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for (col, square) in squares.iter().enumerate() {
                match square {
                    Some(piece) => write!(f, "{piece} ")?,
                    None if (row + col) % 2 == 0 => write!(f, ". ")?,
                    None => write!(f, "░ ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
