//! Checkers primitives commonly used within [`crate::checkers`].

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::ops::Not;

use anyhow::{bail, Context};
use itertools::{iproduct, Itertools};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;

/// A game of checkers is played between two sides. Player One starts on rows
/// 0 to 2 and makes the first move, Player Two starts on rows 5 to 7.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Row direction of a man's non-capturing step: Player One advances
    /// towards higher rows, Player Two towards lower rows.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    /// The farthest row from the player's side of the board. Men reaching it
    /// are promoted.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::One => BOARD_WIDTH - 1,
            Self::Two => 0,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "Player 1"),
            Self::Two => write!(f, "Player 2"),
        }
    }
}

/// Standard checkers pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Steps one square diagonally forward, captures in both row directions.
    Man,
    /// Slides along any diagonal and captures in both row directions.
    King,
}

/// A piece is the owning side and its current kind. The kind can only change
/// through [`Piece::promote`], which makes promotion one-way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    owner: Player,
    kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Creates an unpromoted piece, as placed on the starting board.
    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self::new(owner, PieceKind::Man)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn owner(self) -> Player {
        self.owner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Crowns the piece. Kings stay kings.
    pub fn promote(&mut self) {
        self.kind = PieceKind::King;
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses the board diagram symbol of a piece: `X`/`K` for Player One's
    /// man/king and `O`/`Q` for Player Two's.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'X' => Ok(Self::new(Player::One, PieceKind::Man)),
            'K' => Ok(Self::new(Player::One, PieceKind::King)),
            'O' => Ok(Self::new(Player::Two, PieceKind::Man)),
            'Q' => Ok(Self::new(Player::Two, PieceKind::King)),
            _ => bail!("piece symbol should be within 'XKOQ', got '{symbol}'"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match (self.owner, self.kind) {
            (Player::One, PieceKind::Man) => 'X',
            (Player::One, PieceKind::King) => 'K',
            (Player::Two, PieceKind::Man) => 'O',
            (Player::Two, PieceKind::King) => 'Q',
        };
        write!(f, "{symbol}")
    }
}

/// A square on the board addressed by zero-based row and column. Both
/// components are always within `0..BOARD_WIDTH`.
///
/// Squares are written as a column letter followed by a one-based row number:
///
/// ```
/// use draughts::checkers::core::Square;
///
/// let square = Square::try_from("b3").unwrap();
/// assert_eq!((square.row(), square.col()), (2, 1));
/// assert_eq!(square.to_string(), "B3");
/// assert!(Square::try_from("I1").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Pieces only ever stand on dark squares.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square `rows` and `cols` away from this one or `None` if it
    /// would be off the board.
    #[must_use]
    pub fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(rows)?;
        let col = self.col.checked_add_signed(cols)?;
        (row < BOARD_WIDTH && col < BOARD_WIDTH).then_some(Self { row, col })
    }

    /// Iterates over all squares row by row, starting from row 0.
    pub fn iter() -> impl Iterator<Item = Self> {
        iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH).map(|(row, col)| Self { row, col })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = anyhow::Error;

    /// Creates a square from `(row, col)`.
    ///
    /// # Errors
    ///
    /// If either coordinate is outside `0..BOARD_WIDTH`.
    fn try_from((row, col): (u8, u8)) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            bail!("square coordinates should be in 0..{BOARD_WIDTH}, got ({row}, {col})");
        }
        Ok(Self { row, col })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((column, row)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            );
        };
        let col = match column.to_ascii_uppercase() {
            column @ 'A'..='H' => column as u8 - b'A',
            _ => bail!("column should be within 'A'..='H', got '{column}'"),
        };
        let row = match row {
            '1'..='8' => row as u8 - b'1',
            _ => bail!("row should be within '1'..='8', got '{row}'"),
        };
        Ok(Self { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.col), self.row + 1)
    }
}

/// A request to move the piece standing on `from` to `to`. Moves carry no
/// information about legality: that depends on the board they are applied to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Number of rows crossed by the move.
    #[must_use]
    pub const fn row_span(self) -> u8 {
        self.from.row.abs_diff(self.to.row)
    }

    /// Number of columns crossed by the move.
    #[must_use]
    pub const fn col_span(self) -> u8 {
        self.from.col.abs_diff(self.to.col)
    }

    /// 1 if the move goes towards higher rows, -1 towards lower rows and 0 if
    /// it stays on the same row.
    #[must_use]
    pub fn row_direction(self) -> i8 {
        direction(self.from.row, self.to.row)
    }

    /// Squares strictly between `from` and `to` in the order they are crossed.
    /// Only meaningful for diagonal moves.
    pub fn path(self) -> impl Iterator<Item = Square> {
        let (rows, cols) = (
            direction(self.from.row, self.to.row),
            direction(self.from.col, self.to.col),
        );
        let to = self.to;
        iter::successors(self.from.offset(rows, cols), move |square| {
            square.offset(rows, cols)
        })
        .take_while(move |square| *square != to)
    }

    /// The jumped-over square of a two-square diagonal move.
    #[must_use]
    pub fn middle(self) -> Option<Square> {
        if self.row_span() == 2 && self.col_span() == 2 {
            self.path().next()
        } else {
            None
        }
    }
}

fn direction(from: u8, to: u8) -> i8 {
    match to.cmp(&from) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    /// Parses a move written as two squares separated by whitespace, e.g.
    /// `A2 B3`.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let Some((from, to)) = input.split_whitespace().collect_tuple() else {
            bail!("move should be two squares in the format 'A2 B3', got '{input}'");
        };
        let from = Square::try_from(from).context("start square")?;
        let to = Square::try_from(to).context("destination square")?;
        Ok(Self::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn players() {
        assert_eq!(!Player::One, Player::Two);
        assert_eq!(!Player::Two, Player::One);
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.promotion_row(), 0);
        assert_eq!(Player::One.promotion_row(), 7);
    }

    #[test]
    fn promotion_is_one_way() {
        let mut piece = Piece::man(Player::Two);
        assert!(!piece.is_king());
        piece.promote();
        assert_eq!(piece, Piece::new(Player::Two, PieceKind::King));
        piece.promote();
        assert!(piece.is_king());
    }

    #[test]
    fn piece_symbols() {
        for symbol in ['X', 'K', 'O', 'Q'] {
            assert_eq!(Piece::try_from(symbol).unwrap().to_string(), symbol.to_string());
        }
        assert!(Piece::try_from('x').is_err());
    }

    #[test]
    fn square_parsing() {
        assert_eq!(Square::try_from("A1").unwrap(), Square { row: 0, col: 0 });
        assert_eq!(Square::try_from("h8").unwrap(), Square { row: 7, col: 7 });
        assert_eq!(
            Square::try_from("I2").unwrap_err().to_string(),
            "column should be within 'A'..='H', got 'I'"
        );
        assert_eq!(
            Square::try_from("A9").unwrap_err().to_string(),
            "row should be within '1'..='8', got '9'"
        );
        assert!(Square::try_from("A10").is_err());
        assert!(Square::try_from("").is_err());
        assert!(Square::try_from((8_u8, 0_u8)).is_err());
        assert!(Square::try_from((0_u8, 8_u8)).is_err());
    }

    #[test]
    fn square_offsets() {
        let corner = Square::try_from((0_u8, 0_u8)).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(2, 2), Some(Square { row: 2, col: 2 }));
        assert_eq!(Square::try_from((7_u8, 6_u8)).unwrap().offset(1, 1), None);
    }

    #[test]
    fn dark_squares() {
        assert_eq!(Square::iter().count(), 64);
        assert_eq!(Square::iter().filter(|square| square.is_dark()).count(), 32);
        assert!(Square::try_from("B1").unwrap().is_dark());
        assert!(!Square::try_from("A1").unwrap().is_dark());
    }

    #[test]
    fn move_geometry() {
        let long = Move::try_from("a1 e5").unwrap();
        assert_eq!(long.row_span(), 4);
        assert_eq!(long.col_span(), 4);
        assert_eq!(long.row_direction(), 1);
        assert_eq!(long.path().join(" "), "B2 C3 D4");
        assert_eq!(long.middle(), None);

        let jump = Move::try_from("E5 C3").unwrap();
        assert_eq!(jump.row_direction(), -1);
        assert_eq!(jump.middle(), Some(Square::try_from("D4").unwrap()));

        let step = Move::try_from("B3 C4").unwrap();
        assert_eq!(step.path().count(), 0);
        assert_eq!(step.to_string(), "B3 C4");
    }

    #[test]
    fn move_parsing_errors() {
        assert_eq!(
            Move::try_from("A2").unwrap_err().to_string(),
            "move should be two squares in the format 'A2 B3', got 'A2'"
        );
        assert_eq!(
            format!("{:#}", Move::try_from("A2 Z3").unwrap_err()),
            "destination square: column should be within 'A'..='H', got 'Z'"
        );
    }
}
