//! Conversion between [`Board`] and [Forsyth-Edwards Notation] (FEN).
//!
//! Accepted inputs consist of whitespace-separated fields:
//!
//! - Only the piece placement: the rest of the fields default to the starting
//!   values (`w KQkq - 0 1`).
//! - Four fields as in [EPD]: placement, side to move, castling rights and en
//!   passant target. Move counters default to `0 1`.
//! - The full six-field FEN.
//!
//! Encoding always produces the full six-field FEN.
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
//! [EPD]: https://www.chessprogramming.org/Extended_Position_Description

use std::fmt::{self, Write};
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::chess::board::{Board, MAX_PIECES};
use crate::chess::core::{
    CastleRights,
    File,
    Piece,
    Player,
    Rank,
    Square,
    BOARD_WIDTH,
};

/// Reasons for rejecting a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The placement field does not describe exactly 8 ranks of 8 squares with
    /// known piece symbols.
    #[error("malformed piece placement: {0}")]
    MalformedPlacement(String),
    #[allow(missing_docs)]
    #[error("side to move should be 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),
    #[allow(missing_docs)]
    #[error("unexpected symbol in castling rights: '{0}'")]
    InvalidCastlingField(char),
    #[allow(missing_docs)]
    #[error("move counter should be a non-negative number, got '{0}'")]
    InvalidMoveCounter(String),
    /// En passant target is not a square or is on a rank that is impossible
    /// for the side to move.
    #[error("invalid en passant target: {0}")]
    InvalidEnPassant(String),
    /// Only 1, 4 and 6 fields are accepted.
    #[error("expected 1, 4 or 6 fields, got {0}")]
    FieldCount(usize),
}

/// Parses the position from a FEN (or EPD) string.
///
/// Only the syntax of the fields is checked: the result may describe a
/// position that is unreachable in an actual game.
///
/// ```
/// use rookery::chess::fen;
///
/// let board = fen::decode("8/8/8/8/8/8/8/K6k b - - 12 50").unwrap();
/// assert_eq!(board.halfmove_clock(), 12);
/// assert!(fen::decode("8/8/8 w - - 0 1").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`FenError`] describing the first problem found.
pub fn decode(input: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = input.split_ascii_whitespace().collect();
    let (placement, side_to_move, castling, en_passant, halfmove, fullmove) = match fields[..] {
        [placement] => (placement, "w", "KQkq", "-", "0", "1"),
        [placement, side_to_move, castling, en_passant] => {
            (placement, side_to_move, castling, en_passant, "0", "1")
        },
        [placement, side_to_move, castling, en_passant, halfmove, fullmove] => {
            (placement, side_to_move, castling, en_passant, halfmove, fullmove)
        },
        _ => return Err(FenError::FieldCount(fields.len())),
    };

    let pieces = parse_placement(placement)?;
    let side_to_move = parse_side_to_move(side_to_move)?;
    let castling = parse_castling(castling)?;
    let en_passant = parse_en_passant(en_passant, side_to_move)?;
    let halfmove_clock = parse_counter(halfmove)?;
    let fullmove_number = parse_counter(fullmove)?;

    Board::new(
        &pieces,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    )
    .map_err(|e| FenError::MalformedPlacement(e.to_string()))
}

/// Serializes the position into the six-field FEN. Consecutive empty squares
/// are compressed into digits.
#[must_use]
pub fn encode(board: &Board) -> String {
    board.to_string()
}

fn parse_placement(placement: &str) -> Result<ArrayVec<(Square, Piece), MAX_PIECES>, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_WIDTH as usize {
        return Err(FenError::MalformedPlacement(format!(
            "expected {BOARD_WIDTH} ranks, got {}",
            ranks.len()
        )));
    }
    let mut pieces = ArrayVec::new();
    // FEN lists the ranks from 8 to 1.
    for (rank_fen, rank) in ranks.iter().zip(Rank::ALL.iter().rev()) {
        let mut file: u8 = 0;
        for symbol in rank_fen.chars() {
            if file >= BOARD_WIDTH {
                return Err(FenError::MalformedPlacement(format!(
                    "rank {rank} has more than {BOARD_WIDTH} squares: '{rank_fen}'"
                )));
            }
            if let Some(skip) = symbol.to_digit(10) {
                if skip == 0 || skip > u32::from(BOARD_WIDTH - file) {
                    return Err(FenError::MalformedPlacement(format!(
                        "invalid number of empty squares {skip} in '{rank_fen}'"
                    )));
                }
                file += skip as u8;
                continue;
            }
            let piece = Piece::try_from(symbol)
                .map_err(|e| FenError::MalformedPlacement(e.to_string()))?;
            let square = Square::new(File::ALL[usize::from(file)], *rank);
            if pieces.try_push((square, piece)).is_err() {
                return Err(FenError::MalformedPlacement(format!(
                    "expected at most {MAX_PIECES} pieces"
                )));
            }
            file += 1;
        }
        if file != BOARD_WIDTH {
            return Err(FenError::MalformedPlacement(format!(
                "rank {rank} has {file} squares instead of {BOARD_WIDTH}: '{rank_fen}'"
            )));
        }
    }
    Ok(pieces)
}

fn parse_side_to_move(side_to_move: &str) -> Result<Player, FenError> {
    match side_to_move {
        "w" => Ok(Player::White),
        "b" => Ok(Player::Black),
        _ => Err(FenError::InvalidSideToMove(side_to_move.to_string())),
    }
}

/// Accepts `-` or any combination of `KQkq` in any order.
fn parse_castling(castling: &str) -> Result<CastleRights, FenError> {
    if castling == "-" {
        return Ok(CastleRights::empty());
    }
    let mut rights = CastleRights::empty();
    for symbol in castling.chars() {
        rights |= match symbol {
            'K' => CastleRights::WHITE_SHORT,
            'Q' => CastleRights::WHITE_LONG,
            'k' => CastleRights::BLACK_SHORT,
            'q' => CastleRights::BLACK_LONG,
            _ => return Err(FenError::InvalidCastlingField(symbol)),
        };
    }
    Ok(rights)
}

fn parse_en_passant(en_passant: &str, side_to_move: Player) -> Result<Option<Square>, FenError> {
    if en_passant == "-" {
        return Ok(None);
    }
    let square =
        Square::try_from(en_passant).map_err(|e| FenError::InvalidEnPassant(e.to_string()))?;
    let expected_rank = Rank::en_passant_target(side_to_move);
    if square.rank() != expected_rank {
        return Err(FenError::InvalidEnPassant(format!(
            "{square} is not on rank {expected_rank} while {side_to_move} is to move"
        )));
    }
    Ok(Some(square))
}

/// Only plain decimal digits are accepted: no signs.
fn parse_counter(counter: &str) -> Result<u16, FenError> {
    if !counter.bytes().all(|symbol| symbol.is_ascii_digit()) {
        return Err(FenError::InvalidMoveCounter(counter.to_string()));
    }
    counter
        .parse::<u16>()
        .map_err(|_| FenError::InvalidMoveCounter(counter.to_string()))
}

impl FromStr for Board {
    type Err = FenError;

    /// Parses the position in strict FEN (or EPD) format: see [`decode`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        decode(input)
    }
}

impl TryFrom<&str> for Board {
    type Error = FenError;

    /// Parses the position from FEN or EPD, tolerating the surrounding
    /// whitespace and the `fen`/`epd` prefixes commonly used in text
    /// protocols.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let input = input.trim();
        let input = input
            .strip_prefix("fen ")
            .or_else(|| input.strip_prefix("epd "))
            .unwrap_or(input);
        let result = decode(input);
        if let Err(error) = &result {
            tracing::debug!(%error, input, "rejected position");
        }
        result
    }
}

impl fmt::Display for Board {
    /// Prints board in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            let mut empty_squares = 0u8;
            for file in File::ALL {
                match self.piece_at(Square::new(file, *rank)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if *rank != Rank::One {
                f.write_char('/')?;
            }
        }
        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(square) => write!(f, "{square}")?,
            None => f.write_char('-')?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
