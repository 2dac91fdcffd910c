//! Provides fully-specified [Chess Position] on top of the [Mailbox] board
//! representation: a 10x12 grid of [`Cell`]s where the outer frame consists of
//! [`Cell::OffBoard`] sentinels, plus a list of occupied squares for iterating
//! over the pieces without scanning the whole grid.
//!
//! [Chess Position]: https://www.chessprogramming.org/Chess_Position
//! [Mailbox]: https://www.chessprogramming.org/Mailbox

use std::fmt;
use std::hash::{Hash, Hasher};

use anyhow::bail;
use arrayvec::ArrayVec;

use crate::chess::core::{
    CastleRights,
    File,
    Move,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_WIDTH,
    MAILBOX_SIZE,
    MAILBOX_WIDTH,
};

/// Upper bound for the number of pieces on the board.
pub const MAX_PIECES: usize = 32;

/// Contents of a single padded board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Sentinel: part of the padding frame around the board.
    OffBoard,
    #[allow(missing_docs)]
    Empty,
    #[allow(missing_docs)]
    Occupied(Piece),
}

impl Cell {
    /// Returns `true` if the cell holds a piece that does not belong to
    /// `player`.
    #[must_use]
    pub const fn is_enemy_of(self, player: Player) -> bool {
        matches!(self, Self::Occupied(piece) if piece.owner as u8 != player as u8)
    }
}

/// State of the chess game: the pieces, whose turn it is and the information
/// that is not visible on the board but matters for the rules (castling rights,
/// en passant target and the move counters).
///
/// [`Board`] is immutable from the outside: [`Board::make_move`] produces a new
/// position and leaves the original intact, so that the move generator can
/// explore hypothetical continuations freely.
///
/// Two boards are equal when they describe the same position. The order in
/// which the pieces are tracked internally does not matter.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; MAILBOX_SIZE],
    pieces: ArrayVec<Square, MAX_PIECES>,
    side_to_move: Player,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [Cell::OffBoard; MAILBOX_SIZE];
        for square in Square::ALL {
            cells[square.mailbox()] = Cell::Empty;
        }
        Self {
            cells,
            pieces: ArrayVec::new(),
            side_to_move: Player::White,
            castling: CastleRights::empty(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the starting position of the standard chess.
    ///
    /// ```
    /// use rookery::chess::board::Board;
    ///
    /// let starting_position = Board::starting();
    /// assert_eq!(
    ///     &starting_position.to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for player in [Player::White, Player::Black] {
            for (file, kind) in File::ALL.into_iter().zip(BACKRANK) {
                board.place(
                    Square::new(file, Rank::backrank(player)),
                    Piece::new(player, kind),
                );
                board.place(
                    Square::new(file, Rank::pawns_starting(player)),
                    Piece::new(player, PieceKind::Pawn),
                );
            }
        }
        board.castling = CastleRights::all();
        board
    }

    /// Assembles a board from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if two pieces are placed on the same square or there
    /// are more than [`MAX_PIECES`] pieces.
    pub fn new(
        placement: &[(Square, Piece)],
        side_to_move: Player,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> anyhow::Result<Self> {
        if placement.len() > MAX_PIECES {
            bail!(
                "expected at most {MAX_PIECES} pieces, got {}",
                placement.len()
            );
        }
        let mut board = Self::empty();
        for &(square, piece) in placement {
            if board.piece_at(square).is_some() {
                bail!("square {square} is occupied by more than one piece");
            }
            board.place(square, piece);
        }
        board.side_to_move = side_to_move;
        board.castling = castling;
        board.en_passant = en_passant;
        board.halfmove_clock = halfmove_clock;
        board.fullmove_number = fullmove_number;
        Ok(board)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square a pawn passed over with its double push in the previous
    /// move, if any.
    #[must_use]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Number of halfmoves since the last capture or pawn move.
    #[must_use]
    pub const fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Starts at 1 and is incremented after each Black move.
    #[must_use]
    pub const fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Squares of all the pieces on the board in no particular order.
    #[must_use]
    pub fn pieces(&self) -> &[Square] {
        &self.pieces
    }

    /// Cell at the given padded board index. Indices outside of the padded
    /// board are treated as off-board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::OffBoard)
    }

    /// Returns `true` if the padded board index belongs to the playing area.
    #[must_use]
    pub fn is_valid_square(&self, index: usize) -> bool {
        self.cell(index) != Cell::OffBoard
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        match self.cells[square.mailbox()] {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty | Cell::OffBoard => None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn piece_kind_at(&self, square: Square) -> Option<PieceKind> {
        self.piece_at(square).map(|piece| piece.kind)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.mailbox()] == Cell::Empty
    }

    /// Returns `true` if the square holds a piece of the side to move.
    #[must_use]
    pub fn is_own_piece(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.owner == self.side_to_move)
    }

    /// Returns `true` if the square holds a piece of the side not to move.
    #[must_use]
    pub fn is_enemy_piece(&self, square: Square) -> bool {
        self.cells[square.mailbox()].is_enemy_of(self.side_to_move)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_en_passant_target(&self, square: Square) -> bool {
        self.en_passant == Some(square)
    }

    /// Square of the `player`'s king or `None` if there is no king on the
    /// board.
    #[must_use]
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces.iter().copied().find(|&square| {
            self.piece_at(square) == Some(Piece::new(player, PieceKind::King))
        })
    }

    /// Produces the position after `next_move` is played. The move is expected
    /// to be produced by the move generator for this position: the piece on
    /// `from` must belong to the side to move.
    ///
    /// Captures (including en passant) remove the captured piece, castling
    /// relocates the rook, promotions replace the pawn and the castling rights,
    /// en passant target and move counters are updated accordingly.
    ///
    /// A null move (`from == to`) only passes the turn and clears the en
    /// passant target.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on the origin square of a non-null move. In
    /// debug builds, also panics if that piece belongs to the opponent.
    #[must_use]
    pub fn make_move(&self, next_move: Move) -> Self {
        let us = self.side_to_move;
        let mut next = self.clone();
        next.side_to_move = us.opponent();
        next.en_passant = None;
        if next_move.is_null() {
            return next;
        }

        let (from, to) = (next_move.from(), next_move.to());
        let Some(moving) = self.piece_at(from) else {
            unreachable!("no piece to move on {from} in {self}");
        };
        debug_assert_eq!(moving.owner, us, "{next_move} moves an enemy piece in {self}");

        let mut irreversible = moving.kind == PieceKind::Pawn;
        if self.piece_at(to).is_some() {
            next.remove(to);
            next.castling.remove(CastleRights::for_rook_square(to));
            irreversible = true;
        } else if moving.kind == PieceKind::Pawn && self.en_passant == Some(to) {
            // The captured pawn is right behind the target square.
            next.remove(Square::new(to.file(), from.rank()));
            irreversible = true;
        }

        let landing = match next_move.promotion() {
            Some(promotion) => Piece::new(us, promotion.into()),
            None => moving,
        };
        next.relocate(from, to, landing);

        match moving.kind {
            PieceKind::King => {
                next.castling.remove(CastleRights::both(us));
                if from.file().distance(to.file()) == 2 {
                    let (rook_from, rook_to) = if to.file() > from.file() {
                        (File::H, File::F)
                    } else {
                        (File::A, File::D)
                    };
                    let rank = from.rank();
                    let (rook_from, rook_to) =
                        (Square::new(rook_from, rank), Square::new(rook_to, rank));
                    if let Some(rook) = next.piece_at(rook_from) {
                        next.relocate(rook_from, rook_to, rook);
                    }
                }
            },
            PieceKind::Rook => next.castling.remove(CastleRights::for_rook_square(from)),
            PieceKind::Pawn if from.mailbox().abs_diff(to.mailbox()) == 2 * MAILBOX_WIDTH => {
                next.en_passant = from.shift(us.push_direction());
            },
            _ => (),
        }

        next.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if us == Player::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        next
    }

    fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.mailbox()] = Cell::Occupied(piece);
        self.pieces.push(square);
    }

    /// Removes the piece from `square`. Empty squares are left intact.
    fn remove(&mut self, square: Square) {
        self.cells[square.mailbox()] = Cell::Empty;
        if let Some(index) = self.pieces.iter().position(|&other| other == square) {
            let _ = self.pieces.swap_remove(index);
        }
    }

    /// Moves the piece on `from` to `to` (which must be empty), possibly
    /// changing its kind.
    fn relocate(&mut self, from: Square, to: Square, piece: Piece) {
        self.cells[from.mailbox()] = Cell::Empty;
        self.cells[to.mailbox()] = Cell::Occupied(piece);
        if let Some(entry) = self.pieces.iter_mut().find(|occupied| **occupied == from) {
            *entry = to;
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.side_to_move.hash(state);
        self.castling.hash(state);
        self.en_passant.hash(state);
        self.halfmove_clock.hash(state);
        self.fullmove_number.hash(state);
    }
}

impl fmt::Debug for Board {
    /// Prints the board in a human-readable grid (White at the bottom)
    /// followed by the FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            for file in File::ALL {
                if file != File::A {
                    f.write_str(" ")?;
                }
                match self.piece_at(Square::new(file, *rank)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "FEN: {self}")
    }
}
