//! Pseudo-legal [move generation]: every move that follows the movement rules
//! of the pieces, ignoring whether the mover's king is left in check. Moves
//! that expose the king are filtered out by [`crate::chess::legality`].
//!
//! The generator walks the padded board: leapers (king and knight) try a fixed
//! set of offsets and sliders (bishop, rook and queen) repeat their offsets
//! until they hit a piece or an off-board cell. Since the frame around the
//! board is wide enough for the longest jump, no bounds checks are needed.
//!
//! [move generation]: https://www.chessprogramming.org/Move_Generation

use crate::chess::board::{Board, Cell};
use crate::chess::core::{
    CastleRights,
    Direction,
    File,
    Move,
    MoveFlags,
    Piece,
    PieceKind,
    Player,
    Promotion,
    Rank,
    Square,
};

const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

const KING_OFFSETS: [isize; 8] = [
    Direction::UpLeft.offset(),
    Direction::Up.offset(),
    Direction::UpRight.offset(),
    Direction::Right.offset(),
    Direction::Left.offset(),
    Direction::DownLeft.offset(),
    Direction::Down.offset(),
    Direction::DownRight.offset(),
];

const DIAGONALS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

const ORTHOGONALS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Generates pseudo-legal moves of the piece on `from`. Returns nothing for an
/// empty square.
///
/// ```
/// use rookery::chess::board::Board;
/// use rookery::chess::core::Square;
/// use rookery::chess::movegen;
///
/// let board = Board::starting();
/// assert_eq!(movegen::pseudo_legal_moves(&board, Square::G1).len(), 2);
/// assert!(movegen::pseudo_legal_moves(&board, Square::E4).is_empty());
/// ```
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    generate(board, from, &mut moves);
    moves
}

/// Generates pseudo-legal moves of all the pieces of the side to move.
#[must_use]
pub fn all_pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for &from in board.pieces() {
        if board.is_own_piece(from) {
            generate(board, from, &mut moves);
        }
    }
    moves
}

/// Appends the moves of the piece on `from` to `moves`. The moves are produced
/// for the piece's owner, who does not have to be the side to move: that is
/// how the attacks of the opponent are found.
pub(crate) fn generate(board: &Board, from: Square, moves: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.owner, moves),
        PieceKind::Knight => leaper_moves(board, from, piece.owner, KNIGHT_OFFSETS, moves),
        PieceKind::Bishop => slider_moves(board, from, piece.owner, &DIAGONALS, moves),
        PieceKind::Rook => slider_moves(board, from, piece.owner, &ORTHOGONALS, moves),
        PieceKind::Queen => {
            slider_moves(board, from, piece.owner, &ORTHOGONALS, moves);
            slider_moves(board, from, piece.owner, &DIAGONALS, moves);
        },
        PieceKind::King => {
            leaper_moves(board, from, piece.owner, KING_OFFSETS, moves);
            castling_moves(board, from, piece.owner, moves);
        },
    }
}

/// Converts the target cell into a move if it is empty or holds an enemy
/// piece. Returns `false` if the cell is blocked.
fn try_land(
    owner: Player,
    from: Square,
    target: usize,
    cell: Cell,
    moves: &mut Vec<Move>,
) -> bool {
    let Some(to) = Square::from_mailbox(target) else {
        return false;
    };
    match cell {
        Cell::Empty => moves.push(Move::new(from, to)),
        Cell::Occupied(piece) if piece.owner != owner => {
            moves.push(Move::with(from, to, None, MoveFlags::CAPTURE));
        },
        Cell::Occupied(_) | Cell::OffBoard => return false,
    }
    true
}

fn leaper_moves(
    board: &Board,
    from: Square,
    owner: Player,
    offsets: [isize; 8],
    moves: &mut Vec<Move>,
) {
    for offset in offsets {
        let target = from.mailbox().wrapping_add_signed(offset);
        let _ = try_land(owner, from, target, board.cell(target), moves);
    }
}

fn slider_moves(
    board: &Board,
    from: Square,
    owner: Player,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for direction in directions {
        let mut target = from.mailbox();
        loop {
            target = target.wrapping_add_signed(direction.offset());
            let cell = board.cell(target);
            // Stop after a capture or in front of an obstacle.
            if !try_land(owner, from, target, cell, moves) || cell != Cell::Empty {
                break;
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Square, owner: Player, moves: &mut Vec<Move>) {
    let push = owner.push_direction();
    let Some(single) = from.shift(push) else {
        return;
    };
    if board.is_empty(single) {
        push_pawn_move(from, single, owner, MoveFlags::empty(), moves);
        if from.rank() == Rank::pawns_starting(owner) {
            if let Some(double) = single.shift(push) {
                if board.is_empty(double) {
                    moves.push(Move::with(from, double, None, MoveFlags::DOUBLE_PAWN_PUSH));
                }
            }
        }
    }
    for side in [Direction::Left, Direction::Right] {
        let Some(target) = single.shift(side) else {
            continue;
        };
        match board.piece_at(target) {
            Some(piece) if piece.owner != owner => {
                push_pawn_move(from, target, owner, MoveFlags::CAPTURE, moves);
            },
            None if owner == board.side_to_move() && board.is_en_passant_target(target) => {
                moves.push(Move::with(
                    from,
                    target,
                    None,
                    MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
                ));
            },
            _ => (),
        }
    }
}

/// Pawn reaching the last rank produces one move per promotion choice.
fn push_pawn_move(
    from: Square,
    to: Square,
    owner: Player,
    flags: MoveFlags,
    moves: &mut Vec<Move>,
) {
    if to.rank() == Rank::promotion(owner) {
        for promotion in Promotion::ALL {
            moves.push(Move::with(from, to, Some(promotion), flags));
        }
    } else {
        moves.push(Move::with(from, to, None, flags));
    }
}

/// Castling is offered when the king and the rook stand on their original
/// squares, the right is still available and the squares between them are
/// empty. Whether the king passes through an attacked square is decided by the
/// legality filter.
fn castling_moves(board: &Board, from: Square, owner: Player, moves: &mut Vec<Move>) {
    let backrank = Rank::backrank(owner);
    if from != Square::new(File::E, backrank) {
        return;
    }
    let rook = Some(Piece::new(owner, PieceKind::Rook));
    let is_empty = |file: File| board.is_empty(Square::new(file, backrank));
    if board.castling().contains(CastleRights::short(owner))
        && board.piece_at(Square::new(File::H, backrank)) == rook
        && is_empty(File::F)
        && is_empty(File::G)
    {
        moves.push(Move::with(
            from,
            Square::new(File::G, backrank),
            None,
            MoveFlags::KINGSIDE_CASTLE,
        ));
    }
    if board.castling().contains(CastleRights::long(owner))
        && board.piece_at(Square::new(File::A, backrank)) == rook
        && is_empty(File::B)
        && is_empty(File::C)
        && is_empty(File::D)
    {
        moves.push(Move::with(
            from,
            Square::new(File::C, backrank),
            None,
            MoveFlags::QUEENSIDE_CASTLE,
        ));
    }
}
