//! Legal move generation and check detection.
//!
//! A move is legal if it is pseudo-legal and the mover's king is not attacked
//! in the resulting position. Attacks are found by generating the opponent's
//! pseudo-legal moves and looking for one that lands on the king. Pinned
//! pieces, en passant discovered checks and king walks into attacked squares
//! are all covered by the same test.
//!
//! Castling additionally requires that the king is not in check and does not
//! pass through an attacked square.

use crate::chess::board::Board;
use crate::chess::core::{Direction, Move, MoveFlags, Square};
use crate::chess::movegen;

impl Board {
    /// Generates all legal moves of the side to move.
    ///
    /// ```
    /// use rookery::chess::board::Board;
    ///
    /// assert_eq!(Board::starting().legal_moves().len(), 20);
    /// ```
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = movegen::all_pseudo_legal_moves(self);
        let mut in_check = None;
        moves.retain(|&candidate| {
            if candidate.is_castle() {
                if *in_check.get_or_insert_with(|| self.is_check()) {
                    return false;
                }
                let transit = if candidate.flags().contains(MoveFlags::KINGSIDE_CASTLE) {
                    Direction::Right
                } else {
                    Direction::Left
                };
                match candidate.from().shift(transit) {
                    Some(square) if !self.is_self_check(Move::new(candidate.from(), square)) => (),
                    _ => return false,
                }
            }
            !self.is_self_check(candidate)
        });
        moves
    }

    /// Same as [`Board::legal_moves`] but the moves that attack the opponent's
    /// king are marked with [`MoveFlags::CHECK`].
    #[must_use]
    pub fn annotated_legal_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .map(|candidate| {
                if self.gives_check(candidate) {
                    candidate.with_check()
                } else {
                    candidate
                }
            })
            .collect()
    }

    /// Returns `true` if playing `candidate` leaves the mover's king attacked.
    /// Positions without the mover's king are never considered in check.
    #[must_use]
    pub fn is_self_check(&self, candidate: Move) -> bool {
        let mover = self.side_to_move();
        let next = self.make_move(candidate);
        next.king_square(mover)
            .is_some_and(|king| is_attacked(&next, king))
    }

    /// Returns `true` if the king of the side to move is attacked.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_self_check(Move::null())
    }

    /// Returns `true` if playing `candidate` attacks the opponent's king.
    #[must_use]
    pub fn gives_check(&self, candidate: Move) -> bool {
        self.make_move(candidate).is_check()
    }

    /// The side to move is in check and has no legal moves.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.legal_moves().is_empty() && self.is_check()
    }

    /// The side to move is not in check but has no legal moves.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.legal_moves().is_empty() && !self.is_check()
    }

    /// Looks up the legal move in [UCI notation] (e.g. `e2e4`, `e1g1` or
    /// `e7e8q`).
    ///
    /// [UCI notation]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    #[must_use]
    pub fn find_move(&self, uci: &str) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|candidate| candidate.uci() == uci)
    }
}

/// Returns `true` if any piece of the side to move can land on `target`.
fn is_attacked(board: &Board, target: Square) -> bool {
    let mut moves = Vec::new();
    board
        .pieces()
        .iter()
        .filter(|&&from| board.is_own_piece(from))
        .any(|&from| {
            moves.clear();
            movegen::generate(board, from, &mut moves);
            moves.iter().any(|attack| attack.to() == target)
        })
}
