//! [Perft] (*per*formance *t*esting) is a technique for checking correctness of
//! move generation: the number of leaf nodes of the legal move tree at a given
//! depth is compared against well-known reference values.
//!
//! The subtrees of the root moves are independent, so they are counted in
//! parallel.
//!
//! [Perft]: https://www.chessprogramming.org/Perft

use rayon::prelude::*;

use crate::chess::board::Board;
use crate::chess::core::Move;

/// Counts the leaf nodes of the legal move tree of given `depth`.
///
/// ```
/// use rookery::chess::board::Board;
/// use rookery::perft::perft;
///
/// assert_eq!(perft(&Board::starting(), 2), 400);
/// ```
#[must_use]
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    divide(board, depth).iter().map(|(_, nodes)| nodes).sum()
}

/// Counts the leaf nodes under each legal root move. This is the usual way of
/// narrowing down a move generation bug: the numbers are compared against a
/// trusted implementation and the mismatching subtree is explored further.
#[must_use]
pub fn divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    board
        .legal_moves()
        .into_par_iter()
        .map(|root| (root, count(&board.make_move(root), depth - 1)))
        .collect()
}

fn count(board: &Board, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => board.legal_moves().len() as u64,
        _ => board
            .legal_moves()
            .into_iter()
            .map(|next| count(&board.make_move(next), depth - 1))
            .sum(),
    }
}
