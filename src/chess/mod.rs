//! Implementation of chess rules: board representation, FEN parsing and
//! serialization, move generation and legality checks.

pub mod board;
pub mod core;
pub mod fen;
pub mod legality;
pub mod movegen;
