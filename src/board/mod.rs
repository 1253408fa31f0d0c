//! Bitboard chess position: representation, make/unmake, Zobrist hashing,
//! and the FEN codec.

pub mod error;
pub mod fen;
mod state;
pub mod types;
mod zobrist;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{NullUndoInfo, Position, UndoInfo};
