//! Parse error types for board components.
//!
//! Modeled as plain enums with manual `Display`/`Error` impls rather than a
//! derive-macro crate: the error surface here is small and fixed.

use std::fmt;

/// Errors that can occur when constructing a [`crate::board::types::Square`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "rank {rank} out of bounds"),
            SquareError::FileOutOfBounds { file } => write!(f, "file {file} out of bounds"),
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation: {notation}")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Errors that can occur when parsing a FEN string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    WrongFieldCount { found: usize },
    BadPiecePlacement { detail: String },
    BadSideToMove { token: String },
    BadCastlingRights { token: String },
    BadEnPassant { token: String },
    BadHalfmoveClock { token: String },
    BadFullmoveNumber { token: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 FEN fields, found {found}")
            }
            FenError::BadPiecePlacement { detail } => {
                write!(f, "invalid piece placement field: {detail}")
            }
            FenError::BadSideToMove { token } => write!(f, "invalid side-to-move field: {token}"),
            FenError::BadCastlingRights { token } => {
                write!(f, "invalid castling rights field: {token}")
            }
            FenError::BadEnPassant { token } => write!(f, "invalid en-passant field: {token}"),
            FenError::BadHalfmoveClock { token } => {
                write!(f, "invalid halfmove clock field: {token}")
            }
            FenError::BadFullmoveNumber { token } => {
                write!(f, "invalid fullmove number field: {token}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Errors that can occur when parsing a UCI long-algebraic move token
/// (e.g. `e2e4`, `e7e8q`) against a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    InvalidNotation { notation: String },
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidNotation { notation } => {
                write!(f, "invalid move notation: {notation}")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "illegal move: {notation}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
