//! Piece kind and color.

use std::fmt;

/// The six piece kinds, excluding color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const PROMOTION_KINDS: [PieceKind; 4] =
        [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        match idx {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Standard material value in centipawns.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    #[must_use]
    pub const fn to_char(self, color: Color) -> char {
        let upper = match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(Color::White))
    }
}

/// The side to move / owner of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A colored piece, densely encoded as 1 bit of color plus a 3-bit piece
/// kind, fitting in a nibble. Used where the transposition table or move
/// encoding needs the compact form; the ergonomic API surface elsewhere
/// uses `Option<(Color, PieceKind)>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColoredPiece(u8);

impl ColoredPiece {
    pub const NONE: ColoredPiece = ColoredPiece(0b1111);

    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        ColoredPiece(((color as u8) << 3) | kind as u8)
    }

    #[must_use]
    pub const fn from_option(piece: Option<(Color, PieceKind)>) -> Self {
        match piece {
            Some((color, kind)) => ColoredPiece::new(color, kind),
            None => ColoredPiece::NONE,
        }
    }

    #[must_use]
    pub const fn to_option(self) -> Option<(Color, PieceKind)> {
        if self.0 == Self::NONE.0 {
            None
        } else {
            let color = if self.0 & 0b1000 == 0 { Color::White } else { Color::Black };
            Some((color, PieceKind::from_index((self.0 & 0b0111) as usize)))
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}
