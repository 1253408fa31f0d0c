//! 32-bit packed move representation.
//!
//! Unlike a flag-based encoding, every field relevant to make/unmake and
//! move ordering is stored explicitly so it can be read back without
//! redundant board lookups: from-square, to-square, the moving piece's
//! color and kind, the captured kind (if any), the promotion kind (if
//! any), and the castle/en-passant flags.
//!
//! Bit layout (low to high):
//! ```text
//! bits 0..=5    from square       (0-63)
//! bits 6..=11   to square         (0-63)
//! bits 12..=14  moving piece kind (0-5)
//! bit  15       moving piece color (0=white, 1=black)
//! bits 16..=18  captured piece kind, or 7 if no capture
//! bits 19..=21  promotion piece kind, or 7 if no promotion
//! bit  22       is-castle
//! bit  23       is-en-passant
//! ```

use std::fmt;

use super::piece::{Color, PieceKind};
use super::square::Square;

const NO_PIECE: u32 = 7;

/// A single legal or pseudo-legal move, packed into 32 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

/// Parameters for [`Move::new`], grouped so the constructor doesn't take
/// eight positional arguments.
pub struct MoveSpec {
    pub from: Square,
    pub to: Square,
    pub moving_color: Color,
    pub moving_kind: PieceKind,
    pub captured_kind: Option<PieceKind>,
    pub promotion_kind: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub const NULL: Move = Move(0);

    #[must_use]
    pub fn new(spec: MoveSpec) -> Self {
        let mut bits: u32 = 0;
        bits |= spec.from.index() as u32;
        bits |= (spec.to.index() as u32) << 6;
        bits |= (spec.moving_kind.index() as u32) << 12;
        bits |= (spec.moving_color.index() as u32) << 15;
        bits |= spec.captured_kind.map_or(NO_PIECE, |k| k.index() as u32) << 16;
        bits |= spec.promotion_kind.map_or(NO_PIECE, |k| k.index() as u32) << 19;
        bits |= (spec.is_castle as u32) << 22;
        bits |= (spec.is_en_passant as u32) << 23;
        Move(bits)
    }

    #[inline]
    #[must_use]
    pub fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub fn moving_kind(self) -> PieceKind {
        PieceKind::from_index(((self.0 >> 12) & 0x7) as usize)
    }

    #[inline]
    #[must_use]
    pub fn moving_color(self) -> Color {
        if (self.0 >> 15) & 1 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn captured_kind(self) -> Option<PieceKind> {
        let bits = (self.0 >> 16) & 0x7;
        if bits == NO_PIECE {
            None
        } else {
            Some(PieceKind::from_index(bits as usize))
        }
    }

    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        self.captured_kind().is_some() || self.is_en_passant()
    }

    #[inline]
    #[must_use]
    pub fn promotion_kind(self) -> Option<PieceKind> {
        let bits = (self.0 >> 19) & 0x7;
        if bits == NO_PIECE {
            None
        } else {
            Some(PieceKind::from_index(bits as usize))
        }
    }

    #[inline]
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.promotion_kind().is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        (self.0 >> 22) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        (self.0 >> 23) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    #[inline]
    #[must_use]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Long algebraic notation (`e2e4`, `e7e8q`), the form UCI speaks.
    #[must_use]
    pub fn to_uci(self) -> String {
        let mut s = format!("{}{}", self.from(), self.to());
        if let Some(promo) = self.promotion_kind() {
            s.push(promo.to_char(Color::Black));
        }
        s
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
