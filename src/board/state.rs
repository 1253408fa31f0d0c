//! `Position`: full board state. Evaluation is not maintained
//! incrementally here (deliberately) — callers recompute it from the
//! `Position` on demand.

use super::types::{Bitboard, CastlingRights, Color, Move, PieceKind, Square};
use super::zobrist;

/// Information needed to undo a single `make_move` call.
#[derive(Clone, Copy)]
pub struct UndoInfo {
    pub captured: Option<(Color, PieceKind)>,
    pub previous_en_passant: Option<Square>,
    pub previous_castling: CastlingRights,
    pub previous_hash: u64,
    pub previous_halfmove_clock: u16,
    pub previous_irreversible_ply: usize,
}

/// Information needed to undo a `make_null_move` call.
#[derive(Clone, Copy)]
pub struct NullUndoInfo {
    pub previous_en_passant: Option<Square>,
    pub previous_hash: u64,
}

/// A complete chess position: bitboards per color/kind, side to move,
/// castling rights, en-passant target, halfmove clock, and the running
/// Zobrist hash plus enough history to detect repetition since the last
/// irreversible move.
#[derive(Clone)]
pub struct Position {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u32,
    hash: u64,
    /// Hashes of every position reached since the last irreversible move.
    history: Vec<u64>,
    /// Index into `history` marking the start of the current repetition
    /// epoch; cleared (by truncation of meaning, not of the vec) whenever
    /// an irreversible move is made: capture, pawn move, castle, or a
    /// castling-rights change all start a new epoch.
    irreversible_ply: usize,
}

impl Position {
    #[must_use]
    pub fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            history: Vec::with_capacity(64),
            irreversible_ply: 0,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant_square(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_fullmove_number(&mut self, n: u32) {
        self.fullmove_number = n;
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[must_use]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let bit = Bitboard::from_square(sq);
        if !self.all_occupied.intersects(bit) {
            return None;
        }
        let color = if self.occupied[0].intersects(bit) { Color::White } else { Color::Black };
        for &kind in &PieceKind::ALL {
            if self.pieces[color.index()][kind.index()].intersects(bit) {
                return Some((color, kind));
            }
        }
        None
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, kind: PieceKind) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][kind.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
    }

    pub fn remove_piece(&mut self, sq: Square, color: Color, kind: PieceKind) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][kind.index()] &= !bit;
        self.occupied[color.index()] &= !bit;
        self.all_occupied &= !bit;
    }

    /// King square for `color`. Every valid position has exactly one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        let bb = self.pieces[color.index()][PieceKind::King.index()];
        debug_assert!(!bb.is_empty(), "position has no king for {color}");
        bb.iter().next().unwrap_or(Square::new(0, 0))
    }

    /// Recompute the Zobrist hash from scratch (used only when loading a
    /// FEN; make/unmake maintain it incrementally afterward).
    pub fn recompute_hash(&mut self) {
        let mut pieces = Vec::with_capacity(32);
        for &color in &[Color::White, Color::Black] {
            for &kind in &PieceKind::ALL {
                for sq in self.pieces[color.index()][kind.index()].iter() {
                    pieces.push((color, kind, sq));
                }
            }
        }
        self.hash = zobrist::hash_position(
            pieces.into_iter(),
            self.side_to_move,
            self.castling,
            self.en_passant.map(Square::file),
        );
    }

    fn clear_castling_right(&mut self, bit: u8) -> u64 {
        if self.castling.has(bit) {
            let before = self.castling;
            self.castling.remove(bit);
            zobrist::castling_delta(before, self.castling)
        } else {
            0
        }
    }

    fn update_castling_rights_for_move(
        &mut self,
        m: Move,
        captured: Option<(Color, PieceKind)>,
    ) -> u64 {
        let mut delta = 0u64;
        let color = m.moving_color();
        if m.moving_kind() == PieceKind::King {
            delta ^= self.clear_castling_right(CastlingRights::kingside_bit(color));
            delta ^= self.clear_castling_right(CastlingRights::queenside_bit(color));
        } else if m.moving_kind() == PieceKind::Rook {
            let start_rank = if color == Color::White { 0 } else { 7 };
            if m.from() == Square::new(start_rank, 0) {
                delta ^= self.clear_castling_right(CastlingRights::queenside_bit(color));
            } else if m.from() == Square::new(start_rank, 7) {
                delta ^= self.clear_castling_right(CastlingRights::kingside_bit(color));
            }
        }
        if let Some((cap_color, PieceKind::Rook)) = captured {
            let start_rank = if cap_color == Color::White { 0 } else { 7 };
            if m.to() == Square::new(start_rank, 0) {
                delta ^= self.clear_castling_right(CastlingRights::queenside_bit(cap_color));
            } else if m.to() == Square::new(start_rank, 7) {
                delta ^= self.clear_castling_right(CastlingRights::kingside_bit(cap_color));
            }
        }
        delta
    }

    fn castling_rook_squares(to: Square) -> (Square, Square) {
        let (from_file, to_file) = if to.file() == 6 { (7, 5) } else { (0, 3) };
        (Square::new(to.rank(), from_file), Square::new(to.rank(), to_file))
    }

    /// Make `m` on the board, returning the information needed to undo it.
    ///
    /// Order: flip side-to-move key, clear stale en-passant key, resolve
    /// the capture (including en passant), move the piece (handling
    /// promotion and castling), set any new en-passant target, update
    /// castling rights, then the halfmove clock and repetition epoch.
    pub fn make_move(&mut self, m: Move) -> UndoInfo {
        let previous_hash = self.hash;
        let previous_en_passant = self.en_passant;
        let previous_castling = self.castling;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_irreversible_ply = self.irreversible_ply;

        let mut hash = self.hash;
        hash ^= zobrist::side_to_move_key();
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_key(ep.file());
        }

        let color = m.moving_color();
        let is_white = color == Color::White;

        let captured = if m.is_en_passant() {
            let capture_rank = if is_white { m.to().rank() - 1 } else { m.to().rank() + 1 };
            let capture_sq = Square::new(capture_rank, m.to().file());
            let captured = self.piece_at(capture_sq);
            if let Some((cap_color, cap_kind)) = captured {
                self.remove_piece(capture_sq, cap_color, cap_kind);
                hash ^= zobrist::piece_key(cap_color, cap_kind, capture_sq);
            }
            captured
        } else if !m.is_castle() {
            let captured = self.piece_at(m.to());
            if let Some((cap_color, cap_kind)) = captured {
                self.remove_piece(m.to(), cap_color, cap_kind);
                hash ^= zobrist::piece_key(cap_color, cap_kind, m.to());
            }
            captured
        } else {
            None
        };

        let moving_kind = m.moving_kind();
        self.remove_piece(m.from(), color, moving_kind);
        hash ^= zobrist::piece_key(color, moving_kind, m.from());

        if m.is_castle() {
            self.set_piece(m.to(), color, PieceKind::King);
            hash ^= zobrist::piece_key(color, PieceKind::King, m.to());
            let (rook_from, rook_to) = Self::castling_rook_squares(m.to());
            self.remove_piece(rook_from, color, PieceKind::Rook);
            self.set_piece(rook_to, color, PieceKind::Rook);
            hash ^= zobrist::piece_key(color, PieceKind::Rook, rook_from);
            hash ^= zobrist::piece_key(color, PieceKind::Rook, rook_to);
        } else {
            let placed_kind = m.promotion_kind().unwrap_or(moving_kind);
            self.set_piece(m.to(), color, placed_kind);
            hash ^= zobrist::piece_key(color, placed_kind, m.to());
        }

        self.en_passant = None;
        if moving_kind == PieceKind::Pawn && m.from().rank().abs_diff(m.to().rank()) == 2 {
            let ep_rank = (m.from().rank() + m.to().rank()) / 2;
            let ep_sq = Square::new(ep_rank, m.from().file());
            let opponent = color.opponent();
            let capture_rank = m.to().rank();
            let file = m.to().file();
            let adjacent_files = [file.checked_sub(1), Some(file + 1).filter(|&f| f < 8)];
            let has_adjacent_pawn = adjacent_files.into_iter().flatten().any(|f| {
                matches!(self.piece_at(Square::new(capture_rank, f)), Some((c, PieceKind::Pawn)) if c == opponent)
            });
            if has_adjacent_pawn {
                self.en_passant = Some(ep_sq);
                hash ^= zobrist::en_passant_key(ep_sq.file());
            }
        }

        let is_capture = captured.is_some();
        self.halfmove_clock =
            if moving_kind == PieceKind::Pawn || is_capture { 0 } else { self.halfmove_clock + 1 };

        hash ^= self.update_castling_rights_for_move(m, captured);

        if !is_white {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
        self.hash = hash;

        let rights_changed = self.castling != previous_castling;
        let is_irreversible = is_capture || moving_kind == PieceKind::Pawn || m.is_castle() || rights_changed;
        self.history.push(hash);
        if is_irreversible {
            self.irreversible_ply = self.history.len();
        }

        UndoInfo {
            captured,
            previous_en_passant,
            previous_castling,
            previous_hash,
            previous_halfmove_clock,
            previous_irreversible_ply,
        }
    }

    pub fn unmake_move(&mut self, m: Move, undo: UndoInfo) {
        self.history.pop();
        self.irreversible_ply = undo.previous_irreversible_ply;

        let color = m.moving_color();
        let was_white = color == Color::White;
        if !was_white {
            self.fullmove_number -= 1;
        }
        self.side_to_move = color;
        self.en_passant = undo.previous_en_passant;
        self.castling = undo.previous_castling;
        self.hash = undo.previous_hash;
        self.halfmove_clock = undo.previous_halfmove_clock;

        if m.is_castle() {
            self.remove_piece(m.to(), color, PieceKind::King);
            self.set_piece(m.from(), color, PieceKind::King);
            let (rook_from, rook_to) = Self::castling_rook_squares(m.to());
            self.remove_piece(rook_to, color, PieceKind::Rook);
            self.set_piece(rook_from, color, PieceKind::Rook);
            return;
        }

        let placed_kind = m.promotion_kind().unwrap_or(m.moving_kind());
        self.remove_piece(m.to(), color, placed_kind);
        self.set_piece(m.from(), color, m.moving_kind());

        if m.is_en_passant() {
            if let Some((cap_color, cap_kind)) = undo.captured {
                let capture_rank = if was_white { m.to().rank() - 1 } else { m.to().rank() + 1 };
                self.set_piece(Square::new(capture_rank, m.to().file()), cap_color, cap_kind);
            }
        } else if let Some((cap_color, cap_kind)) = undo.captured {
            self.set_piece(m.to(), cap_color, cap_kind);
        }
    }

    /// Make a null move (pass), used by null-move pruning.
    pub fn make_null_move(&mut self) -> NullUndoInfo {
        let previous_hash = self.hash;
        let previous_en_passant = self.en_passant;
        let mut hash = self.hash;
        hash ^= zobrist::side_to_move_key();
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_key(ep.file());
        }
        self.en_passant = None;
        self.side_to_move = self.side_to_move.opponent();
        self.hash = hash;
        NullUndoInfo { previous_en_passant, previous_hash }
    }

    pub fn unmake_null_move(&mut self, undo: NullUndoInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.en_passant = undo.previous_en_passant;
        self.hash = undo.previous_hash;
    }

    /// Number of times the current position has occurred since the last
    /// irreversible move (including the current occurrence).
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.history[self.irreversible_ply..].iter().filter(|&&h| h == self.hash).count() as u32
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    #[must_use]
    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Whether `color`'s king is attacked in the current position.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let king_sq = self.king_square(color);
        self.is_square_attacked(king_sq, color.opponent())
    }

    /// Whether `sq` is attacked by any piece of `by_color`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        use crate::attack_tables;

        let pawns = self.pieces_of(by_color, PieceKind::Pawn);
        if attack_tables::pawn_attacks(by_color.opponent(), sq).intersects(pawns) {
            return true;
        }
        let knights = self.pieces_of(by_color, PieceKind::Knight);
        if attack_tables::knight_attacks(sq).intersects(knights) {
            return true;
        }
        let king = self.pieces_of(by_color, PieceKind::King);
        if attack_tables::king_attacks(sq).intersects(king) {
            return true;
        }
        let occ = self.all_occupied;
        let bishops_queens =
            self.pieces_of(by_color, PieceKind::Bishop) | self.pieces_of(by_color, PieceKind::Queen);
        if attack_tables::bishop_attacks(sq, occ).intersects(bishops_queens) {
            return true;
        }
        let rooks_queens =
            self.pieces_of(by_color, PieceKind::Rook) | self.pieces_of(by_color, PieceKind::Queen);
        if attack_tables::rook_attacks(sq, occ).intersects(rooks_queens) {
            return true;
        }
        false
    }
}
