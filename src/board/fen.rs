//! FEN codec. Kept deliberately thin, an external collaborator rather
//! than a core subsystem: parse, validate, produce a [`Position`];
//! format the inverse.

use super::error::FenError;
use super::state::Position;
use super::types::{CastlingRights, Color, PieceKind, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(FenError::WrongFieldCount { found: parts.len() });
    }

    let mut pos = Position::empty();

    for (rank_from_top, rank_str) in parts[0].split('/').enumerate() {
        if rank_from_top >= 8 {
            return Err(FenError::BadPiecePlacement { detail: format!("too many ranks in '{}'", parts[0]) });
        }
        let rank = 7 - rank_from_top;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                file += digit as usize;
            } else {
                let (color, kind) = PieceKind::from_char(c)
                    .ok_or_else(|| FenError::BadPiecePlacement { detail: format!("unknown piece char '{c}'") })?;
                if file >= 8 {
                    return Err(FenError::BadPiecePlacement { detail: format!("rank {rank} overflows 8 files") });
                }
                pos.set_piece(Square::new(rank, file), color, kind);
                file += 1;
            }
        }
    }

    pos.set_side_to_move(match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSideToMove { token: other.to_string() }),
    });

    let mut rights = CastlingRights::none();
    if parts[2] != "-" {
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(CASTLE_WHITE_K),
                'Q' => rights.set(CASTLE_WHITE_Q),
                'k' => rights.set(CASTLE_BLACK_K),
                'q' => rights.set(CASTLE_BLACK_Q),
                _ => return Err(FenError::BadCastlingRights { token: parts[2].to_string() }),
            }
        }
    }
    pos.set_castling_rights(rights);

    let ep = if parts[3] == "-" {
        None
    } else {
        Some(parts[3].parse::<Square>().map_err(|_| FenError::BadEnPassant { token: parts[3].to_string() })?)
    };
    pos.set_en_passant_square(ep);

    let halfmove = parts[4]
        .parse::<u16>()
        .map_err(|_| FenError::BadHalfmoveClock { token: parts[4].to_string() })?;
    pos.set_halfmove_clock(halfmove);

    let fullmove = parts[5]
        .parse::<u32>()
        .map_err(|_| FenError::BadFullmoveNumber { token: parts[5].to_string() })?;
    pos.set_fullmove_number(fullmove);

    pos.recompute_hash();
    Ok(pos)
}

pub fn format_fen(pos: &Position) -> String {
    let mut ranks = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut s = String::new();
        let mut empty_run = 0u32;
        for file in 0..8 {
            let sq = Square::new(rank, file);
            match pos.piece_at(sq) {
                Some((color, kind)) => {
                    if empty_run > 0 {
                        s.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    s.push(kind.to_char(color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            s.push_str(&empty_run.to_string());
        }
        ranks.push(s);
    }
    let placement = ranks.join("/");

    let side = match pos.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    let rights = pos.castling_rights();
    let mut castling = String::new();
    if rights.has(CASTLE_WHITE_K) {
        castling.push('K');
    }
    if rights.has(CASTLE_WHITE_Q) {
        castling.push('Q');
    }
    if rights.has(CASTLE_BLACK_K) {
        castling.push('k');
    }
    if rights.has(CASTLE_BLACK_Q) {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let ep = pos.en_passant_square().map_or("-".to_string(), |sq| sq.to_string());

    format!(
        "{placement} {side} {castling} {ep} {} {}",
        pos.halfmove_clock(),
        pos.fullmove_number()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_fen_round_trips() {
        let pos = parse_fen(START_FEN).unwrap();
        assert_eq!(format_fen(&pos), START_FEN);
    }

    #[test]
    fn kiwipete_parses_without_error() {
        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let pos = parse_fen(kiwipete).unwrap();
        assert_eq!(pos.side_to_move(), Color::White);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    }
}
