//! Registered UCI options: material weights, `MateScore`, and the
//! structural evaluation bonuses/penalties, each backed by a field of
//! [`EvalParams`].

use crate::eval::EvalParams;

/// The full set of registered UCI options is exactly the evaluation's
/// tunable weights; `EvalParams` already owns them.
pub type EngineOptions = EvalParams;

/// Print a UCI spin option line.
fn print_spin(name: &str, default: i32, min: i32, max: i32) {
    println!("option name {name} type spin default {default} min {min} max {max}");
}

/// Print every registered option, in the order listed in the external
/// interface, ahead of `uciok`.
pub fn print_options(params: &EvalParams) {
    print_spin("PawnValue", params.material[0], 1, 500);
    print_spin("KnightValue", params.material[1], 1, 800);
    print_spin("BishopValue", params.material[2], 1, 800);
    print_spin("RookValue", params.material[3], 1, 1200);
    print_spin("QueenValue", params.material[4], 1, 2000);
    print_spin("KingValue", params.material[5], 1, 4000);
    print_spin("MateScore", params.mate_score, 50_000, 200_000);

    print_spin("RestrictKingBonus", params.restrict_king_bonus, 0, 50);
    print_spin("KingShieldBonus", params.king_shield_bonus, 0, 200);
    print_spin("AiryKingPenalty", params.airy_king_penalty, 0, 50);
    print_spin("SupportedPawnBonus", params.supported_pawn_bonus, 0, 50);
    print_spin("SupportingPawnBonus", params.supporting_pawn_bonus, 0, 50);
    print_spin("PassedPawnBonus", params.passed_pawn_bonus, 0, 100);
    print_spin("SupportingPieceBonus", params.supporting_piece_bonus, 0, 50);
    print_spin("DoubledPawnPenalty", params.doubled_pawn_penalty, 0, 100);
    print_spin("IsolatedPawnPenalty", params.isolated_pawn_penalty, 0, 100);
    print_spin("CheckedPenalty", params.checked_penalty, 0, 200);
    print_spin("CheckingBonus", params.checking_bonus, 0, 200);
    print_spin("BishopPairBonus", params.bishop_pair_bonus, 0, 100);
    print_spin("RookOpenFileBonus", params.rook_open_file_bonus, 0, 100);
}

/// Set `*field` to `parsed` if it falls within `[min, max]`; otherwise
/// leave it untouched and warn. Out-of-range values are rejected outright,
/// not coerced to the nearest bound, per the error handling design.
fn set_if_in_range(field: &mut i32, name: &str, parsed: i32, min: i32, max: i32) {
    if (min..=max).contains(&parsed) {
        *field = parsed;
    } else {
        log::warn!(
            "setoption '{name}': value {parsed} is outside [{min}, {max}], keeping previous value {}",
            *field
        );
    }
}

/// Apply `setoption name <name> value <value>` to `params`. Unknown
/// option names are silently ignored; a value that fails to parse as an
/// integer, or falls outside the option's registered range, leaves the
/// option at its previous value, per the error handling design.
pub fn apply_setoption(params: &mut EvalParams, name: &str, value: Option<&str>) {
    let Some(parsed) = value.and_then(|v| v.trim().parse::<i32>().ok()) else {
        if value.is_some() {
            log::warn!("setoption '{name}': value '{}' is not an integer, keeping previous value", value.unwrap());
        }
        return;
    };

    match name.trim().to_ascii_lowercase().as_str() {
        "pawnvalue" => set_if_in_range(&mut params.material[0], name, parsed, 1, 500),
        "knightvalue" => set_if_in_range(&mut params.material[1], name, parsed, 1, 800),
        "bishopvalue" => set_if_in_range(&mut params.material[2], name, parsed, 1, 800),
        "rookvalue" => set_if_in_range(&mut params.material[3], name, parsed, 1, 1200),
        "queenvalue" => set_if_in_range(&mut params.material[4], name, parsed, 1, 2000),
        "kingvalue" => set_if_in_range(&mut params.material[5], name, parsed, 1, 4000),
        "matescore" => set_if_in_range(&mut params.mate_score, name, parsed, 50_000, 200_000),
        "restrictkingbonus" => set_if_in_range(&mut params.restrict_king_bonus, name, parsed, 0, 50),
        "kingshieldbonus" => set_if_in_range(&mut params.king_shield_bonus, name, parsed, 0, 200),
        "airykingpenalty" => set_if_in_range(&mut params.airy_king_penalty, name, parsed, 0, 50),
        "supportedpawnbonus" => set_if_in_range(&mut params.supported_pawn_bonus, name, parsed, 0, 50),
        "supportingpawnbonus" => set_if_in_range(&mut params.supporting_pawn_bonus, name, parsed, 0, 50),
        "passedpawnbonus" => set_if_in_range(&mut params.passed_pawn_bonus, name, parsed, 0, 100),
        "supportingpiecebonus" => set_if_in_range(&mut params.supporting_piece_bonus, name, parsed, 0, 50),
        "doubledpawnpenalty" => set_if_in_range(&mut params.doubled_pawn_penalty, name, parsed, 0, 100),
        "isolatedpawnpenalty" => set_if_in_range(&mut params.isolated_pawn_penalty, name, parsed, 0, 100),
        "checkedpenalty" => set_if_in_range(&mut params.checked_penalty, name, parsed, 0, 200),
        "checkingbonus" => set_if_in_range(&mut params.checking_bonus, name, parsed, 0, 200),
        "bishoppairbonus" => set_if_in_range(&mut params.bishop_pair_bonus, name, parsed, 0, 100),
        "rookopenfilebonus" => set_if_in_range(&mut params.rook_open_file_bonus, name, parsed, 0, 100),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setoption_updates_the_matching_field() {
        let mut params = EvalParams::default();
        apply_setoption(&mut params, "PawnValue", Some("120"));
        assert_eq!(params.material[0], 120);
    }

    #[test]
    fn setoption_rejects_out_of_range_values() {
        let mut params = EvalParams::default();
        let before = params.mate_score;
        apply_setoption(&mut params, "MateScore", Some("999999"));
        assert_eq!(params.mate_score, before);
    }

    #[test]
    fn setoption_ignores_unknown_names() {
        let mut params = EvalParams::default();
        let before = params.material;
        apply_setoption(&mut params, "NotAnOption", Some("1"));
        assert_eq!(params.material, before);
    }

    #[test]
    fn setoption_keeps_previous_value_on_unparseable_input() {
        let mut params = EvalParams::default();
        apply_setoption(&mut params, "PawnValue", Some("not-a-number"));
        assert_eq!(params.material[0], EvalParams::default().material[0]);
    }
}
