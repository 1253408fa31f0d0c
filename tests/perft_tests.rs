//! Perft (performance test, a.k.a. node-count) tests against published
//! reference positions. Depths cheap enough for a default `cargo test`
//! run execute unconditionally; the expensive tails are `#[ignore]`d
//! rather than silently dropped.

use chess_engine::board::fen::parse_fen;
use chess_engine::board::Position;
use chess_engine::movegen::generate_legal_moves;

fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for &m in moves.iter() {
        let undo = pos.make_move(m);
        nodes += perft(pos, depth - 1);
        pos.unmake_move(m, undo);
    }
    nodes
}

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn startpos_depth_1() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 1), 20);
}

#[test]
fn startpos_depth_2() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 2), 400);
}

#[test]
fn startpos_depth_3() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 3), 8_902);
}

#[test]
fn startpos_depth_4() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 4), 197_281);
}

#[test]
#[ignore = "too slow for a default test run"]
fn startpos_depth_5() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 5), 4_865_609);
}

#[test]
#[ignore = "too slow for a default test run"]
fn startpos_depth_6() {
    let mut pos = parse_fen(STARTPOS).unwrap();
    assert_eq!(perft(&mut pos, 6), 119_060_324);
}

#[test]
fn kiwipete_depth_1() {
    let mut pos = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 1), 48);
}

#[test]
fn kiwipete_depth_2() {
    let mut pos = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 2), 2_039);
}

#[test]
fn kiwipete_depth_3() {
    let mut pos = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 3), 97_862);
}

#[test]
#[ignore = "too slow for a default test run"]
fn kiwipete_depth_4() {
    let mut pos = parse_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 4), 4_085_603);
}

#[test]
#[ignore = "too slow for a default test run"]
fn position_3_depth_6() {
    let mut pos = parse_fen(POSITION_3).unwrap();
    assert_eq!(perft(&mut pos, 6), 11_030_083);
}

#[test]
fn position_4_depth_1() {
    let mut pos = parse_fen(POSITION_4).unwrap();
    assert_eq!(perft(&mut pos, 1), 6);
}

#[test]
fn position_4_depth_2() {
    let mut pos = parse_fen(POSITION_4).unwrap();
    assert_eq!(perft(&mut pos, 2), 264);
}

#[test]
fn position_4_depth_3() {
    let mut pos = parse_fen(POSITION_4).unwrap();
    assert_eq!(perft(&mut pos, 3), 9_467);
}

#[test]
#[ignore = "too slow for a default test run"]
fn position_4_depth_4() {
    let mut pos = parse_fen(POSITION_4).unwrap();
    assert_eq!(perft(&mut pos, 4), 422_333);
}

#[test]
fn position_5_depth_1() {
    let mut pos = parse_fen(POSITION_5).unwrap();
    assert_eq!(perft(&mut pos, 1), 44);
}

#[test]
fn position_5_depth_2() {
    let mut pos = parse_fen(POSITION_5).unwrap();
    assert_eq!(perft(&mut pos, 2), 1_486);
}

#[test]
fn position_5_depth_3() {
    let mut pos = parse_fen(POSITION_5).unwrap();
    assert_eq!(perft(&mut pos, 3), 62_379);
}

#[test]
#[ignore = "too slow for a default test run"]
fn position_5_depth_4() {
    let mut pos = parse_fen(POSITION_5).unwrap();
    assert_eq!(perft(&mut pos, 4), 2_103_487);
}

#[test]
#[ignore = "too slow for a default test run"]
fn position_5_depth_5() {
    let mut pos = parse_fen(POSITION_5).unwrap();
    assert_eq!(perft(&mut pos, 5), 89_941_194);
}
