//! End-to-end UCI behavior, driven as a subprocess over stdin/stdout —
//! the only way to observe the real command loop and its timing.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

fn spawn_engine() -> (Child, mpsc::Receiver<String>, std::process::ChildStdin) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chess_engine"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn chess_engine binary");

    let stdout = child.stdout.take().expect("child stdout");
    let stdin = child.stdin.take().expect("child stdin");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let reader = BufReader::new(stdout);
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    (child, rx, stdin)
}

fn recv_line_matching(rx: &mpsc::Receiver<String>, predicate: impl Fn(&str) -> bool, timeout: Duration) -> Option<String> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return None;
        }
        match rx.recv_timeout(remaining) {
            Ok(line) => {
                if predicate(&line) {
                    return Some(line);
                }
            }
            Err(_) => return None,
        }
    }
}

#[test]
fn go_depth_two_emits_info_and_a_legal_bestmove() {
    let (mut child, rx, mut stdin) = spawn_engine();

    writeln!(stdin, "uci").unwrap();
    recv_line_matching(&rx, |l| l == "uciok", Duration::from_secs(5)).expect("uciok");

    writeln!(stdin, "position startpos").unwrap();
    writeln!(stdin, "go depth 2").unwrap();

    let info_line = recv_line_matching(&rx, |l| l.starts_with("info depth 2"), Duration::from_secs(10));
    assert!(info_line.is_some(), "expected an 'info depth 2' line");

    let bestmove = recv_line_matching(&rx, |l| l.starts_with("bestmove"), Duration::from_secs(10));
    let bestmove = bestmove.expect("expected a bestmove line");
    let mv = bestmove.split_whitespace().nth(1).expect("bestmove has a move token");
    let legal_first_moves = [
        "a2a3", "a2a4", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4", "e2e3", "e2e4", "f2f3",
        "f2f4", "g2g3", "g2g4", "h2h3", "h2h4", "b1a3", "b1c3", "g1f3", "g1h3",
    ];
    assert!(legal_first_moves.contains(&mv), "bestmove '{mv}' is not a legal first move");

    writeln!(stdin, "quit").unwrap();
    let _ = child.wait();
}

#[test]
fn stop_while_searching_yields_a_bestmove_promptly() {
    let (mut child, rx, mut stdin) = spawn_engine();

    writeln!(stdin, "uci").unwrap();
    recv_line_matching(&rx, |l| l == "uciok", Duration::from_secs(5)).expect("uciok");

    writeln!(stdin, "position startpos").unwrap();
    writeln!(stdin, "go infinite").unwrap();

    // Let the worker get into its search loop before asking it to stop.
    thread::sleep(Duration::from_millis(50));

    let stop_sent_at = Instant::now();
    writeln!(stdin, "stop").unwrap();

    let bestmove = recv_line_matching(&rx, |l| l.starts_with("bestmove"), Duration::from_millis(500));
    assert!(bestmove.is_some(), "expected a bestmove line after stop");
    assert!(
        stop_sent_at.elapsed() < Duration::from_millis(500),
        "bestmove took too long to appear after stop"
    );

    writeln!(stdin, "quit").unwrap();
    let _ = child.wait();
}
