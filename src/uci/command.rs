//! Parses one line of UCI input into a [`Command`]. Command tokens are
//! matched case-insensitively; everything after `position`/`go`/
//! `setoption` is tokenized on whitespace.

use crate::engine::GoParams;

/// The position a `position` command replaces the board with, before any
/// trailing `moves` are applied.
#[derive(Debug, Clone)]
pub enum PositionBase {
    Startpos,
    Fen(String),
}

#[derive(Debug, Clone)]
pub enum Command {
    Uci,
    IsReady,
    UciNewGame,
    SetOption { name: String, value: Option<String> },
    Position { base: PositionBase, moves: Vec<String> },
    Go(GoParams),
    Stop,
    Quit,
    /// Blank line, or a command token this engine doesn't recognize —
    /// silently ignored per UCI convention.
    Unknown,
}

const GO_DEPTH_INFINITE: i32 = 64;

/// Parse one line of UCI input.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Command::Unknown;
    };

    match head.to_ascii_lowercase().as_str() {
        "uci" => Command::Uci,
        "isready" => Command::IsReady,
        "ucinewgame" => Command::UciNewGame,
        "setoption" => parse_setoption(&tokens[1..]),
        "position" => parse_position(&tokens[1..]),
        "go" => Command::Go(parse_go(&tokens[1..])),
        "stop" => Command::Stop,
        "quit" => Command::Quit,
        _ => Command::Unknown,
    }
}

fn parse_setoption(tokens: &[&str]) -> Command {
    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for &tok in tokens {
        match tok.to_ascii_lowercase().as_str() {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(tok),
                "value" => value_parts.push(tok),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return Command::Unknown;
    }
    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() { None } else { Some(value_parts.join(" ")) };
    Command::SetOption { name, value }
}

fn parse_position(tokens: &[&str]) -> Command {
    if tokens.is_empty() {
        return Command::Unknown;
    }

    let (base, rest) = if tokens[0].eq_ignore_ascii_case("startpos") {
        (PositionBase::Startpos, &tokens[1..])
    } else if tokens[0].eq_ignore_ascii_case("fen") {
        if tokens.len() < 7 {
            return Command::Unknown;
        }
        let fen = tokens[1..7].join(" ");
        (PositionBase::Fen(fen), &tokens[7..])
    } else {
        return Command::Unknown;
    };

    let moves = if rest.first().is_some_and(|t| t.eq_ignore_ascii_case("moves")) {
        rest[1..].iter().map(|s| (*s).to_string()).collect()
    } else {
        Vec::new()
    };

    Command::Position { base, moves }
}

fn parse_go(tokens: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].to_ascii_lowercase().as_str() {
            "depth" => {
                i += 1;
                if let Some(tok) = tokens.get(i) {
                    params.depth = if tok.eq_ignore_ascii_case("infinite") {
                        Some(GO_DEPTH_INFINITE)
                    } else {
                        tok.parse().ok()
                    };
                }
            }
            "wtime" => {
                i += 1;
                params.wtime = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "btime" => {
                i += 1;
                params.btime = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "winc" => {
                i += 1;
                params.winc = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "binc" => {
                i += 1;
                params.binc = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "movetime" => {
                i += 1;
                params.movetime = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "infinite" => params.infinite = true,
            _ => {}
        }
        i += 1;
    }
    params
}
