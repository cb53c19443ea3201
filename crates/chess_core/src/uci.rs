//! UCI notation and command parsing.
//!
//! Only the subset of the protocol the engines answer is recognised; anything
//! else parses to `None` and is ignored by the front-end.

use cozy_chess::{Color, File, Move, Piece, Square};
use tracing::debug;

use crate::error::ChessError;
use crate::position::Position;

/// Prints a move in UCI notation.
///
/// The rules engine encodes castling as the king capturing its own rook;
/// UCI expects the king's two-square move instead.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let castles = board.piece_on(mv.from) == Some(Piece::King)
        && board.colors(board.side_to_move()).has(mv.to);
    if !castles {
        return mv.to_string();
    }

    let file = if mv.to.file() as u8 > mv.from.file() as u8 {
        File::G
    } else {
        File::C
    };
    let to = Square::new(file, mv.from.rank());
    format!("{}{}", mv.from, to)
}

/// Matches UCI text against the legal moves of `pos`.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim().to_ascii_lowercase();
    if txt.len() < 4 {
        return None;
    }
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == txt)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionStart {
    StartPos,
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSetup {
    pub start: PositionStart,
    pub moves: Vec<String>,
}

/// Arguments of a `go` command. Times are milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime: Option<u64>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
}

impl GoParams {
    /// Remaining clock time of `side`, if the GUI sent one.
    pub fn time_left(&self, side: Color) -> Option<u64> {
        match side {
            Color::White => self.wtime,
            Color::Black => self.btime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    NewGame,
    Position(PositionSetup),
    Go(GoParams),
    Quit,
}

/// Parses one line of input.
///
/// Blank and unrecognised lines yield `Ok(None)`. A `position` command that
/// cannot be understood is an error so the caller can report it.
pub fn parse_command(line: &str) -> Result<Option<UciCommand>, ChessError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(None);
    };

    let cmd = match head {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::NewGame,
        "position" => UciCommand::Position(parse_position(args)?),
        "go" => UciCommand::Go(parse_go(args)),
        "quit" => UciCommand::Quit,
        other => {
            debug!(command = other, "ignoring unrecognised command");
            return Ok(None);
        }
    };
    Ok(Some(cmd))
}

fn parse_position(args: &[&str]) -> Result<PositionSetup, ChessError> {
    let (start, rest) = match args.split_first() {
        Some((&"startpos", rest)) => (PositionStart::StartPos, rest),
        Some((&"fen", rest)) => {
            let end = rest
                .iter()
                .position(|&tok| tok == "moves")
                .unwrap_or(rest.len());
            if end != 6 {
                return Err(ChessError::MalformedCommand(format!(
                    "position fen expects 6 fields, got {end}"
                )));
            }
            (PositionStart::Fen(rest[..end].join(" ")), &rest[end..])
        }
        Some((&other, _)) => {
            return Err(ChessError::MalformedCommand(format!(
                "unknown position kind `{other}`"
            )));
        }
        None => {
            return Err(ChessError::MalformedCommand(
                "position requires startpos or fen".to_string(),
            ));
        }
    };

    let moves = match rest.split_first() {
        Some((&"moves", list)) => list.iter().map(|s| s.to_string()).collect(),
        Some((&other, _)) => {
            return Err(ChessError::MalformedCommand(format!(
                "expected `moves`, got `{other}`"
            )));
        }
        None => Vec::new(),
    };

    Ok(PositionSetup { start, moves })
}

fn parse_go(args: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1).copied();
        match args[i] {
            "depth" => params.depth = value.and_then(|v| v.parse().ok()),
            "movetime" => params.movetime = value.and_then(|v| v.parse().ok()),
            "wtime" => params.wtime = value.and_then(parse_clock),
            "btime" => params.btime = value.and_then(parse_clock),
            _ => {
                i += 1;
                continue;
            }
        }
        i += 2;
    }
    params
}

/// Clock values may be negative when a GUI reports a flagged side.
fn parse_clock(value: &str) -> Option<u64> {
    let ms: i64 = value.parse().ok()?;
    Some(ms.max(0) as u64)
}

/// Rebuilds `pos` from a `position` command and replays its moves.
///
/// On failure `pos` holds the position reached before the offending move.
pub fn apply_position(pos: &mut Position, setup: &PositionSetup) -> Result<(), ChessError> {
    *pos = match &setup.start {
        PositionStart::StartPos => Position::startpos(),
        PositionStart::Fen(fen) => Position::from_fen(fen)?,
    };

    for txt in &setup.moves {
        let mv = parse_uci_move(pos, txt).ok_or_else(|| ChessError::IllegalMove(txt.clone()))?;
        pos.make_move(mv)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
