//! Errors raised at the boundary between the front-end and the position model.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal or unknown move `{0}`")]
    IllegalMove(String),

    #[error("malformed command: {0}")]
    MalformedCommand(String),
}
