//! Position model: a rules-engine board plus the game history the search needs.
//!
//! `cozy_chess::Board` is a copy-make board without undo, half of the
//! repetition bookkeeping, or material-draw detection. `Position` keeps a stack
//! of prior boards so moves can be reverted, and a list of position hashes for
//! repetition claims.

use std::ops::{Deref, DerefMut};

use cozy_chess::{Board, Color, Move, Piece, Square};

use crate::error::ChessError;
use crate::types::{Terminal, is_light_square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Boards preceding each applied move, most recent last.
    undo_stack: Vec<Board>,
    /// Hash of every position reached since setup, current one last.
    keys: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        let key = board.hash();
        Self {
            board,
            undo_stack: Vec::with_capacity(64),
            keys: vec![key],
        }
    }

    /// Read-only access to the underlying bitboards.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn fullmove_number(&self) -> u16 {
        self.board.fullmove_number()
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves applied since the position was set up.
    pub fn moves_played(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    pub fn piece_on(&self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color, piece))
    }

    // ------------------------------------------------------------------
    // Move generation
    // ------------------------------------------------------------------

    pub fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        moves.clear();
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|piece_moves| {
            found = piece_moves.into_iter().next().is_some();
            found
        });
        found
    }

    /// The piece removed from the board by `mv`, if any.
    ///
    /// En passant captures a pawn on a square other than the destination.
    /// Castling is encoded as the king moving onto its own rook and is never
    /// a capture.
    pub fn captured_piece(&self, mv: Move) -> Option<Piece> {
        let them = self.board.colors(!self.board.side_to_move());
        if them.has(mv.to) {
            return self.board.piece_on(mv.to);
        }
        let pawn_move = self.board.piece_on(mv.from) == Some(Piece::Pawn);
        if pawn_move && mv.from.file() != mv.to.file() {
            Some(Piece::Pawn)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_capture(&self, mv: Move) -> bool {
        self.captured_piece(mv).is_some()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Applies a game move permanently (front-end use).
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let mut next = self.board.clone();
        next.try_play(mv)
            .map_err(|_| ChessError::IllegalMove(mv.to_string()))?;
        self.push(next);
        Ok(())
    }

    /// Applies a legal move for the lifetime of the returned guard.
    ///
    /// `mv` must come from this position's legal move list.
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        let mut next = self.board.clone();
        next.play_unchecked(mv);
        self.push(next);
        MoveGuard { pos: self }
    }

    fn push(&mut self, next: Board) {
        let prev = std::mem::replace(&mut self.board, next);
        self.undo_stack.push(prev);
        self.keys.push(self.board.hash());
    }

    fn unmake_move(&mut self) {
        if let Some(prev) = self.undo_stack.pop() {
            self.board = prev;
            self.keys.pop();
        }
    }

    // ------------------------------------------------------------------
    // Game status
    // ------------------------------------------------------------------

    #[inline]
    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Occurrences of the current position since the last irreversible move.
    pub fn repetition_count(&self) -> usize {
        let window = self.board.halfmove_clock() as usize + 1;
        let current = self.board.hash();
        self.keys
            .iter()
            .rev()
            .take(window)
            .filter(|&&key| key == current)
            .count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    pub fn can_claim_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition()
    }

    /// Neither side can deliver mate: bare kings, a single minor piece, or
    /// bishops only with every bishop on the same square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = board.pieces(Piece::Knight);
        let bishops = board.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let light = bishops.into_iter().filter(|&sq| is_light_square(sq)).count();
        light == 0 || light == bishops.len() as usize
    }

    /// Claimable or automatic draw, excluding stalemate.
    pub fn is_draw(&self) -> bool {
        self.can_claim_draw() || self.is_insufficient_material()
    }

    /// Terminal classification. Checkmate takes precedence over every draw.
    pub fn terminal(&self) -> Option<Terminal> {
        if !self.has_legal_moves() {
            return Some(if self.in_check() {
                Terminal::Checkmate
            } else {
                Terminal::Stalemate
            });
        }
        if self.is_insufficient_material() {
            return Some(Terminal::InsufficientMaterial);
        }
        if self.is_fifty_move_draw() {
            return Some(Terminal::FiftyMoves);
        }
        if self.is_threefold_repetition() {
            return Some(Terminal::Repetition);
        }
        None
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// A move applied to a [`Position`] for as long as the guard lives.
///
/// Dropping the guard restores the position, so every exit path from a
/// search node (including cutoffs) reverts exactly the moves it made.
pub struct MoveGuard<'a> {
    pos: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.pos.unmake_move();
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
