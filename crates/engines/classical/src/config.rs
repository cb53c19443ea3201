//! Engine configuration.
//!
//! Every tunable of the evaluator and the search lives here, so engine
//! variants are TOML files rather than code. All fields default to the
//! built-in profile; a file only needs to list what it overrides.

use std::path::Path;

use chess_core::Piece;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pst;

/// Hard cap on the nominal search depth.
pub const MAX_DEPTH: u8 = 6;
/// Hard cap on the capture-only extension below the nominal depth.
pub const MAX_QUIESCENCE_DEPTH: u8 = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub eval: EvalConfig,
    pub search: SearchConfig,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }
}

// =============================================================================
// Evaluation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Centipawn values: pawn, knight, bishop, rook, queen, king
    pub piece_values: [i32; 6],
    pub tables: PieceSquareTables,
    /// Applied against the side to move when it is in check
    pub check_penalty: i32,
    pub positional: PositionalWeights,
    pub endgame: EndgameWeights,
}

impl EvalConfig {
    #[inline]
    pub fn piece_value(&self, piece: Piece) -> i32 {
        self.piece_values[piece as usize]
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            piece_values: [90, 202, 214, 373, 600, 0],
            tables: PieceSquareTables::default(),
            check_penalty: 40,
            positional: PositionalWeights::default(),
            endgame: EndgameWeights::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceSquareTables {
    pub pawn: SquareTable,
    pub knight: SquareTable,
    pub bishop: SquareTable,
    pub rook: SquareTable,
    pub queen: SquareTable,
    pub king_middlegame: SquareTable,
    pub king_endgame: SquareTable,
}

impl PieceSquareTables {
    /// Table for a non-king piece, or the king table of the given phase.
    pub fn for_piece(&self, piece: Piece, endgame: bool) -> &SquareTable {
        match piece {
            Piece::Pawn => &self.pawn,
            Piece::Knight => &self.knight,
            Piece::Bishop => &self.bishop,
            Piece::Rook => &self.rook,
            Piece::Queen => &self.queen,
            Piece::King if endgame => &self.king_endgame,
            Piece::King => &self.king_middlegame,
        }
    }
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self {
            pawn: SquareTable(pst::PAWN),
            knight: SquareTable(pst::KNIGHT),
            bishop: SquareTable(pst::BISHOP),
            rook: SquareTable(pst::ROOK),
            queen: SquareTable(pst::QUEEN),
            king_middlegame: SquareTable(pst::KING_MIDDLEGAME),
            king_endgame: SquareTable(pst::KING_ENDGAME),
        }
    }
}

/// Middlegame terms, all off in the built-in profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionalWeights {
    /// Per square reachable by a knight, bishop, rook or queen
    pub mobility: i32,
    /// King castled with its rook beside it
    pub castled_bonus: i32,
    /// Per own pawn directly in front of the king
    pub pawn_shield_bonus: i32,
    /// Per doubled or isolated pawn
    pub weak_pawn_penalty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndgameWeights {
    /// Rook or queen on a file without pawns
    pub open_file_bonus: i32,
    /// Per safe square left to the defending king
    pub king_mobility_penalty: i32,
    /// Per step the attacking king has closed towards the defending king
    pub king_distance_weight: i32,
    /// Per step between the lone rook/queen and the defending king
    pub major_piece_distance_weight: i32,
    /// Lone rook/queen line separating the two kings
    pub cutoff_bonus: i32,
    /// Defending-king placement bonus, highest on the edges
    pub corner_table: SquareTable,
}

impl Default for EndgameWeights {
    fn default() -> Self {
        Self {
            open_file_bonus: 10,
            king_mobility_penalty: 35,
            king_distance_weight: 35,
            major_piece_distance_weight: 10,
            cutoff_bonus: 20,
            corner_table: SquareTable(pst::CORNER_CAGE),
        }
    }
}

/// 64 values drawn rank 8 first. Serialized as a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct SquareTable(pub [i32; 64]);

impl SquareTable {
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.0[index]
    }
}

impl TryFrom<Vec<i32>> for SquareTable {
    type Error = String;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        let len = values.len();
        let table: [i32; 64] = values
            .try_into()
            .map_err(|_| format!("square table needs 64 entries, got {len}"))?;
        Ok(SquareTable(table))
    }
}

impl From<SquareTable> for Vec<i32> {
    fn from(table: SquareTable) -> Self {
        table.0.to_vec()
    }
}

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Capture plies searched below the nominal depth
    pub quiescence_depth: u8,
    /// Depth used when no other rule applies
    pub base_depth: u8,
    /// Depth for the first `opening_moves` full moves
    pub opening_depth: u8,
    pub opening_moves: u16,
    pub queen_endgame_depth: u8,
    pub rook_endgame_depth: u8,
    /// Depth from full move `long_game_moves` on
    pub long_game_depth: u8,
    pub long_game_moves: u16,
    /// Clock divisor before full move `early_moves`
    pub early_moves: u16,
    pub early_divisor: u32,
    /// Clock divisor before full move `middle_moves`
    pub middle_moves: u16,
    pub middle_divisor: u32,
    /// Clock divisor for the rest of the game
    pub late_divisor: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiescence_depth: 3,
            base_depth: 3,
            opening_depth: 4,
            opening_moves: 5,
            queen_endgame_depth: 4,
            rook_endgame_depth: 6,
            long_game_depth: 4,
            long_game_moves: 40,
            early_moves: 15,
            early_divisor: 60,
            middle_moves: 30,
            middle_divisor: 40,
            late_divisor: 50,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.quiescence_depth > MAX_QUIESCENCE_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "quiescence_depth {} exceeds {MAX_QUIESCENCE_DEPTH}",
                self.quiescence_depth
            )));
        }

        let depths = [
            ("base_depth", self.base_depth),
            ("opening_depth", self.opening_depth),
            ("queen_endgame_depth", self.queen_endgame_depth),
            ("rook_endgame_depth", self.rook_endgame_depth),
            ("long_game_depth", self.long_game_depth),
        ];
        for (name, depth) in depths {
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(ConfigError::Invalid(format!(
                    "{name} {depth} outside 1..={MAX_DEPTH}"
                )));
            }
        }

        let divisors = [
            ("early_divisor", self.early_divisor),
            ("middle_divisor", self.middle_divisor),
            ("late_divisor", self.late_divisor),
        ];
        if let Some((name, _)) = divisors.iter().find(|(_, d)| *d == 0) {
            return Err(ConfigError::Invalid(format!("{name} must be positive")));
        }

        if self.middle_moves < self.early_moves {
            return Err(ConfigError::Invalid(
                "middle_moves must not precede early_moves".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
