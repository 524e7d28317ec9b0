//! Error types for board and notation operations.

use std::fmt;

/// Error type for position-notation (FEN) decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation must have exactly 6 space-separated fields
    FieldCount { found: usize },
    /// Placement field must describe exactly 8 ranks
    RankCount { found: usize },
    /// A rank's files must sum to exactly 8
    RankWidth { rank: usize, files: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Invalid side to move (must be exactly "w" or "b")
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// A castling right appears more than once
    DuplicateCastling { char: char },
    /// En-passant field is neither "-" nor a square on rank 3 or 6
    InvalidEnPassant { found: String },
    /// A clock field is not a non-negative integer
    InvalidClock {
        field: &'static str,
        found: String,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::FieldCount { found } => {
                write!(f, "notation must have exactly 6 fields, found {found}")
            }
            NotationError::RankCount { found } => {
                write!(f, "placement must describe 8 ranks, found {found}")
            }
            NotationError::RankWidth { rank, files } => {
                write!(f, "rank {rank} describes {files} files, expected 8")
            }
            NotationError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in placement")
            }
            NotationError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            NotationError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}'")
            }
            NotationError::DuplicateCastling { char } => {
                write!(f, "duplicate castling character '{char}'")
            }
            NotationError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
            NotationError::InvalidClock { field, found } => {
                write!(f, "invalid {field} '{found}', expected a non-negative integer")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_error_field_count() {
        let err = NotationError::FieldCount { found: 4 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_notation_error_rank_width() {
        let err = NotationError::RankWidth { rank: 3, files: 9 };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_notation_error_invalid_piece() {
        let err = NotationError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_notation_error_duplicate_castling() {
        let err = NotationError::DuplicateCastling { char: 'K' };
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_notation_error_equality() {
        let err1 = NotationError::FieldCount { found: 2 };
        let err2 = NotationError::FieldCount { found: 2 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = NotationError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
