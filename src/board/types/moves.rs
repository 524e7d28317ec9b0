//! Move representation.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A single chess move with its metadata.
///
/// Identity is the (from, to) pair alone: two moves compare equal whenever
/// their squares match, regardless of capture, promotion, or special-move
/// flags. This makes "is this submitted from/to pair one of the legal
/// moves" a plain membership test against a generated move list. Callers
/// that need to distinguish promotion pieces must compare `promotion`
/// explicitly.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Side making the move.
    pub color: Color,
    /// Kind of the piece that moved.
    pub piece: Piece,
    /// Kind of the captured piece, if any (the en-passant victim included).
    pub captured: Option<Piece>,
    /// Promotion piece for pawn moves reaching the farthest rank.
    pub promotion: Option<Piece>,
    /// True for both castling variants (king's from/to describe the move).
    pub is_castling: bool,
    /// True when the capture is en passant (victim sits beside `to`).
    pub is_en_passant: bool,
}

impl Move {
    /// A non-capturing move.
    #[must_use]
    pub const fn quiet(from: Square, to: Square, color: Color, piece: Piece) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            captured: None,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    /// An ordinary capture of `victim` on `to`.
    #[must_use]
    pub const fn capture(
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        victim: Piece,
    ) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            captured: Some(victim),
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    /// An en-passant capture; the victim pawn stands beside `to`.
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::Pawn,
            captured: Some(Piece::Pawn),
            promotion: None,
            is_castling: false,
            is_en_passant: true,
        }
    }

    /// A castling move described by the king's from/to squares.
    #[must_use]
    pub const fn castle(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::King,
            captured: None,
            promotion: None,
            is_castling: true,
            is_en_passant: false,
        }
    }

    /// A pawn promotion, optionally capturing `victim` on `to`.
    #[must_use]
    pub const fn promotion(
        from: Square,
        to: Square,
        color: Color,
        promoted: Piece,
        victim: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::Pawn,
            captured: victim,
            promotion: Some(promoted),
            is_castling: false,
            is_en_passant: false,
        }
    }

    /// Returns true if this move captures a piece (including en passant).
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is a pawn promotion.
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true for a two-square pawn push (the en-passant trigger).
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Coordinate notation ("e2e4", "e7e8q").
    #[must_use]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        // Identity is the square pair; everything else is metadata.
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
