//! Position notation codec.
//!
//! Encodes a board plus its match metadata as the standard six-field text
//! line (placement, side to move, castling rights, en-passant target,
//! half-move clock, full-move number) and decodes it back. This line is the
//! sole persisted and transmitted form of a position, so decoding is strict:
//! anything that is not exactly six well-formed fields is rejected with a
//! contextful [`NotationError`].

use std::fmt;
use std::str::FromStr;

use super::error::NotationError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A decoded position: board placement plus the metadata the placement
/// field cannot carry.
#[derive(Clone, Debug)]
pub struct FenData {
    pub board: Board,
    pub active: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenData {
    /// The standard initial position.
    #[must_use]
    pub fn initial() -> Self {
        FenData {
            board: Board::new(),
            active: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Encode as the six-field notation line.
    ///
    /// Deterministic and total: ranks 8 down to 1, files a through h,
    /// digits run-length-encode empty squares, rights in fixed KQkq order.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.active.to_fen_char(),
            self.castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Decode a six-field notation line.
    pub fn decode(notation: &str) -> Result<Self, NotationError> {
        let fields: Vec<&str> = notation.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(NotationError::FieldCount {
                found: fields.len(),
            });
        }

        let board = decode_placement(fields[0])?;
        let active = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let castling = decode_castling(fields[2])?;
        let en_passant = decode_en_passant(fields[3])?;
        let halfmove_clock = decode_clock(fields[4], "half-move clock")?;
        let fullmove_number = decode_clock(fields[5], "full-move number")?;

        Ok(FenData {
            board,
            active,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }
}

impl FromStr for FenData {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FenData::decode(s)
    }
}

impl fmt::Display for FenData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

fn decode_placement(field: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::RankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row; // the first chunk is rank 8
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                file += digit as usize;
            } else {
                let piece =
                    Piece::from_char(c).ok_or(NotationError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(NotationError::RankWidth {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(rank, file), color, piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(NotationError::RankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(board)
}

fn decode_castling(field: &str) -> Result<CastlingRights, NotationError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let (color, kingside) = match c {
            'K' => (Color::White, true),
            'Q' => (Color::White, false),
            'k' => (Color::Black, true),
            'q' => (Color::Black, false),
            _ => return Err(NotationError::InvalidCastling { char: c }),
        };
        if rights.has(color, kingside) {
            return Err(NotationError::DuplicateCastling { char: c });
        }
        rights.set(color, kingside);
    }
    Ok(rights)
}

fn decode_en_passant(field: &str) -> Result<Option<Square>, NotationError> {
    if field == "-" {
        return Ok(None);
    }
    let square = Square::from_str(field).map_err(|_| NotationError::InvalidEnPassant {
        found: field.to_string(),
    })?;
    // Only the square behind a double push is a valid target.
    if square.rank() != 2 && square.rank() != 5 {
        return Err(NotationError::InvalidEnPassant {
            found: field.to_string(),
        });
    }
    Ok(Some(square))
}

fn decode_clock(field: &str, name: &'static str) -> Result<u32, NotationError> {
    field.parse::<u32>().map_err(|_| NotationError::InvalidClock {
        field: name,
        found: field.to_string(),
    })
}
