pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, CastlingRights, Color, FenData, GameStatus, Move, Piece, Square};
pub use engine::{EngineConfig, EngineError, EngineGateway, MoveEngine};
pub use game::{MatchError, MatchState, MoveError};
