//! N-dimensional Tic-Tac-Toe.
//!
//! A board of `D` dimensions has side `D + 1` on every axis. Players take
//! turns claiming cells and the first to own `D + 1` cells in a straight line
//! (along one axis or diagonally through any subset of axes) wins.
//!
//! ```
//! use hypertictactoe::{Engine, GameStatus, PlayerId};
//!
//! let mut engine = Engine::with_seed(2, 0).unwrap();
//! for raw in ["0.0", "1.0", "1.1", "2.0", "2.2"] {
//!     engine.play(raw).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Won(PlayerId::First));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interface;

pub use domain::board::{HyperBoard, Placement};
pub use domain::coordinate::Coordinate;
pub use domain::game::GameEngine;
pub use domain::lines::{Line, LineEnumerator};
pub use domain::models::{BoardState, Cell, GameStatus, Player, PlayerId, Token};
pub use domain::win::{Win, WinDetector};
pub use error::{BoardError, CoordinateError, PlacementError};
pub use infrastructure::storage::FlatBoardState;

/// A hypercube board backed by flat storage.
pub type Board = HyperBoard<FlatBoardState>;

/// A game engine backed by flat storage.
pub type Engine = GameEngine<FlatBoardState>;
