//! Board, coordinates, line enumeration, win detection and the game state
//! machine. Everything here is synchronous and free of I/O.

pub mod board;
pub mod coordinate;
pub mod game;
pub mod lines;
pub mod models;
pub mod services;
pub mod win;
