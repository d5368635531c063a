//! Klotski (Hua Rong Dao) Solver Library
//!
//! Provides the puzzle-solving core for the 5x4 sliding-block game:
//! board encoding, successor generation, symmetry-reduced visited-state
//! indexing and three optimal search strategies, behind a small facade
//! that reports minimum remaining moves and next-move hints.

pub mod board;
pub mod layouts;
pub mod moves;
pub mod search;
pub mod solver;
pub mod trie;

pub use board::{decode, encode, BoardError, BoardState, Grid};
pub use solver::{hint_from_path, Engine, SolveReport, Solver};
