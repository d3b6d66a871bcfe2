//! Piece-square tables for a hand-crafted chess evaluation.
//!
//! Every entry is a [`Score`] packing a middlegame and an endgame value into one
//! integer, so an evaluator can keep a running total with plain additions and
//! split it into its two halves once, when blending by game phase.

pub mod accumulator;
pub mod cli;
pub mod placement;
pub mod pst;
pub mod render;
pub mod score;
pub mod types;

pub use accumulator::PstAccumulator;
pub use pst::{lookup, Pst};
pub use score::{Score, S};
pub use types::{Piece, PieceType, Side, Square};
