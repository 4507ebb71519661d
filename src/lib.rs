//! Minimum repaints needed to cut a perfect 8x8 chessboard out of a
//! two-color grid.
pub mod board;
pub mod gen;
pub mod repaint;

pub use board::{Board, BoardError, Color};
pub use repaint::{best_window, min_count_of_squares, min_repaints, Phase, Strategy, WindowScore};
