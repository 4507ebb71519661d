use crate::board::{Board, BoardError, Color, MIN_SIDE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod naive;
pub mod prefix;

pub use naive::{best_window, min_repaints, window_cost};

/// Window side length.
pub const WINDOW: usize = MIN_SIDE;
/// Cells per window.
pub const WINDOW_CELLS: u32 = (WINDOW * WINDOW) as u32;

/// Which color sits on the window's top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    WhiteOrigin,
    BlackOrigin,
}

impl Phase {
    pub fn origin(self) -> Color {
        match self { Phase::WhiteOrigin => Color::White, Phase::BlackOrigin => Color::Black }
    }

    pub fn other(self) -> Self {
        match self { Phase::WhiteOrigin => Phase::BlackOrigin, Phase::BlackOrigin => Phase::WhiteOrigin }
    }

    /// Expected color at offset (dr, dc) inside the window.
    #[inline]
    pub fn expected(self, dr: usize, dc: usize) -> Color {
        if (dr + dc) % 2 == 0 { self.origin() } else { self.origin().flip() }
    }
}

/// Cheapest window found on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowScore {
    pub row: usize,
    pub col: usize,
    pub phase: Phase,
    pub repaints: u32,
}

impl WindowScore {
    /// Picks the cheaper phase for a window whose white-origin cost is `white`.
    /// Ties go to the white origin.
    pub fn from_white_cost(row: usize, col: usize, white: u32) -> Self {
        let black = WINDOW_CELLS - white;
        if white <= black {
            Self { row, col, phase: Phase::WhiteOrigin, repaints: white }
        } else {
            Self { row, col, phase: Phase::BlackOrigin, repaints: black }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Naive,
    Prefix,
}

impl Strategy {
    pub fn best_window(self, board: &Board) -> WindowScore {
        match self {
            Strategy::Naive => naive::best_window(board),
            Strategy::Prefix => prefix::best_window(board),
        }
    }

    pub fn min_repaints(self, board: &Board) -> u32 {
        match self {
            Strategy::Naive => naive::min_repaints(board),
            Strategy::Prefix => prefix::min_repaints(board),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "prefix" => Ok(Strategy::Prefix),
            other => Err(format!("unknown strategy {other:?} (use 'naive' or 'prefix')")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Strategy::Naive => "naive", Strategy::Prefix => "prefix" })
    }
}

/// Minimum repaints for a raw grid of `'W'`/`'B'` characters.
pub fn min_count_of_squares(grid: &[Vec<char>]) -> Result<u32, BoardError> {
    let board = Board::from_chars(grid)?;
    Ok(min_repaints(&board))
}
