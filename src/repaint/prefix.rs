//! Summed-area table over a per-cell mismatch indicator; O(1) per window.
use super::{WindowScore, WINDOW, WINDOW_CELLS};
use crate::board::{Board, Color};
use log::debug;

/// Prefix sums of "cell differs from the white-origin pattern anchored at (0, 0)".
pub struct MismatchTable {
    cols: usize,
    sums: Vec<u32>,
}

impl MismatchTable {
    pub fn new(board: &Board) -> Self {
        let (rows, cols) = (board.rows(), board.cols());
        let stride = cols + 1;
        let mut sums = vec![0u32; (rows + 1) * stride];
        for r in 0..rows {
            let mut run = 0u32;
            for c in 0..cols {
                let expected = if (r + c) % 2 == 0 { Color::White } else { Color::Black };
                if board.get(r, c) != expected { run += 1; }
                sums[(r + 1) * stride + c + 1] = sums[r * stride + c + 1] + run;
            }
        }
        Self { cols, sums }
    }

    /// Mismatch total of the `h`x`w` rectangle with top-left (row, col).
    pub fn rect(&self, row: usize, col: usize, h: usize, w: usize) -> u32 {
        let s = self.cols + 1;
        let (r0, c0, r1, c1) = (row, col, row + h, col + w);
        self.sums[r1 * s + c1] + self.sums[r0 * s + c0] - self.sums[r0 * s + c1] - self.sums[r1 * s + c0]
    }

    /// White-origin cost of the window at (row, col).
    pub fn white_cost(&self, row: usize, col: usize) -> u32 {
        let sum = self.rect(row, col, WINDOW, WINDOW);
        // odd offsets see the board-wide pattern shifted by one phase
        if (row + col) % 2 == 0 { sum } else { WINDOW_CELLS - sum }
    }
}

pub fn best_window(board: &Board) -> WindowScore {
    let table = MismatchTable::new(board);
    let mut best = WindowScore::from_white_cost(0, 0, table.white_cost(0, 0));
    for row in 0..=board.rows() - WINDOW {
        for col in 0..=board.cols() - WINDOW {
            let cand = WindowScore::from_white_cost(row, col, table.white_cost(row, col));
            if cand.repaints < best.repaints { best = cand; }
        }
    }
    debug!("prefix scan {}x{}: best {:?}", board.rows(), board.cols(), best);
    best
}

pub fn min_repaints(board: &Board) -> u32 { best_window(board).repaints }
