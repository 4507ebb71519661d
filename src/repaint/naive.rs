//! Direct scan: every window, every cell.
use super::{Phase, WindowScore, WINDOW};
use crate::board::Board;
use log::{debug, trace};

/// Cells of the window at (row, col) that differ from `phase`.
pub fn window_cost(board: &Board, row: usize, col: usize, phase: Phase) -> u32 {
    let mut cost = 0u32;
    for dr in 0..WINDOW {
        let line = &board.row(row + dr)[col..col + WINDOW];
        for (dc, &cell) in line.iter().enumerate() {
            if cell != phase.expected(dr, dc) { cost += 1; }
        }
    }
    cost
}

pub fn best_window(board: &Board) -> WindowScore {
    // black-origin cost is the complement; no second scan needed
    let mut best = WindowScore::from_white_cost(0, 0, window_cost(board, 0, 0, Phase::WhiteOrigin));
    for row in 0..=board.rows() - WINDOW {
        for col in 0..=board.cols() - WINDOW {
            if (row, col) == (0, 0) { continue; }
            let cand = WindowScore::from_white_cost(row, col, window_cost(board, row, col, Phase::WhiteOrigin));
            if cand.repaints < best.repaints {
                trace!("new best {:?}", cand);
                best = cand;
            }
        }
    }
    debug!("naive scan {}x{}: {} windows, best {:?}", board.rows(), board.cols(), board.window_count(), best);
    best
}

pub fn min_repaints(board: &Board) -> u32 { best_window(board).repaints }
