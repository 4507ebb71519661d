//! Board builders for tests, benches and the generator binary.
use crate::board::{Board, Color};
use rand::rngs::SmallRng;
use rand::Rng;

fn build(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> Color) -> Board {
    let grid: Vec<Vec<Color>> = (0..rows).map(|r| (0..cols).map(|c| cell(r, c)).collect()).collect();
    Board::from_rows(grid).unwrap_or_else(|e| panic!("generated board {rows}x{cols} rejected: {e}"))
}

/// Perfect alternating board with `origin` at (0, 0). Panics below 8x8.
pub fn chessboard(rows: usize, cols: usize, origin: Color) -> Board {
    build(rows, cols, |r, c| if (r + c) % 2 == 0 { origin } else { origin.flip() })
}

/// Single color everywhere. Panics below 8x8.
pub fn filled(rows: usize, cols: usize, color: Color) -> Board {
    build(rows, cols, |_, _| color)
}

/// Uniform random cells.
pub fn random_board(rows: usize, cols: usize, rng: &mut SmallRng) -> Board {
    build(rows, cols, |_, _| if rng.gen::<bool>() { Color::White } else { Color::Black })
}

/// Chessboard with `flips` random cells flipped (a cell may be hit twice).
pub fn perturbed_chessboard(rows: usize, cols: usize, origin: Color, flips: usize, rng: &mut SmallRng) -> Board {
    let mut b = chessboard(rows, cols, origin);
    for _ in 0..flips {
        let (r, c) = (rng.gen_range(0..rows), rng.gen_range(0..cols));
        b.flip(r, c);
    }
    b
}
