use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod parse;

/// Smallest board side that still fits one chessboard window.
pub const MIN_SIDE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
}

impl Color {
    pub fn flip(self) -> Self {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self { Color::White => 'W', Color::Black => 'B' }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board is {rows}x{cols}, needs at least {min}x{min}", min = MIN_SIDE)]
    TooSmall { rows: usize, cols: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("invalid cell {ch:?} at ({row}, {col}); expected 'W' or 'B'")]
    InvalidCell { row: usize, col: usize, ch: char },
    #[error("bad header: {0}")]
    Header(String),
    #[error("header declares {expected} rows but {found} were given")]
    RowCount { expected: usize, found: usize },
}

/// Rectangular two-color grid, at least 8x8. Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Board {
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, |r| r.len());
        for (i, r) in rows.iter().enumerate() {
            if r.len() != cols { return Err(BoardError::Ragged { row: i, expected: cols, found: r.len() }); }
        }
        if rows.len() < MIN_SIDE || cols < MIN_SIDE {
            return Err(BoardError::TooSmall { rows: rows.len(), cols });
        }
        let n = rows.len();
        let cells: Vec<Color> = rows.into_iter().flatten().collect();
        Ok(Self { rows: n, cols, cells })
    }

    pub fn from_chars(grid: &[Vec<char>]) -> Result<Self, BoardError> {
        let mut rows = Vec::with_capacity(grid.len());
        for (i, line) in grid.iter().enumerate() {
            rows.push(parse_row(i, line.iter().copied())?);
        }
        Self::from_rows(rows)
    }

    pub fn from_strings<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            rows.push(parse_row(i, line.as_ref().chars())?);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Color { self.row(row)[col] }

    pub fn flip(&mut self, row: usize, col: usize) {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        let idx = row * self.cols + col;
        self.cells[idx] = self.cells[idx].flip();
    }

    /// Same board with every cell swapped W <-> B.
    pub fn inverted(&self) -> Self {
        Self { rows: self.rows, cols: self.cols, cells: self.cells.iter().map(|c| c.flip()).collect() }
    }

    pub fn row(&self, row: usize) -> &[Color] { &self.cells[row * self.cols..(row + 1) * self.cols] }

    /// Number of 8x8 windows: (rows - 7) * (cols - 7).
    pub fn window_count(&self) -> usize { (self.rows - MIN_SIDE + 1) * (self.cols - MIN_SIDE + 1) }
}

fn parse_row<I: Iterator<Item = char>>(row: usize, chars: I) -> Result<Vec<Color>, BoardError> {
    chars
        .enumerate()
        .map(|(col, ch)| Color::from_char(ch).ok_or(BoardError::InvalidCell { row, col, ch }))
        .collect()
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Self::from_strings(&lines)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 { writeln!(f)?; }
            for &c in self.row(r) { write!(f, "{}", c.as_char())?; }
        }
        Ok(())
    }
}
