//! Judge input format: a header line `N M`, then `N` rows of `M` cells.
use super::{Board, BoardError};

fn parse_header(line: &str) -> Result<(usize, usize), BoardError> {
    let mut it = line.split_whitespace();
    let mut next = |what: &str| -> Result<usize, BoardError> {
        let tok = it.next().ok_or_else(|| BoardError::Header(format!("missing {what}")))?;
        tok.parse::<usize>().map_err(|e| BoardError::Header(format!("{what} {tok:?}: {e}")))
    };
    let n = next("row count")?;
    let m = next("column count")?;
    if let Some(extra) = it.next() { return Err(BoardError::Header(format!("unexpected token {extra:?}"))); }
    Ok((n, m))
}

pub fn parse_judge_input(input: &str) -> Result<Board, BoardError> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines.next().ok_or_else(|| BoardError::Header("empty input".to_string()))?;
    let (n, m) = parse_header(header)?;
    let rows: Vec<&str> = lines.collect();
    if rows.len() != n { return Err(BoardError::RowCount { expected: n, found: rows.len() }); }
    let board = Board::from_strings(&rows)?;
    if board.cols() != m {
        return Err(BoardError::Ragged { row: 0, expected: m, found: board.cols() });
    }
    Ok(board)
}

/// Inverse of [`parse_judge_input`].
pub fn to_judge_input(board: &Board) -> String {
    format!("{} {}\n{}\n", board.rows(), board.cols(), board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "8 8
WBWBWBWB
BWBWBWBW
WBWBWBWB
BWBBBWBW
WBWBWBWB
BWBWBWBW
WBWBWBWB
BWBWBWBW
";

    #[test]
    fn parses_sample() {
        let b = parse_judge_input(SAMPLE).unwrap();
        assert_eq!((b.rows(), b.cols()), (8, 8));
        assert_eq!(to_judge_input(&b), SAMPLE);
    }

    #[test]
    fn tolerates_blank_lines_and_padding() {
        let padded = format!("\n  {}\n", SAMPLE.replace('\n', "  \n"));
        assert!(parse_judge_input(&padded).is_ok());
    }

    #[test]
    fn header_errors() {
        assert!(matches!(parse_judge_input(""), Err(BoardError::Header(_))));
        assert!(matches!(parse_judge_input("8\nWBWBWBWB"), Err(BoardError::Header(_))));
        assert!(matches!(parse_judge_input("8 x\nWBWBWBWB"), Err(BoardError::Header(_))));
        assert!(matches!(parse_judge_input("8 8 8\nWBWBWBWB"), Err(BoardError::Header(_))));
    }

    #[test]
    fn declared_shape_must_match() {
        let short = SAMPLE.replacen("8 8", "9 8", 1);
        assert_eq!(parse_judge_input(&short).unwrap_err(), BoardError::RowCount { expected: 9, found: 8 });
        let wide = SAMPLE.replacen("8 8", "8 10", 1);
        assert_eq!(parse_judge_input(&wide).unwrap_err(), BoardError::Ragged { row: 0, expected: 10, found: 8 });
    }
}
