use chessboard_repaint::board::parse::parse_judge_input;
use chessboard_repaint::board::Color;
use chessboard_repaint::gen::{chessboard, perturbed_chessboard, random_board};
use chessboard_repaint::repaint::{naive, prefix, Strategy};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn prefix_agrees_with_naive_on_random_boards() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let b = random_board(rng.gen_range(8..=20), rng.gen_range(8..=20), &mut rng);
        assert_eq!(prefix::best_window(&b), naive::best_window(&b), "board:\n{}", b);
    }
}

#[test]
fn prefix_agrees_on_odd_offsets() {
    let mut rng = SmallRng::seed_from_u64(3);
    for origin in [Color::White, Color::Black] {
        for flips in [0, 1, 5, 20] {
            let b = perturbed_chessboard(9, 10, origin, flips, &mut rng);
            assert_eq!(prefix::min_repaints(&b), naive::min_repaints(&b));
        }
    }
    // clean window only at an odd offset
    let mut b = chessboard(9, 9, Color::White);
    for i in 0..9 { b.flip(i, 0); }
    for j in 1..9 { b.flip(8, j); }
    let s = naive::best_window(&b);
    assert_eq!((s.row, s.col, s.repaints), (0, 1, 0));
    assert_eq!(prefix::best_window(&b), naive::best_window(&b));
}

#[test]
fn strategy_dispatch() {
    let input = "10 13
BBBBBBBBWBWBW
BBBBBBBBBWBWB
BBBBBBBBWBWBW
BBBBBBBBBWBWB
BBBBBBBBWBWBW
BBBBBBBBBWBWB
BBBBBBBBWBWBW
BBBBBBBBBWBWB
WWWWWWWWWWBWB
WWWWWWWWWWBWB
";
    let b = parse_judge_input(input).unwrap();
    assert_eq!(Strategy::Naive.min_repaints(&b), 12);
    assert_eq!(Strategy::Prefix.min_repaints(&b), 12);
    assert_eq!(Strategy::Naive.best_window(&b), Strategy::Prefix.best_window(&b));
}
