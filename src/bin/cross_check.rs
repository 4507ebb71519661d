use chessboard_repaint::gen::random_board;
use chessboard_repaint::repaint::{naive, prefix};
use clap::Parser;
use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "cross_check", about = "Compare the naive and prefix-sum scans on random boards")]
struct Args {
    #[arg(long, default_value_t = 1000)]
    boards: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Largest side length drawn (boards are 8..=max_side on each axis)
    #[arg(long, default_value_t = 24)]
    max_side: usize,
}

#[derive(Serialize)]
struct Summary {
    boards: usize,
    seed: u64,
    mismatches: usize,
    histogram: Vec<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let max_side = a.max_side.max(8);
    let mut rng = SmallRng::seed_from_u64(a.seed);
    let mut histogram = vec![0usize; 33];
    let mut mismatches = 0usize;
    for i in 0..a.boards {
        let (rows, cols) = (rng.gen_range(8..=max_side), rng.gen_range(8..=max_side));
        let board = random_board(rows, cols, &mut rng);
        let n = naive::best_window(&board);
        let p = prefix::best_window(&board);
        if n != p {
            warn!("board {i} ({rows}x{cols}): naive {:?} vs prefix {:?}\n{}", n, p, board);
            mismatches += 1;
        }
        histogram[n.repaints as usize] += 1;
    }
    let summary = Summary { boards: a.boards, seed: a.seed, mismatches, histogram };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if mismatches > 0 { anyhow::bail!("{mismatches} boards disagreed"); }
    Ok(())
}
