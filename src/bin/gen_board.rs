use chessboard_repaint::board::parse::to_judge_input;
use chessboard_repaint::board::Color;
use chessboard_repaint::gen::{perturbed_chessboard, random_board};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "gen_board", about = "Print a random board in judge format")]
struct Args {
    #[arg(long, default_value_t = 10)]
    rows: usize,
    #[arg(long, default_value_t = 13)]
    cols: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Flip this many cells of a white-origin chessboard instead of drawing uniform cells
    #[arg(long)]
    flips: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    if a.rows < 8 || a.cols < 8 {
        anyhow::bail!("board must be at least 8x8, got {}x{}", a.rows, a.cols);
    }
    let mut rng = SmallRng::seed_from_u64(a.seed);
    let board = match a.flips {
        Some(n) => perturbed_chessboard(a.rows, a.cols, Color::White, n, &mut rng),
        None => random_board(a.rows, a.cols, &mut rng),
    };
    log::debug!("generated {}x{} board from seed {}", a.rows, a.cols, a.seed);
    print!("{}", to_judge_input(&board));
    Ok(())
}
