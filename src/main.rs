use anyhow::{Context, Result};
use chessboard_repaint::board::parse::parse_judge_input;
use chessboard_repaint::repaint::Strategy;
use clap::Parser;
use log::info;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimum repaints to cut an 8x8 chessboard out of a board", long_about = None)]
struct Args {
    /// Input file in judge format ("N M" then N rows); stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Scan strategy: 'naive' or 'prefix'
    #[arg(long, default_value = "naive")]
    strategy: Strategy,

    /// Print the winning window as JSON
    #[arg(long)]
    json: bool,

    /// Report the winning window on stderr
    #[arg(long)]
    verbose: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = read_input(args.input.as_ref())?;
    let board = parse_judge_input(&text)?;
    let score = args.strategy.best_window(&board);
    info!("{} scan over {}x{} board: {:?}", args.strategy, board.rows(), board.cols(), score);
    if args.verbose {
        eprintln!("window ({}, {}) {:?} needs {} repaints", score.row, score.col, score.phase, score.repaints);
    }

    if args.json {
        println!("{}", serde_json::to_string(&score)?);
    } else {
        println!("{}", score.repaints);
    }
    Ok(())
}
