//! ktour - exhaustive parallel search for the longest knight's tour.

use clap::Parser;
use std::process::ExitCode;

mod board;
mod search;

use board::Board;
use search::{run_search, SearchConfig};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "ktour")]
#[command(about = "Exhaustive parallel search for the longest knight's tour")]
#[command(version)]
struct Args {
    /// Board width (number of columns); must be greater than 2
    #[arg(value_parser = clap::value_parser!(i32).range(3..))]
    cols: i32,

    /// Board height (number of rows); must be greater than 2
    #[arg(value_parser = clap::value_parser!(i32).range(3..))]
    rows: i32,

    /// Explore branches one at a time instead of spawning worker threads
    #[arg(long)]
    sequential: bool,

    /// Print the board at every fan-out point and dead end
    #[arg(long)]
    display_board: bool,

    /// Print search statistics after the summary line
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = Board::new(args.cols, args.rows);
    let config = SearchConfig::default()
        .with_sequential(args.sequential)
        .with_display_board(args.display_board);

    match run_search(board, config) {
        Ok(result) => {
            if args.stats {
                print!("{}", result.statistics.format_summary());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
