//! # sudoku-solver
//!
//! A command-line Sudoku solver for generalized m×n-block grids, driven by
//! candidate-set propagation (a single subset-elimination rule) plus one-step
//! lookahead, with no recursive backtracking.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a board file (side lines of symbols, '.' for unknown)
//! sudoku-solver puzzle.txt
//! sudoku-solver file --path puzzle.txt
//!
//! # Solve a board given inline
//! sudoku-solver text --input "12..\n..1.\n....\n...2" --block-rows 2 --block-cols 2
//!
//! # Solve one of the bundled example boards
//! sudoku-solver example --index 1
//!
//! # Shell completions
//! sudoku-solver completions bash
//! ```
//!
//! Board files are `side` lines of `side` symbols each; blank lines and lines
//! starting with `#` are ignored. The block shape defaults to 3×3 and is set
//! with `--block-rows`/`--block-cols` for other grids.

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use std::time::Duration;
use sudoku_solver::sudoku::error::PuzzleError;
use sudoku_solver::sudoku::solver::{SolveStats, Solver};
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Two classic 9×9 boards bundled for quick demonstration runs.
const EXAMPLE_BOARDS: [[&str; 9]; 2] = [
    [
        "345......",
        "..6..1...",
        "8.1.7.2..",
        "..3..8...",
        "6......5.",
        "..419.6..",
        "...6.51.3",
        "......7..",
        ".....4...",
    ],
    [
        "4......1.",
        ".7.......",
        "..1.6..3.",
        "2.68..14.",
        ".394..2..",
        "....7..93",
        ".....842.",
        "3......89",
        "8.4..2..1",
    ],
];

/// Defines the command-line interface for the sudoku solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A propagation-based Sudoku solver")]
struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a board file to solve.
    #[arg(global = true)]
    path: Option<String>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `example`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a board file.
    File {
        /// Path to the board file.
        #[arg(short, long)]
        path: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a board provided as plain text, one row per line.
    Text {
        /// Literal board input, rows separated by newlines or commas
        /// (e.g. "12..,..1.,....,...2").
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve one of the bundled 9x9 example boards.
    Example {
        /// Which example board to solve.
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Rows per block of the region tiling.
    #[arg(long, default_value_t = 3)]
    block_rows: usize,

    /// Columns per block of the region tiling.
    #[arg(long, default_value_t = 3)]
    block_cols: usize,

    /// Enable printing of performance statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print every cell's remaining candidate set alongside the solution.
    #[arg(short, long, default_value_t = false)]
    print_candidates: bool,
}

/// Main entry point of the sudoku solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a subcommand.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            run(|| read_board_file(&path), &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => {
            run(|| read_board_file(&path), &common);
        }
        Some(Commands::Text { input, common }) => {
            run(|| Ok(parse_textual_board(&input)), &common);
        }
        Some(Commands::Example { index, common }) => {
            let Some(board) = EXAMPLE_BOARDS.get(index) else {
                eprintln!(
                    "No example board {index}; {} are bundled",
                    EXAMPLE_BOARDS.len()
                );
                std::process::exit(2);
            };
            let rows = board.iter().map(ToString::to_string).collect_vec();
            // Example boards are 9x9 regardless of the block options.
            let common = CommonOptions {
                block_rows: 3,
                block_cols: 3,
                ..common
            };
            run(move || Ok(rows), &common);
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sudoku-solver", &mut std::io::stdout());
        }
        None => {
            eprintln!("No board given; try `sudoku-solver --help`");
            std::process::exit(2);
        }
    }
}

/// Loads a board through `rows`, solves it, and reports. Exits nonzero on any
/// construction or convergence error.
fn run<F>(rows: F, common: &CommonOptions)
where
    F: FnOnce() -> Result<Vec<String>, std::io::Error>,
{
    let time = std::time::Instant::now();
    let rows = rows().unwrap_or_else(|e| {
        eprintln!("Failed to read board: {e}");
        std::process::exit(2);
    });
    let shape = (common.block_rows, common.block_cols);

    let mut solver = match Solver::from_lines(shape, &rows, None) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Invalid board: {e}");
            std::process::exit(2);
        }
    };
    let parse_time = time.elapsed();

    println!("Parsed board:\n{}", solver.grid());

    let time = std::time::Instant::now();
    let outcome = solver.solve();
    let elapsed = time.elapsed();

    match outcome {
        Ok(solve_stats) => {
            println!("\nSolution:\n{}", solver.grid());
            if common.print_candidates {
                println!("\nCandidates:\n{}", solver.grid().dump_candidates());
            }
            if common.stats {
                print_stats(parse_time, elapsed, &solve_stats, solver.grid().side());
            }
        }
        Err(e @ PuzzleError::NotConverged { .. }) => {
            println!("\nPartial solution:\n{}", solver.grid());
            if common.print_candidates {
                println!("\nCandidates:\n{}", solver.grid().dump_candidates());
            }
            eprintln!("\n{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Reads a board file: one row per line, blank lines and `#` comments skipped.
fn read_board_file(path: &str) -> Result<Vec<String>, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(board_rows(&content))
}

/// Parses an inline board given with `--input`, accepting `,` as a row
/// separator in addition to newlines so boards fit on one shell line.
fn parse_textual_board(input: &str) -> Vec<String> {
    board_rows(&input.replace(',', "\n").replace("\\n", "\n"))
}

fn board_rows(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect_vec()
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of solve statistics, including jemalloc memory figures.
fn print_stats(parse_time: Duration, elapsed: Duration, s: &SolveStats, side: usize) {
    // Advance epoch for memory stats collection; helps isolate the memory
    // used by the solving phase.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    println!("\n=================[ Solve Statistics ]=================");
    stat_line("Grid side", side);
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Solve time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    stat_line("Lookahead rounds", s.rounds);
    stat_line("Trial grids", s.trials);
    stat_line("Reduction passes", s.passes);
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    println!("======================================================");
}
