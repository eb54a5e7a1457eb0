//! Calendar Puzzle Solver
//!
//! Solves a calendar tiling puzzle for a requested date: the pieces must
//! cover the whole board except the cells showing the chosen month, day,
//! and weekday. Prints the solved board in the stable token format, or a
//! no-solution notice.

use clap::{Parser, ValueEnum};

use apad::config::PuzzleKind;
use apad::find_solution;

/// Solves a calendar puzzle for the given date.
#[derive(Parser)]
#[command(name = "apad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Month, 1-12.
    #[arg(short, long)]
    month: u8,

    /// Day of month, 1-31.
    #[arg(short, long)]
    day: u8,

    /// Weekday, 0-6 with Sunday as 0. Ignored by the month-day board.
    #[arg(short, long, default_value_t = 0)]
    weekday: u8,

    /// Board variant to solve.
    #[arg(short, long, value_enum, default_value = "weekday")]
    puzzle: PuzzleArg,

    /// Allow mirrored piece orientations in addition to rotations.
    #[arg(short, long)]
    allow_flip: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PuzzleArg {
    /// Classic 7x7 month/day board.
    MonthDay,
    /// 7x8 board with weekday cells.
    Weekday,
}

impl From<PuzzleArg> for PuzzleKind {
    fn from(arg: PuzzleArg) -> Self {
        match arg {
            PuzzleArg::MonthDay => PuzzleKind::MonthDay,
            PuzzleArg::Weekday => PuzzleKind::Weekday,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match find_solution(
        cli.month,
        cli.day,
        cli.weekday,
        cli.puzzle.into(),
        cli.allow_flip,
    ) {
        Ok(Some(text)) => print!("{text}"),
        Ok(None) => {
            println!("No solution found for this date.");
            if !cli.allow_flip {
                println!("Try again with --allow-flip to permit mirrored pieces.");
            }
        }
        Err(error) => {
            eprintln!("Invalid request: {error}");
            std::process::exit(1);
        }
    }
}
