//! Deadstones: estimate dead stones in a finished Go position.
//!
//! ## Usage
//!
//! - `deadstones` - Run the demo on a built-in position
//! - `deadstones guess board.txt` - List the dead stones of a position
//! - `deadstones ownership board.txt` - Print the ownership probability map
//! - `deadstones playout board.txt` - Run a single random playout
//!
//! Boards are text files of `X` (black), `O` (white) and `.` (empty) cells.
//! Use `-` as the file name to read from stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use deadstones::board::{Board, Sign, Vertex, str_vertex};
use deadstones::constants::DEFAULT_ITERATIONS;
use deadstones::deadstones::{classify_dead_with_rng, estimate_ownership_with_rng};
use deadstones::logging;
use deadstones::playout::simulate;

const DEMO_BOARD: &str = "\
. X . X O . O . .
X X X X O O O O O
. X O X X O . O .
X X X X O O O . O
. X . X X O X O .
X . X O O O O O O
X X O O . O . O .
. X O . O O O X O
X X O O O . O O .
";

/// Deadstones: guess dead stones with random playouts
#[derive(Parser)]
#[command(name = "deadstones")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board with dead stones marked, followed by their coordinates
    Guess(EstimateArgs),
    /// Print the probability that each point ends up black
    Ownership(EstimateArgs),
    /// Run one random playout and print the final board
    Playout {
        /// Board file, or `-` for stdin
        file: PathBuf,
        /// Side to move first
        #[arg(long, value_enum, default_value_t = Color::Black)]
        color: Color,
        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the dead stone guess on a built-in position
    Demo,
}

#[derive(Args)]
struct EstimateArgs {
    /// Board file, or `-` for stdin
    file: PathBuf,
    /// Number of playouts
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,
    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Sign {
    fn from(c: Color) -> Sign {
        match c {
            Color::Black => Sign::Black,
            Color::White => Sign::White,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to install logger")?;

    match cli.command {
        Some(Commands::Guess(args)) => {
            let board = read_board(&args.file)?;
            let dead = classify_dead_with_rng(&board, args.iterations as usize, &mut make_rng(args.seed));
            print_guess(&board, &dead);
        }
        Some(Commands::Ownership(args)) => {
            let board = read_board(&args.file)?;
            let map = estimate_ownership_with_rng(&board, args.iterations as usize, &mut make_rng(args.seed));
            print!("{map}");
        }
        Some(Commands::Playout { file, color, seed }) => {
            let board = read_board(&file)?;
            let result = simulate(&board, color.into(), None, &mut make_rng(seed));
            print!("{result}");
        }
        Some(Commands::Demo) | None => run_demo()?,
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

fn read_board(path: &Path) -> Result<Board> {
    let text = if path == Path::new("-") {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("failed to read board from stdin")?;
        s
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    text.parse::<Board>()
        .with_context(|| format!("invalid board in {}", path.display()))
}

/// Print the board with dead stones in lowercase, then their coordinates.
fn print_guess(board: &Board, dead: &[Vertex]) {
    for y in 0..board.height() {
        let row: Vec<&str> = (0..board.width())
            .map(|x| {
                let is_dead = dead.contains(&(x, y));
                match (board.get((x, y)), is_dead) {
                    (Sign::Black, false) => "X",
                    (Sign::Black, true) => "x",
                    (Sign::White, false) => "O",
                    (Sign::White, true) => "o",
                    (Sign::Empty, _) => ".",
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }

    let mut names: Vec<String> = dead.iter().map(|&v| str_vertex(v, board.height())).collect();
    names.sort();
    println!("\ndead: {}", if names.is_empty() { "none".to_string() } else { names.join(" ") });
}

fn run_demo() -> Result<()> {
    println!("Deadstones: random playout dead stone estimation\n");

    let board: Board = DEMO_BOARD.parse().context("invalid demo board")?;
    println!("{board}");

    println!("Running {DEFAULT_ITERATIONS} playouts...\n");
    let dead = classify_dead_with_rng(&board, DEFAULT_ITERATIONS, &mut fastrand::Rng::new());
    print_guess(&board, &dead);
    Ok(())
}
