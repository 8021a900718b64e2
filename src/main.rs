//! CLI for animated maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use maze_search::{driver, Algorithm, Grid, MazeGenerator};

/// Generate a maze and watch a search find its way to the goal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Algorithm::BreadthFirst)]
    algorithm: Algorithm,

    /// End the search tick as soon as the goal is seen
    #[arg(long)]
    stop_at_goal: bool,

    /// Display the search on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 10)]
    frame_length: u64,

    /// Generated maze width
    #[arg(long, default_value_t = 51)]
    width: usize,

    /// Generated maze height
    #[arg(long, default_value_t = 51)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File, where to read the maze instead of generating one. Use `-` for stdin.
    file: Option<PathBuf>,
}

/// Read or generate maze, solve it, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = match &args.file {
        Some(file) => {
            let emojis = if file.to_str() == Some("-") {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf)?;
                buf
            } else {
                fs::read_to_string(file)?
            };
            Grid::parse_emojis(emojis.trim())?
        }
        None => MazeGenerator::new(args.seed).generate(args.width, args.height)?,
    };

    let mut solver = args.algorithm.solver().stop_at_goal(args.stop_at_goal);

    let report = if args.playback {
        driver::playback(
            &mut solver,
            grid,
            Duration::from_millis(args.frame_length),
        )?
    } else {
        driver::run(&mut solver, grid)?
    };
    report.print_report();
    Ok(())
}
