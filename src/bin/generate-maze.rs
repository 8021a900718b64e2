//! CLI for maze generation

use clap::Parser;
use maze_search::MazeGenerator;

/// Perfect maze generator, prints the maze as emojis
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height, odd and at least 5
    #[arg(long, default_value_t = 51)]
    height: usize,

    /// Generated maze width, odd and at least 5
    #[arg(long, default_value_t = 51)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate(args.width, args.height)?;
    println!("{}", grid);
    Ok(())
}
