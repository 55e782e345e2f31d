use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "wrapsnek")]
#[command(version, about = "Snake on a wrap-around board")]
pub struct Config {
    /// Cells along each side of the square board
    #[arg(long, default_value_t = 10)]
    pub board_size: u16,

    /// Snake moves per second
    #[arg(long, default_value_t = 2.0)]
    pub speed: f64,

    /// File holding the best score between runs
    #[arg(long, default_value = ".wrapsnek_best_score")]
    pub best_score_file: PathBuf,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "wrapsnek.log")]
    pub log_file: PathBuf,

    /// Seed for food placement, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}
