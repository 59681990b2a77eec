use anyhow::{Context, Result};
use clap::Parser;
use gridfind::index::{GridIndex, IndexConfig};
use gridfind::output;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Sample board and stream from the original word-finder exercise, used
/// when no puzzle file is given.
const SAMPLE_GRID: [&str; 5] = ["ABCDC", "FGWIO", "CHILL", "PQNSD", "UVDXY"];
const SAMPLE_STREAM: [&str; 4] = ["cold", "wind", "snow", "chill"];

#[derive(Parser)]
#[command(name = "gridfind")]
#[command(about = "Find word-stream entries occurring in a character grid, ranked by frequency")]
struct Cli {
    /// Puzzle file: JSON with "grid" and "words" arrays and an optional
    /// "config" object
    #[arg(short, long)]
    puzzle: Option<PathBuf>,

    /// Words to look up (replaces the puzzle's word stream)
    words: Vec<String>,

    /// Match with exact case instead of the default uppercase normalization
    #[arg(long)]
    case_sensitive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// On-disk puzzle format.
#[derive(Debug, Deserialize)]
struct PuzzleFile {
    grid: Vec<String>,
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    config: IndexConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (grid, mut words, mut config) = match &cli.puzzle {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read puzzle file: {}", path.display()))?;
            let puzzle: PuzzleFile = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid puzzle file: {}", path.display()))?;
            (puzzle.grid, puzzle.words, puzzle.config)
        }
        None => (
            SAMPLE_GRID.iter().map(|s| s.to_string()).collect(),
            SAMPLE_STREAM.iter().map(|s| s.to_string()).collect(),
            IndexConfig::default(),
        ),
    };

    if !cli.words.is_empty() {
        words = cli.words.clone();
    }
    if cli.case_sensitive {
        config.case_insensitive = false;
    }

    let index = GridIndex::with_config(&grid, config).context("Invalid grid")?;
    let found = index.find(&words);

    output::print_matches(&found, !cli.no_color)?;
    Ok(())
}
