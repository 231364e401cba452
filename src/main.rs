//! Mastermind - CLI
//!
//! Text-mode Mastermind with save files, plus tools for inspecting saves
//! and scoring codes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{inspect_board, new_board, run_play, score_codes},
    core::{Board, DEFAULT_COLORS, DEFAULT_ROWS, DEFAULT_SLOTS, GameConfig},
    output::{print_inspect_report, print_palette, print_score},
    savefile::{load_board, save_board},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden code of colored pegs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pegs per row (2-10)
    #[arg(long, global = true, default_value_t = DEFAULT_SLOTS)]
    slots: usize,

    /// Number of colors in play (2-8)
    #[arg(long, global = true, default_value_t = DEFAULT_COLORS)]
    colors: usize,

    /// Number of guess rows (2-20)
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Resume a saved game
        #[arg(short, long)]
        load: Option<PathBuf>,

        /// Save file written on 'save', on quit and when the game ends
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Fixed solution code instead of a random one, e.g. "ragw"
        #[arg(long, conflicts_with = "load")]
        solution: Option<String>,
    },

    /// Write a fresh game to a save file
    New {
        /// Save file to create
        #[arg(short, long)]
        out: PathBuf,

        /// Fixed solution code instead of a random one
        #[arg(long)]
        solution: Option<String>,
    },

    /// Show the contents of a save file
    Inspect {
        /// Save file to read
        file: PathBuf,

        /// Also print the hidden code
        #[arg(short, long)]
        reveal: bool,
    },

    /// Score a guess against a code, e.g. `score ragw rawg`
    Score {
        /// The hidden code
        solution: String,

        /// The guess to score
        guess: String,
    },

    /// List the colors and their codes
    Palette,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.slots, cli.colors, cli.rows);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        load: None,
        save: None,
        solution: None,
    });

    match command {
        Commands::Play {
            load,
            save,
            solution,
        } => run_play_command(config, load, save, solution.as_deref()),
        Commands::New { out, solution } => run_new_command(config, &out, solution.as_deref()),
        Commands::Inspect { file, reveal } => run_inspect_command(&file, reveal),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess),
        Commands::Palette => {
            print_palette(config.colors());
            Ok(())
        }
    }
}

fn run_play_command(
    config: GameConfig,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    solution: Option<&str>,
) -> Result<()> {
    let board = match &load {
        Some(path) => load_board(path)
            .with_context(|| format!("Failed to load game from {}", path.display()))?,
        None => new_board(config, solution).map_err(|e| anyhow::anyhow!(e))?,
    };

    // Keep playing into the loaded file unless told otherwise
    let save_path = save.or(load);
    run_play(board, save_path.as_deref()).map_err(|e| anyhow::anyhow!(e))
}

fn run_new_command(config: GameConfig, out: &Path, solution: Option<&str>) -> Result<()> {
    let board = new_board(config, solution).map_err(|e| anyhow::anyhow!(e))?;
    save_board(out, &board).with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "Created {}: {} slots, {} colors, {} rows",
        out.display(),
        board.slots(),
        board.colors(),
        board.max_rows()
    );
    Ok(())
}

fn run_inspect_command(file: &Path, reveal: bool) -> Result<()> {
    let board: Board =
        load_board(file).with_context(|| format!("Failed to load {}", file.display()))?;
    print_inspect_report(&inspect_board(&board, reveal));
    Ok(())
}

fn run_score_command(solution: &str, guess: &str) -> Result<()> {
    let feedback = score_codes(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score(feedback, solution.trim().chars().count());
    Ok(())
}
