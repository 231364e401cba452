//! Text-mode game
//!
//! Drives a [`Board`] from typed lines: whole guesses or single-peg edits.
//! Pegs go through the board's mutation API, so completed rows stay locked.

use crate::core::{Board, CLEAR_CHAR, Color, EMPTY_CHAR, Feedback, GameOutcome, Row};
use crate::output::{print_board, print_help, print_outcome, print_turn_feedback};
use crate::savefile::save_board;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Save,
    Board,
    Help,
    /// A whole row; empty slots are cleared
    Guess(Row),
    /// A single slot (zero-based column); `None` clears it
    Peg { col: usize, color: Option<Color> },
}

/// What a line of input did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The active row still has empty slots (or the edit was refused)
    Pending { placed: bool },
    /// The row filled up and was scored
    Scored { row: usize, feedback: Feedback },
    /// The game has no active row
    Finished,
}

/// Parse a line of input for a board with `slots` slots and `colors` colors
///
/// Accepted forms: `quit`/`q`, `save`/`s`, `board`/`show`, `help`/`h`/`?`,
/// a guess such as `ragw` (`-` or `x` for blanks), or `<column> <code>`
/// such as `2 g` or `2 x` with a one-based column.
///
/// # Errors
///
/// Returns a message describing why the line was rejected.
pub fn parse_input(line: &str, slots: usize, colors: usize) -> Result<Input, String> {
    let line = line.trim();

    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "save" | "s" => return Ok(Input::Save),
        "board" | "show" => return Ok(Input::Board),
        "help" | "h" | "?" => return Ok(Input::Help),
        _ => {}
    }

    if let Some((col, code)) = line.split_once(char::is_whitespace) {
        let col: usize = col
            .parse()
            .map_err(|_| format!("Invalid column '{col}'"))?;
        if col == 0 || col > slots {
            return Err(format!("Column must be between 1 and {slots}"));
        }

        let mut chars = code.trim().chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(format!("Expected a single color code, got '{}'", code.trim()));
        };
        let color = match ch {
            CLEAR_CHAR | EMPTY_CHAR => None,
            _ => Some(
                Color::from_code_char(ch, colors).ok_or_else(|| format!("Unknown color '{ch}'"))?,
            ),
        };
        return Ok(Input::Peg {
            col: col - 1,
            color,
        });
    }

    Row::parse(line, slots, colors)
        .map(Input::Guess)
        .map_err(|e| e.to_string())
}

/// Apply a guess or peg edit to the active row, then try to advance
///
/// Commands (`Quit`, `Save`, ...) leave the board untouched and report
/// `Pending`.
pub fn apply_input(board: &mut Board, input: &Input) -> TurnResult {
    let Some(row) = board.active_row() else {
        return TurnResult::Finished;
    };

    let placed = match input {
        Input::Guess(guess) => guess
            .slots()
            .iter()
            .enumerate()
            .map(|(col, slot)| write_slot(board, row, col, *slot))
            .fold(true, |ok, placed| ok && placed),
        Input::Peg { col, color } => write_slot(board, row, *col, *color),
        Input::Quit | Input::Save | Input::Board | Input::Help => false,
    };

    board.next_row_if_possible();

    if board.is_row_full(row) {
        TurnResult::Scored {
            row,
            feedback: board.test_row(row),
        }
    } else {
        TurnResult::Pending { placed }
    }
}

fn write_slot(board: &mut Board, row: usize, col: usize, slot: Option<Color>) -> bool {
    match slot {
        Some(color) => board.set_peg(row, col, color),
        None => board.clear_peg(row, col),
    }
}

/// Run the text-mode game until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input fails or the game cannot be saved.
pub fn run_play(mut board: Board, save_path: Option<&Path>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help(&board);
    print_board(&board, false);

    loop {
        if let outcome @ (GameOutcome::Won { .. } | GameOutcome::Lost) = board.outcome() {
            print_outcome(&board, outcome);
            if let Some(path) = save_path {
                save(&board, path)?;
            }
            return Ok(());
        }

        let prompt = match board.active_row() {
            Some(row) => format!("Row {} guess", row + 1),
            None => "Command".to_string(),
        };
        let Some(line) = get_user_input(&prompt)? else {
            // EOF
            return Ok(());
        };

        let input = match parse_input(&line, board.slots(), board.colors()) {
            Ok(input) => input,
            Err(message) => {
                println!("{}\n", format!("❌ {message}").red());
                continue;
            }
        };

        match input {
            Input::Quit => {
                if let Some(path) = save_path {
                    save(&board, path)?;
                }
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Save => match save_path {
                Some(path) => save(&board, path)?,
                None => println!("{}\n", "No save file given (use --save FILE)".yellow()),
            },
            Input::Board => print_board(&board, false),
            Input::Help => print_help(&board),
            Input::Guess(_) | Input::Peg { .. } => match apply_input(&mut board, &input) {
                TurnResult::Scored { row, feedback } => {
                    print_turn_feedback(&board, row, feedback);
                }
                TurnResult::Pending { placed } => {
                    if !placed {
                        println!("{}", "Some pegs could not be placed".yellow());
                    }
                    if let Some(row) = board.active_row() {
                        println!("  {} {}\n", format!("Row {}:", row + 1).bright_black(), board.rows()[row]);
                    }
                }
                TurnResult::Finished => {}
            },
        }
    }
}

fn save(board: &Board, path: &Path) -> Result<(), String> {
    save_board(path, board).map_err(|e| format!("Failed to write save file: {e}"))?;
    println!("{}\n", format!("💾 Saved to {}", path.display()).green());
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}
