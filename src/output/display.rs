//! Display functions for boards and command results

use super::formatters::{feedback_marks, paint_peg, paint_row};
use crate::commands::InspectReport;
use crate::core::{Board, CLEAR_CHAR, Color, EMPTY_CHAR, Feedback, GameOutcome, RowState};
use colored::Colorize;

/// Print every guess row with its feedback
pub fn print_board(board: &Board, reveal: bool) {
    println!("{}", "─".repeat(40).cyan());
    for (i, row) in board.rows().iter().enumerate() {
        let marker = match board.row_state(i) {
            Some(RowState::Active) => "▶".bright_yellow(),
            _ => " ".normal(),
        };
        let feedback = if board.is_row_full(i) {
            feedback_marks(board.test_row(i), board.slots())
        } else {
            String::new()
        };
        println!("{marker} {:>2}  {}  {}", i + 1, paint_row(row), feedback);
    }
    if reveal {
        println!("{}", "─".repeat(40).cyan());
        println!("  code {}", paint_row(board.reveal_solution()));
    }
    println!("{}\n", "─".repeat(40).cyan());
}

/// Print the colors and controls available on `board`
pub fn print_help(board: &Board) {
    println!(
        "Break the {}-peg code in {} guesses.",
        board.slots(),
        board.max_rows()
    );
    print_palette(board.colors());
    println!("Enter a guess such as {} ('{EMPTY_CHAR}' leaves a slot empty),", "ragw".bold());
    println!("or edit one peg with '<column> <code>' ('{CLEAR_CHAR}' clears it).");
    println!("Feedback: ● right color and place, ○ right color only.");
    println!("Commands: 'board', 'save', 'help', 'quit'\n");
}

/// Print the first `colors` palette entries
pub fn print_palette(colors: usize) {
    let entries: Vec<String> = Color::ALL
        .iter()
        .take(colors)
        .map(|color| format!("{} {}", paint_peg(*color), color.name()))
        .collect();
    println!("Colors: {}", entries.join("  "));
}

/// Print the feedback for a freshly completed row
pub fn print_turn_feedback(board: &Board, row: usize, feedback: Feedback) {
    if let Some(pegs) = board.row(row) {
        println!(
            "\n  {} {}  {}  ({feedback})\n",
            format!("Row {}:", row + 1).bright_black(),
            paint_row(pegs),
            feedback_marks(feedback, board.slots()).bright_white(),
        );
    }
}

/// Print the end-of-game banner
pub fn print_outcome(board: &Board, outcome: GameOutcome) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match outcome {
        GameOutcome::Won { row } => {
            let guesses = row + 1;
            println!("{}", "    🎉  C O D E   B R O K E N !  🎉".bright_green().bold());
            println!(
                "\n  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameOutcome::Lost => {
            println!("{}", "    Out of guesses".red().bold());
        }
        GameOutcome::InProgress => {}
    }
    println!("  The code was {}", paint_row(board.reveal_solution()));
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the result of scoring two codes
pub fn print_score(feedback: Feedback, slots: usize) {
    println!(
        "{}  {}",
        feedback_marks(feedback, slots).bright_white(),
        feedback.to_string().bright_yellow().bold()
    );
    if feedback.is_win(slots) {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print an inspection report
pub fn print_inspect_report(report: &InspectReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} slots, {} colors, {} rows",
        "SAVED GAME:".bright_cyan().bold(),
        report.slots,
        report.colors,
        report.max_rows
    );
    println!("{}", "═".repeat(40).cyan());

    for row in &report.rows {
        let state = match row.state {
            RowState::Completed => "done".green(),
            RowState::Active => "active".bright_yellow(),
            RowState::NotReached => "-".bright_black(),
        };
        let feedback = row
            .feedback
            .map(|f| format!("{}  ({f})", feedback_marks(f, report.slots)))
            .unwrap_or_default();
        println!(" {:>2}  {}  {:<8} {}", row.index + 1, row.pegs, state, feedback);
    }

    let outcome = match report.outcome {
        GameOutcome::InProgress => "In progress".normal(),
        GameOutcome::Won { row } => format!("Won on row {}", row + 1).green().bold(),
        GameOutcome::Lost => "Lost".red().bold(),
    };
    println!("\n Status: {outcome}");
    if let Some(solution) = &report.solution {
        println!(" Code:   {}", solution.bright_yellow().bold());
    }
    println!();
}
