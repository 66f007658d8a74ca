//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, result_to_emoji};
use crate::commands::{EvaluationResult, StatsReport};
use crate::controller::Controller;
use crate::game::{GameSession, GameStatus, RankLabel};
use colored::Colorize;

/// Print the result of evaluating one guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.result));
    println!("  {}", result_to_emoji(&result.result));
    println!(
        "\n  Correct: {}   Present: {}",
        result.correct().to_string().green().bold(),
        result.present().to_string().yellow().bold()
    );
}

/// Print persisted statistics
pub fn print_stats(report: &StatsReport) {
    let stats = &report.stats;
    let percentage = stats.win_percentage().unwrap_or(0.0);

    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!(
        "   Win %:           [{}] {}",
        create_progress_bar(percentage, 100.0, 20).green(),
        report.win_percentage.bright_yellow()
    );
    println!("   Current Streak:  {}", stats.current_streak);
    println!("   Max Streak:      {}", stats.max_streak);
}

/// Print every attempt so far, plus empty rows for the ones left
pub fn print_board(session: &GameSession) {
    println!();
    for attempt in session.history() {
        println!("  {}", colored_row(attempt.word().text(), attempt.result()));
    }
    let empty_row = " _ ".repeat(session.word_length());
    for _ in 0..session.attempts_remaining() {
        println!("  {}", empty_row.bright_black());
    }
    println!();
}

/// Print the end-of-game summary
pub fn print_end_screen(controller: &Controller<'_>) {
    let session = controller.session();

    match session.status() {
        GameStatus::Won => {
            let label = session.rank_label().map_or("Solved", RankLabel::as_str);
            println!("  {}", format!("🎉 {label}!").bright_green().bold());
        }
        GameStatus::Lost => println!(
            "  {}",
            session.target().text().to_uppercase().bright_red().bold()
        ),
        GameStatus::InProgress => return,
    }

    println!(
        "\n  {} {}",
        "Definition:".bright_cyan().bold(),
        controller.definition()
    );

    print_stats(&StatsReport::new(*controller.stats()));

    if let Some(share) = controller.share_text() {
        println!("\n{share}");
    }
}
