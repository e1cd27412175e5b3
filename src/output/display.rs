//! Display functions for command results

use super::formatters::{colored_pattern, create_progress_bar, spaced_pattern, status_label};
use crate::commands::{BatchStatistics, SolveReport};
use crate::puzzles::{PuzzleResult, RecordIssue};
use colored::Colorize;

/// Print the rejected lines of a puzzle file
pub fn print_record_issues(issues: &[RecordIssue]) {
    if issues.is_empty() {
        return;
    }

    println!("\n{}", "Skipped input lines:".yellow().bold());
    for issue in issues {
        println!("  {}", issue.to_string().yellow());
    }
}

/// Print one line per puzzle, or a block per puzzle with `details`
pub fn print_batch_results(results: &[PuzzleResult], details: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        let outcome = &result.outcome;
        if details {
            println!("\nPuzzle #{}", result.game_id.bright_yellow());
            println!("  Final pattern: {}", colored_pattern(&outcome.final_pattern));
            println!("  Status:        {}", status_label(outcome.found()));
            println!("  Attempts:      {}", outcome.attempt_count());
            if !outcome.steps.is_empty() {
                println!("  Sequence:      {}", result.attempt_sequence());
            }
            if let Some(word) = &outcome.word_guess {
                println!("  Word guess:    {}", word.bright_green());
            }
        } else {
            println!(
                "  {:>8}  {:<4}  {:>3} attempts  {}",
                result.game_id,
                status_label(outcome.found()),
                outcome.attempt_count(),
                spaced_pattern(&outcome.final_pattern)
            );
        }
    }
}

/// Print batch statistics
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", stats.total);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.success_rate()).green()
    );
    if stats.failed > 0 {
        println!("   Failed:           {}", format!("{}", stats.failed).red());
    }
    println!(
        "   Success rate:     [{}]",
        create_progress_bar(stats.success_rate(), 100.0, 30).green()
    );
    println!("   Total attempts:   {}", stats.total_attempts);
    println!(
        "   Average attempts: {}",
        format!("{:.2}", stats.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", stats.elapsed.as_secs_f64());
}

/// Print the guess trace of a single solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let outcome = &report.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  from  {}",
        report.target.text().bright_yellow().bold(),
        colored_pattern(&report.initial)
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\n  Dictionary candidates: {}", report.initial_candidates);
    }

    for (i, step) in outcome.steps.iter().enumerate() {
        let letter = if step.is_hit() {
            step.letter.to_string().green().bold()
        } else {
            step.letter.to_string().red()
        };
        println!(
            "\nGuess {}: {}  {}",
            i + 1,
            letter,
            colored_pattern(&step.pattern_after)
        );

        if verbose {
            println!("  Source:     {}", step.source);
            println!("  Candidates: {}", step.candidates);
            println!("  Revealed:   {}", step.revealed);
        }
    }

    if let Some(word) = &outcome.word_guess {
        println!("\nWord check: {}", word.bright_green().bold());
    }

    println!();
    if outcome.found() {
        println!(
            "{}",
            format!("✅ Solved with {} letter guesses!", outcome.attempt_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved ({}) after {} letter guesses",
                outcome.status,
                outcome.attempt_count()
            )
            .red()
            .bold()
        );
    }
}
