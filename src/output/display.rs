//! Display functions for command results

use super::formatters::{create_progress_bar, guesses_label, history_row};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a word
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_solve_result<W: Write>(
    out: &mut W,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(
            out,
            "\nTurn {}: {}",
            i + 1,
            history_row(&step.word, step.pattern)
        )?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
            if let Some(expected) = step.expected_size {
                writeln!(out, "  Expected:   {expected:.2} candidates")?;
            }
        }
    }

    writeln!(out)?;
    let turns = result.guesses.len();
    if result.success {
        writeln!(
            out,
            "{}",
            format!("✓ Solved in {turns} {}!", guesses_label(turns)).green().bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("✗ Failed to solve in {turns} {}", guesses_label(turns)).red().bold()
        )
    }
}

/// Print the result of word analysis
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_analysis_result<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(total - result.expected_size, total, 30);

    writeln!(out, "\nAgainst {} candidates:", result.total_candidates)?;
    writeln!(
        out,
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} remain", result.expected_size).bright_yellow()
    )?;
    writeln!(out, "   Worst case:  {} remain", result.worst_case)?;
    writeln!(
        out,
        "   Patterns:    {} reachable, {} leave candidates",
        result.reachable_patterns, result.occupied_patterns
    )?;

    if !result.largest.is_empty() {
        writeln!(out, "\nLargest buckets:")?;
        for (pattern, size) in &result.largest {
            writeln!(out, "   {}  {size:>5}", pattern.to_emoji())?;
        }
    }
    Ok(())
}

/// Print the result of a benchmark
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_benchmark_result<W: Write>(
    out: &mut W,
    result: &BenchmarkResult,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n{}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words tested:     {}", result.total_words)?;
    writeln!(out, "   Solved:           {}", result.solved)?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    )?;
    writeln!(out, "   Best case:        {}", result.min_guesses.to_string().green())?;
    writeln!(out, "   Worst case:       {}", result.max_guesses.to_string().yellow())?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Words/second:     {:.1}", result.words_per_second)?;

    if result.total_words > 0 {
        writeln!(out, "\n{}", "Distribution:".bright_cyan().bold())?;
        for guess_count in 1..=max_attempts {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            writeln!(out, "   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green())?;
        }
    }

    if !result.failed.is_empty() {
        writeln!(
            out,
            "\n{} {}",
            "Unsolved:".red().bold(),
            result.failed.join(", ")
        )?;
    }
    Ok(())
}
