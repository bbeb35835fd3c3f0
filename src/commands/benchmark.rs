//! Benchmark command
//!
//! Runs self-play over many targets and collects the guess-count
//! distribution.

use super::progress_style;
use super::solve::solve_word;
use crate::config::Config;
use crate::core::Word;
use crate::error::Result;
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets not found within the attempt budget
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved targets by number of guesses taken
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct targets at random
#[must_use]
pub fn sample_targets<'a, R: Rng + ?Sized>(
    vocabulary: &'a Vocabulary,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    let mut targets: Vec<&Word> = vocabulary.words().choose_multiple(rng, count).collect();
    targets.sort_unstable();
    targets
}

/// Solve every target in turn
///
/// Averages are over solved targets only; failures are listed separately.
///
/// # Errors
///
/// Returns `Error::InvalidGuess` if a target is not in the vocabulary.
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    targets: &[&Word],
    config: &Config,
) -> Result<BenchmarkResult> {
    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(progress_style());

    let start = Instant::now();
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        bar.set_message(target.text().to_string());
        let result = solve_word(vocabulary, target.text(), config)?;
        bar.inc(1);

        if !result.success {
            failed.push(result.target);
            continue;
        }

        let guesses = result.guesses.len();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }
    bar.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "slate", "trace", "plate", "crate", "grate", "irate", "stare", "share", "shard",
        "sheen", "geese", "soare", "adieu",
    ];

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(5, WORDS).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let v = vocab();
        let targets: Vec<&Word> = v.words().iter().take(6).collect();
        let result = run_benchmark(&v, &targets, &Config::default()).unwrap();

        assert_eq!(result.total_words, 6);
        assert_eq!(result.solved + result.failed.len(), 6);
        assert!(result.total_guesses > 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let v = vocab();
        let targets: Vec<&Word> = v.words().iter().collect();
        let result = run_benchmark(&v, &targets, &Config::default()).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let v = vocab();
        let result = run_benchmark(&v, &[], &Config::default()).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn tight_budget_reports_failures() {
        let v = vocab();
        let targets: Vec<&Word> = v.words().iter().collect();
        let config = Config {
            max_attempts: 1,
            ..Config::default()
        };
        let result = run_benchmark(&v, &targets, &config).unwrap();

        // Only the opening itself can be solved in one guess
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed.len(), WORDS.len() - 1);
    }

    #[test]
    fn sampled_targets_are_distinct() {
        let v = vocab();
        let mut rng = StdRng::seed_from_u64(3);
        let targets = sample_targets(&v, 5, &mut rng);
        assert_eq!(targets.len(), 5);
        assert!(targets.windows(2).all(|w| w[0] < w[1]));

        let all = sample_targets(&v, 100, &mut rng);
        assert_eq!(all.len(), v.len());
    }
}
