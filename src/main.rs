//! Word Deduction - CLI
//!
//! Line-based word game plus a solver that suggests guesses by expected
//! remaining candidates.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use wordle_deduction::{
    commands::{
        analyze_word, benchmark::sample_targets, run_assist, run_benchmark, run_play, solve_word,
    },
    config::Config,
    game::Game,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::Solver,
    wordlists::{DEFAULT_WORD_LEN, Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_deduction",
    about = "Word-guessing game and constraint solver ranking guesses by expected remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file, one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "vocabulary/words.txt"
    )]
    vocab: PathBuf,

    /// Letters per word (at most 12)
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LEN)]
    length: usize,

    /// Suggestions shown per turn
    #[arg(short = 'k', long, global = true, default_value_t = 10)]
    top: usize,

    /// Guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = 6)]
    attempts: usize,

    /// Worker threads for ranking (default: one per core)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Time limit for one ranking pass, in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a hidden word (default)
    Play {
        /// Use this target instead of a random one
        #[arg(long)]
        target: Option<String>,
    },

    /// Interactive solver: enter guesses and feedback, get suggestions
    Assist,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and expected sizes per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play over many random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let config = Config {
            word_len: self.length,
            top_k: self.top,
            max_attempts: self.attempts,
            threads: self.threads,
            rank_timeout: self.timeout_ms.map(Duration::from_millis),
            ..Config::default()
        };
        config.validate().context("invalid options")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    let vocabulary = load_from_file(&cli.vocab, config.word_len)
        .with_context(|| format!("failed to load vocabulary from {}", cli.vocab.display()))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("failed to build the ranking thread pool")?;
            pool.install(|| run_command(command, &vocabulary, &config))
        }
        None => run_command(command, &vocabulary, &config),
    }
}

fn run_command(command: Commands, vocabulary: &Vocabulary, config: &Config) -> Result<()> {
    match command {
        Commands::Play { target } => run_play_command(target.as_deref(), vocabulary, config),
        Commands::Assist => run_assist_command(vocabulary, config),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, vocabulary, config),
        Commands::Analyze { word } => run_analyze_command(&word, vocabulary),
        Commands::Benchmark { count } => run_benchmark_command(count, vocabulary, config),
    }
}

fn run_play_command(target: Option<&str>, vocabulary: &Vocabulary, config: &Config) -> Result<()> {
    let mut game = match target {
        Some(word) => Game::with_target(vocabulary, word, config.max_attempts)?,
        None => Game::random(vocabulary, config.max_attempts, &mut rand::rng())
            .ok_or_else(|| anyhow!("vocabulary is empty"))?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, &mut stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_assist_command(vocabulary: &Vocabulary, config: &Config) -> Result<()> {
    let mut solver = Solver::new(vocabulary).with_openings(&config.openings);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_assist(&mut solver, config, &mut stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    vocabulary: &Vocabulary,
    config: &Config,
) -> Result<()> {
    let result = solve_word(vocabulary, word, config)?;

    let mut stdout = io::stdout().lock();
    print_solve_result(&mut stdout, &result, verbose)?;
    stdout.flush()?;
    Ok(())
}

fn run_analyze_command(word: &str, vocabulary: &Vocabulary) -> Result<()> {
    let result = analyze_word(vocabulary, word)?;

    let mut stdout = io::stdout().lock();
    print_analysis_result(&mut stdout, &result)?;
    Ok(())
}

fn run_benchmark_command(count: usize, vocabulary: &Vocabulary, config: &Config) -> Result<()> {
    let targets = sample_targets(vocabulary, count, &mut rand::rng());
    println!("Running benchmark on {} random words...", targets.len());

    let result = run_benchmark(vocabulary, &targets, config)?;

    let mut stdout = io::stdout().lock();
    print_benchmark_result(&mut stdout, &result, config.max_attempts)?;
    Ok(())
}
