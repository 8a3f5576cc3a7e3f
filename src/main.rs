//! Codenames spymaster CLI.
//!
//! - `codenames [play]`: load the data set and play interactively, with the
//!   computer giving the clues
//! - `codenames convert`: turn a GloVe text dump into a data set directory

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn, Level};

use codenames::core::DEFAULT_THRESHOLD;
use codenames::embedding::convert_glove;
use codenames::{
    load_dataset, ClueLog, DataConfig, Dataset, Error, Game, GameConfig, GameRng, GameSummary,
    TerminalReader,
};

#[derive(Parser)]
#[command(name = "codenames")]
#[command(version, about = "A word-embedding spymaster for Codenames", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play with the computer as spymaster (default)
    Play(PlayArgs),

    /// Convert a GloVe text dump into a data set directory
    Convert(ConvertArgs),
}

#[derive(Args, Clone, Debug)]
struct PlayArgs {
    /// Directory holding words, vectors.bin, stopwords.txt and wordlist
    #[arg(long, default_value = "dataset")]
    data_dir: PathBuf,

    /// Keep only the most frequent N vocabulary words
    #[arg(long)]
    limit_vocab: Option<usize>,

    /// Seed for dealing boards
    #[arg(long)]
    seed: Option<u64>,

    /// Similarity threshold for clue candidates
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,

    /// Board rows
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Number of agent words
    #[arg(long, default_value_t = 8)]
    agents: usize,

    /// File the given clues are appended to
    #[arg(long, default_value = "log_file")]
    log_file: PathBuf,
}

#[derive(Args, Clone, Debug)]
struct ConvertArgs {
    /// GloVe text file (word followed by its vector on each line)
    #[arg(long)]
    input: PathBuf,

    /// Output data set directory
    #[arg(long, default_value = "dataset")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play(args)) => play(args),
        Some(Commands::Convert(args)) => convert(args),
        None => play(cli.play),
    }
}

fn convert(args: ConvertArgs) -> Result<()> {
    let stats = convert_glove(&args.input, &args.out_dir)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    println!(
        "Wrote {} of {} words ({} dimensions) to {}",
        stats.kept,
        stats.lines,
        stats.dim,
        args.out_dir.display()
    );
    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        agents: args.agents,
        threshold: args.threshold,
        seed: args.seed,
        ..GameConfig::default()
    };
    config.validate()?;

    let data = DataConfig::new(&args.data_dir).with_limit_vocab(args.limit_vocab);
    let dataset = load_dataset(&data).context("failed to load data set")?;

    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "dealing seed");

    let mut reader = TerminalReader::stdio();
    loop {
        let mode = match reader.ask("\nWill you be agent or spymaster?: ") {
            Ok(mode) => mode,
            Err(Error::Interrupted) => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match mode.as_str() {
            "spymaster" => println!("Not implemented yet."),
            "agent" => {
                match play_game(&dataset, &config, &mut rng, &mut reader, &args.log_file) {
                    Ok(summary) => println!(
                        "All agents found in {} rounds ({} wrong guesses).",
                        summary.rounds, summary.wrong_picks
                    ),
                    Err(Error::Interrupted) => {}
                    Err(e) => warn!("game ended: {}", e),
                }
            }
            _ => {}
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    dataset: &Dataset,
    config: &GameConfig,
    rng: &mut GameRng,
    reader: &mut TerminalReader<R, W>,
    log_file: &Path,
) -> codenames::Result<GameSummary> {
    println!("Thinking...");
    println!("\n**While playing, hit enter to skip**");

    let mut game = Game::deal(&dataset.space, config.clone(), &dataset.codenames, rng)?;
    let mut log = ClueLog::open(log_file)?;
    game.play(reader, &mut log)
}
