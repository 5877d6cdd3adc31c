use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use flashforge::cards::deck::Deck;
use flashforge::cards::keyword::LongestWordSelector;
use flashforge::cards::{Card, CardGenerator, SAMPLE_PARAGRAPH};
use flashforge::config::{Config, StopwordSource};
use flashforge::output::{markdown, terminal};

/// FlashForge: turn a paragraph into flashcards.
///
/// Splits text into sentences and blanks out the most salient word of each
/// one. Deterministic and offline: no models, no network.
#[derive(Parser)]
#[command(name = "flashforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Knobs shared by every command that generates cards.
#[derive(Args)]
struct GenerateArgs {
    /// Max number of cards (overrides FLASHFORGE_MAX_CARDS, default 50)
    #[arg(long)]
    max_cards: Option<usize>,

    /// Skip sentences shorter than this many characters (default 10)
    #[arg(long)]
    min_length: Option<usize>,

    /// Stopword list: "builtin", "english", or a path to a word list
    #[arg(long)]
    stopwords: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate flashcards from a file or stdin
    Generate {
        /// Read text from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: GenerateArgs,

        /// Print the cards as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also write a Markdown study sheet to this path
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// Show answers instead of questions
        #[arg(long)]
        reveal: bool,
    },

    /// Generate flashcards from the built-in sample paragraph
    Sample {
        #[command(flatten)]
        options: GenerateArgs,

        /// Show answers instead of questions
        #[arg(long)]
        reveal: bool,
    },

    /// Flip through cards interactively
    Study {
        /// Read text from this file (default: the sample paragraph)
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: GenerateArgs,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("flashforge=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            file,
            options,
            json,
            markdown: markdown_path,
            reveal,
        } => {
            let text = read_input(file.as_deref())?;
            let cards = generate(&text, &options)?;

            if cards.is_empty() {
                terminal::display_empty_hint();
                std::process::exit(1);
            }

            if let Some(path) = markdown_path {
                markdown::write_deck(&path, &cards)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                show_cards(cards, reveal);
            }
        }

        Commands::Sample { options, reveal } => {
            println!("{}", SAMPLE_PARAGRAPH.dimmed());
            let cards = generate(SAMPLE_PARAGRAPH, &options)?;
            show_cards(cards, reveal);
        }

        Commands::Study { file, options } => {
            let text = match file {
                Some(path) => read_input(Some(&path))?,
                None => SAMPLE_PARAGRAPH.to_string(),
            };
            let cards = generate(&text, &options)?;
            if cards.is_empty() {
                terminal::display_empty_hint();
                std::process::exit(1);
            }
            study(Deck::new(cards))?;
        }
    }

    Ok(())
}

/// Resolve config + CLI overrides and run the pipeline.
fn generate(text: &str, args: &GenerateArgs) -> Result<Vec<Card>> {
    let mut config = Config::load()?;
    if let Some(max_cards) = args.max_cards {
        config.set_max_cards(max_cards)?;
    }
    if let Some(min_length) = args.min_length {
        config.min_sentence_len = min_length;
    }
    if let Some(raw) = &args.stopwords {
        config.stopwords = StopwordSource::parse(raw);
    }

    let stopwords = config.stopwords()?;
    info!(
        max_cards = config.max_cards,
        min_sentence_len = config.min_sentence_len,
        stopwords = stopwords.len(),
        "Generating flashcards"
    );

    let generator = CardGenerator::new(
        LongestWordSelector::new(stopwords),
        config.generate_options(),
    );
    Ok(generator.generate(text))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn show_cards(cards: Vec<Card>, reveal: bool) {
    terminal::display_summary(&cards, 60);
    let mut deck = Deck::new(cards);
    if reveal {
        deck.reveal_all();
    }
    terminal::display_cards(&deck.view());
}

/// Line-driven study loop over stdin.
fn study(mut deck: Deck) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        terminal::display_cards(&deck.view());
        terminal::display_progress(deck.revealed_count(), deck.len());
        print!(
            "{} ",
            "[number] flip  [a] reveal all  [h] hide all  [c] clear  [q] quit >".dimmed()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match line.trim() {
            "q" | "quit" => break,
            "a" => deck.reveal_all(),
            "h" => deck.hide_all(),
            "c" => {
                print!("Clear all flashcards? [y/N] ");
                io::stdout().flush()?;
                let confirmed = match lines.next() {
                    Some(answer) => answer?.trim().eq_ignore_ascii_case("y"),
                    None => false,
                };
                if confirmed {
                    deck.clear();
                    println!("Cleared.");
                    break;
                }
            }
            "" => {}
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = deck.toggle(n - 1) {
                        warn!("{e}");
                    }
                }
                _ => println!("{}", format!("Unknown command: {other}").yellow()),
            },
        }
    }

    Ok(())
}
