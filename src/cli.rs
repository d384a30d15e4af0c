//! Command-line interface definition and dispatch for youyaku.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler; the summarization pipeline itself lives in
//! [`crate::summarize`].

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::{config, extract, normalize, output, stats, summarize, tokens};

/// Top-level CLI structure for youyaku.
#[derive(Parser)]
#[command(name = "youyaku", about = "Summarize long documents with a remote LLM")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the youyaku CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a document
    Summarize {
        /// Path to a .txt, .md, .docx, or .pdf document
        file: Option<PathBuf>,
        /// Inline text to summarize instead of a file
        #[arg(long)]
        text: Option<String>,
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// Chunking strategy: sentence or window (overrides config)
        #[arg(long)]
        strategy: Option<String>,
        /// Maximum tokens per chunk (overrides config)
        #[arg(long)]
        max_tokens: Option<usize>,
        /// Token overlap between consecutive chunks (overrides config)
        #[arg(long)]
        overlap: Option<usize>,
        /// Print the word/sentence/token statistics line after the summary
        #[arg(long)]
        show_stats: bool,
    },
    /// Show word, sentence, and token statistics for a document
    Stats {
        /// Path to a .txt, .md, .docx, or .pdf document
        file: Option<PathBuf>,
        /// Inline text to analyze instead of a file
        #[arg(long)]
        text: Option<String>,
        /// Model whose tokenizer is used for the token count
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summarize {
            file,
            text,
            model,
            strategy,
            max_tokens,
            overlap,
            show_stats,
        } => {
            let mut config = config::Config::load()?;
            if let Some(model) = model {
                config.model = model;
            }
            if strategy.is_some() {
                config.chunking.strategy = strategy;
            }
            if max_tokens.is_some() {
                config.chunking.max_tokens = max_tokens;
            }
            if overlap.is_some() {
                config.chunking.overlap = overlap;
            }

            let input = read_input(file.as_deref(), text)?;
            output::render_header(&config.model);

            let summary = summarize::summarize_text(&input, &config).await?;
            output::render_summary(&summary);

            if show_stats {
                let tokenizer = tokens::Tokenizer::for_model(&config.model)?;
                let normalized = normalize::normalize(&input);
                output::render_stats(&stats::TextStats::of(&normalized, &tokenizer));
            }
            Ok(())
        }
        Commands::Stats { file, text, model } => {
            let config = config::Config::load()?;
            let model = model.unwrap_or(config.model);
            let input = read_input(file.as_deref(), text)?;
            let normalized = normalize::normalize(&input);
            let tokenizer = tokens::Tokenizer::for_model(&model)?;
            println!("{}", stats::TextStats::of(&normalized, &tokenizer));
            Ok(())
        }
        Commands::Config { action } => {
            let config = config::Config::load()?;
            match action {
                ConfigAction::Show => {
                    let path = config::Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{toml_str}");
                }
            }
            Ok(())
        }
    }
}

/// Read input text from a file, inline text, or stdin, in that order.
fn read_input(file: Option<&Path>, text: Option<String>) -> Result<String> {
    if let Some(path) = file {
        return Ok(extract::extract_document(path)?);
    }
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}
