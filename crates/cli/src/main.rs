// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! timeago - localized relative-time CLI

mod commands;
mod config;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timeago_core::PhraseKey;

use crate::config::{Config, Layer, Settings};

#[derive(Parser)]
#[command(
    name = "timeago",
    version,
    about = "Render timestamps as localized relative time"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Locale code (default: en)
    #[arg(short = 'l', long, global = true)]
    locale: Option<String>,

    /// Phrase table file or directory merged over the built-in locales
    #[arg(short = 'p', long, value_name = "PATH", global = true)]
    phrases: Option<PathBuf>,

    /// Override one phrase template, e.g. --set seconds="just now"
    #[arg(
        long = "set",
        value_name = "KEY=TEMPLATE",
        value_parser = parse_override,
        global = true
    )]
    overrides: Vec<(PhraseKey, String)>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// How long ago a timestamp was
    Ago {
        /// Timestamp in milliseconds since the UNIX epoch
        #[arg(allow_negative_numbers = true)]
        epoch_ms: i64,
    },
    /// How long until a timestamp
    Until {
        /// Timestamp in milliseconds since the UNIX epoch
        #[arg(allow_negative_numbers = true)]
        epoch_ms: i64,
    },
    /// Format a raw millisecond distance
    Delta {
        /// Distance in milliseconds; positive is in the past
        #[arg(allow_negative_numbers = true)]
        millis: i64,
        /// Render negative distances as "from now"
        #[arg(long)]
        future: bool,
    },
    /// List available locales
    Locales,
    /// Show the resolved phrase templates for the locale
    Show,
}

/// Parse a `KEY=TEMPLATE` phrase override.
fn parse_override(s: &str) -> Result<(PhraseKey, String), String> {
    let (key, template) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=TEMPLATE, got '{}'", s))?;
    let key = key.trim().parse::<PhraseKey>().map_err(|e| e.to_string())?;
    Ok((key, template.to_string()))
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(env::LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided: print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let config = match env::config_path() {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let settings = Settings::resolve(&[
        Layer {
            locale: cli.locale,
            phrases: cli.phrases,
        },
        Layer {
            locale: env::locale(),
            phrases: env::phrases(),
        },
        config.into(),
    ]);
    tracing::debug!(locale = %settings.locale, phrases = ?settings.phrases, "resolved settings");

    let ctx = commands::Context {
        settings,
        overrides: cli.overrides,
        now_ms: env::now_ms()?,
        format: cli.output,
    };

    let out = match command {
        Commands::Ago { epoch_ms } => commands::relative::ago(&ctx, epoch_ms)?,
        Commands::Until { epoch_ms } => commands::relative::until(&ctx, epoch_ms)?,
        Commands::Delta { millis, future } => commands::relative::delta(&ctx, millis, future)?,
        Commands::Locales => commands::phrases::locales(&ctx)?,
        Commands::Show => commands::phrases::show(&ctx)?,
    };
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
fn cli_command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
