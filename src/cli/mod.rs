//! Command-line interface definition and dispatch for tada.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler in the [`commands`] submodule.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_FALLBACK_COUNT, DEFAULT_LIST_LIMIT};
use crate::ranking::profile::DEFAULT_PROFILE;

/// Top-level CLI structure for tada.
///
/// Parsed from command-line arguments via [`clap::Parser`]. Contains a single
/// required subcommand that determines which action tada performs.
#[derive(Parser)]
#[command(
    name = "tada",
    about = "Free-model autopilot for OpenClaw -- manage free models from OpenRouter"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the tada CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap. Profile flags accept any name; unknown names rank under the
/// default profile.
#[derive(Subcommand)]
pub enum Commands {
    /// List available free models ranked by quality
    List {
        /// Number of models to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
        /// Force refresh from the API (ignore cache)
        #[arg(short, long)]
        refresh: bool,
        /// Use-case profile for ranking: coding, reasoning, general, vision
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: String,
    },
    /// Switch to a specific free model
    Switch {
        /// Model ID to switch to (partial matches are resolved)
        model: String,
        /// Add to fallbacks only, don't change the primary
        #[arg(short, long)]
        fallback_only: bool,
        /// Don't configure fallback models
        #[arg(long)]
        no_fallbacks: bool,
        /// Also set up the OpenRouter auth profile
        #[arg(long)]
        setup_auth: bool,
        /// Use-case profile for ranking: coding, reasoning, general, vision
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: String,
    },
    /// Auto-select the best free model
    Auto {
        /// Number of fallback models
        #[arg(short = 'c', long, default_value_t = DEFAULT_FALLBACK_COUNT)]
        fallback_count: usize,
        /// Add to fallbacks only, don't change the primary
        #[arg(short, long)]
        fallback_only: bool,
        /// Also set up the OpenRouter auth profile
        #[arg(long)]
        setup_auth: bool,
        /// Use-case profile for ranking: coding, reasoning, general, vision
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: String,
    },
    /// Show current configuration status
    Status,
    /// Refresh the model cache
    Refresh,
    /// Configure fallback models for rate-limit handling
    Fallbacks {
        /// Number of fallback models
        #[arg(short, long, default_value_t = DEFAULT_FALLBACK_COUNT)]
        count: usize,
        /// Use-case profile for ranking: coding, reasoning, general, vision
        #[arg(short, long, default_value = DEFAULT_PROFILE)]
        profile: String,
    },
    /// Show the classification rules and quality tiers
    Benchmarks,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            limit,
            refresh,
            profile,
        } => commands::list(limit, refresh, &profile).await,
        Commands::Switch {
            model,
            fallback_only,
            no_fallbacks,
            setup_auth,
            profile,
        } => commands::switch(&model, fallback_only, no_fallbacks, setup_auth, &profile).await,
        Commands::Auto {
            fallback_count,
            fallback_only,
            setup_auth,
            profile,
        } => commands::auto(fallback_count, fallback_only, setup_auth, &profile).await,
        Commands::Status => commands::status(),
        Commands::Refresh => commands::refresh().await,
        Commands::Fallbacks { count, profile } => commands::fallbacks(count, &profile).await,
        Commands::Benchmarks => commands::benchmarks(),
    }
}
