use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use tagsync_vault::{SyncStats, VaultSyncer};

mod config;

use config::{default_config_path, load_config, SyncConfig};

#[derive(Parser)]
#[command(name = "tagsync")]
#[command(about = "Keep markdown tags in sync with frontmatter metadata", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for reports)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile every document in a vault and rewrite the changed ones
    Sync {
        /// Vault root directory
        vault: PathBuf,

        /// Rule configuration (default: <vault>/.tagsync/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Compute everything, write nothing
        #[arg(long)]
        dry_run: bool,

        /// Print stats as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Dry-run that fails (exit code 1) when any document would change
    Check {
        /// Vault root directory
        vault: PathBuf,

        /// Rule configuration (default: <vault>/.tagsync/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the parsed rule configuration as JSON
    Rules {
        /// Vault root directory
        vault: PathBuf,

        /// Rule configuration (default: <vault>/.tagsync/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Sync {
            vault,
            config,
            dry_run,
            json,
        } => {
            let config = load(&vault, config)?;
            let syncer =
                VaultSyncer::new(&vault, config.rules, config.gating)?.dry_run(dry_run);
            let stats = syncer.sync()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_summary(&stats, dry_run);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { vault, config } => {
            let config = load(&vault, config)?;
            let syncer = VaultSyncer::new(&vault, config.rules, config.gating)?.dry_run(true);
            let stats = syncer.sync()?;
            print_summary(&stats, true);
            if stats.is_noop() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Rules { vault, config } => {
            let config = load(&vault, config)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(vault: &std::path::Path, config: Option<PathBuf>) -> Result<SyncConfig> {
    let path = config.unwrap_or_else(|| default_config_path(vault));
    load_config(&path)
}

fn print_summary(stats: &SyncStats, dry_run: bool) {
    let changed_label = if dry_run { "Would change:" } else { "Changed:" };
    println!("{:<16}{}", "Scanned:", stats.scanned);
    println!("{changed_label:<16}{}", stats.changed);
    println!("{:<16}{}", "Unchanged:", stats.unchanged);
    println!("{:<16}{}", "Skipped:", stats.skipped);
    println!("{:<16}{}", "No frontmatter:", stats.no_frontmatter);
    if !stats.errors.is_empty() {
        println!("{:<16}{}", "Errors:", stats.errors.len());
        for error in &stats.errors {
            println!("  - {error}");
        }
    }
    println!("{:<16}{}ms", "Time:", stats.time_ms);
}

fn init_logger(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.target(env_logger::Target::Stderr).init();
}
