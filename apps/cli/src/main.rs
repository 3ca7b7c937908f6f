mod commands;
mod config_manager;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, error};
use anyhow::Result;

use crate::commands::*;
use crate::config_manager::ConfigManager;
use crate::error::{display_error_with_help, CliError};

#[derive(Parser)]
#[command(name = "samurai")]
#[command(about = "Japanese character-set normalization and text transposition tools")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    output: OutputFormat,

    /// Input text (read from stdin when omitted)
    #[arg(short, long, global = true)]
    text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// NFKC-normalize letters, digits and half-width katakana runs
    Normalize,

    /// NFKC-normalize letters and digits only
    Alnum,

    /// Replace platform-dependent characters with safe equivalents
    SafeString,

    /// Replace vendor-incompatible characters with a geta mark (〓)
    Getalize,

    /// Convert every character to a hexadecimal numeric character reference
    Ncr,

    /// Join lines with commas
    LinesToCommas,

    /// Split comma-separated values onto lines
    CommasToLines,

    /// Split tab-separated values onto lines
    TabsToLines,

    /// Join lines with tabs
    LinesToTabs,

    /// Keep lines that occur more than once
    Overlap,

    /// Drop repeated lines, keeping the first occurrence
    Uniq,

    /// Build an HTML table from tab-separated input
    TsvToTable,

    /// Wrap the input in an anchor tag
    Anchor {
        /// Link target
        #[arg(short, long)]
        url: String,
    },

    /// Replace a literal string
    Replace {
        /// String to search for
        #[arg(short, long)]
        find: String,

        /// Replacement string
        #[arg(short, long)]
        with: String,
    },

    /// List characters of each highlighted class
    Classify,

    /// Manage highlight settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective settings
    Show,

    /// Write default settings
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    debug!("Samurai CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = run(cli);

    match result {
        Ok(_) => {
            debug!("Command completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => {
                    display_error_with_help(cli_error);
                    std::process::exit(cli_error.error_code());
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let text = cli.text;
    let output = cli.output;
    let config = cli.config;
    // 設定を読むコマンドだけが設定ファイルの場所を解決する
    let config_manager = || ConfigManager::new(config.clone());

    match cli.command {
        Commands::Normalize => text_command(TextAction::Normalize, text, output),
        Commands::Alnum => text_command(TextAction::Alnum, text, output),
        Commands::SafeString => text_command(TextAction::SafeString, text, output),
        Commands::Getalize => text_command(TextAction::Getalize, text, output),
        Commands::Ncr => text_command(TextAction::Ncr, text, output),
        Commands::LinesToCommas => text_command(TextAction::LinesToCommas, text, output),
        Commands::CommasToLines => text_command(TextAction::CommasToLines, text, output),
        Commands::TabsToLines => text_command(TextAction::TabsToLines, text, output),
        Commands::LinesToTabs => text_command(TextAction::LinesToTabs, text, output),
        Commands::Overlap => text_command(TextAction::Overlap, text, output),
        Commands::Uniq => text_command(TextAction::Uniq, text, output),
        Commands::TsvToTable => text_command(TextAction::TsvToTable, text, output),
        Commands::Anchor { url } => text_command(TextAction::Anchor { url }, text, output),
        Commands::Replace { find, with } => {
            text_command(TextAction::Replace { find, with }, text, output)
        }
        Commands::Classify => classify_command(text, output, &config_manager()?),
        Commands::Config { action } => config_command(action, &config_manager()?),
    }
}

/// Default filter covering this binary and the library crates it drives.
fn default_log_directive(level: tracing::Level) -> String {
    [
        env!("CARGO_CRATE_NAME"),
        "samurai_editor",
        "samurai_charset",
        "samurai_transpose",
    ]
    .iter()
    .map(|target| format!("{}={}", target, level))
    .collect::<Vec<_>>()
    .join(",")
}

fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // 標準出力は変換結果専用なのでログは標準エラーへ
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(default_log_directive(log_level))
                })
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
