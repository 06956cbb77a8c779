//! Command line entry point.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ats_console::config::{validate_console_toml_text, ConsoleConfig};
use ats_console::i18n::Language;
use ats_console::{transport, ui};

#[derive(Parser)]
#[command(
    name = "ats-console",
    version,
    about = "Terminal console for a remote ATS power monitor"
)]
struct Cli {
    /// Path to the console configuration file.
    #[arg(long, default_value = "console.toml")]
    config: PathBuf,

    /// Redraw interval in milliseconds.
    #[arg(long)]
    refresh: Option<u64>,

    /// Display language, en or km.
    #[arg(long)]
    language: Option<String>,

    /// Disable the generator control; monitoring only.
    #[arg(long)]
    no_input: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration file and exit.
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Some(Command::Check)) {
        let text = fs::read_to_string(&cli.config)
            .map_err(|err| anyhow!("{}: {err}", cli.config.display()))?;
        validate_console_toml_text(&text)?;
        println!("{} OK", cli.config.display());
        return Ok(());
    }

    let mut config = ConsoleConfig::load(&cli.config)?;
    if let Some(refresh) = cli.refresh {
        config.refresh_ms = refresh.max(16);
    }
    if let Some(language) = cli.language.as_deref() {
        config.language = Language::parse(language)
            .ok_or_else(|| anyhow!("unsupported language: {language}"))?;
    }

    let (events, mut sink) = transport::connect(&config)?;
    ui::run_ui(&config, &events, &mut sink, cli.no_input)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
