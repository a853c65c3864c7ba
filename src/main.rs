//! Bot Preflight CLI
//!
//! Verifies the bot's configuration and external dependencies (Telegram Bot
//! API and Supabase) before startup. The process exit code is the API:
//! 0 when all mandatory checks pass, 1 otherwise.

use bot_preflight::config::PreflightEnv;
use bot_preflight::preflight::{run_preflight, HttpProbes, DEFAULT_TIMEOUT_SECS};
use bot_preflight::report::{ConsoleReporter, Reporter, Severity};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "bot-preflight",
    about = "Verify the bot's external dependencies before startup"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Per-request timeout in seconds for remote checks
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let env = PreflightEnv::from_process();
    let probes = HttpProbes::new(Duration::from_secs(cli.timeout));
    let reporter = ConsoleReporter;

    match run_preflight(&env, &probes, &reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.emit(Severity::Error, &format!("Preflight failed: {}", err));
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("bot_preflight=debug")
    } else {
        EnvFilter::new("bot_preflight=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
