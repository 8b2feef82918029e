mod commands;
mod environment;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "changelog-enforcer")]
#[command(bin_name = "changelog-enforcer")]
#[command(
    about = "Fail a pull request check unless the changelog was updated",
    long_about = None
)]
struct Cli {
    /// Repository directory to run git in (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = environment::failure_format();

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            output::report_failure(&e, format);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli.command.execute(&start_path).await {
        output::report_failure(&e, format);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,changelog_enforcer=debug,enforcer_operations=debug,enforcer_git=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(environment::use_ansi())
        .init();
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) if p.is_dir() => Ok(p),
        Some(p) => Err(CliError::WorkdirNotFound(p)),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}
