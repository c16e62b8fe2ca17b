//! Canvass CLI - terminal interface to the data-collection engine
//!
//! This CLI drives the same orchestration the page runs:
//! - bootstrap a session (guest or with a supplied identity token)
//! - fetch a scenario and resolve its routed question subset
//! - submit a drafted answer set in strict order

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canvass_api::{BackendConfig, HttpBackend};
use canvass_session::{
    SessionManager, StaticIdentityProvider, TrackerCoordinator,
};

mod commands;
mod error;

use commands::{answers, scenario, session};
pub use error::{CliError, CliResult};

/// Canvass CLI application
#[derive(Parser)]
#[command(name = "canvass")]
#[command(about = "Canvass - survey session and submission CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend endpoint
    #[arg(long, env = "CANVASS_ENDPOINT", default_value = "http://localhost:8080")]
    endpoint: String,

    /// Third-party identity token (omit for the guest flow)
    #[arg(long, env = "CANVASS_IDENTITY_TOKEN")]
    identity_token: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Bootstrap a session and show its identity
    Session,

    /// Fetch a scenario and resolve its routed question subset
    Scenario {
        #[command(flatten)]
        args: scenario::ScenarioArgs,
    },

    /// Submit a drafted answer set in strict order
    Submit {
        #[command(flatten)]
        args: answers::SubmitArgs,
    },
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let backend = Arc::new(HttpBackend::new(&BackendConfig {
        base_url: cli.endpoint.clone(),
        timeout_secs: 30,
    })?);
    let provider = match &cli.identity_token {
        Some(token) => StaticIdentityProvider::signed_in(token.clone()),
        None => StaticIdentityProvider::signed_out(),
    };
    // The terminal has no analytics script; the guest flow always runs on
    // a synthesized client id here.
    let manager = SessionManager::new(
        backend.clone(),
        Arc::new(provider),
        TrackerCoordinator::detached(),
    );

    match cli.command {
        Commands::Session => session::execute(manager).await,
        Commands::Scenario { args } => scenario::execute(backend.as_ref(), args).await,
        Commands::Submit { args } => answers::execute(backend.as_ref(), manager, args).await,
    }
}
