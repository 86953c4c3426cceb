//! vcap - inspect Cloud Foundry environment variables from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and dispatch to command handlers.
//! - Initialize logging and map errors to structured exit codes.
//!
//! Does NOT handle:
//! - Environment access or JSON traversal (see the `vcap-env` crate).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are
//!   visible to every lookup.
//! - Values print to stdout; logs and errors go to stderr.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vcap_env::VcapEnv;

fn main() {
    // Load .env BEFORE CLI parsing so every lookup observes its values
    if let Err(e) = vcap_env::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let env = VcapEnv::new();
    if let Err(e) = run_command(cli, &env) {
        eprintln!("{:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

/// Route the parsed CLI arguments to the matching command handler.
fn run_command(cli: Cli, env: &VcapEnv) -> anyhow::Result<()> {
    match cli.command {
        Commands::Get { name } => commands::get::run(env, &name),
        Commands::App { attribute } => commands::app::run(env, &attribute, cli.raw),
        Commands::Services { broker } => commands::services::run(env, &broker),
        Commands::Service { broker, instance } => commands::service::run(env, &broker, &instance),
        Commands::Credentials {
            broker,
            instance,
            key,
        } => commands::credentials::run(env, &broker, &instance, key.as_deref(), cli.raw),
    }
}
