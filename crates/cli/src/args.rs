//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map each subcommand onto one accessor operation of the library.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not read the environment itself (delegated to `vcap-env`).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vcap")]
#[command(about = "Inspect Cloud Foundry environment variables and service bindings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vcap get PORT\n  vcap app application_name --raw\n  vcap services elephantsql\n  vcap service elephantsql elephantsql-c6c60\n  vcap credentials sendgrid mysendgrid\n  vcap credentials sendgrid mysendgrid hostname --raw\n"
)]
pub struct Cli {
    /// Print bare string values without JSON quoting (for shell use)
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a plain environment variable exactly as stored
    Get {
        /// Variable name, e.g. PORT or CF_INSTANCE_GUID
        name: String,
    },

    /// Print one VCAP_APPLICATION attribute as JSON
    App {
        /// Attribute name, e.g. application_name or limits
        attribute: String,
    },

    /// Print the service instances bound under a broker name
    Services {
        /// Broker/offering name, e.g. elephantsql
        broker: String,
    },

    /// Print one bound service instance
    Service {
        /// Broker/offering name
        broker: String,
        /// Instance name assigned by the user
        instance: String,
    },

    /// Print the credentials of a bound service instance
    Credentials {
        /// Broker/offering name
        broker: String,
        /// Instance name assigned by the user
        instance: String,
        /// Single credential key to extract instead of the whole object
        key: Option<String>,
    },
}
