//! CLI command implementations.

pub mod app;
pub mod credentials;
pub mod get;
pub mod service;
pub mod services;

use anyhow::Result;
use serde_json::Value;

/// Print a JSON value to stdout.
///
/// With `raw`, bare strings print without quotes so shell callers can use
/// the value directly; every other shape stays JSON.
pub(crate) fn print_value(value: &Value, raw: bool) -> Result<()> {
    match value {
        Value::String(s) if raw => println!("{s}"),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
