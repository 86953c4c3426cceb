//! Typed accessors for Cloud Foundry runtime environment variables.
//!
//! This crate provides a thin lookup layer over the JSON-encoded
//! `VCAP_APPLICATION` and `VCAP_SERVICES` variables and the plain
//! `CF_INSTANCE_*` addressing variables that Cloud Foundry injects into
//! application containers. Every operation reads the environment fresh,
//! parses on the spot, and returns the requested leaf value or a
//! descriptive error; nothing is cached or mutated.

mod application;
pub mod constants;
mod env;
mod error;
mod services;
mod source;

pub use application::{Application, Limits};
pub use env::{PortMapping, VcapEnv, load_dotenv};
pub use error::{Result, VcapError};
pub use services::ServiceInstance;
pub use source::{EnvSource, ProcessEnv, StaticEnv};
