//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map VcapError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use vcap_env::VcapError;

/// Structured exit codes for the `vcap` binary.
///
/// These codes let scripts distinguish between failure modes: an absent
/// lookup target can fall back to a default, while a malformed descriptor
/// should fail the deploy loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, including a malformed
    /// service binding (a resolved descriptor without credentials).
    GeneralError = 1,

    /// Not found - the requested variable, attribute, broker, instance, or
    /// credential key is absent.
    ///
    /// Scripts can treat this as "unset" and substitute their own default.
    NotFound = 4,

    /// Invalid descriptor - a descriptor variable holds text that is not
    /// the expected JSON shape, or a plain variable failed typed parsing.
    ///
    /// Scripts should not retry; the environment itself needs fixing.
    InvalidDescriptor = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&VcapError> for ExitCode {
    fn from(err: &VcapError) -> Self {
        match err {
            // Absent lookup targets (exit code 4)
            VcapError::EnvVarNotFound(_)
            | VcapError::AttributeNotFound { .. }
            | VcapError::BrokerNotFound { .. }
            | VcapError::ServiceNotFound { .. }
            | VcapError::CredentialNotFound { .. } => ExitCode::NotFound,

            // Malformed environment contents (exit code 5)
            VcapError::Decode { .. } | VcapError::InvalidValue { .. } => {
                ExitCode::InvalidDescriptor
            }

            // Malformed binding and everything else (exit code 1)
            VcapError::MissingCredentials { .. }
            | VcapError::DotenvParse { .. }
            | VcapError::DotenvIo { .. }
            | VcapError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no VcapError is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(vcap_err) = cause.downcast_ref::<VcapError>() {
                return ExitCode::from(vcap_err);
            }
        }
        ExitCode::GeneralError
    }
}
