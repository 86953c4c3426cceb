//! Error types for environment and descriptor lookups.
//!
//! Responsibilities:
//! - Define error variants for every lookup failure in this crate.
//! - Classify errors into the not-found family vs. malformed-environment.
//!
//! Does NOT handle:
//! - Retry, fallback, or default substitution; every error is raised at the
//!   point of failure and propagated unchanged.
//!
//! Invariants:
//! - Every variant names the missing identifier and the variable involved.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Result type alias for accessor operations.
pub type Result<T> = std::result::Result<T, VcapError>;

/// Errors that can occur while reading the Cloud Foundry environment.
#[derive(Error, Debug)]
pub enum VcapError {
    /// A requested environment variable is not set.
    #[error("environment variable '{0}' not found")]
    EnvVarNotFound(String),

    /// A descriptor variable did not decode to the expected JSON shape.
    #[error("error decoding {var}")]
    Decode {
        var: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// `VCAP_APPLICATION` has no attribute with the requested name.
    #[error("no attribute '{attribute}' found in {var}")]
    AttributeNotFound {
        var: &'static str,
        attribute: String,
    },

    /// `VCAP_SERVICES` has no top-level entry for the requested broker.
    #[error("no services '{broker}' found in {var}")]
    BrokerNotFound { var: &'static str, broker: String },

    /// No instance bound under the broker matched the requested name.
    #[error("no service '{instance}' found under '{broker}'")]
    ServiceNotFound { broker: String, instance: String },

    /// The resolved credentials object has no entry for the requested key.
    #[error("no credential '{credential}' found in service '{instance}'")]
    CredentialNotFound {
        instance: String,
        credential: String,
    },

    /// The resolved service descriptor carries no `credentials` object.
    ///
    /// Distinct from the not-found family: this signals a malformed service
    /// binding published by the platform, not a caller mistake.
    #[error("no credentials found in service '{instance}' declaration")]
    MissingCredentials { broker: String, instance: String },

    /// A plain variable was present but failed typed parsing.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl VcapError {
    /// True for the not-found family: a variable, attribute, broker,
    /// instance, or credential key that simply is not there.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EnvVarNotFound(_)
                | Self::AttributeNotFound { .. }
                | Self::BrokerNotFound { .. }
                | Self::ServiceNotFound { .. }
                | Self::CredentialNotFound { .. }
        )
    }

    /// True when the environment itself is malformed rather than the
    /// requested identifier being absent.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::MissingCredentials { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_family_is_classified() {
        let errors = [
            VcapError::EnvVarNotFound("PORT".to_string()),
            VcapError::AttributeNotFound {
                var: "VCAP_APPLICATION",
                attribute: "foobar".to_string(),
            },
            VcapError::BrokerNotFound {
                var: "VCAP_SERVICES",
                broker: "sendgrid".to_string(),
            },
            VcapError::ServiceNotFound {
                broker: "sendgrid".to_string(),
                instance: "mysendgrid".to_string(),
            },
            VcapError::CredentialNotFound {
                instance: "mysendgrid".to_string(),
                credential: "hostname".to_string(),
            },
        ];
        for err in errors {
            assert!(err.is_not_found(), "{err} should be not-found");
            assert!(!err.is_internal(), "{err} should not be internal");
        }
    }

    #[test]
    fn missing_credentials_is_internal_not_not_found() {
        let err = VcapError::MissingCredentials {
            broker: "sendgrid".to_string(),
            instance: "mysendgrid".to_string(),
        };
        assert!(err.is_internal());
        assert!(!err.is_not_found());
    }

    #[test]
    fn messages_name_the_missing_identifier() {
        let err = VcapError::EnvVarNotFound("VCAP_SERVICES".to_string());
        assert_eq!(
            err.to_string(),
            "environment variable 'VCAP_SERVICES' not found"
        );

        let err = VcapError::AttributeNotFound {
            var: "VCAP_APPLICATION",
            attribute: "foobar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no attribute 'foobar' found in VCAP_APPLICATION"
        );

        let err = VcapError::MissingCredentials {
            broker: "sendgrid".to_string(),
            instance: "mysendgrid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no credentials found in service 'mysendgrid' declaration"
        );
    }

    #[test]
    fn decode_error_is_neither_not_found_nor_internal() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = VcapError::Decode {
            var: "VCAP_APPLICATION",
            source,
        };
        assert!(!err.is_not_found());
        assert!(!err.is_internal());
        assert_eq!(err.to_string(), "error decoding VCAP_APPLICATION");
    }
}
