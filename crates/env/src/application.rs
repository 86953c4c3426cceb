//! Application-descriptor accessors (`VCAP_APPLICATION`).
//!
//! Responsibilities:
//! - Dynamic attribute lookup returning decoded JSON values.
//! - A typed view of the whole descriptor for callers that want structure.
//!
//! Invariants:
//! - The descriptor is parsed fresh on every call; no caching.
//! - Attribute lookup is one level deep; values come back as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants;
use crate::env::VcapEnv;
use crate::error::{Result, VcapError};
use crate::source::EnvSource;

impl<S: EnvSource> VcapEnv<S> {
    /// Get a `VCAP_APPLICATION` attribute by name.
    ///
    /// The value is returned as decoded JSON and may be any shape: `limits`
    /// is an object, `application_uris` is a list of strings,
    /// `instance_index` is a number, and the deprecated `users` attribute
    /// may be null.
    pub fn application_attribute(&self, attribute: &str) -> Result<Value> {
        let descriptor = self.object(constants::VCAP_APPLICATION)?;
        descriptor
            .get(attribute)
            .cloned()
            .ok_or_else(|| VcapError::AttributeNotFound {
                var: constants::VCAP_APPLICATION,
                attribute: attribute.to_string(),
            })
    }

    /// Decode the whole application descriptor into its typed form.
    pub fn application(&self) -> Result<Application> {
        let raw = self.get(constants::VCAP_APPLICATION)?;
        serde_json::from_str(&raw).map_err(|source| VcapError::Decode {
            var: constants::VCAP_APPLICATION,
            source,
        })
    }
}

/// The deployed-application descriptor.
///
/// Every well-known field is optional: platforms omit several of them
/// (Diego cells publish no `start`/`started_at`, the user list is long
/// deprecated), and new keys may appear at any time. Keys beyond the
/// well-known set are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// GUID of this instance of the app.
    pub instance_id: Option<String>,
    /// Index number of this instance of the app.
    pub instance_index: Option<u64>,
    /// Port of the app instance.
    pub port: Option<u16>,
    /// GUID identifying the application.
    pub application_id: Option<String>,
    /// Name assigned to the application when it was pushed.
    pub application_name: Option<String>,
    /// URIs assigned to the application.
    #[serde(default)]
    pub application_uris: Vec<String>,
    /// GUID identifying a version of the application.
    pub application_version: Option<String>,
    /// API endpoint targeted when the app was pushed.
    pub cf_api: Option<String>,
    /// Deprecated. IP address of the application instance.
    pub host: Option<String>,
    /// Disk, file-descriptor, and memory limits permitted to the app.
    pub limits: Option<Limits>,
    /// GUID identifying the application's space.
    pub space_id: Option<String>,
    /// Human-readable name of the space where the app is deployed.
    pub space_name: Option<String>,
    /// Human-readable start timestamp. Not provided on Diego cells.
    pub start: Option<String>,
    /// Identical to `start`. Not provided on Diego cells.
    pub started_at: Option<String>,
    /// Unix epoch start timestamp. Some platforms publish it as a number,
    /// some as a string.
    pub started_at_timestamp: Option<Value>,
    /// Identical to `started_at_timestamp`.
    pub state_timestamp: Option<Value>,
    /// Deprecated. May be null even when present.
    pub users: Option<Value>,
    /// Legacy duplicate of `application_name`.
    pub name: Option<String>,
    /// Legacy duplicate of `application_uris`.
    #[serde(default)]
    pub uris: Vec<String>,
    /// Legacy duplicate of `application_version`.
    pub version: Option<String>,
    /// Attributes beyond the well-known set, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resource limits granted to the app (the `limits` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Memory limit in megabytes.
    pub mem: Option<u64>,
    /// Disk limit in megabytes.
    pub disk: Option<u64>,
    /// Maximum number of open file descriptors.
    pub fds: Option<u64>,
}
