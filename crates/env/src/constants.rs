//! Well-known Cloud Foundry variable names and descriptor attribute keys.
//!
//! These constants are advisory lookup keys, not an enforced schema: the
//! platform is free to publish additional variables and attributes, and the
//! accessors in this crate take any key. Deprecated names are kept because
//! older platforms still emit them.

// =============================================================================
// Instance Addressing Variables
// =============================================================================

/// The `CF_INSTANCE_IP` and `CF_INSTANCE_PORT` of the app instance in the
/// format `IP:PORT`, e.g. `1.2.3.4:5678`.
pub const CF_INSTANCE_ADDR: &str = "CF_INSTANCE_ADDR";

/// The UUID of this particular instance of the app.
pub const CF_INSTANCE_GUID: &str = "CF_INSTANCE_GUID";

/// The index number of the app instance, starting at `0`.
pub const CF_INSTANCE_INDEX: &str = "CF_INSTANCE_INDEX";

/// The external IP address of the host running the app instance.
pub const CF_INSTANCE_IP: &str = "CF_INSTANCE_IP";

/// The internal IP address of the container running the app instance.
pub const CF_INSTANCE_INTERNAL_IP: &str = "CF_INSTANCE_INTERNAL_IP";

/// The host-side port corresponding to the container-side `PORT`; generally
/// different from the `PORT` the app listens on.
pub const CF_INSTANCE_PORT: &str = "CF_INSTANCE_PORT";

/// JSON list of mappings between container-side and host-side ports
/// allocated to the instance's container, e.g.
/// `[{"external":61045,"internal":8080}]`. Not every internal port is
/// available for the app to bind; some are used by system services inside
/// the container.
pub const CF_INSTANCE_PORTS: &str = "CF_INSTANCE_PORTS";

// =============================================================================
// Runtime Path & Resource Variables
// =============================================================================

/// Database connection string derived by the platform from the first bound
/// service whose credentials carry a `uri`.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Root folder of the deployed application, e.g. `/home/vcap/app`.
pub const HOME: &str = "HOME";

/// Locale, set by buildpacks to ensure consistent script load order.
pub const LANG: &str = "LANG";

/// Maximum memory each instance may consume, e.g. `512M`. Instances
/// exceeding it are restarted.
pub const MEMORY_LIMIT: &str = "MEMORY_LIMIT";

/// The port on which the app should listen for requests; allocated
/// dynamically per instance.
pub const PORT: &str = "PORT";

/// Working directory where the buildpack processed the application.
pub const PWD: &str = "PWD";

/// Directory for temporary and staging files, e.g. `/home/vcap/tmp`.
pub const TMPDIR: &str = "TMPDIR";

/// The user account under which the application runs.
pub const USER: &str = "USER";

/// Deprecated name for [`PORT`].
pub const VCAP_APP_PORT: &str = "VCAP_APP_PORT";

// =============================================================================
// JSON Descriptor Variables
// =============================================================================

/// JSON object describing the deployed application (identifiers, URIs,
/// limits, timestamps).
pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";

/// JSON object mapping each bound service offering to the list of its
/// bound instances, populated when a service instance is bound to the app.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

// =============================================================================
// VCAP_APPLICATION Attribute Keys
// =============================================================================

/// GUID identifying the application.
pub const APP_APPLICATION_ID: &str = "application_id";

/// Name assigned to the application when it was pushed.
pub const APP_APPLICATION_NAME: &str = "application_name";

/// URIs assigned to the application.
pub const APP_APPLICATION_URIS: &str = "application_uris";

/// GUID identifying a version of the application; updated on every push or
/// restart.
pub const APP_APPLICATION_VERSION: &str = "application_version";

/// API endpoint targeted when the app was pushed.
pub const APP_CF_API: &str = "cf_api";

/// Deprecated. IP address of the application instance.
pub const APP_HOST: &str = "host";

/// GUID of this instance of the app.
pub const APP_INSTANCE_ID: &str = "instance_id";

/// Index number of this instance of the app.
pub const APP_INSTANCE_INDEX: &str = "instance_index";

/// Disk, file-descriptor, and memory limits permitted to the app.
pub const APP_LIMITS: &str = "limits";

/// Port of the app instance.
pub const APP_PORT: &str = "port";

/// GUID identifying the application's space.
pub const APP_SPACE_ID: &str = "space_id";

/// Human-readable name of the space where the app is deployed.
pub const APP_SPACE_NAME: &str = "space_name";

/// Human-readable start timestamp. Not provided on Diego cells.
pub const APP_START: &str = "start";

/// Identical to `start`. Not provided on Diego cells.
pub const APP_STARTED_AT: &str = "started_at";

/// Unix epoch start timestamp. Not provided on Diego cells.
pub const APP_STARTED_AT_TIMESTAMP: &str = "started_at_timestamp";

/// Identical to `started_at_timestamp`. Not provided on Diego cells.
pub const APP_STATE_TIMESTAMP: &str = "state_timestamp";

/// Deprecated. May be null even when present.
pub const APP_USERS: &str = "users";

/// Legacy duplicate of [`APP_APPLICATION_NAME`].
pub const APP_NAME: &str = "name";

/// Legacy duplicate of [`APP_APPLICATION_URIS`].
pub const APP_URIS: &str = "uris";

/// Legacy duplicate of [`APP_APPLICATION_VERSION`].
pub const APP_VERSION: &str = "version";

// =============================================================================
// VCAP_SERVICES Attribute Keys
// =============================================================================

/// Name assigned to the service instance by the user.
pub const SERVICE_NAME: &str = "name";

/// Name of the service offering.
pub const SERVICE_LABEL: &str = "label";

/// Strings an app can use to identify a service instance.
pub const SERVICE_TAGS: &str = "tags";

/// Service plan selected when the instance was created.
pub const SERVICE_PLAN: &str = "plan";

/// JSON object with the service-specific credentials needed to access the
/// instance.
pub const SERVICE_CREDENTIALS: &str = "credentials";
