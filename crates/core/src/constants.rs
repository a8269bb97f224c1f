//! Shared constants for viewer-count.

/// Query-string key selecting a single viewer by numeric id.
pub const PARAM_ID: &str = "id";

/// Query-string key selecting viewers by exact name.
pub const PARAM_NAME: &str = "name";

/// Address the HTTP listener binds to; the port comes from the config file.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
