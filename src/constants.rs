// -
// Configuration sources

/// Default config file looked up relative to the working directory
pub(crate) const DEFAULT_CONFIG_FILE: &str = "config/gateway";

/// Environment variable pointing at an additional config file
pub(crate) const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG_PATH";

/// Prefix for environment variable overrides, `__` separated
pub(crate) const ENV_PREFIX: &str = "GATEWAY";

/// Lower bound for the fixed worker pool size
pub(crate) const MIN_FIXED_WORKERS: usize = 16;
