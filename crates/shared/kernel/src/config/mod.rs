use config::{Config, Environment, File};
use scriba_domain::config::ScribaConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "scriba";

/// Prefix of environment overrides (`SCRIBA__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "SCRIBA";

/// Custom error type for config loading.
#[scriba_derive::scriba_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` must exist. Without one, `scriba.{toml,json,yaml}` in the
///    working directory is read when present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `SCRIBA__`; nested keys are separated
///    by double underscores (`SCRIBA__REFERENCES__FALLBACK` maps to `references.fallback`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed, or
/// the merged settings do not match `T`.
///
/// # Example
/// ```rust
/// use scriba_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    debug!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the application configuration, see [`load_config`].
///
/// # Errors
/// Same as [`load_config`].
pub fn load_scriba_config(path: Option<impl AsRef<Path>>) -> Result<ScribaConfig, ConfigError> {
    load_config(path)
}
