//! Config loading from environment variables

use super::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_PORT};
use crate::errors::ApiError;

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "TEXTLAB_HOST";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "TEXTLAB_PORT";
/// Environment variable overriding the allowed cross-origin
pub const ENV_ALLOWED_ORIGIN: &str = "TEXTLAB_ALLOWED_ORIGIN";

/// API Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Bind host (e.g. "0.0.0.0")
  pub host: String,
  /// Listen port
  pub port: u16,
  /// The single origin allowed to make credentialed cross-origin requests
  pub allowed_origin: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// Unset variables fall back to the defaults in [`crate::config`].
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds configuration from an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a closure over a fixed map
  /// instead of mutating the process environment.
  ///
  /// # Errors
  /// Returns an error if the port is not a valid `u16` or the origin is malformed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
    if host.trim().is_empty() {
      return Err(ApiError::config(format!("{ENV_HOST} が空です")));
    }

    let port = match lookup(ENV_PORT) {
      Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
        ApiError::config(format!("{ENV_PORT} がポート番号として不正です: {raw:?} ({e})"))
      })?,
      None => DEFAULT_PORT,
    };

    let allowed_origin =
      lookup(ENV_ALLOWED_ORIGIN).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
    validate_origin(&allowed_origin)?;

    Ok(Self {
      host,
      port,
      allowed_origin,
    })
  }

  /// Returns the `host:port` string passed to the listener
  #[must_use]
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Checks that an origin is `scheme://authority` with nothing after it
///
/// Browsers send the `Origin` header without a path or trailing slash, so a
/// configured value with either would never match.
fn validate_origin(origin: &str) -> crate::errors::Result<()> {
  let authority = origin
    .strip_prefix("https://")
    .or_else(|| origin.strip_prefix("http://"))
    .ok_or_else(|| {
      ApiError::config(format!(
        "{ENV_ALLOWED_ORIGIN} は http:// または https:// で始まる必要があります: {origin:?}"
      ))
    })?;

  if authority.is_empty() || authority.contains('/') {
    return Err(ApiError::config(format!(
      "{ENV_ALLOWED_ORIGIN} はパスを含まない scheme://host[:port] 形式である必要があります: {origin:?}"
    )));
  }

  if !origin.chars().all(|c| c.is_ascii_graphic()) {
    return Err(ApiError::config(format!(
      "{ENV_ALLOWED_ORIGIN} に不正な文字が含まれています: {origin:?}"
    )));
  }

  Ok(())
}
