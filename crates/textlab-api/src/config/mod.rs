//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_PORT, SERVICE_NAME, SERVICE_VERSION,
};
pub use env::{Config, ENV_ALLOWED_ORIGIN, ENV_HOST, ENV_PORT};
