//! # nslog Config
//!
//! Startup configuration for nslog loaded from YAML or JSON.
//!
//! ```yaml
//! env_var: APP_DEBUG
//! patterns:
//!   - "net:*"
//!   - db
//! ```
//!
//! When `patterns` is present it is used as-is; otherwise the patterns are
//! read from `env_var` (default `DEBUG`).

mod config;
mod loader;

#[cfg(test)]
mod tests;

pub use config::*;
pub use loader::*;

/// Prelude module for configuration
pub mod prelude {
    pub use crate::{ConfigLoader, NslogConfig};
}
