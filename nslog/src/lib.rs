//! # nslog - Namespace-Filtered Conditional Logging
//!
//! nslog hands out loggers per namespace. Which namespaces actually print is
//! decided by the `DEBUG` environment variable, read once per process:
//!
//! - `DEBUG=*` enables every namespace
//! - `DEBUG=foo` enables only `foo`
//! - `DEBUG=foo:*` enables `foo:bar`, `foo:baz`, ...
//! - several patterns are separated by commas: `DEBUG=foo,bar:*`
//!
//! Loggers for disabled namespaces are inert and cost nothing to call.
//!
//! ## Features
//!
//! - `config` (default): load patterns from YAML/JSON with `nslog-config`
//! - `serde`: serialize patterns as their text form
//!
//! ## Quick Start
//!
//! ```rust
//! use nslog::prelude::*;
//!
//! fn main() -> std::io::Result<()> {
//!     let log = nslog::create_logger("app:startup");
//!
//!     log.println(&"This is a log")?;
//!     nslog!(log, "listening on port {}", 8080)?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

use anyhow::Result;
use std::sync::OnceLock;

// Re-export core functionality
pub use nslog_core::*;
pub use nslog_pattern as pattern;

#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub use nslog_config as config;

static FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// Initialize the process-wide factory from `DEBUG` unless it already is.
///
/// Safe to call from any thread and any number of times; the environment
/// is read at most once.
pub fn init() -> &'static LoggerFactory {
    FACTORY.get_or_init(|| {
        let factory = LoggerFactory::from_env();
        tracing::debug!(patterns = %factory.patterns(), "nslog initialized from environment");
        factory
    })
}

/// Install `factory` as the process-wide factory.
///
/// Fails if the process-wide factory was already initialized, explicitly
/// or by an earlier logger creation.
pub fn try_init_with(factory: LoggerFactory) -> Result<()> {
    let patterns = factory.patterns().to_string();
    FACTORY
        .set(factory)
        .map_err(|_| anyhow::anyhow!("nslog factory is already initialized"))?;

    tracing::debug!(patterns = %patterns, "nslog initialized");
    Ok(())
}

/// Validate `config` and install the factory it describes
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub fn try_init_from_config(config: &config::NslogConfig) -> Result<()> {
    config::ConfigLoader::validate(config)?;
    try_init_with(LoggerFactory::new(config.resolve()))
}

/// The process-wide factory, initialized from `DEBUG` on first use
pub fn factory() -> &'static LoggerFactory {
    init()
}

/// Create a logger for `namespace` writing to stderr
pub fn create_logger(namespace: impl Into<String>) -> Logger {
    factory().create_default(namespace)
}

/// Create a logger for `namespace` writing to `destination`
pub fn create_logger_to(
    namespace: impl Into<String>,
    destination: impl Destination + 'static,
) -> Logger {
    factory().create(namespace, destination)
}

/// Prelude module for easy imports
pub mod prelude {
    pub use nslog_core::prelude::*;
    pub use crate::{create_logger, create_logger_to};

    #[cfg(feature = "config")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
    pub use nslog_config::prelude::*;
}
