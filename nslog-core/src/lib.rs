//! # nslog Core
//!
//! Conditional loggers keyed by namespace. A [`LoggerFactory`] owns the
//! parsed pattern list and hands out either an active logger, which writes
//! `"<namespace>: "` prefixed lines to a [`Destination`], or an inert one
//! that discards everything.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod destination;
mod factory;
mod logger;
mod macros;


pub use destination::Destination;
pub use factory::LoggerFactory;
pub use logger::{ActiveLogger, InertLogger, Log, Logger, INERT};
pub use nslog_pattern::{Pattern, PatternList, DEBUG_ENV};

/// Prelude module for core functionality
pub mod prelude {
    pub use crate::nslog;
    pub use crate::{Destination, Log, Logger, LoggerFactory};
    pub use nslog_pattern::PatternList;
}
