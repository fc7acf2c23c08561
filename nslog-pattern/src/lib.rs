//! # nslog Pattern
//!
//! Namespace patterns for nslog: parsing the comma-separated `DEBUG` value
//! and deciding whether a namespace is enabled.
//!
//! A pattern is one of:
//!
//! - `*` enables every namespace
//! - `name:*` enables every namespace starting with `name:`
//! - anything else enables exactly that namespace
//!
//! ```rust
//! use nslog_pattern::PatternList;
//!
//! let patterns = PatternList::parse("foo,bar:*");
//! assert!(patterns.matches("foo"));
//! assert!(patterns.matches("bar:baz"));
//! assert!(!patterns.matches("baz"));
//! ```

mod list;
mod pattern;


pub use list::{PatternList, DEBUG_ENV};
pub use pattern::Pattern;
