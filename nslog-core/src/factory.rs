use crate::logger::{ActiveLogger, Logger, INERT};
use crate::Destination;
use nslog_pattern::PatternList;
use std::io;
use std::sync::Arc;

/// Creates namespace loggers from a fixed pattern list.
///
/// The pattern list is parsed once and shared read-only by every clone of
/// the factory.
#[derive(Debug, Clone, Default)]
pub struct LoggerFactory {
    patterns: Arc<PatternList>,
}

impl LoggerFactory {
    pub fn new(patterns: PatternList) -> Self {
        Self {
            patterns: Arc::new(patterns),
        }
    }

    /// Factory configured from the `DEBUG` environment variable
    pub fn from_env() -> Self {
        Self::new(PatternList::from_env())
    }

    pub fn patterns(&self) -> &PatternList {
        &self.patterns
    }

    /// Whether loggers created for `namespace` are active
    pub fn is_enabled(&self, namespace: &str) -> bool {
        self.patterns.matches(namespace)
    }

    /// Create a logger for `namespace` writing to `destination`.
    ///
    /// Returns the shared inert logger when no pattern matches; the
    /// destination is dropped unused in that case.
    pub fn create(
        &self,
        namespace: impl Into<String>,
        destination: impl Destination + 'static,
    ) -> Logger {
        let namespace = namespace.into();
        let enabled = self.is_enabled(&namespace);

        tracing::trace!(namespace = %namespace, enabled, "resolved namespace logger");

        if enabled {
            Logger::Active(ActiveLogger::new(namespace, destination))
        } else {
            Logger::Inert(INERT)
        }
    }

    /// Create a logger for `namespace` writing to stderr
    pub fn create_default(&self, namespace: impl Into<String>) -> Logger {
        self.create(namespace, io::stderr())
    }
}

impl From<PatternList> for LoggerFactory {
    fn from(patterns: PatternList) -> Self {
        Self::new(patterns)
    }
}
