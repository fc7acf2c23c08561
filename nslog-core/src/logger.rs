use crate::Destination;
use std::fmt::{self, Display};
use std::io;
use std::sync::Arc;

/// Print-style logging operations.
///
/// Every call produces one line: `print` and `printf` add a trailing
/// newline only when the content lacks one, `println` always adds one.
pub trait Log {
    /// Whether calls produce any output
    fn is_enabled(&self) -> bool;

    fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()>;

    fn print(&self, value: &dyn Display) -> io::Result<()> {
        self.printf(format_args!("{value}"))
    }

    fn println(&self, value: &dyn Display) -> io::Result<()> {
        self.printf(format_args!("{value}\n"))
    }
}

impl<L: Log + ?Sized> Log for &L {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).printf(args)
    }
}

/// Logger bound to a namespace and a destination
#[derive(Clone)]
pub struct ActiveLogger {
    namespace: String,
    prefix: String,
    destination: Arc<dyn Destination>,
}

impl ActiveLogger {
    pub fn new(namespace: impl Into<String>, destination: impl Destination + 'static) -> Self {
        let namespace = namespace.into();
        Self {
            prefix: format!("{namespace}: "),
            namespace,
            destination: Arc::new(destination),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The `"<namespace>: "` prefix written before every entry
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Log for ActiveLogger {
    fn is_enabled(&self) -> bool {
        true
    }

    fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut entry = String::with_capacity(self.prefix.len() + 64);
        entry.push_str(&self.prefix);
        fmt::write(&mut entry, args)
            .map_err(|_| io::Error::other("formatter error"))?;
        if !entry.ends_with('\n') {
            entry.push('\n');
        }

        self.destination.write_entry(entry.as_bytes())
    }
}

impl fmt::Debug for ActiveLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveLogger")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InertLogger;

/// Shared inert logger
pub static INERT: InertLogger = InertLogger;

impl Log for InertLogger {
    fn is_enabled(&self) -> bool {
        false
    }

    fn printf(&self, _args: fmt::Arguments<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// A namespace logger, active or inert.
///
/// The variant is decided once by [`LoggerFactory`](crate::LoggerFactory)
/// and never changes.
#[derive(Debug, Clone)]
pub enum Logger {
    Active(ActiveLogger),
    Inert(InertLogger),
}

impl Logger {
    /// Namespace of an active logger, `None` when inert
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Logger::Active(logger) => Some(logger.namespace()),
            Logger::Inert(_) => None,
        }
    }
}

impl Log for Logger {
    fn is_enabled(&self) -> bool {
        matches!(self, Logger::Active(_))
    }

    fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match self {
            Logger::Active(logger) => logger.printf(args),
            Logger::Inert(logger) => logger.printf(args),
        }
    }
}

impl From<ActiveLogger> for Logger {
    fn from(logger: ActiveLogger) -> Self {
        Logger::Active(logger)
    }
}

impl From<InertLogger> for Logger {
    fn from(logger: InertLogger) -> Self {
        Logger::Inert(logger)
    }
}
