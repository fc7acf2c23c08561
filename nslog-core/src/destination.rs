use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Sink for rendered log entries.
///
/// Each call receives one complete entry, prefix and trailing newline
/// included. Loggers add no locking of their own, so interleaving between
/// loggers sharing a destination is whatever the implementation allows.
pub trait Destination: Send + Sync {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()>;
}

impl Destination for io::Stderr {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        self.lock().write_all(entry)
    }
}

impl Destination for io::Stdout {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        self.lock().write_all(entry)
    }
}

impl Destination for File {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        let mut file = self;
        file.write_all(entry)
    }
}

impl<W: Write + Send> Destination for Mutex<W> {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        // a panic elsewhere does not make the writer unusable
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(entry)
    }
}

impl<D: Destination + ?Sized> Destination for Arc<D> {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        (**self).write_entry(entry)
    }
}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        (**self).write_entry(entry)
    }
}
