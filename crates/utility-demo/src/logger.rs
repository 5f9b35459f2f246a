//! Event Logger
//!
//! Append-only JSONL logging of controller events.

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

use utility_core::{ControllerEvent, EventObserver};

#[derive(Debug)]
struct LoggerInner {
    writer: Option<BufWriter<File>>,
    event_count: u64,
    write_errors: u64,
}

/// Observer that writes every controller event as one JSON line.
///
/// Clones share the same file, so the caller can keep a handle for flushing
/// after subscribing another to the controller.
#[derive(Debug, Clone)]
pub struct EventLogger {
    inner: Rc<RefCell<LoggerInner>>,
}

impl EventLogger {
    /// Create a new event logger writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self::with_writer(Some(BufWriter::new(file))))
    }

    /// Create a logger that discards events (for testing)
    pub fn null() -> Self {
        Self::with_writer(None)
    }

    fn with_writer(writer: Option<BufWriter<File>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoggerInner {
                writer,
                event_count: 0,
                write_errors: 0,
            })),
        }
    }

    /// Get the current event count
    pub fn event_count(&self) -> u64 {
        self.inner.borrow().event_count
    }

    /// Number of events that could not be written
    pub fn write_errors(&self) -> u64 {
        self.inner.borrow().write_errors
    }

    /// Log an event to the file
    pub fn log(&self, event: &ControllerEvent) -> std::io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.event_count += 1;
        if let Some(ref mut writer) = inner.writer {
            let json = serde_json::to_string(event)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.inner.borrow_mut().writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl EventObserver for EventLogger {
    fn on_event(&mut self, event: &ControllerEvent) {
        if let Err(e) = self.log(event) {
            self.inner.borrow_mut().write_errors += 1;
            tracing::warn!("Failed to log event {}: {}", event.kind, e);
        }
    }
}
