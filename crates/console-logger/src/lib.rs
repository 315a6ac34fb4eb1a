//! Console Logger
//!
//! `log` backend for browser frontends. Records go to the devtools console
//! and the most recent ones are kept in a circular buffer.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}: {}", self.level, self.target, self.message)
    }
}

/// Fixed-capacity buffer, oldest entries evicted first
#[derive(Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the buffered items, oldest first
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

/// Logger writing to the browser console (stderr off-wasm)
pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer<Entry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Recent records, oldest first
    pub fn recent(&self) -> Vec<Entry> {
        self.buffer
            .lock()
            .map(|buf| buf.snapshot())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = Entry {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &Entry) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(&entry.to_string());
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &Entry) {
    eprintln!("{}", entry);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent records captured by the global logger
pub fn recent() -> Vec<Entry> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        assert!(buf.is_empty());
        for i in 0..5 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.snapshot(), vec![2, 3, 4]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity_holds_one() {
        let mut buf = RingBuffer::new(0);
        buf.push("a");
        buf.push("b");
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 8);
        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Warn)
                .target("spells")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .target("spells")
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "kept");
        assert_eq!(recent[0].level, Level::Warn);
        assert_eq!(recent[0].to_string(), "WARN  spells: kept");
    }
}
