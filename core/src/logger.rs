// Global logging system for syscon firmware

use core::fmt::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

pub const MAX_LOG_ENTRIES: usize = 512;

/// Bytes of formatted text kept per entry. Longer messages are truncated.
pub const MAX_MESSAGE_LEN: usize = 120;

/// One formatted log record.
#[derive(Clone, Copy)]
pub struct LogEntry {
    level: Level,
    len: usize,
    text: [u8; MAX_MESSAGE_LEN],
}

impl LogEntry {
    const EMPTY: Self = Self {
        level: Level::Trace,
        len: 0,
        text: [0; MAX_MESSAGE_LEN],
    };

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        // Only whole characters are ever copied in, so this never falls back.
        core::str::from_utf8(&self.text[..self.len]).unwrap_or("")
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message())
    }
}

impl Write for LogEntry {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MAX_MESSAGE_LEN - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.text[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

struct Ring<const N: usize> {
    entries: [LogEntry; N],
    count: usize, // Total logs written
}

/// Fixed-capacity ring of log records.
///
/// Holds up to `N` entries; once full the oldest entry is overwritten.
pub struct RingLogger<const N: usize = MAX_LOG_ENTRIES> {
    level: LevelFilter,
    ring: Mutex<Ring<N>>,
}

impl<const N: usize> RingLogger<N> {
    pub const fn new(level: LevelFilter) -> Self {
        Self {
            level,
            ring: Mutex::new(Ring {
                entries: [LogEntry::EMPTY; N],
                count: 0,
            }),
        }
    }

    /// Append a record, overwriting the oldest one when the ring is full.
    pub fn push(&self, level: Level, args: fmt::Arguments<'_>) {
        if N == 0 {
            return;
        }

        let mut entry = LogEntry::EMPTY;
        entry.level = level;
        // A record that overflows or fails to format is kept as far as it got.
        let _ = entry.write_fmt(args);

        let mut ring = self.ring.lock();
        let idx = ring.count % N; // Ring buffer wrap-around
        ring.entries[idx] = entry;
        ring.count += 1;
    }

    /// Iterate over all retained entries, oldest first.
    pub fn iter(&self) -> LogIterator<'_, N> {
        self.last_n(N)
    }

    /// Iterate over the last `n` retained entries, oldest first.
    pub fn last_n(&self, n: usize) -> LogIterator<'_, N> {
        let total_count = self.ring.lock().count;
        let available = total_count.min(N);
        let num_logs = n.min(available);

        LogIterator {
            logger: self,
            start: total_count - num_logs,
            current: 0,
            remaining: num_logs,
        }
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.ring.lock().count.min(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries ever written, including overwritten ones.
    pub fn total(&self) -> usize {
        self.ring.lock().count
    }

    pub fn clear(&self) {
        self.ring.lock().count = 0;
    }

    fn entry_at(&self, seq: usize) -> Option<LogEntry> {
        let ring = self.ring.lock();
        // Overwritten while iterating.
        if seq + N < ring.count || seq >= ring.count {
            return None;
        }
        Some(ring.entries[seq % N])
    }
}

impl<const N: usize> Log for RingLogger<N> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.push(record.level(), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Iterator over log entries in chronological order.
pub struct LogIterator<'a, const N: usize> {
    logger: &'a RingLogger<N>,
    start: usize,
    current: usize,
    remaining: usize,
}

impl<'a, const N: usize> Iterator for LogIterator<'a, N> {
    type Item = LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let seq = self.start + self.current;
        self.current += 1;
        self.remaining -= 1;

        self.logger.entry_at(seq)
    }
}

static LOGGER: RingLogger = RingLogger::new(LevelFilter::Trace);

/// Install the global ring as the `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Entries held by the global ring, oldest first.
pub fn get_logs_iter() -> LogIterator<'static, MAX_LOG_ENTRIES> {
    LOGGER.iter()
}
