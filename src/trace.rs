//! Ordered event trace.
//!
//! Every philosopher and the bartender narrate through one [`TraceLog`].
//! Each emission writes its whole line under a single lock, so lines from
//! different threads never interleave. Timestamps are nanoseconds since the
//! log was created and are taken before the lock, so output order can differ
//! slightly from timestamp order under preemption.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

/// Nanoseconds elapsed since the trace started
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub u128);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} nanoseconds]", self.0)
    }
}

/// Something worth narrating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    Tranquil { name: &'a str },
    Thirsty { name: &'a str, drinks: u32 },
    Drank { name: &'a str, drinks: u32, shared_with: &'a str },
    Refilled { first: &'a str, second: &'a str },
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Tranquil { name } => write!(f, "{} is tranquil.", name),
            TraceEvent::Thirsty { name, drinks } => {
                write!(f, "{} is thirsty for {} drinks.", name, drinks)
            }
            TraceEvent::Drank { name, drinks, shared_with } => write!(
                f,
                "{} took {} drink(s) from bottle shared with philosopher {}.",
                name, drinks, shared_with
            ),
            TraceEvent::Refilled { first, second } => write!(
                f,
                "Bottle shared between {} and {} has been refilled.",
                first, second
            ),
        }
    }
}

/// Serialized, timestamped line sink shared by all actors
pub struct TraceLog {
    start: Instant,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl TraceLog {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            start: Instant::now(),
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Trace to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Trace into memory, returning the log and a handle to read it back
    pub fn in_memory() -> (Self, TraceBuffer) {
        let buffer = TraceBuffer::default();
        (Self::new(buffer.clone()), buffer)
    }

    pub fn elapsed(&self) -> Timestamp {
        Timestamp(self.start.elapsed().as_nanos())
    }

    /// Write one `"<timestamp>: <text>"` line atomically.
    pub fn emit(&self, at: Timestamp, text: &str) {
        let line = format!("{}: {}\n", at, text);
        let mut sink = self.sink.lock();
        if let Err(e) = sink.write_all(line.as_bytes()).and_then(|_| sink.flush()) {
            log::warn!("Failed to write trace line: {}", e);
        }
    }

    /// Timestamp `event` now and emit it
    pub fn record(&self, event: &TraceEvent<'_>) {
        let at = self.elapsed();
        self.emit(at, &event.to_string());
    }
}

impl fmt::Debug for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceLog").field("start", &self.start).finish_non_exhaustive()
    }
}

/// Cloneable in-memory trace destination
#[derive(Debug, Clone, Default)]
pub struct TraceBuffer(Arc<Mutex<Vec<u8>>>);

impl TraceBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Trace lines with the timestamp prefix stripped
    pub fn messages(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(|line| match line.split_once(": ") {
                Some((_, message)) => message.to_string(),
                None => line.to_string(),
            })
            .collect()
    }
}

impl Write for TraceBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
