//! Per-batch diagnostic reporting
//!
//! Workers that finish a batch can report their hit count to a shared sink.
//! The sink sits behind a mutex so concurrent reports come out as whole
//! lines rather than interleaved fragments - this lock protects output
//! formatting only and plays no part in the computed estimate.

use std::io::{self, Write};
use std::sync::Mutex;

/// Shared sink for per-batch diagnostic lines
///
/// The reporter is handed to workers as an explicit reference; no global
/// state is involved. Each `report` call acquires the lock, writes one
/// formatted line, and releases the lock on scope exit.
pub struct BatchReporter<W> {
    sink: Mutex<W>,
}

/// Reporter over standard output, the normal diagnostic-run wiring
pub type StdoutReporter = BatchReporter<io::Stdout>;

impl BatchReporter<io::Stdout> {
    /// Create a reporter writing to standard output
    pub fn stdout() -> Self {
        BatchReporter::new(io::stdout())
    }
}

impl<W: Write> BatchReporter<W> {
    /// Create a reporter over an arbitrary sink
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Write one diagnostic line for a completed batch
    ///
    /// Diagnostic output only: a failed write or a poisoned lock must not
    /// abort the sampling run, so both are tolerated here.
    pub fn report(&self, thread_id: usize, hits: u64, samples: u64) {
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(
            sink,
            "In thread id={}, {} of {} sample(s) hit inside the circle.",
            thread_id, hits, samples
        );
    }

    /// Consume the reporter and return the underlying sink
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
