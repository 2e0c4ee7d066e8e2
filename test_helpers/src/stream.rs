//! Byte streams that report how they were used.
//!
//! # Examples
//!
//! ```
//! use std::io::Read;
//! use mcmeta_json_test_helpers::stream::TrackedStream;
//!
//! let (mut stream, probe) = TrackedStream::new("{}");
//! let mut text = String::new();
//! stream.read_to_string(&mut text).unwrap();
//! assert!(!probe.is_closed());
//! drop(stream);
//! assert!(probe.is_closed());
//! ```

use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observes whether a [`TrackedStream`] has been closed (dropped).
#[derive(Clone, Debug)]
pub struct CloseProbe(Arc<AtomicBool>);

impl CloseProbe {
    /// Returns `true` once the stream has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// In-memory stream that flags its [`CloseProbe`] when dropped.
#[derive(Debug)]
pub struct TrackedStream {
    inner: Cursor<Vec<u8>>,
    closed: Arc<AtomicBool>,
}

impl TrackedStream {
    /// A stream over `bytes` and the probe watching it.
    #[must_use]
    pub fn new(bytes: impl AsRef<[u8]>) -> (Self, CloseProbe) {
        let closed = Arc::new(AtomicBool::new(false));
        let stream = Self {
            inner: Cursor::new(bytes.as_ref().to_vec()),
            closed: Arc::clone(&closed),
        };
        (stream, CloseProbe(closed))
    }
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Stream that yields a prefix and then fails every later read.
#[derive(Debug)]
pub struct FailingStream {
    prefix: Cursor<Vec<u8>>,
}

impl FailingStream {
    /// A stream returning `prefix` before failing.
    #[must_use]
    pub fn after(prefix: impl AsRef<[u8]>) -> Self {
        Self {
            prefix: Cursor::new(prefix.as_ref().to_vec()),
        }
    }
}

impl Read for FailingStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.prefix.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset")),
            read => Ok(read),
        }
    }
}
