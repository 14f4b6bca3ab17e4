//! Transport boundary for the HTTP server core.
//!
//! The parser never touches the transport: lines arrive already split by the caller. The
//! response writer only needs to push bytes, so the single trait here is [`Write`]. Any socket,
//! UART bridge or test buffer can be used as long as it implements it.
//!

#![deny(unsafe_code)]

/// Common error types for transport operations
pub mod error;

/// Application layer protocols
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    pub use super::Write;
}

/// Byte sink a response is written to.
///
/// Writes are ordered, byte-exact and blocking. An implementation may accept fewer bytes
/// than offered; callers loop until the buffer is drained.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection, returning how many bytes were accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: Write + ?Sized> Write for &mut T {
    type Error = T::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        T::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// Adapter exposing any [`std::io::Write`] as a [`Write`] connection.
///
/// Useful for running the server core on a host (e.g. over a `TcpStream`) during development.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoConnection<T> {
    inner: T,
}

#[cfg(feature = "std")]
impl<T: std::io::Write> IoConnection<T> {
    /// Wrap a standard writer.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Give back the wrapped writer.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<T: std::io::Write> Write for IoConnection<T> {
    type Error = error::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.inner.write(buf).map_err(error::Error::from)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush().map_err(error::Error::from)
    }
}
