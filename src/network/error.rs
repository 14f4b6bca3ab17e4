//! Common error types for transport operations

/// A common error type for transport operations.
///
/// Transports are free to use their own error type with [`Write`](super::Write); this enum is
/// a simple, portable default for `no_std` environments. With the `std` feature,
/// `IoConnection` produces every variant from `std::io::ErrorKind`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed by the peer.
    ConnectionClosed,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotOpen => f.write_str("connection not open"),
            Error::WriteError => f.write_str("write failed"),
            Error::Timeout => f.write_str("timed out"),
            Error::ConnectionClosed => f.write_str("connection closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut => Error::Timeout,
            std::io::ErrorKind::BrokenPipe
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted => Error::ConnectionClosed,
            std::io::ErrorKind::NotConnected => Error::NotOpen,
            _ => Error::WriteError,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
        }
    }
}
