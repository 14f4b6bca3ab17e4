//! Common error types for storage operations

/// A common error type for storage operations.
///
/// A ready-made `Error` type for [`ReadStorage`](super::ReadStorage) and
/// [`Filesystem`](super::Filesystem) implementations. The response writer never inspects it:
/// any storage error becomes [`Storage`](crate::network::application::http::response::Error::Storage)
/// or an in-band "File not found" body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on an address that is out of bounds.
    OutOfBounds,
    /// An error occurred during a read operation.
    ReadError,
    /// No file or directory exists at the requested path.
    NotFound,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfBounds => f.write_str("address out of bounds"),
            Error::ReadError => f.write_str("read failed"),
            Error::NotFound => f.write_str("not found"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::OutOfBounds => defmt::write!(f, "OutOfBounds"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::NotFound => defmt::write!(f, "NotFound"),
        }
    }
}
