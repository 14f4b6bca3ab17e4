//! # Storage collaborators for response bodies
//!
//! The response writer can stream bodies from two kinds of storage without ever holding the
//! whole body in RAM:
//!
//! - [`ReadStorage`]: random-access persistent memory (internal flash, EEPROM, FRAM). This is
//!   where firmware images usually keep static pages baked in at build time.
//! - [`Filesystem`] / [`File`]: a mounted filesystem (SPIFFS, LittleFS, FAT on an SD card).
//!
//! Both are implemented by the platform; this crate only consumes them.
//!
//! ```text
//! ┌─────────────────┐        ┌──────────────────────┐
//! │ ResponseWriter  │──────▶ │ ReadStorage          │  send_from_storage()
//! │                 │        └──────────────────────┘
//! │                 │        ┌──────────────────────┐
//! │                 │──────▶ │ Filesystem ─▶ File   │  send_file()
//! └─────────────────┘        └──────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use libhttpd::storage::ReadStorage;
//!
//! fn read_magic<S: ReadStorage>(storage: &mut S) -> Result<[u8; 4], S::Error> {
//!     let mut magic = [0u8; 4];
//!     storage.read(0, &mut magic)?;
//!     Ok(magic)
//! }
//! ```

#![deny(unsafe_code)]

/// Common error types for storage operations
pub mod error;


/// Re-exports of common traits for convenient importing
pub mod prelude {
    pub use super::{File, Filesystem, ReadStorage};
}

/// Trait for reading data from persistent storage devices.
///
/// # Examples
///
/// ```rust,no_run
/// use libhttpd::storage::ReadStorage;
///
/// fn read_device_id<S: ReadStorage>(storage: &mut S) -> Result<u32, S::Error> {
///     let mut id_bytes = [0u8; 4];
///     storage.read(0, &mut id_bytes)?;
///     Ok(u32::from_le_bytes(id_bytes))
/// }
/// ```
pub trait ReadStorage {
    /// Associated error type for read operations
    type Error: core::fmt::Debug;

    /// Read data from the storage device.
    ///
    /// Reads data from the specified offset into the provided buffer.
    /// The entire buffer will be filled unless an error occurs.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if offset + buffer length exceeds device capacity
    /// - `ReadError` if hardware read operation fails
    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error>;

    /// Get the total capacity of the storage device in bytes.
    fn capacity(&self) -> usize;
}

/// A mounted filesystem that can open files by path.
///
/// # Examples
///
/// ```rust,no_run
/// use libhttpd::storage::{File, Filesystem};
///
/// fn file_len<F: Filesystem>(fs: &mut F, path: &str) -> Result<usize, F::Error> {
///     let mut file = fs.open(path)?;
///     let mut total = 0;
///     let mut chunk = [0u8; 64];
///     loop {
///         let n = file.read(&mut chunk)?;
///         if n == 0 {
///             break;
///         }
///         total += n;
///     }
///     file.close();
///     Ok(total)
/// }
/// ```
pub trait Filesystem {
    /// Handle type for an open file.
    type File: File<Error = Self::Error>;
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Open the file or directory at `path` for reading.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing exists at `path`
    fn open(&mut self, path: &str) -> Result<Self::File, Self::Error>;
}

/// An open file handle.
///
/// Handles must be released with [`close`](File::close). Callers in this crate guarantee that
/// on every exit path, including early returns.
pub trait File {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Whether the handle refers to a directory rather than a regular file.
    fn is_directory(&self) -> bool;

    /// Read up to `buf.len()` bytes. Returns `0` at end of file.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Release the handle. Calling it more than once has no further effect.
    fn close(&mut self);
}

/// Scoped file acquisition: closes the wrapped file when dropped.
pub(crate) struct FileGuard<F: File> {
    file: F,
}

impl<F: File> FileGuard<F> {
    pub(crate) fn new(file: F) -> Self {
        Self { file }
    }
}

impl<F: File> core::ops::Deref for FileGuard<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.file
    }
}

impl<F: File> core::ops::DerefMut for FileGuard<F> {
    fn deref_mut(&mut self) -> &mut F {
        &mut self.file
    }
}

impl<F: File> Drop for FileGuard<F> {
    fn drop(&mut self) {
        self.file.close();
    }
}
