//! Streaming HTTP/1.1 response writer.
//!
//! [`ResponseWriter`] writes straight to the connection: the status line, then headers, then
//! body bytes. Nothing is buffered beyond one chunk and nothing can be taken back once written.
//! The writer tracks where it is in the response and rejects calls that would produce
//! malformed output:
//!
//! ```text
//!  NotStarted ──begin()──▶ HeadersOpen ──send*()/finish()──▶ HeadersClosed
//!      │                      ▲   │ add_header()                  │ send*() appends body
//!      └──add_header()/send*()┘   └───────────────────────────────┘
//!
//!  any state ──transport failure──▶ Aborted
//! ```
//!
//! The first `send*` call (or [`finish`](ResponseWriter::finish)) closes the header block by
//! emitting `Content-Type` (unless the caller already added one), `Connection: close` and the
//! blank line. Later `send*` calls only append body bytes, which lets large bodies be written
//! in pieces.
//!
//! # Examples
//!
//! ```rust
//! use libhttpd::network::Write;
//! use libhttpd::network::application::http::{ResponseWriter, StatusCode, content_type};
//!
//! struct Sink(heapless::Vec<u8, 256>);
//!
//! impl Write for Sink {
//!     type Error = ();
//!     fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
//!         self.0.extend_from_slice(buf)?;
//!         Ok(buf.len())
//!     }
//!     fn flush(&mut self) -> Result<(), ()> { Ok(()) }
//! }
//!
//! let mut response = ResponseWriter::new(Sink(heapless::Vec::new()));
//! response.begin(StatusCode::OK).unwrap();
//! response.add_header("Cache-Control", "no-store").unwrap();
//! response.send_with(content_type::APPLICATION_JSON, "{\"temp\":21.5}").unwrap();
//!
//! let Sink(bytes) = response.into_inner();
//! assert_eq!(
//!     core::str::from_utf8(&bytes).unwrap(),
//!     "HTTP/1.1 200 OK\r\n\
//!      Cache-Control: no-store\r\n\
//!      Content-Type: application/json\r\n\
//!      Connection: close\r\n\
//!      \r\n\
//!      {\"temp\":21.5}"
//! );
//! ```

use serde::Serialize;

use super::content_type;
use super::status::StatusCode;
use crate::network::Write;
use crate::storage::{File, FileGuard, Filesystem, ReadStorage};

/// Chunk size used when streaming bodies from storage or files.
pub const CHUNK_SIZE: usize = 512;

/// Largest JSON body [`ResponseWriter::send_json`] can serialize.
pub const MAX_JSON_LEN: usize = 512;

/// In-band body written by [`ResponseWriter::send_file`] when the path does not exist.
pub const FILE_NOT_FOUND_BODY: &str = "File not found";

/// In-band body written by [`ResponseWriter::send_file`] when the path is a directory.
pub const IS_DIRECTORY_BODY: &str = "Is a directory";

/// Where the writer is in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing written yet.
    NotStarted,
    /// Status line written; headers may follow.
    HeadersOpen,
    /// Header block terminated; only body bytes may follow.
    HeadersClosed,
    /// A write failed. The response is unusable.
    Aborted,
}

/// Errors returned by [`ResponseWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The connection reported an error. The writer is now [`State::Aborted`].
    Transport(E),
    /// The connection accepted zero bytes. The writer is now [`State::Aborted`].
    ConnectionClosed,
    /// [`begin`](ResponseWriter::begin) after the status line was already written.
    StatusAlreadySent,
    /// [`add_header`](ResponseWriter::add_header) after the header block was closed.
    HeaderAfterBody,
    /// A header name or value contains CR or LF, or the name is empty or contains `:`.
    InvalidHeader,
    /// The writer was already aborted by an earlier failure.
    Aborted,
    /// Reading the body from storage failed, or the range is out of bounds.
    Storage,
    /// The value does not serialize into [`MAX_JSON_LEN`] bytes.
    Serialize,
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(_) => f.write_str("transport write failed"),
            Error::ConnectionClosed => f.write_str("connection closed"),
            Error::StatusAlreadySent => f.write_str("status line already sent"),
            Error::HeaderAfterBody => f.write_str("header added after header block was closed"),
            Error::InvalidHeader => f.write_str("invalid header name or value"),
            Error::Aborted => f.write_str("response already aborted"),
            Error::Storage => f.write_str("failed to read body from storage"),
            Error::Serialize => f.write_str("failed to serialize body"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(_) => defmt::write!(f, "Transport"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::StatusAlreadySent => defmt::write!(f, "StatusAlreadySent"),
            Error::HeaderAfterBody => defmt::write!(f, "HeaderAfterBody"),
            Error::InvalidHeader => defmt::write!(f, "InvalidHeader"),
            Error::Aborted => defmt::write!(f, "Aborted"),
            Error::Storage => defmt::write!(f, "Storage"),
            Error::Serialize => defmt::write!(f, "Serialize"),
        }
    }
}

/// Result of [`ResponseWriter::send_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was streamed; carries the number of body bytes written.
    Sent(usize),
    /// Nothing at the path, or it could not be opened. [`FILE_NOT_FOUND_BODY`] was written as
    /// the body.
    NotFound,
    /// The path is a directory. [`IS_DIRECTORY_BODY`] was written as the body.
    IsDirectory,
}

/// Writes one HTTP response to a connection.
#[derive(Debug)]
pub struct ResponseWriter<W: Write> {
    connection: W,
    state: State,
    content_type_sent: bool,
}

impl<W: Write> ResponseWriter<W> {
    /// Start a response on `connection`.
    pub fn new(connection: W) -> Self {
        Self {
            connection,
            state: State::NotStarted,
            content_type_sent: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the header block has been terminated.
    pub fn headers_sent(&self) -> bool {
        self.state == State::HeadersClosed
    }

    /// The underlying connection.
    pub fn connection(&self) -> &W {
        &self.connection
    }

    /// Give back the connection.
    pub fn into_inner(self) -> W {
        self.connection
    }

    /// Write the status line `HTTP/1.1 <code> <reason>`.
    ///
    /// # Errors
    ///
    /// - [`Error::StatusAlreadySent`] if called after the status line was written, including
    ///   the implicit `200 OK` written by an earlier `add_header`/`send*`
    /// - [`Error::Transport`] / [`Error::ConnectionClosed`] on write failure
    pub fn begin(&mut self, status: StatusCode) -> Result<(), Error<W::Error>> {
        match self.state {
            State::NotStarted => {}
            State::Aborted => return Err(Error::Aborted),
            State::HeadersOpen | State::HeadersClosed => return Err(Error::StatusAlreadySent),
        }
        if contains_line_break(status.reason()) {
            return Err(Error::InvalidHeader);
        }

        let mut digits = [0u8; 5];
        let n = status.digits(&mut digits);
        self.write_all(b"HTTP/1.1 ")?;
        self.write_all(&digits[..n])?;
        self.write_all(b" ")?;
        self.write_all(status.reason().as_bytes())?;
        self.write_all(b"\r\n")?;
        self.state = State::HeadersOpen;

        debug!("status {} {}", status.code(), status.reason());
        Ok(())
    }

    /// Write one `name: value` header line.
    ///
    /// Without a prior [`begin`](Self::begin), `200 OK` is written first. Adding a
    /// `Content-Type` here suppresses the one `send*` would otherwise emit.
    ///
    /// # Errors
    ///
    /// - [`Error::HeaderAfterBody`] once the header block is closed
    /// - [`Error::InvalidHeader`] for an empty name, or CR/LF in name or value
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), Error<W::Error>> {
        match self.state {
            State::Aborted => return Err(Error::Aborted),
            State::HeadersClosed => return Err(Error::HeaderAfterBody),
            State::NotStarted | State::HeadersOpen => {}
        }
        if name.is_empty() || name.contains(':') || contains_line_break(name) {
            return Err(Error::InvalidHeader);
        }
        if contains_line_break(value) {
            return Err(Error::InvalidHeader);
        }

        self.ensure_started()?;
        self.write_header(name, value)?;
        if name.eq_ignore_ascii_case("Content-Type") {
            self.content_type_sent = true;
        }
        Ok(())
    }

    /// Send a text body as `text/plain` (unless a `Content-Type` header was added).
    ///
    /// The text is written as-is; no line terminator is appended.
    pub fn send(&mut self, text: &str) -> Result<(), Error<W::Error>> {
        self.send_with(content_type::TEXT_PLAIN, text)
    }

    /// Send a text body with the given content type.
    pub fn send_with(&mut self, content_type: &str, text: &str) -> Result<(), Error<W::Error>> {
        self.send_bytes(content_type, text.as_bytes())
    }

    /// Send a binary body with the given content type.
    pub fn send_bytes(&mut self, content_type: &str, body: &[u8]) -> Result<(), Error<W::Error>> {
        self.close_headers(Some(content_type))?;
        self.write_all(body)
    }

    /// Send a pre-compressed body, adding `Content-Encoding: gzip`.
    ///
    /// The encoding header is only emitted while the header block is still open; appending
    /// to an already started body writes the bytes as-is.
    pub fn send_gzip(&mut self, content_type: &str, body: &[u8]) -> Result<(), Error<W::Error>> {
        if self.state == State::Aborted {
            return Err(Error::Aborted);
        }
        if contains_line_break(content_type) {
            return Err(Error::InvalidHeader);
        }
        if matches!(self.state, State::NotStarted | State::HeadersOpen) {
            self.add_header("Content-Encoding", "gzip")?;
        }
        self.send_bytes(content_type, body)
    }

    /// Stream `len` bytes starting at `offset` of persistent storage as the body.
    ///
    /// The range is checked against the storage capacity before anything is written.
    ///
    /// # Errors
    ///
    /// - [`Error::Storage`] if the range is out of bounds (nothing written), or a read fails
    ///   part-way (the writer is then aborted)
    pub fn send_from_storage<S: ReadStorage>(
        &mut self,
        content_type: &str,
        storage: &mut S,
        offset: u32,
        len: usize,
    ) -> Result<(), Error<W::Error>> {
        let in_bounds = (offset as usize)
            .checked_add(len)
            .is_some_and(|end| end <= storage.capacity());
        if !in_bounds {
            warn!("storage range out of bounds: {} + {}", offset, len);
            return Err(Error::Storage);
        }

        self.close_headers(Some(content_type))?;

        let mut chunk = [0u8; CHUNK_SIZE];
        let mut done = 0;
        while done < len {
            let n = (len - done).min(CHUNK_SIZE);
            let at = u32::try_from(done)
                .ok()
                .and_then(|done| offset.checked_add(done));
            let Some(at) = at else {
                warn!("storage offset overflows: {} + {}", offset, done);
                self.state = State::Aborted;
                return Err(Error::Storage);
            };
            if storage.read(at, &mut chunk[..n]).is_err() {
                warn!("storage read failed at {}", offset as usize + done);
                self.state = State::Aborted;
                return Err(Error::Storage);
            }
            self.write_all(&chunk[..n])?;
            done += n;
        }
        Ok(())
    }

    /// Stream the file at `path` as the body.
    ///
    /// A missing path or a directory is not an error: the status line may already be on the
    /// wire, so the problem is reported in-band as a `text/plain` body and in the returned
    /// [`FileOutcome`]. Any failure of [`Filesystem::open`] counts as missing, whatever the
    /// filesystem's error says. The file handle is closed on every path out of this call.
    ///
    /// # Errors
    ///
    /// - [`Error::Storage`] if a read fails part-way (the writer is then aborted)
    /// - [`Error::Transport`] / [`Error::ConnectionClosed`] on write failure
    pub fn send_file<F: Filesystem>(
        &mut self,
        content_type: &str,
        fs: &mut F,
        path: &str,
    ) -> Result<FileOutcome, Error<W::Error>> {
        if self.state == State::Aborted {
            return Err(Error::Aborted);
        }
        if contains_line_break(content_type) {
            return Err(Error::InvalidHeader);
        }

        let file = match fs.open(path) {
            Ok(file) => file,
            Err(_) => {
                warn!("cannot open {}, reporting not found", path);
                self.send_with(content_type::TEXT_PLAIN, FILE_NOT_FOUND_BODY)?;
                return Ok(FileOutcome::NotFound);
            }
        };
        let mut file = FileGuard::new(file);
        if file.is_directory() {
            warn!("refusing to send directory: {}", path);
            self.send_with(content_type::TEXT_PLAIN, IS_DIRECTORY_BODY)?;
            return Ok(FileOutcome::IsDirectory);
        }

        self.close_headers(Some(content_type))?;

        let mut chunk = [0u8; CHUNK_SIZE];
        let mut total = 0;
        loop {
            let n = match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n.min(CHUNK_SIZE),
                Err(_) => {
                    warn!("read failed after {} bytes of {}", total, path);
                    self.state = State::Aborted;
                    return Err(Error::Storage);
                }
            };
            self.write_all(&chunk[..n])?;
            total += n;
        }
        trace!("sent {} bytes from {}", total, path);
        Ok(FileOutcome::Sent(total))
    }

    /// Serialize `value` as JSON and send it as `application/json`.
    ///
    /// # Errors
    ///
    /// - [`Error::Serialize`] if the JSON does not fit in [`MAX_JSON_LEN`] bytes; nothing is
    ///   written in that case
    pub fn send_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error<W::Error>> {
        let mut buf = [0u8; MAX_JSON_LEN];
        let len = serde_json_core::to_slice(value, &mut buf).map_err(|_| Error::Serialize)?;
        self.send_bytes(content_type::APPLICATION_JSON, &buf[..len])
    }

    /// Close the header block without a body or `Content-Type`, then flush.
    ///
    /// Use for bodiless responses such as `204 No Content`. Calling it after a body was sent
    /// only flushes.
    pub fn finish(&mut self) -> Result<(), Error<W::Error>> {
        self.close_headers(None)?;
        self.flush()
    }

    /// Flush the connection.
    pub fn flush(&mut self) -> Result<(), Error<W::Error>> {
        if self.state == State::Aborted {
            return Err(Error::Aborted);
        }
        self.connection.flush().map_err(|e| {
            self.state = State::Aborted;
            Error::Transport(e)
        })
    }

    /// Write `200 OK` if no status line has been written yet.
    fn ensure_started(&mut self) -> Result<(), Error<W::Error>> {
        if self.state == State::NotStarted {
            self.begin(StatusCode::OK)?;
        }
        Ok(())
    }

    /// Terminate the header block once; later calls are no-ops.
    fn close_headers(&mut self, content_type: Option<&str>) -> Result<(), Error<W::Error>> {
        match self.state {
            State::Aborted => return Err(Error::Aborted),
            State::HeadersClosed => return Ok(()),
            State::NotStarted | State::HeadersOpen => {}
        }
        if content_type.is_some_and(contains_line_break) {
            return Err(Error::InvalidHeader);
        }

        self.ensure_started()?;
        if let Some(content_type) = content_type {
            if !self.content_type_sent {
                self.write_header("Content-Type", content_type)?;
                self.content_type_sent = true;
            }
        }
        self.write_all(b"Connection: close\r\n\r\n")?;
        self.state = State::HeadersClosed;

        trace!("header block closed");
        Ok(())
    }

    fn write_header(&mut self, name: &str, value: &str) -> Result<(), Error<W::Error>> {
        self.write_all(name.as_bytes())?;
        self.write_all(b": ")?;
        self.write_all(value.as_bytes())?;
        self.write_all(b"\r\n")
    }

    /// Write all of `bytes`, looping over partial writes. Any failure aborts the response.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Error<W::Error>> {
        let mut rest = bytes;
        while !rest.is_empty() {
            match self.connection.write(rest) {
                Ok(0) => {
                    warn!("connection accepted no bytes, response aborted");
                    self.state = State::Aborted;
                    return Err(Error::ConnectionClosed);
                }
                Ok(n) => rest = &rest[n.min(rest.len())..],
                Err(e) => {
                    warn!("transport write failed, response aborted");
                    self.state = State::Aborted;
                    return Err(Error::Transport(e));
                }
            }
        }
        Ok(())
    }
}

fn contains_line_break(s: &str) -> bool {
    s.bytes().any(|b| b == b'\r' || b == b'\n')
}
