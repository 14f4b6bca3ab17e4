//! HTTP/1.1 server core for embedded systems.
//!
//! Two independent halves, both working without heap allocation:
//!
//! - [`RequestParser`]: fed one line at a time, keeps the request line and a handful of known
//!   headers in fixed-capacity fields and exposes them through [`Request`].
//! - [`ResponseWriter`]: writes the status line, headers and body straight to a
//!   [`Write`](crate::network::Write) connection, streaming bodies from memory, persistent
//!   storage or a filesystem.
//!
//! One parser and one writer serve one connection. Reading lines off the socket and routing
//! are left to the caller.
//!
//! # Usage
//!
//! ```rust
//! use libhttpd::network::Write;
//! use libhttpd::network::application::http::{
//!     Method, RequestParser, ResponseWriter, StatusCode,
//! };
//!
//! # struct Sink(heapless::Vec<u8, 512>);
//! # impl Write for Sink {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
//! #         self.0.extend_from_slice(buf)?;
//! #         Ok(buf.len())
//! #     }
//! #     fn flush(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//! let raw = "GET /led?state=on HTTP/1.1\r\nHost: lamp.local\r\n\r\n";
//!
//! let mut parser = RequestParser::new();
//! for line in raw.split("\r\n") {
//!     parser.consume_line(line).unwrap();
//! }
//! let request = parser.request();
//!
//! let mut response = ResponseWriter::new(Sink(heapless::Vec::new()));
//! if request.method_is(Method::Get) && request.url_is("/led") {
//!     let state = request.param("state").unwrap_or("off");
//!     response.send(state).unwrap();
//! } else {
//!     response.begin(StatusCode::NOT_FOUND).unwrap();
//!     response.send("no such resource").unwrap();
//! }
//! ```

mod auth;
mod bounded;
mod lookup;

/// Common content types and extension lookup.
pub mod content_type;

/// Line-based request parsing.
pub mod request;

/// Streaming response writer.
pub mod response;

/// Status codes and reason phrases.
pub mod status;

pub use auth::{AuthError, Credentials};
pub use lookup::LookupMode;
pub use request::{
    Field, Header, KnownHeader, Line, MAX_AUTHORIZATION_LEN, MAX_CONTENT_TYPE_LEN, MAX_COOKIE_LEN,
    MAX_HOST_LEN, MAX_QUERY_LEN, MAX_URL_LEN, MAX_USER_AGENT_LEN, Method, Options, ParseError,
    Request, RequestParser,
};
pub use response::{FileOutcome, ResponseWriter};
pub use status::StatusCode;
