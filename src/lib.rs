//! # libhttpd - HTTP/1.1 server core for microcontrollers
//!
//! The request/response half of a small on-device web server: a line-based request parser
//! and a streaming response writer. Sockets, line splitting, routing and concurrency are
//! left to the application. This library is designed for embedded systems and supports
//! `no_std` environments; nothing here allocates.
//!
//! ## Features
//!
//! ### Request parsing
//! - Line-at-a-time parsing of `GET`, `POST`, `PUT` and `DELETE` requests
//! - Fixed-capacity storage for the path, query and well-known headers, with truncation flags
//! - Query parameter and cookie lookup
//! - `Basic` and `Bearer` authorization helpers
//!
//! ### Response writing
//! - Status line, headers and body written straight to the connection
//! - Bodies from strings, byte slices, gzip blobs, JSON values, persistent storage or files
//! - Ordering errors (headers after body, second status line) reported instead of emitted
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhttpd = "0.1.0"
//! ```
//!
//! ### Serving a request
//!
//! ```rust
//! use libhttpd::network::Write;
//! use libhttpd::network::application::http::{RequestParser, ResponseWriter, StatusCode};
//! # struct Sink(heapless::Vec<u8, 512>);
//! # impl Write for Sink {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
//! #         self.0.extend_from_slice(buf)?;
//! #         Ok(buf.len())
//! #     }
//! #     fn flush(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! let mut parser = RequestParser::new();
//! for line in ["DELETE /api/items/7/ HTTP/1.1", "Host: device.local", ""] {
//!     parser.consume_line(line).unwrap();
//! }
//! assert_eq!(parser.request().url(), "/api/items/7");
//!
//! let mut response = ResponseWriter::new(Sink(heapless::Vec::new()));
//! response.begin(StatusCode::NO_CONTENT).unwrap();
//! response.finish().unwrap();
//!
//! let Sink(bytes) = response.into_inner();
//! assert_eq!(
//!     &bytes[..],
//!     b"HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n"
//! );
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, Xtensa)
//! - Linux-based devices, through the `std` adapter
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

/// Network layer: the transport boundary and the HTTP protocol core.
///
/// This module contains the [`Write`](network::Write) trait responses are written to and the
/// HTTP/1.1 request parser and response writer.
pub mod network;

/// Storage collaborators for streaming response bodies.
///
/// Provides the interfaces the response writer reads persistent memory and files through.
pub mod storage;
