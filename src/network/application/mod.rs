//! # Application Layer Protocols
//!
//! Protocols that sit on top of the transport boundary in [`crate::network`]. Each one works
//! with any type implementing [`Write`](crate::network::Write) and keeps to fixed-size
//! buffers.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 request parser and response writer for on-device web servers

/// HTTP/1.1 server core.
///
/// Parses requests line by line and streams responses to the connection.
pub mod http;
