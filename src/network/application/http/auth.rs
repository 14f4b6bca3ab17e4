//! `Authorization` header helpers.
//!
//! Only the two schemes an embedded admin page usually meets are decoded: `Basic` and
//! `Bearer`. The scheme name is compared case-insensitively.

use base64ct::{Base64, Encoding};

use super::request::Request;

/// Decoded `Basic` credentials, borrowed from the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    /// Text before the first `:`.
    pub username: &'a str,
    /// Text after the first `:`.
    pub password: &'a str,
}

/// Errors from decoding the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no `Authorization` header.
    Missing,
    /// The header uses a different scheme.
    UnsupportedScheme,
    /// The credentials are not valid base64.
    InvalidEncoding,
    /// The output buffer cannot hold the decoded credentials.
    BufferTooSmall,
    /// The decoded credentials are not UTF-8 or have no `:` separator.
    Malformed,
}

impl core::fmt::Display for AuthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthError::Missing => f.write_str("no authorization header"),
            AuthError::UnsupportedScheme => f.write_str("unsupported authorization scheme"),
            AuthError::InvalidEncoding => f.write_str("invalid base64 credentials"),
            AuthError::BufferTooSmall => f.write_str("credential buffer too small"),
            AuthError::Malformed => f.write_str("malformed credentials"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AuthError {}

#[cfg(feature = "defmt")]
impl defmt::Format for AuthError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            AuthError::Missing => defmt::write!(f, "Missing"),
            AuthError::UnsupportedScheme => defmt::write!(f, "UnsupportedScheme"),
            AuthError::InvalidEncoding => defmt::write!(f, "InvalidEncoding"),
            AuthError::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
            AuthError::Malformed => defmt::write!(f, "Malformed"),
        }
    }
}

impl Request {
    /// Split the `Authorization` value into scheme and parameters.
    fn auth_scheme(&self, scheme: &str) -> Result<&str, AuthError> {
        let value = self.authorization();
        if value.is_empty() {
            return Err(AuthError::Missing);
        }
        match value.split_once(' ') {
            Some((name, rest)) if name.eq_ignore_ascii_case(scheme) => Ok(rest.trim_matches(' ')),
            _ => Err(AuthError::UnsupportedScheme),
        }
    }

    /// Decode `Authorization: Basic <base64(user:password)>` into `buf`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libhttpd::network::application::http::RequestParser;
    ///
    /// let mut parser = RequestParser::new();
    /// parser.consume_line("GET /admin HTTP/1.1").unwrap();
    /// parser.consume_line("Authorization: Basic YWRtaW46czNjcmV0").unwrap();
    ///
    /// let mut buf = [0u8; 64];
    /// let creds = parser.request().basic_credentials(&mut buf).unwrap();
    /// assert_eq!(creds.username, "admin");
    /// assert_eq!(creds.password, "s3cret");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`AuthError`].
    pub fn basic_credentials<'b>(&self, buf: &'b mut [u8]) -> Result<Credentials<'b>, AuthError> {
        let encoded = self.auth_scheme("Basic")?;
        // Upper bound of the decoded length; padding only makes it shorter.
        let needed = encoded.len() / 4 * 3;
        let buf_len = buf.len();
        let decoded = Base64::decode(encoded, buf).map_err(|_| {
            if buf_len < needed {
                AuthError::BufferTooSmall
            } else {
                AuthError::InvalidEncoding
            }
        })?;
        let text = core::str::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;
        let (username, password) = text.split_once(':').ok_or(AuthError::Malformed)?;
        Ok(Credentials { username, password })
    }

    /// Token of `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Missing`] without an `Authorization` header
    /// - [`AuthError::UnsupportedScheme`] for any other scheme
    /// - [`AuthError::Malformed`] for an empty token
    pub fn bearer_token(&self) -> Result<&str, AuthError> {
        let token = self.auth_scheme("Bearer")?;
        if token.is_empty() {
            return Err(AuthError::Malformed);
        }
        Ok(token)
    }
}
