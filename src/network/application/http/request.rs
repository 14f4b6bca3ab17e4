//! Incremental, line-based HTTP/1.1 request parser.
//!
//! The parser is fed one line at a time (CRLF already stripped by the caller) and keeps the
//! request line and a handful of well-known headers in fixed-capacity fields. Every other
//! header is handed back to the caller as a borrowed [`Header`] and never stored.
//!
//! # Dispatch
//!
//! Each call to [`RequestParser::consume_line`] classifies the line as exactly one of:
//!
//! 1. the request line (`GET /path?query HTTP/1.1`), only while no method has been seen yet;
//! 2. a known header, matched by exact, case-sensitive prefix (`Content-Length: `,
//!    `Content-Type: `, `Host: `, `User-Agent: `, `Authorization: `, `Cookie: `);
//! 3. a generic `Name: value` header;
//! 4. anything else, including the blank line that ends the header block.
//!
//! Callers must not pre-filter lines; the order above is applied to every line.
//!
//! # Examples
//!
//! ```rust
//! use libhttpd::network::application::http::{Line, Method, RequestParser};
//!
//! let mut parser = RequestParser::new();
//! for line in [
//!     "GET /api/items?id=42&name=foo HTTP/1.1",
//!     "Host: device.local",
//!     "Cookie: session=abc; theme=dark",
//!     "X-Trace-Id: abc123",
//!     "",
//! ] {
//!     if let Line::Header(header) = parser.consume_line(line).unwrap() {
//!         assert_eq!(header.name, "X-Trace-Id");
//!     }
//! }
//!
//! let request = parser.request();
//! assert_eq!(request.method(), Method::Get);
//! assert_eq!(request.url(), "/api/items");
//! assert_eq!(request.param("id"), Some("42"));
//! assert_eq!(request.cookie("theme"), Some("dark"));
//! ```

use super::bounded::Bounded;
use super::lookup::{self, LookupMode};

/// Capacity of the request path, in bytes.
pub const MAX_URL_LEN: usize = 512;
/// Capacity of the raw query string, in bytes.
pub const MAX_QUERY_LEN: usize = 512;
/// Capacity of the `Content-Type` value, in bytes.
pub const MAX_CONTENT_TYPE_LEN: usize = 128;
/// Capacity of the `Host` value, in bytes.
pub const MAX_HOST_LEN: usize = 128;
/// Capacity of the `User-Agent` value, in bytes.
pub const MAX_USER_AGENT_LEN: usize = 128;
/// Capacity of the `Authorization` value, in bytes.
pub const MAX_AUTHORIZATION_LEN: usize = 256;
/// Capacity of the raw `Cookie` header, in bytes.
pub const MAX_COOKIE_LEN: usize = 512;

/// Request method.
///
/// Only the four verbs an embedded REST endpoint typically needs are recognized. A request
/// line with any other verb is not treated as a request line at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// No request line has been parsed yet.
    #[default]
    Unknown,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Recognized verbs with their trailing space, in match order.
    const VERBS: [(&'static str, Method); 4] = [
        ("GET ", Method::Get),
        ("POST ", Method::Post),
        ("PUT ", Method::Put),
        ("DELETE ", Method::Delete),
    ];

    /// Upper-case token for the method, or `"Unknown"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Unknown => "Unknown",
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Split `line` into its verb and the text after the verb's space.
    fn strip_verb(line: &str) -> Option<(Method, &str)> {
        Self::VERBS
            .iter()
            .find_map(|(token, method)| line.strip_prefix(token).map(|rest| (*method, rest)))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Headers with dedicated storage in [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownHeader {
    /// `Content-Length`
    ContentLength,
    /// `Content-Type`
    ContentType,
    /// `Host`
    Host,
    /// `User-Agent`
    UserAgent,
    /// `Authorization`
    Authorization,
    /// `Cookie`
    Cookie,
}

impl KnownHeader {
    /// All known headers, in match order.
    pub const ALL: [KnownHeader; 6] = [
        KnownHeader::ContentLength,
        KnownHeader::ContentType,
        KnownHeader::Host,
        KnownHeader::UserAgent,
        KnownHeader::Authorization,
        KnownHeader::Cookie,
    ];

    /// Canonical header name.
    pub fn name(&self) -> &'static str {
        match self {
            KnownHeader::ContentLength => "Content-Length",
            KnownHeader::ContentType => "Content-Type",
            KnownHeader::Host => "Host",
            KnownHeader::UserAgent => "User-Agent",
            KnownHeader::Authorization => "Authorization",
            KnownHeader::Cookie => "Cookie",
        }
    }

    /// Exact line prefix this header is recognized by.
    fn prefix(&self) -> &'static str {
        match self {
            KnownHeader::ContentLength => "Content-Length: ",
            KnownHeader::ContentType => "Content-Type: ",
            KnownHeader::Host => "Host: ",
            KnownHeader::UserAgent => "User-Agent: ",
            KnownHeader::Authorization => "Authorization: ",
            KnownHeader::Cookie => "Cookie: ",
        }
    }
}

/// Stored text fields of a [`Request`], for querying truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Request path
    Url,
    /// Raw query string
    Query,
    /// `Content-Type` value
    ContentType,
    /// `Host` value
    Host,
    /// `User-Agent` value
    UserAgent,
    /// `Authorization` value
    Authorization,
    /// Raw `Cookie` header
    Cookie,
}

/// A header the parser does not store, borrowed from the consumed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Text before the first `": "`.
    pub name: &'a str,
    /// Text after the first `": "`, unmodified.
    pub value: &'a str,
}

/// What a single consumed line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// The request line; the method is now set.
    RequestLine(Method),
    /// A known header, now stored. `truncated` is set when the value did not fit.
    Known {
        /// Which header was stored.
        header: KnownHeader,
        /// Whether the stored value was clipped to capacity.
        truncated: bool,
    },
    /// Any other `Name: value` line. Nothing is stored.
    Header(Header<'a>),
    /// Not a recognized line: blank lines, stray request lines, malformed trailers.
    Unrecognized,
}

impl<'a> Line<'a> {
    /// The generic header carried by this line, if any.
    pub fn header(&self) -> Option<Header<'a>> {
        match self {
            Line::Header(header) => Some(*header),
            _ => None,
        }
    }
}

/// Errors reported by [`RequestParser::consume_line`].
///
/// A failed call leaves the parser exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A request line with a recognized verb but no space after the target.
    MalformedRequestLine,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MalformedRequestLine => f.write_str("malformed request line"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParseError::MalformedRequestLine => defmt::write!(f, "MalformedRequestLine"),
        }
    }
}

/// Parser behaviour switches.
///
/// ```rust
/// use libhttpd::network::application::http::{LookupMode, Options, RequestParser};
///
/// let parser = RequestParser::with_options(Options {
///     lookup: LookupMode::Substring,
///     ..Options::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How query parameters and cookies are looked up.
    pub lookup: LookupMode,
    /// Strip one trailing `/` from the path (the root path `/` is always kept).
    pub strip_trailing_slash: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lookup: LookupMode::Exact,
            strip_trailing_slash: true,
        }
    }
}

/// The parsed request.
///
/// Every field starts empty (or `0`/[`Method::Unknown`]) and is only changed by
/// [`RequestParser::consume_line`]. A new request needs a new parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: Bounded<MAX_URL_LEN>,
    query: Bounded<MAX_QUERY_LEN>,
    has_query: bool,
    content_length: usize,
    content_type: Bounded<MAX_CONTENT_TYPE_LEN>,
    host: Bounded<MAX_HOST_LEN>,
    user_agent: Bounded<MAX_USER_AGENT_LEN>,
    authorization: Bounded<MAX_AUTHORIZATION_LEN>,
    cookies: Bounded<MAX_COOKIE_LEN>,
    lookup: LookupMode,
}

impl Request {
    fn new(lookup: LookupMode) -> Self {
        Self {
            method: Method::Unknown,
            url: Bounded::new(),
            query: Bounded::new(),
            has_query: false,
            content_length: 0,
            content_type: Bounded::new(),
            host: Bounded::new(),
            user_agent: Bounded::new(),
            authorization: Bounded::new(),
            cookies: Bounded::new(),
            lookup,
        }
    }

    /// The request method, [`Method::Unknown`] until a request line is parsed.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Whether the request method is `method`.
    pub fn method_is(&self, method: Method) -> bool {
        self.method == method
    }

    /// Request path without the query string.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Exact comparison against the request path.
    pub fn url_is(&self, url: &str) -> bool {
        self.url.as_str() == url
    }

    /// Declared body length, `0` if absent or not numeric.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// `Content-Type` value, empty if absent.
    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    /// `Host` value, empty if absent.
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// `User-Agent` value, empty if absent.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_str()
    }

    /// Raw `Authorization` value, empty if absent.
    pub fn authorization(&self) -> &str {
        self.authorization.as_str()
    }

    /// Raw `Cookie` header, empty if absent.
    pub fn cookies(&self) -> &str {
        self.cookies.as_str()
    }

    /// Value of the cookie `name`, if present.
    ///
    /// The result borrows from the stored `Cookie` header, so it can never be longer than
    /// [`MAX_COOKIE_LEN`].
    pub fn cookie(&self, name: &str) -> Option<&str> {
        lookup::find(self.cookies.as_str(), name, ';', self.lookup)
    }

    /// Whether the request target carried a `?`, even with nothing after it.
    pub fn has_query(&self) -> bool {
        self.has_query
    }

    /// Raw query string, empty if there was none.
    pub fn params(&self) -> &str {
        if self.has_query {
            self.query.as_str()
        } else {
            ""
        }
    }

    /// Value of the query parameter `name`, if present.
    ///
    /// A parameter without `=` yields `Some("")`. The result borrows from the stored query,
    /// so it can never be longer than [`MAX_QUERY_LEN`].
    pub fn param(&self, name: &str) -> Option<&str> {
        lookup::find(self.params(), name, '&', self.lookup)
    }

    /// Whether the query parameter `name` is present.
    pub fn param_exists(&self, name: &str) -> bool {
        lookup::contains(self.params(), name, '&', self.lookup)
    }

    /// Whether the stored value of `field` was clipped to its capacity.
    pub fn is_truncated(&self, field: Field) -> bool {
        match field {
            Field::Url => self.url.is_truncated(),
            Field::Query => self.query.is_truncated(),
            Field::ContentType => self.content_type.is_truncated(),
            Field::Host => self.host.is_truncated(),
            Field::UserAgent => self.user_agent.is_truncated(),
            Field::Authorization => self.authorization.is_truncated(),
            Field::Cookie => self.cookies.is_truncated(),
        }
    }
}

/// Line-at-a-time request parser. Create one per connection.
#[derive(Debug, Clone)]
pub struct RequestParser {
    request: Request,
    options: Options,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestParser {
    /// A parser with default [`Options`].
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// A parser with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            request: Request::new(options.lookup),
            options,
        }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The request parsed so far.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Consume the parser, keeping the parsed request.
    pub fn into_request(self) -> Request {
        self.request
    }

    /// Classify and absorb one line.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedRequestLine`] if the line starts with a recognized verb while
    ///   no method is set, but has no space after the request target. Nothing is modified.
    pub fn consume_line<'a>(&mut self, line: &'a str) -> Result<Line<'a>, ParseError> {
        if self.request.method == Method::Unknown {
            if let Some((method, rest)) = Method::strip_verb(line) {
                return self.request_line(method, rest);
            }
        }

        for header in KnownHeader::ALL {
            if let Some(value) = line.strip_prefix(header.prefix()) {
                let truncated = self.store(header, value);
                return Ok(Line::Known { header, truncated });
            }
        }

        Ok(match line.split_once(": ") {
            Some((name, value)) => Line::Header(Header { name, value }),
            None => Line::Unrecognized,
        })
    }

    fn request_line<'a>(&mut self, method: Method, rest: &str) -> Result<Line<'a>, ParseError> {
        let Some((target, _version)) = rest.split_once(' ') else {
            warn!("malformed request line for {}", method.as_str());
            return Err(ParseError::MalformedRequestLine);
        };

        let (path, query) = match (method, target.split_once('?')) {
            (Method::Get, Some((path, query))) => (path, Some(query)),
            _ => (target, None),
        };
        let path = match path.strip_suffix('/') {
            Some(stripped) if self.options.strip_trailing_slash && path.len() > 1 => stripped,
            _ => path,
        };

        if self.request.url.set(path) {
            warn!("request path truncated to {} bytes", MAX_URL_LEN);
        }
        if let Some(query) = query {
            if self.request.query.set(query) {
                warn!("query string truncated to {} bytes", MAX_QUERY_LEN);
            }
            self.request.has_query = true;
        }
        self.request.method = method;

        debug!("request line: {} {}", method.as_str(), self.request.url.as_str());
        Ok(Line::RequestLine(method))
    }

    /// Store a known header value; returns whether it was truncated.
    fn store(&mut self, header: KnownHeader, value: &str) -> bool {
        let request = &mut self.request;
        let truncated = match header {
            KnownHeader::ContentLength => {
                request.content_length = parse_content_length(value);
                false
            }
            KnownHeader::ContentType => request.content_type.set(value),
            KnownHeader::Host => request.host.set(value),
            KnownHeader::UserAgent => request.user_agent.set(value),
            KnownHeader::Authorization => request.authorization.set(value),
            KnownHeader::Cookie => request.cookies.set(value),
        };
        if truncated {
            warn!("{} value truncated", header.name());
        }
        truncated
    }
}

/// Leading-digit decimal parse: skips leading whitespace, stops at the first non-digit.
/// No digits, or a value that overflows `usize`, yields `0`.
fn parse_content_length(value: &str) -> usize {
    let digits = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}
