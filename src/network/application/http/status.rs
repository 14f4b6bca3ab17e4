//! Response status codes.
//!
//! The associated constants cover the status codes a small device server typically needs,
//! grouped by class as in RFC 9110 §15. Anything else can be built with
//! [`StatusCode::new`].

/// A status code together with its reason phrase.
///
/// # Examples
///
/// ```rust
/// use libhttpd::network::application::http::StatusCode;
///
/// assert_eq!(StatusCode::NOT_FOUND.code(), 404);
/// assert_eq!(StatusCode::NOT_FOUND.reason(), "Not Found");
///
/// let custom = StatusCode::new(299, "Sensor Warming Up");
/// assert!(custom.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode {
    code: u16,
    reason: &'static str,
}

impl StatusCode {
    // 1xx Informational
    /// `100 Continue`
    pub const CONTINUE: StatusCode = StatusCode::new(100, "Continue");
    /// `101 Switching Protocols`
    pub const SWITCHING_PROTOCOLS: StatusCode = StatusCode::new(101, "Switching Protocols");

    // 2xx Successful
    /// `200 OK`
    pub const OK: StatusCode = StatusCode::new(200, "OK");
    /// `201 Created`
    pub const CREATED: StatusCode = StatusCode::new(201, "Created");
    /// `202 Accepted`
    pub const ACCEPTED: StatusCode = StatusCode::new(202, "Accepted");
    /// `204 No Content`
    pub const NO_CONTENT: StatusCode = StatusCode::new(204, "No Content");

    // 3xx Redirection
    /// `301 Moved Permanently`
    pub const MOVED_PERMANENTLY: StatusCode = StatusCode::new(301, "Moved Permanently");
    /// `302 Found`
    pub const FOUND: StatusCode = StatusCode::new(302, "Found");
    /// `304 Not Modified`
    pub const NOT_MODIFIED: StatusCode = StatusCode::new(304, "Not Modified");
    /// `307 Temporary Redirect`
    pub const TEMPORARY_REDIRECT: StatusCode = StatusCode::new(307, "Temporary Redirect");
    /// `308 Permanent Redirect`
    pub const PERMANENT_REDIRECT: StatusCode = StatusCode::new(308, "Permanent Redirect");

    // 4xx Client Error
    /// `400 Bad Request`
    pub const BAD_REQUEST: StatusCode = StatusCode::new(400, "Bad Request");
    /// `401 Unauthorized`
    pub const UNAUTHORIZED: StatusCode = StatusCode::new(401, "Unauthorized");
    /// `403 Forbidden`
    pub const FORBIDDEN: StatusCode = StatusCode::new(403, "Forbidden");
    /// `404 Not Found`
    pub const NOT_FOUND: StatusCode = StatusCode::new(404, "Not Found");
    /// `405 Method Not Allowed`
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode::new(405, "Method Not Allowed");
    /// `409 Conflict`
    pub const CONFLICT: StatusCode = StatusCode::new(409, "Conflict");
    /// `411 Length Required`
    pub const LENGTH_REQUIRED: StatusCode = StatusCode::new(411, "Length Required");
    /// `413 Payload Too Large`
    pub const PAYLOAD_TOO_LARGE: StatusCode = StatusCode::new(413, "Payload Too Large");
    /// `414 URI Too Long`
    pub const URI_TOO_LONG: StatusCode = StatusCode::new(414, "URI Too Long");
    /// `418 I'm a teapot`
    pub const IM_A_TEAPOT: StatusCode = StatusCode::new(418, "I'm a teapot");
    /// `422 Unprocessable Entity`
    pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode::new(422, "Unprocessable Entity");
    /// `423 Locked`
    pub const LOCKED: StatusCode = StatusCode::new(423, "Locked");
    /// `429 Too Many Requests`
    pub const TOO_MANY_REQUESTS: StatusCode = StatusCode::new(429, "Too Many Requests");
    /// `431 Request Header Fields Too Large`
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: StatusCode =
        StatusCode::new(431, "Request Header Fields Too Large");

    // 5xx Server Error
    /// `500 Internal Server Error`
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode::new(500, "Internal Server Error");
    /// `501 Not Implemented`
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode::new(501, "Not Implemented");
    /// `502 Bad Gateway`
    pub const BAD_GATEWAY: StatusCode = StatusCode::new(502, "Bad Gateway");
    /// `503 Service Unavailable`
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode::new(503, "Service Unavailable");
    /// `507 Insufficient Storage`
    pub const INSUFFICIENT_STORAGE: StatusCode = StatusCode::new(507, "Insufficient Storage");

    /// A status code with a custom reason phrase.
    ///
    /// `code` should be a three-digit value in `100..=999`; anything else is written as-is.
    pub const fn new(code: u16, reason: &'static str) -> Self {
        Self { code, reason }
    }

    /// Numeric code.
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Reason phrase.
    pub const fn reason(&self) -> &'static str {
        self.reason
    }

    /// `2xx`
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// `4xx` or `5xx`
    pub const fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// ASCII digits of the code, without leading zeros.
    pub(crate) fn digits(&self, buf: &mut [u8; 5]) -> usize {
        let mut n = self.code;
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        buf.copy_within(i.., 0);
        buf.len() - i
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusCode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u16} {=str}", self.code, self.reason)
    }
}
