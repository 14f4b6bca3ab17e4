//! Common `Content-Type` values and extension-based lookup for static files.

/// `text/plain`, also the default for text bodies sent without an explicit type.
pub const TEXT_PLAIN: &str = "text/plain";
/// `text/html`
pub const TEXT_HTML: &str = "text/html";
/// `text/css`
pub const TEXT_CSS: &str = "text/css";
/// `text/javascript`
pub const TEXT_JAVASCRIPT: &str = "text/javascript";
/// `application/json`
pub const APPLICATION_JSON: &str = "application/json";
/// `application/xml`
pub const APPLICATION_XML: &str = "application/xml";
/// `application/x-www-form-urlencoded`
pub const APPLICATION_X_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
/// `multipart/form-data`
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
/// `application/octet-stream`, for anything unrecognized.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
/// `image/png`
pub const IMAGE_PNG: &str = "image/png";
/// `image/svg+xml`
pub const IMAGE_SVG: &str = "image/svg+xml";
/// `image/x-icon`
pub const IMAGE_ICON: &str = "image/x-icon";

/// Guess the content type of a static file from its extension.
///
/// A trailing `.gz` is ignored, so `app.js.gz` maps to `text/javascript`; the caller decides
/// whether to send it with [`send_gzip`](super::ResponseWriter::send_gzip).
///
/// ```rust
/// use libhttpd::network::application::http::content_type;
///
/// assert_eq!(content_type::from_path("/index.html"), content_type::TEXT_HTML);
/// assert_eq!(content_type::from_path("/app.js.gz"), content_type::TEXT_JAVASCRIPT);
/// assert_eq!(content_type::from_path("/firmware.bin"), content_type::APPLICATION_OCTET_STREAM);
/// ```
pub fn from_path(path: &str) -> &'static str {
    let path = path.strip_suffix(".gz").unwrap_or(path);
    let Some((_, ext)) = path.rsplit_once('.') else {
        return APPLICATION_OCTET_STREAM;
    };
    const TABLE: [(&str, &str); 11] = [
        ("html", TEXT_HTML),
        ("htm", TEXT_HTML),
        ("css", TEXT_CSS),
        ("js", TEXT_JAVASCRIPT),
        ("json", APPLICATION_JSON),
        ("xml", APPLICATION_XML),
        ("txt", TEXT_PLAIN),
        ("png", IMAGE_PNG),
        ("svg", IMAGE_SVG),
        ("ico", IMAGE_ICON),
        ("csv", TEXT_PLAIN),
    ];
    TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(APPLICATION_OCTET_STREAM, |&(_, content_type)| content_type)
}
