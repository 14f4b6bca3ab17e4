use libhttpd::network::application::http::*;

fn parse(lines: &[&str]) -> RequestParser {
    let mut parser = RequestParser::new();
    for line in lines {
        parser.consume_line(line).unwrap();
    }
    parser
}

#[test]
fn test_request_line_for_every_verb() {
    for (verb, method) in [
        ("GET", Method::Get),
        ("POST", Method::Post),
        ("PUT", Method::Put),
        ("DELETE", Method::Delete),
    ] {
        let mut line: heapless::String<64> = heapless::String::new();
        line.push_str(verb).unwrap();
        line.push_str(" /path?q=1 HTTP/1.1").unwrap();

        let mut parser = RequestParser::new();
        assert_eq!(parser.consume_line(&line), Ok(Line::RequestLine(method)));

        let request = parser.request();
        assert_eq!(request.method(), method);
        assert!(request.method_is(method));
        assert_eq!(request.method().as_str(), verb);
        if method == Method::Get {
            assert_eq!(request.url(), "/path");
            assert!(request.has_query());
            assert_eq!(request.param("q"), Some("1"));
        } else {
            // The query is only split off for GET.
            assert_eq!(request.url(), "/path?q=1");
            assert!(!request.has_query());
        }
    }
}

#[test]
fn test_query_params_and_cookies() {
    let parser = parse(&[
        "GET /api/items?id=42&name=foo HTTP/1.1",
        "Cookie: session=abc; theme=dark",
    ]);
    let request = parser.request();

    assert_eq!(request.url(), "/api/items");
    assert_eq!(request.params(), "id=42&name=foo");
    assert_eq!(request.param("id"), Some("42"));
    assert_eq!(request.param("name"), Some("foo"));
    assert_eq!(request.param("missing"), None);
    assert!(request.param_exists("name"));
    assert!(!request.param_exists("nam"));

    assert_eq!(request.cookies(), "session=abc; theme=dark");
    assert_eq!(request.cookie("session"), Some("abc"));
    assert_eq!(request.cookie("theme"), Some("dark"));
    assert_eq!(request.cookie("lang"), None);
}

#[test]
fn test_exact_lookup_does_not_match_inside_other_keys() {
    let parser = parse(&["GET /x?valid=1 HTTP/1.1"]);
    assert_eq!(parser.request().param("id"), None);
    assert!(!parser.request().param_exists("id"));
}

#[test]
fn test_substring_lookup_keeps_legacy_behaviour() {
    let mut parser = RequestParser::with_options(Options {
        lookup: LookupMode::Substring,
        ..Options::default()
    });
    parser.consume_line("GET /x?valid=1&id=7 HTTP/1.1").unwrap();
    assert_eq!(parser.options().lookup, LookupMode::Substring);
    // "id" is first found inside "valid".
    assert_eq!(parser.request().param("id"), Some("1"));
}

#[test]
fn test_empty_query_is_still_a_query() {
    let parser = parse(&["GET /status? HTTP/1.1"]);
    let request = parser.request();
    assert_eq!(request.url(), "/status");
    assert!(request.has_query());
    assert_eq!(request.params(), "");
    assert_eq!(request.param("a"), None);
}

#[test]
fn test_path_normalization() {
    assert_eq!(parse(&["GET / HTTP/1.1"]).request().url(), "/");
    assert_eq!(parse(&["GET /foo/ HTTP/1.1"]).request().url(), "/foo");
    assert_eq!(parse(&["POST /foo/ HTTP/1.1"]).request().url(), "/foo");
    assert_eq!(parse(&["DELETE /a/b/ HTTP/1.1"]).request().url(), "/a/b");
    // Only one slash is stripped.
    assert_eq!(parse(&["GET /foo// HTTP/1.1"]).request().url(), "/foo/");
}

#[test]
fn test_url_is() {
    let parser = parse(&["PUT /config HTTP/1.1"]);
    assert!(parser.request().url_is("/config"));
    assert!(!parser.request().url_is("/config/"));
}

#[test]
fn test_known_headers_are_stored() {
    let mut parser = RequestParser::new();
    parser.consume_line("POST /upload HTTP/1.1").unwrap();

    assert_eq!(
        parser.consume_line("Content-Length: 1234"),
        Ok(Line::Known {
            header: KnownHeader::ContentLength,
            truncated: false
        })
    );
    parser.consume_line("Content-Type: application/json").unwrap();
    parser.consume_line("Host: sensor.local").unwrap();
    parser.consume_line("User-Agent: curl/8.0").unwrap();
    parser.consume_line("Authorization: Bearer abc").unwrap();

    let request = parser.request();
    assert_eq!(request.content_length(), 1234);
    assert_eq!(request.content_type(), "application/json");
    assert_eq!(request.host(), "sensor.local");
    assert_eq!(request.user_agent(), "curl/8.0");
    assert_eq!(request.authorization(), "Bearer abc");
    assert_eq!(request.bearer_token(), Ok("abc"));
}

#[test]
fn test_known_header_prefix_is_case_sensitive() {
    let mut parser = RequestParser::new();
    let line = parser.consume_line("host: lower.local").unwrap();
    assert_eq!(
        line,
        Line::Header(Header {
            name: "host",
            value: "lower.local"
        })
    );
    assert_eq!(parser.request().host(), "");
}

#[test]
fn test_later_known_header_overwrites() {
    let parser = parse(&["Host: first", "Host: second"]);
    assert_eq!(parser.request().host(), "second");
}

#[test]
fn test_later_content_length_wins() {
    let parser = parse(&["POST /a HTTP/1.1", "Content-Length: 10", "Content-Length: 20"]);
    assert_eq!(parser.request().content_length(), 20);

    let parser = parse(&["POST /a HTTP/1.1", "Content-Length: 5", "Content-Length: x"]);
    assert_eq!(parser.request().content_length(), 0);
}

#[test]
fn test_content_length_edge_cases() {
    assert_eq!(parse(&["Content-Length: abc"]).request().content_length(), 0);
    assert_eq!(parse(&["Content-Length: 12abc"]).request().content_length(), 12);
    assert_eq!(parse(&["Content-Length: "]).request().content_length(), 0);
}

#[test]
fn test_unknown_header_is_returned_not_stored() {
    let mut parser = RequestParser::new();
    parser.consume_line("GET / HTTP/1.1").unwrap();

    let line = parser.consume_line("X-Trace-Id: abc123").unwrap();
    assert_eq!(
        line.header(),
        Some(Header {
            name: "X-Trace-Id",
            value: "abc123"
        })
    );

    let request = parser.request();
    for value in [
        request.content_type(),
        request.host(),
        request.user_agent(),
        request.authorization(),
        request.cookies(),
    ] {
        assert!(!value.contains("abc123"));
    }
}

#[test]
fn test_header_splits_on_first_separator() {
    let mut parser = RequestParser::new();
    let line = parser.consume_line("X-Note: a: b").unwrap();
    assert_eq!(
        line.header(),
        Some(Header {
            name: "X-Note",
            value: "a: b"
        })
    );
}

#[test]
fn test_unrecognized_lines() {
    let mut parser = RequestParser::new();
    assert_eq!(parser.consume_line(""), Ok(Line::Unrecognized));
    assert_eq!(parser.consume_line("garbage"), Ok(Line::Unrecognized));
    assert_eq!(parser.consume_line("X-No-Space:value"), Ok(Line::Unrecognized));
    assert_eq!(parser.consume_line("PATCH /x HTTP/1.1"), Ok(Line::Unrecognized));
    assert_eq!(parser.request().method(), Method::Unknown);
}

#[test]
fn test_second_request_line_is_ignored() {
    let mut parser = RequestParser::new();
    parser.consume_line("GET /first HTTP/1.1").unwrap();
    assert_eq!(
        parser.consume_line("POST /second HTTP/1.1"),
        Ok(Line::Unrecognized)
    );
    assert_eq!(parser.request().method(), Method::Get);
    assert_eq!(parser.request().url(), "/first");
}

#[test]
fn test_headers_do_not_change_request_line() {
    let mut parser = RequestParser::new();
    parser.consume_line("GET /stable?x=1 HTTP/1.1").unwrap();
    for line in [
        "Host: a",
        "X-Other: b",
        "Cookie: c=d",
        "Content-Length: 9",
        "",
    ] {
        parser.consume_line(line).unwrap();
        assert_eq!(parser.request().method(), Method::Get);
        assert_eq!(parser.request().url(), "/stable");
        assert_eq!(parser.request().param("x"), Some("1"));
    }
}

#[test]
fn test_malformed_request_line_leaves_parser_untouched() {
    let mut parser = RequestParser::new();
    assert_eq!(
        parser.consume_line("GET /no-version"),
        Err(ParseError::MalformedRequestLine)
    );
    assert_eq!(parser.request().method(), Method::Unknown);
    assert_eq!(parser.request().url(), "");

    // The parser still accepts a proper request line afterwards.
    assert_eq!(
        parser.consume_line("GET /ok HTTP/1.1"),
        Ok(Line::RequestLine(Method::Get))
    );
}

#[test]
fn test_header_value_truncation() {
    let long = "a".repeat(MAX_HOST_LEN + 40);
    let mut line = String::from("Host: ");
    line.push_str(&long);

    let mut parser = RequestParser::new();
    assert_eq!(
        parser.consume_line(&line),
        Ok(Line::Known {
            header: KnownHeader::Host,
            truncated: true
        })
    );
    let request = parser.request();
    assert_eq!(request.host(), &long[..MAX_HOST_LEN]);
    assert!(request.is_truncated(Field::Host));
    assert!(!request.is_truncated(Field::UserAgent));
}

#[test]
fn test_value_exactly_at_capacity_is_not_truncated() {
    let value = "b".repeat(MAX_USER_AGENT_LEN);
    let mut line = String::from("User-Agent: ");
    line.push_str(&value);

    let parser = parse(&[&line]);
    assert_eq!(parser.request().user_agent(), value);
    assert!(!parser.request().is_truncated(Field::UserAgent));
}

#[test]
fn test_url_and_query_truncation() {
    let path = format!("/{}", "p".repeat(MAX_URL_LEN + 10));
    let query = format!("k={}", "v".repeat(MAX_QUERY_LEN));
    let line = format!("GET {path}?{query} HTTP/1.1");

    let parser = parse(&[&line]);
    let request = parser.request();
    assert_eq!(request.url(), &path[..MAX_URL_LEN]);
    assert_eq!(request.params(), &query[..MAX_QUERY_LEN]);
    assert!(request.is_truncated(Field::Url));
    assert!(request.is_truncated(Field::Query));
}

#[test]
fn test_into_request() {
    let request = parse(&["DELETE /items/3 HTTP/1.1", "Host: h"]).into_request();
    assert_eq!(request.method(), Method::Delete);
    assert_eq!(request.url(), "/items/3");
    assert_eq!(request.host(), "h");
}

#[test]
fn test_fresh_parser_is_empty() {
    let parser = RequestParser::default();
    let request = parser.request();
    assert_eq!(request.method(), Method::Unknown);
    assert_eq!(request.url(), "");
    assert_eq!(request.content_length(), 0);
    assert!(!request.has_query());
    assert_eq!(request.params(), "");
    assert_eq!(request.cookie("a"), None);
}
