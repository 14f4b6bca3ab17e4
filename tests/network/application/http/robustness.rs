//! Randomized input for the parser and writer. Seeded so failures reproduce.

use libhttpd::network::application::http::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::network::MockConnection;

const ALPHABET: &[&str] = &[
    "GET ", "POST ", "PUT ", "DELETE ", "Host: ", "Cookie: ", "Content-Length: ", ": ", "/",
    "?", "&", "=", ";", " ", "a", "Z", "9", "-", "é", "漢", "\t", "HTTP/1.1",
];

fn random_line(rng: &mut StdRng, max_tokens: usize) -> String {
    let tokens = rng.gen_range(0..max_tokens);
    (0..tokens)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn test_random_lines_never_exceed_capacity() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let mut parser = RequestParser::new();
        for _ in 0..rng.gen_range(1..20) {
            let line = random_line(&mut rng, 400);
            let before = parser.request().clone();
            match parser.consume_line(&line) {
                Ok(_) => {}
                Err(ParseError::MalformedRequestLine) => {
                    assert_eq!(parser.request(), &before);
                }
            }

            let request = parser.request();
            assert!(request.url().len() <= MAX_URL_LEN);
            assert!(request.params().len() <= MAX_QUERY_LEN);
            assert!(request.host().len() <= MAX_HOST_LEN);
            assert!(request.cookies().len() <= MAX_COOKIE_LEN);
            assert!(request.content_type().len() <= MAX_CONTENT_TYPE_LEN);

            // Lookups must not panic on arbitrary stored text.
            let _ = request.param("a");
            let _ = request.cookie("Z");
        }
    }
}

#[test]
fn test_method_is_sticky() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let mut parser = RequestParser::new();
        parser.consume_line("PUT /fixed HTTP/1.1").unwrap();
        for _ in 0..10 {
            let line = random_line(&mut rng, 40);
            let _ = parser.consume_line(&line);
            assert_eq!(parser.request().method(), Method::Put);
            assert_eq!(parser.request().url(), "/fixed");
        }
    }
}

#[test]
fn test_random_header_values_cannot_break_framing() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let mut response = ResponseWriter::new(MockConnection::new());
        let mut value = random_line(&mut rng, 10);
        if rng.gen_bool(0.5) {
            value.insert(0, if rng.gen_bool(0.5) { '\r' } else { '\n' });
        }
        let _ = response.add_header("X-Random", &value);
        response.send("body").unwrap();

        let out = response.connection().written();
        assert_eq!(out.matches("\r\n\r\n").count(), 1);
        assert!(out.ends_with("\r\n\r\nbody"));
    }
}
