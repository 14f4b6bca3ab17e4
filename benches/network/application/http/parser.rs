use criterion::{Criterion, Throughput};
use std::hint::black_box;
use libhttpd::network::application::http::{LookupMode, Options, RequestParser};

const REQUEST: &[&str] = &[
    "GET /api/items?id=42&name=foo&page=3&sort=desc HTTP/1.1",
    "Host: device.local",
    "User-Agent: Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0",
    "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    "Accept-Language: en-US,en;q=0.5",
    "Accept-Encoding: gzip, deflate",
    "Cookie: session=abc123; theme=dark; lang=en",
    "Connection: keep-alive",
    "",
];

pub fn bench_consume_request(c: &mut Criterion) {
    let bytes: usize = REQUEST.iter().map(|line| line.len() + 2).sum();

    let mut group = c.benchmark_group("http_parser");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("consume_request", |b| {
        b.iter(|| {
            let mut parser = RequestParser::new();
            for line in REQUEST {
                let _ = parser.consume_line(black_box(line));
            }
            black_box(parser.request().method());
        })
    });
    group.finish();
}

pub fn bench_param_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_lookup");
    for (name, lookup) in [("exact", LookupMode::Exact), ("substring", LookupMode::Substring)] {
        let mut parser = RequestParser::with_options(Options {
            lookup,
            ..Options::default()
        });
        for line in REQUEST {
            let _ = parser.consume_line(line);
        }
        let request = parser.into_request();

        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(request.param(black_box("sort")));
                black_box(request.cookie(black_box("lang")));
            })
        });
    }
    group.finish();
}
